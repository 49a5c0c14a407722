#![deny(
    warnings,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo
)]
#![allow(clippy::multiple_crate_versions)]

use anyhow::{Result, bail};
use clap::Parser;
use pinlog::app::App;
use pinlog::config::AppConfig;
use pinlog::storage::SqliteStore;
use pinlog::term::{FixedPosition, TerminalMap, TerminalScreen};
use pinlog::{cli, utils};
use std::io;

#[macro_use]
extern crate pinlog;

type TermApp = App<SqliteStore, TerminalScreen, TerminalMap>;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    utils::init_logging(cli.verbose, cli.quiet);

    let store_path = match cli.store {
        Some(p) => p,
        None => utils::default_store_path()?,
    };
    let store = SqliteStore::open(&store_path)?;
    let config = AppConfig {
        zoom: cli.zoom,
        ..AppConfig::default()
    };

    let mut app = TermApp::start(config, store, TerminalScreen::default());
    let mut geo = FixedPosition::new(cli.home);
    let has_map = app.locate(&mut geo, TerminalMap::new);
    dlog!("started store={} has_map={has_map}", store_path.display());

    match cli.cmd.unwrap_or(cli::Cmd::List) {
        cli::Cmd::List => {}
        cli::Cmd::Add {
            kind,
            distance,
            duration,
            at,
        } => {
            if !has_map {
                bail!(
                    "the map needs a device position (--home LAT,LNG) before workouts can be added"
                );
            }
            app.on_map_click(at);
            app.form_mut()
                .set_kind(kind)
                .set_distance(distance)
                .set_duration(duration);
            let Some(w) = app.on_form_submit() else {
                bail!("workout was not recorded");
            };
            println!("added {} ({})", w.description(), w.id());
        }
        cli::Cmd::Focus { id } => {
            if !app.on_list_click(&id) {
                bail!("cannot center on {id}: no map or no such workout");
            }
            if let Some(map) = app.map() {
                println!("centered on {} at zoom {}", map.center(), map.zoom());
            }
            return Ok(());
        }
        cli::Cmd::Reset => {
            let has_map = app.reset(&mut geo, TerminalMap::new)?;
            println!("all workouts deleted");
            dlog!("reset has_map={has_map}");
            return Ok(());
        }
    }

    app.screen().print_list(&mut io::stdout().lock())?;
    Ok(())
}
