use crate::config::DEFAULT_ZOOM;
use crate::types::{Coords, WorkoutType};
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use uuid::Uuid;

#[derive(Parser, Debug)]
#[command(
    name = "pinlog",
    about = "Log running and cycling workouts as pins on a map"
)]
pub struct Cli {
    /// SQLite file holding saved workouts.
    ///
    /// Default: workouts.sqlite3 in the platform data directory.
    #[arg(long, value_name = "PATH", global = true)]
    pub store: Option<PathBuf>,

    /// Device position as LAT,LNG. Without it the map stays unavailable.
    #[arg(long, value_name = "LAT,LNG", global = true, allow_hyphen_values = true)]
    pub home: Option<Coords>,

    /// Map zoom level
    #[arg(long, default_value_t = DEFAULT_ZOOM, global = true)]
    pub zoom: u8,

    /// Increase log verbosity (-v, -vv). Defaults to INFO.
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Decrease log verbosity (-q, -qq). Defaults to INFO.
    #[arg(short = 'q', long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    #[command(subcommand)]
    pub cmd: Option<Cmd>,
}

#[derive(Subcommand, Debug)]
pub enum Cmd {
    /// Show saved workouts, newest first (the default).
    List,
    /// Click the map at --at and submit the workout form.
    Add {
        /// running or cycling
        #[arg(long = "type", default_value = "running")]
        kind: WorkoutType,
        /// Distance in km, as typed into the form
        #[arg(long, allow_hyphen_values = true)]
        distance: String,
        /// Duration in minutes, as typed into the form
        #[arg(long, allow_hyphen_values = true)]
        duration: String,
        /// Where the workout happened, LAT,LNG
        #[arg(long, value_name = "LAT,LNG", allow_hyphen_values = true)]
        at: Coords,
    },
    /// Center the map on a saved workout.
    Focus { id: Uuid },
    /// Delete every saved workout.
    Reset,
}
