//! Terminal front end for the controller.

use crate::error::GeoError;
use crate::render::{ListItem, Marker};
use crate::types::Coords;
use crate::ui::{Geolocator, MapView, Pan, Screen};
use std::collections::VecDeque;
use std::io::{self, Write};

/// Collects list entries (newest first) and reports alerts on stderr.
#[derive(Debug, Default)]
pub struct TerminalScreen {
    items: VecDeque<ListItem>,
    alerts: Vec<String>,
    form_open: bool,
}

impl TerminalScreen {
    pub fn items(&self) -> impl Iterator<Item = &ListItem> {
        self.items.iter()
    }

    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    pub const fn is_form_open(&self) -> bool {
        self.form_open
    }

    pub fn print_list(&self, out: &mut impl Write) -> io::Result<()> {
        if self.items.is_empty() {
            writeln!(out, "No workouts yet.")?;
        }
        for item in &self.items {
            writeln!(out, "{item}")?;
        }
        Ok(())
    }
}

impl Screen for TerminalScreen {
    fn alert(&mut self, message: &str) {
        eprintln!("{message}");
        self.alerts.push(message.to_string());
    }

    fn show_form(&mut self) {
        self.form_open = true;
    }

    fn hide_form(&mut self) {
        self.form_open = false;
    }

    fn insert_list_item(&mut self, item: &ListItem) {
        self.items.push_front(item.clone());
    }

    fn clear_list(&mut self) {
        self.items.clear();
    }
}

/// A map that only remembers where it looks and which markers it carries.
#[derive(Debug, Clone, PartialEq)]
pub struct TerminalMap {
    center: Coords,
    zoom: u8,
    markers: Vec<Marker>,
}

impl TerminalMap {
    pub const fn new(center: Coords) -> Self {
        Self {
            center,
            zoom: 0,
            markers: Vec::new(),
        }
    }

    pub const fn center(&self) -> Coords {
        self.center
    }

    pub const fn zoom(&self) -> u8 {
        self.zoom
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }
}

impl MapView for TerminalMap {
    fn set_view(&mut self, center: Coords, zoom: u8, pan: Option<Pan>) {
        match pan {
            Some(p) => {
                tracing::info!(%center, zoom, pan_s = p.duration.as_secs_f64(), "panning map");
            }
            None => tracing::info!(%center, zoom, "map view"),
        }
        self.center = center;
        self.zoom = zoom;
    }

    fn add_marker(&mut self, marker: &Marker) {
        tracing::info!(at = %marker.at, popup = %marker.popup.content, "marker");
        self.markers.push(marker.clone());
    }
}

/// Device position given up front; `None` behaves like a denied request.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedPosition(Option<Coords>);

impl FixedPosition {
    pub const fn new(position: Option<Coords>) -> Self {
        Self(position)
    }
}

impl Geolocator for FixedPosition {
    fn current_position(&mut self) -> Result<Coords, GeoError> {
        self.0.ok_or(GeoError::Denied)
    }
}
