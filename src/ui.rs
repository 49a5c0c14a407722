//! The surfaces the controller drives: map, screen and device position.

use crate::error::GeoError;
use crate::render::{ListItem, Marker};
use crate::types::Coords;
use std::time::Duration;

/// Animated move of the map view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pan {
    pub duration: Duration,
}

pub trait MapView {
    /// `pan` is `None` for an immediate jump.
    fn set_view(&mut self, center: Coords, zoom: u8, pan: Option<Pan>);
    fn add_marker(&mut self, marker: &Marker);
}

pub trait Screen {
    /// Blocking user-facing message.
    fn alert(&mut self, message: &str);
    /// Reveal the entry form with focus on the distance input.
    fn show_form(&mut self);
    fn hide_form(&mut self);
    /// Insert at the top of the list.
    fn insert_list_item(&mut self, item: &ListItem);
    fn clear_list(&mut self);
}

pub trait Geolocator {
    fn current_position(&mut self) -> Result<Coords, GeoError>;
}
