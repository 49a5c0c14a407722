use std::time::Duration;

pub const DEFAULT_ZOOM: u8 = 13;
pub const DEFAULT_STORAGE_KEY: &str = "workouts";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Zoom used when centering on the device and on a workout.
    pub zoom: u8,
    /// Key under which the workout list is saved.
    pub storage_key: String,
    pub pan_duration: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            zoom: DEFAULT_ZOOM,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            pan_duration: Duration::from_secs(1),
        }
    }
}
