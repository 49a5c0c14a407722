use crate::error::{CoordsError, RecordError};
use chrono::{DateTime, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Latitude/longitude pair. Stored as `[lat, lng]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Coords {
    pub lat: f64,
    pub lng: f64,
}

impl Coords {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }
}

impl From<[f64; 2]> for Coords {
    fn from([lat, lng]: [f64; 2]) -> Self {
        Self { lat, lng }
    }
}

impl From<Coords> for [f64; 2] {
    fn from(c: Coords) -> Self {
        [c.lat, c.lng]
    }
}

impl fmt::Display for Coords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.5},{:.5}", self.lat, self.lng)
    }
}

/// Parses `LAT,LNG` (whitespace around either number is ignored).
impl FromStr for Coords {
    type Err = CoordsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lat, lng) = s
            .split_once(',')
            .ok_or_else(|| CoordsError::Format(s.to_string()))?;
        let lat = lat
            .trim()
            .parse::<f64>()
            .map_err(|_| CoordsError::Format(s.to_string()))?;
        let lng = lng
            .trim()
            .parse::<f64>()
            .map_err(|_| CoordsError::Format(s.to_string()))?;

        let c = Self::new(lat, lng);
        if !c.is_valid() {
            return Err(CoordsError::Range(s.to_string()));
        }
        Ok(c)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutType {
    #[default]
    Running,
    Cycling,
}

impl WorkoutType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Running => "running",
            Self::Cycling => "cycling",
        }
    }

    pub const fn icon(self) -> &'static str {
        match self {
            Self::Running => "🏃",
            Self::Cycling => "🚴",
        }
    }
}

impl fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkoutType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "running" => Ok(Self::Running),
            "cycling" => Ok(Self::Cycling),
            other => Err(format!("unknown workout type {other:?} (expected running or cycling)")),
        }
    }
}

/// Type-specific performance figure, tagged by `type` in storage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Metric {
    /// min/km
    Running { pace: f64 },
    /// km/h
    Cycling { speed: f64 },
}

impl Metric {
    pub fn compute(kind: WorkoutType, distance: f64, duration: f64) -> Self {
        match kind {
            WorkoutType::Running => Self::Running {
                pace: duration / distance,
            },
            WorkoutType::Cycling => Self::Cycling {
                speed: distance / (duration / 60.0),
            },
        }
    }

    pub const fn kind(&self) -> WorkoutType {
        match self {
            Self::Running { .. } => WorkoutType::Running,
            Self::Cycling { .. } => WorkoutType::Cycling,
        }
    }

    pub const fn value(&self) -> f64 {
        match *self {
            Self::Running { pace } => pace,
            Self::Cycling { speed } => speed,
        }
    }

    pub const fn unit(&self) -> &'static str {
        match self {
            Self::Running { .. } => "min/km",
            Self::Cycling { .. } => "km/h",
        }
    }
}

/// A single logged workout.
///
/// Everything is fixed at construction: `description` and the metric are
/// derived once and never recomputed. Distance and duration are trusted to be
/// positive; validation happens in [`crate::form`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    id: Uuid,
    date: DateTime<Utc>,
    coords: Coords,
    distance: f64,
    duration: f64,
    description: String,
    #[serde(flatten)]
    metric: Metric,
}

impl Workout {
    pub fn running(coords: Coords, distance: f64, duration: f64) -> Self {
        Self::new(WorkoutType::Running, coords, distance, duration)
    }

    pub fn cycling(coords: Coords, distance: f64, duration: f64) -> Self {
        Self::new(WorkoutType::Cycling, coords, distance, duration)
    }

    pub fn new(kind: WorkoutType, coords: Coords, distance: f64, duration: f64) -> Self {
        Self::created_at(kind, coords, distance, duration, Local::now())
    }

    /// Builds a workout as if it had been logged at `created`.
    pub fn created_at(
        kind: WorkoutType,
        coords: Coords,
        distance: f64,
        duration: f64,
        created: DateTime<Local>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            date: created.with_timezone(&Utc),
            coords,
            distance,
            duration,
            description: describe(kind, created.date_naive()),
            metric: Metric::compute(kind, distance, duration),
        }
    }

    pub const fn id(&self) -> Uuid {
        self.id
    }

    pub const fn date(&self) -> DateTime<Utc> {
        self.date
    }

    pub const fn coords(&self) -> Coords {
        self.coords
    }

    /// Kilometers.
    pub const fn distance(&self) -> f64 {
        self.distance
    }

    /// Minutes.
    pub const fn duration(&self) -> f64 {
        self.duration
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub const fn metric(&self) -> Metric {
        self.metric
    }

    pub const fn kind(&self) -> WorkoutType {
        self.metric.kind()
    }

    pub const fn pace(&self) -> Option<f64> {
        match self.metric {
            Metric::Running { pace } => Some(pace),
            Metric::Cycling { .. } => None,
        }
    }

    pub const fn speed(&self) -> Option<f64> {
        match self.metric {
            Metric::Cycling { speed } => Some(speed),
            Metric::Running { .. } => None,
        }
    }

    /// Checks the invariants the input boundary normally guarantees.
    /// Used for records that come back from storage.
    pub fn check(&self) -> Result<(), RecordError> {
        if !self.coords.is_valid() {
            return Err(RecordError::CoordsOutOfRange(self.coords));
        }
        for (field, value) in [("distance", self.distance), ("duration", self.duration)] {
            if !(value.is_finite() && value > 0.0) {
                return Err(RecordError::NotPositive { field, value });
            }
        }
        if !self.metric.value().is_finite() {
            return Err(RecordError::MetricNotFinite {
                unit: self.metric.unit(),
            });
        }
        Ok(())
    }
}

/// `"<TYPE> on <Month> <Day>"`, e.g. `RUNNING on March 5`.
pub fn describe(kind: WorkoutType, day: NaiveDate) -> String {
    format!(
        "{} on {}",
        kind.as_str().to_ascii_uppercase(),
        day.format("%B %-d")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn noon(y: i32, m: u32, d: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(y, m, d, 12, 0, 0).single().unwrap()
    }

    #[test]
    fn running_pace_is_minutes_per_km() {
        let w = Workout::running(Coords::new(48.1, -1.6), 5.0, 30.0);
        assert_eq!(w.pace(), Some(6.0));
        assert_eq!(w.speed(), None);
        assert_eq!(w.kind(), WorkoutType::Running);
    }

    #[test]
    fn cycling_speed_is_km_per_hour() {
        let w = Workout::cycling(Coords::new(48.1, -1.6), 20.0, 60.0);
        assert_eq!(w.speed(), Some(20.0));
        assert_eq!(w.pace(), None);
        assert_eq!(w.metric().unit(), "km/h");
    }

    #[test]
    fn metric_matches_formula_for_odd_values() {
        for (distance, duration) in [(4.2, 25.0), (0.3, 1.5), (42.195, 180.0)] {
            assert_eq!(
                Metric::compute(WorkoutType::Running, distance, duration).value(),
                duration / distance
            );
            assert_eq!(
                Metric::compute(WorkoutType::Cycling, distance, duration).value(),
                distance / (duration / 60.0)
            );
        }
    }

    #[test]
    fn description_uses_month_name_and_unpadded_day() {
        let d = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(describe(WorkoutType::Running, d), "RUNNING on March 5");
        let d = NaiveDate::from_ymd_opt(2023, 12, 31).unwrap();
        assert_eq!(describe(WorkoutType::Cycling, d), "CYCLING on December 31");
    }

    #[test]
    fn description_follows_creation_date() {
        let w = Workout::created_at(
            WorkoutType::Cycling,
            Coords::new(0.0, 0.0),
            10.0,
            30.0,
            noon(2024, 7, 14),
        );
        assert_eq!(w.description(), "CYCLING on July 14");
        assert_eq!(w.date(), noon(2024, 7, 14).with_timezone(&Utc));
    }

    #[test]
    fn ids_are_distinct_within_the_same_instant() {
        let at = noon(2024, 1, 1);
        let a = Workout::created_at(WorkoutType::Running, Coords::new(1.0, 1.0), 1.0, 1.0, at);
        let b = Workout::created_at(WorkoutType::Running, Coords::new(1.0, 1.0), 1.0, 1.0, at);
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn serializes_as_flat_record() {
        let w = Workout::running(Coords::new(48.5, -4.25), 5.0, 30.0);
        let v = serde_json::to_value(&w).unwrap();

        assert_eq!(v["type"], "running");
        assert_eq!(v["pace"], 6.0);
        assert_eq!(v["coords"], serde_json::json!([48.5, -4.25]));
        assert_eq!(v["distance"], 5.0);
        assert_eq!(v["duration"], 30.0);
        assert_eq!(v["description"], w.description());
        assert_eq!(v["id"], w.id().to_string());
        assert!(v.get("speed").is_none());
    }

    #[test]
    fn parses_coords() {
        let c: Coords = " 47.2184 , -1.5536 ".parse().unwrap();
        assert_eq!(c, Coords::new(47.2184, -1.5536));

        assert!(matches!("47.2".parse::<Coords>(), Err(CoordsError::Format(_))));
        assert!(matches!("north,west".parse::<Coords>(), Err(CoordsError::Format(_))));
        assert!(matches!("91,0".parse::<Coords>(), Err(CoordsError::Range(_))));
    }

    #[test]
    fn parses_workout_type() {
        assert_eq!("Cycling".parse::<WorkoutType>(), Ok(WorkoutType::Cycling));
        assert_eq!("running".parse::<WorkoutType>(), Ok(WorkoutType::Running));
        assert!("swimming".parse::<WorkoutType>().is_err());
    }

    #[test]
    fn check_rejects_broken_records() {
        let w = Workout::running(Coords::new(10.0, 10.0), 5.0, 30.0);
        assert!(w.check().is_ok());

        let mut bad = w.clone();
        bad.distance = -1.0;
        assert_eq!(
            bad.check(),
            Err(RecordError::NotPositive {
                field: "distance",
                value: -1.0
            })
        );

        let mut bad = w.clone();
        bad.duration = f64::INFINITY;
        assert!(matches!(
            bad.check(),
            Err(RecordError::NotPositive { field: "duration", .. })
        ));

        let mut bad = w;
        bad.coords = Coords::new(95.0, 2.0);
        assert_eq!(
            bad.check(),
            Err(RecordError::CoordsOutOfRange(Coords::new(95.0, 2.0)))
        );
    }
}
