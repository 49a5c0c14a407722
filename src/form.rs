//! Workout entry form: raw input state and validation.
//!
//! Inputs are kept as typed text, the way a browser form holds them, and only
//! become numbers when the form is read for submission.

use crate::error::InputError;
use crate::types::WorkoutType;

/// Validated form contents, ready to build a workout from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entry {
    pub kind: WorkoutType,
    pub distance: f64,
    pub duration: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Form {
    visible: bool,
    kind: WorkoutType,
    distance: String,
    duration: String,
}

impl Form {
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn show(&mut self) {
        self.visible = true;
    }

    /// Hides the form and empties the numeric inputs. The type selector keeps
    /// its last value.
    pub fn hide(&mut self) {
        self.visible = false;
        self.distance.clear();
        self.duration.clear();
    }

    pub const fn kind(&self) -> WorkoutType {
        self.kind
    }

    pub fn distance(&self) -> &str {
        &self.distance
    }

    pub fn duration(&self) -> &str {
        &self.duration
    }

    pub fn set_kind(&mut self, kind: WorkoutType) -> &mut Self {
        self.kind = kind;
        self
    }

    pub fn set_distance(&mut self, raw: impl Into<String>) -> &mut Self {
        self.distance = raw.into();
        self
    }

    pub fn set_duration(&mut self, raw: impl Into<String>) -> &mut Self {
        self.duration = raw.into();
        self
    }

    pub fn read(&self) -> Result<Entry, InputError> {
        Ok(Entry {
            kind: self.kind,
            distance: parse_positive("distance", &self.distance)?,
            duration: parse_positive("duration", &self.duration)?,
        })
    }
}

/// Numeric coercion of a text input: surrounding whitespace is ignored and
/// an empty input reads as zero.
pub fn parse_number(field: &'static str, raw: &str) -> Result<f64, InputError> {
    let s = raw.trim();
    if s.is_empty() {
        return Ok(0.0);
    }
    match s.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(InputError::NotFinite {
            field,
            value: raw.to_string(),
        }),
    }
}

pub fn parse_positive(field: &'static str, raw: &str) -> Result<f64, InputError> {
    let v = parse_number(field, raw)?;
    if v > 0.0 {
        Ok(v)
    } else {
        Err(InputError::NotPositive { field, value: v })
    }
}
