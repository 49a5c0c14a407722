use crate::types::{Coords, Workout, WorkoutType};
use std::fmt;
use uuid::Uuid;

const DURATION_ICON: &str = "⏱";
const METRIC_ICON: &str = "⚡️";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detail {
    pub icon: &'static str,
    pub value: String,
    pub unit: &'static str,
}

/// One entry of the workout list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    pub id: Uuid,
    pub kind: WorkoutType,
    pub title: String,
    pub details: Vec<Detail>,
}

impl ListItem {
    pub fn from_workout(w: &Workout) -> Self {
        let metric = w.metric();
        Self {
            id: w.id(),
            kind: w.kind(),
            title: w.description().to_string(),
            details: vec![
                Detail {
                    icon: w.kind().icon(),
                    value: w.distance().to_string(),
                    unit: "km",
                },
                Detail {
                    icon: DURATION_ICON,
                    value: w.duration().to_string(),
                    unit: "min",
                },
                Detail {
                    icon: METRIC_ICON,
                    value: fixed1(metric.value()),
                    unit: metric.unit(),
                },
            ],
        }
    }

    pub fn to_html(&self) -> String {
        let mut html = format!(
            concat!(
                "<li class=\"workout workout--{kind}\" data-id=\"{id}\">\n",
                "  <h2 class=\"workout__title\">{title}</h2>\n",
            ),
            kind = self.kind,
            id = self.id,
            title = escape_html(&self.title),
        );
        for d in &self.details {
            html.push_str(&format!(
                concat!(
                    "  <div class=\"workout__details\">\n",
                    "    <span class=\"workout__icon\">{}</span>\n",
                    "    <span class=\"workout__value\">{}</span>\n",
                    "    <span class=\"workout__unit\">{}</span>\n",
                    "  </div>\n",
                ),
                d.icon,
                escape_html(&d.value),
                d.unit
            ));
        }
        html.push_str("</li>\n");
        html
    }
}

impl fmt::Display for ListItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)?;
        for d in &self.details {
            write!(f, "  {} {} {}", d.icon, d.value, d.unit)?;
        }
        write!(f, "  [{}]", self.id)
    }
}

/// Popup attached to a workout's map marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Popup {
    pub content: String,
    pub class_name: String,
    pub max_width: u32,
    pub min_width: u32,
    pub auto_close: bool,
    pub close_on_click: bool,
}

impl Popup {
    pub fn for_workout(w: &Workout) -> Self {
        Self {
            content: format!("{} {}", w.kind().icon(), w.description()),
            class_name: format!("{}-popup", w.kind()),
            max_width: 250,
            min_width: 100,
            auto_close: false,
            close_on_click: false,
        }
    }
}

/// Marker for a workout: where it goes and what it says.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub at: Coords,
    pub popup: Popup,
}

impl Marker {
    pub fn for_workout(w: &Workout) -> Self {
        Self {
            at: w.coords(),
            popup: Popup::for_workout(w),
        }
    }
}

/// One decimal place, with exact halves rounded away from zero the way
/// browsers' `toFixed(1)` does. `{:.1}` alone rounds them to even.
pub fn fixed1(x: f64) -> String {
    // x.x5 is only exact in binary when 4x is an odd integer
    let quarters = x * 4.0;
    if quarters.is_finite() && quarters.fract() == 0.0 && quarters.abs() % 2.0 == 1.0 {
        return format!("{:.1}", x + x.signum() * 0.01);
    }
    format!("{x:.1}")
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
