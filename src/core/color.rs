//! Hours worked → cell color.
//!
//! Two linear segments: `low`→`mid` over `0..midpoint`, `mid`→`high` over
//! `midpoint..ceiling`. Values at or below zero (and NaN) clamp to `low`,
//! values at or above `ceiling` clamp to `high`.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_css(self) -> String {
        format!("rgb({},{},{})", self.r, self.g, self.b)
    }

    fn mix(self, other: Rgb, weight: f64) -> Rgb {
        let channel = |a: u8, b: u8| -> u8 {
            let v = f64::from(a) * (1.0 - weight) + f64::from(b) * weight;
            v.round().clamp(0.0, 255.0) as u8
        };
        Rgb::new(
            channel(self.r, other.r),
            channel(self.g, other.g),
            channel(self.b, other.b),
        )
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Light pink: nothing logged.
pub const LOW: Rgb = Rgb::new(255, 182, 193);
/// White: a full day.
pub const MID: Rgb = Rgb::new(255, 255, 255);
/// Light blue: overtime.
pub const HIGH: Rgb = Rgb::new(173, 216, 230);

pub const DEFAULT_MIDPOINT: f64 = 5.0;
pub const DEFAULT_CEILING: f64 = 7.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorScale {
    pub low: Rgb,
    pub mid: Rgb,
    pub high: Rgb,
    #[serde(default = "default_midpoint")]
    pub midpoint: f64,
    #[serde(default = "default_ceiling")]
    pub ceiling: f64,
}

fn default_midpoint() -> f64 {
    DEFAULT_MIDPOINT
}
fn default_ceiling() -> f64 {
    DEFAULT_CEILING
}

impl Default for ColorScale {
    fn default() -> Self {
        Self {
            low: LOW,
            mid: MID,
            high: HIGH,
            midpoint: DEFAULT_MIDPOINT,
            ceiling: DEFAULT_CEILING,
        }
    }
}

impl ColorScale {
    pub fn color_for(&self, hours: f64) -> Rgb {
        if hours.is_nan() || hours <= 0.0 {
            return self.low;
        }
        if hours >= self.ceiling {
            return self.high;
        }

        if hours < self.midpoint {
            self.low.mix(self.mid, hours / self.midpoint)
        } else {
            let span = self.ceiling - self.midpoint;
            self.mid.mix(self.high, (hours - self.midpoint) / span)
        }
    }
}

/// Color for `hours` with the default anchors.
pub fn color_for(hours: f64) -> Rgb {
    ColorScale::default().color_for(hours)
}
