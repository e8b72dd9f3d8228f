//! Unit and angle utilities
//!
//! Layout coordinates are expressed in micrometers. Mask databases are often
//! written in nanometers, so conversions between the common length units live
//! here together with the degree-based angle helpers used by ports.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Tolerance used when comparing layout coordinates (micrometers)
pub const GEOMETRY_TOLERANCE: f64 = 1e-6;

/// Length unit of a layout database
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    /// Nanometers
    Nanometer,
    /// Micrometers (layout default)
    #[default]
    Micrometer,
    /// Millimeters
    Millimeter,
}

impl LengthUnit {
    /// Size of one unit in micrometers
    pub fn in_micrometers(self) -> f64 {
        match self {
            Self::Nanometer => 1e-3,
            Self::Micrometer => 1.0,
            Self::Millimeter => 1e3,
        }
    }

    /// Convert a value from one unit to another
    pub fn convert(value: f64, from: LengthUnit, to: LengthUnit) -> f64 {
        value * from.in_micrometers() / to.in_micrometers()
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nanometer => write!(f, "nm"),
            Self::Micrometer => write!(f, "um"),
            Self::Millimeter => write!(f, "mm"),
        }
    }
}

impl FromStr for LengthUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "nm" | "nanometer" => Ok(Self::Nanometer),
            "um" | "µm" | "micrometer" | "micron" => Ok(Self::Micrometer),
            "mm" | "millimeter" => Ok(Self::Millimeter),
            _ => Err(format!("Unknown length unit: {}", s)),
        }
    }
}

/// Wrap an angle in degrees into `[0, 360)`
pub fn normalize_degrees(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Whether two angles in degrees describe the same direction
pub fn angles_equivalent(a: f64, b: f64, tolerance: f64) -> bool {
    let diff = normalize_degrees(a - b);
    diff < tolerance || 360.0 - diff < tolerance
}

/// Whether two lengths agree within [`GEOMETRY_TOLERANCE`]
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= GEOMETRY_TOLERANCE
}
