//! Distance units accepted by geo commands.

use crate::constants::{M_PER_FT, M_PER_KM, M_PER_MI};
use crate::error::GeoError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unit for radii and reported distances.
///
/// Parses from the short names `m`, `km`, `mi` and `ft`, case-insensitively.
///
/// ```
/// use geoscore::DistanceUnit;
///
/// let unit: DistanceUnit = "KM".parse().unwrap();
/// assert_eq!(unit, DistanceUnit::Kilometers);
/// assert_eq!(unit.to_meters(2.5), 2500.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistanceUnit {
    #[default]
    Meters,
    Kilometers,
    Miles,
    Feet,
}

impl DistanceUnit {
    /// Meters per one of this unit.
    pub fn factor(self) -> f64 {
        match self {
            DistanceUnit::Meters => 1.0,
            DistanceUnit::Kilometers => M_PER_KM,
            DistanceUnit::Miles => M_PER_MI,
            DistanceUnit::Feet => M_PER_FT,
        }
    }

    pub fn to_meters(self, value: f64) -> f64 {
        value * self.factor()
    }

    pub fn from_meters(self, meters: f64) -> f64 {
        meters / self.factor()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DistanceUnit::Meters => "m",
            DistanceUnit::Kilometers => "km",
            DistanceUnit::Miles => "mi",
            DistanceUnit::Feet => "ft",
        }
    }
}

impl fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DistanceUnit {
    type Err = GeoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "m" => Ok(DistanceUnit::Meters),
            "km" => Ok(DistanceUnit::Kilometers),
            "mi" => Ok(DistanceUnit::Miles),
            "ft" => Ok(DistanceUnit::Feet),
            _ => Err(GeoError::UnknownUnit(s.to_string())),
        }
    }
}
