//! Temperature units and conversions from Celsius

use core::fmt;
use core::str::FromStr;

/// Offset between the Celsius and Kelvin scales
pub const KELVIN_OFFSET: f32 = 273.15;

/// Celsius passthrough
#[must_use]
pub const fn to_celsius(celsius: f32) -> f32 {
    celsius
}

/// Convert Celsius to Kelvin
#[must_use]
pub const fn to_kelvin(celsius: f32) -> f32 {
    celsius + KELVIN_OFFSET
}

/// Convert Celsius to Fahrenheit
#[must_use]
pub const fn to_fahrenheit(celsius: f32) -> f32 {
    celsius * 9.0 / 5.0 + 32.0
}

/// Unit returned by [`crate::Max6675::get`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Unit {
    #[default]
    Celsius,
    Kelvin,
    Fahrenheit,
}

impl Unit {
    /// Convert a Celsius value into this unit
    #[must_use]
    pub const fn convert(self, celsius: f32) -> f32 {
        match self {
            Unit::Celsius => to_celsius(celsius),
            Unit::Kelvin => to_kelvin(celsius),
            Unit::Fahrenheit => to_fahrenheit(celsius),
        }
    }

    /// Convert a value in this unit back to Celsius
    #[must_use]
    pub const fn to_celsius(self, value: f32) -> f32 {
        match self {
            Unit::Celsius => value,
            Unit::Kelvin => value - KELVIN_OFFSET,
            Unit::Fahrenheit => (value - 32.0) * 5.0 / 9.0,
        }
    }

    /// Single-letter unit code, as accepted by [`Unit::from_str`]
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Unit::Celsius => 'c',
            Unit::Kelvin => 'k',
            Unit::Fahrenheit => 'f',
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Unit::Celsius => "°C",
            Unit::Kelvin => "K",
            Unit::Fahrenheit => "°F",
        })
    }
}

/// Unit code was not one of `c`, `k` or `f`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ParseUnitError;

impl fmt::Display for ParseUnitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unit must be one of \"c\", \"k\" or \"f\"")
    }
}

impl core::error::Error for ParseUnitError {}

impl TryFrom<char> for Unit {
    type Error = ParseUnitError;

    fn try_from(code: char) -> Result<Self, Self::Error> {
        match code.to_ascii_lowercase() {
            'c' => Ok(Unit::Celsius),
            'k' => Ok(Unit::Kelvin),
            'f' => Ok(Unit::Fahrenheit),
            _ => Err(ParseUnitError),
        }
    }
}

impl FromStr for Unit {
    type Err = ParseUnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(code), None) => Unit::try_from(code),
            _ => Err(ParseUnitError),
        }
    }
}
