use serde::Deserialize;
use std::fmt;

use crate::report::format_report;

/// Coordinates of the first geocoding match.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Location {
    #[serde(rename = "lat")]
    pub latitude: f64,
    #[serde(rename = "lon")]
    pub longitude: f64,
}

/// The `current` object of a forecast response. Only the field that was
/// requested is present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct WeatherReading {
    #[serde(rename = "temperature_2m")]
    pub temperature: Option<f64>,
    #[serde(rename = "wind_speed_10m")]
    pub wind_speed: Option<f64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TemperatureUnit {
    #[default]
    Celsius,
    Fahrenheit,
}

impl TemperatureUnit {
    /// Value of the `temperature_unit` query parameter, also used as the report label.
    pub fn as_str(&self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "celsius",
            TemperatureUnit::Fahrenheit => "fahrenheit",
        }
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum WindSpeedUnit {
    #[default]
    MetersPerSecond,
    KilometersPerHour,
}

impl WindSpeedUnit {
    /// Value of the `wind_speed_unit` query parameter, also used as the report label.
    pub fn as_str(&self) -> &'static str {
        match self {
            WindSpeedUnit::MetersPerSecond => "ms",
            WindSpeedUnit::KilometersPerHour => "kmh",
        }
    }
}

impl fmt::Display for WindSpeedUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct UnitPreference {
    pub temperature: TemperatureUnit,
    pub wind_speed: WindSpeedUnit,
}

impl UnitPreference {
    pub fn from_flags(want_fahrenheit: bool, want_kmh: bool) -> Self {
        Self {
            temperature: if want_fahrenheit {
                TemperatureUnit::Fahrenheit
            } else {
                TemperatureUnit::Celsius
            },
            wind_speed: if want_kmh {
                WindSpeedUnit::KilometersPerHour
            } else {
                WindSpeedUnit::MetersPerSecond
            },
        }
    }
}

/// Everything the report needs, already expressed in the requested units.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReport {
    pub city: String,
    pub temperature: f64,
    pub wind_speed: f64,
    pub units: UnitPreference,
}

impl fmt::Display for WeatherReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_report(
            &self.city,
            self.temperature,
            self.units.temperature.as_str(),
            self.wind_speed,
            self.units.wind_speed.as_str(),
        ))
    }
}
