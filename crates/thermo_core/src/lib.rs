//! Temperature model: unit conversion formulas, input parsing and the
//! error taxonomy shared by the desktop form.

pub mod domain;
pub mod error;
pub mod input;

pub use domain::{
    celsius_to_fahrenheit, fahrenheit_to_celsius, Temperature, TemperatureUnit,
    ABSOLUTE_ZERO_CELSIUS, CELSIUS_TO_FAHRENHEIT_RATIO, FAHRENHEIT_OFFSET,
};
pub use error::ConversionError;
pub use input::{convert_input, format_temperature, parse_temperature, passes_character_filter};

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
