//! Text-level handling of submitted temperatures: the cheap character
//! pre-filter, numeric parsing, the absolute-zero gate and result formatting.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::domain::{Temperature, TemperatureUnit};
use crate::error::ConversionError;

/// Loose pre-filter: non-empty and made only of ASCII digits, `+`, `-` and `.`.
/// Strings such as `"--.."` pass here and are refused later by the parser.
pub fn passes_character_filter(text: &str) -> bool {
    !text.is_empty()
        && text
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.'))
}

/// Digit strings that overflow to negative infinity are kept so the
/// absolute-zero gate refuses them; NaN and positive infinity have no
/// displayable result and count as malformed.
pub fn parse_temperature(text: &str) -> Result<f64, ConversionError> {
    let value: f64 = text
        .trim()
        .parse()
        .map_err(|_| ConversionError::NumberFormat)?;
    if value.is_nan() || value == f64::INFINITY {
        return Err(ConversionError::NumberFormat);
    }
    Ok(value)
}

/// Fixed-point with one decimal, right-aligned to at least four columns.
///
/// Rounds half away from zero on the shortest decimal form of `value`, so
/// 34.25 shows as `34.3` and -57.55 as `-57.6`.
pub fn format_temperature(value: f64) -> String {
    if !value.is_finite() {
        return format!("{value:>4}");
    }
    let shortest = value.to_string();
    match Decimal::from_str(&shortest) {
        Ok(exact) => {
            let mut rounded =
                exact.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
            rounded.rescale(1);
            format!("{:>4}", rounded.to_string())
        }
        // Beyond Decimal's range every large f64 is a whole number.
        Err(_) if !shortest.contains('.') => format!("{shortest}.0"),
        Err(_) => format!("{value:4.1}"),
    }
}

/// Parses `raw` as a temperature in `from` and converts it to the other unit.
///
/// The absolute-zero gate always looks at the Celsius-domain value: the
/// converted result when `from` is Fahrenheit, the parsed input when `from`
/// is Celsius (checked before converting).
pub fn convert_input(raw: &str, from: TemperatureUnit) -> Result<Temperature, ConversionError> {
    let source = Temperature::new(parse_temperature(raw)?, from);
    match from {
        TemperatureUnit::Fahrenheit => {
            let converted = source.converted_to(TemperatureUnit::Celsius);
            if converted.is_physical() {
                Ok(converted)
            } else {
                Err(ConversionError::BelowAbsoluteZero)
            }
        }
        TemperatureUnit::Celsius => {
            if source.is_physical() {
                Ok(source.converted_to(TemperatureUnit::Fahrenheit))
            } else {
                Err(ConversionError::BelowAbsoluteZero)
            }
        }
    }
}
