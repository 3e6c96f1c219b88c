//! Property tests for the conversion formulas and the absolute-zero gate.
//!
//! 1. **Inverse**: F -> C -> F and C -> F -> C recover the input
//! 2. **Physical round trip**: a Celsius value accepted once is accepted again
//!    after going through Fahrenheit and back

use proptest::prelude::*;
use thermo_core::{
    celsius_to_fahrenheit, convert_input, fahrenheit_to_celsius, format_temperature,
    ConversionError, TemperatureUnit, ABSOLUTE_ZERO_CELSIUS,
};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn fahrenheit_round_trip_is_identity(f in -1.0e6f64..1.0e6) {
        let back = fahrenheit_to_celsius(celsius_to_fahrenheit(f));
        prop_assert!(close(back, f), "{f} came back as {back}");
    }

    #[test]
    fn celsius_round_trip_is_identity(c in ABSOLUTE_ZERO_CELSIUS..1.0e6) {
        let back = fahrenheit_to_celsius(celsius_to_fahrenheit(c));
        prop_assert!(close(back, c), "{c} came back as {back}");
    }

    #[test]
    fn accepted_celsius_survives_the_reverse_trip(c in ABSOLUTE_ZERO_CELSIUS..1.0e4) {
        let f = convert_input(&c.to_string(), TemperatureUnit::Celsius)
            .expect("physical input converts");

        // Feed the unrounded value back so the check sees the true round trip.
        let back = convert_input(&f.value.to_string(), TemperatureUnit::Fahrenheit);
        match back {
            Ok(t) => prop_assert!(close(t.value, c)),
            Err(ConversionError::BelowAbsoluteZero) => {
                // Only reachable through rounding right at the boundary.
                prop_assert!(close(c, ABSOLUTE_ZERO_CELSIUS));
            }
            Err(other) => prop_assert!(false, "unexpected {other:?}"),
        }
    }

    #[test]
    fn below_absolute_zero_celsius_is_always_refused(c in -1.0e6f64..-273.151) {
        prop_assert_eq!(
            convert_input(&c.to_string(), TemperatureUnit::Celsius),
            Err(ConversionError::BelowAbsoluteZero)
        );
    }

    #[test]
    fn formatted_results_have_exactly_one_decimal(v in -1.0e6f64..1.0e6) {
        let text = format_temperature(v);
        let (_, frac) = text.rsplit_once('.').unwrap_or(("", ""));
        prop_assert_eq!(frac.len(), 1);
        prop_assert!(!text.contains('e'));
    }
}
