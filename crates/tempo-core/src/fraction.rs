// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Derived fraction-rate parameters.
//!
//! Everything here is a pure function of the configured fractions-per-second
//! rate. The values are cached on each [`Timecode`](crate::Timecode) to avoid
//! repeated floating-point rounding, never because they are expensive.

use crate::constants::{
    DEFAULT_FRACTIONS_PER_SECOND, MAX_FRACTIONS_PER_SECOND, MIN_FRACTIONS_PER_SECOND,
    TICKS_PER_MILLISECOND,
};
use crate::error::TimecodeError;

/// Cached values derived from the fraction rate alone.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct FractionParams {
    /// `round(1000 / rate, 4)` — the single conversion factor between
    /// fractions and milliseconds, used identically in both directions.
    pub(crate) millis_per_fraction: f64,
    /// Decimal digits used to render a fraction count, minus one when the
    /// rate is an exact power of ten (1000 renders 3-digit, millisecond-style
    /// counts).
    pub(crate) digits_per_fraction: u32,
}

impl FractionParams {
    /// Validating constructor. Rejects rates outside `1..=1000`.
    pub(crate) fn try_new(rate: i32) -> Result<Self, TimecodeError> {
        if in_range(rate) {
            Ok(Self::derive(rate))
        } else {
            Err(TimecodeError::RateOutOfRange(rate))
        }
    }

    /// Clamping constructor for mutation paths that cannot fail. Returns the
    /// effective rate alongside the parameters.
    pub(crate) fn clamped(rate: i32) -> (i32, Self) {
        let rate = if in_range(rate) {
            rate
        } else {
            DEFAULT_FRACTIONS_PER_SECOND
        };
        (rate, Self::derive(rate))
    }

    fn derive(rate: i32) -> Self {
        let millis = round_to_4(1000.0 / f64::from(rate));
        let mut digits = decimal_digits(rate);
        if 10_i32.pow(digits - 1) == rate {
            digits -= 1;
        }
        Self {
            millis_per_fraction: millis,
            digits_per_fraction: digits,
        }
    }
}

/// Converts a fraction position into ticks, truncating toward zero.
///
/// Shared by `from_fractions`, the `set_fractions` mutator and both parsing
/// grammars so that text and arithmetic agree on the same conversion factor.
pub(crate) fn fractions_to_ticks(fractions: f64, params: &FractionParams) -> i64 {
    (fractions * params.millis_per_fraction * TICKS_PER_MILLISECOND as f64).trunc() as i64
}

fn in_range(rate: i32) -> bool {
    (MIN_FRACTIONS_PER_SECOND..=MAX_FRACTIONS_PER_SECOND).contains(&rate)
}

fn round_to_4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

// Callers guarantee rate >= 1.
fn decimal_digits(rate: i32) -> u32 {
    rate.ilog10() + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_follow_power_of_ten_rule() {
        assert_eq!(FractionParams::derive(1000).digits_per_fraction, 3);
        assert_eq!(FractionParams::derive(100).digits_per_fraction, 2);
        assert_eq!(FractionParams::derive(10).digits_per_fraction, 1);
        assert_eq!(FractionParams::derive(1).digits_per_fraction, 0);
        assert_eq!(FractionParams::derive(25).digits_per_fraction, 2);
        assert_eq!(FractionParams::derive(30).digits_per_fraction, 2);
        assert_eq!(FractionParams::derive(999).digits_per_fraction, 3);
    }

    #[test]
    fn millis_per_fraction_rounds_to_four_places() {
        let millis = |rate: i32| FractionParams::derive(rate).millis_per_fraction;
        assert!((millis(1000) - 1.0).abs() < 1e-12);
        assert!((millis(25) - 40.0).abs() < 1e-12);
        assert!((millis(30) - 33.3333).abs() < 1e-12);
        assert!((millis(3) - 333.3333).abs() < 1e-12);
    }

    #[test]
    fn try_new_rejects_out_of_range() {
        assert!(FractionParams::try_new(0).is_err());
        assert!(FractionParams::try_new(-5).is_err());
        assert!(FractionParams::try_new(1001).is_err());
        assert!(FractionParams::try_new(1).is_ok());
        assert!(FractionParams::try_new(1000).is_ok());
    }

    #[test]
    fn clamped_resets_to_default() {
        assert_eq!(FractionParams::clamped(0).0, 1000);
        assert_eq!(FractionParams::clamped(-5).0, 1000);
        assert_eq!(FractionParams::clamped(1001).0, 1000);
        assert_eq!(FractionParams::clamped(25).0, 25);
    }

    #[test]
    fn fraction_tick_conversion_truncates() {
        let params = FractionParams::derive(25);
        // One fraction at 25/s is exactly 40ms.
        assert_eq!(fractions_to_ticks(1.0, &params), 400_000);
        assert_eq!(fractions_to_ticks(10.0, &params), 4_000_000);
        assert_eq!(fractions_to_ticks(-1.0, &params), -400_000);
    }
}
