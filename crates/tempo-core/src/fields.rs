// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Mixed-radix decomposition between total ticks and calendar-like fields.
//!
//! [`decompose`] and [`recompose`] are the only two functions allowed to
//! translate between the authoritative tick count and the derived field set.
//! Both are pure; every mutator funnels through them, so the fields can never
//! drift from the ticks.

use crate::constants::{
    TICKS_PER_DAY, TICKS_PER_HOUR, TICKS_PER_MILLISECOND, TICKS_PER_MINUTE, TICKS_PER_SECOND,
};
use crate::fraction::FractionParams;

/// Decomposed view of a tick count.
///
/// For a negative tick count every field is ≤ 0: decomposition uses
/// truncating division throughout, so `decompose(-t)` is the exact
/// field-wise negation of `decompose(t)`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) struct TimeFields {
    /// Whole days.
    pub(crate) days: i32,
    /// Hours within the day.
    pub(crate) hours: i32,
    /// Minutes within the hour.
    pub(crate) minutes: i32,
    /// Seconds within the minute.
    pub(crate) seconds: i32,
    /// Milliseconds within the second.
    pub(crate) milliseconds: i32,
    /// Sub-millisecond tick remainder.
    pub(crate) ticks: i32,
    /// Position within the second, in fraction units at the configured rate.
    pub(crate) fractions: f64,
}

/// Splits a tick count into calendar fields, carrying the remainder forward
/// at each step. No rounding happens here; `fractions` keeps the full
/// sub-millisecond precision of the remainder.
pub(crate) fn decompose(total_ticks: i64, params: &FractionParams) -> TimeFields {
    let days = total_ticks / TICKS_PER_DAY;
    let mut remainder = total_ticks % TICKS_PER_DAY;

    let hours = remainder / TICKS_PER_HOUR;
    remainder %= TICKS_PER_HOUR;

    let minutes = remainder / TICKS_PER_MINUTE;
    remainder %= TICKS_PER_MINUTE;

    let seconds = remainder / TICKS_PER_SECOND;
    remainder %= TICKS_PER_SECOND;

    let mut fractions =
        (remainder as f64 / TICKS_PER_MILLISECOND as f64) / params.millis_per_fraction;
    if fractions.is_nan() {
        fractions = 0.0;
    }

    let milliseconds = remainder / TICKS_PER_MILLISECOND;
    remainder %= TICKS_PER_MILLISECOND;

    TimeFields {
        days: days as i32,
        hours: hours as i32,
        minutes: minutes as i32,
        seconds: seconds as i32,
        milliseconds: milliseconds as i32,
        ticks: remainder as i32,
        fractions,
    }
}

/// Sums the integer fields back into a tick count.
///
/// `fractions` never participates here; writes to it are converted into
/// milliseconds before recomposition.
pub(crate) fn recompose(fields: &TimeFields) -> i64 {
    i64::from(fields.days) * TICKS_PER_DAY
        + i64::from(fields.hours) * TICKS_PER_HOUR
        + i64::from(fields.minutes) * TICKS_PER_MINUTE
        + i64::from(fields.seconds) * TICKS_PER_SECOND
        + i64::from(fields.milliseconds) * TICKS_PER_MILLISECOND
        + i64::from(fields.ticks)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(rate: i32) -> FractionParams {
        FractionParams::try_new(rate).expect("rate in range")
    }

    #[test]
    fn decompose_splits_each_unit() {
        // 1d 2h 3m 4s 567ms 8900 ticks
        let ticks = TICKS_PER_DAY
            + 2 * TICKS_PER_HOUR
            + 3 * TICKS_PER_MINUTE
            + 4 * TICKS_PER_SECOND
            + 567 * TICKS_PER_MILLISECOND
            + 8_900;
        let fields = decompose(ticks, &params(1000));
        assert_eq!(fields.days, 1);
        assert_eq!(fields.hours, 2);
        assert_eq!(fields.minutes, 3);
        assert_eq!(fields.seconds, 4);
        assert_eq!(fields.milliseconds, 567);
        assert_eq!(fields.ticks, 8_900);
        // At rate 1000 one fraction is one millisecond; the sub-millisecond
        // remainder shows up as a partial fraction.
        assert!((fields.fractions - 567.89).abs() < 1e-9);
    }

    #[test]
    fn recompose_is_left_inverse_of_decompose() {
        let p = params(25);
        for ticks in [
            0,
            1,
            9_999,
            TICKS_PER_SECOND - 1,
            TICKS_PER_DAY + 123_456_789,
            37_235_000_000,
            i64::MAX,
            i64::MIN,
        ] {
            assert_eq!(recompose(&decompose(ticks, &p)), ticks, "ticks={ticks}");
        }
    }

    #[test]
    fn negative_ticks_mirror_positive_fields() {
        let p = params(25);
        let sample = 2 * TICKS_PER_DAY
            + 3 * TICKS_PER_HOUR
            + 4 * TICKS_PER_MINUTE
            + 5 * TICKS_PER_SECOND
            + 678 * TICKS_PER_MILLISECOND
            + 21;
        let pos = decompose(sample, &p);
        let neg = decompose(-sample, &p);
        assert_eq!(neg.days, -pos.days);
        assert_eq!(neg.hours, -pos.hours);
        assert_eq!(neg.minutes, -pos.minutes);
        assert_eq!(neg.seconds, -pos.seconds);
        assert_eq!(neg.milliseconds, -pos.milliseconds);
        assert_eq!(neg.ticks, -pos.ticks);
        assert!((neg.fractions + pos.fractions).abs() < 1e-9);
    }

    #[test]
    fn fractions_scale_with_rate() {
        // Half a second at 25 fractions/s is 12.5 fractions.
        let fields = decompose(TICKS_PER_SECOND / 2, &params(25));
        assert!((fields.fractions - 12.5).abs() < 1e-9);
    }

    #[test]
    fn nan_fraction_position_clamps_to_zero() {
        let broken = FractionParams {
            millis_per_fraction: 0.0,
            digits_per_fraction: 0,
        };
        let fields = decompose(0, &broken);
        assert!(fields.fractions.abs() < f64::EPSILON);
    }
}
