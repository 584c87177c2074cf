// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Timecode string parsing.
//!
//! Two grammars. The default grammar reads `[HH:[MM:]]SS[.FF]` with integer
//! components and a fraction count already expressed at the target rate. The
//! tagged grammar decodes exactly one of the nine fixed layouts, accepts
//! decimal components, and is the inverse of the tagged formatter.
//!
//! Both validate shape first and pieces second, returning a typed error for
//! the first violation found; the `try_parse*` variants downgrade every
//! error to a zero-tick fallback.

use crate::constants::{TICKS_PER_HOUR, TICKS_PER_MINUTE, TICKS_PER_SECOND};
use crate::error::TimecodeError;
use crate::format::TimecodeFormat;
use crate::fraction::{fractions_to_ticks, FractionParams};
use crate::round::FractionRoundMode;
use crate::timecode::Timecode;

// Default-grammar units, right-to-left from the last colon component.
const UNIT_TICKS: [i64; 3] = [TICKS_PER_SECOND, TICKS_PER_MINUTE, TICKS_PER_HOUR];

impl Timecode {
    /// Parses the default grammar at the given rate.
    ///
    /// The integer part splits on `:` into one to three components read
    /// right-to-left as seconds, minutes, hours: `"5"` is five seconds,
    /// `"1:5"` is one minute five seconds, `"1:2:5"` is 1h 2m 5s. An
    /// optional `.FF` suffix is a whole fraction count at the target rate;
    /// a count above the rate is [`TimecodeError::FractionOverflow`].
    pub fn parse(input: &str, fractions_per_second: i32) -> Result<Self, TimecodeError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(TimecodeError::Empty);
        }
        let params = FractionParams::try_new(fractions_per_second)?;

        let mut pieces = trimmed.split('.');
        let whole = pieces.next().unwrap_or("");
        let fraction_piece = pieces.next();
        if pieces.next().is_some() {
            return Err(TimecodeError::MultipleFractionSeparators);
        }

        let components: Vec<&str> = whole.split(':').collect();
        if components.len() > 3 {
            return Err(TimecodeError::ComponentCount(components.len()));
        }

        let mut total_ticks = 0_i64;
        for (unit, component) in UNIT_TICKS.iter().zip(components.iter().rev()) {
            total_ticks += parse_integer(component)? * unit;
        }

        if let Some(fraction) = fraction_piece {
            let count = parse_integer(fraction)?;
            if count > i64::from(fractions_per_second) {
                return Err(TimecodeError::FractionOverflow {
                    count,
                    rate: fractions_per_second,
                });
            }
            total_ticks += fractions_to_ticks(count as f64, &params);
        }

        Ok(Self::from_parts(
            total_ticks,
            fractions_per_second,
            FractionRoundMode::Truncate,
            params,
        ))
    }

    /// Lenient wrapper around [`parse`](Self::parse).
    ///
    /// On success returns the parsed value and `true`; on any parse error a
    /// zero-tick value at the (clamped) rate and `false`. Errors never
    /// escape.
    #[must_use]
    pub fn try_parse(input: &str, fractions_per_second: i32) -> (Self, bool) {
        Self::parse(input, fractions_per_second)
            .map_or_else(|_| (Self::zero(fractions_per_second), false), |tc| (tc, true))
    }

    /// Parses one of the nine fixed layouts.
    ///
    /// Every occurrence of `separator` is normalized to `:` before the
    /// split, and the piece count must equal the layout's arity. Components
    /// are decimal, so `"1.5"` hours is legal wherever the separator leaves
    /// it intact. For the `*Millis` layouts the seconds and milliseconds
    /// pieces are joined into one decimal-seconds literal, preserving
    /// sub-second precision through a single decimal parse.
    pub fn parse_tagged(
        input: &str,
        fractions_per_second: i32,
        layout: TimecodeFormat,
        round_mode: FractionRoundMode,
        separator: char,
    ) -> Result<Self, TimecodeError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(TimecodeError::Empty);
        }
        let params = FractionParams::try_new(fractions_per_second)?;

        let normalized = trimmed.replace(separator, ":");
        let components: Vec<&str> = normalized.split(':').collect();
        let expected = layout.component_count();
        if components.len() != expected {
            return Err(TimecodeError::LayoutMismatch {
                layout,
                expected,
                found: components.len(),
            });
        }

        let rate = f64::from(fractions_per_second);
        let total_fractions = match layout {
            TimecodeFormat::HoursMinutes => {
                parse_decimal(components[0])? * 3_600.0 * rate
                    + parse_decimal(components[1])? * 60.0 * rate
            }
            TimecodeFormat::HoursMinutesSeconds => {
                parse_decimal(components[0])? * 3_600.0 * rate
                    + parse_decimal(components[1])? * 60.0 * rate
                    + parse_decimal(components[2])? * rate
            }
            TimecodeFormat::HoursMinutesSecondsFractions => {
                parse_decimal(components[0])? * 3_600.0 * rate
                    + parse_decimal(components[1])? * 60.0 * rate
                    + parse_decimal(components[2])? * rate
                    + parse_decimal(components[3])?
            }
            TimecodeFormat::HoursMinutesSecondsMillis => {
                parse_decimal(components[0])? * 3_600.0 * rate
                    + parse_decimal(components[1])? * 60.0 * rate
                    + decimal_seconds(components[2], components[3])? * rate
            }
            TimecodeFormat::MinutesSeconds => {
                parse_decimal(components[0])? * 60.0 * rate + parse_decimal(components[1])? * rate
            }
            TimecodeFormat::MinutesSecondsFractions => {
                parse_decimal(components[0])? * 60.0 * rate
                    + parse_decimal(components[1])? * rate
                    + parse_decimal(components[2])?
            }
            TimecodeFormat::MinutesSecondsMillis => {
                parse_decimal(components[0])? * 60.0 * rate
                    + decimal_seconds(components[1], components[2])? * rate
            }
            TimecodeFormat::SecondsFractions => {
                parse_decimal(components[0])? * rate + parse_decimal(components[1])?
            }
            TimecodeFormat::SecondsMillis => decimal_seconds(components[0], components[1])? * rate,
        };

        let total_ticks = fractions_to_ticks(total_fractions, &params);
        Ok(Self::from_parts(
            total_ticks,
            fractions_per_second,
            round_mode,
            params,
        ))
    }

    /// Lenient wrapper around [`parse_tagged`](Self::parse_tagged); same
    /// contract as [`try_parse`](Self::try_parse).
    #[must_use]
    pub fn try_parse_tagged(
        input: &str,
        fractions_per_second: i32,
        layout: TimecodeFormat,
        round_mode: FractionRoundMode,
        separator: char,
    ) -> (Self, bool) {
        Self::parse_tagged(input, fractions_per_second, layout, round_mode, separator)
            .map_or_else(|_| (Self::zero(fractions_per_second), false), |tc| (tc, true))
    }
}

fn parse_integer(component: &str) -> Result<i64, TimecodeError> {
    component
        .parse::<i64>()
        .map_err(|_| TimecodeError::InvalidComponent {
            component: component.to_owned(),
        })
}

fn parse_decimal(component: &str) -> Result<f64, TimecodeError> {
    component
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| TimecodeError::InvalidComponent {
            component: component.to_owned(),
        })
}

// Seconds and milliseconds re-join into one decimal literal so "03" + "500"
// reads as 3.5 seconds, exactly as the pieces were split apart.
fn decimal_seconds(seconds: &str, millis: &str) -> Result<f64, TimecodeError> {
    parse_decimal(&format!("{seconds}.{millis}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::TICKS_PER_MILLISECOND;

    #[test]
    fn default_grammar_reads_right_to_left() {
        let tc = Timecode::parse("5", 25).expect("parse");
        assert_eq!(tc.total_ticks(), 5 * TICKS_PER_SECOND);
        let tc = Timecode::parse("1:05", 25).expect("parse");
        assert_eq!(tc.total_ticks(), 65 * TICKS_PER_SECOND);
        let tc = Timecode::parse("01:02:05", 25).expect("parse");
        assert_eq!(tc.total_ticks(), (3_600 + 2 * 60 + 5) * TICKS_PER_SECOND);
    }

    #[test]
    fn default_grammar_scales_fraction_suffix() {
        let tc = Timecode::parse("5.10", 25).expect("parse");
        // 10 fractions at 25/s = 400ms.
        assert_eq!(
            tc.total_ticks(),
            5 * TICKS_PER_SECOND + 400 * TICKS_PER_MILLISECOND
        );
    }

    #[test]
    fn default_grammar_rejects_fraction_above_rate() {
        assert!(matches!(
            Timecode::parse("5.30", 25),
            Err(TimecodeError::FractionOverflow { count: 30, rate: 25 })
        ));
        // Equal to the rate is still accepted.
        assert!(Timecode::parse("5.25", 25).is_ok());
    }

    #[test]
    fn default_grammar_rejects_blank_input() {
        assert!(matches!(Timecode::parse("", 25), Err(TimecodeError::Empty)));
        assert!(matches!(
            Timecode::parse("   \t", 25),
            Err(TimecodeError::Empty)
        ));
    }

    #[test]
    fn default_grammar_rejects_bad_shapes() {
        assert!(matches!(
            Timecode::parse("1:2:3:4", 25),
            Err(TimecodeError::ComponentCount(4))
        ));
        assert!(matches!(
            Timecode::parse("1.2.3", 25),
            Err(TimecodeError::MultipleFractionSeparators)
        ));
        assert!(matches!(
            Timecode::parse("1:x:3", 25),
            Err(TimecodeError::InvalidComponent { .. })
        ));
        assert!(matches!(
            Timecode::parse("5.", 25),
            Err(TimecodeError::InvalidComponent { .. })
        ));
    }

    #[test]
    fn default_grammar_validates_rate() {
        assert!(matches!(
            Timecode::parse("5", 0),
            Err(TimecodeError::RateOutOfRange(0))
        ));
    }

    #[test]
    fn tagged_grammar_decodes_fraction_layout() {
        let tc = Timecode::parse_tagged(
            "01:02:03.04",
            25,
            TimecodeFormat::HoursMinutesSecondsFractions,
            FractionRoundMode::Truncate,
            '.',
        )
        .expect("parse");
        // 4 fractions at 25/s = 160ms.
        assert_eq!(
            tc.total_ticks(),
            (3_600 + 2 * 60 + 3) * TICKS_PER_SECOND + 160 * TICKS_PER_MILLISECOND
        );
    }

    #[test]
    fn tagged_grammar_joins_millis_into_decimal_seconds() {
        let tc = Timecode::parse_tagged(
            "01:02:03.500",
            25,
            TimecodeFormat::HoursMinutesSecondsMillis,
            FractionRoundMode::Truncate,
            '.',
        )
        .expect("parse");
        assert_eq!(
            tc.total_ticks(),
            (3_600 + 2 * 60 + 3) * TICKS_PER_SECOND + 500 * TICKS_PER_MILLISECOND
        );
    }

    #[test]
    fn tagged_grammar_accepts_decimal_components() {
        // Decimal hours are legal in the tagged grammar.
        let tc = Timecode::parse_tagged(
            "1.5:00",
            25,
            TimecodeFormat::HoursMinutes,
            FractionRoundMode::Truncate,
            ',',
        )
        .expect("parse");
        assert_eq!(tc.total_ticks(), 90 * TICKS_PER_MINUTE);
    }

    #[test]
    fn tagged_grammar_honors_custom_separator() {
        let tc = Timecode::parse_tagged(
            "00:10,250",
            1000,
            TimecodeFormat::MinutesSecondsMillis,
            FractionRoundMode::Truncate,
            ',',
        )
        .expect("parse");
        assert_eq!(
            tc.total_ticks(),
            10 * TICKS_PER_SECOND + 250 * TICKS_PER_MILLISECOND
        );
    }

    #[test]
    fn tagged_grammar_rejects_arity_mismatch() {
        assert!(matches!(
            Timecode::parse_tagged(
                "01:02",
                25,
                TimecodeFormat::HoursMinutesSeconds,
                FractionRoundMode::Truncate,
                '.',
            ),
            Err(TimecodeError::LayoutMismatch {
                layout: TimecodeFormat::HoursMinutesSeconds,
                expected: 3,
                found: 2,
            })
        ));
    }

    #[test]
    fn tagged_grammar_rejects_non_numeric_and_non_finite() {
        assert!(matches!(
            Timecode::parse_tagged(
                "aa:05",
                25,
                TimecodeFormat::MinutesSeconds,
                FractionRoundMode::Truncate,
                '.',
            ),
            Err(TimecodeError::InvalidComponent { .. })
        ));
        assert!(matches!(
            Timecode::parse_tagged(
                "inf:05",
                25,
                TimecodeFormat::MinutesSeconds,
                FractionRoundMode::Truncate,
                '.',
            ),
            Err(TimecodeError::InvalidComponent { .. })
        ));
    }

    #[test]
    fn tagged_grammar_carries_round_mode() {
        let tc = Timecode::parse_tagged(
            "00:01.04",
            25,
            TimecodeFormat::MinutesSecondsFractions,
            FractionRoundMode::Round,
            '.',
        )
        .expect("parse");
        assert_eq!(tc.round_mode(), FractionRoundMode::Round);
    }

    #[test]
    fn try_parse_swallows_errors() {
        let (tc, ok) = Timecode::try_parse("garbage", 25);
        assert!(!ok);
        assert_eq!(tc.total_ticks(), 0);
        assert_eq!(tc.fractions_per_second(), 25);

        let (tc, ok) = Timecode::try_parse("1:05", 25);
        assert!(ok);
        assert_eq!(tc.total_ticks(), 65 * TICKS_PER_SECOND);
    }

    #[test]
    fn try_parse_clamps_bad_rate_in_fallback() {
        let (tc, ok) = Timecode::try_parse("5", 0);
        assert!(!ok);
        assert_eq!(tc.fractions_per_second(), 1000);
    }

    #[test]
    fn try_parse_tagged_swallows_errors() {
        let (tc, ok) = Timecode::try_parse_tagged(
            "not:a:time",
            25,
            TimecodeFormat::HoursMinutesSeconds,
            FractionRoundMode::Truncate,
            '.',
        );
        assert!(!ok);
        assert_eq!(tc.total_ticks(), 0);

        let (tc, ok) = Timecode::try_parse_tagged(
            "01:02:03",
            25,
            TimecodeFormat::HoursMinutesSeconds,
            FractionRoundMode::Truncate,
            '.',
        );
        assert!(ok);
        assert_eq!(tc.total_ticks(), (3_600 + 2 * 60 + 3) * TICKS_PER_SECOND);
    }
}
