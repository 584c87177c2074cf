// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Fraction rounding policy for text rendering.

/// How a floating-point fraction position becomes an integer count in text
/// output.
///
/// The policy only affects rendering; the authoritative tick count is never
/// rounded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FractionRoundMode {
    /// Truncate toward zero.
    #[default]
    Truncate,
    /// Truncate toward zero, then step one fraction away from zero whenever
    /// any partial fraction remains. Partials always round up in magnitude,
    /// regardless of how small they are.
    Real,
    /// Round to the nearest count, ties away from zero.
    Round,
}

impl FractionRoundMode {
    /// Applies the policy to a fraction position.
    #[must_use]
    pub fn apply(self, fractions: f64) -> i64 {
        match self {
            Self::Truncate => fractions.trunc() as i64,
            Self::Real => {
                let truncated = fractions.trunc();
                if fractions == truncated {
                    truncated as i64
                } else if fractions < 0.0 {
                    truncated as i64 - 1
                } else {
                    truncated as i64 + 1
                }
            }
            Self::Round => fractions.round() as i64,
        }
    }
}
