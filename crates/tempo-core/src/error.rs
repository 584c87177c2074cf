// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Error taxonomy for timecode construction and parsing.

use thiserror::Error;

use crate::format::TimecodeFormat;

/// Errors produced while constructing or parsing a [`Timecode`](crate::Timecode).
///
/// All variants are raised synchronously at the offending call; nothing is
/// retried internally. The `try_parse*` family is the sanctioned recovery
/// path and swallows every variant listed here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimecodeError {
    /// Fraction rate outside the accepted range at construction time.
    ///
    /// Mutating an existing value to an invalid rate is *not* an error; it
    /// silently resets the rate to the default instead.
    #[error("fractions per second out of range: {0} (expected 1..=1000)")]
    RateOutOfRange(i32),
    /// Empty or whitespace-only parse input.
    #[error("timecode string is empty")]
    Empty,
    /// Default-grammar input contained more than one fraction separator.
    #[error("more than one fraction separator")]
    MultipleFractionSeparators,
    /// Default-grammar split produced an unsupported number of components.
    #[error("expected 1 to 3 time components, found {0}")]
    ComponentCount(usize),
    /// Tagged-grammar split did not match the layout's component count.
    #[error("layout {layout} expects {expected} components, found {found}")]
    LayoutMismatch {
        /// Layout the caller asked for.
        layout: TimecodeFormat,
        /// Component count the layout requires.
        expected: usize,
        /// Component count actually found in the input.
        found: usize,
    },
    /// A component failed to parse as a number.
    #[error("invalid timecode component {component:?}")]
    InvalidComponent {
        /// The offending component text.
        component: String,
    },
    /// Default-grammar fraction count above the configured rate.
    #[error("fraction count {count} exceeds {rate} fractions per second")]
    FractionOverflow {
        /// Parsed fraction count.
        count: i64,
        /// Configured fractions per second.
        rate: i32,
    },
}
