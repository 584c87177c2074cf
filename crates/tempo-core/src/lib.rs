// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! tempo-core: deterministic tick-resolution media timecode.
//!
//! A [`Timecode`] stores total elapsed ticks (100ns units) as the single
//! source of truth, decomposes them into days/hours/minutes/seconds and a
//! configurable-rate fraction position, renders nine fixed string layouts,
//! and parses them back. Pure value semantics throughout: no I/O, no shared
//! state, every operation bounded.
#![forbid(unsafe_code)]
#![deny(missing_docs, rust_2018_idioms, unused_must_use)]
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::unreadable_literal,
    clippy::missing_const_for_fn,
    clippy::suboptimal_flops,
    clippy::redundant_pub_crate,
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::use_self
)]
// Exact comparison against a trunc() result is the Real rounding rule:
// any nonzero remainder, however small, must round up.
#![allow(clippy::float_cmp)]

mod constants;
mod error;
mod fields;
mod format;
mod fraction;
mod parse;
mod round;
mod timecode;

// Re-exports for stable public API
/// Exact tick conversion ladder and fraction-rate bounds.
pub use constants::{
    DEFAULT_FRACTIONS_PER_SECOND, HOURS_PER_DAY, MAX_FRACTIONS_PER_SECOND,
    MILLISECONDS_PER_SECOND, MIN_FRACTIONS_PER_SECOND, MINUTES_PER_HOUR, SECONDS_PER_MINUTE,
    TICKS_PER_DAY, TICKS_PER_HOUR, TICKS_PER_MILLISECOND, TICKS_PER_MINUTE, TICKS_PER_SECOND,
};
/// Construction and parse failure taxonomy.
pub use error::TimecodeError;
/// The nine fixed string layouts.
pub use format::TimecodeFormat;
/// Fraction rounding policy for text rendering.
pub use round::FractionRoundMode;
/// The timecode value type.
pub use timecode::Timecode;
