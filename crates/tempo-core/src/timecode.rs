// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! The [`Timecode`] value type.
//!
//! A `Timecode` is a tick-resolution time quantity (1 tick = 100ns) plus a
//! configurable fractions-per-second rate. The tick count is the single
//! source of truth; the calendar-like fields are a cached decomposition that
//! every mutator resynchronizes. Copies are independent — there is no shared
//! state to protect.

use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::{Add, Sub};

use crate::constants::{
    DEFAULT_FRACTIONS_PER_SECOND, TICKS_PER_DAY, TICKS_PER_HOUR, TICKS_PER_MILLISECOND,
    TICKS_PER_MINUTE, TICKS_PER_SECOND,
};
use crate::error::TimecodeError;
use crate::fields::{decompose, recompose, TimeFields};
use crate::fraction::{fractions_to_ticks, FractionParams};
use crate::round::FractionRoundMode;

/// Tick-resolution media timecode.
///
/// Ordering, equality and hashing consider the tick count only; two values
/// at different fraction rates compare equal whenever their ticks agree.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "TimecodeRepr", into = "TimecodeRepr"))]
pub struct Timecode {
    total_ticks: i64,
    fractions_per_second: i32,
    round_mode: FractionRoundMode,
    params: FractionParams,
    fields: TimeFields,
}

impl Timecode {
    /// Creates a timecode from a tick count and a fraction rate.
    ///
    /// Any tick count is accepted, including negative ones. The rate must be
    /// in `1..=1000`; anything else is [`TimecodeError::RateOutOfRange`].
    /// The rounding mode defaults to [`FractionRoundMode::Truncate`].
    pub fn new(total_ticks: i64, fractions_per_second: i32) -> Result<Self, TimecodeError> {
        let params = FractionParams::try_new(fractions_per_second)?;
        Ok(Self::from_parts(
            total_ticks,
            fractions_per_second,
            FractionRoundMode::Truncate,
            params,
        ))
    }

    /// Returns the same timecode with a different rendering round mode.
    #[must_use]
    pub fn with_round_mode(mut self, round_mode: FractionRoundMode) -> Self {
        self.round_mode = round_mode;
        self
    }

    /// Creates a timecode from a whole fraction count.
    ///
    /// Never fails: an out-of-range rate resets to the default, mirroring
    /// the rate mutator. The tick count is
    /// `trunc(count × millis_per_fraction × 10_000)`.
    #[must_use]
    pub fn from_fractions(
        count: i64,
        fractions_per_second: i32,
        round_mode: FractionRoundMode,
    ) -> Self {
        let (rate, params) = FractionParams::clamped(fractions_per_second);
        let ticks = fractions_to_ticks(count as f64, &params);
        Self::from_parts(ticks, rate, round_mode, params)
    }

    /// Zero ticks at the given rate (clamped if out of range).
    #[must_use]
    pub fn zero(fractions_per_second: i32) -> Self {
        let (rate, params) = FractionParams::clamped(fractions_per_second);
        Self::from_parts(0, rate, FractionRoundMode::Truncate, params)
    }

    pub(crate) fn from_parts(
        total_ticks: i64,
        fractions_per_second: i32,
        round_mode: FractionRoundMode,
        params: FractionParams,
    ) -> Self {
        Self {
            total_ticks,
            fractions_per_second,
            round_mode,
            params,
            fields: decompose(total_ticks, &params),
        }
    }

    /// Total elapsed ticks (100ns units). Authoritative.
    #[must_use]
    pub const fn total_ticks(&self) -> i64 {
        self.total_ticks
    }

    /// Whole days.
    #[must_use]
    pub const fn days(&self) -> i32 {
        self.fields.days
    }

    /// Hours within the day.
    #[must_use]
    pub const fn hours(&self) -> i32 {
        self.fields.hours
    }

    /// Minutes within the hour.
    #[must_use]
    pub const fn minutes(&self) -> i32 {
        self.fields.minutes
    }

    /// Seconds within the minute.
    #[must_use]
    pub const fn seconds(&self) -> i32 {
        self.fields.seconds
    }

    /// Milliseconds within the second.
    #[must_use]
    pub const fn milliseconds(&self) -> i32 {
        self.fields.milliseconds
    }

    /// Sub-millisecond tick remainder (`0..=9999` for non-negative times).
    #[must_use]
    pub const fn ticks(&self) -> i32 {
        self.fields.ticks
    }

    /// Position within the second, in fraction units at the configured rate.
    #[must_use]
    pub const fn fractions(&self) -> f64 {
        self.fields.fractions
    }

    /// Configured fractions per second.
    #[must_use]
    pub const fn fractions_per_second(&self) -> i32 {
        self.fractions_per_second
    }

    /// Rendering round mode.
    #[must_use]
    pub const fn round_mode(&self) -> FractionRoundMode {
        self.round_mode
    }

    /// Milliseconds covered by one fraction: `round(1000 / rate, 4)`.
    #[must_use]
    pub const fn millis_per_fraction(&self) -> f64 {
        self.params.millis_per_fraction
    }

    /// Digits used to render a fraction count.
    #[must_use]
    pub const fn digits_per_fraction(&self) -> u32 {
        self.params.digits_per_fraction
    }

    /// The fraction position rounded for rendering under the current mode.
    #[must_use]
    pub fn rounded_fractions(&self) -> i64 {
        self.round_mode.apply(self.fields.fractions)
    }

    /// Replaces the tick count and resynchronizes every derived field.
    pub fn set_total_ticks(&mut self, total_ticks: i64) {
        self.total_ticks = total_ticks;
        self.resync_fields();
    }

    /// Sets the day field and recomputes ticks from the full field set.
    pub fn set_days(&mut self, days: i32) {
        self.fields.days = days;
        self.resync_from_fields();
    }

    /// Sets the hour field and recomputes ticks from the full field set.
    pub fn set_hours(&mut self, hours: i32) {
        self.fields.hours = hours;
        self.resync_from_fields();
    }

    /// Sets the minute field and recomputes ticks from the full field set.
    pub fn set_minutes(&mut self, minutes: i32) {
        self.fields.minutes = minutes;
        self.resync_from_fields();
    }

    /// Sets the second field and recomputes ticks from the full field set.
    pub fn set_seconds(&mut self, seconds: i32) {
        self.fields.seconds = seconds;
        self.resync_from_fields();
    }

    /// Sets the millisecond field and recomputes ticks from the full field
    /// set.
    pub fn set_milliseconds(&mut self, milliseconds: i32) {
        self.fields.milliseconds = milliseconds;
        self.resync_from_fields();
    }

    /// Sets the sub-millisecond tick remainder and recomputes ticks from the
    /// full field set.
    pub fn set_ticks(&mut self, ticks: i32) {
        self.fields.ticks = ticks;
        self.resync_from_fields();
    }

    /// Sets the fraction position.
    ///
    /// The position is converted to milliseconds through the shared
    /// conversion factor (`trunc(value × millis_per_fraction)`) and written
    /// into the millisecond field; fractions are never authoritative.
    pub fn set_fractions(&mut self, fractions: f64) {
        let millis = (fractions * self.params.millis_per_fraction).trunc() as i32;
        self.set_milliseconds(millis);
    }

    /// Changes the fraction rate.
    ///
    /// Unlike construction, an out-of-range rate is not an error here: it
    /// silently resets to the default (1000) before the derived fields
    /// resynchronize.
    pub fn set_fractions_per_second(&mut self, fractions_per_second: i32) {
        let (rate, params) = FractionParams::clamped(fractions_per_second);
        self.fractions_per_second = rate;
        self.params = params;
        self.resync_fields();
    }

    /// Changes the rendering round mode. Nothing else is affected.
    pub fn set_round_mode(&mut self, round_mode: FractionRoundMode) {
        self.round_mode = round_mode;
    }

    /// Unwrapped whole days.
    #[must_use]
    pub const fn total_days(&self) -> i64 {
        self.total_ticks / TICKS_PER_DAY
    }

    /// Unwrapped whole hours (may exceed 23).
    #[must_use]
    pub const fn total_hours(&self) -> i64 {
        self.total_ticks / TICKS_PER_HOUR
    }

    /// Unwrapped whole minutes (may exceed 59).
    #[must_use]
    pub const fn total_minutes(&self) -> i64 {
        self.total_ticks / TICKS_PER_MINUTE
    }

    /// Unwrapped whole seconds (may exceed 59).
    #[must_use]
    pub const fn total_seconds(&self) -> i64 {
        self.total_ticks / TICKS_PER_SECOND
    }

    /// Total days as floating point.
    #[must_use]
    pub fn as_days_f64(&self) -> f64 {
        self.total_ticks as f64 / TICKS_PER_DAY as f64
    }

    /// Total hours as floating point.
    #[must_use]
    pub fn as_hours_f64(&self) -> f64 {
        self.total_ticks as f64 / TICKS_PER_HOUR as f64
    }

    /// Total minutes as floating point.
    #[must_use]
    pub fn as_minutes_f64(&self) -> f64 {
        self.total_ticks as f64 / TICKS_PER_MINUTE as f64
    }

    /// Total seconds as floating point.
    #[must_use]
    pub fn as_seconds_f64(&self) -> f64 {
        self.total_ticks as f64 / TICKS_PER_SECOND as f64
    }

    /// Total milliseconds as floating point.
    #[must_use]
    pub fn as_milliseconds_f64(&self) -> f64 {
        self.total_ticks as f64 / TICKS_PER_MILLISECOND as f64
    }

    /// Total fractions as floating point.
    #[must_use]
    pub fn as_fractions_f64(&self) -> f64 {
        self.as_milliseconds_f64() / self.params.millis_per_fraction
    }

    /// Shifts the time by whole days.
    pub fn add_days(&mut self, days: i64) {
        self.set_total_ticks(self.total_ticks + days * TICKS_PER_DAY);
    }

    /// Shifts the time by whole hours.
    pub fn add_hours(&mut self, hours: i64) {
        self.set_total_ticks(self.total_ticks + hours * TICKS_PER_HOUR);
    }

    /// Shifts the time by whole minutes.
    pub fn add_minutes(&mut self, minutes: i64) {
        self.set_total_ticks(self.total_ticks + minutes * TICKS_PER_MINUTE);
    }

    /// Shifts the time by whole seconds.
    pub fn add_seconds(&mut self, seconds: i64) {
        self.set_total_ticks(self.total_ticks + seconds * TICKS_PER_SECOND);
    }

    /// Shifts the time by whole milliseconds.
    pub fn add_milliseconds(&mut self, milliseconds: i64) {
        self.set_total_ticks(self.total_ticks + milliseconds * TICKS_PER_MILLISECOND);
    }

    /// Shifts the time by whole fractions at the configured rate.
    pub fn add_fractions(&mut self, count: i64) {
        self.set_total_ticks(self.total_ticks + fractions_to_ticks(count as f64, &self.params));
    }

    /// Shifts the time by raw ticks.
    pub fn add_ticks(&mut self, ticks: i64) {
        self.set_total_ticks(self.total_ticks + ticks);
    }

    fn resync_fields(&mut self) {
        self.fields = decompose(self.total_ticks, &self.params);
    }

    fn resync_from_fields(&mut self) {
        self.total_ticks = recompose(&self.fields);
        self.resync_fields();
    }
}

impl Default for Timecode {
    fn default() -> Self {
        Self::zero(DEFAULT_FRACTIONS_PER_SECOND)
    }
}

impl PartialEq for Timecode {
    fn eq(&self, other: &Self) -> bool {
        self.total_ticks == other.total_ticks
    }
}

impl Eq for Timecode {}

impl Hash for Timecode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.total_ticks.hash(state);
    }
}

impl PartialOrd for Timecode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Timecode {
    fn cmp(&self, other: &Self) -> Ordering {
        self.total_ticks.cmp(&other.total_ticks)
    }
}

impl Add for Timecode {
    type Output = Self;

    /// The result copies the left operand wholesale (rate and round mode
    /// included) and shifts its ticks; the right operand contributes ticks
    /// only.
    fn add(self, rhs: Self) -> Self {
        let mut out = self;
        out.set_total_ticks(self.total_ticks + rhs.total_ticks);
        out
    }
}

impl Sub for Timecode {
    type Output = Self;

    /// See [`Add`]: the right operand contributes ticks only.
    fn sub(self, rhs: Self) -> Self {
        let mut out = self;
        out.set_total_ticks(self.total_ticks - rhs.total_ticks);
        out
    }
}

impl fmt::Display for Timecode {
    /// Renders `DD:HH:MM:SS.FFFF` with the fraction count left-padded to
    /// [`digits_per_fraction`](Self::digits_per_fraction) digits under the
    /// configured round mode.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}:{:02}.{:0width$}",
            self.fields.days,
            self.fields.hours,
            self.fields.minutes,
            self.fields.seconds,
            self.rounded_fractions(),
            width = self.params.digits_per_fraction as usize,
        )
    }
}

/// Authoritative wire representation: everything else is derived.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct TimecodeRepr {
    total_ticks: i64,
    fractions_per_second: i32,
    round_mode: FractionRoundMode,
}

#[cfg(feature = "serde")]
impl From<TimecodeRepr> for Timecode {
    fn from(repr: TimecodeRepr) -> Self {
        // Deserialization cannot fail on a bad rate; clamp like the mutator.
        let (rate, params) = FractionParams::clamped(repr.fractions_per_second);
        Self::from_parts(repr.total_ticks, rate, repr.round_mode, params)
    }
}

#[cfg(feature = "serde")]
impl From<Timecode> for TimecodeRepr {
    fn from(tc: Timecode) -> Self {
        Self {
            total_ticks: tc.total_ticks,
            fractions_per_second: tc.fractions_per_second,
            round_mode: tc.round_mode,
        }
    }
}
