// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Fixed timecode string layouts.
//!
//! Nine layouts over *unwrapped* totals (total minutes may exceed 59),
//! distinguishing them from [`Timecode`]'s `Display`, which renders wrapped
//! calendar fields. The separator between the seconds and sub-second parts
//! is a caller choice; everything else is fixed.

use core::fmt;

use crate::timecode::Timecode;

/// Tag selecting one of the nine fixed timecode layouts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TimecodeFormat {
    /// `HH:MM`.
    HoursMinutes,
    /// `HH:MM:SS`.
    HoursMinutesSeconds,
    /// `HH:MM:SS{sep}FF` — fraction count at `digits_per_fraction` width.
    HoursMinutesSecondsFractions,
    /// `HH:MM:SS{sep}mmm` — milliseconds at width 3.
    HoursMinutesSecondsMillis,
    /// `MM:SS`.
    MinutesSeconds,
    /// `MM:SS{sep}FF`.
    MinutesSecondsFractions,
    /// `MM:SS{sep}mmm`.
    MinutesSecondsMillis,
    /// `SS{sep}FF`.
    SecondsFractions,
    /// `SS{sep}mmm`.
    SecondsMillis,
}

impl TimecodeFormat {
    /// Number of components the layout carries once the fraction separator
    /// is normalized away (the parse arity).
    #[must_use]
    pub const fn component_count(self) -> usize {
        match self {
            Self::HoursMinutes | Self::MinutesSeconds | Self::SecondsFractions | Self::SecondsMillis => 2,
            Self::HoursMinutesSeconds | Self::MinutesSecondsFractions | Self::MinutesSecondsMillis => 3,
            Self::HoursMinutesSecondsFractions | Self::HoursMinutesSecondsMillis => 4,
        }
    }

    /// `true` for the layouts whose trailing component is a fraction count.
    #[must_use]
    pub const fn has_fractions(self) -> bool {
        matches!(
            self,
            Self::HoursMinutesSecondsFractions | Self::MinutesSecondsFractions | Self::SecondsFractions
        )
    }
}

impl fmt::Display for TimecodeFormat {
    /// Prints the canonical layout pattern, e.g. `HH:mm:ss.ff`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pattern = match self {
            Self::HoursMinutes => "HH:mm",
            Self::HoursMinutesSeconds => "HH:mm:ss",
            Self::HoursMinutesSecondsFractions => "HH:mm:ss.ff",
            Self::HoursMinutesSecondsMillis => "HH:mm:ss.mmm",
            Self::MinutesSeconds => "mm:ss",
            Self::MinutesSecondsFractions => "mm:ss.ff",
            Self::MinutesSecondsMillis => "mm:ss.mmm",
            Self::SecondsFractions => "ss.ff",
            Self::SecondsMillis => "ss.mmm",
        };
        f.write_str(pattern)
    }
}

impl Timecode {
    /// Renders the timecode under a fixed layout with `.` as the fraction
    /// separator.
    #[must_use]
    pub fn format(&self, layout: TimecodeFormat) -> String {
        self.format_with_separator(layout, '.')
    }

    /// Renders the timecode under a fixed layout with an explicit separator
    /// between the seconds and sub-second parts.
    ///
    /// Fraction counts honor the configured round mode and render at
    /// [`digits_per_fraction`](Self::digits_per_fraction) width; millisecond
    /// components always render at width 3.
    #[must_use]
    pub fn format_with_separator(&self, layout: TimecodeFormat, separator: char) -> String {
        let width = self.digits_per_fraction() as usize;
        match layout {
            TimecodeFormat::HoursMinutes => {
                format!("{:02}:{:02}", self.total_hours(), self.minutes())
            }
            TimecodeFormat::HoursMinutesSeconds => format!(
                "{:02}:{:02}:{:02}",
                self.total_hours(),
                self.minutes(),
                self.seconds()
            ),
            TimecodeFormat::HoursMinutesSecondsFractions => format!(
                "{:02}:{:02}:{:02}{}{:0width$}",
                self.total_hours(),
                self.minutes(),
                self.seconds(),
                separator,
                self.rounded_fractions(),
            ),
            TimecodeFormat::HoursMinutesSecondsMillis => format!(
                "{:02}:{:02}:{:02}{}{:03}",
                self.total_hours(),
                self.minutes(),
                self.seconds(),
                separator,
                self.milliseconds()
            ),
            TimecodeFormat::MinutesSeconds => {
                format!("{:02}:{:02}", self.total_minutes(), self.seconds())
            }
            TimecodeFormat::MinutesSecondsFractions => format!(
                "{:02}:{:02}{}{:0width$}",
                self.total_minutes(),
                self.seconds(),
                separator,
                self.rounded_fractions(),
            ),
            TimecodeFormat::MinutesSecondsMillis => format!(
                "{:02}:{:02}{}{:03}",
                self.total_minutes(),
                self.seconds(),
                separator,
                self.milliseconds()
            ),
            TimecodeFormat::SecondsFractions => format!(
                "{:02}{}{:0width$}",
                self.total_seconds(),
                separator,
                self.rounded_fractions(),
            ),
            TimecodeFormat::SecondsMillis => format!(
                "{:02}{}{:03}",
                self.total_seconds(),
                separator,
                self.milliseconds()
            ),
        }
    }
}
