//! Date Ranges
//!
//! Two preset vocabularies share one enum. Scheduling screens look forward from today
//! (`today`, `next7days`, `nextmonth`); history screens look backward (`last7days`,
//! `last30days`, `last3months`, `thisyear`). All bounds are whole calendar days.

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use jiff::{Span, ToSpan, Zoned, civil::Date};
use serde::{Deserialize, Serialize};

use crate::parsing::ParseError;

/// Today's date in the system time zone.
pub fn today() -> Date {
    Zoned::now().date()
}

/// Which way a preset extends from today
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresetDirection {
    /// Today onwards
    Forward,

    /// Up to and including today
    Backward,

    /// Not anchored at today
    Unanchored,
}

/// Named date range selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum DateRangePreset {
    /// No constraint
    #[default]
    All,

    /// Today only
    Today,

    /// Today through seven days from now
    Next7Days,

    /// Today through one calendar month from now
    NextMonth,

    /// Seven days ago through today
    Last7Days,

    /// Thirty days ago through today
    Last30Days,

    /// Three calendar months ago through today
    Last3Months,

    /// January 1st of the current year through today
    ThisYear,

    /// Explicit start and end dates
    Custom,
}

impl DateRangePreset {
    /// All presets, in display order.
    pub const ALL: [Self; 9] = [
        Self::All,
        Self::Today,
        Self::Next7Days,
        Self::NextMonth,
        Self::Last7Days,
        Self::Last30Days,
        Self::Last3Months,
        Self::ThisYear,
        Self::Custom,
    ];

    /// Name used in configuration and on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Today => "today",
            Self::Next7Days => "next7days",
            Self::NextMonth => "nextmonth",
            Self::Last7Days => "last7days",
            Self::Last30Days => "last30days",
            Self::Last3Months => "last3months",
            Self::ThisYear => "thisyear",
            Self::Custom => "custom",
        }
    }

    /// Which way the preset extends from today.
    #[must_use]
    pub const fn direction(self) -> PresetDirection {
        match self {
            Self::Today | Self::Next7Days | Self::NextMonth => PresetDirection::Forward,
            Self::Last7Days | Self::Last30Days | Self::Last3Months | Self::ThisYear => {
                PresetDirection::Backward
            }
            Self::All | Self::Custom => PresetDirection::Unanchored,
        }
    }
}

impl Display for DateRangePreset {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl FromStr for DateRangePreset {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|preset| preset.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseError::unknown("date range preset", s))
    }
}

impl TryFrom<String> for DateRangePreset {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Inclusive start and end dates.
///
/// A range only constrains anything when both bounds are set; a lone start or end is an
/// open selection and matches every date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateBounds {
    /// First day in range
    pub start: Option<Date>,

    /// Last day in range
    pub end: Option<Date>,
}

impl DateBounds {
    /// Bounds that match every date.
    pub const UNBOUNDED: Self = Self {
        start: None,
        end: None,
    };

    /// Inclusive range from `start` to `end`.
    #[must_use]
    pub const fn between(start: Date, end: Date) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    /// Returns true if both bounds are set.
    #[must_use]
    pub const fn is_bounded(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    /// Returns true if `date` lies within the bounds, or the bounds are open.
    #[must_use]
    pub fn contains(&self, date: Date) -> bool {
        match (self.start, self.end) {
            (Some(start), Some(end)) => start <= date && date <= end,
            _ => true,
        }
    }
}

/// A preset together with the explicit dates used by [`DateRangePreset::Custom`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// Selected preset
    #[serde(default)]
    pub preset: DateRangePreset,

    /// Explicit start, used by `custom`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<Date>,

    /// Explicit end, used by `custom`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<Date>,
}

impl DateRange {
    /// Range for a named preset.
    #[must_use]
    pub const fn preset(preset: DateRangePreset) -> Self {
        Self {
            preset,
            start: None,
            end: None,
        }
    }

    /// Custom range; `end` may be omitted while a selection is still open.
    #[must_use]
    pub const fn custom(start: Date, end: Option<Date>) -> Self {
        Self {
            preset: DateRangePreset::Custom,
            start: Some(start),
            end,
        }
    }

    /// Resolve the range to concrete bounds anchored at `today`.
    #[must_use]
    pub fn bounds(&self, today: Date) -> DateBounds {
        compute_date_range_bounds(self.preset, self.start, self.end, today)
    }
}

/// Resolve a preset to concrete bounds anchored at `today`.
///
/// `custom` returns the explicit dates unchanged. Arithmetic that would leave the supported
/// calendar saturates at [`Date::MIN`] or [`Date::MAX`].
pub fn compute_date_range_bounds(
    preset: DateRangePreset,
    explicit_start: Option<Date>,
    explicit_end: Option<Date>,
    today: Date,
) -> DateBounds {
    match preset {
        DateRangePreset::All => DateBounds::UNBOUNDED,
        DateRangePreset::Custom => DateBounds {
            start: explicit_start,
            end: explicit_end,
        },
        DateRangePreset::Today => DateBounds::between(today, today),
        DateRangePreset::Next7Days => DateBounds::between(today, forward(today, 7.days())),
        DateRangePreset::NextMonth => DateBounds::between(today, forward(today, 1.month())),
        DateRangePreset::Last7Days => DateBounds::between(backward(today, 7.days()), today),
        DateRangePreset::Last30Days => DateBounds::between(backward(today, 30.days()), today),
        DateRangePreset::Last3Months => DateBounds::between(backward(today, 3.months()), today),
        DateRangePreset::ThisYear => DateBounds::between(today.first_of_year(), today),
    }
}

fn forward(today: Date, span: Span) -> Date {
    today.checked_add(span).unwrap_or(Date::MAX)
}

fn backward(today: Date, span: Span) -> Date {
    today.checked_sub(span).unwrap_or(Date::MIN)
}
