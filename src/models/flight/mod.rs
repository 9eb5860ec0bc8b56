// Flight module
// Month-day flight dates as shown to buyers, plus the derived countdown record

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// English month abbreviations used in flight date strings, January first.
pub const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Countdown length above which the legacy rule treats a flight as next year's.
pub const LEGACY_NEXT_YEAR_THRESHOLD_DAYS: i64 = 300;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlightDateParseError {
    #[error("flight date '{0}' is not in Mon-DD form")]
    MissingSeparator(String),
    #[error("unknown month abbreviation '{0}'")]
    UnknownMonth(String),
    #[error("invalid day '{day}' for {month}")]
    InvalidDay { month: String, day: String },
}

/// A flight date without a year, rendered as `"{Mon}-{DD}"` (e.g. `"Aug-15"`).
///
/// The missing year is inherent to the display format; see
/// [`FlightDate::in_year`] for turning it back into a calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FlightDate {
    month: u32,
    day: u32,
}

impl FlightDate {
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            month: date.month(),
            day: date.day(),
        }
    }

    /// Month number, 1 = January
    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn month_abbreviation(&self) -> &'static str {
        MONTH_ABBREVIATIONS[(self.month - 1) as usize]
    }

    /// The calendar date for this month-day in `year`, if it exists there
    /// (`Feb-29` only exists in leap years).
    pub fn in_year(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.month, self.day)
    }
}

impl fmt::Display for FlightDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}", self.month_abbreviation(), self.day)
    }
}

impl FromStr for FlightDate {
    type Err = FlightDateParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (month_text, day_text) = s
            .trim()
            .split_once('-')
            .ok_or_else(|| FlightDateParseError::MissingSeparator(s.to_string()))?;

        let month = MONTH_ABBREVIATIONS
            .iter()
            .position(|abbr| *abbr == month_text)
            .map(|index| index as u32 + 1)
            .ok_or_else(|| FlightDateParseError::UnknownMonth(month_text.to_string()))?;

        let invalid_day = || FlightDateParseError::InvalidDay {
            month: month_text.to_string(),
            day: day_text.to_string(),
        };
        if day_text.is_empty()
            || day_text.len() > 2
            || !day_text.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(invalid_day());
        }
        let day: u32 = day_text.parse().map_err(|_| invalid_day())?;

        // 2000 is a leap year, so Feb-29 is accepted here
        if NaiveDate::from_ymd_opt(2000, month, day).is_none() {
            return Err(invalid_day());
        }

        Ok(Self { month, day })
    }
}

/// How a year is attached to a year-less flight date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum YearInference {
    /// Use the year of the first occurrence of the month-day not before now
    Calendar,
    /// Treat the flight as next year's when it is more than `days` away
    LegacyThreshold { days: i64 },
}

impl YearInference {
    pub fn legacy() -> Self {
        Self::LegacyThreshold {
            days: LEGACY_NEXT_YEAR_THRESHOLD_DAYS,
        }
    }
}

impl Default for YearInference {
    fn default() -> Self {
        Self::Calendar
    }
}

/// Flight date with the year made explicit, as displayed on a listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightYearInfo {
    pub flight_date: String,
    pub year: i32,
    pub is_next_year: bool,
    pub days_until: i64,
    pub full_date: String,
}

impl FlightYearInfo {
    pub fn new(flight_date: impl Into<String>, year: i32, is_next_year: bool, days_until: i64) -> Self {
        let flight_date = flight_date.into();
        let full_date = format!("{}-{}", flight_date, year);
        Self {
            flight_date,
            year,
            is_next_year,
            days_until,
            full_date,
        }
    }
}
