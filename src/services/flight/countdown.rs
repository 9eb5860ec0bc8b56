use chrono::{Datelike, NaiveDate, NaiveDateTime};

use super::calculator::FlightDateCalculator;
use crate::models::flight::{FlightDate, FlightYearInfo, YearInference};
use crate::models::plant::PlantRecord;
use crate::utils::date::{days_until_ceil, start_of_day};

/// First occurrence of `flight` (at midnight) that is not before `now`.
///
/// Tries `now`'s year and then the following one; a month-day missing from
/// the current year (Feb-29) rolls forward as well.
pub fn resolve_flight_day(flight: FlightDate, now: NaiveDateTime) -> Option<NaiveDate> {
    let year = now.year();
    match flight.in_year(year) {
        Some(candidate) if start_of_day(candidate) >= now => Some(candidate),
        _ => flight.in_year(year + 1),
    }
}

/// Days from `now` until the flight written as `text` (e.g. `"Feb-01"`).
///
/// Never negative; text that is not a valid month-day yields 0.
pub fn days_until_flight_date(text: &str, now: NaiveDateTime) -> i64 {
    let flight = match text.parse::<FlightDate>() {
        Ok(flight) => flight,
        Err(err) => {
            log::warn!("Cannot count down to flight date: {}", err);
            return 0;
        }
    };

    resolve_flight_day(flight, now)
        .map(|day| days_until_ceil(now, start_of_day(day)))
        .unwrap_or(0)
}

/// Derives countdowns and years for flight dates shown on listings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountdownEngine {
    calculator: FlightDateCalculator,
    year_inference: YearInference,
}

impl CountdownEngine {
    pub fn new(calculator: FlightDateCalculator, year_inference: YearInference) -> Self {
        Self {
            calculator,
            year_inference,
        }
    }

    pub fn calculator(&self) -> &FlightDateCalculator {
        &self.calculator
    }

    pub fn year_inference(&self) -> YearInference {
        self.year_inference
    }

    /// Whole days until the plant's next flight, rounded up.
    pub fn days_until_flight(&self, plant: &PlantRecord, now: NaiveDateTime) -> i64 {
        let text = self.calculator.flight_date_string(plant, now);
        days_until_flight_date(&text, now)
    }

    pub fn flight_year_info(&self, plant: &PlantRecord, now: NaiveDateTime) -> FlightYearInfo {
        let text = self.calculator.flight_date_string(plant, now);
        let this_year = now.year();

        match self.year_inference {
            YearInference::Calendar => {
                let flight_day = text
                    .parse::<FlightDate>()
                    .ok()
                    .and_then(|flight| resolve_flight_day(flight, now));
                match flight_day {
                    Some(day) => {
                        let days_until = days_until_ceil(now, start_of_day(day));
                        FlightYearInfo::new(text, day.year(), day.year() > this_year, days_until)
                    }
                    None => FlightYearInfo::new(text, this_year, false, 0),
                }
            }
            YearInference::LegacyThreshold { days } => {
                let days_until = days_until_flight_date(&text, now);
                let is_next_year = days_until > days;
                let year = if is_next_year { this_year + 1 } else { this_year };
                FlightYearInfo::new(text, year, is_next_year, days_until)
            }
        }
    }
}
