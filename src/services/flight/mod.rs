// Flight scheduling services
// Next flight date per origin country, and countdowns to it

mod calculator;
mod clock;
mod countdown;
mod policy;
mod service;

use chrono::NaiveDateTime;

use crate::models::flight::{FlightDate, FlightYearInfo};
use crate::models::plant::PlantRecord;

pub use calculator::{apply_policy, FlightDateCalculator};
pub use clock::{Clock, FixedClock, SystemClock};
pub use countdown::{days_until_flight_date, resolve_flight_day, CountdownEngine};
pub use policy::PolicyResolver;
pub use service::FlightScheduleService;

/// Next flight date for `plant` under the standard cadences.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use plant_flights::models::plant::PlantRecord;
/// use plant_flights::services::flight::calculate_flight_date;
///
/// let now = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap().and_hms_opt(9, 0, 0).unwrap();
/// let flight = calculate_flight_date(&PlantRecord::with_country("thailand"), now);
/// assert_eq!(flight.to_string(), "Jan-04");
/// ```
pub fn calculate_flight_date(plant: &PlantRecord, now: NaiveDateTime) -> FlightDate {
    FlightDateCalculator::default().calculate(plant, now)
}

/// Whole days until the plant's next flight, never negative.
pub fn days_until_flight(plant: &PlantRecord, now: NaiveDateTime) -> i64 {
    CountdownEngine::default().days_until_flight(plant, now)
}

/// Flight date with its year resolved, using calendar year inference.
pub fn flight_year_info(plant: &PlantRecord, now: NaiveDateTime) -> FlightYearInfo {
    CountdownEngine::default().flight_year_info(plant, now)
}
