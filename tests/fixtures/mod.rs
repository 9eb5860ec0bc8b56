// Test fixtures - reusable test data
// Provides consistent dates and plant listings across all test files

#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};

/// Sample dates for testing
pub mod dates {
    use super::*;

    pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    pub fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
        ymd(year, month, day).and_hms_opt(hour, minute, 0).unwrap()
    }

    /// Returns Jan 1, 2025 at midnight (a Wednesday)
    pub fn jan_1_2025() -> NaiveDateTime {
        at(2025, 1, 1, 0, 0)
    }

    /// Returns Feb 1, 2025 at 09:00 (a Saturday)
    pub fn saturday_feb_1_2025() -> NaiveDateTime {
        at(2025, 2, 1, 9, 0)
    }

    /// Returns Feb 2, 2025 at 18:30 (a Sunday)
    pub fn sunday_feb_2_2025() -> NaiveDateTime {
        at(2025, 2, 2, 18, 30)
    }

    /// Returns Dec 10, 2025 at 08:00, four weeks before New Year flights
    pub fn early_december_2025() -> NaiveDateTime {
        at(2025, 12, 10, 8, 0)
    }

    /// Returns Dec 31, 2025 at 23:59 (New Year's Eve)
    pub fn new_years_eve_2025() -> NaiveDateTime {
        at(2025, 12, 31, 23, 59)
    }
}

/// Sample plant listings for testing
pub mod plants {
    use plant_flights::models::plant::{PlantRecord, PlantVariation};

    pub fn from_thailand() -> PlantRecord {
        PlantRecord::with_country("Thailand")
    }

    pub fn from_philippines() -> PlantRecord {
        PlantRecord::with_country("philippines")
    }

    pub fn from_indonesia() -> PlantRecord {
        PlantRecord::with_country("INDONESIA")
    }

    pub fn from_unlisted_country() -> PlantRecord {
        PlantRecord::with_country("Ecuador")
    }

    pub fn without_country() -> PlantRecord {
        PlantRecord::default()
    }

    /// Bulk-imported listing that only records the country per variation
    pub fn thai_variations_only() -> PlantRecord {
        PlantRecord::with_variations(vec![
            PlantVariation::default(),
            PlantVariation::from_country(""),
            PlantVariation::from_country("thailand"),
            PlantVariation::from_country("indonesia"),
        ])
    }
}
