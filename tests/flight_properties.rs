// Property-based tests for flight scheduling
// Checks the calendar rules over random dates and times of day

mod fixtures;

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, Weekday};
use proptest::prelude::*;

use fixtures::dates::ymd;
use plant_flights::models::flight::FlightDate;
use plant_flights::models::plant::PlantRecord;
use plant_flights::services::flight::{
    calculate_flight_date, days_until_flight, days_until_flight_date, flight_year_info,
    resolve_flight_day, FlightDateCalculator,
};
use plant_flights::utils::date::{add_days, days_until_ceil, next_saturday, start_of_day};

fn any_date() -> impl Strategy<Value = NaiveDate> {
    // 1990-01-01 through roughly 2126
    (0i64..50_000).prop_map(|offset| add_days(ymd(1990, 1, 1), offset))
}

fn any_now() -> impl Strategy<Value = NaiveDateTime> {
    (any_date(), 0u32..24, 0u32..60)
        .prop_map(|(date, hour, minute)| date.and_hms_opt(hour, minute, 0).unwrap())
}

fn offset_country() -> impl Strategy<Value = PlantRecord> {
    prop_oneof![
        Just(PlantRecord::with_country("philippines")),
        Just(PlantRecord::with_country("Indonesia")),
        Just(PlantRecord::with_country("Ecuador")),
        Just(PlantRecord::default()),
    ]
}

fn any_plant() -> impl Strategy<Value = PlantRecord> {
    prop_oneof![Just(PlantRecord::with_country("THAILAND")), offset_country()]
}

proptest! {
    /// Property: next Saturday is always a Saturday, one to seven days out
    #[test]
    fn prop_next_saturday_is_saturday(date in any_date()) {
        let saturday = next_saturday(date);
        prop_assert_eq!(saturday.weekday(), Weekday::Sat);
        let gap = (saturday - date).num_days();
        prop_assert!((1..=7).contains(&gap));
        match date.weekday() {
            Weekday::Sat => {
                prop_assert_eq!(gap, 7);
            }
            Weekday::Sun => {
                prop_assert_eq!(gap, 6);
            }
            _ => {
                prop_assert!(gap < 6);
            }
        }
    }

    #[test]
    fn prop_add_days_inverts(date in any_date(), days in -10_000i64..10_000) {
        prop_assert_eq!(add_days(add_days(date, days), -days), date);
        prop_assert_eq!(add_days(date, days) - date, Duration::days(days));
    }

    /// Property: Thailand flies on a Saturday within the coming week
    #[test]
    fn prop_thailand_within_a_week(now in any_now()) {
        let flight_day = FlightDateCalculator::default()
            .flight_day(&PlantRecord::with_country("thailand"), now);
        prop_assert_eq!(flight_day.weekday(), Weekday::Sat);
        let gap = (flight_day - now.date()).num_days();
        prop_assert!((1..=7).contains(&gap));
    }

    /// Property: offset countries fly at least four weeks out, on the first
    /// Saturday after the offset
    #[test]
    fn prop_offset_countries_at_least_four_weeks(now in any_now(), plant in offset_country()) {
        let flight_day = FlightDateCalculator::default().flight_day(&plant, now);
        prop_assert_eq!(flight_day.weekday(), Weekday::Sat);
        let gap = (flight_day - now.date()).num_days();
        prop_assert!((29..=35).contains(&gap), "gap was {}", gap);
        prop_assert_eq!(flight_day, next_saturday(add_days(now.date(), 28)));
    }

    #[test]
    fn prop_days_until_flight_matches_flight_day(now in any_now(), plant in any_plant()) {
        let flight_day = FlightDateCalculator::default().flight_day(&plant, now);
        let days = days_until_flight(&plant, now);
        prop_assert!(days >= 0);
        prop_assert_eq!(days, days_until_ceil(now, start_of_day(flight_day)));
    }

    /// Property: the displayed month-day string maps back to the same flight
    #[test]
    fn prop_round_trip_through_display(now in any_now(), plant in any_plant()) {
        let flight = calculate_flight_date(&plant, now);
        let parsed: FlightDate = flight.to_string().parse().unwrap();
        prop_assert_eq!(parsed.month(), flight.month());
        prop_assert_eq!(parsed.day(), flight.day());

        let flight_day = FlightDateCalculator::default().flight_day(&plant, now);
        prop_assert_eq!(resolve_flight_day(parsed, now), Some(flight_day));
    }

    #[test]
    fn prop_calendar_year_matches_flight_day(now in any_now(), plant in any_plant()) {
        let flight_day = FlightDateCalculator::default().flight_day(&plant, now);
        let info = flight_year_info(&plant, now);
        prop_assert_eq!(info.year, flight_day.year());
        prop_assert_eq!(info.is_next_year, flight_day.year() > now.year());
        prop_assert_eq!(&info.full_date, &format!("{}-{}", info.flight_date, info.year));
    }

    #[test]
    fn prop_arbitrary_text_never_negative(text in ".{0,12}", now in any_now()) {
        prop_assert!(days_until_flight_date(&text, now) >= 0);
    }
}
