use chrono::{NaiveDate, NaiveDateTime};

use super::policy::PolicyResolver;
use crate::models::flight::FlightDate;
use crate::models::plant::PlantRecord;
use crate::models::policy::ShippingPolicy;
use crate::utils::date::{add_days, next_saturday};

/// Saturday a plant shipped under `policy` flies on, counted from `today`.
pub fn apply_policy(policy: ShippingPolicy, today: NaiveDate) -> NaiveDate {
    match policy {
        ShippingPolicy::WeeklySaturday => next_saturday(today),
        ShippingPolicy::OffsetThenSaturday { offset_days }
        | ShippingPolicy::Default { offset_days } => next_saturday(add_days(today, offset_days)),
    }
}

/// Computes the next flight date for plant listings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlightDateCalculator {
    resolver: PolicyResolver,
}

impl FlightDateCalculator {
    pub fn new(resolver: PolicyResolver) -> Self {
        Self { resolver }
    }

    pub fn resolver(&self) -> &PolicyResolver {
        &self.resolver
    }

    /// Full calendar date of the next flight for `plant`.
    pub fn flight_day(&self, plant: &PlantRecord, now: NaiveDateTime) -> NaiveDate {
        apply_policy(self.resolver.resolve(plant), now.date())
    }

    pub fn calculate(&self, plant: &PlantRecord, now: NaiveDateTime) -> FlightDate {
        FlightDate::from_date(self.flight_day(plant, now))
    }

    /// The flight date as displayed on a listing, e.g. `"Aug-15"`.
    pub fn flight_date_string(&self, plant: &PlantRecord, now: NaiveDateTime) -> String {
        self.calculate(plant, now).to_string()
    }
}
