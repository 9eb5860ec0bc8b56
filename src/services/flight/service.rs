use anyhow::Result;

use super::clock::{Clock, SystemClock};
use super::countdown::CountdownEngine;
use crate::models::flight::FlightYearInfo;
use crate::models::plant::PlantRecord;
use crate::models::policy::ShippingPolicy;
use crate::services::config::FlightConfig;

/// Flight-date lookups for listing screens, reading "now" from a clock.
///
/// Each call reads the clock exactly once; use [`FlightScheduleService::year_info`]
/// rather than separate calls when a screen needs both the date and the countdown.
pub struct FlightScheduleService {
    engine: CountdownEngine,
    clock: Box<dyn Clock>,
}

impl FlightScheduleService {
    pub fn new(engine: CountdownEngine, clock: Box<dyn Clock>) -> Self {
        Self { engine, clock }
    }

    /// Build a service from configuration, using the system clock in the
    /// configured timezone.
    pub fn from_config(config: &FlightConfig) -> Result<Self> {
        let clock = match config.timezone()? {
            Some(tz) => SystemClock::in_timezone(tz),
            None => SystemClock::local(),
        };
        Ok(Self::with_clock(config, Box::new(clock)))
    }

    pub fn with_clock(config: &FlightConfig, clock: Box<dyn Clock>) -> Self {
        Self::new(config.countdown_engine(), clock)
    }

    pub fn engine(&self) -> &CountdownEngine {
        &self.engine
    }

    pub fn policy(&self, plant: &PlantRecord) -> ShippingPolicy {
        self.engine.calculator().resolver().resolve(plant)
    }

    pub fn flight_date(&self, plant: &PlantRecord) -> String {
        self.engine
            .calculator()
            .flight_date_string(plant, self.clock.now())
    }

    pub fn days_until(&self, plant: &PlantRecord) -> i64 {
        self.engine.days_until_flight(plant, self.clock.now())
    }

    pub fn year_info(&self, plant: &PlantRecord) -> FlightYearInfo {
        self.engine.flight_year_info(plant, self.clock.now())
    }
}
