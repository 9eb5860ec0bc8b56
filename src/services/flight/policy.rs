use crate::models::plant::PlantRecord;
use crate::models::policy::{Country, ShippingPolicy, DEFAULT_OFFSET_DAYS};

/// Maps a plant's origin country to the shipping cadence it flies on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyResolver {
    default_country: Country,
    offset_days: i64,
}

impl Default for PolicyResolver {
    fn default() -> Self {
        Self::new(Country::Philippines, DEFAULT_OFFSET_DAYS)
    }
}

impl PolicyResolver {
    pub fn new(default_country: Country, offset_days: i64) -> Self {
        Self {
            default_country,
            offset_days,
        }
    }

    pub fn default_country(&self) -> &Country {
        &self.default_country
    }

    pub fn offset_days(&self) -> i64 {
        self.offset_days
    }

    /// Origin country of `plant`, falling back to the default country when
    /// neither the record nor any of its variations names one.
    pub fn resolve_country(&self, plant: &PlantRecord) -> Country {
        match plant.origin_country().and_then(Country::parse) {
            Some(country) => country,
            None => {
                log::debug!(
                    "Plant has no origin country; assuming {}",
                    self.default_country
                );
                self.default_country.clone()
            }
        }
    }

    pub fn policy_for(&self, country: &Country) -> ShippingPolicy {
        match country {
            Country::Thailand => ShippingPolicy::WeeklySaturday,
            Country::Philippines | Country::Indonesia => ShippingPolicy::OffsetThenSaturday {
                offset_days: self.offset_days,
            },
            Country::Other(name) => {
                log::debug!("No shipping cadence for '{}'; using default policy", name);
                ShippingPolicy::Default {
                    offset_days: self.offset_days,
                }
            }
        }
    }

    pub fn resolve(&self, plant: &PlantRecord) -> ShippingPolicy {
        self.policy_for(&self.resolve_country(plant))
    }
}
