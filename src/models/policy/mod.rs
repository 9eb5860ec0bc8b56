// Policy module
// Origin countries and the shipping cadences they map to

use std::fmt;

use serde::{Deserialize, Serialize};

/// Offset applied by the offset-then-Saturday cadence unless configured otherwise.
pub const DEFAULT_OFFSET_DAYS: i64 = 28;

/// Origin country of a plant, as far as shipping is concerned.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Country {
    Philippines,
    Indonesia,
    Thailand,
    /// Any other non-empty country name, lowercased
    Other(String),
}

impl Country {
    /// Parse a country name, ignoring case and surrounding whitespace.
    ///
    /// Returns `None` for blank input.
    ///
    /// # Examples
    /// ```
    /// use plant_flights::models::policy::Country;
    ///
    /// assert_eq!(Country::parse(" Thailand "), Some(Country::Thailand));
    /// assert_eq!(Country::parse("VIETNAM"), Some(Country::Other("vietnam".into())));
    /// assert_eq!(Country::parse(""), None);
    /// ```
    pub fn parse(name: &str) -> Option<Self> {
        let normalized = name.trim().to_lowercase();
        match normalized.as_str() {
            "" => None,
            "philippines" => Some(Self::Philippines),
            "indonesia" => Some(Self::Indonesia),
            "thailand" => Some(Self::Thailand),
            _ => Some(Self::Other(normalized)),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Philippines => "philippines",
            Self::Indonesia => "indonesia",
            Self::Thailand => "thailand",
            Self::Other(name) => name,
        }
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shipping cadence that decides which Saturday a plant flies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ShippingPolicy {
    /// Flies on the next Saturday after now
    WeeklySaturday,
    /// Flies on the next Saturday after `now + offset_days`
    OffsetThenSaturday { offset_days: i64 },
    /// Fallback for countries without a dedicated cadence
    Default { offset_days: i64 },
}

impl ShippingPolicy {
    /// Days added to "now" before rounding forward to Saturday.
    pub fn offset_days(&self) -> i64 {
        match self {
            Self::WeeklySaturday => 0,
            Self::OffsetThenSaturday { offset_days } | Self::Default { offset_days } => {
                *offset_days
            }
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Default { .. })
    }
}

impl Default for ShippingPolicy {
    fn default() -> Self {
        Self::Default {
            offset_days: DEFAULT_OFFSET_DAYS,
        }
    }
}
