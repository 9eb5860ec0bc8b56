// Plant module
// Read-only view of a storefront plant listing, as returned by the backend

use serde::{Deserialize, Deserializer, Serialize};

/// One purchasable variation of a plant listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlantVariation {
    #[serde(default)]
    pub country: Option<String>,
}

impl PlantVariation {
    pub fn from_country(country: impl Into<String>) -> Self {
        Self {
            country: Some(country.into()),
        }
    }
}

/// Plant listing fields the flight scheduler reads.
///
/// Listings imported in bulk often carry the origin country only on their
/// variations, so the top-level `country` may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlantRecord {
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub variations: Vec<PlantVariation>,
}

impl PlantRecord {
    /// Create a record with a top-level country
    ///
    /// # Examples
    /// ```
    /// use plant_flights::models::plant::PlantRecord;
    ///
    /// let plant = PlantRecord::with_country("Thailand");
    /// assert_eq!(plant.origin_country(), Some("Thailand"));
    /// ```
    pub fn with_country(country: impl Into<String>) -> Self {
        Self {
            country: Some(country.into()),
            variations: Vec::new(),
        }
    }

    /// Create a record whose country is only carried by its variations
    pub fn with_variations(variations: Vec<PlantVariation>) -> Self {
        Self {
            country: None,
            variations,
        }
    }

    /// The plant's origin country as written, if any.
    ///
    /// The top-level field wins; otherwise the first variation with a
    /// non-blank country is used. Blank strings count as absent.
    pub fn origin_country(&self) -> Option<&str> {
        non_blank(self.country.as_deref()).or_else(|| {
            self.variations
                .iter()
                .find_map(|variation| non_blank(variation.country.as_deref()))
        })
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<PlantVariation>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<PlantVariation>>::deserialize(deserializer)?.unwrap_or_default())
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|country| !country.trim().is_empty())
}
