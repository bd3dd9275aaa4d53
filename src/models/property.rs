use serde::{ Deserialize, Deserializer, Serialize };
use std::fmt;

use crate::errors::{ DeedTraceError, DeedTraceResult };
use crate::models::common::{ GeoPoint, OccupancyStatus };

/// Stable identifier of a property record.
/// Source data may use integers or strings; both are kept as text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(id: impl Into<String>) -> Self {
        RecordId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(id: &str) -> Self {
        RecordId(id.to_string())
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Int(u64),
            Text(String),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Int(n) => RecordId(n.to_string()),
            RawId::Text(s) => RecordId(s.trim().to_string()),
        })
    }
}

/// Opaque grouping key; records with equal keys share a controlling party
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PortfolioKey(String);

impl PortfolioKey {
    pub fn new(key: impl Into<String>) -> Self {
        PortfolioKey(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PortfolioKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PortfolioKey {
    fn from(key: &str) -> Self {
        PortfolioKey(key.to_string())
    }
}

/// A property as it appears in the data source (assessor export field names)
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawPropertyRecord {
    pub id: RecordId,
    pub name: String,
    pub address: String,
    #[serde(rename = "type")]
    pub property_type: String,
    pub owner: String,
    #[serde(default)]
    pub status: Option<OccupancyStatus>,
    pub lat: f64,
    pub lon: f64,
    pub risk_score: u32,
    #[serde(default)]
    pub portfolio_group: Option<String>,
    pub desc: String,
}

/// A validated property record. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertyRecord {
    pub id: RecordId,
    pub name: String,
    pub address: String,
    pub coordinates: GeoPoint,
    pub property_type: String,
    /// Status asserted by the data source, if any
    pub occupancy_status: Option<OccupancyStatus>,
    pub owner_name: String,
    pub portfolio_key: Option<PortfolioKey>,
    pub risk_score: u32,
    pub description: String,
}

impl PropertyRecord {
    /// Validate a raw record, failing on empty required text or impossible coordinates
    pub fn from_raw(raw: RawPropertyRecord) -> DeedTraceResult<Self> {
        let invalid = |reason: &str| DeedTraceError::InvalidRecord {
            id: raw.id.to_string(),
            reason: reason.to_string(),
        };

        if raw.id.as_str().is_empty() {
            return Err(invalid("id is empty"));
        }
        if raw.name.trim().is_empty() {
            return Err(invalid("name is empty"));
        }
        if raw.address.trim().is_empty() {
            return Err(invalid("address is empty"));
        }
        if raw.owner.trim().is_empty() {
            return Err(invalid("owner is empty"));
        }

        let coordinates = GeoPoint::new(raw.lat, raw.lon);
        if !coordinates.is_valid() {
            return Err(invalid(&format!("coordinates {} are out of range", coordinates)));
        }

        let portfolio_key = raw.portfolio_group
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .map(PortfolioKey::from);

        Ok(PropertyRecord {
            id: raw.id,
            name: raw.name.trim().to_string(),
            address: raw.address.trim().to_string(),
            coordinates,
            property_type: raw.property_type.trim().to_string(),
            occupancy_status: raw.status,
            owner_name: raw.owner.trim().to_string(),
            portfolio_key,
            risk_score: raw.risk_score,
            description: raw.desc.trim().to_string(),
        })
    }
}
