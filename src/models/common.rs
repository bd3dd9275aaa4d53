use serde::{ Deserialize, Serialize };
use std::fmt;

/// Similarity between two names, 0 (unrelated) to 100 (identical)
pub type MatchScore = u8;

/// Occupancy status of a property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OccupancyStatus {
    Owner,
    Tenant,
    Vacant,
}

impl fmt::Display for OccupancyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OccupancyStatus::Owner => write!(f, "OWNER"),
            OccupancyStatus::Tenant => write!(f, "TENANT"),
            OccupancyStatus::Vacant => write!(f, "VACANT"),
        }
    }
}

/// Outcome of comparing a business name with the recorded owner.
/// Vacancy can't be inferred from names, so it has no verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    OwnerOccupied,
    Tenant,
}

impl From<Verdict> for OccupancyStatus {
    fn from(verdict: Verdict) -> Self {
        match verdict {
            Verdict::OwnerOccupied => OccupancyStatus::Owner,
            Verdict::Tenant => OccupancyStatus::Tenant,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::OwnerOccupied => write!(f, "OWNER_OCCUPIED"),
            Verdict::Tenant => write!(f, "TENANT"),
        }
    }
}

/// Which code path produced a record's effective status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusSource {
    /// Asserted by the data source; authoritative
    Stored,
    /// Computed from the business/owner name comparison
    Derived,
}

impl fmt::Display for StatusSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusSource::Stored => write!(f, "stored"),
            StatusSource::Derived => write!(f, "derived"),
        }
    }
}

/// Slack absorbed when comparing decimal-degree differences against a tolerance,
/// so a point exactly one tolerance step away is not lost to float rounding
pub const COORDINATE_EPSILON: f64 = 1e-9;

/// A latitude/longitude pair in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        GeoPoint { lat, lon }
    }

    /// True when both axes differ from `other` by at most `tolerance`.
    /// A zero tolerance demands exact equality.
    pub fn within(&self, other: &GeoPoint, tolerance: f64) -> bool {
        if tolerance == 0.0 {
            return self.lat == other.lat && self.lon == other.lon;
        }
        let bound = tolerance + COORDINATE_EPSILON;
        (self.lat - other.lat).abs() <= bound && (self.lon - other.lon).abs() <= bound
    }

    pub fn is_valid(&self) -> bool {
        self.lat.is_finite() &&
            self.lon.is_finite() &&
            (-90.0..=90.0).contains(&self.lat) &&
            (-180.0..=180.0).contains(&self.lon)
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.4}, {:.4})", self.lat, self.lon)
    }
}
