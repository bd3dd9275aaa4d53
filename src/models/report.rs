use serde::{ Deserialize, Serialize };

use crate::models::common::{ GeoPoint, MatchScore, OccupancyStatus, StatusSource, Verdict };
use crate::models::property::{ PortfolioKey, PropertyRecord, RecordId };

/// Occupancy verdict for a single record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Classification {
    /// Effective status: stored when present, derived otherwise
    pub status: OccupancyStatus,
    pub status_source: StatusSource,
    /// What name matching says, regardless of any stored status
    pub derived_verdict: Verdict,
    pub match_score: MatchScore,
    pub owner_name: String,
    pub portfolio_size: usize,
    pub risk_score: u32,
    pub coordinates: GeoPoint,
}

/// One sibling asset in a portfolio listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PortfolioEntry {
    pub id: RecordId,
    pub name: String,
    pub address: String,
    pub status: Option<OccupancyStatus>,
}

impl From<&PropertyRecord> for PortfolioEntry {
    fn from(record: &PropertyRecord) -> Self {
        PortfolioEntry {
            id: record.id.clone(),
            name: record.name.clone(),
            address: record.address.clone(),
            status: record.occupancy_status,
        }
    }
}

/// Aggregate size and risk profile of one portfolio
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PortfolioSummary {
    pub key: PortfolioKey,
    pub size: usize,
    pub total_risk: u64,
    pub max_risk: u32,
    pub owner_count: usize,
    pub tenant_count: usize,
    pub vacant_count: usize,
    /// Members with no stored status
    pub unclassified_count: usize,
}

/// How the caller picked the record it wants resolved.
/// Selection lives with the caller; the engine only echoes it back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SelectionRequest {
    ById {
        id: RecordId,
    },
    ByAddress {
        business_name: String,
        address: String,
    },
    ByPoint {
        point: GeoPoint,
    },
    JumpToSibling {
        from: RecordId,
        to: RecordId,
    },
}

/// Everything the presentation layer needs about one selected property
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolutionReport {
    pub request: SelectionRequest,
    pub selected: RecordId,
    pub record: PropertyRecord,
    /// Business name the classification was run against
    pub business_name: String,
    pub classification: Classification,
    pub related: Vec<PortfolioEntry>,
    pub summary: Option<PortfolioSummary>,
}
