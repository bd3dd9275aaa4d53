use crate::errors::DeedTraceResult;
use crate::models::common::{ GeoPoint, MatchScore, Verdict };
use crate::models::property::{ PortfolioKey, PropertyRecord, RecordId };
use crate::models::report::{
    Classification,
    PortfolioEntry,
    PortfolioSummary,
    ResolutionReport,
    SelectionRequest,
};

/// Main facade for ownership resolution
pub trait OwnershipResolver {
    /// All records, in store order
    fn records(&self) -> &[PropertyRecord];

    /// Score a business name against an owner name
    fn match_names(&self, business_name: &str, owner_name: &str) -> MatchScore;

    /// Classify a business against an owner using the configured threshold
    fn classify_names(&self, business_name: &str, owner_name: &str) -> Verdict;

    /// Classify a stored record, honouring its stored status when present
    fn classify_record(&self, record: &PropertyRecord, business_name: &str) -> Classification;

    /// Find the first record whose address contains `address` (case-insensitive)
    fn find_by_address(&self, address: &str) -> DeedTraceResult<&PropertyRecord>;

    /// Find a record by id
    fn find_by_id(&self, id: &RecordId) -> DeedTraceResult<&PropertyRecord>;

    /// Resolve a map point to the first record within the configured tolerance
    fn locate(&self, point: &GeoPoint) -> DeedTraceResult<&PropertyRecord>;

    /// Siblings of `record_id` within `portfolio_key`, in store order
    fn related_assets(&self, record_id: &RecordId, portfolio_key: &PortfolioKey) -> Vec<PortfolioEntry>;

    /// Aggregate profile of every portfolio, in first-appearance order
    fn portfolio_summaries(&self) -> Vec<PortfolioSummary>;

    /// Resolve a selection into a full report
    fn select(&self, request: SelectionRequest) -> DeedTraceResult<ResolutionReport>;
}
