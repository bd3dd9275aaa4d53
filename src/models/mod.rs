pub mod common;
pub mod property;
pub mod report;

// Re-export common model types
pub use common::{ GeoPoint, MatchScore, OccupancyStatus, StatusSource, Verdict };
pub use property::{ PortfolioKey, PropertyRecord, RawPropertyRecord, RecordId };
pub use report::{
    Classification,
    PortfolioEntry,
    PortfolioSummary,
    ResolutionReport,
    SelectionRequest,
};
