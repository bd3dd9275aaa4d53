pub mod models;
pub mod traits;
pub mod errors;
pub mod config;
pub mod implementations;
#[cfg(test)]
pub mod tests;

// Re-export core components
pub use config::{ ConfigError, ResolverConfig };
pub use errors::{ DeedTraceError, DeedTraceResult, RecoverableError };
pub use implementations::classifier::OccupancyClassifier;
pub use implementations::engine::OwnershipEngine;
pub use implementations::name_matcher::{ normalize_name, similarity, TokenSortMatcher };
pub use implementations::portfolio::PortfolioAggregator;
pub use implementations::property_store::PropertyStore;
pub use implementations::sources::{ EmbeddedSource, YamlFileSource };
pub use implementations::spatial::SpatialResolver;
pub use models::{
    common::{ GeoPoint, MatchScore, OccupancyStatus, StatusSource, Verdict },
    property::{ PortfolioKey, PropertyRecord, RawPropertyRecord, RecordId },
    report::{
        Classification,
        PortfolioEntry,
        PortfolioSummary,
        ResolutionReport,
        SelectionRequest,
    },
};
pub use traits::{ NameMatcher, OwnershipResolver, PropertySource };
