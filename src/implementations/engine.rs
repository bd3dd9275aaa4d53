use log::{ debug, info };
use std::sync::Arc;

use crate::config::ResolverConfig;
use crate::errors::{ DeedTraceError, DeedTraceResult };
use crate::implementations::classifier::OccupancyClassifier;
use crate::implementations::name_matcher::TokenSortMatcher;
use crate::implementations::portfolio::PortfolioAggregator;
use crate::implementations::property_store::PropertyStore;
use crate::implementations::sources::YamlFileSource;
use crate::implementations::spatial::SpatialResolver;
use crate::models::common::{ GeoPoint, MatchScore, Verdict };
use crate::models::property::{ PortfolioKey, PropertyRecord, RecordId };
use crate::models::report::{
    Classification,
    PortfolioEntry,
    PortfolioSummary,
    ResolutionReport,
    SelectionRequest,
};
use crate::traits::ownership_resolver::OwnershipResolver;

/// Stateless facade over the store, classifier, aggregator and spatial resolver.
///
/// Cloning is cheap: the store is shared behind an `Arc` and never mutated, so
/// engines can be handed to as many callers as needed.
#[derive(Debug, Clone)]
pub struct OwnershipEngine {
    store: Arc<PropertyStore>,
    config: ResolverConfig,
    classifier: OccupancyClassifier<TokenSortMatcher>,
}

impl OwnershipEngine {
    pub fn new(store: Arc<PropertyStore>, config: ResolverConfig) -> DeedTraceResult<Self> {
        config.validate()?;
        let classifier = OccupancyClassifier::new(
            TokenSortMatcher::new(),
            config.owner_match_threshold
        )?;
        Ok(OwnershipEngine {
            store,
            config,
            classifier,
        })
    }

    /// Load the configured data file, or the embedded data set when none is set
    pub fn from_config(config: ResolverConfig) -> DeedTraceResult<Self> {
        let store = match &config.data_file {
            Some(path) => Arc::new(PropertyStore::load(&YamlFileSource::new(path))?),
            None => PropertyStore::embedded()?,
        };
        info!(
            "Ownership engine ready: {} records, threshold {}, tolerance {}",
            store.len(),
            config.owner_match_threshold,
            config.spatial_tolerance
        );
        Self::new(store, config)
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    pub fn portfolios(&self) -> PortfolioAggregator<'_> {
        PortfolioAggregator::new(&self.store)
    }

    pub fn spatial(&self) -> DeedTraceResult<SpatialResolver<'_>> {
        SpatialResolver::new(&self.store, self.config.spatial_tolerance)
    }

    fn report(
        &self,
        request: SelectionRequest,
        record: &PropertyRecord,
        business_name: &str
    ) -> ResolutionReport {
        let aggregator = self.portfolios();
        let classification = self.classify_record(record, business_name);
        let related = aggregator
            .siblings_of(record)
            .into_iter()
            .map(PortfolioEntry::from)
            .collect();
        let summary = record.portfolio_key.as_ref().map(|key| aggregator.summarize(key));

        ResolutionReport {
            request,
            selected: record.id.clone(),
            record: record.clone(),
            business_name: business_name.to_string(),
            classification,
            related,
            summary,
        }
    }

    fn check_sibling(&self, from: &PropertyRecord, to: &PropertyRecord) -> DeedTraceResult<()> {
        if from.id == to.id {
            return Ok(());
        }
        match (&from.portfolio_key, &to.portfolio_key) {
            (Some(a), Some(b)) if a == b => Ok(()),
            _ =>
                Err(
                    DeedTraceError::InvalidSelection(
                        format!("{} is not in the same portfolio as {}", to.id, from.id)
                    )
                ),
        }
    }
}

impl OwnershipResolver for OwnershipEngine {
    fn records(&self) -> &[PropertyRecord] {
        self.store.records()
    }

    fn match_names(&self, business_name: &str, owner_name: &str) -> MatchScore {
        self.classifier.score(business_name, owner_name)
    }

    fn classify_names(&self, business_name: &str, owner_name: &str) -> Verdict {
        self.classifier.classify(business_name, owner_name)
    }

    fn classify_record(&self, record: &PropertyRecord, business_name: &str) -> Classification {
        let portfolio_size = self.portfolios().size_of(record);
        self.classifier.classify_record(record, business_name, portfolio_size)
    }

    fn find_by_address(&self, address: &str) -> DeedTraceResult<&PropertyRecord> {
        self.store.find_by_address(address)
    }

    fn find_by_id(&self, id: &RecordId) -> DeedTraceResult<&PropertyRecord> {
        self.store.find_by_id(id)
    }

    fn locate(&self, point: &GeoPoint) -> DeedTraceResult<&PropertyRecord> {
        self.spatial()?.resolve(point)
    }

    fn related_assets(
        &self,
        record_id: &RecordId,
        portfolio_key: &PortfolioKey
    ) -> Vec<PortfolioEntry> {
        self.portfolios()
            .related_assets(record_id, portfolio_key)
            .into_iter()
            .map(PortfolioEntry::from)
            .collect()
    }

    fn portfolio_summaries(&self) -> Vec<PortfolioSummary> {
        self.portfolios().portfolios()
    }

    fn select(&self, request: SelectionRequest) -> DeedTraceResult<ResolutionReport> {
        debug!("Resolving selection {:?}", request);
        match &request {
            SelectionRequest::ById { id } => {
                let record = self.find_by_id(id)?;
                Ok(self.report(request.clone(), record, &record.name))
            }
            SelectionRequest::ByAddress { business_name, address } => {
                let record = self.find_by_address(address)?;
                // A blank business name falls back to the listed occupant
                let business = if business_name.trim().is_empty() {
                    record.name.as_str()
                } else {
                    business_name.as_str()
                };
                Ok(self.report(request.clone(), record, business))
            }
            SelectionRequest::ByPoint { point } => {
                let record = self.locate(point)?;
                Ok(self.report(request.clone(), record, &record.name))
            }
            SelectionRequest::JumpToSibling { from, to } => {
                let from_record = self.find_by_id(from)?;
                let to_record = self.find_by_id(to)?;
                self.check_sibling(from_record, to_record)?;
                Ok(self.report(request.clone(), to_record, &to_record.name))
            }
        }
    }
}
