use std::collections::HashSet;

use crate::implementations::property_store::PropertyStore;
use crate::models::common::OccupancyStatus;
use crate::models::property::{ PortfolioKey, PropertyRecord, RecordId };
use crate::models::report::PortfolioSummary;

/// Groups store records by exact `portfolio_key` equality.
///
/// Owner names are never compared here: two owners that merely look alike
/// stay in separate portfolios unless the data source gives them one key.
#[derive(Debug, Clone, Copy)]
pub struct PortfolioAggregator<'a> {
    store: &'a PropertyStore,
}

impl<'a> PortfolioAggregator<'a> {
    pub fn new(store: &'a PropertyStore) -> Self {
        PortfolioAggregator { store }
    }

    /// Every record holding `portfolio_key`, in store order
    pub fn members(&self, portfolio_key: &PortfolioKey) -> Vec<&'a PropertyRecord> {
        self.store
            .records()
            .iter()
            .filter(|record| record.portfolio_key.as_ref() == Some(portfolio_key))
            .collect()
    }

    /// Members of `portfolio_key` other than `record_id`, in store order
    pub fn related_assets(
        &self,
        record_id: &RecordId,
        portfolio_key: &PortfolioKey
    ) -> Vec<&'a PropertyRecord> {
        self.members(portfolio_key)
            .into_iter()
            .filter(|record| &record.id != record_id)
            .collect()
    }

    /// Number of records sharing `portfolio_key`
    pub fn portfolio_size(&self, portfolio_key: &PortfolioKey) -> usize {
        self.members(portfolio_key).len()
    }

    /// Siblings of a record; a record without a key is its own portfolio
    pub fn siblings_of(&self, record: &PropertyRecord) -> Vec<&'a PropertyRecord> {
        match &record.portfolio_key {
            Some(key) => self.related_assets(&record.id, key),
            None => Vec::new(),
        }
    }

    /// Size of the portfolio a record belongs to, never less than one
    pub fn size_of(&self, record: &PropertyRecord) -> usize {
        match &record.portfolio_key {
            Some(key) => self.portfolio_size(key).max(1),
            None => 1,
        }
    }

    pub fn summarize(&self, portfolio_key: &PortfolioKey) -> PortfolioSummary {
        let mut summary = PortfolioSummary {
            key: portfolio_key.clone(),
            size: 0,
            total_risk: 0,
            max_risk: 0,
            owner_count: 0,
            tenant_count: 0,
            vacant_count: 0,
            unclassified_count: 0,
        };

        for record in self.members(portfolio_key) {
            summary.size += 1;
            summary.total_risk += u64::from(record.risk_score);
            summary.max_risk = summary.max_risk.max(record.risk_score);
            match record.occupancy_status {
                Some(OccupancyStatus::Owner) => {
                    summary.owner_count += 1;
                }
                Some(OccupancyStatus::Tenant) => {
                    summary.tenant_count += 1;
                }
                Some(OccupancyStatus::Vacant) => {
                    summary.vacant_count += 1;
                }
                None => {
                    summary.unclassified_count += 1;
                }
            }
        }

        summary
    }

    /// Summary of every keyed portfolio, in order of first appearance
    pub fn portfolios(&self) -> Vec<PortfolioSummary> {
        let mut order: Vec<&PortfolioKey> = Vec::new();
        let mut seen: HashSet<&PortfolioKey> = HashSet::new();

        for record in self.store.records() {
            if let Some(key) = &record.portfolio_key {
                if seen.insert(key) {
                    order.push(key);
                }
            }
        }

        order
            .into_iter()
            .map(|key| self.summarize(key))
            .collect()
    }
}
