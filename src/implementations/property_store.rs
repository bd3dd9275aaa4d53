use lazy_static::lazy_static;
use log::{ info, warn };
use std::collections::HashSet;
use std::sync::Arc;

use crate::errors::{ DeedTraceError, DeedTraceResult };
use crate::implementations::sources::EmbeddedSource;
use crate::models::property::{ PropertyRecord, RecordId };
use crate::traits::property_source::PropertySource;

lazy_static! {
    /// The embedded data set, parsed once per process
    static ref EMBEDDED_STORE: DeedTraceResult<Arc<PropertyStore>> =
        PropertyStore::load(&EmbeddedSource).map(Arc::new);
}

/// Read-only, ordered collection of validated property records.
///
/// Store order is the order of the data source and is the tie-break for every
/// lookup that can match more than one record.
#[derive(Debug, Clone)]
pub struct PropertyStore {
    source: String,
    records: Vec<PropertyRecord>,
}

impl PropertyStore {
    /// Build a store, rejecting duplicate ids
    pub fn from_records(
        source: impl Into<String>,
        records: Vec<PropertyRecord>
    ) -> DeedTraceResult<Self> {
        let mut seen = HashSet::new();
        for record in &records {
            if !seen.insert(record.id.clone()) {
                return Err(DeedTraceError::InvalidRecord {
                    id: record.id.to_string(),
                    reason: "duplicate id".to_string(),
                });
            }
        }

        Ok(PropertyStore {
            source: source.into(),
            records,
        })
    }

    pub fn load<S: PropertySource + ?Sized>(source: &S) -> DeedTraceResult<Self> {
        let records = source.load()?;
        let store = Self::from_records(source.describe(), records)?;
        info!("Loaded {} property records from {}", store.len(), store.source);
        Ok(store)
    }

    /// Shared handle to the embedded data set
    pub fn embedded() -> DeedTraceResult<Arc<PropertyStore>> {
        Self::shared(&*EMBEDDED_STORE)
    }

    /// Hand out a cached load result; a cached failure is returned as it was raised
    pub(crate) fn shared(
        cached: &DeedTraceResult<Arc<PropertyStore>>
    ) -> DeedTraceResult<Arc<PropertyStore>> {
        match cached {
            Ok(store) => Ok(Arc::clone(store)),
            Err(e) => Err(e.clone()),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn records(&self) -> &[PropertyRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn find_by_id(&self, id: &RecordId) -> DeedTraceResult<&PropertyRecord> {
        self.records
            .iter()
            .find(|record| &record.id == id)
            .ok_or_else(|| DeedTraceError::NotFound(format!("id {}", id)))
    }

    /// Every record whose address contains `fragment`, ignoring case
    pub fn find_all_by_address(&self, fragment: &str) -> Vec<&PropertyRecord> {
        let needle = fragment.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        self.records
            .iter()
            .filter(|record| record.address.to_lowercase().contains(&needle))
            .collect()
    }

    /// First record, in store order, whose address contains `fragment`
    pub fn find_by_address(&self, fragment: &str) -> DeedTraceResult<&PropertyRecord> {
        let matches = self.find_all_by_address(fragment);
        if matches.len() > 1 {
            warn!(
                "Address '{}' matches {} records; using the first ({})",
                fragment,
                matches.len(),
                matches[0].id
            );
        }
        matches
            .into_iter()
            .next()
            .ok_or_else(|| DeedTraceError::NotFound(format!("address '{}'", fragment)))
    }
}
