use log::{ debug, warn };

use crate::config::validate_tolerance;
use crate::errors::{ DeedTraceError, DeedTraceResult };
use crate::implementations::property_store::PropertyStore;
use crate::models::common::GeoPoint;
use crate::models::property::PropertyRecord;

/// Maps a point back to a stored record.
///
/// Matching is a per-axis absolute bound, not a geodesic distance. When more
/// than one record falls inside the window the first in store order wins.
#[derive(Debug, Clone, Copy)]
pub struct SpatialResolver<'a> {
    store: &'a PropertyStore,
    tolerance: f64,
}

impl<'a> SpatialResolver<'a> {
    pub fn new(store: &'a PropertyStore, tolerance: f64) -> DeedTraceResult<Self> {
        validate_tolerance(tolerance)?;
        Ok(SpatialResolver { store, tolerance })
    }

    /// Every record inside the tolerance window, in store order
    pub fn candidates(&self, point: &GeoPoint) -> Vec<&'a PropertyRecord> {
        self.store
            .records()
            .iter()
            .filter(|record| record.coordinates.within(point, self.tolerance))
            .collect()
    }

    pub fn resolve(&self, point: &GeoPoint) -> DeedTraceResult<&'a PropertyRecord> {
        let candidates = self.candidates(point);
        match candidates.as_slice() {
            [] => {
                debug!("No record within {} of {}", self.tolerance, point);
                Err(DeedTraceError::NotFound(format!("point {}", point)))
            }
            [only] => Ok(*only),
            [first, ..] => {
                warn!(
                    "{} records within {} of {}; using the first ({})",
                    candidates.len(),
                    self.tolerance,
                    point,
                    first.id
                );
                Ok(*first)
            }
        }
    }
}
