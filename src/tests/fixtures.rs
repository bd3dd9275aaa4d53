use std::sync::Arc;

use crate::config::ResolverConfig;
use crate::implementations::engine::OwnershipEngine;
use crate::implementations::property_store::PropertyStore;
use crate::models::common::{ GeoPoint, OccupancyStatus };
use crate::models::property::{ PortfolioKey, PropertyRecord, RecordId };

pub fn setup() {
    // Logger may already be initialized by another test
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn record(
    id: &str,
    name: &str,
    owner: &str,
    status: Option<OccupancyStatus>,
    key: Option<&str>,
    lat: f64,
    lon: f64
) -> PropertyRecord {
    PropertyRecord {
        id: RecordId::from(id),
        name: name.to_string(),
        address: format!("{} Test St, Berkeley", id),
        coordinates: GeoPoint::new(lat, lon),
        property_type: "Retail".to_string(),
        occupancy_status: status,
        owner_name: owner.to_string(),
        portfolio_key: key.map(PortfolioKey::from),
        risk_score: 1,
        description: String::new(),
    }
}

pub fn embedded_store() -> Arc<PropertyStore> {
    setup();
    PropertyStore::embedded().expect("embedded data set should load")
}

pub fn embedded_engine() -> OwnershipEngine {
    OwnershipEngine::new(embedded_store(), ResolverConfig::default()).expect(
        "default config is valid"
    )
}
