pub mod classifier;
pub mod engine;
pub mod name_matcher;
pub mod portfolio;
pub mod property_store;
pub mod sources;
pub mod spatial;
