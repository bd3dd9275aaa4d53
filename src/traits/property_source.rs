use crate::errors::DeedTraceResult;
use crate::models::property::PropertyRecord;

/// Trait for anything that can supply the property data set
pub trait PropertySource {
    /// Human-readable origin, used in logs and errors
    fn describe(&self) -> String;

    /// Load and validate every record, in source order
    fn load(&self) -> DeedTraceResult<Vec<PropertyRecord>>;
}
