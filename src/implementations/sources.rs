use std::fs;
use std::path::{ Path, PathBuf };

use crate::errors::{ DeedTraceError, DeedTraceResult };
use crate::models::property::{ PropertyRecord, RawPropertyRecord };
use crate::traits::property_source::PropertySource;

const EMBEDDED_DATA: &str = include_str!("../../data/telegraph.yaml");

/// The Telegraph corridor data set compiled into the binary
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedSource;

impl PropertySource for EmbeddedSource {
    fn describe(&self) -> String {
        "embedded telegraph data set".to_string()
    }

    fn load(&self) -> DeedTraceResult<Vec<PropertyRecord>> {
        parse_records(&self.describe(), EMBEDDED_DATA)
    }
}

/// A YAML file on disk using the same schema as the embedded data set
#[derive(Debug, Clone)]
pub struct YamlFileSource {
    path: PathBuf,
}

impl YamlFileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        YamlFileSource {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl PropertySource for YamlFileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> DeedTraceResult<Vec<PropertyRecord>> {
        let contents = fs::read_to_string(&self.path).map_err(|e| DeedTraceError::DataSource {
            source_name: self.describe(),
            message: e.to_string(),
        })?;
        parse_records(&self.describe(), &contents)
    }
}

/// Parse a YAML list of records and validate each one
pub fn parse_records(source_name: &str, yaml: &str) -> DeedTraceResult<Vec<PropertyRecord>> {
    let raw: Vec<RawPropertyRecord> = serde_yaml::from_str(yaml).map_err(|e| {
        DeedTraceError::DataSource {
            source_name: source_name.to_string(),
            message: e.to_string(),
        }
    })?;

    raw.into_iter().map(PropertyRecord::from_raw).collect()
}
