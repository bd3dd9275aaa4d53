use anyhow::{ anyhow, Result };
use clap::{ Parser, Subcommand };
use std::path::PathBuf;

pub mod commands;
pub mod ui;

#[derive(Parser)]
#[command(
    name = "deedtrace",
    about = "Find out who really controls a property and what else they own",
    version,
    author,
    long_about = None
)]
pub struct DeedTraceCli {
    /// Sets the log level (error, warn, info, debug, trace)
    #[arg(short, long, global = true, default_value = "warn")]
    pub log_level: String,

    /// Path to configuration file (YAML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Property data file (YAML); defaults to the embedded data set
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,

    /// Owner match threshold (0-100) overriding config and environment
    #[arg(long, global = true)]
    pub threshold: Option<f64>,

    /// Spatial tolerance in degrees overriding config and environment
    #[arg(long, global = true)]
    pub tolerance: Option<f64>,

    /// Output format (text, json)
    #[arg(long, global = true, default_value = "text")]
    pub output_format: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Classify a business at an address and list its landlord's other assets
    Lookup {
        /// Operating business name
        #[arg(short, long, default_value = "")]
        business: String,

        /// Address or address fragment
        #[arg(short, long)]
        address: String,
    },

    /// Resolve a map coordinate to the nearest stored property
    Locate {
        /// Latitude in decimal degrees
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,

        /// Longitude in decimal degrees
        #[arg(long, allow_negative_numbers = true)]
        lon: f64,
    },

    /// Show a property by id
    Show {
        /// Record id
        #[arg(short, long)]
        id: String,
    },

    /// Jump from one property to a sibling in the same portfolio
    Jump {
        /// Currently selected record id
        #[arg(short, long)]
        from: String,

        /// Sibling record id
        #[arg(short, long)]
        to: String,
    },

    /// Score two names and classify them against the threshold
    Match {
        /// Business name
        business: String,

        /// Recorded owner name
        owner: String,
    },

    /// List ownership portfolios with their size and risk profile
    Portfolios,

    /// List every stored property
    List,
}

/// How command results are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn parse(format: &str) -> Result<Self> {
        match format.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(anyhow!("Unsupported output format: {}", format)),
        }
    }
}
