use anyhow::{ Context, Result };
use clap::Parser;
use deedtrace::{ GeoPoint, OwnershipEngine, RecordId, ResolverConfig, SelectionRequest };
use log::{ debug, info };
mod cli;
use cli::{ Commands, DeedTraceCli, OutputFormat };

fn main() -> Result<()> {
    // Parse the command line arguments
    let cli = DeedTraceCli::parse();

    // Setup logging
    setup_logging(&cli.log_level);

    if let Err(e) = dotenv::dotenv() {
        debug!("No .env file loaded: {}", e);
    }

    let format = OutputFormat::parse(&cli.output_format)?;
    let config = build_config(&cli)?;
    let engine = match OwnershipEngine::from_config(config) {
        Ok(engine) => engine,
        Err(e) => {
            cli::ui::print_error(&e.to_string());
            return Err(e.into());
        }
    };

    match &cli.command {
        Commands::Lookup { business, address } => {
            let request = SelectionRequest::ByAddress {
                business_name: business.clone(),
                address: address.clone(),
            };
            cli::commands::resolve::execute(&engine, request, format)?;
        }

        Commands::Locate { lat, lon } => {
            let request = SelectionRequest::ByPoint {
                point: GeoPoint::new(*lat, *lon),
            };
            cli::commands::resolve::execute(&engine, request, format)?;
        }

        Commands::Show { id } => {
            let request = SelectionRequest::ById {
                id: RecordId::new(id.trim()),
            };
            cli::commands::resolve::execute(&engine, request, format)?;
        }

        Commands::Jump { from, to } => {
            let request = SelectionRequest::JumpToSibling {
                from: RecordId::new(from.trim()),
                to: RecordId::new(to.trim()),
            };
            cli::commands::resolve::execute(&engine, request, format)?;
        }

        Commands::Match { business, owner } => {
            cli::commands::matching::execute(
                &engine,
                business,
                owner,
                engine.config().owner_match_threshold,
                format
            )?;
        }

        Commands::Portfolios => {
            cli::commands::list::portfolios(&engine, format)?;
        }

        Commands::List => {
            cli::commands::list::records(&engine, format)?;
        }
    }

    Ok(())
}

/// Layer config: file (or defaults), then environment, then command-line flags
fn build_config(cli: &DeedTraceCli) -> Result<ResolverConfig> {
    let config = match &cli.config {
        Some(path) =>
            ResolverConfig::from_file(path).with_context(||
                format!("Failed to load config from {}", path.display())
            )?,
        None => ResolverConfig::default(),
    };

    let mut config = config.with_env_overrides()?;

    if let Some(threshold) = cli.threshold {
        config.owner_match_threshold = threshold;
    }
    if let Some(tolerance) = cli.tolerance {
        config.spatial_tolerance = tolerance;
    }
    if let Some(data) = &cli.data {
        config.data_file = Some(data.clone());
    }

    config.validate()?;
    Ok(config)
}

fn setup_logging(log_level: &str) {
    // Set up the logger based on the log level
    let level = match log_level.to_lowercase().as_str() {
        "trace" => log::LevelFilter::Trace,
        "debug" => log::LevelFilter::Debug,
        "info" => log::LevelFilter::Info,
        "warn" => log::LevelFilter::Warn,
        "error" => log::LevelFilter::Error,
        _ => log::LevelFilter::Warn,
    };

    env_logger::Builder::new().filter_level(level).init();

    info!("Logger initialized with level: {}", log_level);
}
