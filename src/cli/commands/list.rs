use anyhow::Result;

use crate::cli::ui;
use crate::cli::OutputFormat;
use deedtrace::OwnershipResolver;

/// List every stored property in store order
pub fn records<S: OwnershipResolver>(resolver: &S, format: OutputFormat) -> Result<()> {
    let records = resolver.records();

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(records)?);
        }
        OutputFormat::Text => {
            ui::print_header("Properties");
            for record in records {
                let key = record.portfolio_key
                    .as_ref()
                    .map(|k| k.to_string())
                    .unwrap_or_else(|| "-".to_string());
                println!(
                    "  [{}] {} - {} {} ({})",
                    record.id,
                    record.name,
                    record.address,
                    ui::status_label(record.occupancy_status),
                    key
                );
            }
            ui::print_info(&format!("{} properties", records.len()));
        }
    }

    Ok(())
}

/// List ownership portfolios with their aggregate profile
pub fn portfolios<S: OwnershipResolver>(resolver: &S, format: OutputFormat) -> Result<()> {
    let summaries = resolver.portfolio_summaries();

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&summaries)?);
        }
        OutputFormat::Text => {
            ui::print_header("Portfolios");
            for summary in &summaries {
                ui::print_summary(summary);
            }
        }
    }

    Ok(())
}
