use anyhow::{ anyhow, Result };

use crate::cli::ui;
use crate::cli::OutputFormat;
use deedtrace::{ DeedTraceError, OwnershipResolver, RecoverableError, SelectionRequest };

/// Resolve a selection (lookup, locate, show or jump) and render the report
pub fn execute<S: OwnershipResolver>(
    resolver: &S,
    request: SelectionRequest,
    format: OutputFormat
) -> Result<()> {
    let report = match resolver.select(request) {
        Ok(report) => report,
        Err(e) if e.is_recoverable() => {
            return report_recoverable(&e, format);
        }
        Err(e) => {
            return Err(anyhow!("Resolution failed: {}", e));
        }
    };

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Text => {
            ui::print_record(&report.record);
            ui::print_classification(&report.business_name, &report.classification);
            ui::print_related(&report.related);
            if let Some(summary) = &report.summary {
                println!();
                ui::print_summary(summary);
            }
        }
    }

    Ok(())
}

fn report_recoverable(error: &DeedTraceError, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let body = serde_json::json!({
                "error": error.to_string(),
                "hint": error.recovery_strategy(),
            });
            println!("{}", serde_json::to_string_pretty(&body)?);
        }
        OutputFormat::Text => {
            ui::print_warning(&error.to_string());
            if let Some(hint) = error.recovery_strategy() {
                ui::print_info(&hint);
            }
        }
    }
    Ok(())
}
