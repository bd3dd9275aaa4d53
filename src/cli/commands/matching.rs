use anyhow::Result;

use crate::cli::ui;
use crate::cli::OutputFormat;
use deedtrace::OwnershipResolver;

/// Name comparison command
pub fn execute<S: OwnershipResolver>(
    resolver: &S,
    business_name: &str,
    owner_name: &str,
    threshold: f64,
    format: OutputFormat
) -> Result<()> {
    let score = resolver.match_names(business_name, owner_name);
    let verdict = resolver.classify_names(business_name, owner_name);

    match format {
        OutputFormat::Json => {
            let body = serde_json::json!({
                "business": business_name,
                "owner": owner_name,
                "score": score,
                "threshold": threshold,
                "verdict": verdict,
            });
            println!("{}", serde_json::to_string_pretty(&body)?);
        }
        OutputFormat::Text => {
            ui::print_header("Name Match");
            ui::print_result("Business", business_name);
            ui::print_result("Owner", owner_name);
            ui::print_result("Score", &score.to_string());
            ui::print_result("Threshold", &threshold.to_string());
            ui::print_result("Verdict", &verdict.to_string());
        }
    }

    Ok(())
}
