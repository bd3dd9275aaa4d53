use colored::*;
use console::Term;
use textwrap::wrap;

use deedtrace::{
    Classification,
    OccupancyStatus,
    PortfolioEntry,
    PortfolioSummary,
    PropertyRecord,
    StatusSource,
    Verdict,
};

fn terminal_width() -> usize {
    let (_, columns) = Term::stdout().size();
    (columns as usize).max(40)
}

/// Print a section header
pub fn print_header(title: &str) {
    let title = format!(" {} ", title);
    println!("\n{}\n", title.bold().white().on_blue());
}

/// Print text with proper wrapping
pub fn print_text(text: &str) {
    let width = terminal_width();
    for line in text.lines() {
        for wrapped_line in wrap(line, width.saturating_sub(10)) {
            println!("{}", wrapped_line);
        }
    }
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{} {}", "ERROR:".red().bold(), message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
    println!("{} {}", "WARNING:".yellow().bold(), message);
}

/// Print information
pub fn print_info(message: &str) {
    println!("{} {}", "INFO:".blue().bold(), message);
}

/// Print a formatted result
pub fn print_result(label: &str, value: &str) {
    println!("{}: {}", label.bold(), value);
}

pub fn status_label(status: Option<OccupancyStatus>) -> ColoredString {
    match status {
        Some(OccupancyStatus::Owner) => "OWNER".green().bold(),
        Some(OccupancyStatus::Tenant) => "TENANT".yellow().bold(),
        Some(OccupancyStatus::Vacant) => "VACANT".red().bold(),
        None => "UNASSIGNED".dimmed(),
    }
}

fn verdict_label(verdict: Verdict) -> ColoredString {
    match verdict {
        Verdict::OwnerOccupied => "OWNER_OCCUPIED".green(),
        Verdict::Tenant => "TENANT".yellow(),
    }
}

/// Print the property card for a selected record
pub fn print_record(record: &PropertyRecord) {
    print_header(&record.name);
    print_result("Id", record.id.as_str());
    print_result("Address", &record.address);
    print_result("Type", &record.property_type);
    print_result("Coordinates", &record.coordinates.to_string());
    if !record.description.is_empty() {
        println!();
        print_text(&record.description);
    }
}

/// Print an occupancy classification
pub fn print_classification(business_name: &str, classification: &Classification) {
    print_header("Occupancy");
    print_result("Business", business_name);
    print_result("Recorded owner", &classification.owner_name);
    println!(
        "{}: {} ({})",
        "Status".bold(),
        status_label(Some(classification.status)),
        classification.status_source
    );
    println!(
        "{}: {} (score {})",
        "Name match".bold(),
        verdict_label(classification.derived_verdict),
        classification.match_score
    );
    if classification.status_source == StatusSource::Stored {
        let derived = OccupancyStatus::from(classification.derived_verdict);
        if derived != classification.status && classification.status != OccupancyStatus::Vacant {
            print_warning("Stored status disagrees with the name match; the stored status is used.");
        }
    }
    print_result("Risk score", &classification.risk_score.to_string());
    print_result("Portfolio size", &classification.portfolio_size.to_string());
}

/// Print sibling assets of a portfolio
pub fn print_related(related: &[PortfolioEntry]) {
    print_header("Other assets held by this owner");
    if related.is_empty() {
        print_info("No other assets share this portfolio.");
        return;
    }
    for (i, entry) in related.iter().enumerate() {
        println!(
            "  {}. [{}] {} - {} {}",
            i + 1,
            entry.id,
            entry.name.bold(),
            entry.address,
            status_label(entry.status)
        );
    }
}

/// Print a portfolio's aggregate profile
pub fn print_summary(summary: &PortfolioSummary) {
    println!(
        "{} {} properties, total risk {}, max risk {} (owner {}, tenant {}, vacant {}, unassigned {})",
        summary.key.as_str().cyan().bold(),
        summary.size,
        summary.total_risk,
        summary.max_risk,
        summary.owner_count,
        summary.tenant_count,
        summary.vacant_count,
        summary.unclassified_count
    );
}
