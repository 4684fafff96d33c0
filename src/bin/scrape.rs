use anyhow::{Context, Result};
use clap::Parser;
use places_scraper::config::Config;
use places_scraper::models::{PlaceRecord, SearchForm, SearchOutcome, DEFAULT_KEYWORD};
use places_scraper::services::{export_csv, GoogleMapsClient, SearchService, EXPORT_FILE_NAME};
use std::fs;
use std::path::{Path, PathBuf};
use std::process;
use std::time::Instant;

// --- ANSI colors ---
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";

/// Search Google Maps places near ZIP codes or an area and export them as CSV
#[derive(Debug, Parser)]
#[command(name = "scrape", version)]
struct Args {
    /// ZIP / post codes, space separated (e.g. "10001 10009")
    #[arg(long, default_value = "")]
    zip: String,

    /// Area in the form "Area Name City Name"
    #[arg(long, default_value = "")]
    area: String,

    /// Search keyword
    #[arg(long, default_value = DEFAULT_KEYWORD)]
    keyword: String,

    /// CSV file to write
    #[arg(long, short, default_value = EXPORT_FILE_NAME)]
    output: PathBuf,
}

fn truncate(text: &str, width: usize) -> String {
    let first_line = text.lines().next().unwrap_or("");
    if first_line.chars().count() <= width {
        first_line.to_string()
    } else {
        let cut: String = first_line.chars().take(width.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}

fn print_table(places: &[PlaceRecord]) {
    println!("──────────────────────────────────────────────────────────────────────────────");
    println!(
        "{:<36} {:>7} {:>7} {:<24}",
        "Place", "Ratings", "Total", "Phone Number"
    );
    println!("──────────────────────────────────────────────────────────────────────────────");

    for place in places {
        let row = place.to_row();
        println!(
            "{:<36} {:>7} {:>7} {:<24}",
            truncate(&row[0], 36),
            row[1],
            row[2],
            truncate(&row[4], 24)
        );
    }

    println!("──────────────────────────────────────────────────────────────────────────────");
}

fn print_summary(outcome: &SearchOutcome, output: &Path, duration: f64) {
    for warning in &outcome.warnings {
        println!("{}⚠️  {}{}", YELLOW, warning, RESET);
    }

    if let Some(notice) = &outcome.notice {
        println!("{}{}{}", YELLOW, notice, RESET);
        return;
    }

    println!("\n{}📋 Results{}", BOLD, RESET);
    print_table(&outcome.places);
    println!("  • Places: {}{}{}", GREEN, outcome.places.len(), RESET);
    println!("  • Queries: {}", outcome.query_count);
    println!("  • Duration: {:.1}s", duration);
    println!("\n{}📥 Saved to {}{}", GREEN, output.display(), RESET);
}

async fn run(args: Args) -> Result<()> {
    let config = Config::load().context("failed to load configuration")?;
    let client = GoogleMapsClient::from_config(&config);
    let form = SearchForm::new(&args.zip, &args.area, &args.keyword);

    println!("{}🔍 Searching \"{}\"...{}", CYAN, args.keyword.trim(), RESET);

    let start_time = Instant::now();
    let outcome = SearchService::run(&client, &form).await?;
    let duration = start_time.elapsed().as_secs_f64();

    if !outcome.places.is_empty() {
        let csv = export_csv(&outcome.places)?;
        fs::write(&args.output, csv)
            .with_context(|| format!("failed to write {}", args.output.display()))?;
    }

    print_summary(&outcome, &args.output, duration);
    Ok(())
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "warn");
    }
    env_logger::init();

    if let Err(e) = run(args).await {
        println!("{}❌ Error: {:#}{}", RED, e, RESET);
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_defaults() {
        let args = Args::parse_from(["scrape", "--zip", "10001 10009"]);
        assert_eq!(args.zip, "10001 10009");
        assert_eq!(args.area, "");
        assert_eq!(args.keyword, "construction");
        assert_eq!(args.output, PathBuf::from("Scraped_Places.csv"));
    }

    #[test]
    fn test_truncate_uses_first_line() {
        assert_eq!(truncate("Monday: Closed\nTuesday: Open", 40), "Monday: Closed");
        assert_eq!(truncate("abcdef", 4), "abc…");
    }
}
