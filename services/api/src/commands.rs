use crate::infra::{build_ingestion_service, build_resolver};
use chrono::Utc;
use clap::Args;
use mylocalguide::config::AppConfig;
use mylocalguide::error::AppError;
use mylocalguide::ingest::{IngestionReport, VenueRecord};
use mylocalguide::neighborhoods::{NeighborhoodResolver, ResolutionResult};
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct ResolveArgs {
    /// Street address of the venue
    pub(crate) address: String,
    /// Venue name, consulted for landmark and keyword matches
    #[arg(long, default_value = "")]
    pub(crate) name: String,
    /// Print the resolution as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ImportArgs {
    /// CSV export with source, external_id, name, address, and tag columns
    pub(crate) csv: PathBuf,
    /// Also list every stored venue after the run
    #[arg(long)]
    pub(crate) list_venues: bool,
}

pub(crate) fn run_resolve(args: ResolveArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let resolver = build_resolver(config.resolver)?;
    let result = resolver.resolve(&args.name, &args.address);

    if args.json {
        let payload =
            serde_json::to_string_pretty(&result).map_err(|err| AppError::Io(err.into()))?;
        println!("{payload}");
    } else {
        println!("{}", render_resolution(&args.address, &result));
    }
    Ok(())
}

pub(crate) fn run_import(args: ImportArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let resolver = build_resolver(config.resolver)?;
    let service = build_ingestion_service(resolver)?;

    let reader = BufReader::new(File::open(&args.csv)?);
    let report = service.import_csv(reader, Utc::now())?;
    println!("{}", render_report(&report));

    if args.list_venues {
        println!("\nStored venues");
        for record in service.venues()? {
            println!("{}", render_venue(&record));
        }
    }
    Ok(())
}

pub(crate) fn run_list_neighborhoods() -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let resolver = build_resolver(config.resolver)?;
    println!("{}", render_neighborhoods(&resolver));
    Ok(())
}

fn render_resolution(address: &str, result: &ResolutionResult) -> String {
    format!(
        "{address}\n  neighborhood: {}\n  confidence:   {}\n  method:       {}",
        result.neighborhood, result.confidence, result.method
    )
}

fn render_report(report: &IngestionReport) -> String {
    let mut lines = vec![
        format!("Ingestion run {}", report.run_id),
        format!("  elapsed:    {} ms", report.elapsed().num_milliseconds()),
        format!("  received:   {}", report.received),
        format!("  inserted:   {}", report.inserted),
        format!("  updated:    {}", report.updated),
        format!("  duplicates: {}", report.duplicates),
        format!("  rejected:   {}", report.rejected.len()),
    ];
    for rejected in &report.rejected {
        lines.push(format!(
            "    - '{}': {}",
            rejected.external_id, rejected.reason
        ));
    }
    if !report.by_method.is_empty() {
        lines.push("  resolved by:".to_string());
        for (method, count) in &report.by_method {
            lines.push(format!("    {method:<10} {count}"));
        }
    }
    lines.join("\n")
}

fn render_venue(record: &VenueRecord) -> String {
    format!(
        "  {} {:<32} {:<22} {:<18} {} ({})",
        record.id.0,
        record.name,
        record.category,
        record.neighborhood,
        record.method,
        record.confidence
    )
}

fn render_neighborhoods(resolver: &NeighborhoodResolver) -> String {
    let default = resolver.default_neighborhood();
    resolver
        .tables()
        .neighborhoods
        .iter()
        .map(|profile| {
            let marker = if profile.name == default { " (default)" } else { "" };
            format!("{:<20} {}{marker}", profile.name, profile.slug())
        })
        .collect::<Vec<_>>()
        .join("\n")
}
