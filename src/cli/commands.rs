//! Command implementations for the planet CRS registry CLI
//!
//! This module contains the command execution logic, logging setup and the
//! human, JSON and CSV report writers.

use crate::app::models::{OriginConvention, WktRow};
use crate::app::services::crs_registry::{CrsRegistry, Page, parse_with_config};
use crate::app::services::wkt_parser::{ParseResult, ParseStats};
use crate::cli::args::{
    Args, Commands, CommonArgs, GetArgs, IdentifiersArgs, ListArgs, OutputFormat, ParseArgs,
};
use crate::config::RegistryConfig;
use anyhow::{Context, Result};
use colored::*;
use indicatif::HumanDuration;
use serde::Serialize;
use std::io::Write;
use std::time::Instant;
use tracing::{debug, info};

/// Main command runner
///
/// Sets up configuration and logging, then dispatches to the subcommand.
pub async fn run(args: Args) -> Result<()> {
    let command = args.command.context("No command given")?;
    let common = command.common().clone();

    common.validate()?;
    let config = load_configuration(&common).context("Failed to load configuration")?;
    setup_logging(&common, &config);

    debug!("Command: {:?}", command);
    debug!("Loaded configuration: {:?}", config);

    match command {
        Commands::Parse(args) => run_parse(&args, &config).await,
        Commands::List(args) => run_list(&args, &config).await,
        Commands::Get(args) => run_get(&args, &config).await,
        Commands::Bodies(common) => run_bodies(&common, &config).await,
        Commands::Versions(common) => run_versions(&common, &config).await,
        Commands::Identifiers(args) => run_identifiers(&args, &config).await,
    }
}

/// Set up structured logging based on CLI arguments
fn setup_logging(common: &CommonArgs, config: &RegistryConfig) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = common.get_log_level(&config.log_level);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("planet_crs_registry={}", log_level)));

    let initialized = if common.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };

    if initialized.is_ok() {
        debug!("Logging initialized at level: {}", log_level);
    }
}

/// Load configuration using layered approach (file -> env -> args)
fn load_configuration(common: &CommonArgs) -> crate::Result<RegistryConfig> {
    let mut config = RegistryConfig::load(common.config_file.as_deref())?;
    apply_cli_overrides(&mut config, common);
    config.validate()?;
    Ok(config)
}

/// Apply command-line overrides on top of file and environment settings
fn apply_cli_overrides(config: &mut RegistryConfig, common: &CommonArgs) {
    if let Some(corpus_path) = &common.corpus_path {
        config.corpus_path = corpus_path.clone();
    }

    if let Some(workers) = common.workers {
        config.workers = workers;
    }

    if common.parallel {
        config.parallel = true;
    }
}

async fn load_registry(common: &CommonArgs, config: &RegistryConfig) -> Result<CrsRegistry> {
    let (registry, stats) = CrsRegistry::load_with_config(config, common.show_progress())
        .await
        .with_context(|| {
            format!(
                "Failed to load registry from {}",
                config.corpus_path.display()
            )
        })?;

    info!("{}", stats.summary());
    Ok(registry)
}

// ============================================================================
// parse
// ============================================================================

async fn run_parse(args: &ParseArgs, config: &RegistryConfig) -> Result<()> {
    let start_time = Instant::now();

    let result = parse_with_config(config, args.common.show_progress())
        .await
        .with_context(|| format!("Failed to parse {}", config.corpus_path.display()))?;

    match args.common.output_format {
        OutputFormat::Human => {
            generate_human_parse_report(&result, start_time, args.show_failures)
        }
        OutputFormat::Json => generate_json_parse_report(&result, args.show_failures)?,
        OutputFormat::Csv => generate_csv_parse_report(std::io::stdout(), &result.stats)?,
    }

    Ok(())
}

fn generate_human_parse_report(result: &ParseResult, start_time: Instant, show_failures: bool) {
    let stats = &result.stats;

    println!("\n{}", "WKT Corpus Parse Summary".bold());
    println!("{}", "=".repeat(40));
    println!("   Blocks in corpus: {}", stats.total_blocks);
    println!("   Empty blocks: {}", stats.empty_blocks);
    println!(
        "   Records parsed: {}",
        stats.records_parsed.to_string().green()
    );

    if stats.classification_failures > 0 {
        println!(
            "   Unclassified blocks: {}",
            stats.classification_failures.to_string().red()
        );
    } else {
        println!("   Unclassified blocks: 0");
    }

    println!("   Success rate: {:.1}%", stats.success_rate());
    println!("   Processing time: {}", HumanDuration(start_time.elapsed()));

    if !stats.per_template.is_empty() {
        println!("\n{}", "Records per template:".bold());
        for (template, count) in &stats.per_template {
            println!("   {:<30} {}", template.name(), count);
        }
    }

    if show_failures && !result.failures.is_empty() {
        println!("\n{}", "Unclassified blocks:".bold().red());
        for failure in &result.failures {
            println!("   [block {}] {}", failure.index, failure.raw.trim());
        }
    }

    println!();
}

fn generate_json_parse_report(result: &ParseResult, show_failures: bool) -> Result<()> {
    let mut report = serde_json::json!({ "stats": result.stats });
    if show_failures {
        report["failures"] = serde_json::to_value(&result.failures)?;
    }

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn generate_csv_parse_report<W: Write>(out: W, stats: &ParseStats) -> Result<()> {
    let mut writer = csv_writer(out);
    writer.write_record(["metric", "value"])?;
    writer.serialize(("total_blocks", stats.total_blocks))?;
    writer.serialize(("empty_blocks", stats.empty_blocks))?;
    writer.serialize(("records_parsed", stats.records_parsed))?;
    writer.serialize(("classification_failures", stats.classification_failures))?;
    for (template, count) in &stats.per_template {
        writer.serialize((format!("template_{}", template.name()), count))?;
    }
    writer.flush()?;
    Ok(())
}

// ============================================================================
// list / get
// ============================================================================

async fn run_list(args: &ListArgs, config: &RegistryConfig) -> Result<()> {
    let page = config.page(args.offset, args.limit)?;
    let registry = load_registry(&args.common, config).await?;

    let (rows, total) = select_rows(&registry, args, page)?;

    match args.common.output_format {
        OutputFormat::Human => {
            print_rows_human(&rows);
            println!(
                "\nShowing {} of {} WKTs (offset {})",
                rows.len(),
                total,
                page.offset
            );
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rows)?),
        OutputFormat::Csv => write_rows_csv(std::io::stdout(), &rows)?,
    }

    Ok(())
}

/// Pick the rows a list command asks for, with the unpaged total
fn select_rows<'a>(
    registry: &'a CrsRegistry,
    args: &ListArgs,
    page: Page,
) -> crate::Result<(Vec<&'a WktRow>, usize)> {
    if let Some(version) = args.version {
        return Ok((
            registry.by_version(version, page)?,
            registry.count_by_version(version)?,
        ));
    }

    if let Some(solar_body) = &args.solar_body {
        return Ok((
            registry.by_solar_body(solar_body, page)?,
            registry.count_by_solar_body(solar_body),
        ));
    }

    if let Some(term) = &args.search {
        return Ok((registry.search(term, page), registry.search_count(term)));
    }

    Ok((registry.all(page), registry.count()))
}

async fn run_get(args: &GetArgs, config: &RegistryConfig) -> Result<()> {
    let registry = load_registry(&args.common, config).await?;

    let row = match (args.version, &args.solar_body) {
        (Some(version), _) => registry.get_for_version(version, &args.id)?,
        (None, Some(solar_body)) => registry.get_for_solar_body(solar_body, &args.id)?,
        (None, None) => registry.get(&args.id)?,
    };

    match args.common.output_format {
        OutputFormat::Human => {
            println!("{}", row.id.bold());
            println!("   Solar body: {}", row.solar_body);
            println!("   Datum: {}", row.datum_name);
            println!("   Ellipsoid: {}", row.ellipsoid_name);
            println!("   Projection: {}", row.projection_name);
            println!("   Origin convention: {}", row.origin_convention);
            println!();
            println!("{}", row.wkt);
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(row)?),
        OutputFormat::Csv => write_rows_csv(std::io::stdout(), &[row])?,
    }

    Ok(())
}

fn print_rows_human(rows: &[&WktRow]) {
    println!(
        "{:<18} {:<12} {:<10} {}",
        "ID".bold(),
        "BODY".bold(),
        "ORIGIN".bold(),
        "PROJECTION".bold()
    );
    for row in rows {
        println!(
            "{:<18} {:<12} {:<10} {}",
            row.id, row.solar_body, row.origin_convention, row.projection_name
        );
    }
}

const ROW_CSV_HEADER: [&str; 8] = [
    "id",
    "version",
    "code",
    "solar_body",
    "datum_name",
    "ellipsoid_name",
    "projection_name",
    "origin_convention",
];

/// CSV columns of a registry row; the WKT text itself is left out
#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    id: &'a str,
    version: u32,
    code: u32,
    solar_body: &'a str,
    datum_name: &'a str,
    ellipsoid_name: &'a str,
    projection_name: &'a str,
    origin_convention: OriginConvention,
}

impl<'a> From<&'a WktRow> for CsvRow<'a> {
    fn from(row: &'a WktRow) -> Self {
        Self {
            id: &row.id,
            version: row.version,
            code: row.code,
            solar_body: &row.solar_body,
            datum_name: &row.datum_name,
            ellipsoid_name: &row.ellipsoid_name,
            projection_name: &row.projection_name,
            origin_convention: row.origin_convention,
        }
    }
}

/// CSV writer whose header line is written explicitly, so empty results still get one
fn csv_writer<W: Write>(out: W) -> csv::Writer<W> {
    csv::WriterBuilder::new().has_headers(false).from_writer(out)
}

fn write_rows_csv<W: Write>(out: W, rows: &[&WktRow]) -> Result<()> {
    let mut writer = csv_writer(out);
    writer.write_record(ROW_CSV_HEADER)?;
    for row in rows {
        writer.serialize(CsvRow::from(*row))?;
    }
    writer.flush()?;
    Ok(())
}

// ============================================================================
// bodies / versions / identifiers
// ============================================================================

async fn run_bodies(common: &CommonArgs, config: &RegistryConfig) -> Result<()> {
    let registry = load_registry(common, config).await?;
    let counts: Vec<(String, usize)> = registry
        .solar_bodies()
        .into_iter()
        .map(|body| (body.to_string(), registry.count_by_solar_body(body)))
        .collect();

    print_counts(common.output_format, "solar_body", &counts)
}

async fn run_versions(common: &CommonArgs, config: &RegistryConfig) -> Result<()> {
    let registry = load_registry(common, config).await?;
    let mut counts = Vec::new();
    for version in registry.versions() {
        counts.push((version.to_string(), registry.count_by_version(version)?));
    }

    print_counts(common.output_format, "version", &counts)
}

fn print_counts(format: OutputFormat, key: &str, counts: &[(String, usize)]) -> Result<()> {
    match format {
        OutputFormat::Human => {
            for (name, count) in counts {
                println!("   {:<20} {} WKTs", name, count);
            }
        }
        OutputFormat::Json => {
            let entries: Vec<_> = counts
                .iter()
                .map(|(name, count)| {
                    let mut entry = serde_json::Map::new();
                    entry.insert(key.to_string(), serde_json::json!(name));
                    entry.insert("count".to_string(), serde_json::json!(count));
                    serde_json::Value::Object(entry)
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
        OutputFormat::Csv => write_counts_csv(std::io::stdout(), key, counts)?,
    }
    Ok(())
}

fn write_counts_csv<W: Write>(out: W, key: &str, counts: &[(String, usize)]) -> Result<()> {
    let mut writer = csv_writer(out);
    writer.write_record([key, "count"])?;
    for entry in counts {
        writer.serialize(entry)?;
    }
    writer.flush()?;
    Ok(())
}

async fn run_identifiers(args: &IdentifiersArgs, config: &RegistryConfig) -> Result<()> {
    let registry = load_registry(&args.common, config).await?;

    let identifiers = match args.version {
        Some(version) => registry.ogc_identifiers(version)?,
        None => registry.ogc_versions(),
    };

    match args.common.output_format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&identifiers)?),
        OutputFormat::Csv => {
            let mut writer = csv_writer(std::io::stdout());
            writer.write_record(["identifier"])?;
            for identifier in &identifiers {
                writer.write_record([identifier])?;
            }
            writer.flush()?;
        }
        OutputFormat::Human => {
            for identifier in &identifiers {
                println!("{}", identifier);
            }
        }
    }

    Ok(())
}
