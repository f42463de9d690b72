use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use hq_country_lib::{
    batch::{
        country::{add_country_column, locate_column, needs_review},
        table::Table,
    },
    global_resolver,
    utils::{
        env::{load_env, load_env_from_file},
        progress_bars::{
            logging::{EnrichmentTask, ResolutionLogger},
            progress_config::{print_env_config_example, ProgressConfig},
        },
        resolver_config::ResolverConfig,
    },
};
use log::info;

#[derive(Parser)]
#[command(author, version, about = "Adds a canonical country column from headquarters locations", long_about = None)]
struct Args {
    /// Input CSV with an HQ location column
    #[arg(required_unless_present = "env_help")]
    input: Option<PathBuf>,

    /// Output CSV (defaults to <input>_with_country.csv)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Where to write rows that could not be resolved
    #[arg(long)]
    review: Option<PathBuf>,

    /// Location column header, if not one of the usual HQ names
    #[arg(long)]
    column: Option<String>,

    /// Load settings from this file instead of ./.env
    #[arg(long)]
    env_file: Option<PathBuf>,

    /// Print the supported environment variables and exit
    #[arg(long)]
    env_help: bool,
}

fn sibling_path(input: &Path, suffix: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    input.with_file_name(format!("{}_{}.csv", stem, suffix))
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    match &args.env_file {
        Some(path) => load_env_from_file(&path.to_string_lossy()),
        None => load_env(),
    }
    if args.env_help {
        print_env_config_example();
        return Ok(());
    }
    let input = args.input.context("An input CSV path is required")?;
    let output = args.output.unwrap_or_else(|| sibling_path(&input, "with_country"));
    let review_path = args.review.unwrap_or_else(|| sibling_path(&input, "needs_review"));

    let logger = ResolutionLogger::new(EnrichmentTask::Country);
    logger.log_start(&input.display().to_string(), &output.display().to_string());

    ResolverConfig::from_env().log_config();
    let progress_config = ProgressConfig::from_env();
    info!(
        "Progress tracking: enabled={}, detailed={}",
        progress_config.enabled, progress_config.detailed
    );

    logger.log_phase("Loading reference data", None);
    let resolver = global_resolver().context("Failed to initialize the country resolver")?;

    logger.log_phase("Reading input", None);
    let mut table = Table::read_csv(&input)?;
    let location_col = locate_column(&table, args.column.as_deref())?;
    logger.log_data_loaded(table.len(), &table.headers()[location_col]);

    logger.log_phase("Resolving countries", None);
    let pb = progress_config.create_progress_bar(table.len() as u64, "Resolving countries");
    let summary = add_country_column(
        &mut table,
        resolver,
        location_col,
        &logger,
        pb.as_ref(),
        progress_config.should_show_detailed(),
    )?;
    if let Some(pb) = &pb {
        pb.finish_with_message("Countries resolved");
    }

    logger.log_summary(summary.total, summary.resolved, summary.needs_review);
    for (layer, count) in &summary.by_layer {
        logger.log_breakdown(layer, *count);
    }

    table.write_csv(&output)?;
    logger.log_output_written(&output.display().to_string(), table.len());

    if let Some(review) = needs_review(&table).filter(|t| !t.is_empty()) {
        review.write_csv(&review_path)?;
        logger.log_review_written(&review_path.display().to_string(), review.len());
    }

    logger.log_completion();
    Ok(())
}
