// src/bin/add_honorifics.rs
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;
use log::info;

use hq_country_lib::batch::honorific::{add_honorific_columns, needs_review, InferenceCache};
use hq_country_lib::batch::table::Table;
use hq_country_lib::utils::env::load_env;
use hq_country_lib::utils::progress_bars::logging::{EnrichmentTask, ResolutionLogger};
use hq_country_lib::utils::progress_bars::progress_config::ProgressConfig;

#[derive(Parser)]
#[command(author, version, about = "Adds Honorific and Salutation columns for primary contacts", long_about = None)]
struct HonorificArgs {
    /// Input CSV with a "Primary Contact" column
    input: PathBuf,

    /// Output CSV (defaults to <input>_with_honorifics.csv)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Where to write contacts left without an honorific
    #[arg(long)]
    review: Option<PathBuf>,

    /// JSON file of name-inference answers keyed by first name
    #[arg(long, default_value = "name_inference_cache.json")]
    cache: PathBuf,
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
    load_env();

    let args = HonorificArgs::parse();
    let output = args
        .output
        .unwrap_or_else(|| sibling_path(&args.input, "with_honorifics"));
    let review_path = args
        .review
        .unwrap_or_else(|| sibling_path(&args.input, "honorifics_review"));

    let logger = ResolutionLogger::new(EnrichmentTask::Honorific);
    logger.log_start(&args.input.display().to_string(), &output.display().to_string());
    let progress_config = ProgressConfig::from_env();

    let mut table = Table::read_csv(&args.input)?;
    logger.log_data_loaded(table.len(), "Primary Contact");

    let cache = InferenceCache::load(&args.cache)?;
    info!("Loaded {} cached name inferences", cache.len());

    logger.log_phase("Assigning honorifics", Some("title first, then cached inference"));
    let pb = progress_config.create_progress_bar(table.len() as u64, "Assigning honorifics");
    let summary = add_honorific_columns(&mut table, &cache, &logger, pb.as_ref())?;
    if let Some(pb) = &pb {
        pb.finish_with_message("Honorifics assigned");
    }

    logger.log_summary(summary.total, summary.resolved(), summary.needs_review);
    logger.log_breakdown("Ms.", summary.ms);
    logger.log_breakdown("Mr.", summary.mr);
    logger.log_breakdown("Dr.", summary.dr);
    logger.log_breakdown("from title", summary.from_title);
    logger.log_breakdown("from inference", summary.from_inference);

    table.write_csv(&output)?;
    logger.log_output_written(&output.display().to_string(), table.len());

    if let Some(review) = needs_review(&table).filter(|t| !t.is_empty()) {
        review.write_csv(&review_path)?;
        logger.log_review_written(&review_path.display().to_string(), review.len());
    }

    logger.log_completion();
    Ok(())
}
