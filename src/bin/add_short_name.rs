// src/bin/add_short_name.rs
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use log::info;

use hq_country_lib::batch::short_name::{add_short_name_column, NAME_COLUMN, SHORT_NAME_COLUMN};
use hq_country_lib::batch::table::Table;
use hq_country_lib::utils::env::load_env;
use hq_country_lib::utils::progress_bars::logging::{EnrichmentTask, ResolutionLogger};
use hq_country_lib::utils::progress_bars::progress_config::ProgressConfig;

/// Number of shortened names echoed after the run
const SAMPLE_SIZE: usize = 15;

#[derive(Parser)]
#[command(author, version, about = "Adds a Short_Name column with fund suffixes stripped", long_about = None)]
struct ShortNameArgs {
    /// Input CSV with an "Investors" column
    input: PathBuf,

    /// Output CSV (defaults to rewriting the input)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Column holding the full fund name
    #[arg(long, default_value = NAME_COLUMN)]
    column: String,
}

fn main() -> Result<()> {
    env_logger::init();
    load_env();

    let args = ShortNameArgs::parse();
    let output = args.output.clone().unwrap_or_else(|| args.input.clone());

    let logger = ResolutionLogger::new(EnrichmentTask::ShortName);
    logger.log_start(&args.input.display().to_string(), &output.display().to_string());
    let progress_config = ProgressConfig::from_env();

    let mut table = Table::read_csv(&args.input)?;
    logger.log_data_loaded(table.len(), &args.column);

    logger.log_phase("Generating short names", None);
    let pb = progress_config.create_progress_bar(table.len() as u64, "Generating short names");
    let summary = add_short_name_column(&mut table, &args.column, &logger, pb.as_ref())?;
    if let Some(pb) = &pb {
        pb.finish_with_message("Short names generated");
    }

    if let (Some(name_col), Some(short_col)) = (
        table.column_index(&args.column),
        table.column_index(SHORT_NAME_COLUMN),
    ) {
        let samples = (0..table.len())
            .filter_map(|row| Some((table.cell(row, name_col)?, table.cell(row, short_col)?)))
            .filter(|(name, short)| name != short)
            .take(SAMPLE_SIZE);
        for (name, short) in samples {
            info!("  {:50} → {}", name, short);
        }
    }

    logger.log_summary(summary.total, summary.changed, 0);
    logger.log_breakdown("shortened", summary.changed);
    logger.log_breakdown("unchanged", summary.unchanged);
    table.write_csv(&output)?;
    logger.log_output_written(&output.display().to_string(), table.len());
    logger.log_completion();
    Ok(())
}
