// src/utils/progress_bars/logging.rs - Logging helpers for the batch enrichment tools
use log::{debug, info, warn};
use std::time::Instant;

/// The enrichment step a logger reports for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnrichmentTask {
    Country,
    Honorific,
    ShortName,
}

#[derive(Clone)]
pub struct ResolutionLogger {
    task_name: &'static str,
    task_emoji: &'static str,
    start_time: Instant,
}

impl ResolutionLogger {
    pub fn new(task: EnrichmentTask) -> Self {
        let (task_name, task_emoji) = match task {
            EnrichmentTask::Country => ("COUNTRY", "🌍"),
            EnrichmentTask::Honorific => ("HONORIFIC", "👤"),
            EnrichmentTask::ShortName => ("SHORT_NAME", "🏷️"),
        };

        Self {
            task_name,
            task_emoji,
            start_time: Instant::now(),
        }
    }

    pub fn log_start(&self, input: &str, output: &str) {
        info!(
            "[{}] {} 🚀 Starting {} enrichment: {} → {}",
            self.task_name,
            self.task_emoji,
            self.task_name.to_lowercase(),
            input,
            output
        );
    }

    pub fn log_phase(&self, phase: &str, details: Option<&str>) {
        let elapsed = self.start_time.elapsed();
        let msg = if let Some(details) = details {
            format!(
                "[{}] {} 🔄 Phase: {} - {} [+{:.1}s]",
                self.task_name, self.task_emoji, phase, details, elapsed.as_secs_f32()
            )
        } else {
            format!(
                "[{}] {} 🔄 Phase: {} [+{:.1}s]",
                self.task_name, self.task_emoji, phase, elapsed.as_secs_f32()
            )
        };
        info!("{}", msg);
    }

    pub fn log_data_loaded(&self, count: usize, column: &str) {
        info!(
            "[{}] {} 📊 Loaded {} rows, reading column '{}'",
            self.task_name, self.task_emoji, count, column
        );
    }

    pub fn log_row(&self, row_index: usize, input: &str, output: &str, detail: &str) {
        debug!(
            "[{}] row {}: '{}' → '{}' ({})",
            self.task_name, row_index, input, output, detail
        );
    }

    /// Summary in the same shape for every task: total, resolved and the
    /// number of rows left for manual review.
    pub fn log_summary(&self, total: usize, resolved: usize, needs_review: usize) {
        let percent = if total > 0 {
            (resolved as f64 / total as f64) * 100.0
        } else {
            0.0
        };
        info!(
            "[{}] {} ✅ Summary: {} rows, {} resolved ({:.1}%), {} need review",
            self.task_name, self.task_emoji, total, resolved, percent, needs_review
        );
    }

    pub fn log_breakdown(&self, label: &str, count: usize) {
        info!("[{}] {}    {}: {}", self.task_name, self.task_emoji, label, count);
    }

    pub fn log_output_written(&self, path: &str, rows: usize) {
        info!(
            "[{}] {} 💾 Wrote {} rows to {}",
            self.task_name, self.task_emoji, rows, path
        );
    }

    pub fn log_review_written(&self, path: &str, rows: usize) {
        warn!(
            "[{}] {} ⚠️  {} rows need manual review, exported to {}",
            self.task_name, self.task_emoji, rows, path
        );
    }

    pub fn log_completion(&self) {
        info!(
            "[{}] {} 🏁 Finished in {:.2}s",
            self.task_name,
            self.task_emoji,
            self.start_time.elapsed().as_secs_f64()
        );
    }
}
