// src/utils/progress_bars/progress_config.rs

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::env;

const BAR_TEMPLATE: &str = "{spinner:.green} [{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}";

/// Configuration for progress tracking in the batch tools
#[derive(Debug, Clone)]
pub struct ProgressConfig {
    /// Whether to show progress bars at all
    pub enabled: bool,
    /// Whether to put the current row's value in the bar message
    pub detailed: bool,
    /// Refresh rate for progress bars in milliseconds
    pub refresh_rate_ms: u64,
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            detailed: false,
            refresh_rate_ms: 100,
        }
    }
}

impl ProgressConfig {
    /// Create progress configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            enabled: env::var("PROGRESS_ENABLED")
                .unwrap_or_else(|_| "true".to_string())
                .parse()
                .unwrap_or(true),
            detailed: env::var("PROGRESS_DETAILED")
                .unwrap_or_else(|_| "false".to_string())
                .parse()
                .unwrap_or(false),
            refresh_rate_ms: env::var("PROGRESS_REFRESH_RATE_MS")
                .unwrap_or_else(|_| "100".to_string())
                .parse()
                .unwrap_or(100),
        }
    }

    /// Row progress bar if progress is enabled, None otherwise
    pub fn create_progress_bar(&self, len: u64, message: &str) -> Option<ProgressBar> {
        if !self.enabled {
            return None;
        }
        let refresh_hz = (1000 / self.refresh_rate_ms.max(1)).clamp(1, 60) as u8;
        let pb = ProgressBar::with_draw_target(Some(len), ProgressDrawTarget::stderr_with_hz(refresh_hz));
        pb.set_style(
            ProgressStyle::default_bar()
                .template(BAR_TEMPLATE)
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("█▉▊▋▌▍▎▏  "),
        );
        pb.set_message(message.to_string());
        Some(pb)
    }

    /// Check if detailed progress should be shown
    pub fn should_show_detailed(&self) -> bool {
        self.enabled && self.detailed
    }
}

/// Environment variable configuration example
pub fn print_env_config_example() {
    println!("# Progress Tracking Configuration");
    println!();
    println!("# Enable/disable progress bars (default: true)");
    println!("export PROGRESS_ENABLED=true");
    println!();
    println!("# Show the row being processed in the bar message (default: false)");
    println!("export PROGRESS_DETAILED=false");
    println!();
    println!("# Progress bar refresh rate in milliseconds (default: 100)");
    println!("export PROGRESS_REFRESH_RATE_MS=100");
    println!();
    println!("# Fuzzy country matching cutoffs, 0-100 (defaults: 90 and 94)");
    println!("export FUZZY_SEGMENT_CUTOFF=90");
    println!("export FUZZY_WHOLE_CUTOFF=94");
    println!();
    println!("# For minimal output (CI/automated environments):");
    println!("export PROGRESS_ENABLED=false");
}
