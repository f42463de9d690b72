pub mod env;
pub mod progress_bars;
pub mod resolver_config;
