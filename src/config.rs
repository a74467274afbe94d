use serde::Deserialize;

use crate::error::Result;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub eligibility: EligibilityConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EligibilityConfig {
    /// Length of the eligibility window in days.
    pub window_days: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct UiConfig {
    pub theme: String,
    pub tick_rate_ms: u64,
}

impl Config {
    /// Load configuration from an optional TOML file layered under
    /// `SINCEDOP_*` environment variables. Every key has a default, so the
    /// binary runs with no file present.
    pub fn load(path: &str) -> Result<Self> {
        dotenv::dotenv().ok();

        let config = config::Config::builder()
            .set_default("eligibility.window_days", 60_i64)?
            .set_default("ui.theme", "default")?
            .set_default("ui.tick_rate_ms", 250_i64)?
            .add_source(config::File::with_name(path).required(false))
            .add_source(config::Environment::with_prefix("SINCEDOP"))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}
