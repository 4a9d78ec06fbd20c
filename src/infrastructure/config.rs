// Configuration loading
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardConfig {
    pub source: SourceSettings,
    #[serde(default)]
    pub refresh: RefreshSettings,
    #[serde(default)]
    pub series: SeriesSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SourceSettings {
    pub path: PathBuf,
    #[serde(default = "default_max_rows")]
    pub max_rows: usize,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RefreshSettings {
    #[serde(default = "default_period_ms")]
    pub period_ms: u64,
}

impl Default for RefreshSettings {
    fn default() -> Self {
        Self {
            period_ms: default_period_ms(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct SeriesSettings {
    #[serde(default = "default_expected_series")]
    pub expected: Vec<String>,
}

impl Default for SeriesSettings {
    fn default() -> Self {
        Self {
            expected: default_expected_series(),
        }
    }
}

fn default_max_rows() -> usize {
    100
}

fn default_period_ms() -> u64 {
    1000
}

fn default_expected_series() -> Vec<String> {
    (1..=8).map(|i| format!("sensor{i}")).collect()
}

/// Read once at process start; settings are not hot-reloaded.
pub fn load_dashboard_config() -> anyhow::Result<DashboardConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/dashboard"))
        .build()?;

    Ok(settings.try_deserialize()?)
}
