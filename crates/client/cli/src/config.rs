//! CLI configuration for the scenario harness.
use std::env;
use std::path::PathBuf;

/// Scenario harness configuration.
///
/// Built from environment variables, then narrowed by positional arguments.
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    /// TOML engine configuration; bundled defaults when unset.
    pub config_path: Option<PathBuf>,
    /// Directory holding `scenarios/*.ron`. Bundled scenarios are used when unset.
    pub data_dir: Option<PathBuf>,
    /// Scenario names to run. Empty means every available scenario.
    pub scenarios: Vec<String>,
    /// Optional directory for a `effect-cli.log` file next to stderr output.
    pub log_dir: Option<PathBuf>,
}

impl CliConfig {
    /// Construct CLI configuration from environment variables.
    ///
    /// Environment variables:
    /// - `EFFECT_CONFIG` - Path to an engine config TOML file
    /// - `EFFECT_DATA_DIR` - Content directory with a `scenarios/` folder
    /// - `EFFECT_SCENARIO` - Comma-separated scenario names
    /// - `EFFECT_LOG_DIR` - Directory for the log file
    pub fn from_env() -> Self {
        Self {
            config_path: read_env::<PathBuf>("EFFECT_CONFIG"),
            data_dir: read_env::<PathBuf>("EFFECT_DATA_DIR"),
            scenarios: env::var("EFFECT_SCENARIO")
                .map(|value| split_names(&value))
                .unwrap_or_default(),
            log_dir: read_env::<PathBuf>("EFFECT_LOG_DIR"),
        }
    }

    /// Positional arguments name scenarios and take precedence over
    /// `EFFECT_SCENARIO`.
    pub fn with_args<I>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let names: Vec<String> = args
            .into_iter()
            .flat_map(|arg| split_names(&arg))
            .collect();
        if !names.is_empty() {
            self.scenarios = names;
        }
        self
    }
}

fn split_names(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_owned)
        .collect()
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
