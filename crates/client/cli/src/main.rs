//! Scenario harness entry point.
//!
//! Runs reference or on-disk scenarios through the effect engine and prints
//! the resulting stats, expectation checks and battle logs.
//!
//! ```bash
//! # Every bundled scenario
//! cargo run -p effect-cli
//!
//! # Selected scenarios from a content directory
//! EFFECT_DATA_DIR=crates/game/content/data cargo run -p effect-cli -- aura pvp_mode
//! ```
mod config;
mod report;

use anyhow::{Context, Result};
use effect_content::{BundledScenarios, ConfigLoader, ContentFactory, ScenarioRunner, ScenarioSpec};
use effect_core::EngineConfig;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use config::CliConfig;

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = CliConfig::from_env().with_args(std::env::args().skip(1));
    setup_logging(&config)?;

    let engine_config = match &config.config_path {
        Some(path) => ConfigLoader::load(path)?,
        None => EngineConfig::default(),
    };
    tracing::info!(
        pvp_modifier_cap = engine_config.pvp_modifier_cap(),
        "Engine configuration loaded"
    );

    let scenarios = load_scenarios(&config)?;
    let runner = ScenarioRunner::new(engine_config);

    let mut stdout = std::io::stdout().lock();
    let mut failed = Vec::new();
    for spec in &scenarios {
        let report = runner.run(spec)?;
        report::write_report(&mut stdout, &report)?;
        if !report.passed() {
            failed.push(report.name);
        }
    }

    if !failed.is_empty() {
        anyhow::bail!("{} scenario(s) failed: {}", failed.len(), failed.join(", "));
    }

    tracing::info!("All {} scenario(s) passed", scenarios.len());
    Ok(())
}

/// Resolves the scenario selection against either a content directory or the
/// bundled set.
fn load_scenarios(config: &CliConfig) -> Result<Vec<ScenarioSpec>> {
    if let Some(data_dir) = &config.data_dir {
        let factory = ContentFactory::new(data_dir);
        let names = if config.scenarios.is_empty() {
            factory.scenario_names()?
        } else {
            config.scenarios.clone()
        };
        return names
            .iter()
            .map(|name| factory.load_scenario(name))
            .collect();
    }

    let bundled = BundledScenarios::load()?;
    if config.scenarios.is_empty() {
        return Ok(bundled.iter().cloned().collect());
    }

    config
        .scenarios
        .iter()
        .map(|name| {
            bundled.get(name).cloned().with_context(|| {
                let known: Vec<&str> = bundled.names().collect();
                format!("unknown scenario '{}' (known: {})", name, known.join(", "))
            })
        })
        .collect()
}

/// Logs to stderr, and additionally to `effect-cli.log` when a log directory
/// is configured.
fn setup_logging(config: &CliConfig) -> Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());
    let stderr_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    let file_layer = match &config.log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
            let file_appender = tracing_appender::rolling::never(dir, "effect-cli.log");
            Some(
                tracing_subscriber::fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    if let Some(dir) = &config.log_dir {
        tracing::info!("Log file: {}/effect-cli.log", dir.display());
    }
    Ok(())
}
