//! `draftcheck config`: inspect configuration values.

use std::path::Path;

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(
    cmd: ConfigCommands,
    config_file: Option<&Path>,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            output.emit(&value)?;
        }

        ConfigCommands::List => {
            output.header("Current Configuration:")?;
            let rendered = config
                .to_toml()
                .with_cli_context(|| "Failed to render configuration")?;
            output.print(&rendered)?;
        }

        ConfigCommands::Path => match AppConfig::active_path(config_file) {
            Some(path) => output.emit(&path.display().to_string())?,
            None => {
                output.emit(&AppConfig::config_path().display().to_string())?;
                output.info("No configuration file yet; run `draftcheck init` to create it")?;
            }
        },
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    let optional = |v: Option<f64>| v.map(|n| n.to_string()).unwrap_or_default();

    match key {
        "defaults.status" => Ok(config.defaults.status.to_string()),
        "defaults.cost_price" => Ok(optional(config.defaults.cost_price)),
        "defaults.compare_price" => Ok(optional(config.defaults.compare_price)),
        "output.no_color" => Ok(config.output.no_color.to_string()),
        "output.format" => Ok(config.output.format.clone()),
        "check.extensions" => Ok(config.check.extensions.join(",")),
        "check.fail_fast" => Ok(config.check.fail_fast.to_string()),
        "check.recursive" => Ok(config.check.recursive.to_string()),
        _ => Err(CliError::ConfigError {
            message: format!("Unknown config key: '{key}'"),
            source: None,
        }),
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
