//! `draftcheck init`: create a default configuration file.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::{
    cli::InitArgs,
    config::AppConfig,
    error::{CliResult, IntoCli},
    output::OutputManager,
};

const HEADER: &str = "# draftcheck configuration\n\
# Values here are overridden by DRAFTCHECK__SECTION__KEY environment variables\n\
# and by command-line flags.\n\n";

/// Create a default draftcheck configuration file.
pub fn execute(args: InitArgs, output: OutputManager) -> CliResult<()> {
    let config_path = target_path(&args);

    let replace = args.force || args.yes;
    if !should_write(config_path.exists(), replace, || confirm_overwrite(&config_path))? {
        output.warning(&format!(
            "Config already exists at {}  (use --force to overwrite)",
            config_path.display(),
        ))?;
        return Ok(());
    }

    output.info("Initialising configuration...")?;

    let rendered = AppConfig::default()
        .to_toml()
        .with_cli_context(|| "Failed to serialise default config")?;

    if let Some(parent) = config_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).with_cli_context(|| {
            format!("Failed to create config directory '{}'", parent.display())
        })?;
    }

    std::fs::write(&config_path, format!("{HEADER}{rendered}")).with_cli_context(|| {
        format!("Failed to write config to '{}'", config_path.display())
    })?;

    info!(path = %config_path.display(), "Configuration written");
    output.success(&format!(
        "Configuration created at {}",
        config_path.display(),
    ))?;

    Ok(())
}

/// Whether to write the file. A declined prompt keeps the existing file.
fn should_write<F>(exists: bool, replace: bool, confirm: F) -> CliResult<bool>
where
    F: FnOnce() -> CliResult<bool>,
{
    if !exists || replace {
        return Ok(true);
    }
    confirm()
}

fn target_path(args: &InitArgs) -> PathBuf {
    if args.local {
        AppConfig::local_path()
    } else {
        AppConfig::config_path()
    }
}

/// Ask before replacing an existing file.
///
/// Without a terminal on stdin there is nobody to ask, so the answer is no.
#[cfg(feature = "interactive")]
fn confirm_overwrite(path: &Path) -> CliResult<bool> {
    use std::io::IsTerminal as _;

    if !std::io::stdin().is_terminal() {
        return Ok(false);
    }

    dialoguer::Confirm::new()
        .with_prompt(format!("Overwrite {}?", path.display()))
        .default(false)
        .interact()
        .map_err(|e| crate::error::CliError::InvalidInput {
            message: "could not read confirmation".into(),
            source: Some(Box::new(e)),
        })
}

/// Builds without prompts never replace a file unasked.
#[cfg(not(feature = "interactive"))]
fn confirm_overwrite(_path: &Path) -> CliResult<bool> {
    Ok(false)
}
