//! Implementation of the `draftcheck check` command.
//!
//! Responsibility: turn paths into draft sources, resolve defaults from
//! flags and config, run the validation service and render the report.
//! No rule logic lives here.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, instrument};

use draftcheck_adapters::{DocumentFormat, source_for_path};
use draftcheck_core::{
    application::{BatchReport, SubmissionReport, ValidationService},
    domain::DraftDefaults,
};

use crate::{
    cli::{CheckArgs, OutputFormat},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// JSON document written by `--output-format json`.
#[derive(Debug, Serialize)]
struct CheckOutput<'a> {
    checked_at: DateTime<Utc>,
    version: &'static str,
    #[serde(flatten)]
    batch: &'a BatchReport,
}

/// Execute the `draftcheck check` command.
///
/// 1. Resolve defaults, extensions and fail-fast from flags over config
/// 2. Build one source per path
/// 3. Load and check every submission
/// 4. Render the report
/// 5. Fail with exit code 2 when any draft is invalid
#[instrument(skip_all, fields(paths = args.paths.len()))]
pub fn execute(args: CheckArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let defaults = resolve_defaults(&args, &config);
    let extensions = resolve_extensions(&args, &config)?;
    let recursive = config.check.recursive && !args.no_recursive;
    let fail_fast = args.fail_fast || config.check.fail_fast;

    let mut service = ValidationService::new(defaults).with_fail_fast(fail_fast);
    for path in &args.paths {
        service = service.with_source(source_for_path(path, &extensions, recursive)?);
    }

    let submissions = service.load_all()?;

    let progress = output.progress(submissions.len() as u64);
    let batch = service.check_submissions_with(&submissions, |_| progress.inc(1));
    progress.finish_and_clear();

    info!(
        total = batch.total,
        valid = batch.valid,
        invalid = batch.invalid,
        "Drafts checked"
    );

    match output.format() {
        OutputFormat::Json => render_json(&batch, &output)?,
        _ => render_text(&batch, &output)?,
    }

    if batch.is_clean() {
        Ok(())
    } else {
        Err(CliError::InvalidDrafts {
            invalid: batch.invalid,
            total: batch.total,
        })
    }
}

// ── Resolution ────────────────────────────────────────────────────────────────

fn resolve_defaults(args: &CheckArgs, config: &AppConfig) -> DraftDefaults {
    DraftDefaults {
        status: args.status.unwrap_or(config.defaults.status),
        cost_price: args.cost_price.or(config.defaults.cost_price),
        compare_price: args.compare_price.or(config.defaults.compare_price),
    }
}

/// Extensions from `--ext` must all be readable; config values are
/// filtered by the directory source instead.
fn resolve_extensions(args: &CheckArgs, config: &AppConfig) -> CliResult<Vec<String>> {
    if args.extensions.is_empty() {
        return Ok(config.check.extensions.clone());
    }

    args.extensions
        .iter()
        .map(|ext| {
            let ext = ext.trim().trim_start_matches('.');
            match DocumentFormat::from_extension(ext) {
                Some(_) => Ok(ext.to_ascii_lowercase()),
                None => Err(CliError::InvalidInput {
                    message: format!("unsupported extension '{ext}' (expected json or toml)"),
                    source: None,
                }),
            }
        })
        .collect()
}

// ── Rendering ─────────────────────────────────────────────────────────────────

fn render_json(batch: &BatchReport, output: &OutputManager) -> CliResult<()> {
    let document = CheckOutput {
        checked_at: Utc::now(),
        version: env!("CARGO_PKG_VERSION"),
        batch,
    };
    let json = serde_json::to_string_pretty(&document).map_err(std::io::Error::from)?;
    output.emit(&json)?;
    Ok(())
}

fn render_text(batch: &BatchReport, output: &OutputManager) -> CliResult<()> {
    for report in &batch.reports {
        render_submission(report, output)?;
    }

    if batch.stopped_early {
        output.warning("Stopped at the first invalid draft (--fail-fast)")?;
    }

    output.print("")?;
    output.print(&summary_line(batch))?;
    Ok(())
}

fn render_submission(report: &SubmissionReport, output: &OutputManager) -> CliResult<()> {
    if report.is_valid() {
        output.success(&report.label)?;
        return Ok(());
    }

    output.error(&report.label)?;
    for (field, error) in report.errors.iter() {
        output.detail(&format!("{field}: {error}"))?;
    }
    Ok(())
}

fn summary_line(batch: &BatchReport) -> String {
    let noun = if batch.total == 1 { "draft" } else { "drafts" };
    format!(
        "Checked {} {noun}: {} valid, {} invalid",
        batch.total, batch.valid, batch.invalid
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use draftcheck_core::domain::ProductStatus;
    use std::path::PathBuf;

    fn args() -> CheckArgs {
        CheckArgs {
            paths: vec![PathBuf::from("drafts")],
            fail_fast: false,
            status: None,
            cost_price: None,
            compare_price: None,
            extensions: Vec::new(),
            no_recursive: false,
        }
    }

    #[test]
    fn flags_override_config_defaults() {
        let mut config = AppConfig::default();
        config.defaults.status = ProductStatus::Inactive;
        config.defaults.cost_price = Some(10.0);
        config.defaults.compare_price = Some(99.0);

        let mut args = args();
        args.cost_price = Some(0.0);

        let defaults = resolve_defaults(&args, &config);
        assert_eq!(defaults.status, ProductStatus::Inactive);
        assert_eq!(defaults.cost_price, Some(0.0));
        assert_eq!(defaults.compare_price, Some(99.0));
    }

    #[test]
    fn extensions_fall_back_to_config() {
        let extensions = resolve_extensions(&args(), &AppConfig::default()).unwrap();
        assert_eq!(extensions, vec!["json", "toml"]);
    }

    #[test]
    fn extension_flags_are_normalised() {
        let mut args = args();
        args.extensions = vec![".JSON".into(), " toml".into()];
        let extensions = resolve_extensions(&args, &AppConfig::default()).unwrap();
        assert_eq!(extensions, vec!["json", "toml"]);
    }

    #[test]
    fn unknown_extension_flag_is_rejected() {
        let mut args = args();
        args.extensions = vec!["csv".into()];
        assert!(matches!(
            resolve_extensions(&args, &AppConfig::default()),
            Err(CliError::InvalidInput { .. })
        ));
    }

    #[test]
    fn summary_counts() {
        let batch = BatchReport::default();
        assert_eq!(summary_line(&batch), "Checked 0 drafts: 0 valid, 0 invalid");
    }
}
