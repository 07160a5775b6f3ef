//! `veriscan check` — analyze files and report diagnostics.
//!
//! For each input file: read, analyze, render diagnostics. Text output uses
//! the rustc-style terminal renderer; JSON output emits one report object
//! per file keyed by path. Exit code 0 when no errors, 1 otherwise.

use veriscan_analyzer::AnalysisReport;
use veriscan_config::{LintConfig, ProjectConfig};
use veriscan_diagnostics::{DiagnosticRenderer, TerminalRenderer};

use crate::{CheckArgs, GlobalArgs, ReportFormat};

/// Runs the `veriscan check` command.
///
/// Returns exit code 0 if no file has errors, 1 otherwise.
pub fn run(args: &CheckArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let config = crate::load_project_config(global)?;
    let lint_config = merge_lint_config(&config, args);

    let mut any_errors = false;
    let mut json_reports = serde_json::Map::new();
    let renderer = TerminalRenderer::new(global.color);

    for path in &args.files {
        let source = std::fs::read_to_string(path)
            .map_err(|e| format!("failed to read {path}: {e}"))?;
        let report = veriscan_analyzer::analyze_with_config(&source, &lint_config);

        any_errors |= !report.is_valid;

        match args.format {
            ReportFormat::Text => {
                render_text(&report, path, &source, &renderer, global);
            }
            ReportFormat::Json => {
                json_reports.insert(path.clone(), serde_json::to_value(&report)?);
            }
        }
    }

    if args.format == ReportFormat::Json {
        println!("{}", serde_json::to_string_pretty(&json_reports)?);
    }

    Ok(if any_errors { 1 } else { 0 })
}

/// Renders one file's report as terminal text plus a summary line.
fn render_text(
    report: &AnalysisReport,
    path: &str,
    source: &str,
    renderer: &TerminalRenderer,
    global: &GlobalArgs,
) {
    for diag in report.errors.iter().chain(report.warnings.iter()) {
        eprintln!("{}", renderer.render(diag, path, source));
    }

    if !global.quiet {
        eprintln!(
            "   {}: {} error(s), {} warning(s)",
            path,
            report.errors.len(),
            report.warnings.len()
        );
    }
}

/// Merges CLI `--allow`/`--deny` flags with the config file's lint section.
///
/// CLI flags take precedence: if a rule appears in both CLI `--allow` and
/// config `deny`, the CLI `--allow` wins.
fn merge_lint_config(config: &ProjectConfig, args: &CheckArgs) -> LintConfig {
    let mut deny: Vec<String> = config.lint.deny.clone();
    let mut allow: Vec<String> = config.lint.allow.clone();
    let warn: Vec<String> = config.lint.warn.clone();

    for rule in &args.deny {
        allow.retain(|r| r != rule);
        if !deny.contains(rule) {
            deny.push(rule.clone());
        }
    }
    for rule in &args.allow {
        deny.retain(|r| r != rule);
        if !allow.contains(rule) {
            allow.push(rule.clone());
        }
    }

    LintConfig { deny, allow, warn }
}
