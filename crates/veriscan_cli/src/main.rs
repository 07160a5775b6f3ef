//! Veriscan CLI — the command-line interface for the Veriscan HDL analyzer.
//!
//! Provides `veriscan check` for analyzing Verilog files, `veriscan info`
//! for printing a module's structural summary, and `veriscan serve` for
//! running the HTTP analysis service.

#![warn(missing_docs)]

mod check;
mod info;
mod serve;

use std::process;

use clap::{Parser, Subcommand, ValueEnum};

/// Veriscan — a lightweight Verilog syntax and structure analyzer.
#[derive(Parser, Debug)]
#[command(name = "veriscan", version, about = "Veriscan HDL analyzer")]
pub struct Cli {
    /// Suppress all output except errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable verbose (debug-level) output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Control colored output.
    #[arg(long, global = true, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Path to a custom `veriscan.toml` configuration file.
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Analyze Verilog files and report diagnostics.
    Check(CheckArgs),
    /// Print the structural summary of a Verilog file.
    Info(InfoArgs),
    /// Run the HTTP analysis service.
    Serve(ServeArgs),
}

/// Arguments for the `veriscan check` subcommand.
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Verilog files to analyze.
    #[arg(required = true)]
    pub files: Vec<String>,

    /// Rule names to suppress (e.g., `--allow potential-latch`).
    #[arg(long, num_args = 1..)]
    pub allow: Vec<String>,

    /// Rule names to promote to errors (e.g., `--deny combinational-loop`).
    #[arg(long, num_args = 1..)]
    pub deny: Vec<String>,

    /// Output format for diagnostics.
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,
}

/// Arguments for the `veriscan info` subcommand.
#[derive(Parser, Debug)]
pub struct InfoArgs {
    /// The Verilog file to summarize.
    pub file: String,

    /// Output format for the summary.
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,
}

/// Arguments for the `veriscan serve` subcommand.
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Socket address to bind (overrides the config file).
    #[arg(long)]
    pub addr: Option<String>,

    /// Expose internal failure details in responses.
    #[arg(long)]
    pub dev: bool,
}

/// Controls whether colored output is produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Detect from terminal capabilities.
    Auto,
    /// Always produce colored output.
    Always,
    /// Never produce colored output.
    Never,
}

/// Diagnostic output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable terminal output.
    Text,
    /// Machine-readable JSON output.
    Json,
}

/// Global settings derived from CLI flags.
pub struct GlobalArgs {
    /// Whether to suppress non-error output.
    pub quiet: bool,
    /// Whether to print verbose/debug information.
    pub verbose: bool,
    /// Whether to use colored output.
    pub color: bool,
    /// Optional path to a custom config file.
    pub config: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    let color = match cli.color {
        ColorChoice::Auto => atty_is_terminal(),
        ColorChoice::Always => true,
        ColorChoice::Never => false,
    };

    let global = GlobalArgs {
        quiet: cli.quiet,
        verbose: cli.verbose,
        color,
        config: cli.config,
    };

    let result = match cli.command {
        Command::Check(ref args) => check::run(args, &global),
        Command::Info(ref args) => info::run(args, &global),
        Command::Serve(ref args) => serve::run(args, &global),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}

/// Rough terminal detection — checks if stdout is a terminal.
fn atty_is_terminal() -> bool {
    // Use a simple heuristic: check the TERM env var.
    std::env::var("TERM").is_ok()
}

/// Loads the project configuration honoring the global `--config` flag.
///
/// With `--config`, the named file must exist and parse. Without it, the
/// current directory's `veriscan.toml` is used when present, defaults
/// otherwise.
pub fn load_project_config(
    global: &GlobalArgs,
) -> Result<veriscan_config::ProjectConfig, Box<dyn std::error::Error>> {
    match &global.config {
        Some(path) => {
            let content = std::fs::read_to_string(path)?;
            Ok(veriscan_config::load_config_from_str(&content)?)
        }
        None => {
            let cwd = std::env::current_dir()?;
            Ok(veriscan_config::load_config(&cwd)?)
        }
    }
}
