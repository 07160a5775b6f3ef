//! `veriscan info` — print a module's structural summary.

use crate::{GlobalArgs, InfoArgs, ReportFormat};

/// Runs the `veriscan info` command.
///
/// Prints the module summary when a module declaration is present; reports
/// its absence otherwise. Returns exit code 0 in both cases (absence of a
/// module is not an error), 1 only on I/O failure.
pub fn run(args: &InfoArgs, _global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let source = std::fs::read_to_string(&args.file)
        .map_err(|e| format!("failed to read {}: {e}", args.file))?;
    let report = veriscan_analyzer::analyze(&source);

    match args.format {
        ReportFormat::Json => match &report.module_info {
            Some(info) => println!("{}", serde_json::to_string_pretty(info)?),
            None => println!("null"),
        },
        ReportFormat::Text => match &report.module_info {
            Some(info) => {
                println!("module {}", info.name);
                println!("  ports:         {}", info.port_count);
                println!("  signals:       {}", info.signal_count);
                println!("  always blocks: {}", info.always_block_count);
                println!("  assigns:       {}", info.assign_count);
            }
            None => println!("no module declaration found in {}", args.file),
        },
    }

    Ok(0)
}
