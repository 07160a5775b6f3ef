//! `veriscan serve` — run the HTTP analysis service.

use tracing_subscriber::EnvFilter;

use crate::{GlobalArgs, ServeArgs};

/// Runs the `veriscan serve` command.
///
/// Loads the project configuration, applies CLI overrides, initializes
/// tracing, and blocks on the service until the process is terminated.
pub fn run(args: &ServeArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let config = crate::load_project_config(global)?;

    let mut server_config = config.server.clone();
    if let Some(addr) = &args.addr {
        server_config.addr = addr.clone();
    }
    if args.dev {
        server_config.dev = true;
    }

    init_tracing(global);

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(veriscan_server::serve(&server_config))?;
    Ok(0)
}

/// Initializes the tracing subscriber, honoring `--quiet`/`--verbose` and
/// the `RUST_LOG` environment variable.
fn init_tracing(global: &GlobalArgs) {
    let default_level = if global.quiet {
        "error"
    } else if global.verbose {
        "debug"
    } else {
        "info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
