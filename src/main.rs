use std::time::Duration;

use anyhow::Context;
use clap::Parser;

use partorder::cli::{run_command, Cli};
use partorder::logging::{init_tracing, LogTarget};
use partorder::services::Services;
use partorder::session::SessionStore;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.load_config()?;

    let log_file = config.logging.resolved_file();
    let target = match cli.command {
        Some(_) => LogTarget::Stderr,
        None => LogTarget::File(&log_file),
    };
    init_tracing(&config.logging.level, target).context("Failed to initialise logging")?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    let session_path = config.session.resolved_path();
    tracing::debug!(path = %session_path.display(), "Opening session store");
    let services = {
        let _entered = runtime.enter();
        Services::new(&config, SessionStore::open(session_path))
            .context("Failed to build HTTP client")?
    };

    let result = match cli.command {
        Some(command) => runtime.block_on(run_command(command, &services, config.ui.page_size)),
        None => partorder::ui::run(&config, services, runtime.handle().clone())
            .context("Terminal UI failed"),
    };

    runtime.shutdown_timeout(Duration::from_secs(1));
    result
}
