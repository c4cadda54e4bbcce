use fitness_tracker_cli::{DEFAULT_PACKAGES, config::LogConfig, run};

fn main() -> anyhow::Result<()> {
    // Configure logging from `FITNESS_TRACKER_LOG_LEVEL` (or `RUST_LOG`, default `info`).
    let log = LogConfig::from_env();
    tracing_subscriber::fmt()
        .compact()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .with_env_filter(log.env_filter())
        .init();
    tracing::info!("fitness_tracker: log filter: {}", log.filter);

    let stdout = std::io::stdout();
    run(DEFAULT_PACKAGES, &mut stdout.lock())
}
