//! Prints a summary line for every configured sensor package.
//!
//! Run with:
//! ```
//! cargo run -p workouts
//! ```

use tracing_subscriber::EnvFilter;
use workouts::batch::process_batch;
use workouts::config::BatchConfig;

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    init_logging();

    let config = BatchConfig::from_env()?;
    tracing::debug!(packages = config.packages.len(), output = ?config.output, "Loaded config");

    let reports = process_batch(&config.packages)?;

    for report in &reports {
        println!("{}", config.output.render(report)?);
    }

    tracing::info!("Processed {} workouts", reports.len());

    Ok(())
}
