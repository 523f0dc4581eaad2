mod cli;

use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use profiler_core::report::{render_json, render_table, TITLE};
use profiler_core::{
    default_scenarios, DriverConfig, OpenAiAssistants, Provisioner, RunDriver, ScenarioRunner,
    ServiceConfig,
};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 1. Logging Setup (stderr, so stdout only carries progress and the table)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    info!("Function Profiler Initializing...");

    // 2. Configuration
    let service_config = ServiceConfig::from_env().context("Failed to load service configuration")?;
    let mut driver_config = DriverConfig::from_env().context("Failed to load driver configuration")?;
    if let Some(secs) = cli.max_poll_secs {
        driver_config.max_poll_duration = Duration::from_secs(secs);
    }

    // 3. Pick scenarios
    let scenarios = cli.filter().apply(default_scenarios());
    if scenarios.is_empty() {
        bail!("No scenario matches the given filters");
    }
    info!("Running {} scenarios.", scenarios.len());

    // 4. One client for the whole batch
    let service = OpenAiAssistants::new(&service_config);
    let runner = ScenarioRunner::new(
        Provisioner::new(&service, service_config.model.clone()),
        RunDriver::new(&service, driver_config),
    );

    // 5. Run, strictly one scenario at a time
    let results = runner
        .run_all(&scenarios, |scenario, _| {
            println!("\nScenario: {scenario}");
        })
        .await
        .context("Profiling batch aborted")?;

    // 6. Report
    println!("\n{TITLE}");
    println!("{}", render_table(&results));
    if cli.json {
        println!("{}", render_json(&results)?);
    }

    Ok(())
}
