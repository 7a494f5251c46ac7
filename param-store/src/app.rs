use std::io::Write;

use clap::CommandFactory;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::{
    configs::{AppConfig, CliArgs},
    error::CliError,
    operations,
    storage::factory::RepositoryFactory,
};

/// Logs go to stderr so stdout only carries operation output.
pub fn setup_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env()) // reads RUST_LOG
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .try_init();
}

/// Validates the flags, connects through `factory` and runs the operation.
///
/// Argument errors and unknown operations are settled before the factory is
/// called.
pub async fn run<F, W>(args: CliArgs, factory: &F, out: &mut W) -> Result<(), CliError>
where
    F: RepositoryFactory + ?Sized,
    W: Write,
{
    let config = AppConfig::try_from(args)?;

    let Some(command) = config.command else {
        writeln!(out, "{}", CliArgs::command().render_help())?;
        return Ok(());
    };

    debug!(region = config.client.region.as_str(), "Connecting to parameter store");
    let repository = factory
        .create(&config.client)
        .await
        .map_err(CliError::Connection)?;

    operations::execute(command, repository.as_ref(), out).await
}
