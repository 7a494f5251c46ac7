use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use dotenvy::dotenv;
use tracing::error;

use param_store::{
    app::{run, setup_logging},
    configs::CliArgs,
    storage::factory::SsmStorageFactory,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    dotenv().ok();
    setup_logging();

    let args = CliArgs::parse();
    let mut out = io::stdout().lock();

    match run(args, &SsmStorageFactory, &mut out).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "Operation failed");
            let _ = writeln!(out, "Error: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}
