//! bizledger binary entry point.

use clap::Parser;
use std::process::ExitCode;

use bizledger_cli::cli::Cli;
use bizledger_cli::config::AppConfig;
use bizledger_cli::{init_tracing, run};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = AppConfig::from_env().with_database(cli.database.clone());

    init_tracing(&config.log_filter);

    match run(cli, config).await {
        Ok(output) => {
            if output.ends_with('\n') {
                print!("{}", output);
            } else {
                println!("{}", output);
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(code = ?err.code, "{}", err.message);
            eprintln!("error: {}", err.message);
            ExitCode::FAILURE
        }
    }
}
