use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};

use dbview::adapter::inbound::cli::command::Cli;
use dbview::adapter::inbound::cli::diagnostic::FatalError;
use dbview::adapter::inbound::cli::output;
use dbview::adapter::inbound::cli::view::{self, ViewRequest};
use dbview::infrastructure::config::settings::Config;

fn main() -> ExitCode {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    cli.color.apply();

    let config = match Config::load_or_default(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => return fail(e),
    };

    config.init_logging(cli.verbose);
    info!("dbview starting");

    let request = ViewRequest::from_cli(&cli, &config);
    match view::execute(&request) {
        Ok(outcome) => {
            info!(?outcome, "dbview stopped");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Fatal error");
            fail(e)
        }
    }
}

fn fail(e: dbview::error::Error) -> ExitCode {
    output::error(&e.to_string());
    output::diagnostic(&FatalError::from(e).into_report());
    ExitCode::FAILURE
}
