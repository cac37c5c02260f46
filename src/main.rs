use std::process::ExitCode;

use tracing::error;
use winloss::{telemetry, Config};

#[tokio::main]
async fn main() -> ExitCode {
    telemetry::init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            error!("Environment misconfigured: {err}");
            return ExitCode::FAILURE;
        }
    };

    match winloss::run(&config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
