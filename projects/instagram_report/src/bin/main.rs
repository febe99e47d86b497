use std::process::ExitCode;

use chrono::Local;
use projects_instagram_report::config::{ConfigError, ReportConfig};
use projects_instagram_report::report::index::{run, ReportError};
use thiserror::Error;
use utils_trace::tracing_init;

#[derive(Debug, Error)]
pub enum MainError {
    #[error("TracingInit")]
    TracingInit {
        #[source]
        source: utils_trace::TracingInitError,
    },
    #[error("Config")]
    Config {
        #[source]
        source: ConfigError,
    },
    #[error("Report")]
    Report {
        #[source]
        source: ReportError,
    },
}

async fn try_main() -> Result<(), MainError> {
    // A missing .env is fine; real variables take precedence either way.
    let _ = dotenvy::dotenv();

    tracing_init("info").map_err(|source| MainError::TracingInit { source })?;

    let config = ReportConfig::from_env().map_err(|source| MainError::Config { source })?;

    let today = Local::now().date_naive();
    let stdout = std::io::stdout();

    run(&config, today, &mut stdout.lock())
        .await
        .map_err(|source| MainError::Report { source })
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    match try_main().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", anyhow::Error::new(err));
            ExitCode::FAILURE
        }
    }
}
