use std::io::Read;
use std::process::ExitCode;

use anyhow::Context;
use collab_auth_backend::{
    check::{check_payload, RequestKind},
    config::Config,
    validation::RequestValidator,
};
use serde_json::json;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const USAGE: &str = "usage: check_request <kind> < payload.json";

const EXIT_REJECTED: u8 = 1;
const EXIT_SETUP_FAILED: u8 = 2;

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "collab_auth_backend=info,check_request=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::from(EXIT_SETUP_FAILED)
        }
    }
}

/// Usage, configuration and I/O failures surface as `Err`; a rejected payload does not.
fn run() -> anyhow::Result<ExitCode> {
    let kind = match std::env::args().nth(1) {
        Some(arg) => match arg.parse::<RequestKind>() {
            Ok(kind) => kind,
            Err(err) => anyhow::bail!("{}\n{}", err, USAGE),
        },
        None => anyhow::bail!("{}", USAGE),
    };

    let config = Config::load().context("failed to load configuration")?;
    let validator = RequestValidator::from_config(&config);
    tracing::info!(
        min_password_length = validator.password_policy().min_length(),
        "Loaded configuration from environment/.env"
    );

    let mut payload = Vec::new();
    std::io::stdin()
        .read_to_end(&mut payload)
        .context("failed to read payload from stdin")?;

    match check_payload(kind, &payload, &validator) {
        Ok(()) => {
            println!("{}", json!({ "valid": true }));
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            tracing::info!(kind = %kind, error = %err, "Payload rejected");
            println!("{}", serde_json::to_string(&err.to_error_response())?);
            Ok(ExitCode::from(EXIT_REJECTED))
        }
    }
}
