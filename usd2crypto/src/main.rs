use std::process::ExitCode;
use std::time::Duration;

use serde::Deserialize;
use tracing::debug;

use crate::error::Error;
use crate::service::rate::coinbase;

mod app;
mod error;
mod service;

const APP_NAME: &str = "usd2crypto";

#[derive(Deserialize, Debug)]
struct Config {
    rates_url: Option<String>,
    timeout_secs: Option<u64>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{APP_NAME}=info").into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    match start(&args).await {
        Ok(out) => {
            println!("{out}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            debug!("run failed: {err:?}");
            eprintln!("error: {err}");
            if err.is_usage() {
                eprintln!("{}", app::usage());
            }
            ExitCode::FAILURE
        }
    }
}

/// Validates the amount before the env config is read or any request is made.
async fn start(args: &[String]) -> Result<String, Error> {
    let amount = app::parse_amount(args.first().map(String::as_str))?;

    let cfg = envy::prefixed("USD2CRYPTO_").from_env::<Config>()?;

    let provider = coinbase::Provider::new(
        cfg.rates_url,
        cfg.timeout_secs.map(Duration::from_secs),
    )?;

    app::allocate(amount, &provider).await
}
