// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Pipe transaction ids into the transfer API.
//!
//! ```text
//! lotus mpool pending --cids | script-transactions --env staging
//! ```

use std::io::{self, Write};

use clap::Parser;
use tokio::io::AsyncRead;
use tracing::info;

use transfer_ops::{
    config::SCRIPT_TRANSACTIONS_AUTH_TOKEN_ENV,
    forwarder::{forward, Environment, ForwarderError, ScriptTransactionsClient},
    telemetry::{self, LogFormat},
};

#[derive(Parser, Debug)]
#[command(
    name = "script-transactions",
    version,
    about = "Forward newline-separated transaction ids from stdin to the transfer API"
)]
struct Cli {
    /// Script target environment: dev, staging or production
    #[arg(long, default_value = "dev")]
    env: String,

    /// Token sent as the `auth_token` query parameter
    #[arg(long, env = SCRIPT_TRANSACTIONS_AUTH_TOKEN_ENV, hide_env_values = true)]
    auth_token: String,
}

#[tokio::main]
async fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => std::process::exit(report_parse_error(&mut io::stdout(), &e)),
    };

    telemetry::init(LogFormat::from_env());

    let outcome = run(cli, tokio::io::stdin()).await;
    let code = report(&mut io::stdout(), &outcome).unwrap_or(1);
    std::process::exit(code);
}

async fn run<R: AsyncRead + Unpin>(cli: Cli, input: R) -> Result<Vec<String>, ForwarderError> {
    let environment: Environment = cli.env.parse()?;
    let client = ScriptTransactionsClient::for_environment(environment, cli.auth_token)?;

    let batch = forward(&client, input).await?;
    info!(
        environment = %environment,
        count = batch.transactions().len(),
        "Message IDs sent"
    );

    Ok(batch.transactions().to_vec())
}

/// Print the ids one per line, or the failure message. Returns the exit code.
fn report(
    out: &mut impl Write,
    outcome: &Result<Vec<String>, ForwarderError>,
) -> io::Result<i32> {
    match outcome {
        Ok(ids) => {
            for id in ids {
                writeln!(out, "{id}")?;
            }
            out.flush()?;
            Ok(0)
        }
        Err(e) => {
            writeln!(out, "{e}")?;
            out.flush()?;
            Ok(1)
        }
    }
}

fn report_parse_error(out: &mut impl Write, e: &clap::Error) -> i32 {
    let _ = writeln!(out, "error parsing parameters: {e}");
    1
}
