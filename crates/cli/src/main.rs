//! keydeck - bind keystrokes to remote automation actions.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Resolve the automation server's host and port, prompting for whatever
//!   is missing.
//! - Run the interactive binding/macro loop against the server.
//!
//! Does NOT handle:
//! - The HTTP exchange itself (see `crates/client`).
//! - Persisting bindings; everything lives in process memory.
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing to allow `.env` to provide
//!   clap env defaults.

mod args;
mod bindings;
mod controller;
mod error;
mod interactive;
mod keys;
mod term;

use std::io;
use std::time::Duration;

use args::Cli;
use clap::Parser;
use controller::Controller;
use error::{ExitCode, ExitCodeExt};
use keydeck_client::ActionClientBuilder;
use keydeck_config::ConfigLoader;
use keys::TerminalKeys;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() {
    // Load .env BEFORE CLI parsing so clap env defaults can read .env values
    if let Err(e) = ConfigLoader::new().load_dotenv() {
        eprintln!("Failed to load environment: {e}");
        std::process::exit(ExitCode::GeneralError.as_i32());
    }

    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(io::stderr))
        .init();

    let partial = match ConfigLoader::new()
        .with_host(cli.address.clone())
        .with_port(cli.port)
        .load()
    {
        Ok(partial) => partial,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(ExitCode::GeneralError.as_i32());
        }
    };

    let config = {
        let mut input = io::stdin().lock();
        let mut output = io::stdout();
        match interactive::complete_connection(partial, &mut input, &mut output) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(ExitCode::GeneralError.as_i32());
            }
        }
    };

    let mut builder = ActionClientBuilder::new().base_url(config.base_url());
    if let Some(secs) = cli.timeout {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    let client = match builder.build() {
        Ok(client) => client,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(ExitCode::GeneralError.as_i32());
        }
    };

    tracing::info!(server = %config, "talking to automation server");

    let mut controller = Controller::new(client, TerminalKeys::new(), io::stdin().lock());
    if let Err(e) = controller.run().await {
        eprintln!("Error: {e:#}");
        std::process::exit(e.exit_code().as_i32());
    }
    std::process::exit(ExitCode::Success.as_i32());
}
