//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Parse command-line arguments and environment variables.
//!
//! Non-responsibilities:
//! - Does not prompt for missing values (see `interactive` module).
//! - Does not run the interactive loop (see `controller` module).

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "keydeck")]
#[command(about = "Bind keystrokes to Streamer.bot actions over local HTTP", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  keydeck -a 127.0.0.1 -p 7474\n  KEYDECK_HOST=127.0.0.1 KEYDECK_PORT=7474 keydeck\n  keydeck    # prompts for host and port\n"
)]
pub struct Cli {
    /// Host name or IP address of the automation server
    #[arg(short = 'a', long = "address", env = "KEYDECK_HOST")]
    pub address: Option<String>,

    /// TCP port of the automation server's HTTP endpoint
    #[arg(short = 'p', long = "port", env = "KEYDECK_PORT")]
    pub port: Option<u16>,

    /// Request timeout in seconds (requests wait indefinitely when absent)
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,
}
