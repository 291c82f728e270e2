//! Interactive prompts for missing connection parameters.
//!
//! Responsibilities:
//! - Fill whatever the flag/environment merge left unset by asking on
//!   stdin/stdout before the interactive loop starts.
//!
//! Does NOT handle:
//! - Flag or environment parsing (see `args` and `keydeck-config`).
//! - Raw-mode key input; prompting happens before the key source is
//!   acquired, in ordinary line-buffered mode.

use std::io::{BufRead, Write};

use anyhow::{Result, bail};
use keydeck_config::{ConnectionConfig, PartialConnection};

/// Complete a partial connection by prompting for the missing pieces.
///
/// Empty input re-prompts; a port that does not parse re-prompts with a
/// short complaint. Fails only when the input stream ends.
pub fn complete_connection<R: BufRead, W: Write>(
    partial: PartialConnection,
    input: &mut R,
    output: &mut W,
) -> Result<ConnectionConfig> {
    let host = match partial.host {
        Some(host) => host,
        None => prompt_line(input, output, "Enter automation server host: ")?,
    };

    let port = match partial.port {
        Some(port) => port,
        None => loop {
            let raw = prompt_line(input, output, "Enter automation server port: ")?;
            match raw.parse::<u16>() {
                Ok(port) => break port,
                Err(_) => writeln!(output, "Port is not a number")?,
            }
        },
    };

    Ok(ConnectionConfig { host, port })
}

/// Prompt until a non-empty line arrives.
fn prompt_line<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> Result<String> {
    loop {
        write!(output, "{prompt}")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            bail!("stdin closed while prompting for connection parameters");
        }
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            return Ok(trimmed.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn complete(partial: PartialConnection, input: &str) -> Result<ConnectionConfig> {
        let mut reader = Cursor::new(input.as_bytes().to_vec());
        let mut output = Vec::new();
        complete_connection(partial, &mut reader, &mut output)
    }

    #[test]
    fn passes_through_when_nothing_is_missing() {
        let partial = PartialConnection {
            host: Some("127.0.0.1".to_string()),
            port: Some(7474),
        };
        let config = complete(partial, "").unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 7474);
    }

    #[test]
    fn prompts_for_missing_host_and_port() {
        let config = complete(PartialConnection::default(), "bot.local\n8080\n").unwrap();
        assert_eq!(config.host, "bot.local");
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn reprompts_until_port_parses() {
        let partial = PartialConnection {
            host: Some("127.0.0.1".to_string()),
            port: None,
        };
        let config = complete(partial, "staging\n\n7474\n").unwrap();
        assert_eq!(config.port, 7474);
    }

    #[test]
    fn fails_when_stdin_closes() {
        let result = complete(PartialConnection::default(), "");
        assert!(result.is_err());
    }
}
