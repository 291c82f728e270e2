//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes so wrapper scripts can distinguish failure
//!   modes.
//! - Map the run error chain to an appropriate code.
//!
//! Invariants:
//! - 0 is only produced by a normal quit from the menu.

use keydeck_client::ClientError;

/// Structured exit codes for keydeck.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Normal exit via the cancel key from the menu.
    Success = 0,

    /// Unhandled or generic failure (bad configuration, prompt errors).
    GeneralError = 1,

    /// The automation server could not be reached or answered garbage
    /// during a catalog fetch.
    ConnectionError = 3,

    /// The keyboard device failed to open, read, or close.
    DeviceError = 4,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with `std::process::exit()`.
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

/// Extension trait for extracting an exit code from an error.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error.
    ///
    /// Returns `ExitCode::GeneralError` when nothing in the chain is a
    /// client or device error.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if cause.downcast_ref::<ClientError>().is_some() {
                return ExitCode::ConnectionError;
            }
            if cause.downcast_ref::<std::io::Error>().is_some() {
                return ExitCode::DeviceError;
            }
        }
        ExitCode::GeneralError
    }
}
