//! Exit code constants and error mapping for the mason CLI.
//!
//! # Exit Code Table
//!
//! | Code | Constant | Description |
//! |------|----------|-------------|
//! | 0 | `SUCCESS` | Operation completed successfully |
//! | 1 | `INTERNAL` | Registry construction or phase computation failed |
//! | 2 | `CLI_ARGS` | Invalid CLI arguments or unknown lifecycle |

use mason_registry::RegistryError;

/// Type-safe exit code for `std::process::exit()`.
///
/// The numeric values are part of the public CLI contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(i32);

impl ExitCode {
    /// Success - operation completed successfully
    pub const SUCCESS: ExitCode = ExitCode(0);

    /// Internal error - registry construction or phase computation failed
    pub const INTERNAL: ExitCode = ExitCode(1);

    /// CLI arguments error - invalid arguments or unknown lifecycle id
    pub const CLI_ARGS: ExitCode = ExitCode(2);

    /// The numeric exit code value, for `std::process::exit()`.
    #[must_use]
    pub const fn as_i32(self) -> i32 {
        self.0
    }

    /// Create an `ExitCode` from a raw value. Prefer the named
    /// constants.
    #[must_use]
    pub const fn from_i32(code: i32) -> Self {
        ExitCode(code)
    }
}

impl From<i32> for ExitCode {
    fn from(code: i32) -> Self {
        ExitCode(code)
    }
}

/// Map a registry error to its CLI exit code.
///
/// Definition-level failures (duplicates, bad targets, cycles,
/// ordering mismatches) are internal errors: the definitions are wrong,
/// not the invocation.
#[must_use]
pub fn error_to_exit_code(error: &RegistryError) -> ExitCode {
    match error {
        RegistryError::DuplicatePhase { .. }
        | RegistryError::DuplicateLifecycle { .. }
        | RegistryError::OrderMismatch { .. }
        | RegistryError::LegacyLifecycle { .. }
        | RegistryError::Graph { .. } => ExitCode::INTERNAL,
    }
}
