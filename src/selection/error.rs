//! Error types for the selection workflow.

use thiserror::Error;

/// Errors raised while resolving operator input.
///
/// `InputFormat` and `LookupMiss` are recovered inside the loop. `Io` ends the
/// session and is returned to the caller.
#[derive(Debug, Error)]
pub enum SelectionError {
    /// A customer id was expected but the token is not an integer.
    #[error("'{token}' is not a number")]
    InputFormat { token: String },

    /// The token names no entry of the roster.
    #[error("{kind} '{token}' is not in the database")]
    LookupMiss { kind: &'static str, token: String },

    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
