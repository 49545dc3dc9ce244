//! Error types for the IR crate.

use thiserror::Error;

/// Errors that can occur when building a tape.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IrError {
    /// Gate requires a different number of wires.
    #[error("Gate '{gate_name}' requires {expected} wires, got {got}")]
    WireCountMismatch {
        /// Name of the gate.
        gate_name: String,
        /// Expected number of wires.
        expected: u32,
        /// Actual number of wires provided.
        got: u32,
    },

    /// Operation was given no wires.
    #[error("Gate '{0}' applied to an empty wire list")]
    EmptyWires(String),
}

/// Result type for IR operations.
pub type IrResult<T> = Result<T, IrError>;
