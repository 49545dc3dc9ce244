//! Error types for tape compilation.

use thiserror::Error;

/// Errors that can occur during tape transformation.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CompileError {
    /// An error from the IR layer.
    #[error(transparent)]
    Ir(#[from] alsvid_ir::IrError),

    /// A pass failed with a pass-specific message.
    #[error("Pass '{pass}' failed: {message}")]
    PassFailed {
        /// Name of the failing pass.
        pass: String,
        /// Failure description.
        message: String,
    },
}

/// Result type for compilation operations.
pub type CompileResult<T> = Result<T, CompileError>;
