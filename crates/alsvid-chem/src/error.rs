//! Error types for Hamiltonian construction.

use thiserror::Error;

/// Errors that can occur while building a qubit Hamiltonian.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChemError {
    /// The requested fermion-to-qubit transformation is not recognized.
    #[error("'{0}' transformation is not available; use 'jordan_wigner' or 'bravyi_kitaev'")]
    UnsupportedMapping(String),

    /// No integral data is available for the named source.
    #[error("no electronic structure data available for source '{0}'")]
    DataNotFound(String),
}

/// Result type for Hamiltonian construction.
pub type ChemResult<T> = Result<T, ChemError>;
