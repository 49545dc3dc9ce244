//! Alsvid Fermion-to-Qubit Hamiltonian Construction
//!
//! This crate turns fermionic electronic-structure integrals into qubit
//! Hamiltonians expressed as weighted sums of Pauli strings. It covers the
//! whole path: integral tensors behind an oracle boundary, frozen-core /
//! active-space reduction, and the Jordan–Wigner and Bravyi–Kitaev
//! encodings of the ladder operators.
//!
//! # Core Components
//!
//! - **Pauli algebra**: [`Pauli`], [`PauliString`], [`PauliSum`] — canonical
//!   strings with an insertion-ordered accumulator
//! - **Encodings**: [`Mapping`] with the ladder expansion in
//!   [`mapping::ladder_operator`]
//! - **Data**: [`MolecularData`] tensors and the named-source loader
//! - **Reduction**: [`active::active_space`] frozen-core folding
//! - **Construction**: [`build_qubit_hamiltonian`] / [`decompose_data`]
//!
//! # Example
//!
//! ```rust
//! use alsvid_chem::{PauliString, build_qubit_hamiltonian};
//!
//! let hamiltonian =
//!     build_qubit_hamiltonian("h2_pyscf", "jordan_wigner", &[], &[0, 1]).unwrap();
//!
//! assert_eq!(hamiltonian.len(), 15);
//! let identity = hamiltonian.get(&PauliString::identity()).unwrap();
//! assert!((identity.re - -0.04207898).abs() < 1e-6);
//! ```
//!
//! Outputs are deterministic: for fixed input the term sequence and every
//! coefficient are reproducible run to run.

pub mod active;
pub mod data;
pub mod decompose;
pub mod error;
pub mod mapping;
pub mod pauli;

pub use data::MolecularData;
pub use decompose::{COEFF_CUTOFF, build_qubit_hamiltonian, decompose_data};
pub use error::{ChemError, ChemResult};
pub use mapping::{Ladder, Mapping};
pub use pauli::{Pauli, PauliString, PauliSum};
