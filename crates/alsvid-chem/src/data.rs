//! Electronic-structure integral data.
//!
//! Integral tensors are the oracle boundary of this crate: callers either
//! name a built-in dataset or hand over a [`MolecularData`] they obtained
//! elsewhere. Tensors are stored over spin orbitals in physicist convention,
//!
//! H = E_nuc + Σ_pq h_pq a†_p a_q + 1/2 Σ_pqrs h_pqrs a†_p a†_q a_r a_s,
//!
//! with spin orbitals interleaved as (0↑, 0↓, 1↑, 1↓, ...).

use ndarray::{Array2, Array4};

use crate::error::{ChemError, ChemResult};

/// Fermionic integral tensors for one molecular system.
#[derive(Debug, Clone, PartialEq)]
pub struct MolecularData {
    /// Nuclear repulsion energy (Hartree).
    pub nuclear_repulsion: f64,
    /// One-body spin-orbital integrals h_pq.
    pub one_body: Array2<f64>,
    /// Two-body spin-orbital integrals h_pqrs, physicist convention.
    pub two_body: Array4<f64>,
}

impl MolecularData {
    /// Number of spin orbitals.
    pub fn num_spin_orbitals(&self) -> usize {
        self.one_body.nrows()
    }

    /// Build spin-orbital tensors from spatial-orbital integrals.
    ///
    /// `one_body` holds spatial h_PQ and `two_body` the chemist-notation
    /// electron repulsion integrals (PQ|RS). Spin is conserved at each
    /// vertex, which is what the Kronecker deltas below encode.
    pub fn from_spatial(
        nuclear_repulsion: f64,
        one_body: &Array2<f64>,
        two_body: &Array4<f64>,
    ) -> Self {
        let n = one_body.nrows();
        let m = 2 * n;

        let mut h1 = Array2::zeros((m, m));
        for p in 0..m {
            for q in 0..m {
                if p % 2 == q % 2 {
                    h1[[p, q]] = one_body[[p / 2, q / 2]];
                }
            }
        }

        let mut h2 = Array4::zeros((m, m, m, m));
        for p in 0..m {
            for q in 0..m {
                for r in 0..m {
                    for s in 0..m {
                        if p % 2 == s % 2 && q % 2 == r % 2 {
                            h2[[p, q, r, s]] = two_body[[p / 2, s / 2, q / 2, r / 2]];
                        }
                    }
                }
            }
        }

        Self {
            nuclear_repulsion,
            one_body: h1,
            two_body: h2,
        }
    }
}

/// Load the integral data for a named source.
///
/// Unknown names fail with [`ChemError::DataNotFound`]; nothing is guessed.
pub fn load(name: &str) -> ChemResult<MolecularData> {
    match name {
        "h2_pyscf" => Ok(h2_sto3g()),
        _ => Err(ChemError::DataNotFound(name.to_string())),
    }
}

/// Minimal-basis H₂ (STO-3G, PySCF reference geometry).
///
/// Spatial integrals in chemist notation over the bonding/antibonding
/// orbital pair.
fn h2_sto3g() -> MolecularData {
    let nuclear_repulsion = 0.75596741;

    let mut one = Array2::zeros((2, 2));
    one[[0, 0]] = -1.27785298;
    one[[1, 1]] = -0.44829968;

    let mut two = Array4::zeros((2, 2, 2, 2));
    // Same-orbital and Coulomb repulsion.
    two[[0, 0, 0, 0]] = 0.68238952;
    two[[1, 1, 1, 1]] = 0.70510564;
    two[[0, 0, 1, 1]] = 0.67073276;
    two[[1, 1, 0, 0]] = 0.67073276;
    // Exchange / double-excitation block.
    for idx in [[0, 1, 0, 1], [0, 1, 1, 0], [1, 0, 0, 1], [1, 0, 1, 0]] {
        two[idx] = 0.17900056;
    }

    MolecularData::from_spatial(nuclear_repulsion, &one, &two)
}
