//! Qubit Hamiltonian construction.

use num_complex::Complex64;
use tracing::debug;

use crate::active::active_space;
use crate::data::{self, MolecularData};
use crate::error::ChemResult;
use crate::mapping::{Ladder, Mapping, ladder_operator};
use crate::pauli::{PauliString, PauliSum};

/// Coefficients at or below this magnitude are dropped from the final sum.
/// Physically meaningful terms in the reference systems sit well above it.
pub const COEFF_CUTOFF: f64 = 1e-8;

/// Build the qubit Hamiltonian of a named source under the chosen mapping
/// and active-space partition.
///
/// The mapping name is validated before any data access, so an unsupported
/// name surfaces as [`crate::ChemError::UnsupportedMapping`] even when the
/// source, core, or active arguments would themselves be rejected.
pub fn build_qubit_hamiltonian(
    source: &str,
    mapping: &str,
    core: &[usize],
    active: &[usize],
) -> ChemResult<PauliSum> {
    let mapping: Mapping = mapping.parse()?;
    let molecule = data::load(source)?;
    Ok(decompose_data(&molecule, mapping, core, active))
}

/// Build the qubit Hamiltonian from in-memory integral data.
///
/// The accumulation order is fixed: the scalar offset enters first as the
/// identity term, then one-body terms in lexicographic `(p, q)` order, then
/// two-body terms in lexicographic `(p, q, r, s)` order, each expanded as a
/// left-to-right product of ladder operators. Together with the ordered
/// term accumulator this makes the output term sequence reproducible.
pub fn decompose_data(
    data: &MolecularData,
    mapping: Mapping,
    core: &[usize],
    active: &[usize],
) -> PauliSum {
    let (offset, one_body, two_body) = active_space(data, core, active);
    let n = one_body.nrows();
    let n_modes = n as u32;

    debug!(
        "Building qubit Hamiltonian: {} active spin orbitals, {} mapping",
        n, mapping,
    );

    let raise = |mode: u32| ladder_operator(mapping, mode, n_modes, Ladder::Raise);
    let lower = |mode: u32| ladder_operator(mapping, mode, n_modes, Ladder::Lower);

    let mut hamiltonian = PauliSum::identity(Complex64::new(offset, 0.0));

    for p in 0..n {
        for q in 0..n {
            let coeff = one_body[[p, q]];
            if coeff == 0.0 {
                continue;
            }
            let term = raise(p as u32)
                .product(&lower(q as u32))
                .scaled(Complex64::new(coeff, 0.0));
            hamiltonian.add_sum(&term);
        }
    }

    for p in 0..n {
        for q in 0..n {
            for r in 0..n {
                for s in 0..n {
                    let coeff = two_body[[p, q, r, s]];
                    if coeff == 0.0 {
                        continue;
                    }
                    let term = raise(p as u32)
                        .product(&raise(q as u32))
                        .product(&lower(r as u32))
                        .product(&lower(s as u32))
                        .scaled(Complex64::new(0.5 * coeff, 0.0));
                    hamiltonian.add_sum(&term);
                }
            }
        }
    }

    hamiltonian.simplify(COEFF_CUTOFF);
    debug!("Qubit Hamiltonian has {} terms", hamiltonian.len());
    hamiltonian
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ChemError;
    use crate::pauli::Pauli;

    #[test]
    fn test_mapping_checked_before_data_access() {
        // An unknown source would fail with DataNotFound, but the bad
        // mapping must win: it is validated first.
        let err = build_qubit_hamiltonian("lih", "not_available_transformation", &[0], &[1, 2])
            .unwrap_err();
        assert!(matches!(err, ChemError::UnsupportedMapping(_)));
    }

    #[test]
    fn test_unknown_source_with_valid_mapping() {
        let err = build_qubit_hamiltonian("lih", "jordan_wigner", &[0], &[1, 2]).unwrap_err();
        assert!(matches!(err, ChemError::DataNotFound(_)));
    }

    #[test]
    fn test_frozen_core_single_orbital_hamiltonian() {
        // Freeze the bonding orbital of H₂; two qubits remain. Every
        // coefficient is checkable by hand from the dataset constants.
        let hamiltonian =
            build_qubit_hamiltonian("h2_pyscf", "jordan_wigner", &[0], &[1]).unwrap();

        let core_energy = 0.75596741 + 2.0 * (-1.27785298) + 0.68238952;
        let eff = -0.44829968 + 2.0 * 0.67073276 - 0.17900056;
        let pair = 0.70510564;

        let terms: Vec<(String, Complex64)> = hamiltonian
            .iter()
            .map(|(s, c)| (s.to_string(), c))
            .collect();
        assert_eq!(terms.len(), 4);

        assert_eq!(terms[0].0, "I");
        assert!((terms[0].1.re - (core_energy + eff + pair / 4.0)).abs() < 1e-8);
        assert_eq!(terms[1].0, "Z0");
        assert!((terms[1].1.re - (-eff / 2.0 - pair / 4.0)).abs() < 1e-8);
        assert_eq!(terms[2].0, "Z1");
        assert!((terms[2].1.re - (-eff / 2.0 - pair / 4.0)).abs() < 1e-8);
        assert_eq!(terms[3].0, "Z0 Z1");
        assert!((terms[3].1.re - pair / 4.0).abs() < 1e-8);
    }

    #[test]
    fn test_two_mode_number_operator_identity() {
        // A diagonal one-body problem with no interactions reduces to
        // number operators under either mapping.
        use ndarray::{Array2, Array4};
        let mut one = Array2::zeros((1, 1));
        one[[0, 0]] = -0.5;
        let two = Array4::zeros((1, 1, 1, 1));
        let molecule = MolecularData::from_spatial(0.25, &one, &two);

        for mapping in [Mapping::JordanWigner, Mapping::BravyiKitaev] {
            let hamiltonian = decompose_data(&molecule, mapping, &[], &[0]);
            // 0.25 − 0.5·(n₀ + n₁) = −0.25 + 0.25·Z₀ + 0.25·Z-support(1).
            assert_eq!(
                hamiltonian.get(&PauliString::identity()),
                Some(Complex64::new(-0.25, 0.0))
            );
            let z0 = PauliString::from_factors(vec![(0, Pauli::Z)]);
            assert_eq!(hamiltonian.get(&z0), Some(Complex64::new(0.25, 0.0)));
        }
    }
}
