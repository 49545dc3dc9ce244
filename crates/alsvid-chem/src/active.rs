//! Frozen-core / active-space reduction.
//!
//! Core spatial orbitals are taken as always doubly occupied and folded
//! into a scalar energy offset plus a mean-field correction to the one-body
//! integrals over the active orbitals. The reduction is linear in the core
//! integrals.

use ndarray::{Array2, Array4};

use crate::data::MolecularData;

/// Map spatial orbital indices to their interleaved spin orbitals.
fn spin_orbitals(spatial: &[usize]) -> Vec<usize> {
    spatial.iter().flat_map(|&i| [2 * i, 2 * i + 1]).collect()
}

/// Fold the `core` orbitals of `data` into an active-space problem.
///
/// Returns the scalar energy offset (nuclear repulsion plus core energy)
/// together with the effective one-body and restricted two-body tensors
/// over the active spin orbitals. Active spin orbitals are relabeled
/// 0..2·len(active) in the order `active` lists them; `core` and `active`
/// are spatial orbital indices and are trusted to be disjoint.
pub fn active_space(
    data: &MolecularData,
    core: &[usize],
    active: &[usize],
) -> (f64, Array2<f64>, Array4<f64>) {
    let core_spin = spin_orbitals(core);
    let active_spin = spin_orbitals(active);
    let h1 = &data.one_body;
    let h2 = &data.two_body;

    // Core energy: one-body occupation plus the direct-minus-exchange pair
    // energy of the filled core. The i == j summand cancels itself.
    let mut offset = data.nuclear_repulsion;
    for &i in &core_spin {
        offset += h1[[i, i]];
    }
    for &i in &core_spin {
        for &j in &core_spin {
            offset += 0.5 * (h2[[i, j, j, i]] - h2[[i, j, i, j]]);
        }
    }

    // Effective one-body integrals: mean field of the core.
    let n = active_spin.len();
    let mut eff = Array2::zeros((n, n));
    for (a, &p) in active_spin.iter().enumerate() {
        for (b, &q) in active_spin.iter().enumerate() {
            let mut value = h1[[p, q]];
            for &i in &core_spin {
                value += h2[[i, p, q, i]] - h2[[i, p, i, q]];
            }
            eff[[a, b]] = value;
        }
    }

    // Two-body integrals restricted to the active window.
    let mut two = Array4::zeros((n, n, n, n));
    for (a, &p) in active_spin.iter().enumerate() {
        for (b, &q) in active_spin.iter().enumerate() {
            for (c, &r) in active_spin.iter().enumerate() {
                for (d, &s) in active_spin.iter().enumerate() {
                    two[[a, b, c, d]] = h2[[p, q, r, s]];
                }
            }
        }
    }

    (offset, eff, two)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data;

    #[test]
    fn test_empty_core_is_identity_reduction() {
        let mol = data::load("h2_pyscf").unwrap();
        let (offset, one, two) = active_space(&mol, &[], &[0, 1]);
        assert_eq!(offset, mol.nuclear_repulsion);
        assert_eq!(one, mol.one_body);
        assert_eq!(two, mol.two_body);
    }

    #[test]
    fn test_frozen_bonding_orbital() {
        let mol = data::load("h2_pyscf").unwrap();
        let (offset, one, two) = active_space(&mol, &[0], &[1]);

        // Core energy: 2ε₀ + (00|00) on top of nuclear repulsion.
        let expected_offset = 0.75596741 + 2.0 * (-1.27785298) + 0.68238952;
        assert!((offset - expected_offset).abs() < 1e-10);

        // Effective field on the active orbital: ε₁ + 2J − K.
        let expected_eff = -0.44829968 + 2.0 * 0.67073276 - 0.17900056;
        assert_eq!(one.nrows(), 2);
        assert!((one[[0, 0]] - expected_eff).abs() < 1e-10);
        assert!((one[[1, 1]] - expected_eff).abs() < 1e-10);
        assert_eq!(one[[0, 1]], 0.0);

        // Active two-body window is the antibonding-orbital block.
        assert_eq!(two[[0, 1, 1, 0]], 0.70510564);
    }
}
