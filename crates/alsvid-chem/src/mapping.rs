//! Fermion-to-qubit encodings.
//!
//! Both encodings expand a fermionic ladder operator into a two-term
//! [`PauliSum`]: an X-like component with coefficient 1/2 followed by a
//! Y-like component with coefficient ∓i/2 (minus for raising, plus for
//! lowering). The Jordan–Wigner form strings Z parity over every lower
//! mode; the Bravyi–Kitaev form reads its X/Z supports off a binary
//! (Fenwick) tree over the mode indices.

use num_complex::Complex64;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ChemError;
use crate::pauli::{Pauli, PauliString, PauliSum};

/// The fermion-to-qubit transformation to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mapping {
    /// Jordan–Wigner: one qubit per mode, contiguous Z parity strings.
    JordanWigner,
    /// Bravyi–Kitaev: binary-tree parity storage, logarithmic-weight strings.
    BravyiKitaev,
}

impl Mapping {
    /// Get the canonical name of this mapping.
    pub fn as_str(self) -> &'static str {
        match self {
            Mapping::JordanWigner => "jordan_wigner",
            Mapping::BravyiKitaev => "bravyi_kitaev",
        }
    }
}

impl fmt::Display for Mapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mapping {
    type Err = ChemError;

    /// Parse a mapping name. The match is case-sensitive: exactly
    /// `"jordan_wigner"` or `"bravyi_kitaev"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "jordan_wigner" => Ok(Mapping::JordanWigner),
            "bravyi_kitaev" => Ok(Mapping::BravyiKitaev),
            other => Err(ChemError::UnsupportedMapping(other.to_string())),
        }
    }
}

/// Ladder operator direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ladder {
    /// Creation operator a†.
    Raise,
    /// Annihilation operator a.
    Lower,
}

/// Expand a ladder operator on `mode` into its qubit representation.
pub fn ladder_operator(mapping: Mapping, mode: u32, n_modes: u32, action: Ladder) -> PauliSum {
    match mapping {
        Mapping::JordanWigner => jordan_wigner_ladder(mode, action),
        Mapping::BravyiKitaev => bravyi_kitaev_ladder(mode, n_modes, action),
    }
}

/// The Y-component coefficient: −i/2 for raising, +i/2 for lowering.
fn y_coeff(action: Ladder) -> Complex64 {
    match action {
        Ladder::Raise => Complex64::new(0.0, -0.5),
        Ladder::Lower => Complex64::new(0.0, 0.5),
    }
}

fn jordan_wigner_ladder(mode: u32, action: Ladder) -> PauliSum {
    let parity: Vec<(u32, Pauli)> = (0..mode).map(|q| (q, Pauli::Z)).collect();

    let mut x_factors = parity.clone();
    x_factors.push((mode, Pauli::X));
    let mut y_factors = parity;
    y_factors.push((mode, Pauli::Y));

    let mut sum = PauliSum::new();
    sum.add_term(
        PauliString::from_factors(x_factors),
        Complex64::new(0.5, 0.0),
    );
    sum.add_term(PauliString::from_factors(y_factors), y_coeff(action));
    sum
}

fn bravyi_kitaev_ladder(mode: u32, n_modes: u32, action: Ladder) -> PauliSum {
    let update = update_set(mode, n_modes);
    let occupation = occupation_set(mode);
    let parity = parity_set(mode);

    // X component: X over the update set (which contains the mode), Z over
    // the parity set.
    let mut x_factors: Vec<(u32, Pauli)> = update.iter().map(|&q| (q, Pauli::X)).collect();
    x_factors.extend(parity.iter().map(|&q| (q, Pauli::Z)));

    // Y component: Y on the mode, X over the remaining update set, Z over
    // the symmetric difference of parity and occupation sets.
    let mut y_factors: Vec<(u32, Pauli)> = vec![(mode, Pauli::Y)];
    y_factors.extend(
        update
            .iter()
            .filter(|&&q| q != mode)
            .map(|&q| (q, Pauli::X)),
    );
    y_factors.extend(
        parity
            .symmetric_difference(&occupation)
            .filter(|&&q| q != mode)
            .map(|&q| (q, Pauli::Z)),
    );

    let mut sum = PauliSum::new();
    sum.add_term(
        PauliString::from_factors(x_factors),
        Complex64::new(0.5, 0.0),
    );
    sum.add_term(PauliString::from_factors(y_factors), y_coeff(action));
    sum
}

/// Qubits whose stored partial sums change when `mode` changes occupation:
/// the mode itself plus its Fenwick-tree ancestors.
fn update_set(mode: u32, n_modes: u32) -> FxHashSet<u32> {
    let mut indices = FxHashSet::default();
    let mut index = mode + 1;
    while index <= n_modes {
        indices.insert(index - 1);
        index += index & index.wrapping_neg();
    }
    indices
}

/// Qubits that together store the occupation of `mode`.
fn occupation_set(mode: u32) -> FxHashSet<u32> {
    let mut indices = FxHashSet::default();
    let index = mode + 1;
    indices.insert(index - 1);
    let parent = index & (index - 1);
    let mut index = index - 1;
    while index > parent {
        indices.insert(index - 1);
        index &= index - 1;
    }
    indices
}

/// Qubits that store the parity of modes below `mode`.
fn parity_set(mode: u32) -> FxHashSet<u32> {
    let mut indices = FxHashSet::default();
    let mut index = mode;
    while index > 0 {
        indices.insert(index - 1);
        index &= index - 1;
    }
    indices
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(indices: &[u32]) -> FxHashSet<u32> {
        indices.iter().copied().collect()
    }

    #[test]
    fn test_mapping_parse_is_case_sensitive() {
        assert_eq!("jordan_wigner".parse::<Mapping>().unwrap(), Mapping::JordanWigner);
        assert_eq!("bravyi_kitaev".parse::<Mapping>().unwrap(), Mapping::BravyiKitaev);
        assert!(matches!(
            "jordan_WIGNER".parse::<Mapping>(),
            Err(ChemError::UnsupportedMapping(_))
        ));
        assert!(matches!(
            "not_available_transformation".parse::<Mapping>(),
            Err(ChemError::UnsupportedMapping(_))
        ));
    }

    #[test]
    fn test_mapping_display_roundtrip() {
        for mapping in [Mapping::JordanWigner, Mapping::BravyiKitaev] {
            assert_eq!(mapping.to_string().parse::<Mapping>().unwrap(), mapping);
        }
    }

    #[test]
    fn test_fenwick_sets_four_modes() {
        assert_eq!(update_set(0, 4), set(&[0, 1, 3]));
        assert_eq!(update_set(1, 4), set(&[1, 3]));
        assert_eq!(update_set(2, 4), set(&[2, 3]));
        assert_eq!(update_set(3, 4), set(&[3]));

        assert_eq!(occupation_set(0), set(&[0]));
        assert_eq!(occupation_set(1), set(&[0, 1]));
        assert_eq!(occupation_set(2), set(&[2]));
        assert_eq!(occupation_set(3), set(&[1, 2, 3]));

        assert_eq!(parity_set(0), set(&[]));
        assert_eq!(parity_set(1), set(&[0]));
        assert_eq!(parity_set(2), set(&[1]));
        assert_eq!(parity_set(3), set(&[1, 2]));
    }

    #[test]
    fn test_jordan_wigner_ladder_shape() {
        let raise = ladder_operator(Mapping::JordanWigner, 2, 4, Ladder::Raise);
        let terms: Vec<(String, Complex64)> = raise
            .iter()
            .map(|(s, c)| (s.to_string(), c))
            .collect();
        assert_eq!(terms.len(), 2);
        assert_eq!(terms[0].0, "Z0 Z1 X2");
        assert_eq!(terms[0].1, Complex64::new(0.5, 0.0));
        assert_eq!(terms[1].0, "Z0 Z1 Y2");
        assert_eq!(terms[1].1, Complex64::new(0.0, -0.5));

        let lower = ladder_operator(Mapping::JordanWigner, 2, 4, Ladder::Lower);
        let (_, y) = lower.iter().nth(1).unwrap();
        assert_eq!(y, Complex64::new(0.0, 0.5));
    }

    #[test]
    fn test_bravyi_kitaev_ladder_shape() {
        // Mode 1 of 4: update {1, 3}, parity {0}, occupation {0, 1}.
        let raise = ladder_operator(Mapping::BravyiKitaev, 1, 4, Ladder::Raise);
        let terms: Vec<String> = raise.strings().map(ToString::to_string).collect();
        assert_eq!(terms, vec!["Z0 X1 X3", "Y1 X3"]);

        // Mode 3 of 4: update {3}, parity {1, 2}, occupation {1, 2, 3}.
        let raise = ladder_operator(Mapping::BravyiKitaev, 3, 4, Ladder::Raise);
        let terms: Vec<String> = raise.strings().map(ToString::to_string).collect();
        assert_eq!(terms, vec!["Z1 Z2 X3", "Y3"]);
    }

    #[test]
    fn test_number_operator_matches_occupation() {
        // a†a under either encoding is (I − Z-support)/2.
        for mapping in [Mapping::JordanWigner, Mapping::BravyiKitaev] {
            let n1 = ladder_operator(mapping, 1, 4, Ladder::Raise)
                .product(&ladder_operator(mapping, 1, 4, Ladder::Lower));
            let identity = n1.get(&PauliString::identity()).unwrap();
            assert!((identity - Complex64::new(0.5, 0.0)).norm() < 1e-12);

            let z_support = match mapping {
                Mapping::JordanWigner => PauliString::from_factors(vec![(1, Pauli::Z)]),
                Mapping::BravyiKitaev => {
                    PauliString::from_factors(vec![(0, Pauli::Z), (1, Pauli::Z)])
                }
            };
            let z = n1.get(&z_support).unwrap();
            assert!((z - Complex64::new(-0.5, 0.0)).norm() < 1e-12);
        }
    }
}
