//! Pauli-string algebra.
//!
//! A [`PauliString`] is a tensor product of single-qubit Pauli operators,
//! stored as an index-sorted factor list; the empty string is the identity.
//! A [`PauliSum`] is a weighted sum of strings whose terms iterate in first
//! insertion order, so repeated builds of the same operator produce the same
//! term sequence.

use indexmap::IndexMap;
use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single-qubit Pauli operator label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Pauli {
    /// Pauli-X.
    X,
    /// Pauli-Y.
    Y,
    /// Pauli-Z.
    Z,
}

impl Pauli {
    /// Get the single-letter label.
    pub fn label(self) -> char {
        match self {
            Pauli::X => 'X',
            Pauli::Y => 'Y',
            Pauli::Z => 'Z',
        }
    }

    /// Product of two Paulis on the same qubit.
    ///
    /// Equal labels square to the identity (`None`); distinct labels merge
    /// into the third with a ±i phase per the cyclic commutation rule.
    fn product(self, other: Pauli) -> (Complex64, Option<Pauli>) {
        use Pauli::{X, Y, Z};
        let plus_i = Complex64::new(0.0, 1.0);
        let minus_i = Complex64::new(0.0, -1.0);
        match (self, other) {
            (X, X) | (Y, Y) | (Z, Z) => (Complex64::new(1.0, 0.0), None),
            (X, Y) => (plus_i, Some(Z)),
            (Y, Z) => (plus_i, Some(X)),
            (Z, X) => (plus_i, Some(Y)),
            (Y, X) => (minus_i, Some(Z)),
            (Z, Y) => (minus_i, Some(X)),
            (X, Z) => (minus_i, Some(Y)),
        }
    }
}

/// A tensor product of single-qubit Paulis in canonical form.
///
/// Factors are sorted by strictly increasing qubit index; the empty factor
/// list denotes the identity operator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PauliString {
    factors: Vec<(u32, Pauli)>,
}

impl PauliString {
    /// The identity string.
    pub fn identity() -> Self {
        Self { factors: vec![] }
    }

    /// Build a string from factors on distinct qubits, sorting by index.
    pub fn from_factors(mut factors: Vec<(u32, Pauli)>) -> Self {
        factors.sort_unstable_by_key(|&(q, _)| q);
        debug_assert!(
            factors.windows(2).all(|w| w[0].0 < w[1].0),
            "duplicate qubit index in Pauli string"
        );
        Self { factors }
    }

    /// Check if this is the identity.
    pub fn is_identity(&self) -> bool {
        self.factors.is_empty()
    }

    /// Number of non-identity factors.
    pub fn len(&self) -> usize {
        self.factors.len()
    }

    /// Check if the factor list is empty (identity).
    pub fn is_empty(&self) -> bool {
        self.factors.is_empty()
    }

    /// Get the factors as a slice.
    pub fn factors(&self) -> &[(u32, Pauli)] {
        &self.factors
    }

    /// Multiply two strings, returning the accumulated phase and the
    /// canonical product string.
    ///
    /// Matching indices multiply through the single-qubit Pauli algebra:
    /// equal labels cancel, distinct labels merge with a ±i phase.
    pub fn product(&self, other: &PauliString) -> (Complex64, PauliString) {
        let mut phase = Complex64::new(1.0, 0.0);
        let mut factors = Vec::with_capacity(self.factors.len() + other.factors.len());

        let mut lhs = self.factors.iter().peekable();
        let mut rhs = other.factors.iter().peekable();
        loop {
            match (lhs.peek(), rhs.peek()) {
                (Some(&&(ql, pl)), Some(&&(qr, pr))) => {
                    if ql < qr {
                        factors.push((ql, pl));
                        lhs.next();
                    } else if qr < ql {
                        factors.push((qr, pr));
                        rhs.next();
                    } else {
                        let (p, merged) = pl.product(pr);
                        phase *= p;
                        if let Some(label) = merged {
                            factors.push((ql, label));
                        }
                        lhs.next();
                        rhs.next();
                    }
                }
                (Some(&&(ql, pl)), None) => {
                    factors.push((ql, pl));
                    lhs.next();
                }
                (None, Some(&&(qr, pr))) => {
                    factors.push((qr, pr));
                    rhs.next();
                }
                (None, None) => break,
            }
        }

        (phase, PauliString { factors })
    }
}

impl fmt::Display for PauliString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.factors.is_empty() {
            return write!(f, "I");
        }
        for (i, (q, p)) in self.factors.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}{}", p.label(), q)?;
        }
        Ok(())
    }
}

/// A weighted sum of Pauli strings.
///
/// Terms accumulate: adding to an existing string sums coefficients and
/// keeps the string's original position. Iteration follows first insertion
/// order. Serialized as a sequence of `(string, coefficient)` pairs so term
/// order survives round trips.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(
    from = "Vec<(PauliString, Complex64)>",
    into = "Vec<(PauliString, Complex64)>"
)]
pub struct PauliSum {
    terms: IndexMap<PauliString, Complex64>,
}

impl From<Vec<(PauliString, Complex64)>> for PauliSum {
    fn from(terms: Vec<(PauliString, Complex64)>) -> Self {
        let mut sum = PauliSum::new();
        for (string, coeff) in terms {
            sum.add_term(string, coeff);
        }
        sum
    }
}

impl From<PauliSum> for Vec<(PauliString, Complex64)> {
    fn from(sum: PauliSum) -> Self {
        sum.terms.into_iter().collect()
    }
}

impl PauliSum {
    /// Create an empty sum.
    pub fn new() -> Self {
        Self {
            terms: IndexMap::new(),
        }
    }

    /// Create a sum holding only a weighted identity term.
    pub fn identity(coeff: Complex64) -> Self {
        let mut sum = Self::new();
        sum.add_term(PauliString::identity(), coeff);
        sum
    }

    /// Add a weighted string, accumulating into an existing term if present.
    pub fn add_term(&mut self, string: PauliString, coeff: Complex64) {
        *self
            .terms
            .entry(string)
            .or_insert_with(|| Complex64::new(0.0, 0.0)) += coeff;
    }

    /// Add every term of `other` into this sum, in `other`'s term order.
    pub fn add_sum(&mut self, other: &PauliSum) {
        for (string, coeff) in &other.terms {
            self.add_term(string.clone(), *coeff);
        }
    }

    /// Multiply two sums, distributing term by term.
    ///
    /// Product terms are generated left-term-major, so the result's term
    /// order is determined by the operand term orders.
    pub fn product(&self, other: &PauliSum) -> PauliSum {
        let mut result = PauliSum::new();
        for (ls, lc) in &self.terms {
            for (rs, rc) in &other.terms {
                let (phase, string) = ls.product(rs);
                result.add_term(string, lc * rc * phase);
            }
        }
        result
    }

    /// Scale every coefficient by `factor`.
    #[must_use]
    pub fn scaled(mut self, factor: Complex64) -> Self {
        for coeff in self.terms.values_mut() {
            *coeff *= factor;
        }
        self
    }

    /// Drop terms whose coefficient magnitude is at most `tol`, preserving
    /// the order of the remaining terms.
    pub fn simplify(&mut self, tol: f64) {
        self.terms.retain(|_, coeff| coeff.norm() > tol);
    }

    /// Look up the coefficient of a string.
    pub fn get(&self, string: &PauliString) -> Option<Complex64> {
        self.terms.get(string).copied()
    }

    /// Iterate over `(string, coefficient)` terms in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&PauliString, Complex64)> {
        self.terms.iter().map(|(s, c)| (s, *c))
    }

    /// Iterate over the strings in insertion order.
    pub fn strings(&self) -> impl Iterator<Item = &PauliString> {
        self.terms.keys()
    }

    /// Number of terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Check if the sum has no terms.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}
