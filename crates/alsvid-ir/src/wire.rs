//! Wire addressing.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a wire within a tape.
///
/// Wires carry quantum state. A wire that has been measured mid-tape is not a
/// separate kind of object: after rewriting it simply continues as an
/// ordinary ancilla wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WireId(pub u32);

impl fmt::Display for WireId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "w{}", self.0)
    }
}

impl From<u32> for WireId {
    fn from(id: u32) -> Self {
        WireId(id)
    }
}

impl From<usize> for WireId {
    fn from(id: usize) -> Self {
        WireId(u32::try_from(id).expect("WireId overflow: exceeds u32::MAX"))
    }
}
