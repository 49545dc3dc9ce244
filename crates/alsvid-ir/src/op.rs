//! Tape operation records.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::gate::Gate;
use crate::wire::WireId;

/// Branch table of a classically-controlled operation.
///
/// Maps a boolean outcome tuple (one bit per dependent measurement, in
/// measurement order) to an apply flag. Entries iterate in insertion order,
/// which is the order the rewriter walks them in. Keys need not cover the
/// full boolean hypercube, and key width versus control count is a caller
/// contract that is not checked here.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "Vec<(Box<[bool]>, bool)>", into = "Vec<(Box<[bool]>, bool)>")]
pub struct BranchTable {
    entries: IndexMap<Box<[bool]>, bool>,
}

impl From<Vec<(Box<[bool]>, bool)>> for BranchTable {
    fn from(entries: Vec<(Box<[bool]>, bool)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }
}

impl From<BranchTable> for Vec<(Box<[bool]>, bool)> {
    fn from(table: BranchTable) -> Self {
        table.entries.into_iter().collect()
    }
}

impl BranchTable {
    /// Create an empty branch table.
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Insert a branch entry. A re-inserted key keeps its original position.
    pub fn insert(&mut self, branch: impl Into<Box<[bool]>>, apply: bool) -> &mut Self {
        self.entries.insert(branch.into(), apply);
        self
    }

    /// Iterate over `(branch, apply)` entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&[bool], bool)> {
        self.entries.iter().map(|(k, v)| (k.as_ref(), *v))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(Box<[bool]>, bool)> for BranchTable {
    fn from_iter<I: IntoIterator<Item = (Box<[bool]>, bool)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// A classically-controlled operation awaiting rewriting.
///
/// Wraps the unitary to apply (`gate`, targeting the owning [`Op`]'s wires)
/// together with the measurement wires its branch table depends on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conditional {
    /// Dependent measurement wires, ordered; branch tuples index into this.
    pub measurements: Vec<WireId>,
    /// Outcome tuples mapped to apply flags.
    pub branches: BranchTable,
    /// The wrapped unitary.
    pub gate: Gate,
}

/// The kind of operation on a tape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum OpKind {
    /// A unitary gate operation.
    Gate(Gate),
    /// Mid-tape measurement of a single wire.
    Measure,
    /// A measurement-conditioned operation.
    Conditional(Conditional),
}

/// A complete operation with operands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Op {
    /// The kind of operation.
    pub kind: OpKind,
    /// Target wires. For a single-wire gate this may list several wires, in
    /// which case the gate is broadcast across all of them.
    pub wires: Vec<WireId>,
    /// Positive-control wires; the operation fires iff every control wire is
    /// in the |1⟩ polarity. Empty for unconditioned operations.
    pub controls: Vec<WireId>,
}

impl Op {
    /// Create a gate operation.
    pub fn gate(gate: impl Into<Gate>, wires: impl IntoIterator<Item = WireId>) -> Self {
        Self {
            kind: OpKind::Gate(gate.into()),
            wires: wires.into_iter().collect(),
            controls: vec![],
        }
    }

    /// Create a multi-controlled gate operation.
    pub fn controlled(
        gate: impl Into<Gate>,
        controls: impl IntoIterator<Item = WireId>,
        wires: impl IntoIterator<Item = WireId>,
    ) -> Self {
        Self {
            kind: OpKind::Gate(gate.into()),
            wires: wires.into_iter().collect(),
            controls: controls.into_iter().collect(),
        }
    }

    /// Create a measurement operation.
    pub fn measure(wire: WireId) -> Self {
        Self {
            kind: OpKind::Measure,
            wires: vec![wire],
            controls: vec![],
        }
    }

    /// Create a conditional operation targeting `wires`.
    pub fn conditional(cond: Conditional, wires: impl IntoIterator<Item = WireId>) -> Self {
        Self {
            kind: OpKind::Conditional(cond),
            wires: wires.into_iter().collect(),
            controls: vec![],
        }
    }

    /// Check if this is a gate operation.
    pub fn is_gate(&self) -> bool {
        matches!(self.kind, OpKind::Gate(_))
    }

    /// Check if this is a measurement.
    pub fn is_measure(&self) -> bool {
        matches!(self.kind, OpKind::Measure)
    }

    /// Check if this is a conditional operation.
    pub fn is_conditional(&self) -> bool {
        matches!(self.kind, OpKind::Conditional(_))
    }

    /// Get the gate if this is a gate operation.
    pub fn as_gate(&self) -> Option<&Gate> {
        match &self.kind {
            OpKind::Gate(g) => Some(g),
            _ => None,
        }
    }

    /// Get the name of the operation.
    pub fn name(&self) -> &str {
        match &self.kind {
            OpKind::Gate(g) => g.name(),
            OpKind::Measure => "measure",
            OpKind::Conditional(c) => c.gate.name(),
        }
    }
}
