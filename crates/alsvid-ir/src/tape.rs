//! Ordered operation tape with a builder API.

use serde::{Deserialize, Serialize};

use crate::error::{IrError, IrResult};
use crate::gate::{Gate, StandardGate};
use crate::op::{BranchTable, Conditional, Op, OpKind};
use crate::wire::WireId;

/// An ordered record of operations.
///
/// The tape is a flat sequence: operation order is execution order. This is
/// the unit the rewriting passes consume and produce.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Tape {
    /// Name of the tape.
    name: String,
    /// Operations in execution order.
    ops: Vec<Op>,
}

impl Tape {
    /// Create a new empty tape.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ops: vec![],
        }
    }

    /// Get the tape name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Append an already-built operation.
    pub fn push(&mut self, op: Op) {
        self.ops.push(op);
    }

    /// Append a gate operation.
    ///
    /// Single-wire gates broadcast over the wire list; multi-wire gates must
    /// be given exactly their arity.
    pub fn gate(
        &mut self,
        gate: impl Into<Gate>,
        wires: impl IntoIterator<Item = WireId>,
    ) -> IrResult<&mut Self> {
        let gate = gate.into();
        let wires: Vec<WireId> = wires.into_iter().collect();
        check_arity(&gate, wires.len())?;
        self.ops.push(Op::gate(gate, wires));
        Ok(self)
    }

    /// Apply Hadamard gate.
    pub fn h(&mut self, wire: WireId) -> IrResult<&mut Self> {
        self.gate(StandardGate::H, [wire])
    }

    /// Apply Pauli-X gate.
    pub fn x(&mut self, wire: WireId) -> IrResult<&mut Self> {
        self.gate(StandardGate::X, [wire])
    }

    /// Apply Pauli-Z gate.
    pub fn z(&mut self, wire: WireId) -> IrResult<&mut Self> {
        self.gate(StandardGate::Z, [wire])
    }

    /// Apply Rx rotation gate.
    pub fn rx(&mut self, theta: f64, wire: WireId) -> IrResult<&mut Self> {
        self.gate(StandardGate::Rx(theta), [wire])
    }

    /// Apply Rz rotation gate.
    pub fn rz(&mut self, theta: f64, wire: WireId) -> IrResult<&mut Self> {
        self.gate(StandardGate::Rz(theta), [wire])
    }

    /// Apply CNOT (CX) gate.
    pub fn cx(&mut self, control: WireId, target: WireId) -> IrResult<&mut Self> {
        self.gate(StandardGate::CX, [control, target])
    }

    /// Record a mid-tape measurement of `wire`.
    pub fn measure(&mut self, wire: WireId) -> &mut Self {
        self.ops.push(Op::measure(wire));
        self
    }

    /// Record a measurement-conditioned gate.
    ///
    /// `measurements` are the dependent measurement wires (branch tuples
    /// index into this list), `branches` the outcome table, and the gate is
    /// applied to `targets` for outcomes whose apply flag is set.
    pub fn cond(
        &mut self,
        measurements: impl IntoIterator<Item = WireId>,
        branches: BranchTable,
        gate: impl Into<Gate>,
        targets: impl IntoIterator<Item = WireId>,
    ) -> IrResult<&mut Self> {
        let gate = gate.into();
        let targets: Vec<WireId> = targets.into_iter().collect();
        check_arity(&gate, targets.len())?;
        self.ops.push(Op::conditional(
            Conditional {
                measurements: measurements.into_iter().collect(),
                branches,
                gate,
            },
            targets,
        ));
        Ok(self)
    }

    /// Iterate over operations in execution order.
    pub fn iter(&self) -> impl Iterator<Item = &Op> {
        self.ops.iter()
    }

    /// Get the operations as a slice.
    pub fn ops(&self) -> &[Op] {
        &self.ops
    }

    /// Consume the tape, returning its operations.
    pub fn into_ops(self) -> Vec<Op> {
        self.ops
    }

    /// Number of operations.
    pub fn num_ops(&self) -> usize {
        self.ops.len()
    }

    /// Check if the tape has no operations.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Number of wires touched, computed as the highest wire index plus one.
    pub fn num_wires(&self) -> u32 {
        self.ops
            .iter()
            .flat_map(|op| {
                let cond_wires = match &op.kind {
                    OpKind::Conditional(c) => c.measurements.as_slice(),
                    _ => &[],
                };
                op.wires
                    .iter()
                    .chain(op.controls.iter())
                    .chain(cond_wires.iter())
            })
            .map(|w| w.0 + 1)
            .max()
            .unwrap_or(0)
    }
}

/// Validate a gate's arity against the wire count it was given.
fn check_arity(gate: &Gate, got: usize) -> IrResult<()> {
    let got = u32::try_from(got).expect("wire count exceeds u32::MAX");
    if got == 0 {
        return Err(IrError::EmptyWires(gate.name().to_string()));
    }
    let expected = gate.num_wires();
    // Single-wire gates broadcast; anything else is exact.
    if expected > 1 && got != expected {
        return Err(IrError::WireCountMismatch {
            gate_name: gate.name().to_string(),
            expected,
            got,
        });
    }
    Ok(())
}

impl<'a> IntoIterator for &'a Tape {
    type Item = &'a Op;
    type IntoIter = std::slice::Iter<'a, Op>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.iter()
    }
}
