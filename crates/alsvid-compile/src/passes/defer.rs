//! Deferred-measurement rewriting.
//!
//! Rewrites a tape containing mid-tape measurements and measurement-
//! conditioned gates into an equivalent tape of unitaries only. Each
//! measurement wire is kept as an ancilla; each conditioned gate becomes a
//! multi-controlled gate on the relevant ancilla wires, bracketed by π
//! X-axis pulses that select the intended outcome pattern.

use std::f64::consts::PI;

use alsvid_ir::{Conditional, Op, OpKind, StandardGate, Tape, WireId};
use tracing::debug;

use crate::error::CompileResult;
use crate::pass::TapePass;

/// Rewrite `tape` into an equivalent tape with no measurement and no
/// conditional records.
///
/// Operation order is preserved: unitaries pass through unchanged,
/// measurements are dropped in place, and each conditional expands in place
/// into its controlled-gate sequence. Input well-formedness (branch key
/// width matching the control count) is the caller's contract and is not
/// checked here.
pub fn defer_measurements(tape: &Tape) -> Tape {
    let mut out = Tape::new(tape.name());

    for op in tape {
        match &op.kind {
            // The measured wire stays live as an ancilla; prior controlled
            // operations already entangle it, so the record itself vanishes.
            OpKind::Measure => {}
            OpKind::Gate(_) => out.push(op.clone()),
            OpKind::Conditional(cond) => expand_conditional(cond, &op.wires, &mut out),
        }
    }

    out
}

/// Expand one conditional record into flip pulses and controlled gates.
fn expand_conditional(cond: &Conditional, targets: &[WireId], out: &mut Tape) {
    let control = &cond.measurements;
    // Per-wire flip state, local to this record. true means the wire's
    // |1⟩ polarity currently represents the outcome 0.
    let mut flipped = vec![false; control.len()];

    debug!(
        "Expanding conditional '{}' on {} control wire(s), {} branch(es)",
        cond.gate.name(),
        control.len(),
        cond.branches.len(),
    );

    for (branch, apply) in cond.branches.iter() {
        if !apply {
            continue;
        }

        // A wire needs a flip now exactly when its represented polarity
        // disagrees with the outcome this branch selects.
        let mut flip_wires = Vec::new();
        for (i, &bit) in branch.iter().enumerate() {
            if bit && flipped[i] || !bit && !flipped[i] {
                flip_wires.push(control[i]);
                flipped[i] = !flipped[i];
            }
        }
        if !flip_wires.is_empty() {
            out.push(flip_pulse(flip_wires));
        }

        out.push(Op::controlled(
            cond.gate.clone(),
            control.iter().copied(),
            targets.iter().copied(),
        ));
    }

    // Restore any wire left flipped so later operations see the wire's true
    // outcome polarity.
    let restore: Vec<WireId> = control
        .iter()
        .zip(&flipped)
        .filter(|(_, f)| **f)
        .map(|(w, _)| *w)
        .collect();
    if !restore.is_empty() {
        out.push(flip_pulse(restore));
    }
}

/// A π rotation about X: a bit-flip pulse, broadcast over `wires`.
fn flip_pulse(wires: Vec<WireId>) -> Op {
    Op::gate(StandardGate::Rx(PI), wires)
}

/// Pass wrapper around [`defer_measurements`].
pub struct DeferMeasurements;

impl DeferMeasurements {
    /// Create a new deferred-measurement pass.
    pub fn new() -> Self {
        Self
    }
}

impl Default for DeferMeasurements {
    fn default() -> Self {
        Self::new()
    }
}

impl TapePass for DeferMeasurements {
    fn name(&self) -> &'static str {
        "DeferMeasurements"
    }

    fn run(&self, tape: &Tape) -> CompileResult<Tape> {
        Ok(defer_measurements(tape))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alsvid_ir::{BranchTable, GateKind};

    fn is_flip_pulse(op: &Op) -> bool {
        matches!(
            &op.kind,
            OpKind::Gate(g) if matches!(&g.kind, GateKind::Standard(StandardGate::Rx(theta)) if *theta == PI)
        ) && op.controls.is_empty()
    }

    #[test]
    fn test_all_false_table_emits_nothing() {
        let mut branches = BranchTable::new();
        branches.insert(vec![true], false);
        branches.insert(vec![false], false);

        let mut tape = Tape::new("t");
        tape.measure(WireId(0));
        tape.cond([WireId(0)], branches, StandardGate::X, [WireId(1)])
            .unwrap();

        let out = defer_measurements(&tape);
        assert!(out.is_empty());
    }

    #[test]
    fn test_two_true_branches_share_wire() {
        // (true,) fires without a flip, (false,) flips first, and the flip
        // is undone after the table.
        let mut branches = BranchTable::new();
        branches.insert(vec![true], true);
        branches.insert(vec![false], true);

        let mut tape = Tape::new("t");
        tape.measure(WireId(0));
        tape.cond([WireId(0)], branches, StandardGate::Z, [WireId(1)])
            .unwrap();

        let out = defer_measurements(&tape);
        let ops = out.ops();
        assert_eq!(ops.len(), 4);
        assert!(!is_flip_pulse(&ops[0]) && ops[0].controls == vec![WireId(0)]);
        assert!(is_flip_pulse(&ops[1]) && ops[1].wires == vec![WireId(0)]);
        assert!(ops[2].controls == vec![WireId(0)]);
        assert!(is_flip_pulse(&ops[3]) && ops[3].wires == vec![WireId(0)]);
    }

    #[test]
    fn test_flip_state_does_not_leak_between_records() {
        let mut first = BranchTable::new();
        first.insert(vec![false], true);
        let mut second = BranchTable::new();
        second.insert(vec![false], true);

        let mut tape = Tape::new("t");
        tape.measure(WireId(0));
        tape.cond([WireId(0)], first, StandardGate::X, [WireId(1)])
            .unwrap();
        tape.cond([WireId(0)], second, StandardGate::Z, [WireId(2)])
            .unwrap();

        let out = defer_measurements(&tape);
        // Each record flips, applies, restores: identical three-op shapes.
        assert_eq!(out.num_ops(), 6);
        let ops = out.ops();
        for base in [0, 3] {
            assert!(is_flip_pulse(&ops[base]));
            assert_eq!(ops[base + 1].controls, vec![WireId(0)]);
            assert!(is_flip_pulse(&ops[base + 2]));
        }
    }
}
