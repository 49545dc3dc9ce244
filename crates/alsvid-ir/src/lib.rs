//! Alsvid Operation-Tape Intermediate Representation
//!
//! This crate provides the core data structures for representing quantum
//! operation tapes in Alsvid. A tape is a flat, ordered record of operations:
//! unitary gates, mid-tape measurements, and measurement-conditioned gates.
//! Tape order is execution order, which the transformation passes in
//! `alsvid-compile` are required to respect.
//!
//! # Core Components
//!
//! - **Wires**: [`WireId`] for addressing quantum wires
//! - **Gates**: [`StandardGate`] for built-in gates (H, X, CX, ...) and
//!   [`CustomGate`] for user-defined unitaries
//! - **Operations**: [`Op`] records, including [`Conditional`] gates keyed on
//!   a [`BranchTable`] of measurement outcomes
//! - **Tape**: [`Tape`] ordered container with a builder API
//!
//! # Example: A Conditioned Gate
//!
//! ```rust
//! use alsvid_ir::{BranchTable, StandardGate, Tape, WireId};
//!
//! let mut branches = BranchTable::new();
//! branches.insert(vec![true], true);
//!
//! let mut tape = Tape::new("teleport_fixup");
//! tape.h(WireId(0)).unwrap();
//! tape.measure(WireId(0));
//! tape.cond([WireId(0)], branches, StandardGate::X, [WireId(1)])
//!     .unwrap();
//!
//! assert_eq!(tape.num_ops(), 3);
//! ```

pub mod error;
pub mod gate;
pub mod op;
pub mod tape;
pub mod wire;

pub use error::{IrError, IrResult};
pub use gate::{CustomGate, Gate, GateKind, StandardGate};
pub use op::{BranchTable, Conditional, Op, OpKind};
pub use tape::Tape;
pub use wire::WireId;
