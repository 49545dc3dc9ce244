//! Alsvid Tape Transformation Framework
//!
//! This crate rewrites operation tapes from `alsvid-ir`. Its centerpiece is
//! the deferred-measurement pass, which converts a tape containing mid-tape
//! measurements and measurement-conditioned gates into an equivalent
//! purely-unitary tape: measurements are deferred onto ancilla wires and
//! conditioned gates become multi-controlled gates keyed on those wires.
//!
//! # Example
//!
//! ```rust
//! use alsvid_compile::passes::defer_measurements;
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
//! let rewritten = defer_measurements(&tape);
//! assert!(rewritten.iter().all(|op| op.is_gate()));
//! ```

pub mod error;
pub mod pass;
pub mod passes;

pub use error::{CompileError, CompileResult};
pub use pass::TapePass;
pub use passes::{DeferMeasurements, defer_measurements};
