//! Pass trait for tape transformations.

use alsvid_ir::Tape;

use crate::error::CompileResult;

/// A transformation pass over an operation tape.
///
/// Passes consume a tape by reference and produce a rewritten tape; the
/// input is never mutated in place. Callers are free to chain passes.
pub trait TapePass: Send + Sync {
    /// Get the name of this pass.
    fn name(&self) -> &str;

    /// Run the pass on the given tape, producing a rewritten tape.
    fn run(&self, tape: &Tape) -> CompileResult<Tape>;
}
