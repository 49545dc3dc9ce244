//! Built-in tape transformation passes.

pub mod defer;

pub use defer::{DeferMeasurements, defer_measurements};
