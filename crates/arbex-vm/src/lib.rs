//! Runtime VM for executing compiled arbex patterns.
//!
//! This crate provides the backtracking virtual machine that executes
//! bytecode against element trees, the pre-order search driver, and the
//! match facade through which callbacks read and edit matched spans.

pub mod engine;

// Re-export commonly used items at crate root
pub use engine::{
    CaptureLog, FuelLimits, Match, NoopTracer, PrintTracer, RuntimeError, Searcher, Tracer, Vm,
    search,
};
