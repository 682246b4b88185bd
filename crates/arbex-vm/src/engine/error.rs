//! Runtime errors for pattern execution.

/// Errors during VM execution or search.
///
/// Match failure is not represented here; the VM reports it as a quiet
/// `None`. These errors are resource exhaustion only; predicate and
/// callback panics propagate unchanged to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RuntimeError {
    #[error("execution fuel exhausted after {0} steps")]
    ExecFuelExhausted(u32),

    #[error("recursion limit exceeded (depth {0})")]
    RecursionLimitExceeded(u32),
}
