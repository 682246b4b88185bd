//! Build errors.

/// Errors raised while compiling an expression to a program.
///
/// Match failure is never an error; it is a quiet non-result at run time.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompileError {
    /// A `backref` names a group that has not been declared earlier in
    /// emission order. Forward references are unsupported.
    #[error("reference to undeclared group `{0}`")]
    UnknownGroup(String),

    /// An alternation with no branches can never match anything.
    #[error("alternation requires at least one branch")]
    EmptyAlternation,

    #[error("too many named groups (limit {})", u16::MAX)]
    TooManyGroups,

    #[error("too many predicates (limit {})", u16::MAX)]
    TooManyPredicates,
}
