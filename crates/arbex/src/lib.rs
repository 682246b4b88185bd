//! Arbex: regular expressions for heterogeneous trees.
//!
//! Trees are nested ordered sequences ([`Seq`]) whose elements are
//! scalars or further sequences. A pattern is built from a small
//! combinator algebra, compiled to a linear bytecode program, and
//! executed by a backtracking VM against every subtree of the input.
//! Matches arrive through a callback as [`Match`] handles that support
//! in-place edits ([`Match::replace`], [`Match::swap`]) which the search
//! driver survives.
//!
//! # Example
//!
//! ```
//! use arbex::{Value, compile, lit, named, search, tree, whatever};
//!
//! let haystack = tree![1, 2, 3, 4, 2, 4];
//! let program = compile([lit(2), named("middle", [whatever()]), lit(4)]).unwrap();
//!
//! let mut spans = Vec::new();
//! search(&haystack, &program, |m| {
//!     spans.push((m.start(), m.end()));
//!     assert_eq!(m.group("middle").unwrap().first(), Some(Value::Int(3)));
//!     None
//! })
//! .unwrap();
//! assert_eq!(spans, vec![(1, 6)]);
//! ```
//!
//! The pattern surface: [`lit`], [`seq`], [`anything`], [`end`], [`or`],
//! [`group`], [`named`], [`backref`], [`check`], the repetitions
//! [`maybe`], [`many`], [`more`], [`whatever`] and their non-greedy
//! twins (`*_ng`). Raw scalars and `tree!` sequences lift to literal and
//! sub-sequence patterns wherever a child expression is expected.

pub use arbex_bytecode::{GroupId, Half, Inst, PredId, Program, dump};
pub use arbex_compiler::{
    CompileError, Expr, Greed, IntoExpr, anything, backref, check, compile, end, group, lit, many,
    many_ng, maybe, maybe_ng, more, more_ng, named, or, seq, whatever, whatever_ng,
};
pub use arbex_core::{FromJsonError, Seq, Value, tree};
pub use arbex_vm::{
    FuelLimits, Match, NoopTracer, PrintTracer, RuntimeError, Searcher, Tracer, Vm, search,
};
