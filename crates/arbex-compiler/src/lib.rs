#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Arbex compiler: combinator algebra and bytecode emission.
//!
//! This crate provides the front half of the engine:
//! - `ast` - the expression algebra and its combinator constructors
//! - `compile` - single-pass emission to a linear instruction stream,
//!   with placeholder patching for forward branch targets
//!
//! Patterns are built from combinators (no textual syntax), so the usual
//! lexer/parser stages have no counterpart here; auto-lifting of raw
//! values into expressions is the whole front end.

pub mod ast;
pub mod compile;
mod error;

pub use ast::{
    Expr, Greed, IntoExpr, anything, backref, check, end, group, lit, many, many_ng, maybe,
    maybe_ng, more, more_ng, named, or, seq, whatever, whatever_ng,
};
pub use compile::compile;
pub use error::CompileError;
