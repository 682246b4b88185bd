//! The expression algebra: pattern combinators as plain values.
//!
//! Each constructor builds an [`Expr`] node; no compilation happens here.
//! Raw values are lifted where an expression is expected: scalars become
//! literals, sequences become sub-sequence patterns. Lifting lives at
//! this layer only; the compiler and VM never see raw values.

use std::fmt;
use std::rc::Rc;

use arbex_bytecode::PredicateFn;
use arbex_core::Value;

/// Repetition preference: prefer longer (greedy) or shorter (lazy) runs.
///
/// Realized purely as `Split` operand order in the compiled program.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Greed {
    Greedy,
    Lazy,
}

/// One node of a pattern expression. Immutable after construction.
#[derive(Clone)]
pub enum Expr {
    /// Match one element structurally equal to the value.
    Literal(Value),
    /// Match one element that is a sequence matching the children
    /// exactly (sub-sequences are implicitly right-anchored).
    Subseq(Vec<Expr>),
    /// Match any single element.
    Anything,
    /// Match the end of the current sequence.
    End,
    /// First matching alternative wins, in source order.
    Or(Vec<Expr>),
    /// Children in order.
    Group(Vec<Expr>),
    /// Children in order, captured under a name. An empty body captures
    /// a single arbitrary element.
    Named(String, Vec<Expr>),
    /// Match the exact element run previously captured under the name.
    Ref(String),
    /// Match one element satisfying the predicate.
    Check(PredicateFn),
    /// Zero or one repetitions of the children.
    Maybe(Vec<Expr>, Greed),
    /// Zero or more repetitions of the children.
    Many(Vec<Expr>, Greed),
    /// One or more repetitions of the children.
    More(Vec<Expr>, Greed),
    /// Zero or more arbitrary elements.
    Whatever(Greed),
}

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Literal(v) => f.debug_tuple("Literal").field(v).finish(),
            Expr::Subseq(c) => f.debug_tuple("Subseq").field(c).finish(),
            Expr::Anything => f.write_str("Anything"),
            Expr::End => f.write_str("End"),
            Expr::Or(c) => f.debug_tuple("Or").field(c).finish(),
            Expr::Group(c) => f.debug_tuple("Group").field(c).finish(),
            Expr::Named(n, c) => f.debug_tuple("Named").field(n).field(c).finish(),
            Expr::Ref(n) => f.debug_tuple("Ref").field(n).finish(),
            Expr::Check(_) => f.write_str("Check(<predicate>)"),
            Expr::Maybe(c, g) => f.debug_tuple("Maybe").field(c).field(g).finish(),
            Expr::Many(c, g) => f.debug_tuple("Many").field(c).field(g).finish(),
            Expr::More(c, g) => f.debug_tuple("More").field(c).field(g).finish(),
            Expr::Whatever(g) => f.debug_tuple("Whatever").field(g).finish(),
        }
    }
}

/// Conversion into an expression, with auto-lifting of raw values.
pub trait IntoExpr {
    fn into_expr(self) -> Expr;
}

impl IntoExpr for Expr {
    fn into_expr(self) -> Expr {
        self
    }
}

impl IntoExpr for Value {
    fn into_expr(self) -> Expr {
        match self {
            // A raw sequence lifts to a sub-sequence pattern, its
            // elements lifted recursively.
            Value::Seq(seq) => Expr::Subseq(
                seq.to_vec().into_iter().map(IntoExpr::into_expr).collect(),
            ),
            scalar => Expr::Literal(scalar),
        }
    }
}

impl IntoExpr for arbex_core::Seq {
    fn into_expr(self) -> Expr {
        Value::Seq(self).into_expr()
    }
}

macro_rules! lift_scalar {
    ($($ty:ty),* $(,)?) => {
        $(
            impl IntoExpr for $ty {
                fn into_expr(self) -> Expr {
                    Expr::Literal(Value::from(self))
                }
            }
        )*
    };
}

lift_scalar!(bool, i32, i64, u32, f64, &str, String);

fn lift_all<I, E>(children: I) -> Vec<Expr>
where
    I: IntoIterator<Item = E>,
    E: IntoExpr,
{
    children.into_iter().map(IntoExpr::into_expr).collect()
}

/// Match one element equal to the value.
pub fn lit(value: impl Into<Value>) -> Expr {
    Expr::Literal(value.into())
}

/// Match one element that is a sequence matching `children` exactly.
pub fn seq<I, E>(children: I) -> Expr
where
    I: IntoIterator<Item = E>,
    E: IntoExpr,
{
    Expr::Subseq(lift_all(children))
}

/// Match any single element.
pub fn anything() -> Expr {
    Expr::Anything
}

/// Match the end of the current sequence. This is the only anchor; the
/// top level of a pattern is not anchored unless you place one there.
pub fn end() -> Expr {
    Expr::End
}

/// Match the first alternative that succeeds, in source order.
pub fn or<I, E>(alternatives: I) -> Expr
where
    I: IntoIterator<Item = E>,
    E: IntoExpr,
{
    Expr::Or(lift_all(alternatives))
}

/// Match the children in order.
pub fn group<I, E>(children: I) -> Expr
where
    I: IntoIterator<Item = E>,
    E: IntoExpr,
{
    Expr::Group(lift_all(children))
}

/// Match the children in order and capture the span under `name`.
///
/// Spell "capture one arbitrary element" as `named(name, [anything()])`.
pub fn named<I, E>(name: impl Into<String>, children: I) -> Expr
where
    I: IntoIterator<Item = E>,
    E: IntoExpr,
{
    Expr::Named(name.into(), lift_all(children))
}

/// Match the exact element run previously captured under `name`.
pub fn backref(name: impl Into<String>) -> Expr {
    Expr::Ref(name.into())
}

/// Match one element satisfying the predicate.
pub fn check(predicate: impl Fn(&Value) -> bool + 'static) -> Expr {
    Expr::Check(Rc::new(predicate))
}

/// Zero or one repetitions, preferring one.
pub fn maybe<I, E>(children: I) -> Expr
where
    I: IntoIterator<Item = E>,
    E: IntoExpr,
{
    Expr::Maybe(lift_all(children), Greed::Greedy)
}

/// Zero or one repetitions, preferring zero.
pub fn maybe_ng<I, E>(children: I) -> Expr
where
    I: IntoIterator<Item = E>,
    E: IntoExpr,
{
    Expr::Maybe(lift_all(children), Greed::Lazy)
}

/// Zero or more repetitions, preferring more.
pub fn many<I, E>(children: I) -> Expr
where
    I: IntoIterator<Item = E>,
    E: IntoExpr,
{
    Expr::Many(lift_all(children), Greed::Greedy)
}

/// Zero or more repetitions, preferring fewer.
pub fn many_ng<I, E>(children: I) -> Expr
where
    I: IntoIterator<Item = E>,
    E: IntoExpr,
{
    Expr::Many(lift_all(children), Greed::Lazy)
}

/// One or more repetitions, preferring more.
pub fn more<I, E>(children: I) -> Expr
where
    I: IntoIterator<Item = E>,
    E: IntoExpr,
{
    Expr::More(lift_all(children), Greed::Greedy)
}

/// One or more repetitions, preferring fewer.
pub fn more_ng<I, E>(children: I) -> Expr
where
    I: IntoIterator<Item = E>,
    E: IntoExpr,
{
    Expr::More(lift_all(children), Greed::Lazy)
}

/// Zero or more arbitrary elements, preferring more.
pub fn whatever() -> Expr {
    Expr::Whatever(Greed::Greedy)
}

/// Zero or more arbitrary elements, preferring fewer.
pub fn whatever_ng() -> Expr {
    Expr::Whatever(Greed::Lazy)
}
