//! Compiled program representation.
//!
//! A [`Program`] is a flat instruction array plus two side tables: the
//! group-name table (declaration-ordered, name ↔ dense id) and the
//! predicate table (user closures indexed by [`PredId`]). Programs are
//! immutable after compilation.

use std::fmt;
use std::rc::Rc;

use arbex_core::Value;
use indexmap::IndexMap;

/// A user-supplied element predicate, stored in the program's side table.
pub type PredicateFn = Rc<dyn Fn(&Value) -> bool>;

/// Dense id of a named capture group.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GroupId(pub u16);

/// Index into the program's predicate table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PredId(pub u16);

/// Which half of a capture slot a `Save` writes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Half {
    Start,
    End,
}

/// One VM instruction. Branch operands are absolute PCs into the
/// program's instruction array.
#[derive(Clone, Debug)]
pub enum Inst {
    /// Consume one element structurally equal to the literal.
    Match(Value),
    /// Consume one element, any.
    Any,
    /// Consume one element if the predicate holds for it.
    Pred(PredId),
    /// The current element must be a sequence; run the inline sub-program
    /// `[pc, pc + len)` against it from index 0, then consume it.
    Descend { pc: usize, len: usize },
    /// Succeed iff the cursor is at the end of the current sequence.
    End,
    /// Try `primary` first, `secondary` on failure. Operand order is the
    /// only encoding of greedy vs non-greedy.
    Split { primary: usize, secondary: usize },
    /// Unconditional branch.
    Jump(usize),
    /// Record the cursor into one half of a capture slot.
    Save { group: GroupId, half: Half },
    /// Consume the exact element run previously captured by the group.
    Backref(GroupId),
    /// The whole program succeeds.
    Halt,
}

/// A compiled pattern, ready for VM execution.
pub struct Program {
    code: Vec<Inst>,
    groups: IndexMap<String, GroupId>,
    predicates: Vec<PredicateFn>,
}

impl Program {
    /// Bundle compiler output into a finished program.
    pub fn new(
        code: Vec<Inst>,
        groups: IndexMap<String, GroupId>,
        predicates: Vec<PredicateFn>,
    ) -> Self {
        Self {
            code,
            groups,
            predicates,
        }
    }

    pub fn code(&self) -> &[Inst] {
        &self.code
    }

    /// Number of distinct capture groups.
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Named groups in declaration order.
    pub fn groups(&self) -> impl Iterator<Item = (&str, GroupId)> {
        self.groups.iter().map(|(name, id)| (name.as_str(), *id))
    }

    pub fn group_id(&self, name: &str) -> Option<GroupId> {
        self.groups.get(name).copied()
    }

    pub fn group_name(&self, id: GroupId) -> Option<&str> {
        self.groups
            .iter()
            .find(|(_, gid)| **gid == id)
            .map(|(name, _)| name.as_str())
    }

    pub fn predicate(&self, id: PredId) -> &PredicateFn {
        &self.predicates[id.0 as usize]
    }

    pub fn predicate_count(&self) -> usize {
        self.predicates.len()
    }
}

impl fmt::Debug for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Program")
            .field("code", &self.code)
            .field("groups", &self.groups)
            .field("predicates", &self.predicates.len())
            .finish()
    }
}
