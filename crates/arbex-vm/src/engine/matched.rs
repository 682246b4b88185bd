//! Match facade: a handle to one matched span, readable and editable.
//!
//! A `Match` aliases the sequence it points into (handles are `Rc`
//! clones), so edits made through it are visible to the search driver
//! and to the caller's tree. After any edit, sibling matches over the
//! same sequence have undefined spans; only the edited match keeps its
//! own span coherent.

use arbex_core::{Seq, Value};
use indexmap::IndexMap;

/// A successful match: a span of a sequence plus its named captures.
#[derive(Clone, Debug)]
pub struct Match {
    node: Seq,
    start: usize,
    end: usize,
    groups: IndexMap<String, Match>,
}

impl Match {
    pub(crate) fn new(node: Seq, start: usize, end: usize) -> Self {
        Self {
            node,
            start,
            end,
            groups: IndexMap::new(),
        }
    }

    pub(crate) fn insert_group(&mut self, name: String, group: Match) {
        self.groups.insert(name, group);
    }

    /// The sequence the match points into.
    pub fn node(&self) -> &Seq {
        &self.node
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Fresh copy of the matched span.
    pub fn content(&self) -> Vec<Value> {
        self.node.slice(self.start, self.end)
    }

    /// First element of the matched span.
    pub fn first(&self) -> Option<Value> {
        if self.start < self.end {
            self.node.get(self.start)
        } else {
            None
        }
    }

    /// The sub-match captured under `name`, if the winning thread
    /// resolved it.
    pub fn group(&self, name: &str) -> Option<&Match> {
        self.groups.get(name)
    }

    /// Captured group names, declaration order.
    pub fn group_names(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    /// Captured groups, declaration order.
    pub fn groups(&self) -> impl Iterator<Item = (&str, &Match)> {
        self.groups.iter().map(|(name, m)| (name.as_str(), m))
    }

    /// Splice `content` over the matched span, in place, and update this
    /// match's own end. Sibling matches over the same sequence are left
    /// with undefined spans.
    pub fn replace(&mut self, content: impl Into<Vec<Value>>) {
        let items = content.into();
        let inserted = items.len();
        self.node.splice(self.start, self.end, items);
        self.end = self.start + inserted;
    }

    /// Exchange the two matched spans. When both spans share a sequence,
    /// the higher interval is spliced first so the lower one's indices
    /// stay valid; the higher match's span is then shifted to follow the
    /// lower splice's length change.
    pub fn swap(&mut self, other: &mut Match) {
        let ours = self.content();
        let theirs = other.content();
        if self.node.ptr_eq(&other.node) {
            if self.start <= other.start {
                other.replace(ours);
                let before = self.len();
                self.replace(theirs);
                let delta = self.len() as isize - before as isize;
                other.start = (other.start as isize + delta) as usize;
                other.end = (other.end as isize + delta) as usize;
            } else {
                self.replace(theirs);
                let before = other.len();
                other.replace(ours);
                let delta = other.len() as isize - before as isize;
                self.start = (self.start as isize + delta) as usize;
                self.end = (self.end as isize + delta) as usize;
            }
        } else {
            self.replace(theirs);
            other.replace(ours);
        }
    }
}

impl From<&Match> for Vec<Value> {
    fn from(m: &Match) -> Self {
        m.content()
    }
}
