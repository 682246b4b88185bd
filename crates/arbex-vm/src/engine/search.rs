//! Pre-order search driver.
//!
//! Walks the tree depth-first; at every sequence it tries the pattern at
//! each index, then recurses into whatever elements are sequences at
//! that moment: after a callback edit, the current (post-edit) contents
//! decide both the remaining scan and the descent.

use arbex_bytecode::Program;
use arbex_core::{Seq, Value};

use super::error::RuntimeError;
use super::matched::Match;
use super::vm::{FuelLimits, Vm};

/// Search every subtree of `root` with default limits.
///
/// The callback may edit the tree through the match object and steer the
/// scan by returning the next index to try in the current sequence;
/// `None` continues after the match.
pub fn search<F>(root: &Seq, program: &Program, on_match: F) -> Result<(), RuntimeError>
where
    F: FnMut(&mut Match) -> Option<usize>,
{
    Searcher::new(program).search(root, on_match)
}

/// Configurable search over a tree.
pub struct Searcher<'p> {
    program: &'p Program,
    limits: FuelLimits,
}

impl<'p> Searcher<'p> {
    pub fn new(program: &'p Program) -> Self {
        Self {
            program,
            limits: FuelLimits::default(),
        }
    }

    /// Set the runtime limits for every match attempt.
    pub fn limits(mut self, limits: FuelLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Run the search. See [`search`].
    pub fn search<F>(&self, root: &Seq, mut on_match: F) -> Result<(), RuntimeError>
    where
        F: FnMut(&mut Match) -> Option<usize>,
    {
        let mut vm = Vm::with_limits(self.program, self.limits);
        self.search_node(&mut vm, root, &mut on_match)
    }

    fn search_node<F>(
        &self,
        vm: &mut Vm<'p>,
        node: &Seq,
        on_match: &mut F,
    ) -> Result<(), RuntimeError>
    where
        F: FnMut(&mut Match) -> Option<usize>,
    {
        let mut i = 0;
        // The length is re-read every iteration: the callback may grow
        // or shrink the sequence under the scan.
        while i <= node.len() {
            let Some(matched_end) = vm.run(node, i)? else {
                i += 1;
                continue;
            };
            let mut m = self.materialize(vm, node, i, matched_end);
            i = match on_match(&mut m) {
                Some(next) => next,
                // A zero-width match advances by one so the scan cannot
                // stall on the same empty match forever.
                None if matched_end == i => i + 1,
                None => matched_end,
            };
        }

        let mut child = 0;
        while child < node.len() {
            if let Some(Value::Seq(sub)) = node.get(child) {
                self.search_node(vm, &sub, on_match)?;
            }
            child += 1;
        }
        Ok(())
    }

    /// Build the user-facing match: the whole-match span plus one
    /// sub-match per group the winning thread resolved.
    fn materialize(&self, vm: &Vm<'p>, node: &Seq, start: usize, end: usize) -> Match {
        let mut m = Match::new(node.clone(), start, end);
        for (name, group_id) in self.program.groups() {
            if let Some((group_node, group_start, group_end)) = vm.captures().resolved(group_id) {
                m.insert_group(
                    name.to_string(),
                    Match::new(group_node, group_start, group_end),
                );
            }
        }
        m
    }
}
