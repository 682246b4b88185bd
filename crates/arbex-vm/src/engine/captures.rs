//! Capture slots with journal-based backtracking.
//!
//! Slots are dense by group id. Every write journals the previous slot
//! value, so a `Split` can rewind to its watermark at a cost proportional
//! to the writes made since the branch, not to the number of groups.

use arbex_bytecode::{GroupId, Half};
use arbex_core::Seq;

/// One capture slot: where a named group last matched.
#[derive(Clone, Debug, Default)]
struct Slot {
    node: Option<Seq>,
    start: Option<usize>,
    end: Option<usize>,
}

/// Capture state for one VM run.
#[derive(Debug, Default)]
pub struct CaptureLog {
    slots: Vec<Slot>,
    journal: Vec<(GroupId, Slot)>,
}

impl CaptureLog {
    pub fn new(group_count: usize) -> Self {
        Self {
            slots: vec![Slot::default(); group_count],
            journal: Vec::new(),
        }
    }

    /// Clear all slots for a fresh run, keeping the allocation.
    pub fn reset(&mut self) {
        for slot in &mut self.slots {
            *slot = Slot::default();
        }
        self.journal.clear();
    }

    /// Watermark for a later [`rewind`](Self::rewind).
    pub fn mark(&self) -> usize {
        self.journal.len()
    }

    /// Undo every write made since the watermark.
    pub fn rewind(&mut self, mark: usize) {
        while self.journal.len() > mark {
            let (group, previous) = self.journal.pop().expect("journal underflow");
            self.slots[group.0 as usize] = previous;
        }
    }

    /// Record the cursor into one half of a slot.
    ///
    /// A start write clears the slot's end, so a stale end from an
    /// earlier repetition can never pair with the new start.
    pub fn record(&mut self, group: GroupId, half: Half, node: &Seq, idx: usize) {
        let slot = &mut self.slots[group.0 as usize];
        self.journal.push((group, slot.clone()));
        match half {
            Half::Start => {
                slot.node = Some(node.clone());
                slot.start = Some(idx);
                slot.end = None;
            }
            Half::End => {
                slot.end = Some(idx);
            }
        }
    }

    /// The group's span, if both halves resolved on the current path.
    pub fn resolved(&self, group: GroupId) -> Option<(Seq, usize, usize)> {
        let slot = self.slots.get(group.0 as usize)?;
        match (&slot.node, slot.start, slot.end) {
            (Some(node), Some(start), Some(end)) => Some((node.clone(), start, end)),
            _ => None,
        }
    }
}
