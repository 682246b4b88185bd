//! Tracing infrastructure for debugging VM execution.
//!
//! The tracer is a zero-cost abstraction: with [`NoopTracer`] every hook
//! is an `#[inline(always)]` empty function and the compiler eliminates
//! the calls and their arguments. [`PrintTracer`] collects a formatted
//! line-per-event trace into a `String`.

use std::fmt::Write as _;

use arbex_bytecode::{GroupId, Half, Inst};

/// Hooks called at specific points during execution:
/// - `trace_instruction` - before dispatching an instruction
/// - `trace_split` - when a choice point is entered
/// - `trace_backtrack` - when a split's first branch failed
/// - `trace_fail` - when the current thread dies
/// - `trace_save` - after a capture slot write
/// - `trace_accept` - when a thread reaches the end of its program
pub trait Tracer {
    fn trace_instruction(&mut self, pc: usize, inst: &Inst);
    fn trace_split(&mut self, pc: usize, primary: usize, secondary: usize);
    fn trace_backtrack(&mut self, pc: usize);
    fn trace_fail(&mut self, pc: usize);
    fn trace_save(&mut self, group: GroupId, half: Half, idx: usize);
    fn trace_accept(&mut self, idx: usize);
}

/// No-op tracer that gets optimized away completely.
pub struct NoopTracer;

impl Tracer for NoopTracer {
    #[inline(always)]
    fn trace_instruction(&mut self, _pc: usize, _inst: &Inst) {}

    #[inline(always)]
    fn trace_split(&mut self, _pc: usize, _primary: usize, _secondary: usize) {}

    #[inline(always)]
    fn trace_backtrack(&mut self, _pc: usize) {}

    #[inline(always)]
    fn trace_fail(&mut self, _pc: usize) {}

    #[inline(always)]
    fn trace_save(&mut self, _group: GroupId, _half: Half, _idx: usize) {}

    #[inline(always)]
    fn trace_accept(&mut self, _idx: usize) {}
}

/// Tracer that accumulates a human-readable execution trace.
#[derive(Default)]
pub struct PrintTracer {
    out: String,
}

impl PrintTracer {
    pub fn new() -> Self {
        Self::default()
    }

    /// The collected trace so far.
    pub fn output(&self) -> &str {
        &self.out
    }
}

impl Tracer for PrintTracer {
    fn trace_instruction(&mut self, pc: usize, inst: &Inst) {
        let _ = writeln!(self.out, "{pc:>4}  {inst:?}");
    }

    fn trace_split(&mut self, pc: usize, primary: usize, secondary: usize) {
        let _ = writeln!(self.out, "      split @{pc}: try @{primary}, alt @{secondary}");
    }

    fn trace_backtrack(&mut self, pc: usize) {
        let _ = writeln!(self.out, "      backtrack to @{pc}");
    }

    fn trace_fail(&mut self, pc: usize) {
        let _ = writeln!(self.out, "      fail @{pc}");
    }

    fn trace_save(&mut self, group: GroupId, half: Half, idx: usize) {
        let half = match half {
            Half::Start => "start",
            Half::End => "end",
        };
        let _ = writeln!(self.out, "      save g{}.{half} = {idx}", group.0);
    }

    fn trace_accept(&mut self, idx: usize) {
        let _ = writeln!(self.out, "      accept at {idx}");
    }
}
