//! Backtracking virtual machine for compiled patterns.
//!
//! The VM is a recursive interpreter. Its state is `(pc, node, idx)` plus
//! the capture log; a `Split` recurses into its primary branch and, on
//! failure, rewinds the captures and continues at the secondary target in
//! the same frame, so only the preferred branch consumes native stack.
//! Match failure is a quiet `None`; errors are resource exhaustion only.

use arbex_bytecode::{Inst, Program};
use arbex_core::{Seq, Value};

use super::captures::CaptureLog;
use super::error::RuntimeError;
use super::trace::{NoopTracer, Tracer};

/// Runtime limits for pattern execution.
///
/// Greedy repetition recurses once per element it consumes, so the
/// recursion limit bounds repetition length as well as pattern nesting.
#[derive(Clone, Copy, Debug)]
pub struct FuelLimits {
    /// Maximum total dispatched instructions per run (default: 1,000,000).
    pub(crate) exec_fuel: u32,
    /// Maximum branch/descend recursion depth (default: 1,024).
    pub(crate) recursion_limit: u32,
}

impl Default for FuelLimits {
    fn default() -> Self {
        Self {
            exec_fuel: 1_000_000,
            recursion_limit: 1024,
        }
    }
}

impl FuelLimits {
    /// Create new fuel limits with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the execution fuel limit.
    pub fn exec_fuel(mut self, fuel: u32) -> Self {
        self.exec_fuel = fuel;
        self
    }

    /// Set the recursion limit.
    pub fn recursion_limit(mut self, limit: u32) -> Self {
        self.recursion_limit = limit;
        self
    }

    pub fn get_exec_fuel(&self) -> u32 {
        self.exec_fuel
    }

    pub fn get_recursion_limit(&self) -> u32 {
        self.recursion_limit
    }
}

/// Virtual machine state for one pattern, reusable across runs.
pub struct Vm<'p> {
    program: &'p Program,
    captures: CaptureLog,
    exec_fuel: u32,
    depth: u32,
    limits: FuelLimits,
}

impl<'p> Vm<'p> {
    pub fn new(program: &'p Program) -> Self {
        Self::with_limits(program, FuelLimits::default())
    }

    pub fn with_limits(program: &'p Program, limits: FuelLimits) -> Self {
        Self {
            program,
            captures: CaptureLog::new(program.group_count()),
            exec_fuel: limits.exec_fuel,
            depth: 0,
            limits,
        }
    }

    /// Captures left by the last successful [`run`](Self::run).
    pub fn captures(&self) -> &CaptureLog {
        &self.captures
    }

    /// Try the whole program against `node` starting at `start`.
    ///
    /// Returns the final cursor index on success; `None` is quiet match
    /// failure. On success the capture log holds the winning thread's
    /// slots.
    pub fn run(&mut self, node: &Seq, start: usize) -> Result<Option<usize>, RuntimeError> {
        self.run_with(node, start, &mut NoopTracer)
    }

    /// Like [`run`](Self::run), with a tracer observing execution.
    pub fn run_with<T: Tracer>(
        &mut self,
        node: &Seq,
        start: usize,
        tracer: &mut T,
    ) -> Result<Option<usize>, RuntimeError> {
        self.captures.reset();
        self.exec_fuel = self.limits.exec_fuel;
        self.depth = 0;
        let end = self.program.code().len();
        self.exec(node, start, 0, end, tracer)
    }

    /// Execute `[pc, end)` against `node` from `idx`. Reaching `end` is
    /// success, exactly like `Halt`; sub-programs rely on this.
    fn exec<T: Tracer>(
        &mut self,
        node: &Seq,
        mut idx: usize,
        mut pc: usize,
        end: usize,
        tracer: &mut T,
    ) -> Result<Option<usize>, RuntimeError> {
        let code = self.program.code();
        loop {
            if pc >= end {
                tracer.trace_accept(idx);
                return Ok(Some(idx));
            }
            if self.exec_fuel == 0 {
                return Err(RuntimeError::ExecFuelExhausted(self.limits.exec_fuel));
            }
            self.exec_fuel -= 1;

            let inst = &code[pc];
            tracer.trace_instruction(pc, inst);

            match inst {
                Inst::Match(expected) => {
                    let hit = idx < node.len() && node.borrow()[idx] == *expected;
                    if !hit {
                        tracer.trace_fail(pc);
                        return Ok(None);
                    }
                    idx += 1;
                    pc += 1;
                }

                Inst::Any => {
                    if idx >= node.len() {
                        tracer.trace_fail(pc);
                        return Ok(None);
                    }
                    idx += 1;
                    pc += 1;
                }

                Inst::Pred(id) => {
                    // The element is cloned out so the predicate never
                    // observes a held borrow of the sequence.
                    let Some(element) = node.get(idx) else {
                        tracer.trace_fail(pc);
                        return Ok(None);
                    };
                    if !(self.program.predicate(*id))(&element) {
                        tracer.trace_fail(pc);
                        return Ok(None);
                    }
                    idx += 1;
                    pc += 1;
                }

                Inst::Descend { pc: sub_pc, len } => {
                    let Some(Value::Seq(child)) = node.get(idx) else {
                        tracer.trace_fail(pc);
                        return Ok(None);
                    };
                    let sub_end = sub_pc + len;
                    self.enter()?;
                    let result = self.exec(&child, 0, *sub_pc, sub_end, tracer)?;
                    self.depth -= 1;
                    if result.is_none() {
                        tracer.trace_fail(pc);
                        return Ok(None);
                    }
                    idx += 1;
                    pc += 1;
                }

                Inst::End => {
                    if idx != node.len() {
                        tracer.trace_fail(pc);
                        return Ok(None);
                    }
                    pc += 1;
                }

                Inst::Split { primary, secondary } => {
                    tracer.trace_split(pc, *primary, *secondary);
                    let mark = self.captures.mark();
                    self.enter()?;
                    let result = self.exec(node, idx, *primary, end, tracer)?;
                    self.depth -= 1;
                    if let Some(done) = result {
                        return Ok(Some(done));
                    }
                    self.captures.rewind(mark);
                    tracer.trace_backtrack(pc);
                    pc = *secondary;
                }

                Inst::Jump(target) => pc = *target,

                Inst::Save { group, half } => {
                    self.captures.record(*group, *half, node, idx);
                    tracer.trace_save(*group, *half, idx);
                    pc += 1;
                }

                Inst::Backref(group) => {
                    // An unresolved capture is a quiet failure: invariant
                    // violations are match failures, not errors.
                    let Some((source, from, to)) = self.captures.resolved(*group) else {
                        tracer.trace_fail(pc);
                        return Ok(None);
                    };
                    let span = to - from;
                    let hit = idx + span <= node.len() && {
                        let haystack = node.borrow();
                        let captured = source.borrow();
                        haystack[idx..idx + span] == captured[from..to]
                    };
                    if !hit {
                        tracer.trace_fail(pc);
                        return Ok(None);
                    }
                    idx += span;
                    pc += 1;
                }

                Inst::Halt => {
                    tracer.trace_accept(idx);
                    return Ok(Some(idx));
                }
            }
        }
    }

    fn enter(&mut self) -> Result<(), RuntimeError> {
        if self.depth >= self.limits.recursion_limit {
            return Err(RuntimeError::RecursionLimitExceeded(self.depth));
        }
        self.depth += 1;
        Ok(())
    }
}
