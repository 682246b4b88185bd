//! Single-pass emission from the expression algebra to bytecode.
//!
//! Instructions are appended to one growing buffer; forward branch
//! targets are reserved as placeholders and patched once the code they
//! jump over has been emitted. Sub-sequence patterns compile to inline
//! sub-programs jumped over by the main flow and entered via `Descend`.

use std::collections::HashMap;
use std::rc::Rc;

use arbex_bytecode::{GroupId, Half, Inst, PredId, PredicateFn, Program};
use indexmap::IndexMap;

use crate::ast::{Expr, Greed, IntoExpr};
use crate::error::CompileError;

/// Compile a pattern. The arguments form an implicit group; the top
/// level is not right-anchored unless the pattern ends with `end()`.
pub fn compile<I, E>(exprs: I) -> Result<Program, CompileError>
where
    I: IntoIterator<Item = E>,
    E: IntoExpr,
{
    let exprs: Vec<Expr> = exprs.into_iter().map(IntoExpr::into_expr).collect();
    let mut compiler = Compiler::new();
    compiler.emit_all(&exprs)?;
    Ok(compiler.finish())
}

/// Compiler state for Thompson construction.
struct Compiler {
    code: Vec<Inst>,
    groups: IndexMap<String, GroupId>,
    predicates: Vec<PredicateFn>,
    /// Predicate ids keyed by closure address, for identity interning.
    predicate_ids: HashMap<*const (), PredId>,
}

impl Compiler {
    fn new() -> Self {
        Self {
            code: Vec::new(),
            groups: IndexMap::new(),
            predicates: Vec::new(),
            predicate_ids: HashMap::new(),
        }
    }

    fn finish(mut self) -> Program {
        self.code.push(Inst::Halt);
        Program::new(self.code, self.groups, self.predicates)
    }

    fn emit_all(&mut self, exprs: &[Expr]) -> Result<(), CompileError> {
        for expr in exprs {
            self.emit(expr)?;
        }
        Ok(())
    }

    fn emit(&mut self, expr: &Expr) -> Result<(), CompileError> {
        match expr {
            Expr::Literal(value) => {
                self.code.push(Inst::Match(value.clone()));
                Ok(())
            }
            Expr::Anything => {
                self.code.push(Inst::Any);
                Ok(())
            }
            Expr::End => {
                self.code.push(Inst::End);
                Ok(())
            }
            Expr::Check(pred) => {
                let id = self.pred_id(pred)?;
                self.code.push(Inst::Pred(id));
                Ok(())
            }
            Expr::Subseq(children) => self.emit_subseq(children),
            Expr::Group(children) => self.emit_all(children),
            Expr::Named(name, children) => self.emit_named(name, children),
            Expr::Ref(name) => {
                let group = self
                    .groups
                    .get(name.as_str())
                    .copied()
                    .ok_or_else(|| CompileError::UnknownGroup(name.clone()))?;
                self.code.push(Inst::Backref(group));
                Ok(())
            }
            Expr::Or(alternatives) => self.emit_or(alternatives),
            Expr::Maybe(children, greed) => self.emit_maybe(children, *greed),
            Expr::Many(children, greed) => self.emit_many(children, *greed),
            Expr::More(children, greed) => {
                // Body once, then the zero-or-more loop.
                self.emit_all(children)?;
                self.emit_many(children, *greed)
            }
            Expr::Whatever(greed) => self.emit_whatever(*greed),
        }
    }

    /// Sub-programs live inline, jumped over by the main flow:
    /// `jump @after; <children>; end; after: descend @sub len`.
    fn emit_subseq(&mut self, children: &[Expr]) -> Result<(), CompileError> {
        let over = self.reserve_jump();
        let sub_start = self.code.len();
        self.emit_all(children)?;
        // Sub-sequences are implicitly right-anchored; elide the anchor
        // only when the user already wrote a trailing `end()`.
        if !matches!(children.last(), Some(Expr::End)) {
            self.code.push(Inst::End);
        }
        let sub_len = self.code.len() - sub_start;
        let after = self.code.len();
        self.patch_jump(over, after);
        self.code.push(Inst::Descend {
            pc: sub_start,
            len: sub_len,
        });
        Ok(())
    }

    fn emit_named(&mut self, name: &str, children: &[Expr]) -> Result<(), CompileError> {
        let group = self.group_id(name)?;
        self.code.push(Inst::Save {
            group,
            half: Half::Start,
        });
        if children.is_empty() {
            // `named(name, [])` means "capture one arbitrary element".
            self.code.push(Inst::Any);
        } else {
            self.emit_all(children)?;
        }
        self.code.push(Inst::Save {
            group,
            half: Half::End,
        });
        Ok(())
    }

    /// `split a-section, next; a; jump end; split b-section, next; …; z`
    /// with left-to-right preference matching source order.
    fn emit_or(&mut self, alternatives: &[Expr]) -> Result<(), CompileError> {
        if alternatives.is_empty() {
            return Err(CompileError::EmptyAlternation);
        }
        let last = alternatives.len() - 1;
        let mut end_jumps = Vec::new();
        for (i, alternative) in alternatives.iter().enumerate() {
            if i < last {
                let split = self.reserve_split();
                self.emit(alternative)?;
                end_jumps.push(self.reserve_jump());
                let next = self.code.len();
                self.patch_split(split, split + 1, next);
            } else {
                self.emit(alternative)?;
            }
        }
        let end = self.code.len();
        for jump in end_jumps {
            self.patch_jump(jump, end);
        }
        Ok(())
    }

    fn emit_maybe(&mut self, children: &[Expr], greed: Greed) -> Result<(), CompileError> {
        let split = self.reserve_split();
        self.emit_all(children)?;
        let skip = self.code.len();
        let body = split + 1;
        match greed {
            Greed::Greedy => self.patch_split(split, body, skip),
            Greed::Lazy => self.patch_split(split, skip, body),
        }
        Ok(())
    }

    fn emit_many(&mut self, children: &[Expr], greed: Greed) -> Result<(), CompileError> {
        let split = self.reserve_split();
        self.emit_all(children)?;
        self.code.push(Inst::Jump(split));
        let exit = self.code.len();
        let body = split + 1;
        match greed {
            Greed::Greedy => self.patch_split(split, body, exit),
            Greed::Lazy => self.patch_split(split, exit, body),
        }
        Ok(())
    }

    /// `whatever` is `many([anything()])` emitted directly.
    fn emit_whatever(&mut self, greed: Greed) -> Result<(), CompileError> {
        let split = self.reserve_split();
        self.code.push(Inst::Any);
        self.code.push(Inst::Jump(split));
        let exit = self.code.len();
        let body = split + 1;
        match greed {
            Greed::Greedy => self.patch_split(split, body, exit),
            Greed::Lazy => self.patch_split(split, exit, body),
        }
        Ok(())
    }

    /// Allocate a group id, or reuse it when the name was declared
    /// before: a name is bound to exactly one id for the whole program.
    fn group_id(&mut self, name: &str) -> Result<GroupId, CompileError> {
        if let Some(id) = self.groups.get(name) {
            return Ok(*id);
        }
        let next = self.groups.len();
        if next > u16::MAX as usize {
            return Err(CompileError::TooManyGroups);
        }
        let id = GroupId(next as u16);
        self.groups.insert(name.to_string(), id);
        Ok(id)
    }

    /// Intern a predicate; the same closure handle gets the same id.
    fn pred_id(&mut self, pred: &PredicateFn) -> Result<PredId, CompileError> {
        let key = Rc::as_ptr(pred) as *const ();
        if let Some(id) = self.predicate_ids.get(&key) {
            return Ok(*id);
        }
        let next = self.predicates.len();
        if next > u16::MAX as usize {
            return Err(CompileError::TooManyPredicates);
        }
        let id = PredId(next as u16);
        self.predicates.push(pred.clone());
        self.predicate_ids.insert(key, id);
        Ok(id)
    }

    fn reserve_jump(&mut self) -> usize {
        let pc = self.code.len();
        self.code.push(Inst::Jump(usize::MAX));
        pc
    }

    fn reserve_split(&mut self) -> usize {
        let pc = self.code.len();
        self.code.push(Inst::Split {
            primary: usize::MAX,
            secondary: usize::MAX,
        });
        pc
    }

    fn patch_jump(&mut self, pc: usize, target: usize) {
        self.code[pc] = Inst::Jump(target);
    }

    fn patch_split(&mut self, pc: usize, primary: usize, secondary: usize) {
        self.code[pc] = Inst::Split { primary, secondary };
    }
}
