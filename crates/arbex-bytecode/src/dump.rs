//! Human-readable program dump for debugging and tests.
//!
//! One line per instruction, PC-prefixed. Group operands are annotated
//! with their declared names so dumps stay readable without the source
//! expression at hand.

use std::fmt::Write as _;

use crate::program::{Half, Inst, Program};

/// Render a whole program, side tables first.
pub fn dump(program: &Program) -> String {
    let mut out = String::new();

    if program.group_count() > 0 {
        out.push_str("; groups:");
        for (name, id) in program.groups() {
            let _ = write!(out, " {name}=g{}", id.0);
        }
        out.push('\n');
    }
    if program.predicate_count() > 0 {
        let _ = writeln!(out, "; predicates: {}", program.predicate_count());
    }

    let w = pc_width(program.code().len());
    for (pc, inst) in program.code().iter().enumerate() {
        let _ = writeln!(out, "{pc:0w$}  {}", format_inst(inst, program, w));
    }
    out
}

/// Render one instruction the way [`dump`] does.
pub fn format_inst(inst: &Inst, program: &Program, w: usize) -> String {
    match inst {
        Inst::Match(v) => format!("match {v}"),
        Inst::Any => "any".to_string(),
        Inst::Pred(id) => format!("pred p{}", id.0),
        Inst::Descend { pc, len } => format!("descend @{pc:0w$} len={len}"),
        Inst::End => "end".to_string(),
        Inst::Split { primary, secondary } => {
            format!("split @{primary:0w$} @{secondary:0w$}")
        }
        Inst::Jump(target) => format!("jump @{target:0w$}"),
        Inst::Save { group, half } => {
            let half = match half {
                Half::Start => "start",
                Half::End => "end",
            };
            format!("save g{}.{half}{}", group.0, group_note(program, *group))
        }
        Inst::Backref(group) => {
            format!("backref g{}{}", group.0, group_note(program, *group))
        }
        Inst::Halt => "halt".to_string(),
    }
}

fn group_note(program: &Program, group: crate::program::GroupId) -> String {
    match program.group_name(group) {
        Some(name) => format!("  ; {name}"),
        None => String::new(),
    }
}

/// Width for zero-padded PCs: enough digits for the last PC, minimum two.
fn pc_width(count: usize) -> usize {
    let max_pc = count.saturating_sub(1);
    let mut digits = 1;
    let mut n = max_pc;
    while n >= 10 {
        digits += 1;
        n /= 10;
    }
    digits.max(2)
}
