//! Engine-level properties exercised through the public surface.

use arbex::{
    Program, Seq, Value, anything, backref, check, compile, lit, more, named, search, seq, tree,
    whatever, whatever_ng,
};

fn spans(haystack: &Seq, program: &Program) -> Vec<(usize, usize)> {
    let mut out = Vec::new();
    search(haystack, program, |m| {
        out.push((m.start(), m.end()));
        None
    })
    .unwrap();
    out
}

#[test]
fn pure_searches_are_deterministic() {
    let haystack = tree![1, 2, "a", 3, 4, "a", "a", "a", "b", "a", "a", "c"];
    let program = compile([more(["a"])]).unwrap();
    let first = spans(&haystack, &program);
    let second = spans(&haystack, &program);
    assert_eq!(first, second);
    assert!(!first.is_empty());
}

#[test]
fn lazy_twin_starts_no_earlier_and_ends_no_later() {
    let haystack = tree![1, 2, 3, 4, 2, 4, 2, 1, "a", "b", 4, 5];
    let greedy = compile([lit(2), whatever(), lit(4)]).unwrap();
    let lazy = compile([lit(2), whatever_ng(), lit(4)]).unwrap();

    let greedy_spans = spans(&haystack, &greedy);
    let lazy_spans = spans(&haystack, &lazy);

    assert!(lazy_spans[0].0 >= greedy_spans[0].0);
    // Same starting index: the lazy end cannot exceed the greedy end.
    assert_eq!(lazy_spans[0].0, greedy_spans[0].0);
    assert!(lazy_spans[0].1 <= greedy_spans[0].1);
}

#[test]
fn group_spans_are_coherent() {
    let haystack = tree![1, 2, 3, 3, 3, 2, 2, 1];
    let program = compile([named("a", [anything()]), more([backref("a")])]).unwrap();
    search(&haystack, &program, |m| {
        let a = m.group("a").unwrap();
        assert!(a.start() <= a.end());
        assert!(a.end() <= a.node().len());
        assert_eq!(a.content(), a.node().slice(a.start(), a.end()));
        None
    })
    .unwrap();
}

#[test]
fn backreferences_repeat_the_captured_run() {
    let haystack = tree![5, 5, 5, 9];
    let program = compile([named("a", [anything()]), more([backref("a")])]).unwrap();
    let mut checked = false;
    search(&haystack, &program, |m| {
        let a = m.group("a").unwrap().content();
        let content = m.content();
        // The whole match is the captured run repeated.
        assert_eq!(content.len() % a.len(), 0);
        for chunk in content.chunks(a.len()) {
            assert_eq!(chunk, a.as_slice());
        }
        checked = true;
        None
    })
    .unwrap();
    assert!(checked);
}

#[test]
fn subsequences_demand_exact_length() {
    let haystack = tree![["a", "b", "c"], ["a", "b", "c", "d"], ["a", "b"]];
    let program = compile([seq([lit("a"), lit("b"), lit("c")])]).unwrap();
    assert_eq!(spans(&haystack, &program), vec![(0, 1)]);
}

#[test]
fn replace_leaves_the_inserted_content_in_place() {
    let haystack = tree![1, 2, 3, 4, 5];
    let program = compile([lit(2), lit(3)]).unwrap();
    let inserted = tree!["x", "y", "z"].to_vec();
    search(&haystack, &program, |m| {
        m.replace(inserted.clone());
        assert_eq!(
            m.node().slice(m.start(), m.start() + inserted.len()),
            inserted
        );
        None
    })
    .unwrap();
    assert_eq!(haystack, tree![1, "x", "y", "z", 4, 5]);
}

#[test]
fn rewrite_at_same_position_terminates() {
    let haystack = tree!["a", "a"];
    let program = compile([lit("a")]).unwrap();
    let mut rewrites = 0;
    search(&haystack, &program, |m| {
        m.replace(tree!["b"]);
        rewrites += 1;
        // Re-run at the same position; the fresh "b" no longer matches,
        // so the scan moves on.
        Some(m.start())
    })
    .unwrap();
    assert_eq!(rewrites, 2);
    assert_eq!(haystack, tree!["b", "b"]);
}

#[test]
fn predicates_compose_with_structure() {
    let haystack = Value::from_json(r#"[["x", 1], ["y", "nope"], ["z", 4]]"#).unwrap();
    let Value::Seq(haystack) = haystack else {
        panic!("expected a sequence");
    };
    let program = compile([seq([
        anything(),
        check(|v| matches!(v, Value::Int(_))),
    ])])
    .unwrap();
    assert_eq!(spans(&haystack, &program), vec![(0, 1), (2, 3)]);
}
