//! End-to-end scenarios: literal haystacks, full pipeline.

use arbex::{
    Match, Program, Seq, Value, anything, backref, compile, end, lit, more, named, or, search,
    seq, tree, whatever, whatever_ng,
};

fn collect(haystack: &Seq, program: &Program) -> Vec<(usize, usize, Vec<Value>)> {
    let mut out = Vec::new();
    search(haystack, program, |m| {
        out.push((m.start(), m.end(), m.content()));
        None
    })
    .unwrap();
    out
}

#[test]
fn plain_sequence() {
    let haystack = tree![1, 2, 3, 4, 5, 6, 7, 8, 9];
    let program = compile([lit(3), lit(4), lit(5)]).unwrap();
    assert_eq!(
        collect(&haystack, &program),
        vec![(2, 5, tree![3, 4, 5].to_vec())]
    );
}

#[test]
fn greedy_more() {
    let haystack = tree![1, 2, "a", 3, 4, "a", "a", "a", "b", "a", "a", "c"];
    let program = compile([more(["a"])]).unwrap();
    assert_eq!(
        collect(&haystack, &program),
        vec![
            (2, 3, tree!["a"].to_vec()),
            (5, 8, tree!["a", "a", "a"].to_vec()),
            (9, 11, tree!["a", "a"].to_vec()),
        ]
    );
}

#[test]
fn greedy_whatever() {
    let haystack = tree![1, 2, 3, 4, 2, 4, 2, 1, "a", "b", 4, 5];
    let program = compile([lit(2), whatever(), lit(4)]).unwrap();
    assert_eq!(
        collect(&haystack, &program),
        vec![(1, 11, tree![2, 3, 4, 2, 4, 2, 1, "a", "b", 4].to_vec())]
    );
}

#[test]
fn non_greedy_whatever() {
    let haystack = tree![1, 2, 3, 4, 2, 4, 2, 1, "a", "b", 4, 5];
    let program = compile([lit(2), whatever_ng(), lit(4)]).unwrap();
    assert_eq!(
        collect(&haystack, &program),
        vec![
            (1, 4, tree![2, 3, 4].to_vec()),
            (4, 6, tree![2, 4].to_vec()),
            (6, 11, tree![2, 1, "a", "b", 4].to_vec()),
        ]
    );
}

#[test]
fn backreference_runs() {
    let haystack = tree![1, 2, 3, 3, 3, 2, 2, 1, 2, 1, 1, 1, 1, 1, 2, 3, 3];
    let program = compile([named("a", [anything()]), more([backref("a")])]).unwrap();

    let mut out = Vec::new();
    search(&haystack, &program, |m| {
        let a = m.group("a").unwrap();
        out.push((m.start(), m.end(), m.content(), a.content()));
        None
    })
    .unwrap();

    assert_eq!(
        out,
        vec![
            (2, 5, tree![3, 3, 3].to_vec(), tree![3].to_vec()),
            (5, 7, tree![2, 2].to_vec(), tree![2].to_vec()),
            (9, 14, tree![1, 1, 1, 1, 1].to_vec(), tree![1].to_vec()),
            (15, 17, tree![3, 3].to_vec(), tree![3].to_vec()),
        ]
    );
}

#[test]
fn anchored_subsequences() {
    let haystack = tree![
        1,
        2,
        3,
        ["a", ["b", "c"]],
        ["a", ["b", "e"]],
        ["a", ["b", "d", ["a", ["b", "c"]]]]
    ];
    let program = compile([named(
        "exp",
        [seq([lit("a"), seq([lit("b"), or(["c", "d"]), end()])])],
    )])
    .unwrap();

    // Two hits: the top-level element 3, and the copy nested inside the
    // last element's subtree. The `["b", "e"]` case fails the
    // alternation; the `["b", "d", …]` case fails the inner anchor.
    let mut firsts = Vec::new();
    search(&haystack, &program, |m| {
        firsts.push(m.group("exp").unwrap().first().unwrap());
        None
    })
    .unwrap();

    let expected = Value::Seq(tree!["a", ["b", "c"]]);
    assert_eq!(firsts, vec![expected.clone(), expected]);
}

#[test]
fn replace_through_the_match() {
    let haystack = tree![1, 2, 3, 4, 5];
    let program = compile([lit(2), lit(3), lit(4)]).unwrap();
    search(&haystack, &program, |m| {
        m.replace(tree!["cut"]);
        None
    })
    .unwrap();
    assert_eq!(haystack, tree![1, "cut", 5]);
}

#[test]
fn swap_two_groups_of_one_match() {
    let haystack = tree!["l", 1, 2, "sep", "x", "r"];
    let program = compile([
        named("left", [lit(1), lit(2)]),
        lit("sep"),
        named("right", [lit("x")]),
    ])
    .unwrap();

    search(&haystack, &program, |m| {
        let mut left: Match = m.group("left").unwrap().clone();
        let mut right: Match = m.group("right").unwrap().clone();
        left.swap(&mut right);
        None
    })
    .unwrap();

    assert_eq!(haystack, tree!["l", "x", "sep", 1, 2, "r"]);
}
