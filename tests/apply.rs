//! Tests for two-argument application and chaining.

use std::cell::RefCell;

use bifold::{compose, dispatch, pipe};

#[test]
fn dispatch_invokes_the_action_exactly_once() {
    let mut calls = 0;
    dispatch(5, 7, |_x, _y| calls += 1);
    assert_eq!(calls, 1);
}

#[test]
fn dispatch_hands_both_arguments_to_the_action() {
    let mut seen = Vec::new();
    dispatch(3, 9, |x, y| seen.push((x, y)));
    assert_eq!(seen, [(3, 9)]);
}

#[test]
fn dispatch_works_over_owned_strings() {
    let mut joined = String::new();
    dispatch("Node".to_string(), ".js".to_string(), |a, b| {
        joined = a + &b;
    });
    assert_eq!(joined, "Node.js");
}

#[test]
fn compose_applies_the_transform_then_the_postprocess() {
    let rendered = compose(
        2,
        3,
        |base: i32, exp| f64::from(base).powi(exp),
        |r| format!("{r:.1}"),
    );
    assert_eq!(rendered, "8.0");
}

#[test]
fn compose_runs_f_strictly_before_g() {
    let order = RefCell::new(Vec::new());
    let result = compose(
        1,
        2,
        |a, b| {
            order.borrow_mut().push("f");
            a + b
        },
        |r| {
            order.borrow_mut().push("g");
            r * 10
        },
    );
    assert_eq!(result, 30);
    assert_eq!(*order.borrow(), ["f", "g"]);
}

#[test]
fn compose_threads_differing_argument_and_result_types() {
    let banner = compose(
        "width",
        4usize,
        |s: &str, n| s.len() + n,
        |total| format!("{total} cols"),
    );
    assert_eq!(banner, "9 cols");
}

#[test]
fn pipe_chains_unary_transforms() {
    let doubled_len = pipe("My Length please", |s: &str| s.len(), |n| n * 2);
    assert_eq!(doubled_len, 32);
}
