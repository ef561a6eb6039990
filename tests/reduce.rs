//! Tests for the left fold and best-element selection.

use anyhow::Result;
use bifold::testing::*;
use bifold::{EmptyInputError, SequenceExt, fold, select};

#[test]
fn fold_of_an_empty_sequence_returns_the_seed() {
    let empty: [i32; 0] = [];
    assert_eq!(fold(&empty, 42, |acc, n| acc + n), 42);
}

#[test]
fn fold_sums_a_sequence() {
    assert_eq!(fold(&[4, 5, 6], 0, |acc, n| acc + n), 15);
}

#[test]
fn fold_associates_strictly_left() {
    // ((0 - 1) - 2) - 3, not any other grouping
    assert_eq!(fold(&[1, 2, 3], 0, |acc, n| acc - n), -6);
}

#[test]
fn fold_passes_the_accumulator_first() {
    let steps = ["1", "2", "3"].map(str::to_string);
    let trace = fold(&steps, "0".to_string(), |acc, n| format!("({acc}-{n})"));
    assert_eq!(trace, "(((0-1)-2)-3)");
}

#[test]
fn select_finds_the_highest_salary() -> Result<()> {
    let roster = sample_developers();
    let top = select(&roster, |a, b| if b.salary() > a.salary() { b } else { a })?;
    assert_eq!(top.name(), "Sara");
    Ok(())
}

#[test]
fn select_finds_the_lowest_salary() -> Result<()> {
    let roster = sample_developers();
    let bottom = select(&roster, |a, b| if b.salary() < a.salary() { b } else { a })?;
    assert_eq!(bottom.name(), "Daniel");
    Ok(())
}

#[test]
fn select_returns_a_member_of_the_input() -> Result<()> {
    let data = [3, 9, 4, 9, 1];
    let winner = select(&data, |a, b| if b > a { b } else { a })?;
    assert_contains(&data, &winner);
    assert_eq!(winner, 9);
    Ok(())
}

#[test]
fn select_over_an_empty_sequence_is_an_error() {
    let empty: [String; 0] = [];
    let err = select(&empty, |a, _b| a).unwrap_err();
    assert_eq!(err, EmptyInputError);
    assert!(err.to_string().contains("empty"));
}

#[test]
fn select_with_a_single_element_never_consults_choose() -> Result<()> {
    let only = select(&[7], |_a, _b| unreachable!("choose must not run"))?;
    assert_eq!(only, 7);
    Ok(())
}

#[test]
fn fold_and_select_via_method_syntax() -> Result<()> {
    let numbers = vec![4, 5, 6];
    assert_eq!(numbers.fold_with(0, |acc, n| acc + n), 15);
    assert_eq!(numbers.select_with(|a, b| if b > a { b } else { a })?, 6);
    Ok(())
}
