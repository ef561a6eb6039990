//! Tests for keyed-map conversion.

use std::collections::HashMap;

use bifold::testing::*;
use bifold::{SequenceExt, to_keyed_map};

#[test]
fn keys_are_the_elements_and_values_come_from_the_function() {
    let langs = ["Java", "C++", "C#"].map(str::to_string);
    let lengths = to_keyed_map(&langs, |lang| lang.len());

    let mut expected = HashMap::new();
    expected.insert("Java".to_string(), 4);
    expected.insert("C++".to_string(), 3);
    expected.insert("C#".to_string(), 2);
    assert_maps_equal(&lengths, &expected);
}

#[test]
fn duplicate_keys_keep_the_last_value() {
    let mut version = 0;
    let latest = to_keyed_map(&["a", "b", "a"], |_k| {
        version += 1;
        version
    });
    assert_eq!(latest.len(), 2);
    assert_eq!(latest[&"a"], 3);
    assert_eq!(latest[&"b"], 2);
}

#[test]
fn empty_input_yields_an_empty_map() {
    let empty: [u8; 0] = [];
    assert!(to_keyed_map(&empty, |b| *b).is_empty());
}

#[test]
fn records_can_key_their_own_attributes() {
    let roster = sample_developers();
    let salaries = roster.to_keyed_map_with(|dev| dev.salary());
    assert_eq!(salaries.len(), roster.len());

    let sara = roster
        .iter()
        .find(|d| d.name() == "Sara")
        .expect("Sara is on the roster");
    assert_eq!(salaries[sara], 780_000.0);
}
