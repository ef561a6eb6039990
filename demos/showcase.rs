//! Walk through every combinator on a small sample roster.
//!
//! Run with: `cargo run --example showcase`

use anyhow::Result;
use bifold::testing::{language_names, sample_developers};
use bifold::{compose, dispatch, filter_transform, fold, select, to_keyed_map};

fn main() -> Result<()> {
    println!("== dispatch ==");
    dispatch(5, 7, |x, y| println!("{x} + {y} = {}", x + y));
    dispatch(15, 7, |x, y| println!("{x} % {y} = {}", x % y));

    println!("\n== compose ==");
    let rendered = compose(
        2,
        3,
        |base: i32, exp| f64::from(base).powi(exp),
        |r| format!("{r:.1}"),
    );
    println!("2^3 rendered as {rendered}");

    println!("\n== fold ==");
    println!("sum of [4, 5, 6] = {}", fold(&[4, 5, 6], 0, |acc, n| acc + n));

    println!("\n== select ==");
    let roster = sample_developers();
    let top = select(&roster, |a, b| if b.salary() > a.salary() { b } else { a })?;
    println!("highest paid: {} (${:.0})", top.name(), top.salary());

    println!("\n== filter_transform ==");
    let c_family = filter_transform(&language_names(), &'C', |lang, initial| {
        lang.starts_with(*initial).then(|| lang.clone())
    });
    println!("C-family languages: {c_family:?}");

    println!("\n== to_keyed_map ==");
    let lengths = to_keyed_map(&language_names(), |lang| lang.len());
    println!("name lengths: {lengths:?}");

    Ok(())
}
