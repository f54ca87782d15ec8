//! Closures as sort predicates and closures capturing state.

use std::cmp::Reverse;

use anyhow::Result;
use harness::{Registry, say};

use super::example;

const TOPIC: &str = "closures";

const NAMES: [&str; 5] = ["Chris", "Alex", "Ewa", "Barry", "Daniella"];

pub fn register(registry: &mut Registry) -> harness::Result<()> {
    registry.insert(example(
        TOPIC,
        "sorted",
        sort_names,
        &[
            "Ewa, Daniella, Chris, Barry, Alex",
            "Ewa, Daniella, Chris, Barry, Alex",
            "Ewa, Daniella, Chris, Barry, Alex",
            "Alex, Barry, Chris, Daniella, Ewa",
        ],
    ))?;
    registry.insert(example(
        TOPIC,
        "capturing",
        capture_totals,
        &["10", "20", "7", "30", "14"],
    ))?;
    Ok(())
}

fn backward(s1: &&str, s2: &&str) -> std::cmp::Ordering {
    s2.cmp(s1)
}

fn sort_names() -> Result<()> {
    let mut reversed_names = NAMES.to_vec();
    reversed_names.sort_by(backward);
    say!("{}", reversed_names.join(", "));

    let mut reversed_names = NAMES.to_vec();
    reversed_names.sort_by(|s1, s2| s2.cmp(s1));
    say!("{}", reversed_names.join(", "));

    let mut reversed_names = NAMES.to_vec();
    reversed_names.sort_by_key(|name| Reverse(*name));
    say!("{}", reversed_names.join(", "));

    let mut names = NAMES.to_vec();
    names.sort();
    say!("{}", names.join(", "));
    Ok(())
}

/// Each incrementer owns its own running total.
fn make_incrementer(amount: i32) -> impl FnMut() -> i32 {
    let mut running_total = 0;
    move || {
        running_total += amount;
        running_total
    }
}

fn capture_totals() -> Result<()> {
    let mut increment_by_ten = make_incrementer(10);
    say!("{}", increment_by_ten());
    say!("{}", increment_by_ten());

    let mut increment_by_seven = make_incrementer(7);
    say!("{}", increment_by_seven());

    say!("{}", increment_by_ten());
    say!("{}", increment_by_seven());
    Ok(())
}
