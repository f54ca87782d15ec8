//! Loops, `match` on characters, ranges and tuples, and early exit.

use std::collections::BTreeMap;

use anyhow::Result;
use harness::{Registry, say};

use super::example;

const TOPIC: &str = "control-flow";

const GREETED_NAMES: [&str; 4] = ["Anna", "Alex", "Brian", "Jack"];

pub fn register(registry: &mut Registry) -> harness::Result<()> {
    registry.insert(example(
        TOPIC,
        "times-table",
        || {
            for index in 1..=5 {
                say!("{index} times 5 is {}", index * 5);
            }
            Ok(())
        },
        &[
            "1 times 5 is 5",
            "2 times 5 is 10",
            "3 times 5 is 15",
            "4 times 5 is 20",
            "5 times 5 is 25",
        ],
    ))?;
    registry.insert(example(
        TOPIC,
        "names",
        || {
            for name in GREETED_NAMES {
                say!("Hello, {name}!");
            }
            Ok(())
        },
        &["Hello, Anna!", "Hello, Alex!", "Hello, Brian!", "Hello, Jack!"],
    ))?;
    registry.insert(example(
        TOPIC,
        "power",
        power_of,
        &["3 to the power of 10 is 59049"],
    ))?;
    registry.insert(example(
        TOPIC,
        "legs",
        count_legs,
        &["ants have 6 legs", "cats have 4 legs", "spiders have 8 legs"],
    ))?;
    registry.insert(example(
        TOPIC,
        "character",
        || {
            say!("{}", describe_letter('z'));
            Ok(())
        },
        &["The last letter of the alphabet"],
    ))?;
    registry.insert(example(
        TOPIC,
        "letter-a",
        || {
            for character in ['a', 'A', 'b'] {
                say!("{}", letter_a(character));
            }
            Ok(())
        },
        &["The letter A", "The letter A", "Not the letter A"],
    ))?;
    registry.insert(example(
        TOPIC,
        "interval",
        || {
            say!("There are {} moons orbiting Saturn.", natural_count(62));
            Ok(())
        },
        &["There are dozens of moons orbiting Saturn."],
    ))?;
    registry.insert(example(
        TOPIC,
        "tuple-box",
        || {
            for point in [(1, 1), (0, 0), (3, 0), (0, -7), (5, 5)] {
                say!("{}", classify_point(point));
            }
            Ok(())
        },
        &[
            "(1, 1) is inside the box",
            "(0, 0) is at the origin",
            "(3, 0) is on the x-axis",
            "(0, -7) is on the y-axis",
            "(5, 5) is outside of the box",
        ],
    ))?;
    registry.insert(example(
        TOPIC,
        "value-binding",
        || {
            say!("{}", locate((2, 0)));
            Ok(())
        },
        &["on the x-axis with an x value of 2"],
    ))?;
    registry.insert(example(
        TOPIC,
        "where-guard",
        || {
            for point in [(1, -1), (2, 2), (4, 7)] {
                say!("{}", diagonal(point));
            }
            Ok(())
        },
        &[
            "(1, -1) is on the line x == -y",
            "(2, 2) is on the line x == y",
            "(4, 7) is just some arbitrary point",
        ],
    ))?;
    registry.insert(example(
        TOPIC,
        "compound-case",
        || {
            for character in ['e', 'k', '?'] {
                say!("{}", vowel_or_consonant(character));
            }
            Ok(())
        },
        &[
            "e is a vowel",
            "k is a consonant",
            "? is not a vowel or a consonant",
        ],
    ))?;
    registry.insert(example(
        TOPIC,
        "early-exit",
        || {
            greet(&BTreeMap::from([("name", "John")]));
            greet(&BTreeMap::from([("name", "Jane"), ("location", "Cupertino")]));
            greet(&BTreeMap::new());
            Ok(())
        },
        &[
            "Hello John!",
            "I hope the weather is nice near you.",
            "Hello Jane!",
            "I hope the weather is nice in Cupertino.",
        ],
    ))?;
    registry.insert(example(
        TOPIC,
        "fallthrough",
        || {
            say!("{}", describe_number(5));
            say!("{}", describe_number(8));
            Ok(())
        },
        &[
            "The number 5 is a prime number, and also an integer.",
            "The number 8 is an integer.",
        ],
    ))?;
    Ok(())
}

fn power_of() -> Result<()> {
    let base: u64 = 3;
    let power = 10;
    let mut answer = 1;
    for _ in 1..=power {
        answer *= base;
    }
    say!("{base} to the power of {power} is {answer}");
    Ok(())
}

fn count_legs() -> Result<()> {
    let number_of_legs = BTreeMap::from([("spider", 8), ("ant", 6), ("cat", 4)]);
    for (animal_name, leg_count) in &number_of_legs {
        say!("{animal_name}s have {leg_count} legs");
    }
    Ok(())
}

fn describe_letter(character: char) -> &'static str {
    match character {
        'a' => "The first letter of the alphabet",
        'z' => "The last letter of the alphabet",
        _ => "Some other character",
    }
}

fn letter_a(character: char) -> &'static str {
    match character {
        'a' | 'A' => "The letter A",
        _ => "Not the letter A",
    }
}

fn natural_count(approximate_count: u32) -> &'static str {
    match approximate_count {
        0 => "no",
        1..5 => "a few",
        5..12 => "several",
        12..100 => "dozens of",
        100..1000 => "hundreds of",
        _ => "many",
    }
}

fn classify_point(point: (i32, i32)) -> String {
    match point {
        (0, 0) => "(0, 0) is at the origin".to_string(),
        (x, 0) => format!("({x}, 0) is on the x-axis"),
        (0, y) => format!("(0, {y}) is on the y-axis"),
        (x @ -2..=2, y @ -2..=2) => format!("({x}, {y}) is inside the box"),
        (x, y) => format!("({x}, {y}) is outside of the box"),
    }
}

fn locate(point: (i32, i32)) -> String {
    match point {
        (x, 0) => format!("on the x-axis with an x value of {x}"),
        (0, y) => format!("on the y-axis with a y value of {y}"),
        (x, y) => format!("somewhere else at ({x}, {y})"),
    }
}

fn diagonal(point: (i32, i32)) -> String {
    match point {
        (x, y) if x == y => format!("({x}, {y}) is on the line x == y"),
        (x, y) if x == -y => format!("({x}, {y}) is on the line x == -y"),
        (x, y) => format!("({x}, {y}) is just some arbitrary point"),
    }
}

fn vowel_or_consonant(character: char) -> String {
    match character {
        'a' | 'e' | 'i' | 'o' | 'u' => format!("{character} is a vowel"),
        'b' | 'c' | 'd' | 'f' | 'g' | 'h' | 'j' | 'k' | 'l' | 'm' | 'n' | 'p' | 'q' | 'r'
        | 's' | 't' | 'v' | 'w' | 'x' | 'y' | 'z' => format!("{character} is a consonant"),
        _ => format!("{character} is not a vowel or a consonant"),
    }
}

/// Returns without printing anything when there is no name.
fn greet(person: &BTreeMap<&str, &str>) {
    let Some(name) = person.get("name") else {
        return;
    };
    say!("Hello {name}!");

    let Some(location) = person.get("location") else {
        say!("I hope the weather is nice near you.");
        return;
    };
    say!("I hope the weather is nice in {location}.");
}

fn describe_number(integer_to_describe: u32) -> String {
    let mut description = format!("The number {integer_to_describe} is");
    // No fallthrough in `match`; the prime arm appends and the common suffix follows.
    if matches!(integer_to_describe, 2 | 3 | 5 | 7 | 11 | 13 | 17 | 19) {
        description.push_str(" a prime number, and also");
    }
    description.push_str(" an integer.");
    description
}
