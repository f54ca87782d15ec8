//! Functions: labels, tuple returns, in-out parameters, function values.

use anyhow::{Context, Result};
use harness::{Registry, say};

use super::example;

const TOPIC: &str = "functions";

pub fn register(registry: &mut Registry) -> harness::Result<()> {
    registry.insert(example(
        TOPIC,
        "greet",
        greet_people,
        &["Hello, Anna!", "Hello, Brian!"],
    ))?;
    registry.insert(example(
        TOPIC,
        "min-max",
        print_bounds,
        &["min is -6 and max is 109"],
    ))?;
    registry.insert(example(
        TOPIC,
        "min-max-optional",
        print_optional_bounds,
        &["min is -6 and max is 109", "no bounds for an empty array"],
    ))?;
    registry.insert(example(
        TOPIC,
        "hometown",
        || {
            say!("{}", greet_from("Bill", "Cupertino"));
            Ok(())
        },
        &["Hello Bill!  Glad you could visit from Cupertino."],
    ))?;
    registry.insert(example(
        TOPIC,
        "variadic-mean",
        || {
            say!("{:?}", arithmetic_mean(&[1.0, 2.0, 3.0, 4.0, 5.0]));
            say!("{:?}", arithmetic_mean(&[3.0, 8.25, 18.75]));
            Ok(())
        },
        &["3.0", "10.0"],
    ))?;
    registry.insert(example(
        TOPIC,
        "swap",
        swap_demo,
        &["someInt is now 107, and anotherInt is now 3"],
    ))?;
    registry.insert(example(
        TOPIC,
        "function-types",
        function_values,
        &["Result: 5", "Result: 6"],
    ))?;
    registry.insert(example(
        TOPIC,
        "nested-step",
        step_to_zero,
        &["-4... ", "-3... ", "-2... ", "-1... ", "zero!"],
    ))?;
    Ok(())
}

fn greet(person: &str) -> String {
    format!("Hello, {person}!")
}

fn greet_from(person: &str, hometown: &str) -> String {
    format!("Hello {person}!  Glad you could visit from {hometown}.")
}

fn greet_people() -> Result<()> {
    say!("{}", greet("Anna"));
    say!("{}", greet("Brian"));
    Ok(())
}

/// Smallest and largest value in one scan, `None` for an empty slice.
fn min_max(values: &[i32]) -> Option<(i32, i32)> {
    let (&first, rest) = values.split_first()?;
    let mut bounds = (first, first);
    for &value in rest {
        if value < bounds.0 {
            bounds.0 = value;
        } else if value > bounds.1 {
            bounds.1 = value;
        }
    }
    Some(bounds)
}

fn print_bounds() -> Result<()> {
    let (min, max) = min_max(&[8, -6, 2, 109, 3, 71]).context("min_max of an empty array")?;
    say!("min is {min} and max is {max}");
    Ok(())
}

fn print_optional_bounds() -> Result<()> {
    for values in [&[8, -6, 2, 109, 3, 71][..], &[][..]] {
        match min_max(values) {
            Some((min, max)) => say!("min is {min} and max is {max}"),
            None => say!("no bounds for an empty array"),
        }
    }
    Ok(())
}

fn arithmetic_mean(numbers: &[f64]) -> f64 {
    numbers.iter().sum::<f64>() / numbers.len() as f64
}

fn swap_two_ints(a: &mut i32, b: &mut i32) {
    let temporary_a = *a;
    *a = *b;
    *b = temporary_a;
}

fn swap_demo() -> Result<()> {
    let mut some_int = 3;
    let mut another_int = 107;
    swap_two_ints(&mut some_int, &mut another_int);
    say!("someInt is now {some_int}, and anotherInt is now {another_int}");
    Ok(())
}

fn add_two_ints(a: i32, b: i32) -> i32 {
    a + b
}

fn multiply_two_ints(a: i32, b: i32) -> i32 {
    a * b
}

fn function_values() -> Result<()> {
    let mut math_function: fn(i32, i32) -> i32 = add_two_ints;
    say!("Result: {}", math_function(2, 3));
    math_function = multiply_two_ints;
    say!("Result: {}", math_function(2, 3));
    Ok(())
}

fn choose_step_function(backward: bool) -> fn(i32) -> i32 {
    fn step_forward(input: i32) -> i32 {
        input + 1
    }
    fn step_backward(input: i32) -> i32 {
        input - 1
    }
    if backward { step_backward } else { step_forward }
}

fn step_to_zero() -> Result<()> {
    let mut current_value = -4;
    let move_nearer_to_zero = choose_step_function(current_value > 0);
    while current_value != 0 {
        say!("{current_value}... ");
        current_value = move_nearer_to_zero(current_value);
    }
    say!("zero!");
    Ok(())
}
