//! Optional values: printing, unwrapping and binding with `if let`.

use anyhow::Context;
use harness::{Registry, say};

use super::example;

const TOPIC: &str = "optionals";

pub fn register(registry: &mut Registry) -> harness::Result<()> {
    registry.insert(example(
        TOPIC,
        "print",
        || {
            let name: Option<String> = Some("Hi".to_string());
            let nothing: Option<String> = None;
            say!("{name:?}");
            say!("{nothing:?}");
            Ok(())
        },
        &["Some(\"Hi\")", "None"],
    ))?;
    registry.insert(example(
        TOPIC,
        "unwrap",
        || {
            let possible_number = "123";
            let converted_number: i32 = possible_number
                .parse()
                .with_context(|| format!("{possible_number:?} is not an integer"))?;
            say!("{converted_number}");
            Ok(())
        },
        &["123"],
    ))?;
    registry.insert(example(
        TOPIC,
        "if-let",
        || {
            for possible_number in ["123", "12z"] {
                say!("{}", describe_conversion(possible_number));
            }
            Ok(())
        },
        &[
            "\"123\" has an integer value of 123",
            "\"12z\" could not be converted to an integer",
        ],
    ))?;
    Ok(())
}

fn describe_conversion(possible_number: &str) -> String {
    if let Ok(actual_number) = possible_number.parse::<i32>() {
        format!("\"{possible_number}\" has an integer value of {actual_number}")
    } else {
        format!("\"{possible_number}\" could not be converted to an integer")
    }
}
