//! Compiled-in catalog of playground examples.
//!
//! One module per playground topic. Each registers its examples under
//! `<topic>/<name>` with the lines the demonstration is expected to print.

mod classes;
mod closures;
mod control_flow;
mod enums;
mod errors;
mod functions;
mod initialization;
mod methods;
mod optionals;
mod properties;
mod statics;

use harness::{Example, Registry};

/// Build the registry with every catalog example, topic by topic.
pub fn registry() -> harness::Result<Registry> {
    let mut registry = Registry::new();
    functions::register(&mut registry)?;
    control_flow::register(&mut registry)?;
    enums::register(&mut registry)?;
    classes::register(&mut registry)?;
    properties::register(&mut registry)?;
    methods::register(&mut registry)?;
    initialization::register(&mut registry)?;
    errors::register(&mut registry)?;
    closures::register(&mut registry)?;
    optionals::register(&mut registry)?;
    statics::register(&mut registry)?;
    Ok(registry)
}

/// Build an example named `<topic>/<name>` tagged with `topic`.
fn example<F>(topic: &str, name: &str, action: F, expected: &[&str]) -> Example
where
    F: Fn() -> anyhow::Result<()> + 'static,
{
    Example::new(format!("{topic}/{name}"), action, expected.iter().copied()).with_topic(topic)
}
