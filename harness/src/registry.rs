//! Ordered, uniquely-keyed store of examples.

use std::collections::BTreeMap;

use regex::Regex;
use tracing::debug;

use crate::error::{HarnessError, Result};
use crate::example::Example;

/// Examples keyed by name, iterated in registration order.
#[derive(Debug, Default)]
pub struct Registry {
    examples: Vec<Example>,
    index: BTreeMap<String, usize>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an example from parts and register it.
    pub fn register<F, I, S>(
        &mut self,
        name: impl Into<String>,
        action: F,
        expected_output: I,
    ) -> Result<&Example>
    where
        F: Fn() -> anyhow::Result<()> + 'static,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.insert(Example::new(name, action, expected_output))
    }

    /// Register a prebuilt example, appending it to the run order.
    pub fn insert(&mut self, example: Example) -> Result<&Example> {
        validate_name(example.name())?;
        if self.index.contains_key(example.name()) {
            return Err(HarnessError::DuplicateName(example.name().to_string()));
        }
        debug!(name = example.name(), "example registered");
        let position = self.examples.len();
        self.index.insert(example.name().to_string(), position);
        self.examples.push(example);
        Ok(&self.examples[position])
    }

    pub fn get(&self, name: &str) -> Result<&Example> {
        self.index
            .get(name)
            .map(|&position| &self.examples[position])
            .ok_or_else(|| HarnessError::NotFound(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Examples in registration order. Each call starts a fresh pass.
    pub fn list(&self) -> impl Iterator<Item = &Example> + '_ {
        self.examples.iter()
    }

    /// Examples whose name or topic matches `pattern`, in registration order.
    pub fn filter(&self, pattern: &str) -> Result<impl Iterator<Item = &Example> + '_> {
        let pattern = Regex::new(pattern)?;
        Ok(self.examples.iter().filter(move |example| {
            pattern.is_match(example.name()) || example.topic().is_some_and(|t| pattern.is_match(t))
        }))
    }

    pub fn len(&self) -> usize {
        self.examples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a Example;
    type IntoIter = std::slice::Iter<'a, Example>;

    fn into_iter(self) -> Self::IntoIter {
        self.examples.iter()
    }
}

fn validate_name(name: &str) -> Result<()> {
    let reason = if name.is_empty() {
        "name must be non-empty"
    } else if name.chars().any(char::is_whitespace) {
        "name must not contain whitespace"
    } else {
        return Ok(());
    };
    Err(HarnessError::InvalidName {
        name: name.to_string(),
        reason,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{echo, registry_of};

    fn names(registry: &Registry) -> Vec<&str> {
        registry.list().map(Example::name).collect()
    }

    #[test]
    fn register_then_get_returns_same_example() {
        let mut registry = Registry::new();
        let registered: *const Example = registry
            .register("adder", || Ok(()), ["3"])
            .expect("register");
        let fetched = registry.get("adder").expect("get");
        assert!(std::ptr::eq(registered, fetched));
        assert_eq!(fetched.expected_output(), ["3"]);
    }

    #[test]
    fn duplicate_name_is_rejected() {
        let mut registry = registry_of(vec![echo("dup", &["a"])]);
        let err = registry.insert(echo("dup", &["b"])).expect_err("duplicate");
        assert!(matches!(err, HarnessError::DuplicateName(name) if name == "dup"));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("dup").expect("get").expected_output(), ["a"]);
    }

    #[test]
    fn unknown_name_is_not_found() {
        let registry = Registry::new();
        let err = registry.get("ghost").expect_err("missing");
        assert!(matches!(err, HarnessError::NotFound(name) if name == "ghost"));
    }

    #[test]
    fn list_preserves_registration_order() {
        let order = ["zeta", "alpha", "mid", "beta"];
        let registry = registry_of(order.iter().map(|name| echo(name, &[])).collect());
        assert_eq!(names(&registry), order);
        // Restartable: a second pass yields the same sequence.
        assert_eq!(names(&registry), order);
        let via_into_iter: Vec<&str> = (&registry).into_iter().map(Example::name).collect();
        assert_eq!(via_into_iter, order);
    }

    #[test]
    fn rejects_blank_and_whitespace_names() {
        let mut registry = Registry::new();
        assert!(matches!(
            registry.register("", || Ok(()), Vec::<String>::new()),
            Err(HarnessError::InvalidName { .. })
        ));
        assert!(matches!(
            registry.register("two words", || Ok(()), Vec::<String>::new()),
            Err(HarnessError::InvalidName { .. })
        ));
        assert!(registry.is_empty());
    }

    #[test]
    fn filter_matches_name_or_topic() {
        let registry = registry_of(vec![
            echo("greet", &[]).with_topic("functions"),
            echo("swap", &[]).with_topic("functions"),
            echo("barcode", &[]).with_topic("enums"),
        ]);
        let matched: Vec<&str> = registry
            .filter("^func")
            .expect("filter")
            .map(Example::name)
            .collect();
        assert_eq!(matched, vec!["greet", "swap"]);

        let matched: Vec<&str> = registry
            .filter("code$")
            .expect("filter")
            .map(Example::name)
            .collect();
        assert_eq!(matched, vec!["barcode"]);
    }

    #[test]
    fn invalid_filter_is_reported() {
        let registry = Registry::new();
        assert!(matches!(
            registry.filter("("),
            Err(HarnessError::InvalidFilter(_))
        ));
    }
}
