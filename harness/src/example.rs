//! The [`Example`] record: a named action plus the lines it should print.

use std::fmt;

/// Body of an example. Returning `Err` marks the example as failed.
pub type Action = Box<dyn Fn() -> anyhow::Result<()>>;

/// A labelled demonstration routine with its expected output.
///
/// Immutable once built; the registry hands out shared references only.
pub struct Example {
    name: String,
    topic: Option<String>,
    action: Action,
    expected_output: Vec<String>,
}

impl Example {
    pub fn new<F, I, S>(name: impl Into<String>, action: F, expected_output: I) -> Self
    where
        F: Fn() -> anyhow::Result<()> + 'static,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            topic: None,
            action: Box::new(action),
            expected_output: expected_output.into_iter().map(Into::into).collect(),
        }
    }

    /// Attach the topic (source playground) this example belongs to.
    pub fn with_topic(mut self, topic: impl Into<String>) -> Self {
        self.topic = Some(topic.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn topic(&self) -> Option<&str> {
        self.topic.as_deref()
    }

    pub fn expected_output(&self) -> &[String] {
        &self.expected_output
    }

    /// Run the action once. Output goes wherever the sink currently points.
    pub fn invoke(&self) -> anyhow::Result<()> {
        (self.action)()
    }
}

impl fmt::Debug for Example {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Example")
            .field("name", &self.name)
            .field("topic", &self.topic)
            .field("expected_output", &self.expected_output)
            .finish_non_exhaustive()
    }
}
