use std::fmt::{self, Debug, Write};

use crate::matcher::Matcher;

/// Accumulates the human-readable text produced while describing matchers
/// and mismatches.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Description {
    text: String,
}

impl Description {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append_text(&mut self, text: &str) -> &mut Self {
        self.text.push_str(text);
        self
    }

    /// Append a value in angle brackets, e.g. `<42>` or `<"alice">`.
    pub fn append_value<V: Debug + ?Sized>(&mut self, value: &V) -> &mut Self {
        let _ = write!(self.text, "<{value:?}>");
        self
    }

    /// Append whatever `matcher` writes in its `describe_to`.
    pub fn append_description_of<T, M>(&mut self, matcher: &M) -> &mut Self
    where
        T: ?Sized,
        M: Matcher<T> + ?Sized,
    {
        matcher.describe_to(self);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
