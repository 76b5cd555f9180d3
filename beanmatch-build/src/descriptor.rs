//! Handles to the struct types matchers are generated for.

use std::fmt;
use std::path::{Path, PathBuf};

const CRATE_ROOT: &str = "crate";

/// A module path relative to the crate root, e.g. `crate::models::user`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModulePath {
    segments: Vec<String>,
}

impl ModulePath {
    pub fn root() -> Self {
        Self::default()
    }

    /// Parse `crate::a::b`, `a::b`, `crate` or the empty string.
    pub fn parse(path: &str) -> Self {
        let segments = path
            .split("::")
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
            .skip_while(|segment| *segment == CRATE_ROOT)
            .map(str::to_string)
            .collect();
        Self { segments }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn child(&self, name: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(name.into());
        Self { segments }
    }

    /// Whether `self` is `ancestor` or nested inside it.
    pub fn starts_with(&self, ancestor: &ModulePath) -> bool {
        self.segments.starts_with(&ancestor.segments)
    }
}

impl fmt::Display for ModulePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(CRATE_ROOT)?;
        for segment in &self.segments {
            write!(f, "::{segment}")?;
        }
        Ok(())
    }
}

/// Where a struct was declared.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SourceLocation {
    /// The file holding the declaration.
    pub file: PathBuf,
    /// Inline `mod name { .. }` blocks enclosing the struct inside `file`.
    pub inline_modules: Vec<String>,
}

/// A struct type a matcher can be generated for.
///
/// Only non-generic structs are supported.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeDescriptor {
    name: String,
    module_path: ModulePath,
    source: Option<SourceLocation>,
}

impl TypeDescriptor {
    pub fn new(name: impl Into<String>, module_path: ModulePath) -> Self {
        Self {
            name: name.into(),
            module_path,
            source: None,
        }
    }

    /// Record where the struct is declared so it can be introspected.
    pub fn with_source(mut self, file: impl AsRef<Path>, inline_modules: Vec<String>) -> Self {
        self.source = Some(SourceLocation {
            file: file.as_ref().to_path_buf(),
            inline_modules,
        });
        self
    }

    pub fn simple_name(&self) -> &str {
        &self.name
    }

    pub fn module_path(&self) -> &ModulePath {
        &self.module_path
    }

    /// The enclosing namespace, e.g. `crate::models`.
    pub fn namespace(&self) -> String {
        self.module_path.to_string()
    }

    /// e.g. `crate::models::User`
    pub fn qualified_name(&self) -> String {
        format!("{}::{}", self.module_path, self.name)
    }

    pub fn source(&self) -> Option<&SourceLocation> {
        self.source.as_ref()
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.module_path, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_module_path() {
        assert_eq!(ModulePath::parse("crate::models::user").segments(), ["models", "user"]);
        assert_eq!(ModulePath::parse("models::user"), ModulePath::parse("crate::models::user"));
        assert_eq!(ModulePath::parse("crate"), ModulePath::root());
        assert_eq!(ModulePath::parse(""), ModulePath::root());
        assert_eq!(ModulePath::root().to_string(), "crate");
    }

    #[test]
    fn test_starts_with_is_segment_wise() {
        let models = ModulePath::parse("crate::models");
        assert!(ModulePath::parse("crate::models::user").starts_with(&models));
        assert!(models.starts_with(&models));
        assert!(!ModulePath::parse("crate::models_v2").starts_with(&models));
        assert!(models.starts_with(&ModulePath::root()));
    }

    #[test]
    fn test_qualified_name() {
        let ty = TypeDescriptor::new("User", ModulePath::parse("crate::models"));
        assert_eq!(ty.qualified_name(), "crate::models::User");
        assert_eq!(ty.namespace(), "crate::models");
        assert!(ty.source().is_none());
    }
}
