//! Naming conventions for generated items.

use serde::{Deserialize, Serialize};

/// How generated method names are spelled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum MethodNaming {
    /// `with_simple_prop`, `is_simple_pojo`
    #[default]
    Snake,
    /// `withSimpleProp`, `isSimplePojo`, as Hamcrest users know them
    Camel,
}

impl MethodNaming {
    /// Name of the fluent method registering a matcher for `property`.
    pub fn property_method(self, property: &str) -> String {
        match self {
            MethodNaming::Snake => format!("with_{property}"),
            MethodNaming::Camel => format!("with{}", capitalize(property)),
        }
    }

    /// Name of the free factory function for a matcher of `type_name`.
    pub fn factory_method(self, type_name: &str) -> String {
        match self {
            MethodNaming::Snake => format!("is_{}", to_snake_case(type_name)),
            MethodNaming::Camel => format!("is{type_name}"),
        }
    }
}

/// Uppercase the first character, leaving the rest untouched.
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Convert PascalCase to snake_case, keeping acronyms together.
pub fn to_snake_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut result = String::with_capacity(name.len() + 4);
    for (i, &ch) in chars.iter().enumerate() {
        if ch.is_uppercase() {
            let prev = i.checked_sub(1).map(|p| chars[p]);
            let next = chars.get(i + 1);
            let word_start = match prev {
                Some('_') => false,
                Some(p) if p.is_lowercase() || p.is_ascii_digit() => true,
                Some(p) if p.is_uppercase() => next.is_some_and(|n| n.is_lowercase()),
                _ => false,
            };
            if word_start {
                result.push('_');
            }
            result.extend(ch.to_lowercase());
        } else {
            result.push(ch);
        }
    }
    result
}
