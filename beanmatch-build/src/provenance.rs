//! Provenance header written at the top of every generated file.
//!
//! ```text
//! // @generated by beanmatch-build. Do not edit by hand.
//! // based-on: crate::models::User
//! ```

use once_cell::sync::Lazy;
use regex::Regex;

/// Generator identity recorded in generated files unless configured otherwise.
pub const DEFAULT_GENERATOR_NAME: &str = env!("CARGO_PKG_NAME");

static GENERATED_BY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^// @generated by (.+?)\. Do not edit by hand\.$").expect("valid regex"));
static BASED_ON: Lazy<Regex> = Lazy::new(|| Regex::new(r"^// based-on: (\S+)$").expect("valid regex"));

/// Who generated a file, and from which type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Provenance {
    pub generated_by: String,
    /// Fully qualified path of the source struct.
    pub based_on: String,
}

impl Provenance {
    pub fn new(generated_by: impl Into<String>, based_on: impl Into<String>) -> Self {
        Self {
            generated_by: generated_by.into(),
            based_on: based_on.into(),
        }
    }

    /// The comment block placed above the generated code.
    pub fn header(&self) -> String {
        format!(
            "// @generated by {}. Do not edit by hand.\n// based-on: {}\n\n",
            self.generated_by, self.based_on
        )
    }
}

/// Read the provenance header back from generated source.
///
/// Only the leading block of `//` comments is considered.
pub fn read(source: &str) -> Option<Provenance> {
    let mut generated_by = None;
    let mut based_on = None;

    for line in source.lines().take_while(|line| line.starts_with("//")) {
        if let Some(captures) = GENERATED_BY.captures(line) {
            generated_by = Some(captures[1].to_string());
        } else if let Some(captures) = BASED_ON.captures(line) {
            based_on = Some(captures[1].to_string());
        }
    }

    Some(Provenance::new(generated_by?, based_on?))
}
