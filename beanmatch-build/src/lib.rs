//! Build-time generator for fluent property matchers.
//!
//! For every plain struct in your sources, this crate writes a
//! `<Type>Matcher` built on the `beanmatch` runtime: one `with_<field>`
//! method per named field plus an `is_<type>()` factory.
//!
//! # Example
//!
//! In your `build.rs`:
//!
//! ```ignore
//! fn main() {
//!     beanmatch_build::generate_matchers()
//!         .scan_path("src/")
//!         .package("crate::models")
//!         .output_dir("src/generated")
//!         .run()
//!         .expect("Failed to generate matchers");
//!
//!     println!("cargo:rerun-if-changed=src/");
//! }
//! ```
//!
//! Each generated file reaches its type through `super::`, so mount it as a
//! child of the type's module:
//!
//! ```ignore
//! // src/models/user.rs
//! pub struct User { pub id: u64 }
//!
//! #[cfg(test)]
//! #[path = "../generated/models/user/user_matcher.rs"]
//! pub mod user_matcher;
//! ```

mod batch;
mod config;
mod descriptor;
mod emitter;
mod errors;
mod extractor;
mod generator;
mod introspect;
mod matcher_spec;
mod naming;
pub mod provenance;
mod scanner;

use std::path::{Path, PathBuf};

pub use batch::{CheckReport, CheckStatus, MatcherGenerator};
pub use config::{BeanmatchConfig, CONFIG_FILE, GeneratorSettings, ScanSettings};
pub use descriptor::{ModulePath, SourceLocation, TypeDescriptor};
pub use emitter::{DEFAULT_RUNTIME_CRATE, GeneratedArtifact, SourceEmitter};
pub use errors::GenerateError;
pub use extractor::{BeanProperty, PropertyExtractor};
pub use generator::MatcherClassGenerator;
pub use introspect::{IntrospectionError, Introspector, PropertyDescriptor, SourceIntrospector};
pub use matcher_spec::{
    ConstructorSpec, FactoryMethodSpec, MatcherSpec, MatcherSpecBuilder, PropertyMethodSpec, ProtocolMethod,
    ProtocolMethodSpec, ProvenanceMarker, RegistryFieldSpec,
};
pub use naming::{MethodNaming, capitalize, to_snake_case};
pub use scanner::scan_directory;

/// Create a new batch generator with default settings.
///
/// # Example
///
/// ```ignore
/// beanmatch_build::generate_matchers()
///     .scan_path("src/")
///     .output_dir("src/generated")
///     .run()
///     .expect("Failed to generate matchers");
/// ```
pub fn generate_matchers() -> MatcherGenerator {
    MatcherGenerator::new()
}

/// Generate the matcher for a single type below `output_root` with default settings.
///
/// Returns the path of the written file.
pub fn generate_matcher_for(ty: &TypeDescriptor, output_root: impl AsRef<Path>) -> Result<PathBuf, GenerateError> {
    MatcherClassGenerator::new(output_root.as_ref()).generate_matcher_for(ty)
}
