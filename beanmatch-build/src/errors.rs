use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Fatal failure while generating a matcher for one type.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// Resolving or writing the output path failed.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The configured runtime crate is not a valid Rust path.
    #[error("invalid runtime crate path `{path}`: {message}")]
    RuntimeCrate { path: String, message: String },

    /// Generated matchers name the target type without parameters.
    #[error("cannot generate a matcher for {0}: generic structs are not supported")]
    Generic(String),

    /// The assembled tokens do not form a valid Rust file.
    #[error("generated code for {type_name} does not parse: {message}")]
    Render { type_name: String, message: String },
}

impl GenerateError {
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(io::Error) -> Self {
        let path = path.into();
        move |source| GenerateError::Io { path, source }
    }
}
