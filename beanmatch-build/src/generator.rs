//! Matcher generation for a single type.

use std::path::{Path, PathBuf};

use log::error;

use crate::descriptor::TypeDescriptor;
use crate::emitter::{GeneratedArtifact, SourceEmitter};
use crate::errors::GenerateError;
use crate::extractor::{BeanProperty, PropertyExtractor};
use crate::introspect::{IntrospectionError, Introspector, SourceIntrospector};
use crate::matcher_spec::MatcherSpecBuilder;
use crate::naming::MethodNaming;

/// Generates the matcher for one type: extract properties, build the spec, emit.
pub struct MatcherClassGenerator<I = SourceIntrospector> {
    extractor: PropertyExtractor<I>,
    builder: MatcherSpecBuilder,
    emitter: SourceEmitter,
    output_dir: PathBuf,
}

impl MatcherClassGenerator {
    /// Create a generator writing below `output_dir`.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self::with_introspector(output_dir, SourceIntrospector)
    }
}

impl<I: Introspector> MatcherClassGenerator<I> {
    pub fn with_introspector(output_dir: impl Into<PathBuf>, introspector: I) -> Self {
        Self {
            extractor: PropertyExtractor::with_introspector(introspector),
            builder: MatcherSpecBuilder::new(),
            emitter: SourceEmitter::new(),
            output_dir: output_dir.into(),
        }
    }

    /// Set how fluent methods and the factory are named.
    ///
    /// Default: [`MethodNaming::Snake`]
    pub fn naming(mut self, naming: MethodNaming) -> Self {
        self.builder = self.builder.naming(naming);
        self
    }

    /// Set the path generated files reach the runtime through.
    ///
    /// Default: `::beanmatch`
    pub fn runtime_crate(mut self, path: impl Into<String>) -> Self {
        self.emitter = self.emitter.runtime_crate(path);
        self
    }

    /// Set the generator identity recorded in the provenance header.
    ///
    /// Default: `beanmatch-build`
    pub fn generator_name(mut self, name: impl Into<String>) -> Self {
        self.builder = self.builder.generator_name(name);
        self
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Generate and write the matcher for `ty`, returning the written path.
    ///
    /// A type whose properties cannot be read still gets a matcher, just
    /// without fluent property methods. Generic structs are rejected.
    pub fn generate_matcher_for(&self, ty: &TypeDescriptor) -> Result<PathBuf, GenerateError> {
        let properties = self.properties_of(ty)?;
        let spec = self.builder.build_spec(ty, properties);
        let artifact = self.emitter.emit(&spec, &self.output_dir)?;
        Ok(artifact.file_path)
    }

    /// Render the matcher for `ty` without writing it.
    pub fn render_matcher_for(&self, ty: &TypeDescriptor) -> Result<GeneratedArtifact, GenerateError> {
        let properties = self.properties_of(ty)?;
        let spec = self.builder.build_spec(ty, properties);
        Ok(GeneratedArtifact {
            file_path: self.emitter.artifact_path(&spec, &self.output_dir),
            source_text: self.emitter.render(&spec)?,
        })
    }

    fn properties_of(&self, ty: &TypeDescriptor) -> Result<Vec<BeanProperty>, GenerateError> {
        match self.extractor.try_properties_of(ty) {
            Ok(properties) => Ok(properties),
            Err(IntrospectionError::Generic(name)) => Err(GenerateError::Generic(name)),
            Err(err) => {
                error!("Failed to read properties of {ty}: {err}");
                Ok(Vec::new())
            }
        }
    }
}
