//! Extraction of the ordered, de-duplicated property list of a type.

use std::collections::HashSet;

use log::error;

use crate::descriptor::TypeDescriptor;
use crate::introspect::{IntrospectionError, Introspector, SourceIntrospector};

/// A property of a struct, reduced to its name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BeanProperty {
    name: String,
}

impl BeanProperty {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Turns an [`Introspector`] into a best-effort property list.
pub struct PropertyExtractor<I = SourceIntrospector> {
    introspector: I,
}

impl PropertyExtractor {
    pub fn new() -> Self {
        Self::with_introspector(SourceIntrospector)
    }
}

impl Default for PropertyExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: Introspector> PropertyExtractor<I> {
    pub fn with_introspector(introspector: I) -> Self {
        Self { introspector }
    }

    /// The properties of `ty` in introspection order, without duplicates.
    ///
    /// Never fails: an absent type or a failed introspection yields an empty
    /// list, the latter after logging the cause.
    pub fn properties_of(&self, ty: Option<&TypeDescriptor>) -> Vec<BeanProperty> {
        let Some(ty) = ty else {
            return Vec::new();
        };

        self.try_properties_of(ty).unwrap_or_else(|err| {
            error!("Failed to read properties of {ty}: {err}");
            Vec::new()
        })
    }

    /// Like [`properties_of`](Self::properties_of), but hands the
    /// introspection failure to the caller.
    pub fn try_properties_of(&self, ty: &TypeDescriptor) -> Result<Vec<BeanProperty>, IntrospectionError> {
        let descriptors = self.introspector.bean_info(ty)?;
        let mut seen = HashSet::new();
        Ok(descriptors
            .into_iter()
            .filter(|descriptor| seen.insert(descriptor.name.clone()))
            .map(|descriptor| BeanProperty::new(descriptor.name))
            .collect())
    }
}
