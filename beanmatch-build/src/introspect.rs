//! Property introspection over struct declarations.

use std::fs;
use std::io;
use std::path::PathBuf;

use quote::ToTokens;
use syn::ext::IdentExt;
use syn::{Fields, Item, ItemStruct};
use thiserror::Error;

use crate::descriptor::TypeDescriptor;

/// One property reported by an [`Introspector`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyDescriptor {
    pub name: String,
    /// The property's type as written in source, e.g. `Option<String>`.
    pub type_name: String,
}

impl PropertyDescriptor {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
        }
    }
}

/// Why a type could not be examined.
#[derive(Debug, Error)]
pub enum IntrospectionError {
    #[error("no source location recorded for {0}")]
    NoSource(String),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("struct {name} not found in {path}")]
    NotFound { name: String, path: PathBuf },

    #[error("{0} has generic parameters")]
    Generic(String),
}

/// Reports the properties a type exposes, in a stable order.
pub trait Introspector {
    fn bean_info(&self, ty: &TypeDescriptor) -> Result<Vec<PropertyDescriptor>, IntrospectionError>;
}

impl<F> Introspector for F
where
    F: Fn(&TypeDescriptor) -> Result<Vec<PropertyDescriptor>, IntrospectionError>,
{
    fn bean_info(&self, ty: &TypeDescriptor) -> Result<Vec<PropertyDescriptor>, IntrospectionError> {
        self(ty)
    }
}

/// Introspects a struct by re-reading the file it was declared in.
///
/// Named fields are reported in declaration order. Tuple and unit structs
/// have no named properties.
#[derive(Debug, Clone, Copy, Default)]
pub struct SourceIntrospector;

impl Introspector for SourceIntrospector {
    fn bean_info(&self, ty: &TypeDescriptor) -> Result<Vec<PropertyDescriptor>, IntrospectionError> {
        let location = ty
            .source()
            .ok_or_else(|| IntrospectionError::NoSource(ty.qualified_name()))?;

        let content = fs::read_to_string(&location.file).map_err(|source| IntrospectionError::Io {
            path: location.file.clone(),
            source,
        })?;
        let syntax = syn::parse_file(&content).map_err(|err| IntrospectionError::Parse {
            path: location.file.clone(),
            message: err.to_string(),
        })?;

        let item = find_struct(&syntax.items, &location.inline_modules, ty.simple_name()).ok_or_else(|| {
            IntrospectionError::NotFound {
                name: ty.simple_name().to_string(),
                path: location.file.clone(),
            }
        })?;

        if !item.generics.params.is_empty() {
            return Err(IntrospectionError::Generic(ty.qualified_name()));
        }
        Ok(properties_of_struct(item))
    }
}

/// Locate `name` inside the inline modules `path` of `items`.
fn find_struct<'a>(items: &'a [Item], path: &[String], name: &str) -> Option<&'a ItemStruct> {
    match path.split_first() {
        None => items.iter().find_map(|item| match item {
            Item::Struct(item_struct) if item_struct.ident == name => Some(item_struct),
            _ => None,
        }),
        Some((module, rest)) => items.iter().find_map(|item| match item {
            Item::Mod(item_mod) if item_mod.ident.unraw() == module.as_str() => item_mod
                .content
                .as_ref()
                .and_then(|(_, nested)| find_struct(nested, rest, name)),
            _ => None,
        }),
    }
}

fn properties_of_struct(item: &ItemStruct) -> Vec<PropertyDescriptor> {
    match &item.fields {
        Fields::Named(named) => named
            .named
            .iter()
            .filter_map(|field| {
                let ident = field.ident.as_ref()?;
                Some(PropertyDescriptor::new(
                    ident.unraw().to_string(),
                    field.ty.to_token_stream().to_string(),
                ))
            })
            .collect(),
        Fields::Unnamed(_) | Fields::Unit => Vec::new(),
    }
}
