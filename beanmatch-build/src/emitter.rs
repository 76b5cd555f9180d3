//! Renders a [`MatcherSpec`] to Rust source and writes it under the output root.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::{debug, info};
use proc_macro2::{Ident, Span, TokenStream};
use quote::{format_ident, quote};

use crate::errors::GenerateError;
use crate::matcher_spec::{MatcherSpec, ProtocolMethod, ProtocolMethodSpec};
use crate::naming::MethodNaming;

/// Path generated files use to reach the runtime crate.
pub const DEFAULT_RUNTIME_CRATE: &str = "::beanmatch";

/// A rendered matcher file and where it belongs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifact {
    pub file_path: PathBuf,
    pub source_text: String,
}

/// Turns matcher specs into source files.
#[derive(Debug, Clone)]
pub struct SourceEmitter {
    runtime_crate: String,
}

impl SourceEmitter {
    pub fn new() -> Self {
        Self {
            runtime_crate: DEFAULT_RUNTIME_CRATE.to_string(),
        }
    }

    /// Set the path generated code reaches the runtime through.
    ///
    /// Default: `::beanmatch`
    pub fn runtime_crate(mut self, path: impl Into<String>) -> Self {
        self.runtime_crate = path.into();
        self
    }

    /// `root / <module segments> / <snake_case class name>.rs`
    pub fn artifact_path(&self, spec: &MatcherSpec, root: &Path) -> PathBuf {
        spec.target_type
            .module_path()
            .segments()
            .iter()
            .fold(root.to_path_buf(), |dir, segment| dir.join(segment))
            .join(&spec.file_name)
    }

    /// Render `spec` without touching the file system.
    pub fn render(&self, spec: &MatcherSpec) -> Result<String, GenerateError> {
        let tokens = self.render_tokens(spec)?;
        let syntax_tree: syn::File = syn::parse2(tokens).map_err(|err| GenerateError::Render {
            type_name: spec.target_type.qualified_name(),
            message: err.to_string(),
        })?;
        Ok(format!("{}{}", spec.provenance().header(), prettyplease::unparse(&syntax_tree)))
    }

    /// Render `spec` and write it, replacing any previous file at the same path.
    ///
    /// The file is written to a temporary sibling first and then moved into
    /// place, so a failed write never leaves a truncated matcher behind.
    pub fn emit(&self, spec: &MatcherSpec, root: &Path) -> Result<GeneratedArtifact, GenerateError> {
        let source_text = self.render(spec)?;
        debug!("Generated source for {}:\n{source_text}", spec.target_type);

        let file_path = self.artifact_path(spec, root);
        let dir = file_path.parent().unwrap_or(root);
        fs::create_dir_all(dir).map_err(GenerateError::io(dir))?;

        let mut temp = tempfile::NamedTempFile::new_in(dir).map_err(GenerateError::io(dir))?;
        temp.write_all(source_text.as_bytes())
            .map_err(GenerateError::io(temp.path()))?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            temp.as_file()
                .set_permissions(fs::Permissions::from_mode(0o644))
                .map_err(GenerateError::io(temp.path()))?;
        }
        temp.persist(&file_path)
            .map_err(|err| GenerateError::io(&file_path)(err.error))?;

        info!("Generated {} for {}", file_path.display(), spec.target_type);
        Ok(GeneratedArtifact {
            file_path,
            source_text,
        })
    }

    fn render_tokens(&self, spec: &MatcherSpec) -> Result<TokenStream, GenerateError> {
        let runtime: syn::Path = syn::parse_str(&self.runtime_crate).map_err(|err| GenerateError::RuntimeCrate {
            path: self.runtime_crate.clone(),
            message: err.to_string(),
        })?;

        let target = format_ident!("{}", spec.target_type.simple_name());
        let class = format_ident!("{}", spec.generated_class_name);
        let registry = format_ident!("{}", spec.registry_field.name);
        let registry_target = format_ident!("{}", spec.registry_field.target_type);
        let constructor = format_ident!("{}", spec.constructor.name);
        let factory = format_ident!("{}", spec.factory.name);
        let factory_returns = format_ident!("{}", spec.factory.returns);

        let mut lints = vec![quote!(dead_code), quote!(clippy::new_without_default)];
        if spec.naming == MethodNaming::Camel {
            lints.push(quote!(non_snake_case));
        }

        let property_methods = spec.property_methods.iter().map(|method| {
            let name = format_ident!("{}", method.method_name);
            let parameter = format_ident!("{}", method.parameter);
            let property = method.property.name();
            let field = field_ident(property);
            quote! {
                pub fn #name<M>(mut self, #parameter: M) -> Self
                where
                    M: #runtime::Matcher<dyn #runtime::PropertyValue> + 'static,
                {
                    self.#registry.with(#property, |item| &item.#field, #parameter);
                    self
                }
            }
        });

        let protocol_methods = spec
            .protocol_methods
            .iter()
            .map(|method| protocol_method(method, &target, &runtime));

        let provenance = spec.provenance();
        let generated_by = &provenance.generated_by;
        let based_on = &provenance.based_on;
        let struct_doc = format!(" Fluent matcher for the properties of [`{target}`].");
        let factory_doc = format!(" Creates a [`{class}`] with no property expectations.");

        Ok(quote! {
            #![allow(#(#lints),*)]

            use super::#target;

            #[doc = #struct_doc]
            pub struct #class {
                #registry: #runtime::BeanPropertyMatcher<#registry_target>,
            }

            impl #class {
                pub fn #constructor() -> Self {
                    Self {
                        #registry: #runtime::BeanPropertyMatcher::new(),
                    }
                }

                #(#property_methods)*
            }

            impl #runtime::TypeSafeMatcher<#target> for #class {
                #(#protocol_methods)*
            }

            impl #runtime::GeneratedMatcher for #class {
                const GENERATED_BY: &'static str = #generated_by;
                const BASED_ON: &'static str = #based_on;
            }

            #[doc = #factory_doc]
            pub fn #factory() -> #factory_returns {
                #factory_returns::#constructor()
            }
        })
    }
}

impl Default for SourceEmitter {
    fn default() -> Self {
        Self::new()
    }
}

/// Runtime items are always path-qualified so a bean may share a name with them.
fn protocol_method(method: &ProtocolMethodSpec, target: &Ident, runtime: &syn::Path) -> TokenStream {
    let name = format_ident!("{}", method.kind.method_name());
    let delegate = format_ident!("{}", method.kind.delegate());
    let field = format_ident!("{}", method.delegate_field);
    match method.kind {
        ProtocolMethod::DescribeTo => quote! {
            fn #name(&self, description: &mut #runtime::Description) {
                #runtime::Matcher::<#target>::#delegate(&self.#field, description);
            }
        },
        ProtocolMethod::MatchesSafely => quote! {
            fn #name(&self, item: &#target) -> bool {
                #runtime::Matcher::<#target>::#delegate(&self.#field, item)
            }
        },
        ProtocolMethod::DescribeMismatchSafely => quote! {
            fn #name(&self, item: &#target, description: &mut #runtime::Description) {
                #runtime::Matcher::<#target>::#delegate(&self.#field, item, description);
            }
        },
    }
}

/// Field access identifier; keywords need the raw form (`item.r#type`).
fn field_ident(name: &str) -> Ident {
    if syn::parse_str::<Ident>(name).is_ok() {
        Ident::new(name, Span::call_site())
    } else {
        Ident::new_raw(name, Span::call_site())
    }
}
