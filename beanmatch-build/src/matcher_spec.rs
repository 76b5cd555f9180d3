//! The language-neutral model of a matcher before it is rendered.

use crate::descriptor::TypeDescriptor;
use crate::extractor::BeanProperty;
use crate::naming::{MethodNaming, to_snake_case};
use crate::provenance::{DEFAULT_GENERATOR_NAME, Provenance};

const MATCHER_POSTFIX: &str = "Matcher";
const REGISTRY_FIELD_NAME: &str = "bean_property_matcher";
const CONSTRUCTOR_NAME: &str = "new";
const MATCHER_PARAMETER: &str = "matcher";
const FILE_EXTENSION: &str = "rs";

/// Everything needed to render one matcher file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatcherSpec {
    pub target_type: TypeDescriptor,
    pub properties: Vec<BeanProperty>,
    /// `<Type>Matcher`
    pub generated_class_name: String,
    /// Always the namespace of `target_type`.
    pub package_name: String,
    pub file_name: String,
    pub naming: MethodNaming,
    pub registry_field: RegistryFieldSpec,
    pub constructor: ConstructorSpec,
    pub property_methods: Vec<PropertyMethodSpec>,
    pub protocol_methods: Vec<ProtocolMethodSpec>,
    pub factory: FactoryMethodSpec,
    pub markers: Vec<ProvenanceMarker>,
}

impl MatcherSpec {
    pub fn provenance(&self) -> Provenance {
        let mut generated_by = String::new();
        let mut based_on = String::new();
        for marker in &self.markers {
            match marker {
                ProvenanceMarker::GeneratedBy(name) => generated_by.clone_from(name),
                ProvenanceMarker::BasedOn(name) => based_on.clone_from(name),
            }
        }
        Provenance::new(generated_by, based_on)
    }
}

/// The private registry field, `BeanPropertyMatcher<Target>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryFieldSpec {
    pub name: String,
    pub target_type: String,
}

/// Parameterless constructor initialising the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstructorSpec {
    pub name: String,
}

/// `with_<property>(matcher) -> Self`: registers the matcher, returns `self`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyMethodSpec {
    pub method_name: String,
    pub property: BeanProperty,
    pub parameter: String,
}

/// The three operations of the type-safe matcher protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProtocolMethod {
    DescribeTo,
    MatchesSafely,
    DescribeMismatchSafely,
}

impl ProtocolMethod {
    pub const ALL: [ProtocolMethod; 3] = [
        ProtocolMethod::DescribeTo,
        ProtocolMethod::MatchesSafely,
        ProtocolMethod::DescribeMismatchSafely,
    ];

    pub fn method_name(self) -> &'static str {
        match self {
            ProtocolMethod::DescribeTo => "describe_to",
            ProtocolMethod::MatchesSafely => "matches_safely",
            ProtocolMethod::DescribeMismatchSafely => "describe_mismatch_safely",
        }
    }

    /// The registry operation the method forwards to.
    pub fn delegate(self) -> &'static str {
        match self {
            ProtocolMethod::DescribeTo => "describe_to",
            ProtocolMethod::MatchesSafely => "matches",
            ProtocolMethod::DescribeMismatchSafely => "describe_mismatch",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtocolMethodSpec {
    pub kind: ProtocolMethod,
    pub delegate_field: String,
}

/// Free function returning a fresh matcher, the entry point for test code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactoryMethodSpec {
    pub name: String,
    pub returns: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProvenanceMarker {
    GeneratedBy(String),
    BasedOn(String),
}

/// Derives a [`MatcherSpec`] from a type and its properties.
#[derive(Debug, Clone)]
pub struct MatcherSpecBuilder {
    naming: MethodNaming,
    generator_name: String,
}

impl MatcherSpecBuilder {
    pub fn new() -> Self {
        Self {
            naming: MethodNaming::default(),
            generator_name: DEFAULT_GENERATOR_NAME.to_string(),
        }
    }

    pub fn naming(mut self, naming: MethodNaming) -> Self {
        self.naming = naming;
        self
    }

    pub fn generator_name(mut self, name: impl Into<String>) -> Self {
        self.generator_name = name.into();
        self
    }

    pub fn build_spec(&self, ty: &TypeDescriptor, properties: Vec<BeanProperty>) -> MatcherSpec {
        let generated_class_name = format!("{}{MATCHER_POSTFIX}", ty.simple_name());

        let property_methods = properties
            .iter()
            .map(|property| PropertyMethodSpec {
                method_name: self.naming.property_method(property.name()),
                property: property.clone(),
                parameter: MATCHER_PARAMETER.to_string(),
            })
            .collect();

        let protocol_methods = ProtocolMethod::ALL
            .into_iter()
            .map(|kind| ProtocolMethodSpec {
                kind,
                delegate_field: REGISTRY_FIELD_NAME.to_string(),
            })
            .collect();

        MatcherSpec {
            target_type: ty.clone(),
            properties,
            file_name: format!("{}.{FILE_EXTENSION}", to_snake_case(&generated_class_name)),
            package_name: ty.namespace(),
            naming: self.naming,
            registry_field: RegistryFieldSpec {
                name: REGISTRY_FIELD_NAME.to_string(),
                target_type: ty.simple_name().to_string(),
            },
            constructor: ConstructorSpec {
                name: CONSTRUCTOR_NAME.to_string(),
            },
            property_methods,
            protocol_methods,
            factory: FactoryMethodSpec {
                name: self.naming.factory_method(ty.simple_name()),
                returns: generated_class_name.clone(),
            },
            markers: vec![
                ProvenanceMarker::GeneratedBy(self.generator_name.clone()),
                ProvenanceMarker::BasedOn(ty.qualified_name()),
            ],
            generated_class_name,
        }
    }
}

impl Default for MatcherSpecBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::ModulePath;

    fn pojo() -> TypeDescriptor {
        TypeDescriptor::new("SimplePojo", ModulePath::parse("crate::pojos"))
    }

    fn props(names: &[&str]) -> Vec<BeanProperty> {
        names.iter().map(|name| BeanProperty::new(*name)).collect()
    }

    fn method_names(spec: &MatcherSpec) -> Vec<&str> {
        spec.property_methods.iter().map(|m| m.method_name.as_str()).collect()
    }

    #[test]
    fn test_simple_pojo_spec() {
        let spec = MatcherSpecBuilder::new().build_spec(&pojo(), props(&["simple_prop"]));

        assert_eq!(spec.generated_class_name, "SimplePojoMatcher");
        assert_eq!(spec.package_name, "crate::pojos");
        assert_eq!(spec.package_name, spec.target_type.namespace());
        assert_eq!(spec.file_name, "simple_pojo_matcher.rs");
        assert_eq!(method_names(&spec), vec!["with_simple_prop"]);
        assert_eq!(spec.property_methods[0].parameter, "matcher");
        assert_eq!(spec.constructor.name, "new");
        assert_eq!(spec.registry_field.target_type, "SimplePojo");
        assert_eq!(spec.factory.name, "is_simple_pojo");
        assert_eq!(spec.factory.returns, "SimplePojoMatcher");
        assert_eq!(
            spec.markers,
            vec![
                ProvenanceMarker::GeneratedBy(DEFAULT_GENERATOR_NAME.to_string()),
                ProvenanceMarker::BasedOn("crate::pojos::SimplePojo".to_string()),
            ]
        );
    }

    #[test]
    fn test_one_method_per_property_in_any_order() {
        let builder = MatcherSpecBuilder::new();
        let forward = builder.build_spec(&pojo(), props(&["id", "name", "tags"]));
        let backward = builder.build_spec(&pojo(), props(&["tags", "name", "id"]));

        let mut a = method_names(&forward);
        let mut b = method_names(&backward);
        a.sort_unstable();
        b.sort_unstable();
        assert_eq!(a, vec!["with_id", "with_name", "with_tags"]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_fixed_members_without_properties() {
        let spec = MatcherSpecBuilder::new().build_spec(&pojo(), Vec::new());

        assert!(spec.property_methods.is_empty());
        let kinds: Vec<_> = spec.protocol_methods.iter().map(|m| m.kind).collect();
        assert_eq!(kinds, ProtocolMethod::ALL);
        assert!(spec.protocol_methods.iter().all(|m| m.delegate_field == spec.registry_field.name));
        assert_eq!(spec.factory.name, "is_simple_pojo");
    }

    #[test]
    fn test_camel_naming() {
        let spec = MatcherSpecBuilder::new()
            .naming(MethodNaming::Camel)
            .generator_name("custom-gen")
            .build_spec(&pojo(), props(&["id", "simpleProp", "URL"]));

        assert_eq!(method_names(&spec), vec!["withId", "withSimpleProp", "withURL"]);
        assert_eq!(spec.factory.name, "isSimplePojo");
        assert_eq!(spec.provenance(), Provenance::new("custom-gen", "crate::pojos::SimplePojo"));
    }
}
