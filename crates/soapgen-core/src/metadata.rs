//! Read-only service metadata consumed by the generators
//!
//! The metadata provider resolves the service description into these values
//! before generation starts. Nothing in this crate mutates them: every
//! `with_*` method returns a new value.

use crate::{ModelError, ModelResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Upper occurrence bound of a schema element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaxOccurs {
    /// No upper bound (`maxOccurs="unbounded"`)
    Unbounded,
    /// Fixed upper bound
    #[serde(untagged)]
    Bounded(u32),
}

/// Schema facts attached to a property
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeMeta {
    /// Free-text documentation from the schema
    #[serde(default)]
    pub docs: Option<String>,

    /// Whether the element is nillable
    #[serde(default)]
    pub is_nullable: bool,

    /// Whether the element repeats
    #[serde(default)]
    pub is_list: bool,

    /// Lower occurrence bound
    #[serde(default)]
    pub min_occurs: Option<u32>,

    /// Upper occurrence bound
    #[serde(default)]
    pub max_occurs: Option<MaxOccurs>,
}

impl TypeMeta {
    pub fn with_docs(self, docs: impl Into<String>) -> Self {
        Self {
            docs: Some(docs.into()),
            ..self
        }
    }

    pub fn with_is_nullable(self, is_nullable: bool) -> Self {
        Self {
            is_nullable,
            ..self
        }
    }

    pub fn with_is_list(self, is_list: bool) -> Self {
        Self { is_list, ..self }
    }

    pub fn with_occurs(self, min_occurs: Option<u32>, max_occurs: Option<MaxOccurs>) -> Self {
        Self {
            min_occurs,
            max_occurs,
            ..self
        }
    }
}

/// A property of a generated type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    name: String,

    /// Declared type: a target-language primitive or a type short name
    #[serde(rename = "type")]
    type_name: String,

    /// Namespace the property's type belongs to
    namespace: String,

    #[serde(default)]
    meta: TypeMeta,
}

impl Property {
    /// Create a property without schema facts
    pub fn new(
        name: impl Into<String>,
        type_name: impl Into<String>,
        namespace: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            namespace: namespace.into(),
            meta: TypeMeta::default(),
        }
    }

    pub fn with_meta(self, meta: TypeMeta) -> Self {
        Self { meta, ..self }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn meta(&self) -> &TypeMeta {
        &self.meta
    }
}

#[derive(Deserialize)]
struct TypeDefinition {
    namespace: String,
    name: String,
    #[serde(default)]
    properties: Vec<Property>,
    #[serde(default)]
    xsd_type: Option<String>,
}

impl TryFrom<TypeDefinition> for Type {
    type Error = ModelError;

    fn try_from(def: TypeDefinition) -> ModelResult<Self> {
        let xsd_type = def.xsd_type.unwrap_or_else(|| def.name.clone());
        Type::new(def.namespace, def.name, def.properties, xsd_type)
    }
}

/// A complex type from the service description
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TypeDefinition")]
pub struct Type {
    namespace: String,
    name: String,
    properties: Vec<Property>,
    xsd_type: String,
}

impl Type {
    /// Create a type, rejecting duplicate property names
    pub fn new(
        namespace: impl Into<String>,
        name: impl Into<String>,
        properties: Vec<Property>,
        xsd_type: impl Into<String>,
    ) -> ModelResult<Self> {
        let name = name.into();
        let mut seen = HashSet::new();
        for property in &properties {
            if !seen.insert(property.name()) {
                return Err(ModelError::DuplicateProperty {
                    type_name: name,
                    property: property.name().to_string(),
                });
            }
        }

        Ok(Self {
            namespace: namespace.into(),
            name,
            properties,
            xsd_type: xsd_type.into(),
        })
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Properties in declaration order
    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    pub fn first_property(&self) -> Option<&Property> {
        self.properties.first()
    }

    /// Schema type this type originates from
    pub fn xsd_type(&self) -> &str {
        &self.xsd_type
    }
}

/// A single operation argument
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,

    /// Fully qualified type name or primitive
    #[serde(rename = "type")]
    pub type_name: String,
}

impl Parameter {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
        }
    }
}

/// The declared result of an operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReturnType {
    /// Fully qualified type name or primitive
    #[serde(rename = "type")]
    pub type_name: String,

    /// Set when the schema could not determine a concrete shape
    #[serde(default)]
    pub mixed_result: bool,
}

impl ReturnType {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            mixed_result: false,
        }
    }

    pub fn mixed(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            mixed_result: true,
        }
    }

    pub fn should_generate_as_mixed_result(&self) -> bool {
        self.mixed_result
    }
}

/// An operation exposed by the generated client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientMethod {
    pub name: String,

    #[serde(default)]
    pub parameters: Vec<Parameter>,

    pub return_type: ReturnType,

    #[serde(default)]
    pub docs: Option<String>,
}

impl ClientMethod {
    pub fn new(
        name: impl Into<String>,
        parameters: Vec<Parameter>,
        return_type: ReturnType,
    ) -> Self {
        Self {
            name: name.into(),
            parameters,
            return_type,
            docs: None,
        }
    }

    pub fn with_docs(self, docs: impl Into<String>) -> Self {
        Self {
            docs: Some(docs.into()),
            ..self
        }
    }

    pub fn parameters_count(&self) -> usize {
        self.parameters.len()
    }

    /// More than one argument is aggregated into a single request value
    pub fn should_generate_as_multi_argument_request(&self) -> bool {
        self.parameters.len() > 1
    }
}

/// The client class to generate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    pub name: String,
    pub namespace: String,
    #[serde(default)]
    pub methods: Vec<ClientMethod>,
}

/// Everything one generation run consumes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataDocument {
    #[serde(default)]
    pub types: Vec<Type>,

    #[serde(default)]
    pub client: Option<Client>,
}

impl MetadataDocument {
    /// Parse a metadata document from JSON bytes
    pub fn from_json(bytes: &[u8]) -> ModelResult<Self> {
        if bytes.is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_slice(bytes)?)
    }
}
