//! Generator configuration types

use crate::Visibility;
use serde::{Deserialize, Serialize};

/// Options controlling how the property assembler emits fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyAssemblerOptions {
    /// Access level of generated fields
    #[serde(default)]
    pub visibility: Visibility,

    /// Emit a native type annotation on each field
    #[serde(default = "default_true")]
    pub type_hints: bool,

    /// Emit documentation blocks at all
    #[serde(default = "default_true")]
    pub doc_blocks: bool,

    /// Give every field an explicit `null` default
    #[serde(default)]
    pub optional_value: bool,
}

fn default_true() -> bool {
    true
}

impl Default for PropertyAssemblerOptions {
    fn default() -> Self {
        Self {
            visibility: Visibility::Private,
            type_hints: true,
            doc_blocks: true,
            optional_value: false,
        }
    }
}

impl PropertyAssemblerOptions {
    /// Create the default options
    pub fn create() -> Self {
        Self::default()
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn with_type_hints(mut self, type_hints: bool) -> Self {
        self.type_hints = type_hints;
        self
    }

    pub fn with_doc_blocks(mut self, doc_blocks: bool) -> Self {
        self.doc_blocks = doc_blocks;
        self
    }

    pub fn with_optional_value(mut self, optional_value: bool) -> Self {
        self.optional_value = optional_value;
        self
    }
}

/// Which type-level assemblers run for every generated type
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeAssemblerOptions {
    /// Implement `IteratorAggregate` over the first property
    #[serde(default)]
    pub iterator: bool,

    /// Implement `JsonSerializable` over all properties
    #[serde(default)]
    pub json_serializable: bool,

    /// Implement the result provider capability over the first property
    #[serde(default)]
    pub result_provider: bool,

    /// Class wrapping the provided result, fully qualified
    #[serde(default)]
    pub result_wrapper: Option<String>,
}

/// Complete generator configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    #[serde(default)]
    pub property: PropertyAssemblerOptions,

    #[serde(default)]
    pub type_assemblers: TypeAssemblerOptions,
}

impl GeneratorConfig {
    /// Create a new default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create configuration from JSON bytes
    pub fn from_json(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        if bytes.is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_slice(bytes)
    }
}
