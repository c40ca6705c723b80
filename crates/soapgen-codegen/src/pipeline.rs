//! Assembler pipelines and per-class generators.
//!
//! A [`Pipeline`] runs an ordered list of assemblers against one context,
//! skipping the ones that do not accept it. [`TypeGenerator`] and
//! [`ClientGenerator`] build complete class models from metadata using
//! pipelines configured from [`GeneratorConfig`].

use crate::assembler::{
    Assembler, ClientConstructorAssembler, ClientMethodAssembler, IteratorAssembler,
    JsonSerializableAssembler, PropertyAssembler, ResultProviderAssembler, assemble_if_supported,
};
use crate::normalizer::normalize_class_name;
use crate::{AssemblerResult, Context};
use soapgen_core::{ClassModel, Client, GeneratorConfig, Type};
use std::fmt;
use tracing::{debug, info};

/// Ordered list of assemblers applied to a context
#[derive(Default)]
pub struct Pipeline {
    assemblers: Vec<Box<dyn Assembler>>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an assembler, builder style
    pub fn with(mut self, assembler: impl Assembler + 'static) -> Self {
        self.push(Box::new(assembler));
        self
    }

    pub fn push(&mut self, assembler: Box<dyn Assembler>) {
        self.assemblers.push(assembler);
    }

    pub fn len(&self) -> usize {
        self.assemblers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assemblers.is_empty()
    }

    /// Names of the assemblers, in run order
    pub fn names(&self) -> Vec<&'static str> {
        self.assemblers.iter().map(|a| a.name()).collect()
    }

    /// Apply every assembler accepting the context, in order
    ///
    /// Stops at the first failure. Returns how many assemblers ran.
    pub fn run(&self, context: &mut Context<'_>) -> AssemblerResult<usize> {
        let mut applied = 0;
        for assembler in &self.assemblers {
            if assemble_if_supported(assembler.as_ref(), context)? {
                applied += 1;
            } else {
                debug!(assembler = assembler.name(), kind = %context.kind(), "skipping assembler");
            }
        }
        Ok(applied)
    }
}

impl fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field("assemblers", &self.names())
            .finish()
    }
}

/// Builds one class per schema type
#[derive(Debug)]
pub struct TypeGenerator {
    type_pipeline: Pipeline,
    property_pipeline: Pipeline,
}

impl TypeGenerator {
    pub fn from_config(config: &GeneratorConfig) -> Self {
        let options = &config.type_assemblers;

        let mut type_pipeline = Pipeline::new();
        if options.iterator {
            type_pipeline.push(Box::new(IteratorAssembler::new()));
        }
        if options.json_serializable {
            type_pipeline.push(Box::new(JsonSerializableAssembler::new()));
        }
        if options.result_provider {
            type_pipeline.push(Box::new(ResultProviderAssembler::new(
                options.result_wrapper.clone(),
            )));
        }

        Self {
            type_pipeline,
            property_pipeline: Pipeline::new()
                .with(PropertyAssembler::new(config.property.clone())),
        }
    }

    pub fn type_pipeline(&self) -> &Pipeline {
        &self.type_pipeline
    }

    pub fn generate(&self, ty: &Type) -> AssemblerResult<ClassModel> {
        let mut class = ClassModel::new(normalize_class_name(ty.name()), ty.namespace());

        let mut context = Context::for_type(&mut class, ty);
        self.type_pipeline.run(&mut context)?;

        for property in ty.properties() {
            let mut context = Context::property(&mut class, ty, property);
            self.property_pipeline.run(&mut context)?;
        }

        info!(
            class = %class.fqcn(),
            properties = class.properties().len(),
            methods = class.methods().len(),
            "generated type"
        );
        Ok(class)
    }
}

impl Default for TypeGenerator {
    fn default() -> Self {
        Self::from_config(&GeneratorConfig::default())
    }
}

/// Builds the client class exposing every operation
#[derive(Debug)]
pub struct ClientGenerator {
    client_pipeline: Pipeline,
    method_pipeline: Pipeline,
}

impl ClientGenerator {
    pub fn new() -> Self {
        Self {
            client_pipeline: Pipeline::new().with(ClientConstructorAssembler::new()),
            method_pipeline: Pipeline::new().with(ClientMethodAssembler::new()),
        }
    }

    pub fn generate(&self, client: &Client) -> AssemblerResult<ClassModel> {
        let mut class = ClassModel::new(client.name.as_str(), client.namespace.as_str());

        let mut context = Context::client(&mut class);
        self.client_pipeline.run(&mut context)?;

        for method in &client.methods {
            let mut context = Context::client_method(&mut class, method);
            self.method_pipeline.run(&mut context)?;
        }

        info!(
            class = %class.fqcn(),
            methods = class.methods().len(),
            "generated client"
        );
        Ok(class)
    }
}

impl Default for ClientGenerator {
    fn default() -> Self {
        Self::new()
    }
}
