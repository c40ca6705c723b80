//! Client factory generation.
//!
//! The factory is a standalone class wiring the runtime engine, the class
//! map and the event dispatching caller into a ready-to-use client. It is
//! generated from naming information only, so it is not an assembler.

use crate::assembler::generation_error;
use crate::context::{ClientFactoryContext, Context};
use crate::runtime::{
    DEFAULT_ENGINE_FACTORY, ENCODER_REGISTRY, ENGINE_CALLER, ENGINE_OPTIONS, EVENT_DISPATCHER,
    EVENT_DISPATCHING_CALLER,
};
use crate::{AssemblerError, AssemblerResult};
use soapgen_core::{
    ClassModel, DocBlock, MethodModel, ModelError, ModelResult, ParameterModel, is_valid_identifier,
};
use tracing::info;

const GENERATOR: &str = "ClientFactoryGenerator";
const METHOD: &str = "factory";

const BODY_TEMPLATE: &str = "$engine = DefaultEngineFactory::create(
    EngineOptions::defaults($wsdl)
        ->withEncoderRegistry(
            EncoderRegistry::default()->addClassMapCollection(
                {classmap}::getCollection()
            )
        )
        // If you want to enable WSDL caching:
        // ->withCache()
        // If you want to use Alternate HTTP settings:
        // ->withWsdlLoader()
        // ->withTransport()
        // If you want specific SOAP setting:
        // ->withWsdlParserContext()
        // ->withPreferredSoapVersion()
);

$eventDispatcher = new EventDispatcher();
$caller = new EventDispatchingCaller(new EngineCaller($engine), $eventDispatcher);

return new {client}($caller);";

/// Builds the `<Client>Factory` class
#[derive(Debug, Clone, Copy, Default)]
pub struct ClientFactoryGenerator;

impl ClientFactoryGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Generate the factory class from a client factory context
    ///
    /// Any other context variant is rejected.
    pub fn generate(&self, context: &Context<'_>) -> AssemblerResult<ClassModel> {
        let Context::ClientFactory(factory) = context else {
            return Err(AssemblerError::mismatch(
                GENERATOR,
                "ClientFactoryContext",
                context.kind(),
            ));
        };

        let name = factory.factory_name();
        let fqcn = if factory.client_namespace.is_empty() {
            name.clone()
        } else {
            format!("{}\\{name}", factory.client_namespace)
        };

        let class = build(factory).map_err(generation_error(GENERATOR, &fqcn, METHOD))?;
        info!(class = %fqcn, client = %factory.client_fqcn(), "generated client factory");
        Ok(class)
    }
}

fn ensure_class_name(name: &str) -> ModelResult<()> {
    if is_valid_identifier(name) {
        Ok(())
    } else {
        Err(ModelError::invalid_identifier("class", name))
    }
}

fn build(factory: &ClientFactoryContext) -> ModelResult<ClassModel> {
    ensure_class_name(&factory.client_name)?;
    ensure_class_name(&factory.classmap_name)?;

    let client_fqcn = factory.client_fqcn();
    let classmap_fqcn = factory.classmap_fqcn();

    let mut class = ClassModel::new(factory.factory_name(), factory.client_namespace.as_str());
    for import in [
        client_fqcn.as_str(),
        classmap_fqcn.as_str(),
        EVENT_DISPATCHER,
        DEFAULT_ENGINE_FACTORY,
        ENGINE_OPTIONS,
        EVENT_DISPATCHING_CALLER,
        ENGINE_CALLER,
        ENCODER_REGISTRY,
    ] {
        if import.contains('\\') {
            class.add_use(import);
        }
    }

    let body = BODY_TEMPLATE
        .replace("{classmap}", &factory.classmap_name)
        .replace("{client}", &factory.client_name);

    class.add_method(
        MethodModel::new(METHOD)
            .with_static(true)
            .with_parameter(ParameterModel::new("wsdl", Some("string".to_string())))
            .with_return_type(client_fqcn)
            .with_body(body)
            .with_doc_block(DocBlock::new().with_short_description(
                "This factory can be used as a starting point to create your own specialized factory. Feel free to modify.",
            )),
    )?;
    Ok(class)
}
