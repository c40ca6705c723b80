use super::{Assembler, generation_error};
use crate::normalizer::{ImportStyle, resolve_type_name};
use crate::runtime::CALLER;
use crate::{AssemblerError, AssemblerResult, Context};
use soapgen_core::{
    ClassModel, DocBlock, MethodModel, ModelResult, ParameterModel, PropertyModel, Visibility,
};
use tracing::debug;

const CALLER_PROPERTY: &str = "caller";
const CONSTRUCTOR: &str = "__construct";

/// Gives the client class its call dispatcher
///
/// Adds a private `caller` field and a constructor storing its only argument
/// into it. Both members are rebuilt on every run.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClientConstructorAssembler;

impl ClientConstructorAssembler {
    pub fn new() -> Self {
        Self
    }

    fn apply(&self, class: &mut ClassModel) -> ModelResult<()> {
        let caller = resolve_type_name(class, CALLER, ImportStyle::Plain)?;

        class.add_property(
            PropertyModel::new(CALLER_PROPERTY)
                .with_visibility(Visibility::Private)
                .with_doc_block(Some(DocBlock::new().with_tag("var", caller))),
        )?;

        class.add_method(
            MethodModel::new(CONSTRUCTOR)
                .with_parameter(ParameterModel::new(
                    CALLER_PROPERTY,
                    Some(CALLER.to_string()),
                ))
                .with_body("$this->caller = $caller;"),
        )
    }
}

impl Assembler for ClientConstructorAssembler {
    fn name(&self) -> &'static str {
        "ClientConstructorAssembler"
    }

    fn can_assemble(&self, context: &Context<'_>) -> bool {
        matches!(context, Context::Client(_))
    }

    fn assemble(&self, context: &mut Context<'_>) -> AssemblerResult<()> {
        let kind = context.kind();
        let Context::Client(ctx) = context else {
            return Err(AssemblerError::mismatch(self.name(), "ClientContext", kind));
        };

        let fqcn = ctx.class.fqcn();
        self.apply(ctx.class)
            .map_err(generation_error(self.name(), &fqcn, CONSTRUCTOR))?;

        debug!(class = %fqcn, "generated client constructor");
        Ok(())
    }
}
