use super::{Assembler, InterfaceAssembler, generation_error};
use crate::runtime::JSON_SERIALIZABLE;
use crate::{AssemblerError, AssemblerResult, Context};
use soapgen_core::{ClassModel, LINE_FEED, MethodModel, ModelResult, Type};
use tracing::debug;

const METHOD: &str = "jsonSerialize";
const INDENTATION: &str = "    ";

/// Serializes every property of a type, in declaration order
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonSerializableAssembler;

impl JsonSerializableAssembler {
    pub fn new() -> Self {
        Self
    }

    fn apply(&self, class: &mut ClassModel, ty: &Type) -> ModelResult<()> {
        let mut lines = vec!["return [".to_string()];
        lines.extend(
            ty.properties()
                .iter()
                .map(|p| format!("{INDENTATION}'{0}' => $this->{0},", p.name())),
        );
        lines.push("];".to_string());

        class.add_method(
            MethodModel::new(METHOD)
                .with_return_type("array")
                .with_body(lines.join(LINE_FEED)),
        )
    }
}

impl Assembler for JsonSerializableAssembler {
    fn name(&self) -> &'static str {
        "JsonSerializableAssembler"
    }

    fn can_assemble(&self, context: &Context<'_>) -> bool {
        matches!(context, Context::Type(_))
    }

    fn assemble(&self, context: &mut Context<'_>) -> AssemblerResult<()> {
        let kind = context.kind();
        let Context::Type(ctx) = context else {
            return Err(AssemblerError::mismatch(self.name(), "TypeContext", kind));
        };

        InterfaceAssembler::new(JSON_SERIALIZABLE).implement(ctx.class)?;

        let fqcn = ctx.class.fqcn();
        self.apply(ctx.class, ctx.ty)
            .map_err(generation_error(self.name(), &fqcn, METHOD))?;

        debug!(class = %fqcn, properties = ctx.ty.properties().len(), "generated {METHOD}");
        Ok(())
    }
}

#[cfg(test)]
#[path = "json_serializable/json_serializable_tests.rs"]
mod json_serializable_tests;
