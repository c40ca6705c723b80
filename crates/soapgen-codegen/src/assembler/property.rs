use super::{Assembler, generation_error};
use crate::bounds::ArrayBoundsCalculator;
use crate::normalizer::property_type;
use crate::{AssemblerError, AssemblerResult, Context};
use soapgen_core::{
    ClassModel, DocBlock, ModelResult, Property, PropertyAssemblerOptions, PropertyModel,
};
use tracing::debug;

/// Generates the field backing one schema property
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyAssembler {
    options: PropertyAssemblerOptions,
}

impl PropertyAssembler {
    pub fn new(options: PropertyAssemblerOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &PropertyAssemblerOptions {
        &self.options
    }

    fn apply(&self, class: &mut ClassModel, property: &Property) -> ModelResult<()> {
        let meta = property.meta();
        let declared = property_type(property);
        let nullable = meta.is_nullable || self.options.optional_value;

        let documented = if meta.is_list {
            let bounds = ArrayBoundsCalculator::new().calculate(meta);
            format!("array{}", bounds.generic_arguments(&declared))
        } else {
            declared.clone()
        };
        let hinted = if meta.is_list { "array".to_string() } else { declared };

        let doc_block = self.options.doc_blocks.then(|| {
            let var = if nullable {
                format!("null | {documented}")
            } else {
                documented
            };
            DocBlock::new()
                .with_short_description(meta.docs.clone().unwrap_or_default())
                .with_tag("var", var)
        });
        let type_hint = self.options.type_hints.then(|| {
            if nullable {
                format!("?{hinted}")
            } else {
                hinted
            }
        });

        class.add_property(
            PropertyModel::new(property.name())
                .with_visibility(self.options.visibility)
                .with_type_hint(type_hint)
                .with_default_value(nullable.then(|| "null".to_string()))
                .with_doc_block(doc_block),
        )
    }
}

impl Assembler for PropertyAssembler {
    fn name(&self) -> &'static str {
        "PropertyAssembler"
    }

    fn can_assemble(&self, context: &Context<'_>) -> bool {
        matches!(context, Context::Property(_))
    }

    fn assemble(&self, context: &mut Context<'_>) -> AssemblerResult<()> {
        let kind = context.kind();
        let Context::Property(ctx) = context else {
            return Err(AssemblerError::mismatch(self.name(), "PropertyContext", kind));
        };

        let fqcn = ctx.class.fqcn();
        self.apply(ctx.class, ctx.property)
            .map_err(generation_error(self.name(), &fqcn, ctx.property.name()))?;

        debug!(class = %fqcn, property = %ctx.property.name(), "generated property");
        Ok(())
    }
}
