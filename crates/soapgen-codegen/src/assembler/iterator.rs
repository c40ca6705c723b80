use super::{Assembler, InterfaceAssembler, generation_error};
use crate::bounds::ArrayBoundsCalculator;
use crate::normalizer::property_type;
use crate::runtime::{ARRAY_ITERATOR, ITERATOR_AGGREGATE};
use crate::{AssemblerError, AssemblerResult, Context};
use soapgen_core::{ClassModel, DocBlock, MethodModel, ModelResult, Property};
use tracing::debug;

const METHOD: &str = "getIterator";

/// Makes a type iterable over its first property
#[derive(Debug, Clone, Copy, Default)]
pub struct IteratorAssembler;

impl IteratorAssembler {
    pub fn new() -> Self {
        Self
    }

    fn apply(&self, class: &mut ClassModel, property: &Property) -> ModelResult<()> {
        let item_type = property_type(property);
        let bounds = ArrayBoundsCalculator::new().calculate(property.meta());
        let generics = bounds.generic_arguments(&item_type);

        class.add_method(
            MethodModel::new(METHOD)
                .with_return_type(ARRAY_ITERATOR)
                .with_body(format!(
                    "return new \\{ARRAY_ITERATOR}($this->{});",
                    property.name()
                ))
                .with_doc_block(
                    DocBlock::new()
                        .with_tag("return", format!("\\{ARRAY_ITERATOR}|{item_type}[]"))
                        .with_tag("phpstan-return", format!("\\{ARRAY_ITERATOR}{generics}"))
                        .with_tag("psalm-return", format!("\\{ARRAY_ITERATOR}{generics}")),
                ),
        )?;

        class.set_doc_block(
            DocBlock::new()
                .with_tag("phpstan-implements", format!("\\{ITERATOR_AGGREGATE}{generics}"))
                .with_tag("psalm-implements", format!("\\{ITERATOR_AGGREGATE}{generics}")),
        );
        Ok(())
    }
}

impl Assembler for IteratorAssembler {
    fn name(&self) -> &'static str {
        "IteratorAssembler"
    }

    fn can_assemble(&self, context: &Context<'_>) -> bool {
        matches!(context, Context::Type(_))
    }

    fn assemble(&self, context: &mut Context<'_>) -> AssemblerResult<()> {
        let kind = context.kind();
        let Context::Type(ctx) = context else {
            return Err(AssemblerError::mismatch(self.name(), "TypeContext", kind));
        };

        InterfaceAssembler::new(ITERATOR_AGGREGATE).implement(ctx.class)?;

        let fqcn = ctx.class.fqcn();
        let Some(first) = ctx.ty.first_property() else {
            debug!(class = %fqcn, "type has no properties, skipping {METHOD}");
            return Ok(());
        };

        self.apply(ctx.class, first)
            .map_err(generation_error(self.name(), &fqcn, METHOD))?;

        debug!(class = %fqcn, property = %first.name(), "generated {METHOD}");
        Ok(())
    }
}

#[cfg(test)]
#[path = "iterator/iterator_tests.rs"]
mod iterator_tests;
