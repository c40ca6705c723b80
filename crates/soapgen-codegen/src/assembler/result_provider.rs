use super::{Assembler, InterfaceAssembler, UseAssembler, generation_error};
use crate::normalizer::{class_name_from_fqn, property_type};
use crate::runtime::{RESULT_INTERFACE, RESULT_PROVIDER_INTERFACE};
use crate::{AssemblerError, AssemblerResult, Context};
use soapgen_core::{ClassModel, DocBlock, MethodModel, ModelResult, NAMESPACE_SEPARATOR, Property};
use tracing::debug;

const METHOD: &str = "getResult";

/// Exposes the first property of a type as the operation result
///
/// With a wrapper class configured the property value is passed to the
/// wrapper's constructor instead of being returned as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultProviderAssembler {
    wrapper: Option<String>,
}

impl ResultProviderAssembler {
    pub fn new(wrapper: Option<String>) -> Self {
        let wrapper = wrapper
            .map(|w| w.trim_start_matches(NAMESPACE_SEPARATOR).to_string())
            .filter(|w| !w.is_empty());
        Self { wrapper }
    }

    pub fn wrapper(&self) -> Option<&str> {
        self.wrapper.as_deref()
    }

    /// How the wrapper is referenced from inside the generated class
    ///
    /// Imported wrappers use their short name; a wrapper in the global
    /// namespace is never imported and must stay fully qualified.
    fn wrapper_reference(wrapper: &str) -> String {
        if wrapper.contains(NAMESPACE_SEPARATOR) {
            class_name_from_fqn(wrapper).to_string()
        } else {
            format!("{NAMESPACE_SEPARATOR}{wrapper}")
        }
    }

    fn method(&self, property: &Property) -> MethodModel {
        let (body, returned) = match &self.wrapper {
            Some(wrapper) => {
                let reference = Self::wrapper_reference(wrapper);
                (
                    format!("return new {reference}($this->{});", property.name()),
                    reference,
                )
            }
            None => (
                format!("return $this->{};", property.name()),
                format!(
                    "{}|{}",
                    property_type(property),
                    class_name_from_fqn(RESULT_INTERFACE)
                ),
            ),
        };

        MethodModel::new(METHOD)
            .with_return_type(RESULT_INTERFACE)
            .with_body(body)
            .with_doc_block(DocBlock::new().with_tag("return", returned))
    }

    fn apply(&self, class: &mut ClassModel, property: &Property) -> ModelResult<()> {
        class.add_method(self.method(property))
    }
}

impl Assembler for ResultProviderAssembler {
    fn name(&self) -> &'static str {
        "ResultProviderAssembler"
    }

    fn can_assemble(&self, context: &Context<'_>) -> bool {
        matches!(context, Context::Type(_))
    }

    fn assemble(&self, context: &mut Context<'_>) -> AssemblerResult<()> {
        let kind = context.kind();
        let Context::Type(ctx) = context else {
            return Err(AssemblerError::mismatch(self.name(), "TypeContext", kind));
        };

        InterfaceAssembler::new(RESULT_PROVIDER_INTERFACE).implement(ctx.class)?;

        let fqcn = ctx.class.fqcn();
        let Some(first) = ctx.ty.first_property() else {
            debug!(class = %fqcn, "type has no properties, skipping {METHOD}");
            return Ok(());
        };

        let import = self.wrapper.as_deref().unwrap_or(RESULT_INTERFACE);
        UseAssembler::new(import).import_into(ctx.class)?;

        self.apply(ctx.class, first)
            .map_err(generation_error(self.name(), &fqcn, METHOD))?;

        debug!(class = %fqcn, property = %first.name(), "generated {METHOD}");
        Ok(())
    }
}
