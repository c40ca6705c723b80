use super::{Assembler, UseAssembler};
use crate::{AssemblerError, AssemblerResult, Context, ContextKind};
use soapgen_core::{ClassModel, NAMESPACE_SEPARATOR};
use tracing::debug;

/// Declares that a type class implements an interface
///
/// The interface is imported first, then added to the implements list with
/// set semantics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceAssembler {
    interface: String,
}

impl InterfaceAssembler {
    pub fn new(interface: impl Into<String>) -> Self {
        Self {
            interface: interface
                .into()
                .trim_start_matches(NAMESPACE_SEPARATOR)
                .to_string(),
        }
    }

    pub fn interface(&self) -> &str {
        &self.interface
    }

    /// Import and implement the interface on `class`
    pub(super) fn implement(&self, class: &mut ClassModel) -> AssemblerResult<()> {
        UseAssembler::new(self.interface.as_str()).import_into(class)?;

        if !class.interfaces().iter().any(|i| *i == self.interface) {
            debug!(class = %class.fqcn(), interface = %self.interface, "adding interface");
            class.add_interface(&self.interface);
        }
        Ok(())
    }
}

impl Assembler for InterfaceAssembler {
    fn name(&self) -> &'static str {
        "InterfaceAssembler"
    }

    fn can_assemble(&self, context: &Context<'_>) -> bool {
        context.kind() == ContextKind::Type
    }

    fn assemble(&self, context: &mut Context<'_>) -> AssemblerResult<()> {
        let kind = context.kind();
        let Context::Type(ctx) = context else {
            return Err(AssemblerError::mismatch(self.name(), "TypeContext", kind));
        };

        self.implement(ctx.class)
    }
}
