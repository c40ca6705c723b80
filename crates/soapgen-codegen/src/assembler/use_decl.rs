use super::{Assembler, generation_error};
use crate::normalizer::split_fqcn;
use crate::{AssemblerError, AssemblerResult, Context, ContextKind};
use soapgen_core::{ClassModel, ModelResult, NAMESPACE_SEPARATOR};
use tracing::{debug, trace};

/// Adds an import to a type class
///
/// Names in the global namespace, names already imported and names living in
/// the class's own namespace are skipped. An alias forces the import even for
/// the class's own namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UseAssembler {
    name: String,
    alias: Option<String>,
}

impl UseAssembler {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name
                .into()
                .trim_start_matches(NAMESPACE_SEPARATOR)
                .to_string(),
            alias: None,
        }
    }

    pub fn with_alias(name: impl Into<String>, alias: impl Into<String>) -> Self {
        Self {
            alias: Some(alias.into()),
            ..Self::new(name)
        }
    }

    pub fn import(&self) -> &str {
        &self.name
    }

    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    /// Import into `class` directly, for assemblers that already hold it
    pub(super) fn import_into(&self, class: &mut ClassModel) -> AssemblerResult<()> {
        let fqcn = class.fqcn();
        self.apply(class)
            .map_err(generation_error(self.name(), &fqcn, &self.name))
    }

    fn apply(&self, class: &mut ClassModel) -> ModelResult<()> {
        let segments = split_fqcn(&self.name)?;
        if segments.len() < 2 {
            debug!(class = %class.fqcn(), import = %self.name, "skipping global namespace import");
            return Ok(());
        }
        if class.has_use(&self.name) {
            return Ok(());
        }

        let namespace = segments[..segments.len() - 1].join("\\");
        if self.alias.is_none() && namespace == class.namespace() {
            return Ok(());
        }

        trace!(class = %class.fqcn(), import = %self.name, alias = ?self.alias, "adding import");
        class.add_use_with_alias(&self.name, self.alias.as_deref());
        Ok(())
    }
}

impl Assembler for UseAssembler {
    fn name(&self) -> &'static str {
        "UseAssembler"
    }

    fn can_assemble(&self, context: &Context<'_>) -> bool {
        matches!(context.kind(), ContextKind::Type | ContextKind::Property)
    }

    fn assemble(&self, context: &mut Context<'_>) -> AssemblerResult<()> {
        let kind = context.kind();
        let class = match context {
            Context::Type(ctx) => &mut *ctx.class,
            Context::Property(ctx) => &mut *ctx.class,
            _ => {
                return Err(AssemblerError::mismatch(
                    self.name(),
                    "TypeContext or PropertyContext",
                    kind,
                ));
            }
        };

        self.import_into(class)
    }
}
