//! Assembler trait and concrete assemblers
//!
//! An assembler is a stateless generation step. Callers ask first with
//! [`Assembler::can_assemble`] and only then call [`Assembler::assemble`].
//! Handing an assembler the wrong context is still safe: it fails with
//! [`AssemblerError::ContextMismatch`] before touching the class.

mod constructor;
mod interface;
mod iterator;
mod json_serializable;
mod method;
mod property;
mod result_provider;
mod use_decl;

pub use constructor::ClientConstructorAssembler;
pub use interface::InterfaceAssembler;
pub use iterator::IteratorAssembler;
pub use json_serializable::JsonSerializableAssembler;
pub use method::ClientMethodAssembler;
pub use property::PropertyAssembler;
pub use result_provider::ResultProviderAssembler;
pub use use_decl::UseAssembler;

use crate::{AssemblerError, AssemblerResult, Context};
use soapgen_core::ModelError;

/// A single class generation step
///
/// Implementations must be idempotent: running `assemble` twice on the same
/// class leaves it identical to a single run. Members are replaced by name,
/// never appended.
///
/// # Example
///
/// ```rust
/// use soapgen_codegen::{Assembler, ClientConstructorAssembler, Context};
/// use soapgen_core::ClassModel;
///
/// let mut class = ClassModel::new("CalculatorClient", "App\\Client");
/// let mut context = Context::client(&mut class);
///
/// let assembler = ClientConstructorAssembler::new();
/// assert!(assembler.can_assemble(&context));
/// assembler.assemble(&mut context).unwrap();
///
/// assert!(class.has_method("__construct"));
/// ```
pub trait Assembler: Send + Sync {
    /// Name used in error messages and logs
    fn name(&self) -> &'static str;

    /// Check whether this assembler understands the context
    ///
    /// Pure: never mutates anything.
    fn can_assemble(&self, context: &Context<'_>) -> bool;

    /// Apply the generation step to the class carried by the context
    fn assemble(&self, context: &mut Context<'_>) -> AssemblerResult<()>;
}

/// Run `assembler` only when it accepts the context.
pub(crate) fn assemble_if_supported(
    assembler: &dyn Assembler,
    context: &mut Context<'_>,
) -> AssemblerResult<bool> {
    if !assembler.can_assemble(context) {
        return Ok(false);
    }
    assembler.assemble(context)?;
    Ok(true)
}

/// Wrap a model error raised while generating `member` on `class`.
pub(crate) fn generation_error(
    assembler: &'static str,
    class: &str,
    member: &str,
) -> impl FnOnce(ModelError) -> AssemblerError {
    let class = class.to_string();
    let member = member.to_string();
    move |source| AssemblerError::generation(assembler, class, member, source)
}
