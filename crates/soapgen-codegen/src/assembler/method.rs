use super::{Assembler, generation_error};
use crate::normalizer::{ImportStyle, normalize_method_name, resolve_type_name};
use crate::runtime::{
    MIXED_RESULT, MULTI_ARGUMENT_PARAMETER, MULTI_ARGUMENT_REQUEST, REQUEST_INTERFACE,
    RESULT_INTERFACE, SOAP_EXCEPTION,
};
use crate::{AssemblerError, AssemblerResult, Context};
use soapgen_core::{
    ClassModel, ClientMethod, DocBlock, LINE_FEED, MethodModel, ModelError, ModelResult,
    NAMESPACE_SEPARATOR, Parameter, ParameterModel, ReturnType, is_valid_identifier,
};
use tracing::debug;

/// How the operation's arguments reach the transport
///
/// Decided once per operation; signature, call expression and docblock are
/// all derived from the same value.
#[derive(Debug, Clone, Copy)]
enum ArgumentShape<'m> {
    None,
    Single(&'m Parameter),
    Multi(&'m [Parameter]),
}

impl<'m> ArgumentShape<'m> {
    fn of(method: &'m ClientMethod) -> Self {
        match method.parameters.as_slice() {
            [] => ArgumentShape::None,
            [single] => ArgumentShape::Single(single),
            all => ArgumentShape::Multi(all),
        }
    }

    fn signature(&self) -> Option<ParameterModel> {
        match self {
            ArgumentShape::None => None,
            ArgumentShape::Single(param) => Some(ParameterModel::new(
                param.name.as_str(),
                Some(param.type_name.clone()),
            )),
            ArgumentShape::Multi(_) => Some(ParameterModel::new(
                MULTI_ARGUMENT_PARAMETER,
                Some(MULTI_ARGUMENT_REQUEST.to_string()),
            )),
        }
    }

    fn call_argument(&self, class: &mut ClassModel) -> ModelResult<String> {
        Ok(match self {
            ArgumentShape::None => format!(
                "new {}([])",
                resolve_type_name(class, MULTI_ARGUMENT_REQUEST, ImportStyle::Plain)?
            ),
            ArgumentShape::Single(param) => format!("${}", param.name),
            ArgumentShape::Multi(_) => format!("${MULTI_ARGUMENT_PARAMETER}"),
        })
    }
}

/// Generates one client method per service operation
///
/// Zero arguments send an empty multi-argument request, one argument is
/// passed through as-is, more arguments are aggregated into a single
/// multi-argument request parameter.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClientMethodAssembler;

impl ClientMethodAssembler {
    pub fn new() -> Self {
        Self
    }

    fn apply(&self, class: &mut ClassModel, method: &ClientMethod, name: &str) -> ModelResult<()> {
        // Nothing is imported or replaced until every parameter name is known good
        if let Some(invalid) = method
            .parameters
            .iter()
            .find(|param| !is_valid_identifier(&param.name))
        {
            return Err(ModelError::invalid_identifier("parameter", invalid.name.as_str()));
        }

        let shape = ArgumentShape::of(method);

        let doc_block = match shape {
            ArgumentShape::Multi(params) => multi_argument_doc_block(class, method, params)?,
            ArgumentShape::Single(param) => single_argument_doc_block(class, method, Some(param))?,
            ArgumentShape::None => single_argument_doc_block(class, method, None)?,
        };
        let body = method_body(class, method, &shape)?;

        let mut generated = MethodModel::new(name)
            .with_return_type(signature_return_type(&method.return_type))
            .with_body(body)
            .with_doc_block(doc_block);
        if let Some(parameter) = shape.signature() {
            generated = generated.with_parameter(parameter);
        }

        class.add_method(generated)
    }
}

impl Assembler for ClientMethodAssembler {
    fn name(&self) -> &'static str {
        "ClientMethodAssembler"
    }

    fn can_assemble(&self, context: &Context<'_>) -> bool {
        matches!(context, Context::ClientMethod(_))
    }

    fn assemble(&self, context: &mut Context<'_>) -> AssemblerResult<()> {
        let kind = context.kind();
        let Context::ClientMethod(ctx) = context else {
            return Err(AssemblerError::mismatch(
                self.name(),
                "ClientMethodContext",
                kind,
            ));
        };

        let fqcn = ctx.class.fqcn();
        let name = normalize_method_name(&ctx.method.name)
            .map_err(generation_error(self.name(), &fqcn, &ctx.method.name))?;

        self.apply(ctx.class, ctx.method, &name)
            .map_err(generation_error(self.name(), &fqcn, &name))?;

        debug!(
            class = %fqcn,
            method = %name,
            parameters = ctx.method.parameters_count(),
            "generated client method"
        );
        Ok(())
    }
}

/// Return type used in the method signature and runtime assertion.
fn signature_return_type(return_type: &ReturnType) -> String {
    if return_type.should_generate_as_mixed_result() {
        MIXED_RESULT.to_string()
    } else {
        return_type.type_name.clone()
    }
}

/// Return type used in documentation, importing what it mentions.
fn documented_return_type(class: &mut ClassModel, return_type: &ReturnType) -> ModelResult<String> {
    if return_type.should_generate_as_mixed_result() {
        let wrapper = resolve_type_name(class, MIXED_RESULT, ImportStyle::Plain)?;
        return Ok(format!("{wrapper}<{}>", return_type.type_name));
    }
    resolve_type_name(class, &return_type.type_name, ImportStyle::Prefixed)
}

fn result_and_throws_tags(
    class: &mut ClassModel,
    method: &ClientMethod,
    doc_block: DocBlock,
) -> ModelResult<DocBlock> {
    let result = resolve_type_name(class, RESULT_INTERFACE, ImportStyle::Plain)?;
    let returned = documented_return_type(class, &method.return_type)?;
    let exception = resolve_type_name(class, SOAP_EXCEPTION, ImportStyle::Plain)?;

    Ok(doc_block
        .with_tag("return", format!("{result} & {returned}"))
        .with_tag("throws", exception))
}

fn single_argument_doc_block(
    class: &mut ClassModel,
    method: &ClientMethod,
    param: Option<&Parameter>,
) -> ModelResult<DocBlock> {
    let mut doc_block =
        DocBlock::new().with_short_description(method.docs.clone().unwrap_or_default());

    if let Some(param) = param {
        let request = resolve_type_name(class, REQUEST_INTERFACE, ImportStyle::Plain)?;
        let type_name = resolve_type_name(class, &param.type_name, ImportStyle::Prefixed)?;
        doc_block = doc_block.with_tag("param", format!("{request} & {type_name} ${}", param.name));
    }

    result_and_throws_tags(class, method, doc_block)
}

fn multi_argument_doc_block(
    class: &mut ClassModel,
    method: &ClientMethod,
    params: &[Parameter],
) -> ModelResult<DocBlock> {
    let mut description = vec![format!("MultiArgumentRequest with following params:{LINE_FEED}")];
    description.extend(params.iter().map(|p| format!("{} ${}", p.type_name, p.name)));

    let request = resolve_type_name(class, MULTI_ARGUMENT_REQUEST, ImportStyle::Plain)?;
    let doc_block = DocBlock::new()
        .with_short_description(method.docs.clone().unwrap_or_default())
        .with_long_description(description.join(LINE_FEED))
        .with_tag("param", format!("{request} ${MULTI_ARGUMENT_PARAMETER}"));

    result_and_throws_tags(class, method, doc_block)
}

fn assert_instance_of(fqcn: &str) -> String {
    format!(
        "\\Psl\\Type\\instance_of({NAMESPACE_SEPARATOR}{}::class)->assert($response);",
        fqcn.trim_start_matches(NAMESPACE_SEPARATOR)
    )
}

fn method_body(
    class: &mut ClassModel,
    method: &ClientMethod,
    shape: &ArgumentShape<'_>,
) -> ModelResult<String> {
    let lines = [
        format!(
            "$response = ($this->caller)('{}', {});",
            method.name,
            shape.call_argument(class)?
        ),
        String::new(),
        assert_instance_of(&signature_return_type(&method.return_type)),
        assert_instance_of(RESULT_INTERFACE),
        String::new(),
        "return $response;".to_string(),
    ];
    Ok(lines.join(LINE_FEED))
}
