//! In-progress class representation shared by the assemblers
//!
//! A [`ClassModel`] is created once per generated class, handed by exclusive
//! reference to every assembler touching that class, and finally rendered to
//! PHP source with [`ClassModel::render`].
//!
//! Members are keyed by name. Adding a member whose name already exists
//! replaces the previous definition in place, so iteration order stays the
//! order in which names were first seen.

use crate::{LINE_FEED, ModelError, ModelResult, NAMESPACE_SEPARATOR};
use indexmap::IndexMap;
use indexmap::map::Values;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

const INDENTATION: &str = "    ";

const BUILTIN_TYPES: &[&str] = &[
    "array", "bool", "callable", "false", "float", "int", "iterable", "mixed", "never", "null",
    "object", "parent", "self", "static", "string", "true", "void",
];

/// Check whether a type name is a target-language builtin
pub fn is_builtin_type(name: &str) -> bool {
    let name = name.strip_prefix('?').unwrap_or(name);
    BUILTIN_TYPES.contains(&name.to_ascii_lowercase().as_str())
}

/// Check whether a name is a valid PHP identifier
pub fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first == '_' || first.is_alphabetic() => {
            chars.all(|c| c == '_' || c.is_alphanumeric())
        }
        _ => false,
    }
}

fn ensure_identifier(kind: &'static str, name: &str) -> ModelResult<()> {
    if is_valid_identifier(name) {
        Ok(())
    } else {
        Err(ModelError::invalid_identifier(kind, name))
    }
}

/// Member access level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Public,
    Protected,
    #[default]
    Private,
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Visibility::Public => write!(f, "public"),
            Visibility::Protected => write!(f, "protected"),
            Visibility::Private => write!(f, "private"),
        }
    }
}

/// A single `@name description` docblock tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocTag {
    pub name: String,
    pub description: String,
}

/// Documentation block attached to a class or member
///
/// Lines are never wrapped, long type names stay on one line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocBlock {
    short_description: Option<String>,
    long_description: Option<String>,
    tags: Vec<DocTag>,
}

impl DocBlock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the summary line, empty text is ignored
    pub fn with_short_description(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        self.short_description = (!text.trim().is_empty()).then_some(text);
        self
    }

    pub fn with_long_description(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        self.long_description = (!text.trim().is_empty()).then_some(text);
        self
    }

    pub fn with_tag(mut self, name: impl Into<String>, description: impl Into<String>) -> Self {
        self.tags.push(DocTag {
            name: name.into(),
            description: description.into(),
        });
        self
    }

    pub fn short_description(&self) -> Option<&str> {
        self.short_description.as_deref()
    }

    pub fn long_description(&self) -> Option<&str> {
        self.long_description.as_deref()
    }

    pub fn tags(&self) -> &[DocTag] {
        &self.tags
    }

    /// Description of the first tag with the given name
    pub fn tag(&self, name: &str) -> Option<&str> {
        self.tags
            .iter()
            .find(|t| t.name == name)
            .map(|t| t.description.as_str())
    }

    pub fn render(&self, indent: &str) -> String {
        let mut sections: Vec<Vec<String>> = Vec::new();
        if let Some(short) = &self.short_description {
            sections.push(short.lines().map(str::to_string).collect());
        }
        if let Some(long) = &self.long_description {
            sections.push(long.lines().map(str::to_string).collect());
        }
        if !self.tags.is_empty() {
            sections.push(
                self.tags
                    .iter()
                    .map(|t| {
                        if t.description.is_empty() {
                            format!("@{}", t.name)
                        } else {
                            format!("@{} {}", t.name, t.description)
                        }
                    })
                    .collect(),
            );
        }

        let mut out = format!("{indent}/**{LINE_FEED}");
        for (i, section) in sections.iter().enumerate() {
            if i > 0 {
                out.push_str(&format!("{indent} *{LINE_FEED}"));
            }
            for line in section {
                if line.is_empty() {
                    out.push_str(&format!("{indent} *{LINE_FEED}"));
                } else {
                    out.push_str(&format!("{indent} * {line}{LINE_FEED}"));
                }
            }
        }
        out.push_str(&format!("{indent} */{LINE_FEED}"));
        out
    }
}

/// A method parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterModel {
    pub name: String,
    pub type_hint: Option<String>,
}

impl ParameterModel {
    pub fn new(name: impl Into<String>, type_hint: Option<String>) -> Self {
        Self {
            name: name.into(),
            type_hint,
        }
    }
}

/// A class field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyModel {
    pub name: String,
    pub visibility: Visibility,
    pub type_hint: Option<String>,
    /// Literal default value, omitted when `None`
    pub default_value: Option<String>,
    pub doc_block: Option<DocBlock>,
}

impl PropertyModel {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            visibility: Visibility::default(),
            type_hint: None,
            default_value: None,
            doc_block: None,
        }
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn with_type_hint(mut self, type_hint: Option<String>) -> Self {
        self.type_hint = type_hint;
        self
    }

    pub fn with_default_value(mut self, value: Option<String>) -> Self {
        self.default_value = value;
        self
    }

    pub fn with_doc_block(mut self, doc_block: Option<DocBlock>) -> Self {
        self.doc_block = doc_block;
        self
    }
}

/// A class method
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodModel {
    pub name: String,
    pub visibility: Visibility,
    pub is_static: bool,
    pub parameters: Vec<ParameterModel>,
    pub return_type: Option<String>,
    pub body: String,
    pub doc_block: Option<DocBlock>,
}

impl MethodModel {
    /// Create a public method with an empty body
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            visibility: Visibility::Public,
            is_static: false,
            parameters: Vec::new(),
            return_type: None,
            body: String::new(),
            doc_block: None,
        }
    }

    pub fn with_static(mut self, is_static: bool) -> Self {
        self.is_static = is_static;
        self
    }

    pub fn with_parameter(mut self, parameter: ParameterModel) -> Self {
        self.parameters.push(parameter);
        self
    }

    pub fn with_return_type(mut self, return_type: impl Into<String>) -> Self {
        self.return_type = Some(return_type.into());
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn with_doc_block(mut self, doc_block: DocBlock) -> Self {
        self.doc_block = Some(doc_block);
        self
    }
}

/// The in-progress representation of one generated class
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassModel {
    name: String,
    namespace: Option<String>,
    /// Imported name -> optional alias
    uses: BTreeMap<String, Option<String>>,
    interfaces: Vec<String>,
    properties: IndexMap<String, PropertyModel>,
    methods: IndexMap<String, MethodModel>,
    doc_block: Option<DocBlock>,
}

impl ClassModel {
    /// Create an empty class; an empty namespace means the global namespace
    pub fn new(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        let namespace = namespace.into();
        let namespace = namespace.trim_matches(NAMESPACE_SEPARATOR).to_string();
        Self {
            name: name.into(),
            namespace: (!namespace.is_empty()).then_some(namespace),
            uses: BTreeMap::new(),
            interfaces: Vec::new(),
            properties: IndexMap::new(),
            methods: IndexMap::new(),
            doc_block: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Namespace of the class, empty for the global namespace
    pub fn namespace(&self) -> &str {
        self.namespace.as_deref().unwrap_or_default()
    }

    /// Fully qualified class name without a leading separator
    pub fn fqcn(&self) -> String {
        match &self.namespace {
            Some(ns) => format!("{ns}{NAMESPACE_SEPARATOR}{}", self.name),
            None => self.name.clone(),
        }
    }

    // Imports

    /// Import a name; existing imports are kept untouched
    pub fn add_use(&mut self, name: &str) {
        self.add_use_with_alias(name, None);
    }

    pub fn add_use_with_alias(&mut self, name: &str, alias: Option<&str>) {
        let name = name.trim_start_matches(NAMESPACE_SEPARATOR);
        self.uses
            .entry(name.to_string())
            .or_insert_with(|| alias.map(str::to_string));
    }

    pub fn has_use(&self, name: &str) -> bool {
        self.uses
            .contains_key(name.trim_start_matches(NAMESPACE_SEPARATOR))
    }

    pub fn uses(&self) -> impl Iterator<Item = &str> {
        self.uses.keys().map(String::as_str)
    }

    // Interfaces

    /// Declare an implemented interface; duplicates are ignored
    pub fn add_interface(&mut self, fqcn: &str) {
        let fqcn = fqcn.trim_start_matches(NAMESPACE_SEPARATOR);
        if !self.interfaces.iter().any(|i| i == fqcn) {
            self.interfaces.push(fqcn.to_string());
        }
    }

    pub fn interfaces(&self) -> &[String] {
        &self.interfaces
    }

    // Properties

    pub fn add_property(&mut self, property: PropertyModel) -> ModelResult<()> {
        ensure_identifier("property", &property.name)?;
        self.properties.insert(property.name.clone(), property);
        Ok(())
    }

    pub fn remove_property(&mut self, name: &str) -> Option<PropertyModel> {
        self.properties.shift_remove(name)
    }

    pub fn property(&self, name: &str) -> Option<&PropertyModel> {
        self.properties.get(name)
    }

    pub fn properties(&self) -> Values<'_, String, PropertyModel> {
        self.properties.values()
    }

    // Methods

    pub fn add_method(&mut self, method: MethodModel) -> ModelResult<()> {
        ensure_identifier("method", &method.name)?;
        for parameter in &method.parameters {
            ensure_identifier("parameter", &parameter.name)?;
        }
        self.methods.insert(method.name.clone(), method);
        Ok(())
    }

    pub fn remove_method(&mut self, name: &str) -> Option<MethodModel> {
        self.methods.shift_remove(name)
    }

    pub fn has_method(&self, name: &str) -> bool {
        self.methods.contains_key(name)
    }

    pub fn method(&self, name: &str) -> Option<&MethodModel> {
        self.methods.get(name)
    }

    pub fn methods(&self) -> Values<'_, String, MethodModel> {
        self.methods.values()
    }

    // Documentation

    pub fn set_doc_block(&mut self, doc_block: DocBlock) {
        self.doc_block = Some(doc_block);
    }

    pub fn doc_block(&self) -> Option<&DocBlock> {
        self.doc_block.as_ref()
    }

    // Rendering

    /// Render the class as PHP source
    pub fn render(&self) -> String {
        let mut out = String::new();

        if let Some(ns) = &self.namespace {
            out.push_str(&format!("namespace {ns};{LINE_FEED}{LINE_FEED}"));
        }

        if !self.uses.is_empty() {
            for (name, alias) in &self.uses {
                match alias {
                    Some(alias) => out.push_str(&format!("use {name} as {alias};{LINE_FEED}")),
                    None => out.push_str(&format!("use {name};{LINE_FEED}")),
                }
            }
            out.push_str(LINE_FEED);
        }

        if let Some(doc) = &self.doc_block {
            out.push_str(&doc.render(""));
        }

        out.push_str(&format!("class {}", self.name));
        if !self.interfaces.is_empty() {
            let names: Vec<String> = self
                .interfaces
                .iter()
                .map(|i| self.class_reference(i))
                .collect();
            out.push_str(&format!(" implements {}", names.join(", ")));
        }
        out.push_str(&format!("{LINE_FEED}{{{LINE_FEED}"));

        let members: Vec<String> = self
            .properties
            .values()
            .map(render_property)
            .chain(self.methods.values().map(render_method))
            .collect();
        out.push_str(&members.join(LINE_FEED));

        out.push_str(&format!("}}{LINE_FEED}"));
        out
    }

    /// Short or alias name when imported, otherwise fully qualified
    fn class_reference(&self, fqcn: &str) -> String {
        match self.uses.get(fqcn) {
            Some(Some(alias)) => alias.clone(),
            Some(None) => fqcn
                .rsplit(NAMESPACE_SEPARATOR)
                .next()
                .unwrap_or(fqcn)
                .to_string(),
            None => format!("{NAMESPACE_SEPARATOR}{fqcn}"),
        }
    }
}

fn render_type(type_hint: &str) -> String {
    let (nullable, name) = match type_hint.strip_prefix('?') {
        Some(inner) => ("?", inner),
        None => ("", type_hint),
    };
    if is_builtin_type(name) {
        format!("{nullable}{name}")
    } else {
        format!(
            "{nullable}{NAMESPACE_SEPARATOR}{}",
            name.trim_start_matches(NAMESPACE_SEPARATOR)
        )
    }
}

fn render_property(property: &PropertyModel) -> String {
    let mut out = String::new();
    if let Some(doc) = &property.doc_block {
        out.push_str(&doc.render(INDENTATION));
    }
    out.push_str(&format!("{INDENTATION}{} ", property.visibility));
    if let Some(hint) = &property.type_hint {
        out.push_str(&format!("{} ", render_type(hint)));
    }
    out.push_str(&format!("${}", property.name));
    if let Some(value) = &property.default_value {
        out.push_str(&format!(" = {value}"));
    }
    out.push_str(&format!(";{LINE_FEED}"));
    out
}

fn render_method(method: &MethodModel) -> String {
    let mut out = String::new();
    if let Some(doc) = &method.doc_block {
        out.push_str(&doc.render(INDENTATION));
    }

    let parameters: Vec<String> = method
        .parameters
        .iter()
        .map(|p| match &p.type_hint {
            Some(hint) => format!("{} ${}", render_type(hint), p.name),
            None => format!("${}", p.name),
        })
        .collect();

    out.push_str(&format!("{INDENTATION}{} ", method.visibility));
    if method.is_static {
        out.push_str("static ");
    }
    out.push_str(&format!(
        "function {}({})",
        method.name,
        parameters.join(", ")
    ));
    if let Some(return_type) = &method.return_type {
        out.push_str(&format!(": {}", render_type(return_type)));
    }
    out.push_str(&format!("{LINE_FEED}{INDENTATION}{{{LINE_FEED}"));
    for line in method.body.lines() {
        if line.is_empty() {
            out.push_str(LINE_FEED);
        } else {
            out.push_str(&format!("{INDENTATION}{INDENTATION}{line}{LINE_FEED}"));
        }
    }
    out.push_str(&format!("{INDENTATION}}}{LINE_FEED}"));
    out
}
