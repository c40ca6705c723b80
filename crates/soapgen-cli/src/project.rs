//! Project file parsing and validation

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use soapgen_core::{GeneratorConfig, NAMESPACE_SEPARATOR, is_valid_identifier};
use std::path::Path;

/// Default project file name
pub const DEFAULT_PROJECT_FILE: &str = "soapgen.toml";

/// soapgen.toml project structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Project {
    #[serde(default)]
    pub generator: GeneratorConfig,

    #[serde(default)]
    pub client: Option<ClientSection>,

    #[serde(default)]
    pub factory: Option<FactorySection>,
}

/// Where the client class is generated
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientSection {
    pub name: String,

    #[serde(default)]
    pub namespace: String,
}

/// Class map the generated factory registers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FactorySection {
    pub classmap_name: String,

    #[serde(default)]
    pub classmap_namespace: String,
}

impl Project {
    /// Load project from a file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read project file: {:?}", path.as_ref()))?;

        Self::from_str(&content)
    }

    /// Parse project from string
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse project file")
    }

    /// Validate the project
    pub fn validate(&self) -> Result<()> {
        if let Some(client) = &self.client {
            if client.name.is_empty() {
                anyhow::bail!("Client name cannot be empty");
            }
            if !is_valid_identifier(&client.name) {
                anyhow::bail!("Invalid client class name: {}", client.name);
            }
            if !is_valid_namespace(&client.namespace) {
                anyhow::bail!("Invalid client namespace: {}", client.namespace);
            }
        }

        if let Some(factory) = &self.factory {
            if self.client.is_none() {
                anyhow::bail!("[factory] requires a [client] section");
            }
            if !is_valid_identifier(&factory.classmap_name) {
                anyhow::bail!("Invalid classmap name: {}", factory.classmap_name);
            }
            if !is_valid_namespace(&factory.classmap_namespace) {
                anyhow::bail!("Invalid classmap namespace: {}", factory.classmap_namespace);
            }
        }

        if let Some(wrapper) = &self.generator.type_assemblers.result_wrapper {
            if wrapper.trim_matches(NAMESPACE_SEPARATOR).is_empty()
                || !is_valid_namespace(wrapper)
            {
                anyhow::bail!("Invalid result wrapper class: {}", wrapper);
            }
        }

        Ok(())
    }
}

/// Check if a namespace is empty or a sequence of identifiers
fn is_valid_namespace(namespace: &str) -> bool {
    let namespace = namespace.trim_matches(NAMESPACE_SEPARATOR);
    namespace.is_empty() || namespace.split(NAMESPACE_SEPARATOR).all(is_valid_identifier)
}

/// Check command implementation
pub fn check(project_path: Option<String>) -> Result<()> {
    let path = project_path.unwrap_or_else(|| DEFAULT_PROJECT_FILE.to_string());

    println!("Checking project: {}", path);

    let project = Project::from_file(&path)?;
    project.validate()?;

    let options = &project.generator.type_assemblers;
    match &project.client {
        Some(client) => println!("✓ Client: {}\\{}", client.namespace, client.name),
        None => println!("✓ Client: taken from metadata"),
    }
    println!("✓ Factory: {}", if project.factory.is_some() { "yes" } else { "no" });
    println!(
        "✓ Type assemblers: iterator={} json_serializable={} result_provider={}",
        options.iterator, options.json_serializable, options.result_provider
    );
    println!("\nProject is valid!");

    Ok(())
}

#[cfg(test)]
#[path = "project/project_tests.rs"]
mod project_tests;
