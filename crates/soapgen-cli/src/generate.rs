//! Generate command: metadata in, PHP class files out

use crate::project::{DEFAULT_PROJECT_FILE, Project};
use anyhow::{Context as _, Result};
use soapgen_codegen::{
    ClientFactoryContext, ClientFactoryGenerator, ClientGenerator, Context, TypeGenerator,
};
use soapgen_core::{ClassModel, Client, MetadataDocument};
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info};

/// Header written before every rendered class
const FILE_HEADER: &str = "<?php\n\n";

/// Run the generate command
pub fn run(metadata_path: &str, output_dir: &str, project_path: Option<String>) -> Result<()> {
    let project = load_project(project_path)?;
    project.validate()?;

    let bytes = std::fs::read(metadata_path)
        .with_context(|| format!("Failed to read metadata: {}", metadata_path))?;
    let document = MetadataDocument::from_json(&bytes)
        .with_context(|| format!("Failed to parse metadata: {}", metadata_path))?;

    let classes = generate_classes(&project, &document)?;

    let written = write_classes(Path::new(output_dir), &classes)?;
    println!("Generated {} class(es) in {}", written, output_dir);

    Ok(())
}

/// Load the project file, falling back to defaults when the default file is absent
fn load_project(project_path: Option<String>) -> Result<Project> {
    match project_path {
        Some(path) => Project::from_file(path),
        None if Path::new(DEFAULT_PROJECT_FILE).exists() => {
            Project::from_file(DEFAULT_PROJECT_FILE)
        }
        None => {
            debug!("no {} found, using defaults", DEFAULT_PROJECT_FILE);
            Ok(Project::default())
        }
    }
}

/// Build every class the project and metadata describe
pub fn generate_classes(project: &Project, document: &MetadataDocument) -> Result<Vec<ClassModel>> {
    let mut classes = Vec::with_capacity(document.types.len() + 2);

    let type_generator = TypeGenerator::from_config(&project.generator);
    for ty in &document.types {
        let class = type_generator
            .generate(ty)
            .with_context(|| format!("Failed to generate type {}", ty.name()))?;
        classes.push(class);
    }

    if let Some(client) = resolve_client(project, document) {
        let class = ClientGenerator::new()
            .generate(&client)
            .with_context(|| format!("Failed to generate client {}", client.name))?;
        classes.push(class);

        if let Some(factory) = &project.factory {
            let context = Context::client_factory(ClientFactoryContext::new(
                client.name.as_str(),
                client.namespace.as_str(),
                factory.classmap_name.as_str(),
                factory.classmap_namespace.as_str(),
            ));
            let class = ClientFactoryGenerator::new()
                .generate(&context)
                .context("Failed to generate client factory")?;
            classes.push(class);
        }
    } else if project.factory.is_some() {
        anyhow::bail!("A factory was requested but the metadata declares no client");
    }

    Ok(classes)
}

/// Client from metadata, renamed by the project's [client] section when present
fn resolve_client(project: &Project, document: &MetadataDocument) -> Option<Client> {
    let mut client = document.client.clone()?;
    if let Some(section) = &project.client {
        client.name = section.name.clone();
        client.namespace = section.namespace.trim_matches('\\').to_string();
    }
    Some(client)
}

/// Write `<Class>.php` files, refusing two classes with the same file name
fn write_classes(output_dir: &Path, classes: &[ClassModel]) -> Result<usize> {
    let mut seen = HashSet::new();
    for class in classes {
        if !seen.insert(class.name()) {
            anyhow::bail!(
                "Two generated classes share the file name {}.php ({})",
                class.name(),
                class.fqcn()
            );
        }
    }

    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create output directory: {:?}", output_dir))?;

    for class in classes {
        let path = output_dir.join(format!("{}.php", class.name()));
        let content = format!("{}{}", FILE_HEADER, class.render());
        std::fs::write(&path, content).with_context(|| format!("Failed to write {:?}", path))?;
        info!(class = %class.fqcn(), path = %path.display(), "wrote class");
    }

    Ok(classes.len())
}
