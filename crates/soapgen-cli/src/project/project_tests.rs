#![allow(non_snake_case)]

use super::*;
use soapgen_core::Visibility;
use test_case::test_case;

// Project parsing tests

#[test]
fn Project___from_str___parses_full_project() {
    let toml = r#"
[generator.property]
visibility = "protected"
optional_value = true

[generator.type_assemblers]
iterator = true
json_serializable = true
result_provider = true
result_wrapper = "App\\Result\\Wrapper"

[client]
name = "UserClient"
namespace = "App\\Client"

[factory]
classmap_name = "UserClassmap"
classmap_namespace = "App"
"#;

    let project = Project::from_str(toml).unwrap();

    assert_eq!(project.generator.property.visibility, Visibility::Protected);
    assert!(project.generator.property.optional_value);
    assert!(project.generator.type_assemblers.iterator);
    assert_eq!(
        project.generator.type_assemblers.result_wrapper.as_deref(),
        Some("App\\Result\\Wrapper")
    );
    assert_eq!(project.client.as_ref().unwrap().name, "UserClient");
    assert_eq!(project.factory.as_ref().unwrap().classmap_name, "UserClassmap");
}

#[test]
fn Project___from_str___empty_document_uses_defaults() {
    let project = Project::from_str("").unwrap();

    assert_eq!(project.generator, GeneratorConfig::default());
    assert!(project.client.is_none());
    assert!(project.factory.is_none());
}

#[test]
fn Project___from_str___missing_client_name___fails() {
    let toml = r#"
[client]
namespace = "App"
"#;

    assert!(Project::from_str(toml).is_err());
}

#[test]
fn Project___from_file___missing_file___reports_path() {
    let err = Project::from_file("/nonexistent/soapgen.toml").unwrap_err();

    assert!(err.to_string().contains("Failed to read project file"));
}

#[test]
fn Project___from_file___reads_written_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(DEFAULT_PROJECT_FILE);
    std::fs::write(&path, "[client]\nname = \"Svc\"\n").unwrap();

    let project = Project::from_file(&path).unwrap();

    let client = project.client.unwrap();
    assert_eq!(client.name, "Svc");
    assert_eq!(client.namespace, "");
}

// Project validation tests

fn project_with_client(name: &str, namespace: &str) -> Project {
    Project {
        client: Some(ClientSection {
            name: name.to_string(),
            namespace: namespace.to_string(),
        }),
        ..Project::default()
    }
}

#[test]
fn Project___validate___accepts_defaults() {
    assert!(Project::default().validate().is_ok());
}

#[test]
fn Project___validate___accepts_namespaced_client() {
    assert!(project_with_client("UserClient", "App\\Client").validate().is_ok());
}

#[test_case("" ; "empty")]
#[test_case("1Client" ; "leading digit")]
#[test_case("User-Client" ; "dash")]
fn Project___validate___rejects_client_name(name: &str) {
    assert!(project_with_client(name, "App").validate().is_err());
}

#[test_case("App\\\\Client" ; "empty segment")]
#[test_case("App\\9Client" ; "leading digit segment")]
fn Project___validate___rejects_client_namespace(namespace: &str) {
    assert!(project_with_client("Client", namespace).validate().is_err());
}

#[test]
fn Project___validate___factory_without_client___fails() {
    let project = Project {
        factory: Some(FactorySection {
            classmap_name: "Classmap".to_string(),
            classmap_namespace: "App".to_string(),
        }),
        ..Project::default()
    };

    let err = project.validate().unwrap_err();

    assert!(err.to_string().contains("[client]"));
}

#[test]
fn Project___validate___invalid_classmap_name___fails() {
    let mut project = project_with_client("Client", "App");
    project.factory = Some(FactorySection {
        classmap_name: "class map".to_string(),
        classmap_namespace: "App".to_string(),
    });

    assert!(project.validate().is_err());
}

#[test_case("\\" ; "separator only")]
#[test_case("App\\Wrap per" ; "space")]
fn Project___validate___rejects_result_wrapper(wrapper: &str) {
    let mut project = Project::default();
    project.generator.type_assemblers.result_wrapper = Some(wrapper.to_string());

    assert!(project.validate().is_err());
}

#[test]
fn Project___validate___accepts_root_result_wrapper() {
    let mut project = Project::default();
    project.generator.type_assemblers.result_wrapper = Some("\\Wrapper".to_string());

    assert!(project.validate().is_ok());
}

// Check command tests

#[test]
fn check___valid_project___succeeds() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(DEFAULT_PROJECT_FILE);
    std::fs::write(&path, "[client]\nname = \"Svc\"\nnamespace = \"App\"\n").unwrap();

    assert!(check(Some(path.to_string_lossy().into_owned())).is_ok());
}

#[test]
fn check___invalid_project___fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(DEFAULT_PROJECT_FILE);
    std::fs::write(&path, "[client]\nname = \"9Svc\"\n").unwrap();

    assert!(check(Some(path.to_string_lossy().into_owned())).is_err());
}
