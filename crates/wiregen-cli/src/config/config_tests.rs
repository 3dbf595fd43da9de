#![allow(non_snake_case)]

use super::*;
use std::io::Write;

#[test]
fn ProjectConfig___from_str___reads_generator_section() {
    let toml = r#"
[generator]
runtime_path = "crate::rt"
emit_docs = false
wrap_namespace = false
"#;

    let config = ProjectConfig::from_str(toml).unwrap();

    assert_eq!(config.generator.runtime_path, "crate::rt");
    assert!(!config.generator.emit_docs);
    assert!(!config.generator.wrap_namespace);
}

#[test]
fn ProjectConfig___from_str___partial_section_keeps_defaults() {
    let toml = r#"
[generator]
emit_docs = false
"#;

    let config = ProjectConfig::from_str(toml).unwrap();

    assert_eq!(config.generator.runtime_path, "::wiregen_runtime");
    assert!(config.generator.wrap_namespace);
}

#[test]
fn ProjectConfig___from_str___empty_file_is_default() {
    let config = ProjectConfig::from_str("").unwrap();

    assert_eq!(config, ProjectConfig::default());
}

#[test]
fn ProjectConfig___from_str___rejects_wrong_types() {
    let result = ProjectConfig::from_str("[generator]\nemit_docs = \"yes\"\n");

    assert!(result.is_err());
}

#[test]
fn ProjectConfig___from_file___reads_from_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[generator]\nruntime_path = \"my_rt\"").unwrap();

    let config = ProjectConfig::from_file(file.path()).unwrap();

    assert_eq!(config.generator.runtime_path, "my_rt");
}

#[test]
fn ProjectConfig___resolve___missing_explicit_path_fails() {
    let result = ProjectConfig::resolve(Some(Path::new("/nonexistent/wiregen.toml")));

    let message = format!("{:#}", result.unwrap_err());
    assert!(message.contains("Failed to read config"));
}
