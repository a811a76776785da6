//! End-to-end tests: discover configuration files, then dispatch each one to
//! the validator of its file type the way a reporting front end does.

use std::fs;
use std::path::Path;

use anyhow::Result;
use cfv_core::{FileMetadata, FileSystemFinder, ValidationError};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_env("CFV_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    // Several tests race to install the subscriber; the first one wins
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

fn write(root: &Path, rel: &str, content: &str) -> Result<()> {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}

/// Validate every discovered file and return `(name, outcome)` pairs.
fn validate_all(files: &[FileMetadata]) -> Result<Vec<(String, Result<(), ValidationError>)>> {
    let mut report = Vec::with_capacity(files.len());
    for file in files {
        let content = fs::read(&file.path)?;
        report.push((file.name.clone(), file.file_type.validator().validate(&content)));
    }
    Ok(report)
}

#[test]
fn discovered_files_are_validated_by_their_type() -> Result<()> {
    init_tracing();
    let temp = tempfile::tempdir()?;
    write(temp.path(), "app/settings.json", "{\"debug\": true}")?;
    write(temp.path(), "app/broken.json", "{\"debug\": }")?;
    write(temp.path(), "deploy/values.yaml", "replicas: 3\nimage: app:1.0\n")?;
    write(temp.path(), "deploy/broken.yml", "ports: [80, 443\n")?;
    write(temp.path(), "Cargo.toml", "[package]\nname = \"app\"\n")?;
    write(temp.path(), "broken.toml", "[package\n")?;
    write(temp.path(), "README.md", "# app\n")?;

    let finder = FileSystemFinder::builder().roots([temp.path()]).build()?;
    let files = finder.discover()?;
    assert_eq!(files.len(), 6);

    let report = validate_all(&files)?;
    let failed: Vec<&str> = report
        .iter()
        .filter(|(_, outcome)| outcome.is_err())
        .map(|(name, _)| name.as_str())
        .collect();

    assert_eq!(failed, vec!["broken.json", "broken.toml", "broken.yml"]);
    Ok(())
}

#[test]
fn validation_errors_name_the_format() -> Result<()> {
    init_tracing();
    let temp = tempfile::tempdir()?;
    write(temp.path(), "bad.yaml", "key: [unclosed\n")?;

    let files = FileSystemFinder::builder()
        .roots([temp.path()])
        .build()?
        .discover()?;
    let report = validate_all(&files)?;

    let (_, outcome) = &report[0];
    assert!(matches!(
        outcome,
        Err(ValidationError::Syntax { format: "yaml", .. })
    ));
    Ok(())
}

#[test]
fn config_document_shapes_the_run() -> Result<()> {
    init_tracing();
    let temp = tempfile::tempdir()?;
    write(temp.path(), "repo/ci/pipeline.yaml", "stages: [build]\n")?;
    write(temp.path(), "repo/ci/Jenkinsfile", "agent: any\n")?;
    write(temp.path(), "repo/node_modules/dep/package.json", "{}")?;
    write(temp.path(), "repo/tsconfig.json", "{}")?;

    let root = temp.path().join("repo");
    let config = temp.path().join("cfv.toml");
    fs::write(
        &config,
        format!(
            "roots = [{root:?}]\nexclude-dirs = [\"node_modules\"]\nfile-types = [\"yaml\"]\nadditional-files = [\"Jenkinsfile:yaml\"]\n",
            root = root.to_string_lossy()
        ),
    )?;

    let finder = FileSystemFinder::builder().config_file(&config).build()?;
    let files = finder.discover()?;

    let names: Vec<&str> = files.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["Jenkinsfile", "pipeline.yaml"]);
    assert!(validate_all(&files)?.iter().all(|(_, outcome)| outcome.is_ok()));
    Ok(())
}

#[test]
fn discovery_error_reports_missing_root() {
    init_tracing();
    let err = FileSystemFinder::builder()
        .roots(["/definitely/not/a/real/cfv/root"])
        .build()
        .and_then(|finder| finder.discover())
        .unwrap_err();

    assert!(err.to_string().contains("/definitely/not/a/real/cfv/root"));
}
