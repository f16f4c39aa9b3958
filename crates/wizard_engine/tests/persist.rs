use std::fs;

use tempfile::TempDir;
use wizard_engine::{ensure_output_dir, AtomicArtifactWriter, ExportArtifact, PersistError};

fn artifact(filename: &str, text: &str) -> ExportArtifact {
    ExportArtifact {
        mime_type: "text/markdown",
        filename: filename.to_string(),
        bytes: text.as_bytes().to_vec(),
    }
}

#[test]
fn missing_output_dir_is_created() {
    let temp = TempDir::new().unwrap();
    let nested = temp.path().join("exports").join("campaigns");
    assert!(!nested.exists());
    ensure_output_dir(&nested).unwrap();
    assert!(nested.is_dir());
}

#[test]
fn re_export_overwrites_previous_file() {
    let temp = TempDir::new().unwrap();
    let writer = AtomicArtifactWriter::new(temp.path().to_path_buf());

    let first = writer.write(&artifact("launch.md", "draft one")).unwrap();
    assert_eq!(first.file_name().unwrap(), "launch.md");
    assert_eq!(fs::read_to_string(&first).unwrap(), "draft one");

    let second = writer.write(&artifact("launch.md", "draft two")).unwrap();
    assert_eq!(first, second);
    assert_eq!(fs::read_to_string(&second).unwrap(), "draft two");

    // Only the target remains; the temp file was renamed away.
    let entries = fs::read_dir(temp.path()).unwrap().count();
    assert_eq!(entries, 1);
}

#[test]
fn output_path_that_is_a_file_fails_without_writing() {
    let temp = TempDir::new().unwrap();
    let blocker = temp.path().join("not_a_dir");
    fs::write(&blocker, "x").unwrap();

    let writer = AtomicArtifactWriter::new(blocker.clone());
    let err = writer.write(&artifact("launch.md", "data")).unwrap_err();
    assert!(matches!(err, PersistError::NotADirectory(_)));
    assert!(!blocker.with_file_name("launch.md").exists());
    assert_eq!(fs::read_to_string(&blocker).unwrap(), "x");
}
