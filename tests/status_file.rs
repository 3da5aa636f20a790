use std::error::Error;
use std::fs;

use tempfile::tempdir;

use flashgate::status::{read_status, DEFAULT_STATUS};

type TestResult = Result<(), Box<dyn Error>>;

#[test]
fn missing_file_returns_sentinel() -> TestResult {
    let dir = tempdir()?;
    let path = dir.path().join("restore_status.txt");

    assert_eq!(read_status(&path), DEFAULT_STATUS);
    assert_eq!(read_status(&path), "No Restore Running");
    Ok(())
}

#[test]
fn whitespace_only_file_returns_sentinel() -> TestResult {
    let dir = tempdir()?;
    let path = dir.path().join("restore_status.txt");
    fs::write(&path, "  \n\t\n")?;

    assert_eq!(read_status(&path), DEFAULT_STATUS);
    Ok(())
}

#[test]
fn contents_are_returned_trimmed() -> TestResult {
    let dir = tempdir()?;
    let path = dir.path().join("restore_status.txt");
    fs::write(&path, "Restoring: 42%\n")?;

    assert_eq!(read_status(&path), "Restoring: 42%");
    Ok(())
}

#[test]
fn deleted_file_behaves_like_missing() -> TestResult {
    let dir = tempdir()?;
    let path = dir.path().join("restore_status.txt");
    fs::write(&path, "Restoring: 10%")?;
    fs::remove_file(&path)?;

    assert_eq!(read_status(&path), DEFAULT_STATUS);
    Ok(())
}
