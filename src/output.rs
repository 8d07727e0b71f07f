//! Writing and checking the generated declarations file
//!
//! The renderer never touches the filesystem; these helpers are the file-side
//! collaborators used by the CLI.

use std::fs;
use std::path::Path;

use similar::{ChangeTag, TextDiff};

use crate::error::Result;

/// Outcome of comparing a fresh render with the file on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputStatus {
    UpToDate,
    /// File differs; carries a line diff (`-` on disk, `+` generated)
    OutOfDate { diff: String },
}

impl OutputStatus {
    pub fn is_up_to_date(&self) -> bool {
        matches!(self, OutputStatus::UpToDate)
    }
}

/// Write the module, creating missing parent directories
pub fn write_output(path: &Path, code: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, code)?;
    tracing::debug!(path = %path.display(), bytes = code.len(), "wrote declarations");
    Ok(())
}

/// Compare the file at `path` with a fresh render
pub fn check_output(path: &Path, code: &str) -> Result<OutputStatus> {
    let existing = fs::read_to_string(path)?;
    if existing == code {
        return Ok(OutputStatus::UpToDate);
    }
    Ok(OutputStatus::OutOfDate {
        diff: line_diff(&existing, code),
    })
}

fn line_diff(existing: &str, fresh: &str) -> String {
    let mut output = String::new();
    let diff = TextDiff::from_lines(existing, fresh);
    for change in diff.iter_all_changes() {
        let sign = match change.tag() {
            ChangeTag::Delete => '-',
            ChangeTag::Insert => '+',
            ChangeTag::Equal => continue,
        };
        output.push(sign);
        output.push_str(change.value());
        if change.missing_newline() {
            output.push('\n');
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".contentlayer/generated/types.d.ts");

        write_output(&path, "export type A = {}\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "export type A = {}\n");
    }

    #[test]
    fn test_check_up_to_date() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("types.d.ts");
        write_output(&path, "export type A = {}\n").unwrap();

        let status = check_output(&path, "export type A = {}\n").unwrap();
        assert!(status.is_up_to_date());
    }

    #[test]
    fn test_check_reports_changed_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("types.d.ts");
        write_output(&path, "export type A = {}\nexport type B = {}\n").unwrap();

        let status = check_output(&path, "export type A = {}\nexport type C = {}\n").unwrap();
        match status {
            OutputStatus::OutOfDate { diff } => {
                assert_eq!(diff, "-export type B = {}\n+export type C = {}\n");
            }
            other => panic!("Expected OutOfDate, got {:?}", other),
        }
    }

    #[test]
    fn test_check_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(check_output(&dir.path().join("missing.d.ts"), "").is_err());
    }
}
