//! Reads the tickets document from disk.

use anyhow::{Context, Result};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Replaces a leading `~` with the current user's home directory.
///
/// This is string substitution only; the path is not checked. When no home
/// directory is known the path is returned unchanged.
pub fn expand_home(path: &str) -> PathBuf {
    match (path.strip_prefix('~'), dirs::home_dir()) {
        (Some(rest), Some(home)) => PathBuf::from(format!("{}{}", home.display(), rest)),
        _ => PathBuf::from(path),
    }
}

/// Loads the whole file at `path` (after `~` expansion) into memory.
pub fn read_source(path: &str) -> Result<String> {
    let resolved = expand_home(path);
    read_file(&resolved)
}

#[tracing::instrument(skip_all, fields(path = %path.display()))]
fn read_file(path: &Path) -> Result<String> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    debug!(bytes = content.len(), "Source file loaded");
    Ok(content)
}

/// Parses the document text into a generic JSON tree.
pub fn parse_document(text: &str) -> Result<Value> {
    serde_json::from_str(text).context("failed to parse tickets JSON")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;

    fn temp_path(name: &str) -> String {
        format!("{}/{}", env::temp_dir().display(), name)
    }

    #[test]
    fn test_expand_home_leading_tilde() {
        let Some(home) = dirs::home_dir() else {
            return;
        };
        let expanded = expand_home("~/tickets.json");
        assert_eq!(expanded, PathBuf::from(format!("{}/tickets.json", home.display())));
    }

    #[test]
    fn test_expand_home_leaves_other_paths() {
        assert_eq!(expand_home("/data/tickets.json"), PathBuf::from("/data/tickets.json"));
        assert_eq!(expand_home("data/~tickets.json"), PathBuf::from("data/~tickets.json"));
    }

    #[test]
    fn test_read_source_missing_file() {
        let err = read_source("/definitely/not/here/tickets.json").unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }

    #[test]
    fn test_read_source_and_parse() {
        let path = temp_path("tickets_analyzer_test_loader.json");
        fs::write(&path, r#"{"tickets": []}"#).unwrap();

        let text = read_source(&path).unwrap();
        let root = parse_document(&text).unwrap();
        assert!(root["tickets"].is_array());

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_parse_document_rejects_garbage() {
        assert!(parse_document("{ tickets: ").is_err());
    }
}
