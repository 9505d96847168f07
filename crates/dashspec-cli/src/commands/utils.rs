use anyhow::{Context, Result};
use dashspec_core::MigrationError;
use serde_json::Value;
use std::fs;
use std::io::{self, Read, Write};

/// Reads a JSON document from `path`, or from stdin when `path` is `-`.
pub fn read_document(path: &str) -> Result<Value> {
    let content = if path == "-" {
        let mut content = String::new();
        io::stdin()
            .read_to_string(&mut content)
            .context("Failed to read document from stdin")?;
        content
    } else {
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path))?
    };

    serde_json::from_str(&content).with_context(|| format!("Failed to parse {} as JSON", path))
}

/// Prints the wire-level fault for `err`.
pub fn write_fault(out: &mut dyn Write, err: &MigrationError) -> Result<()> {
    let fault = serde_json::to_string_pretty(&err.to_fault())?;
    writeln!(out, "{}", fault)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_document_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{{\"version\": \"2021-03-15\"}}").unwrap();

        let document = read_document(file.path().to_str().unwrap()).unwrap();
        assert_eq!(document["version"], "2021-03-15");
    }

    #[test]
    fn test_read_document_names_bad_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let err = read_document(&path).unwrap_err();
        assert!(format!("{:#}", err).contains(&path));
    }

    #[test]
    fn test_write_fault() {
        let mut out = Vec::new();
        write_fault(&mut out, &MigrationError::MissingVersion).unwrap();

        let fault: Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(fault["validationFault"], "MISSING_VERSION");
    }
}
