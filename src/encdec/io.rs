//! Input sources and output targets.
//!
//! Console output is deliberately absent here: the library hands the text back
//! and the CLI prints it.

use crate::error::{EncdecError, Result};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Literal(String),
    File(PathBuf),
}

impl InputSource {
    /// Non-empty literal data wins over a file; an empty literal defers to the
    /// file when one is given.
    pub fn resolve(data: Option<String>, file: Option<PathBuf>) -> Self {
        match (data, file) {
            (Some(data), _) if !data.is_empty() => InputSource::Literal(data),
            (_, Some(path)) => InputSource::File(path),
            (data, None) => InputSource::Literal(data.unwrap_or_default()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OutputTarget {
    #[default]
    Console,
    File(PathBuf),
}

impl OutputTarget {
    pub fn from_path(path: Option<PathBuf>) -> Self {
        path.map_or(OutputTarget::Console, OutputTarget::File)
    }
}

/// Reads the input text. File contents are split into lines and rejoined with
/// `line_separator`, so a trailing newline does not survive.
pub fn read_input(source: &InputSource, line_separator: &str) -> Result<String> {
    match source {
        InputSource::Literal(text) => Ok(text.clone()),
        InputSource::File(path) => {
            let content = fs::read_to_string(path).map_err(|e| EncdecError::io(path, e))?;
            debug!("Read {} bytes from {}", content.len(), path.display());
            Ok(join_lines(&content, line_separator))
        }
    }
}

fn join_lines(content: &str, separator: &str) -> String {
    content.lines().collect::<Vec<_>>().join(separator)
}

/// Writes `text` exactly as given, creating or truncating the file.
pub fn write_file(path: &Path, text: &str) -> Result<()> {
    fs::write(path, text).map_err(|e| EncdecError::io(path, e))?;
    debug!("Wrote {} bytes to {}", text.len(), path.display());
    Ok(())
}
