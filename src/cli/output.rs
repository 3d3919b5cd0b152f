use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::conversion::ConversionResult;
use crate::error::ConversionError;
use crate::parser::CsvSource;

/// Where the finished document goes
#[derive(Debug, Clone, PartialEq)]
pub enum OutputTarget {
    File(PathBuf),
    Stdout,
}

impl OutputTarget {
    /// Resolve a CLI path argument; `None` and `-` both mean standard output
    pub fn from_arg(arg: Option<&PathBuf>) -> Self {
        match arg {
            Some(path) if path.as_os_str() != "-" => OutputTarget::File(path.clone()),
            _ => OutputTarget::Stdout,
        }
    }

    pub fn description(&self) -> String {
        match self {
            OutputTarget::File(path) => format!("'{}'", path.display()),
            OutputTarget::Stdout => "standard output".to_string(),
        }
    }

    /// True if writing here would replace the file `source` reads from
    pub fn overwrites(&self, source: &CsvSource) -> bool {
        match (self, source) {
            (OutputTarget::File(out), CsvSource::File(input)) => is_same_file(out, input),
            _ => false,
        }
    }

    /// Write `content` in one piece.
    ///
    /// Files are written to a temporary sibling and renamed into place, so a
    /// failure never leaves a partial document behind.
    pub fn write(&self, content: &str) -> ConversionResult<()> {
        match self {
            OutputTarget::Stdout => {
                let mut stdout = std::io::stdout().lock();
                stdout
                    .write_all(content.as_bytes())
                    .and_then(|_| stdout.flush())
                    .map_err(|e| ConversionError::io(e.to_string(), None))
            }
            OutputTarget::File(path) => write_file_atomic(path, content),
        }
    }
}

fn write_file_atomic(path: &Path, content: &str) -> ConversionResult<()> {
    let io_err = |e: std::io::Error| ConversionError::io(e.to_string(), Some(path.to_path_buf()));

    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent).map_err(io_err)?;

    let mut tmp = NamedTempFile::new_in(parent).map_err(io_err)?;
    tmp.write_all(content.as_bytes()).map_err(io_err)?;
    tmp.flush().map_err(io_err)?;
    tmp.persist(path).map_err(|e| io_err(e.error))?;
    Ok(())
}

fn is_same_file(a: &Path, b: &Path) -> bool {
    let a = std::fs::canonicalize(a).unwrap_or_else(|_| a.to_path_buf());
    let b = std::fs::canonicalize(b).unwrap_or_else(|_| b.to_path_buf());
    a == b
}
