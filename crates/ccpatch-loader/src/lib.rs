//! Compilation database loading and saving.
//!
//! This crate reads a `compile_commands.json` file into a
//! [`CompilationDatabase`], applies a [`RewriteConfig`] to every record's
//! `command`, and writes the result back.
//!
//! # Features
//!
//! - Key order and unknown keys of every record are preserved
//! - Parse errors carry the line and column reported by the JSON parser
//! - Saving replaces the target atomically through a temporary file
//!
//! # Example
//!
//! ```ignore
//! use ccpatch_core::RewriteConfig;
//! use ccpatch_loader::{load, save};
//! use std::path::Path;
//!
//! let path = Path::new("compile_commands.json");
//! let mut db = load(path)?;
//! let summary = db.rewrite(&RewriteConfig::default());
//! save(&db, path)?;
//! println!("{} commands changed", summary.changed);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod record;

pub use record::CompileRecord;

use ccpatch_core::RewriteConfig;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;

/// Default database file name, looked up in the current directory.
pub const DEFAULT_DATABASE_FILE: &str = "compile_commands.json";

/// Errors that can occur while loading or saving a database.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The database file does not exist.
    #[error("{} not found", .path.display())]
    NotFound {
        /// The path that was looked up.
        path: PathBuf,
    },

    /// IO error reading or writing a file.
    #[error("failed to access {}: {source}", .path.display())]
    Io {
        /// The path that failed.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: io::Error,
    },

    /// The file is not a JSON array of objects.
    #[error("invalid compilation database {}:{line}:{column}: {source}", .path.display())]
    Parse {
        /// The file that failed to parse.
        path: PathBuf,
        /// Line of the error (1-based).
        line: usize,
        /// Column of the error (1-based).
        column: usize,
        /// The underlying parser error.
        #[source]
        source: serde_json::Error,
    },

    /// The database could not be serialized.
    #[error("failed to serialize compilation database: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// An ordered list of compile records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompilationDatabase {
    /// Records in file order.
    pub records: Vec<CompileRecord>,
}

/// Counts collected while rewriting a database.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RewriteSummary {
    /// Total number of records.
    pub records: usize,
    /// Records carrying a string `command`.
    pub commands: usize,
    /// Commands whose text changed.
    pub changed: usize,
    /// Records with only an `arguments` list, left as they were.
    pub arguments_only: usize,
}

impl CompilationDatabase {
    /// Parse a database from JSON text.
    pub fn from_json(source: &str) -> Result<Self, serde_json::Error> {
        let records = serde_json::from_str(source)?;
        Ok(Self { records })
    }

    /// Serialize to pretty-printed JSON with a two-space indent.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        let mut out = serde_json::to_string_pretty(&self.records)?;
        out.push('\n');
        Ok(out)
    }

    /// Rewrite the `command` of every record that has one.
    ///
    /// Records without a string `command` are not touched.
    pub fn rewrite(&mut self, config: &RewriteConfig) -> RewriteSummary {
        let mut summary = RewriteSummary {
            records: self.records.len(),
            ..RewriteSummary::default()
        };

        for (index, record) in self.records.iter_mut().enumerate() {
            let Some(command) = record.command() else {
                if record.has_arguments() {
                    summary.arguments_only += 1;
                    tracing::warn!(
                        "record {index} ({} in {}) uses `arguments`, not rewritten",
                        record.file().unwrap_or("<no file>"),
                        record.directory().unwrap_or("<no directory>")
                    );
                } else {
                    tracing::debug!("record {index} has no command, skipped");
                }
                continue;
            };

            summary.commands += 1;
            let rewritten = config.rewrite_command(command);
            if rewritten != command {
                tracing::debug!("record {index}: {command:?} -> {rewritten:?}");
                summary.changed += 1;
                record.set_command(rewritten);
            }
        }

        summary
    }
}

/// Load a compilation database from `path`.
pub fn load(path: &Path) -> Result<CompilationDatabase, LoadError> {
    let source = fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            LoadError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            LoadError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let db = CompilationDatabase::from_json(&source).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        line: source.line(),
        column: source.column(),
        source,
    })?;

    tracing::debug!("loaded {} records from {}", db.records.len(), path.display());
    Ok(db)
}

/// Save a compilation database to `path`, replacing any existing file.
///
/// The JSON is written to a temporary file next to the target and renamed
/// over it, so readers never observe a partially written database. A
/// symlinked `path` is followed and the file it points to is replaced; an
/// existing target keeps its permissions.
pub fn save(db: &CompilationDatabase, path: &Path) -> Result<(), LoadError> {
    let json = db.to_json().map_err(LoadError::Serialize)?;

    let io_err = |source: io::Error| LoadError::Io {
        path: path.to_path_buf(),
        source,
    };

    let target = match fs::canonicalize(path) {
        Ok(resolved) => resolved,
        Err(e) if e.kind() == io::ErrorKind::NotFound => path.to_path_buf(),
        Err(e) => return Err(io_err(e)),
    };
    let permissions = match fs::metadata(&target) {
        Ok(meta) => Some(meta.permissions()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => None,
        Err(e) => return Err(io_err(e)),
    };

    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(io_err)?;
    tmp.write_all(json.as_bytes()).map_err(io_err)?;
    if let Some(permissions) = permissions {
        tmp.as_file().set_permissions(permissions).map_err(io_err)?;
    }
    tmp.as_file().sync_all().map_err(io_err)?;
    tmp.persist(&target).map_err(|e| io_err(e.error))?;

    tracing::debug!("wrote {} records to {}", db.records.len(), target.display());
    Ok(())
}
