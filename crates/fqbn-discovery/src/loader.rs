//! Tree walker that discovers board definition files and loads the index
//!
//! The walk visits every entry under a caller-supplied root; every regular
//! file whose base name matches the configured sentinel is handed to the
//! definition file parser. The first traversal or parse error aborts the
//! walk. Records already committed stay in the index, there is no rollback
//! across files.

use std::ffi::OsStr;
use std::path::Path;

use fqbn_core::BoardIndex;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::parser::BoardFileParser;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to walk board definition tree: {0}")]
    Walk(#[from] walkdir::Error),
}

/// Loader configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoaderConfig {
    /// Base name identifying board definition files (e.g. "boards.txt")
    pub board_file_name: String,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            board_file_name: "boards.txt".to_string(),
        }
    }
}

/// Walks a directory tree and builds a [`BoardIndex`] from every board
/// definition file found under it.
pub struct BoardLoader {
    config: LoaderConfig,
    parser: BoardFileParser,
}

impl BoardLoader {
    /// Create a loader with the default configuration
    pub fn new() -> Self {
        Self::with_config(LoaderConfig::default())
    }

    /// Create a loader with the given configuration
    pub fn with_config(config: LoaderConfig) -> Self {
        Self {
            config,
            parser: BoardFileParser::new(),
        }
    }

    /// Build a fresh index from every definition file under `root`
    pub fn load(&self, root: &Path) -> Result<BoardIndex, LoadError> {
        let mut index = BoardIndex::new();
        self.load_into(root, &mut index)?;
        Ok(index)
    }

    /// Walk `root` and commit parsed records into an existing index.
    ///
    /// Traversal errors and per-file parse errors abort the walk and are
    /// propagated; records committed before the failure remain in `index`.
    pub fn load_into(&self, root: &Path, index: &mut BoardIndex) -> Result<(), LoadError> {
        let sentinel = OsStr::new(self.config.board_file_name.as_str());
        for entry in WalkDir::new(root) {
            let entry = entry?;
            if entry.file_type().is_file() && entry.file_name() == sentinel {
                debug!(path = %entry.path().display(), "parsing board definition file");
                self.parser.parse_file(root, entry.path(), index)?;
            }
        }
        info!(root = %root.display(), boards = index.len(), "board index loaded");
        Ok(())
    }
}

impl Default for BoardLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a board index from every `boards.txt` under `root`.
///
/// Convenience wrapper around a default [`BoardLoader`].
pub fn load(root: impl AsRef<Path>) -> Result<BoardIndex, LoadError> {
    BoardLoader::new().load(root.as_ref())
}
