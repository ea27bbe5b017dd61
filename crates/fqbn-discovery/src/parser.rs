//! Board definition file parser
//!
//! Definition files group related declarations under a common dotted key
//! prefix with no explicit section delimiters, so the parser treats a change
//! of board key between consecutive declaration lines as the group boundary.
//! Completed records are committed into the index as soon as the boundary is
//! detected; the record still in progress at end of file is committed by an
//! explicit finalize step.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use fqbn_core::{BoardIndex, BoardRecord};
use tracing::{debug, trace};

use crate::classify::{LineClass, LineClassifier};
use crate::loader::LoadError;

/// Parser for one board definition file at a time.
pub(crate) struct BoardFileParser {
    classifier: LineClassifier,
}

impl BoardFileParser {
    pub(crate) fn new() -> Self {
        Self {
            classifier: LineClassifier::new(),
        }
    }

    /// Parse the definition file at `path`, committing completed board
    /// records into `index`. `root` must be the scan root exactly as passed
    /// to the walk; it anchors the namespace derivation.
    pub(crate) fn parse_file(
        &self,
        root: &Path,
        path: &Path,
        index: &mut BoardIndex,
    ) -> Result<(), LoadError> {
        let namespace = namespace_for(root, path);
        let reader = BufReader::new(File::open(path)?);

        let mut current: Option<BoardRecord> = None;
        for line in reader.lines() {
            let line = line?;
            match self.classifier.classify(&line) {
                LineClass::Vendor { board_key, value } => {
                    trace!(line = %line, vid = value, "vendor id declaration");
                    let name = full_name(&namespace, board_key);
                    accumulator_for(&mut current, index, name).add_vendor_id(value);
                }
                LineClass::Product { board_key, value } => {
                    trace!(line = %line, pid = value, "product id declaration");
                    let name = full_name(&namespace, board_key);
                    accumulator_for(&mut current, index, name).add_product_id(value);
                }
                LineClass::Other => {}
            }
        }

        // finalize: the last group in a file has no boundary line after it
        if let Some(record) = current.take() {
            debug!(board = %record.name, "committing final board record");
            index.insert(record);
        }
        Ok(())
    }
}

/// Return the accumulator for `name`, committing the previous record into
/// the index first when the board key has changed.
fn accumulator_for<'a>(
    current: &'a mut Option<BoardRecord>,
    index: &mut BoardIndex,
    name: String,
) -> &'a mut BoardRecord {
    let same_board = current.as_ref().is_some_and(|r| r.name == name);
    if !same_board {
        if let Some(done) = current.take() {
            debug!(board = %done.name, "board key changed, committing record");
            index.insert(done);
        }
    }
    current.get_or_insert_with(|| BoardRecord::new(name))
}

/// Derive the namespace for a definition file: the components of its parent
/// directory relative to the scan root, joined by `:`. A file directly under
/// the root has an empty namespace.
fn namespace_for(root: &Path, file: &Path) -> String {
    let Some(parent) = file.parent() else {
        return String::new();
    };
    let relative = parent.strip_prefix(root).unwrap_or(parent);
    relative
        .components()
        .filter_map(|c| c.as_os_str().to_str())
        .collect::<Vec<_>>()
        .join(":")
}

/// Qualify a board key with its namespace. An empty namespace yields the
/// bare key rather than a `:`-prefixed one.
fn full_name(namespace: &str, board_key: &str) -> String {
    if namespace.is_empty() {
        board_key.to_string()
    } else {
        format!("{namespace}:{board_key}")
    }
}
