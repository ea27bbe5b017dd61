//! Board index - maps fully-qualified board names to their records
//!
//! The index is owned by the caller and carries no locking; callers that
//! share one across threads must serialize access themselves.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

use crate::board::BoardRecord;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ResolveError {
    #[error("the board index is empty, load board definitions first")]
    IndexEmpty,
    #[error("no board matches vid={vid} pid={pid}")]
    NoMatch { vid: String, pid: String },
}

/// In-memory index of board records keyed by fully-qualified name.
///
/// Built incrementally during a load pass and queried with [`resolve`].
/// Inserting a record under an existing name replaces the previous record;
/// entries are never merged or removed.
///
/// [`resolve`]: BoardIndex::resolve
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BoardIndex {
    boards: HashMap<String, BoardRecord>,
}

impl BoardIndex {
    /// Create an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record under its own name, replacing any previous entry
    pub fn insert(&mut self, record: BoardRecord) {
        self.boards.insert(record.name.clone(), record);
    }

    /// Get the record for a fully-qualified board name
    pub fn get(&self, name: &str) -> Option<&BoardRecord> {
        self.boards.get(name)
    }

    /// Number of indexed boards
    pub fn len(&self) -> usize {
        self.boards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }

    /// Iterate over all indexed records (order unspecified)
    pub fn boards(&self) -> impl Iterator<Item = &BoardRecord> {
        self.boards.values()
    }

    /// Resolve a VID/PID pair to a fully-qualified board name.
    ///
    /// Scans the index and returns the name of the first record declaring
    /// both identifiers. Iteration order over the index is unspecified, so
    /// when several boards declare the same pair any of their names may be
    /// returned. Fails with [`ResolveError::IndexEmpty`] when no definitions
    /// have been loaded, and [`ResolveError::NoMatch`] when the pair is
    /// absent from every record.
    pub fn resolve(&self, vid: &str, pid: &str) -> Result<&str, ResolveError> {
        if self.boards.is_empty() {
            return Err(ResolveError::IndexEmpty);
        }
        self.boards
            .values()
            .find(|record| record.matches(vid, pid))
            .map(|record| record.name.as_str())
            .ok_or_else(|| ResolveError::NoMatch {
                vid: vid.to_string(),
                pid: pid.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, vids: &[&str], pids: &[&str]) -> BoardRecord {
        let mut r = BoardRecord::new(name);
        for vid in vids {
            r.add_vendor_id(*vid);
        }
        for pid in pids {
            r.add_product_id(*pid);
        }
        r
    }

    #[test]
    fn test_resolve_empty_index() {
        let index = BoardIndex::new();
        assert_eq!(index.resolve("0x2341", "0x0043"), Err(ResolveError::IndexEmpty));
    }

    #[test]
    fn test_resolve_no_match() {
        let mut index = BoardIndex::new();
        index.insert(record("arduino:avr:uno", &["0x2341"], &["0x0043"]));

        assert_eq!(
            index.resolve("0xdead", "0xbeef"),
            Err(ResolveError::NoMatch {
                vid: "0xdead".to_string(),
                pid: "0xbeef".to_string(),
            })
        );
    }

    #[test]
    fn test_resolve_requires_both_ids_on_one_board() {
        let mut index = BoardIndex::new();
        index.insert(record("arduino:avr:uno", &["0x2341"], &["0x0043"]));
        index.insert(record("arduino:avr:mega", &["0x2342"], &["0x0010"]));

        // vid from one board, pid from another
        assert!(index.resolve("0x2341", "0x0010").is_err());
        assert_eq!(index.resolve("0x2342", "0x0010"), Ok("arduino:avr:mega"));
    }

    #[test]
    fn test_resolve_every_declared_pair() {
        let mut index = BoardIndex::new();
        index.insert(record(
            "arduino:avr:uno",
            &["0x2341", "0x2A03"],
            &["0x0043", "0x0001"],
        ));

        for vid in ["0x2341", "0x2A03"] {
            for pid in ["0x0043", "0x0001"] {
                assert_eq!(index.resolve(vid, pid), Ok("arduino:avr:uno"));
            }
        }
    }

    #[test]
    fn test_insert_replaces_same_name() {
        let mut index = BoardIndex::new();
        index.insert(record("arduino:avr:uno", &["0x2341"], &["0x0043"]));
        index.insert(record("arduino:avr:uno", &["0x9999"], &["0x8888"]));

        assert_eq!(index.len(), 1);
        assert!(index.resolve("0x2341", "0x0043").is_err());
        assert_eq!(index.resolve("0x9999", "0x8888"), Ok("arduino:avr:uno"));
    }
}
