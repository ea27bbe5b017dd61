//! Board record type aggregating declared USB identifiers

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Identifiers declared for one board in a definition file.
///
/// Identifier values are kept exactly as declared: the `0x` prefix plus four
/// hex digits, case preserved. Either set may be empty; a board that only
/// declares vendor ids (or only product ids) is still a valid record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardRecord {
    /// Fully-qualified board name, e.g. `arduino:avr:uno`
    pub name: String,
    /// Declared vendor identifiers (`0x`-prefixed, 4 hex digits)
    pub vendor_ids: BTreeSet<String>,
    /// Declared product identifiers (`0x`-prefixed, 4 hex digits)
    pub product_ids: BTreeSet<String>,
}

impl BoardRecord {
    /// Create an empty record for the given fully-qualified name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            vendor_ids: BTreeSet::new(),
            product_ids: BTreeSet::new(),
        }
    }

    /// Add a declared vendor identifier
    pub fn add_vendor_id(&mut self, vid: impl Into<String>) {
        self.vendor_ids.insert(vid.into());
    }

    /// Add a declared product identifier
    pub fn add_product_id(&mut self, pid: impl Into<String>) {
        self.product_ids.insert(pid.into());
    }

    /// Whether this board declares both the given vendor and product id.
    ///
    /// Membership is a case-sensitive exact string match.
    pub fn matches(&self, vid: &str, pid: &str) -> bool {
        self.vendor_ids.contains(vid) && self.product_ids.contains(pid)
    }
}
