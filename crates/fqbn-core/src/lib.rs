//! FQBN Core - Board records and the VID/PID board index
//!
//! This crate provides the data model for the FQBN resolver:
//! - Board records holding the vendor/product identifiers declared for a board
//! - The board index mapping fully-qualified board names to records
//! - The resolve operation answering VID/PID point lookups against the index

pub mod board;
pub mod index;

pub use board::BoardRecord;
pub use index::{BoardIndex, ResolveError};
