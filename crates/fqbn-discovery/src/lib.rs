//! FQBN Discovery - board definition discovery and parsing
//!
//! This crate provides the filesystem side of the FQBN resolver:
//! - Recursive discovery of `boards.txt` definition files under a root
//! - Line-oriented parsing of VID/PID declarations into board records
//! - The load operation producing a populated board index

mod classify;
mod parser;

pub mod loader;

pub use loader::{load, BoardLoader, LoadError, LoaderConfig};
