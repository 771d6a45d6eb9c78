//! Attach debug symbol files to the binaries they describe.
//!
//! Scans an install tree for executables and shared libraries, scans a
//! build tree for debug symbol files, matches the two by file stem and
//! copies each matched symbol file into its binary's directory. Symbol
//! files that match nothing (leftovers from intermediate objects or
//! removed binaries) are ignored; a stem matched by more than one file
//! on either side is a fatal error, since the copy step could not pick
//! a winner.

mod attach;
mod error;
mod scan;

pub use attach::attach_symbols;
pub use error::AttachError;
pub use scan::{collect_binaries, collect_symbol_files, BINARY_EXTENSIONS, SYMBOL_EXTENSION};
