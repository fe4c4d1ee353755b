#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Point cloud datasets stored as delimited text, one cloud per line.
pub mod csv;

/// Recorded output of a hand landmark detector, stored as JSON lines.
pub mod landmarks;
