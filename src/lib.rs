//! Dump Unicode metadata for an inclusive range of code points.
//!
//! The `unidump` binary is a thin wrapper around [`run`]; the pieces are
//! exposed so the range walk can be driven with any [`CodepointLookup`].

pub mod codepoint;
pub mod dump;

pub use crate::codepoint::{CodepointLookup, Descriptor, LookupError, UnicodeDatabase};
pub use crate::dump::{command, dump_matches, dump_range, parse_point, parse_range, run, DumpError, USAGE_MESSAGE};
