//! Static lookup tables
//!
//! All tables are immutable and allocation-free during lookup.

pub mod grapheme_break;

pub use grapheme_break::{lookup, GRAPHEME_BREAK_RANGES};
