//! Output formatting module

use anyhow::Result;
use std::fmt::Write as _;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output a single cluster found at byte `offset`
    fn format_cluster(&mut self, cluster: &str, offset: usize) -> Result<()>;

    /// Finalize output (e.g., write the JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::{ClusterRecord, JsonFormatter};
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Render a cluster on one line, spelling out control characters
pub fn escape_cluster(cluster: &str) -> String {
    let mut escaped = String::with_capacity(cluster.len());
    for ch in cluster.chars() {
        match ch {
            '\r' => escaped.push_str("\\r"),
            '\n' => escaped.push_str("\\n"),
            '\t' => escaped.push_str("\\t"),
            '\\' => escaped.push_str("\\\\"),
            ch if ch.is_control() => {
                let _ = write!(escaped, "\\u{{{:04X}}}", ch as u32);
            }
            ch => escaped.push(ch),
        }
    }
    escaped
}
