//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs clusters as JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    clusters: Vec<ClusterRecord>,
}

/// Data structure for JSON output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterRecord {
    /// The cluster text
    pub text: String,
    /// Byte offset in the decoded text
    pub offset: usize,
    /// Length in bytes
    pub length: usize,
    /// Number of scalar values
    pub scalars: usize,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            clusters: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_cluster(&mut self, cluster: &str, offset: usize) -> Result<()> {
        self.clusters.push(ClusterRecord {
            text: cluster.to_string(),
            offset,
            length: cluster.len(),
            scalars: cluster.chars().count(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.clusters)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.clusters)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
