//! Markdown output formatter

use super::{escape_cluster, OutputFormatter};
use anyhow::Result;
use std::io::Write;

/// Markdown formatter - outputs clusters as a markdown list
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    cluster_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            cluster_count: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_cluster(&mut self, cluster: &str, offset: usize) -> Result<()> {
        self.cluster_count += 1;
        writeln!(
            self.writer,
            "{}. `{}` (byte {})",
            self.cluster_count,
            escape_cluster(cluster),
            offset
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total clusters: {}*", self.cluster_count)?;
        self.writer.flush()?;
        Ok(())
    }
}
