//! Plain text output formatter

use super::{escape_cluster, OutputFormatter};
use anyhow::Result;
use std::io::Write;

/// Plain text formatter - outputs one cluster per line
pub struct TextFormatter<W: Write> {
    writer: W,
    show_offsets: bool,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W, show_offsets: bool) -> Self {
        Self {
            writer,
            show_offsets,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_cluster(&mut self, cluster: &str, offset: usize) -> Result<()> {
        if self.show_offsets {
            write!(self.writer, "{offset}\t")?;
        }
        writeln!(self.writer, "{}", escape_cluster(cluster))?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
