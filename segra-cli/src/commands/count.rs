//! Count command implementation

use super::{open_output, CommonArgs, OutputFormat};
use crate::config::CliConfig;
use crate::input::{resolve_patterns, FileReader};
use crate::progress::ProgressReporter;
use anyhow::Result;
use clap::Args;
use rayon::prelude::*;
use segra_core::cluster_count;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Arguments for the count command
#[derive(Debug, Args)]
pub struct CountArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Count files in parallel
    #[arg(short, long)]
    pub parallel: bool,

    /// Fail on invalid UTF-8 instead of replacing it
    #[arg(long)]
    pub strict: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Counts for one input file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileCounts {
    /// File path as given
    pub path: String,
    /// Extended grapheme clusters
    pub graphemes: usize,
    /// Unicode scalar values after decoding
    pub scalars: usize,
    /// Raw file size
    pub bytes: usize,
}

impl FileCounts {
    fn add(&mut self, other: &FileCounts) {
        self.graphemes += other.graphemes;
        self.scalars += other.scalars;
        self.bytes += other.bytes;
    }
}

impl CountArgs {
    /// Execute the count command
    pub fn execute(&self) -> Result<()> {
        let config = self.common.setup()?;
        let format = OutputFormat::resolve(self.format, &config)?;

        log::info!("Starting grapheme count");
        log::debug!("Arguments: {:?}", self);

        let files = resolve_patterns(&self.input)?;
        let mut progress = ProgressReporter::new(self.common.quiet);
        progress.init_files(files.len() as u64);

        let count_one = |path: &PathBuf| -> Result<FileCounts> {
            let counts = self.count_file(path, &config)?;
            progress.file_completed(&path.display().to_string());
            Ok(counts)
        };

        let results = if self.parallel {
            log::info!("Counting {} files in parallel", files.len());
            files.par_iter().map(count_one).collect::<Result<Vec<_>>>()?
        } else {
            files.iter().map(count_one).collect::<Result<Vec<_>>>()?
        };
        progress.finish();

        let mut writer = open_output(self.output.as_deref())?;
        write_counts(&mut writer, &results, format, config.output.pretty_json)?;
        writer.flush()?;
        Ok(())
    }

    fn count_file(&self, path: &Path, config: &CliConfig) -> Result<FileCounts> {
        let mut counts = FileCounts {
            path: path.display().to_string(),
            ..FileCounts::default()
        };

        if !self.strict && FileReader::should_stream(path, config.streaming.threshold_mb)? {
            log::debug!("Streaming {}", path.display());
            let summary =
                FileReader::stream_clusters(path, config.streaming.chunk_kb * 1024, |cluster| {
                    counts.scalars += cluster.chars().count();
                    Ok(())
                })?;
            counts.graphemes = summary.clusters;
            counts.bytes = summary.bytes;
        } else {
            let text = FileReader::read_text(path, self.strict)?;
            counts.graphemes = cluster_count(&text);
            counts.scalars = text.chars().count();
            counts.bytes = FileReader::file_size(path)? as usize;
        }

        Ok(counts)
    }
}

/// Render per-file counts, with a total when more than one file was read
pub fn write_counts<W: Write + ?Sized>(
    writer: &mut W,
    results: &[FileCounts],
    format: OutputFormat,
    pretty: bool,
) -> Result<()> {
    let mut total = FileCounts {
        path: "total".to_string(),
        ..FileCounts::default()
    };
    for counts in results {
        total.add(counts);
    }

    match format {
        OutputFormat::Text => {
            for counts in results {
                writeln!(
                    writer,
                    "{:>10} {:>10} {:>10} {}",
                    counts.graphemes, counts.scalars, counts.bytes, counts.path
                )?;
            }
            if results.len() > 1 {
                writeln!(
                    writer,
                    "{:>10} {:>10} {:>10} {}",
                    total.graphemes, total.scalars, total.bytes, total.path
                )?;
            }
        }
        OutputFormat::Json => {
            if pretty {
                serde_json::to_writer_pretty(&mut *writer, results)?;
            } else {
                serde_json::to_writer(&mut *writer, results)?;
            }
            writeln!(writer)?;
        }
        OutputFormat::Markdown => {
            writeln!(writer, "| File | Graphemes | Scalars | Bytes |")?;
            writeln!(writer, "|------|----------:|--------:|------:|")?;
            for counts in results {
                writeln!(
                    writer,
                    "| {} | {} | {} | {} |",
                    counts.path, counts.graphemes, counts.scalars, counts.bytes
                )?;
            }
            if results.len() > 1 {
                writeln!(
                    writer,
                    "| **{}** | {} | {} | {} |",
                    total.path, total.graphemes, total.scalars, total.bytes
                )?;
            }
        }
    }
    Ok(())
}
