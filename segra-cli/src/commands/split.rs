//! Split command implementation

use super::{open_output, CommonArgs, OutputFormat};
use crate::config::CliConfig;
use crate::input::{resolve_patterns, FileReader};
use crate::output::OutputFormatter;
use crate::progress::ProgressReporter;
use anyhow::Result;
use clap::Args;
use segra_core::Graphemes;
use std::path::{Path, PathBuf};

/// Arguments for the split command
#[derive(Debug, Args)]
pub struct SplitArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Read input in chunks instead of loading whole files
    #[arg(long, conflicts_with = "strict")]
    pub stream: bool,

    /// Chunk size in KB for streaming (default: from config)
    #[arg(long, value_name = "KB", value_parser = clap::value_parser!(u64).range(1..))]
    pub chunk_kb: Option<u64>,

    /// Fail on invalid UTF-8 instead of replacing it
    #[arg(long)]
    pub strict: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

impl SplitArgs {
    /// Execute the split command
    pub fn execute(&self) -> Result<()> {
        let config = self.common.setup()?;
        let format = OutputFormat::resolve(self.format, &config)?;

        log::info!("Starting grapheme split");
        log::debug!("Arguments: {:?}", self);

        let files = resolve_patterns(&self.input)?;
        // Clusters go to stdout, so only draw progress when writing to a file
        let mut progress = ProgressReporter::new(self.common.quiet || self.output.is_none());
        progress.init_files(files.len() as u64);

        let mut formatter = format.formatter(open_output(self.output.as_deref())?, &config);
        for path in &files {
            self.split_file(path, &config, formatter.as_mut())?;
            progress.file_completed(&path.display().to_string());
        }
        formatter.finish()?;
        progress.finish();

        Ok(())
    }

    fn chunk_bytes(&self, config: &CliConfig) -> usize {
        let kb = self
            .chunk_kb
            .map_or(config.streaming.chunk_kb, |kb| kb as usize);
        kb * 1024
    }

    /// Emit every cluster of one file; offsets restart at zero per file
    fn split_file(
        &self,
        path: &Path,
        config: &CliConfig,
        formatter: &mut dyn OutputFormatter,
    ) -> Result<()> {
        let streaming = self.stream
            || (!self.strict && FileReader::should_stream(path, config.streaming.threshold_mb)?);

        if streaming {
            log::debug!("Streaming {}", path.display());
            let mut offset = 0;
            FileReader::stream_clusters(path, self.chunk_bytes(config), |cluster| {
                formatter.format_cluster(cluster, offset)?;
                offset += cluster.len();
                Ok(())
            })?;
        } else {
            let text = FileReader::read_text(path, self.strict)?;
            for span in Graphemes::new(&text) {
                formatter.format_cluster(&text[span.bytes.clone()], span.bytes.start)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::sync::{Arc, Mutex};
    use tempfile::TempDir;

    /// Records clusters in memory
    #[derive(Default, Clone)]
    struct Collect(Arc<Mutex<Vec<(String, usize)>>>);

    impl OutputFormatter for Collect {
        fn format_cluster(&mut self, cluster: &str, offset: usize) -> Result<()> {
            self.0.lock().unwrap().push((cluster.to_string(), offset));
            Ok(())
        }

        fn finish(&mut self) -> Result<()> {
            Ok(())
        }
    }

    fn args(stream: bool, strict: bool) -> SplitArgs {
        SplitArgs {
            input: Vec::new(),
            output: None,
            format: None,
            stream,
            chunk_kb: Some(1),
            strict,
            common: CommonArgs::default(),
        }
    }

    fn split(path: &Path, stream: bool) -> Vec<(String, usize)> {
        let mut collect = Collect::default();
        args(stream, false)
            .split_file(path, &CliConfig::default(), &mut collect)
            .unwrap();
        let clusters = collect.0.lock().unwrap().clone();
        clusters
    }

    #[test]
    fn test_split_offsets() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("sample.txt");
        fs::write(&path, "a\r\n\u{1F476}\u{1F3FF}b").unwrap();

        assert_eq!(
            split(&path, false),
            vec![
                ("a".to_string(), 0),
                ("\r\n".to_string(), 1),
                ("\u{1F476}\u{1F3FF}".to_string(), 3),
                ("b".to_string(), 11),
            ]
        );
    }

    #[test]
    fn test_streamed_split_matches_whole_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("sample.txt");
        let text = "\u{1100}\u{1161}\u{11A8} \u{1F3F3}\u{FE0F}\u{200D}\u{1F308}\r\n".repeat(120);
        fs::write(&path, &text).unwrap();

        let whole = split(&path, false);
        let streamed = split(&path, true);
        assert_eq!(whole, streamed);
        assert_eq!(whole.len(), 480);
    }

    #[test]
    fn test_lossy_split_of_invalid_bytes() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bad.txt");
        fs::write(&path, b"a\xFFb").unwrap();

        let clusters: Vec<_> = split(&path, false).into_iter().map(|(c, _)| c).collect();
        assert_eq!(clusters, vec!["a", "\u{FFFD}", "b"]);
    }

    #[test]
    fn test_strict_split_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bad.txt");
        fs::write(&path, b"a\xFFb").unwrap();

        let mut collect = Collect::default();
        let result = args(false, true).split_file(&path, &CliConfig::default(), &mut collect);
        assert!(result.is_err());
    }

    #[test]
    fn test_chunk_size_falls_back_to_config() {
        let mut split_args = args(true, false);
        assert_eq!(split_args.chunk_bytes(&CliConfig::default()), 1024);
        split_args.chunk_kb = None;
        assert_eq!(split_args.chunk_bytes(&CliConfig::default()), 64 * 1024);
    }
}
