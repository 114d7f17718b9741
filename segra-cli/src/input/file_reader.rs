//! File reading utilities

use crate::error::CliError;
use anyhow::{Context, Result};
use segra_core::ClusterStream;
use std::fs::{self, File};
use std::io::Read;
use std::path::Path;

/// Totals of a streamed file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreamSummary {
    /// Clusters delivered to the callback
    pub clusters: usize,
    /// Raw input bytes consumed
    pub bytes: usize,
}

/// File reader with lossy or strict UTF-8 decoding
pub struct FileReader;

impl FileReader {
    /// Read a file and decode it as UTF-8.
    ///
    /// Invalid sequences become U+FFFD unless `strict` is set, in which case
    /// they are reported as [`CliError::InvalidUtf8`].
    pub fn read_text(path: &Path, strict: bool) -> Result<String> {
        let bytes =
            fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))?;

        Self::decode(bytes, path, strict)
    }

    /// Decode raw file contents
    pub fn decode(bytes: Vec<u8>, path: &Path, strict: bool) -> Result<String> {
        match String::from_utf8(bytes) {
            Ok(text) => Ok(text),
            Err(err) if strict => Err(CliError::InvalidUtf8 {
                path: path.display().to_string(),
                position: err.utf8_error().valid_up_to(),
            }
            .into()),
            Err(err) => {
                log::warn!(
                    "{} is not valid UTF-8; invalid sequences replaced",
                    path.display()
                );
                Ok(String::from_utf8_lossy(err.as_bytes()).into_owned())
            }
        }
    }

    /// Get file size in bytes
    pub fn file_size(path: &Path) -> Result<u64> {
        let metadata = fs::metadata(path)
            .with_context(|| format!("Failed to get metadata for: {}", path.display()))?;

        Ok(metadata.len())
    }

    /// Check if file should be processed in streaming mode based on size
    pub fn should_stream(path: &Path, threshold_mb: u64) -> Result<bool> {
        let size = Self::file_size(path)?;
        Ok(size > threshold_mb * 1024 * 1024)
    }

    /// Segment a file chunk by chunk, handing each cluster to `on_cluster`.
    ///
    /// Decoding is always lossy here. Memory use is bounded by the chunk
    /// size plus the longest cluster.
    pub fn stream_clusters<F>(
        path: &Path,
        chunk_bytes: usize,
        mut on_cluster: F,
    ) -> Result<StreamSummary>
    where
        F: FnMut(&str) -> Result<()>,
    {
        let mut file =
            File::open(path).with_context(|| format!("Failed to open file: {}", path.display()))?;
        let mut buffer = vec![0u8; chunk_bytes.max(1)];
        let mut stream = ClusterStream::new();
        let mut clusters = 0;
        let mut bytes = 0;

        loop {
            let read = file
                .read(&mut buffer)
                .with_context(|| format!("Failed to read file: {}", path.display()))?;
            if read == 0 {
                break;
            }
            bytes += read;
            for cluster in stream.push(&buffer[..read]) {
                on_cluster(&cluster)?;
                clusters += 1;
            }
        }

        for cluster in stream.finish() {
            on_cluster(&cluster)?;
            clusters += 1;
        }

        log::debug!(
            "Streamed {} cluster(s) from {} ({} bytes)",
            clusters,
            path.display(),
            bytes
        );
        Ok(StreamSummary { clusters, bytes })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use tempfile::TempDir;

    #[test]
    fn test_read_text_success() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("test.txt");

        let content = "Hello, world!\nThis is a test.";
        fs::write(&file_path, content).unwrap();

        let result = FileReader::read_text(&file_path, true).unwrap();
        assert_eq!(result, content);
    }

    #[test]
    fn test_read_text_nonexistent_file() {
        let path = Path::new("/nonexistent/file.txt");
        let result = FileReader::read_text(path, false);

        assert!(result.is_err());
        let err_msg = result.unwrap_err().to_string();
        assert!(err_msg.contains("Failed to read file"));
    }

    #[test]
    fn test_read_text_lossy() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("broken.txt");
        fs::write(&file_path, b"ab\xFFc").unwrap();

        let result = FileReader::read_text(&file_path, false).unwrap();
        assert_eq!(result, "ab\u{FFFD}c");
    }

    #[test]
    fn test_read_text_strict_reports_position() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("broken.txt");
        fs::write(&file_path, b"ab\xFFc").unwrap();

        let err = FileReader::read_text(&file_path, true).unwrap_err();
        match err.downcast_ref::<CliError>() {
            Some(CliError::InvalidUtf8 { position, .. }) => assert_eq!(*position, 2),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_file_size() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("sized.txt");

        let content = "a".repeat(1024);
        fs::write(&file_path, &content).unwrap();

        let size = FileReader::file_size(&file_path).unwrap();
        assert_eq!(size, 1024);
    }

    #[test]
    fn test_should_stream() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("small.txt");
        fs::write(&file_path, "small content").unwrap();

        assert!(!FileReader::should_stream(&file_path, 1).unwrap());
        assert!(FileReader::should_stream(&file_path, 0).unwrap());
    }

    #[test]
    fn test_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("empty.txt");

        File::create(&file_path).unwrap();

        let content = FileReader::read_text(&file_path, true).unwrap();
        assert_eq!(content, "");

        let summary = FileReader::stream_clusters(&file_path, 4, |_| Ok(())).unwrap();
        assert_eq!(summary, StreamSummary::default());
    }

    #[test]
    fn test_stream_clusters_matches_whole_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("mixed.txt");
        let content = "e\u{301}\r\n\u{1F1EF}\u{1F1F5}\u{1F469}\u{200D}\u{1F4BB}!";
        fs::write(&file_path, content).unwrap();

        // A three-byte chunk splits most of the scalars above
        let mut clusters = Vec::new();
        let summary = FileReader::stream_clusters(&file_path, 3, |cluster| {
            clusters.push(cluster.to_string());
            Ok(())
        })
        .unwrap();

        assert_eq!(
            clusters,
            vec![
                "e\u{301}",
                "\r\n",
                "\u{1F1EF}\u{1F1F5}",
                "\u{1F469}\u{200D}\u{1F4BB}",
                "!"
            ]
        );
        assert_eq!(summary.clusters, 5);
        assert_eq!(summary.bytes, content.len());
    }

    #[test]
    fn test_stream_clusters_propagates_callback_error() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("abc.txt");
        fs::write(&file_path, "abc").unwrap();

        let result = FileReader::stream_clusters(&file_path, 1, |_| anyhow::bail!("stop"));
        assert_eq!(result.unwrap_err().to_string(), "stop");
    }
}
