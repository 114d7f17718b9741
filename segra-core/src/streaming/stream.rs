//! Push-based segmentation of chunked input

use super::decode_first;
use crate::domain::{step, ClusterState};

/// Segments a byte stream that arrives in arbitrary chunks.
///
/// Chunks may split clusters and even multi-byte scalars. Only clusters
/// followed by a complete scalar are emitted by [`push`](Self::push); the
/// trailing cluster stays buffered until more data arrives or
/// [`finish`](Self::finish) is called. The output is the same as segmenting
/// the concatenated input in one go.
///
/// The retained cluster is never rescanned: the stream remembers how far it
/// has decoded and the parser state at that point, so each input byte is
/// decoded once however the input is chunked.
#[derive(Debug, Default, Clone)]
pub struct ClusterStream {
    /// Bytes of the trailing cluster and any unfinished scalar
    pending: Vec<u8>,
    /// Bytes of `pending` already folded into `state`
    scanned: usize,
    /// Parser state after `pending[..scanned]`
    state: ClusterState,
    clusters: usize,
    bytes: usize,
}

impl ClusterStream {
    /// Create an empty stream
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a chunk and return every cluster known to be complete
    pub fn push(&mut self, chunk: &[u8]) -> Vec<String> {
        self.pending.extend_from_slice(chunk);

        let complete = complete_prefix_len(&self.pending);
        let clusters = self.scan_to(complete);
        tracing::trace!(
            emitted = clusters.len(),
            retained = self.pending.len(),
            "cluster stream chunk processed"
        );
        clusters
    }

    /// Flush the retained bytes as final clusters and reset the stream
    pub fn finish(&mut self) -> Vec<String> {
        let mut clusters = self.scan_to(self.pending.len());
        if !self.pending.is_empty() {
            clusters.push(String::from_utf8_lossy(&self.pending).into_owned());
            let flushed = self.pending.len();
            self.record(1, flushed);
        }

        self.pending.clear();
        self.scanned = 0;
        self.state = ClusterState::Start;
        tracing::debug!(
            clusters = self.clusters,
            bytes = self.bytes,
            "cluster stream finished"
        );
        clusters
    }

    /// Decode `pending[scanned..end]`, emit every cluster closed by a
    /// boundary and keep the open one
    fn scan_to(&mut self, end: usize) -> Vec<String> {
        let mut clusters = Vec::new();
        let mut start = 0;
        let mut pos = self.scanned;
        let mut state = self.state;

        while pos < end {
            let Some((ch, width)) = decode_first(&self.pending[pos..end]) else {
                break;
            };
            if pos == start {
                // Nothing decoded yet, GB1
                state = step(ClusterState::Start, ch).next;
            } else {
                let transition = step(state, ch);
                state = transition.next;
                if transition.boundary {
                    clusters.push(String::from_utf8_lossy(&self.pending[start..pos]).into_owned());
                    start = pos;
                }
            }
            pos += width;
        }

        self.pending.drain(..start);
        self.scanned = pos - start;
        self.state = state;
        self.record(clusters.len(), start);
        clusters
    }

    fn record(&mut self, clusters: usize, bytes: usize) {
        self.clusters += clusters;
        self.bytes += bytes;
    }

    /// Number of bytes held back waiting for more input
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Total clusters emitted so far
    pub fn clusters_emitted(&self) -> usize {
        self.clusters
    }

    /// Total input bytes covered by emitted clusters
    pub fn bytes_emitted(&self) -> usize {
        self.bytes
    }
}

/// Length of `bytes` without a trailing, still unfinished UTF-8 sequence
fn complete_prefix_len(bytes: &[u8]) -> usize {
    let len = bytes.len();
    // A sequence is at most four bytes, so its lead byte is within the last three
    for back in 1..=len.min(3) {
        let start = len - back;
        if bytes[start] & 0xC0 == 0x80 {
            continue;
        }
        return match std::str::from_utf8(&bytes[start..]) {
            Err(err) if err.valid_up_to() == 0 && err.error_len().is_none() => start,
            _ => len,
        };
    }
    len
}
