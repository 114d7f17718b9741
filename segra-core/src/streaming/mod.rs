//! Resumable cluster extraction straight from byte and string buffers
//!
//! [`first_cluster`] and [`first_cluster_in_str`] split one cluster off the
//! front of a buffer without allocating. Feeding the returned state into the
//! next call on the remainder continues the parse where it stopped:
//!
//! ```rust
//! use segra_core::streaming::first_cluster_in_str;
//!
//! let mut rest = "e\u{301}\u{1F1E9}\u{1F1EA}!";
//! let mut state = None;
//! let mut clusters = Vec::new();
//! while !rest.is_empty() {
//!     let (cluster, remainder, next) = first_cluster_in_str(rest, state);
//!     clusters.push(cluster);
//!     rest = remainder;
//!     state = next;
//! }
//! assert_eq!(clusters, ["e\u{301}", "\u{1F1E9}\u{1F1EA}", "!"]);
//! ```
//!
//! A `None` state means "unknown" and is what a fresh stream starts with.
//! When a buffer runs out before a boundary is seen the whole buffer is
//! returned as the cluster and the state resets to `None`; whether that is a
//! real boundary or only the end of the buffer is up to the caller.
//! [`ClusterStream`] makes that decision for chunked input by holding the
//! trailing cluster back until more data or the end of input arrives.

mod stream;

pub use stream::ClusterStream;

use crate::domain::{step, ClusterState};

/// Decode the first scalar of `bytes` with lossy UTF-8 semantics.
///
/// A maximal invalid subpart decodes to U+FFFD and is consumed as one unit.
/// Only the first four bytes are inspected: a scalar is at most four bytes
/// long and an invalid subpart at most three.
#[inline]
fn decode_first(bytes: &[u8]) -> Option<(char, usize)> {
    let window = &bytes[..bytes.len().min(4)];
    let chunk = window.utf8_chunks().next()?;
    match chunk.valid().chars().next() {
        Some(ch) => Some((ch, ch.len_utf8())),
        None => Some((char::REPLACEMENT_CHARACTER, chunk.invalid().len())),
    }
}

#[inline]
fn decode_first_in_str(text: &str) -> Option<(char, usize)> {
    text.chars().next().map(|ch| (ch, ch.len_utf8()))
}

/// Scan for the first internal boundary.
///
/// Returns the byte offset of the boundary and the state after the scalar
/// starting there, or `None` when the buffer ends first. Every iteration
/// consumes at least one byte, so the scan is bounded by the buffer length.
fn scan<F>(
    first: (char, usize),
    len: usize,
    state: Option<ClusterState>,
    decode_at: F,
) -> Option<(usize, ClusterState)>
where
    F: Fn(usize) -> Option<(char, usize)>,
{
    let (first_char, mut offset) = first;
    if offset >= len {
        return None;
    }

    let mut state = state.unwrap_or_else(|| step(ClusterState::Start, first_char).next);
    while let Some((ch, width)) = decode_at(offset) {
        let transition = step(state, ch);
        state = transition.next;
        if transition.boundary {
            return Some((offset, state));
        }
        offset += width;
    }
    None
}

/// Split the first grapheme cluster off a UTF-8 byte buffer.
///
/// Returns `(cluster, rest, state)`. Pass `None` as `state` for the first call
/// on a stream and the returned state for each following call on `rest`.
/// An empty buffer yields two empty slices and hands `state` back unchanged.
pub fn first_cluster(
    bytes: &[u8],
    state: Option<ClusterState>,
) -> (&[u8], &[u8], Option<ClusterState>) {
    let Some(first) = decode_first(bytes) else {
        return (bytes, bytes, state);
    };

    match scan(first, bytes.len(), state, |offset| decode_first(&bytes[offset..])) {
        Some((boundary, next)) => (&bytes[..boundary], &bytes[boundary..], Some(next)),
        None => (bytes, &bytes[bytes.len()..], None),
    }
}

/// Split the first grapheme cluster off a string slice.
///
/// Same contract as [`first_cluster`].
pub fn first_cluster_in_str(
    text: &str,
    state: Option<ClusterState>,
) -> (&str, &str, Option<ClusterState>) {
    let Some(first) = decode_first_in_str(text) else {
        return (text, text, state);
    };

    match scan(first, text.len(), state, |offset| {
        decode_first_in_str(&text[offset..])
    }) {
        Some((boundary, next)) => (&text[..boundary], &text[boundary..], Some(next)),
        None => (text, &text[text.len()..], None),
    }
}

/// Iterator over the clusters of a string slice, built on
/// [`first_cluster_in_str`]. Allocation-free.
#[derive(Clone, Debug)]
pub struct SplitClusters<'a> {
    rest: &'a str,
    state: Option<ClusterState>,
}

impl<'a> Iterator for SplitClusters<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }
        let (cluster, rest, state) = first_cluster_in_str(self.rest, self.state);
        self.rest = rest;
        self.state = state;
        Some(cluster)
    }
}

impl std::iter::FusedIterator for SplitClusters<'_> {}

/// Split `text` into grapheme clusters without allocating
pub fn split_clusters(text: &str) -> SplitClusters<'_> {
    SplitClusters {
        rest: text,
        state: None,
    }
}
