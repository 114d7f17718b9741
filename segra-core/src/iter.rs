//! Cluster iterator over a fully decoded scalar sequence
//!
//! [`Graphemes`] decodes its input once into a scalar array plus a byte-offset
//! index and then walks the transition table one scalar at a time. The
//! current cluster is exposed as scalars, text, bytes and a byte interval.

use std::borrow::Cow;
use std::iter::FusedIterator;
use std::ops::Range;

use crate::domain::{step, ClusterState};

/// Location of one grapheme cluster in the source
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClusterSpan {
    /// Half-open range of scalar indices
    pub chars: Range<usize>,
    /// Half-open range of UTF-8 byte offsets
    pub bytes: Range<usize>,
}

impl ClusterSpan {
    /// Number of scalar values in the cluster
    pub fn char_len(&self) -> usize {
        self.chars.len()
    }

    /// Number of UTF-8 bytes in the cluster
    pub fn byte_len(&self) -> usize {
        self.bytes.len()
    }
}

/// Iteration progress
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// `advance` has not been called yet
    NotStarted,
    /// A cluster is current
    Active,
    /// All clusters have been produced
    Finished,
}

/// Iterator over the extended grapheme clusters of a text.
///
/// `advance` must be called before the first cluster is observable:
///
/// ```rust
/// use segra_core::Graphemes;
///
/// let mut graphemes = Graphemes::new("mo\u{308}p");
/// let mut clusters = Vec::new();
/// while graphemes.advance() {
///     clusters.push(graphemes.as_str().to_string());
/// }
/// assert_eq!(clusters, ["m", "o\u{308}", "p"]);
/// ```
#[derive(Clone, Debug)]
pub struct Graphemes<'a> {
    /// Source text; owned when built from a scalar sequence
    text: Cow<'a, str>,
    /// Decoded scalar values
    chars: Vec<char>,
    /// Byte offset of every scalar plus the total length
    offsets: Vec<usize>,
    /// Current cluster as scalar indices
    start: usize,
    end: usize,
    /// Parser state; when active it already includes `chars[end]`
    state: ClusterState,
    phase: Phase,
}

impl<'a> Graphemes<'a> {
    /// Create an iterator over the clusters of `text`
    pub fn new(text: &'a str) -> Self {
        let chars: Vec<char> = text.chars().collect();
        let offsets = text
            .char_indices()
            .map(|(offset, _)| offset)
            .chain(std::iter::once(text.len()))
            .collect();
        Self::with_parts(Cow::Borrowed(text), chars, offsets)
    }

    fn with_parts(text: Cow<'a, str>, chars: Vec<char>, offsets: Vec<usize>) -> Self {
        debug_assert_eq!(offsets.len(), chars.len() + 1);
        Self {
            text,
            chars,
            offsets,
            start: 0,
            end: 0,
            state: ClusterState::Start,
            phase: Phase::NotStarted,
        }
    }

    /// Advance to the next cluster. Returns `false` once all clusters have
    /// been produced; accessors then return empty results.
    pub fn advance(&mut self) -> bool {
        let total = self.chars.len();
        match self.phase {
            Phase::Finished => return false,
            Phase::NotStarted => {
                if total == 0 {
                    return self.finish();
                }
                // GB1: the first scalar always opens a cluster
                self.state = step(ClusterState::Start, self.chars[0]).next;
            }
            Phase::Active => {
                // GB2
                if self.end == total {
                    return self.finish();
                }
            }
        }

        self.start = self.end;
        let mut pos = self.start + 1;
        while pos < total {
            let transition = step(self.state, self.chars[pos]);
            self.state = transition.next;
            if transition.boundary {
                break;
            }
            pos += 1;
        }

        self.end = pos;
        self.phase = Phase::Active;
        true
    }

    fn finish(&mut self) -> bool {
        let total = self.chars.len();
        self.start = total;
        self.end = total;
        self.phase = Phase::Finished;
        tracing::trace!(scalars = total, "grapheme iteration finished");
        false
    }

    /// Rewind to the initial state; the next `advance` yields the first
    /// cluster again.
    pub fn reset(&mut self) {
        self.start = 0;
        self.end = 0;
        self.state = ClusterState::Start;
        self.phase = Phase::NotStarted;
        tracing::trace!("grapheme iterator reset");
    }

    /// Current iteration progress
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Scalars of the current cluster, empty before start and after the end
    pub fn chars(&self) -> &[char] {
        match self.phase {
            Phase::Active => &self.chars[self.start..self.end],
            _ => &[],
        }
    }

    /// Text of the current cluster, empty before start and after the end
    pub fn as_str(&self) -> &str {
        match self.phase {
            Phase::Active => &self.text[self.offsets[self.start]..self.offsets[self.end]],
            _ => "",
        }
    }

    /// UTF-8 bytes of the current cluster, empty before start and after the end
    pub fn as_bytes(&self) -> &[u8] {
        self.as_str().as_bytes()
    }

    /// Byte interval `[from, to)` of the current cluster in the source text.
    ///
    /// `(0, 0)` before the first `advance`, `(len, len)` after the end.
    pub fn byte_range(&self) -> (usize, usize) {
        match self.phase {
            Phase::NotStarted => (0, 0),
            Phase::Active | Phase::Finished => {
                (self.offsets[self.start], self.offsets[self.end])
            }
        }
    }

    /// Location of the current cluster, `None` unless a cluster is current
    pub fn span(&self) -> Option<ClusterSpan> {
        match self.phase {
            Phase::Active => Some(ClusterSpan {
                chars: self.start..self.end,
                bytes: self.offsets[self.start]..self.offsets[self.end],
            }),
            _ => None,
        }
    }

    /// The complete source text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of scalar values in the source text
    pub fn char_count(&self) -> usize {
        self.chars.len()
    }
}

impl Graphemes<'static> {
    /// Create an iterator over a pre-decoded scalar sequence
    pub fn from_chars(chars: impl Into<Vec<char>>) -> Self {
        let chars = chars.into();
        let mut offsets = Vec::with_capacity(chars.len() + 1);
        let mut text = String::with_capacity(chars.len());
        for &ch in &chars {
            offsets.push(text.len());
            text.push(ch);
        }
        offsets.push(text.len());
        Self::with_parts(Cow::Owned(text), chars, offsets)
    }
}

impl Iterator for Graphemes<'_> {
    type Item = ClusterSpan;

    fn next(&mut self) -> Option<Self::Item> {
        if self.advance() {
            self.span()
        } else {
            None
        }
    }
}

impl FusedIterator for Graphemes<'_> {}

/// Number of user-perceived characters in `text`
pub fn cluster_count(text: &str) -> usize {
    let mut graphemes = Graphemes::new(text);
    let mut count = 0;
    while graphemes.advance() {
        count += 1;
    }
    count
}
