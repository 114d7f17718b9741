//! Automaton states of the grapheme cluster parser

/// What kind of cluster prefix has been consumed so far.
///
/// `Start` is both the initial state and the state wildcard of the
/// transition table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum ClusterState {
    /// Nothing that constrains the next boundary
    #[default]
    Start,
    /// After a carriage return
    AfterCr,
    /// After a control character or line feed
    AfterControlOrLf,
    /// After a Hangul leading consonant
    AfterL,
    /// After a Hangul LV syllable or vowel
    AfterLvOrV,
    /// After a Hangul LVT syllable or trailing consonant
    AfterLvtOrT,
    /// After a prepended concatenation mark
    AfterPrepend,
    /// Inside an emoji sequence (pictograph followed by extenders)
    InPictographic,
    /// Inside an emoji sequence, directly after a ZWJ
    InPictographicAfterZwj,
    /// After an odd number of regional indicators
    OddRegionalIndicators,
    /// After an even number of regional indicators
    EvenRegionalIndicators,
}

impl ClusterState {
    /// Number of automaton states
    pub const COUNT: usize = 11;

    /// Every state, in discriminant order
    pub const ALL: [ClusterState; Self::COUNT] = [
        Self::Start,
        Self::AfterCr,
        Self::AfterControlOrLf,
        Self::AfterL,
        Self::AfterLvOrV,
        Self::AfterLvtOrT,
        Self::AfterPrepend,
        Self::InPictographic,
        Self::InPictographicAfterZwj,
        Self::OddRegionalIndicators,
        Self::EvenRegionalIndicators,
    ];

    /// Row index into the transition table
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}
