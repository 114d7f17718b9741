//! Grapheme cluster break property classes

use crate::tables;

/// The UAX #29 `Grapheme_Cluster_Break` class of a scalar value, extended
/// with `Extended_Pictographic`.
///
/// `Any` doubles as the class of every scalar without an explicit assignment
/// and as the property wildcard of the transition table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum GraphemeProperty {
    /// No explicit assignment (`Other`)
    Any,
    /// Carriage return, U+000D
    Cr,
    /// Line feed, U+000A
    Lf,
    /// Control and format characters
    Control,
    /// Combining marks, variation selectors, emoji modifiers
    Extend,
    /// Zero width joiner, U+200D
    Zwj,
    /// Regional indicator symbols used in flag pairs
    RegionalIndicator,
    /// Prefixed concatenation marks
    Prepend,
    /// Spacing combining marks
    SpacingMark,
    /// Hangul leading consonant (choseong)
    L,
    /// Hangul vowel (jungseong)
    V,
    /// Hangul trailing consonant (jongseong)
    T,
    /// Precomposed Hangul syllable without a trailing consonant
    Lv,
    /// Precomposed Hangul syllable with a trailing consonant
    Lvt,
    /// Emoji base characters and other pictographs
    ExtendedPictographic,
}

impl GraphemeProperty {
    /// Number of property classes
    pub const COUNT: usize = 15;

    /// Every property class, in discriminant order
    pub const ALL: [GraphemeProperty; Self::COUNT] = [
        Self::Any,
        Self::Cr,
        Self::Lf,
        Self::Control,
        Self::Extend,
        Self::Zwj,
        Self::RegionalIndicator,
        Self::Prepend,
        Self::SpacingMark,
        Self::L,
        Self::V,
        Self::T,
        Self::Lv,
        Self::Lvt,
        Self::ExtendedPictographic,
    ];

    /// Classify a scalar value using the bundled Unicode tables
    #[inline]
    pub fn of(ch: char) -> Self {
        tables::lookup(ch)
    }

    /// Row/column index into the transition table
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Short name as used in the Unicode property files
    pub fn name(self) -> &'static str {
        match self {
            Self::Any => "Any",
            Self::Cr => "CR",
            Self::Lf => "LF",
            Self::Control => "Control",
            Self::Extend => "Extend",
            Self::Zwj => "ZWJ",
            Self::RegionalIndicator => "Regional_Indicator",
            Self::Prepend => "Prepend",
            Self::SpacingMark => "SpacingMark",
            Self::L => "L",
            Self::V => "V",
            Self::T => "T",
            Self::Lv => "LV",
            Self::Lvt => "LVT",
            Self::ExtendedPictographic => "Extended_Pictographic",
        }
    }
}

impl core::fmt::Display for GraphemeProperty {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// Pure scalar classification for grapheme segmentation
pub trait PropertyClassifier: Send + Sync {
    /// Classify a scalar value
    fn classify(&self, ch: char) -> GraphemeProperty;
}

/// Classifier backed by the bundled Unicode property tables
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnicodeClassifier;

impl PropertyClassifier for UnicodeClassifier {
    #[inline]
    fn classify(&self, ch: char) -> GraphemeProperty {
        GraphemeProperty::of(ch)
    }
}
