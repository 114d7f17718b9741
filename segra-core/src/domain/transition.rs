//! Transition table and resolver of the grapheme cluster parser
//!
//! The table maps `(state, property)` to `(next state, boundary, rule)`. The
//! boundary flag always refers to the position *before* the scalar whose
//! property is looked up. Entries keyed by [`ClusterState::Start`] act as a
//! wildcard over states and entries keyed by [`GraphemeProperty::Any`] as a
//! wildcard over properties; [`resolve`] combines them with [`tie_break`].
//!
//! The table is built at compile time from [`RULES`], so it is immutable and
//! shared by every iterator without synchronisation.

use super::property::GraphemeProperty;
use super::state::ClusterState;

/// UAX #29 rules encoded in the transition table
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rule {
    /// CR × LF
    Gb3,
    /// (Control | CR | LF) ÷
    Gb4,
    /// ÷ (Control | CR | LF)
    Gb5,
    /// L × (L | V | LV | LVT)
    Gb6,
    /// (LV | V) × (V | T)
    Gb7,
    /// (LVT | T) × T
    Gb8,
    /// × (Extend | ZWJ)
    Gb9,
    /// × SpacingMark
    Gb9a,
    /// Prepend ×
    Gb9b,
    /// ExtPict Extend* ZWJ × ExtPict
    Gb11,
    /// Regional indicator pairing
    Gb12And13,
    /// Any ÷ Any
    Gb999,
}

impl Rule {
    /// Precedence of the rule; lower ranks take precedence
    pub const fn rank(self) -> u16 {
        match self {
            Rule::Gb3 => 30,
            Rule::Gb4 => 40,
            Rule::Gb5 => 50,
            Rule::Gb6 => 60,
            Rule::Gb7 => 70,
            Rule::Gb8 => 80,
            Rule::Gb9 => 90,
            Rule::Gb9a => 91,
            Rule::Gb9b => 92,
            Rule::Gb11 => 110,
            Rule::Gb12And13 => 120,
            Rule::Gb999 => 9990,
        }
    }

    /// Rule label as written in UAX #29
    pub fn label(self) -> &'static str {
        match self {
            Rule::Gb3 => "GB3",
            Rule::Gb4 => "GB4",
            Rule::Gb5 => "GB5",
            Rule::Gb6 => "GB6",
            Rule::Gb7 => "GB7",
            Rule::Gb8 => "GB8",
            Rule::Gb9 => "GB9",
            Rule::Gb9a => "GB9a",
            Rule::Gb9b => "GB9b",
            Rule::Gb11 => "GB11",
            Rule::Gb12And13 => "GB12/13",
            Rule::Gb999 => "GB999",
        }
    }
}

/// A single resolved step of the parser
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    /// State after consuming the scalar
    pub next: ClusterState,
    /// Whether a cluster boundary lies before the scalar
    pub boundary: bool,
    /// Rule that decided the boundary
    pub rule: Rule,
}

impl Transition {
    /// GB999: any scalar may follow any other with a boundary
    pub const FALLBACK: Transition = Transition {
        next: ClusterState::Start,
        boundary: true,
        rule: Rule::Gb999,
    };

    const fn new(next: ClusterState, boundary: bool, rule: Rule) -> Self {
        Self {
            next,
            boundary,
            rule,
        }
    }
}

const BREAK: bool = true;
const JOIN: bool = false;

type RuleEntry = (ClusterState, GraphemeProperty, ClusterState, bool, Rule);

/// Source list of the transition table: `(state, property) => (next, boundary, rule)`
#[rustfmt::skip]
pub const RULES: &[RuleEntry] = {
    use ClusterState as S;
    use GraphemeProperty as P;
    &[
        // GB5
        (S::Start, P::Cr,      S::AfterCr,          BREAK, Rule::Gb5),
        (S::Start, P::Lf,      S::AfterControlOrLf, BREAK, Rule::Gb5),
        (S::Start, P::Control, S::AfterControlOrLf, BREAK, Rule::Gb5),

        // GB4
        (S::AfterCr,          P::Any, S::Start, BREAK, Rule::Gb4),
        (S::AfterControlOrLf, P::Any, S::Start, BREAK, Rule::Gb4),

        // GB3
        (S::AfterCr, P::Lf, S::AfterControlOrLf, JOIN, Rule::Gb3),

        // GB6
        (S::Start,  P::L,   S::AfterL,      BREAK, Rule::Gb999),
        (S::AfterL, P::L,   S::AfterL,      JOIN,  Rule::Gb6),
        (S::AfterL, P::V,   S::AfterLvOrV,  JOIN,  Rule::Gb6),
        (S::AfterL, P::Lv,  S::AfterLvOrV,  JOIN,  Rule::Gb6),
        (S::AfterL, P::Lvt, S::AfterLvtOrT, JOIN,  Rule::Gb6),

        // GB7
        (S::Start,      P::Lv, S::AfterLvOrV,  BREAK, Rule::Gb999),
        (S::Start,      P::V,  S::AfterLvOrV,  BREAK, Rule::Gb999),
        (S::AfterLvOrV, P::V,  S::AfterLvOrV,  JOIN,  Rule::Gb7),
        (S::AfterLvOrV, P::T,  S::AfterLvtOrT, JOIN,  Rule::Gb7),

        // GB8
        (S::Start,       P::Lvt, S::AfterLvtOrT, BREAK, Rule::Gb999),
        (S::Start,       P::T,   S::AfterLvtOrT, BREAK, Rule::Gb999),
        (S::AfterLvtOrT, P::T,   S::AfterLvtOrT, JOIN,  Rule::Gb8),

        // GB9
        (S::Start, P::Extend, S::Start, JOIN, Rule::Gb9),
        (S::Start, P::Zwj,    S::Start, JOIN, Rule::Gb9),

        // GB9a
        (S::Start, P::SpacingMark, S::Start, JOIN, Rule::Gb9a),

        // GB9b
        (S::Start,        P::Prepend, S::AfterPrepend, BREAK, Rule::Gb999),
        (S::AfterPrepend, P::Any,     S::Start,        JOIN,  Rule::Gb9b),

        // GB11
        (S::Start,                  P::ExtendedPictographic, S::InPictographic,         BREAK, Rule::Gb999),
        (S::InPictographic,         P::Extend,               S::InPictographic,         JOIN,  Rule::Gb9),
        (S::InPictographic,         P::Zwj,                  S::InPictographicAfterZwj, JOIN,  Rule::Gb9),
        (S::InPictographicAfterZwj, P::ExtendedPictographic, S::InPictographic,         JOIN,  Rule::Gb11),

        // GB12, GB13
        (S::Start,                  P::RegionalIndicator, S::OddRegionalIndicators,  BREAK, Rule::Gb999),
        (S::OddRegionalIndicators,  P::RegionalIndicator, S::EvenRegionalIndicators, JOIN,  Rule::Gb12And13),
        (S::EvenRegionalIndicators, P::RegionalIndicator, S::OddRegionalIndicators,  BREAK, Rule::Gb999),
    ]
};

type Table = [[Option<Transition>; GraphemeProperty::COUNT]; ClusterState::COUNT];

const fn build_table() -> Table {
    let mut table: Table = [[None; GraphemeProperty::COUNT]; ClusterState::COUNT];
    let mut i = 0;
    while i < RULES.len() {
        let (state, property, next, boundary, rule) = RULES[i];
        if table[state.index()][property.index()].is_some() {
            panic!("duplicate grapheme transition");
        }
        table[state.index()][property.index()] = Some(Transition::new(next, boundary, rule));
        i += 1;
    }
    table
}

static TRANSITIONS: Table = build_table();

/// Raw table entry for an exact `(state, property)` pair
#[inline]
pub fn lookup(state: ClusterState, property: GraphemeProperty) -> Option<Transition> {
    TRANSITIONS[state.index()][property.index()]
}

/// Combine the two wildcard matches of an unmapped `(state, property)` pair.
///
/// The next state always comes from the property wildcard when it matched.
/// The boundary comes from whichever entry has the lower rank, with the
/// property wildcard winning ties. With no match at all, GB999 applies.
pub fn tie_break(
    state_wildcard: Option<Transition>,
    property_wildcard: Option<Transition>,
) -> Transition {
    match (state_wildcard, property_wildcard) {
        (Some(by_state), Some(by_property)) => {
            let decisive = if by_state.rule.rank() < by_property.rule.rank() {
                by_state
            } else {
                by_property
            };
            Transition::new(by_property.next, decisive.boundary, decisive.rule)
        }
        (Some(by_state), None) => by_state,
        (None, Some(by_property)) => by_property,
        (None, None) => Transition::FALLBACK,
    }
}

/// Resolve the parser step for `state` followed by a scalar of `property`
#[inline]
pub fn resolve(state: ClusterState, property: GraphemeProperty) -> Transition {
    if let Some(exact) = lookup(state, property) {
        return exact;
    }
    tie_break(
        lookup(state, GraphemeProperty::Any),
        lookup(ClusterState::Start, property),
    )
}

/// Classify `ch` and resolve the parser step from `state`
#[inline]
pub fn step(state: ClusterState, ch: char) -> Transition {
    resolve(state, GraphemeProperty::of(ch))
}
