//! Property tests for the iterator contract and streaming equivalence

use proptest::prelude::*;
use segra_core::{first_cluster, split_clusters, ClusterStream, Graphemes};

/// Scalars that exercise every rule group
const INTERESTING: &[char] = &[
    'a', ' ', '\t', '\r', '\n', '\u{0}', '\u{308}', '\u{301}', '\u{200D}', '\u{FE0F}',
    '\u{1F469}', '\u{2764}', '\u{1F3FD}', '\u{1F1E6}', '\u{1F1E7}', '\u{1100}', '\u{1161}',
    '\u{11A8}', '\u{AC00}', '\u{AC01}', '\u{600}', '\u{70F}', '\u{903}', '\u{E33}', '\u{FFFD}',
];

fn interesting_text() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(INTERESTING), 0..48)
        .prop_map(|chars| chars.into_iter().collect())
}

fn any_text() -> impl Strategy<Value = String> {
    prop_oneof![interesting_text(), any::<String>()]
}

fn drain(text: &str) -> Vec<String> {
    let mut graphemes = Graphemes::new(text);
    let mut clusters = Vec::new();
    while graphemes.advance() {
        clusters.push(graphemes.as_str().to_string());
    }
    clusters
}

proptest! {
    #[test]
    fn clusters_partition_the_text(text in any_text()) {
        let clusters = drain(&text);
        prop_assert!(clusters.iter().all(|cluster| !cluster.is_empty()));
        prop_assert_eq!(clusters.concat(), text);
    }

    #[test]
    fn byte_ranges_are_contiguous(text in any_text()) {
        let mut graphemes = Graphemes::new(&text);
        let mut expected_start = 0;
        while graphemes.advance() {
            let (from, to) = graphemes.byte_range();
            prop_assert_eq!(from, expected_start);
            prop_assert!(to > from);
            prop_assert_eq!(&text[from..to], graphemes.as_str());
            expected_start = to;
        }
        prop_assert_eq!(expected_start, text.len());
        prop_assert_eq!(graphemes.byte_range(), (text.len(), text.len()));
    }

    #[test]
    fn reset_replays_identically(text in any_text()) {
        let mut graphemes = Graphemes::new(&text);
        let mut first = Vec::new();
        while graphemes.advance() {
            first.push(graphemes.span());
        }
        graphemes.reset();
        let mut second = Vec::new();
        while graphemes.advance() {
            second.push(graphemes.span());
        }
        prop_assert_eq!(first, second);
    }

    #[test]
    fn scalar_constructor_matches_text_constructor(text in any_text()) {
        let from_text: Vec<_> = Graphemes::new(&text).collect();
        let from_chars: Vec<_> = Graphemes::from_chars(text.chars().collect::<Vec<_>>()).collect();
        prop_assert_eq!(from_text, from_chars);
    }

    #[test]
    fn streaming_matches_iterator(text in any_text()) {
        let streamed: Vec<String> = split_clusters(&text).map(String::from).collect();
        prop_assert_eq!(streamed, drain(&text));

        let mut bytes = text.as_bytes();
        let mut state = None;
        let mut from_bytes = Vec::new();
        while !bytes.is_empty() {
            let (cluster, rest, next) = first_cluster(bytes, state);
            prop_assert!(!cluster.is_empty());
            from_bytes.push(String::from_utf8_lossy(cluster).into_owned());
            bytes = rest;
            state = next;
        }
        prop_assert_eq!(from_bytes, drain(&text));
    }

    #[test]
    fn stream_split_anywhere_matches_iterator(text in any_text(), split in any::<prop::sample::Index>()) {
        let bytes = text.as_bytes();
        let at = split.index(bytes.len() + 1);

        let mut stream = ClusterStream::new();
        let mut clusters = stream.push(&bytes[..at]);
        clusters.extend(stream.push(&bytes[at..]));
        clusters.extend(stream.finish());

        prop_assert_eq!(clusters, drain(&text));
        prop_assert_eq!(stream.bytes_emitted(), bytes.len());
    }

    #[test]
    fn stream_small_chunks_match_iterator(text in interesting_text(), chunk in 1usize..7) {
        let mut stream = ClusterStream::new();
        let mut clusters = Vec::new();
        for piece in text.as_bytes().chunks(chunk) {
            clusters.extend(stream.push(piece));
        }
        clusters.extend(stream.finish());
        prop_assert_eq!(clusters, drain(&text));
    }

    #[test]
    fn byte_function_terminates_on_garbage(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
        let mut rest = bytes.as_slice();
        let mut state = None;
        let mut covered = 0;
        while !rest.is_empty() {
            let (cluster, remainder, next) = first_cluster(rest, state);
            prop_assert!(!cluster.is_empty());
            covered += cluster.len();
            rest = remainder;
            state = next;
        }
        prop_assert_eq!(covered, bytes.len());
    }
}
