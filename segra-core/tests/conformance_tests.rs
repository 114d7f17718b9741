//! Segmentation samples in the style of the Unicode GraphemeBreakTest data

use segra_core::{cluster_count, first_cluster, first_cluster_in_str, Graphemes};

/// (input, expected clusters as scalar lists)
fn cases() -> Vec<(&'static str, Vec<Vec<char>>)> {
    vec![
        ("", vec![]),
        ("x", vec![vec!['x']]),
        ("basic", vec![vec!['b'], vec!['a'], vec!['s'], vec!['i'], vec!['c']]),
        ("mo\u{308}p", vec![vec!['m'], vec!['o', '\u{308}'], vec!['p']]),
        ("\r\n", vec![vec!['\r', '\n']]),
        ("\n\n", vec![vec!['\n'], vec!['\n']]),
        ("\t*", vec![vec!['\t'], vec!['*']]),
        ("\r\n\u{308}", vec![vec!['\r', '\n'], vec!['\u{308}']]),
        ("\r\n\u{200D}", vec![vec!['\r', '\n'], vec!['\u{200D}']]),
        ("\r\n\u{903}", vec![vec!['\r', '\n'], vec!['\u{903}']]),
        ("\r\n\r\n", vec![vec!['\r', '\n'], vec!['\r', '\n']]),
        ("\r\u{308}", vec![vec!['\r'], vec!['\u{308}']]),
        (" \u{308} ", vec![vec![' ', '\u{308}'], vec![' ']]),
        ("\u{1105}\u{116C}\u{11AB}", vec![vec!['\u{1105}', '\u{116C}', '\u{11AB}']]),
        ("\u{1100}\u{AC00}", vec![vec!['\u{1100}', '\u{AC00}']]),
        ("\u{AC01}\u{11A8}", vec![vec!['\u{AC01}', '\u{11A8}']]),
        ("\u{AC00}\u{11A8}\u{11A8}", vec![vec!['\u{AC00}', '\u{11A8}', '\u{11A8}']]),
        ("\u{AC00}\u{1100}", vec![vec!['\u{AC00}'], vec!['\u{1100}']]),
        ("\u{AC01}\u{1161}", vec![vec!['\u{AC01}'], vec!['\u{1161}']]),
        (
            "\u{710}\u{70F}\u{712}\u{713}\u{715}",
            vec![vec!['\u{710}'], vec!['\u{70F}', '\u{712}'], vec!['\u{713}'], vec!['\u{715}']],
        ),
        ("\u{600} ", vec![vec!['\u{600}', ' ']]),
        ("\u{600}\n", vec![vec!['\u{600}'], vec!['\n']]),
        ("\u{E33}", vec![vec!['\u{E33}']]),
        ("\u{E33}\u{E33}", vec![vec!['\u{E33}', '\u{E33}']]),
        (
            "\u{E2A}\u{E23}\u{E30}\u{E2D}\u{E33}",
            vec![vec!['\u{E2A}'], vec!['\u{E23}'], vec!['\u{E30}'], vec!['\u{E2D}', '\u{E33}']],
        ),
        ("\u{915}\u{93F}", vec![vec!['\u{915}', '\u{93F}']]),
        (" \u{903}", vec![vec![' ', '\u{903}']]),
        (
            "*\u{1105}\u{116C}\u{11AB}*",
            vec![vec!['*'], vec!['\u{1105}', '\u{116C}', '\u{11AB}'], vec!['*']],
        ),
        (
            "*\u{1F469}\u{200D}\u{2764}\u{FE0F}\u{200D}\u{1F48B}\u{200D}\u{1F469}*",
            vec![
                vec!['*'],
                vec![
                    '\u{1F469}', '\u{200D}', '\u{2764}', '\u{FE0F}', '\u{200D}', '\u{1F48B}',
                    '\u{200D}', '\u{1F469}',
                ],
                vec!['*'],
            ],
        ),
        (
            "\u{1F3CB}\u{1F3FD}\u{200D}\u{2640}\u{FE0F}",
            vec![vec!['\u{1F3CB}', '\u{1F3FD}', '\u{200D}', '\u{2640}', '\u{FE0F}']],
        ),
        ("\u{1F642}", vec![vec!['\u{1F642}']]),
        ("\u{1F642}\u{1F642}", vec![vec!['\u{1F642}'], vec!['\u{1F642}']]),
        ("\u{1F476}\u{1F3FF}\u{1F476}", vec![vec!['\u{1F476}', '\u{1F3FF}'], vec!['\u{1F476}']]),
        ("\u{1F6D1}\u{200D}\u{1F6D1}", vec![vec!['\u{1F6D1}', '\u{200D}', '\u{1F6D1}']]),
        ("a\u{200D}\u{1F6D1}", vec![vec!['a', '\u{200D}'], vec!['\u{1F6D1}']]),
        ("\u{2701}\u{200D}\u{2701}", vec![vec!['\u{2701}', '\u{200D}', '\u{2701}']]),
        ("\u{1F1E9}\u{1F1EA}", vec![vec!['\u{1F1E9}', '\u{1F1EA}']]),
        (
            "\u{1F1E6}\u{1F1E7}\u{1F1E8}b",
            vec![vec!['\u{1F1E6}', '\u{1F1E7}'], vec!['\u{1F1E8}'], vec!['b']],
        ),
        (
            "a\u{1F1E6}\u{1F1E7}\u{1F1E8}\u{1F1E9}b",
            vec![
                vec!['a'],
                vec!['\u{1F1E6}', '\u{1F1E7}'],
                vec!['\u{1F1E8}', '\u{1F1E9}'],
                vec!['b'],
            ],
        ),
        (
            "\u{1F1E6}\u{200D}\u{1F1E7}",
            vec![vec!['\u{1F1E6}', '\u{200D}'], vec!['\u{1F1E7}']],
        ),
        (
            "\u{1F3F3}\u{FE0F}\u{200D}\u{1F308}",
            vec![vec!['\u{1F3F3}', '\u{FE0F}', '\u{200D}', '\u{1F308}']],
        ),
        (
            "\t\u{1F3F3}\u{FE0F}\u{200D}\u{1F308}\t",
            vec![vec!['\t'], vec!['\u{1F3F3}', '\u{FE0F}', '\u{200D}', '\u{1F308}'], vec!['\t']],
        ),
    ]
}

fn as_string(chars: &[char]) -> String {
    chars.iter().collect()
}

#[test]
fn test_iterator_matches_expected_clusters() {
    for (input, expected) in cases() {
        let mut graphemes = Graphemes::new(input);
        let mut index = 0;
        while graphemes.advance() {
            assert!(index < expected.len(), "{input:?}: more clusters than expected");
            assert_eq!(graphemes.chars(), expected[index].as_slice(), "{input:?} #{index}");
            assert_eq!(graphemes.as_str(), as_string(&expected[index]), "{input:?} #{index}");
            assert_eq!(
                graphemes.as_bytes(),
                as_string(&expected[index]).as_bytes(),
                "{input:?} #{index}"
            );
            index += 1;
        }
        assert_eq!(index, expected.len(), "{input:?}: fewer clusters than expected");
    }
}

#[test]
fn test_scalar_iterator_matches_expected_clusters() {
    for (input, expected) in cases() {
        let mut graphemes = Graphemes::from_chars(input.chars().collect::<Vec<_>>());
        let mut clusters = Vec::new();
        while graphemes.advance() {
            clusters.push(graphemes.chars().to_vec());
        }
        assert_eq!(clusters, expected, "{input:?}");
    }
}

#[test]
fn test_byte_function_matches_expected_clusters() {
    for (input, expected) in cases() {
        let mut bytes = input.as_bytes();
        let mut state = None;
        let mut clusters = Vec::new();
        while !bytes.is_empty() {
            let (cluster, rest, next) = first_cluster(bytes, state);
            clusters.push(String::from_utf8_lossy(cluster).chars().collect::<Vec<_>>());
            bytes = rest;
            state = next;
        }
        assert_eq!(clusters, expected, "{input:?}");
    }
}

#[test]
fn test_str_function_matches_expected_clusters() {
    for (input, expected) in cases() {
        let mut text = input;
        let mut state = None;
        let mut clusters = Vec::new();
        while !text.is_empty() {
            let (cluster, rest, next) = first_cluster_in_str(text, state);
            clusters.push(cluster.chars().collect::<Vec<_>>());
            text = rest;
            state = next;
        }
        assert_eq!(clusters, expected, "{input:?}");
    }
}

#[test]
fn test_cluster_count_matches_expected() {
    for (input, expected) in cases() {
        assert_eq!(cluster_count(input), expected.len(), "{input:?}");
    }
}
