//! Inspect command implementation

use super::{init_logging, OutputFormat};
use crate::output::escape_cluster;
use anyhow::Result;
use clap::Args;
use segra_core::{step, ClusterState, GraphemeProperty};
use serde::Serialize;
use std::io::{self, Write};

/// Arguments for the inspect command
#[derive(Debug, Args)]
pub struct InspectArgs {
    /// Text to analyze
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// How one scalar was classified and joined to its predecessor
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScalarDecision {
    /// Byte offset of the scalar
    pub offset: usize,
    /// Code point as `U+XXXX`
    pub code_point: String,
    /// Grapheme_Cluster_Break class
    pub property: GraphemeProperty,
    /// Whether a cluster starts at this scalar
    pub boundary: bool,
    /// Rule that made the decision
    pub rule: &'static str,
    /// Parser state after the scalar
    pub state: ClusterState,
}

/// Run the parser over `text`, recording every decision
pub fn decisions(text: &str) -> Vec<ScalarDecision> {
    let mut state = ClusterState::Start;
    let mut rows = Vec::new();

    for (index, (offset, ch)) in text.char_indices().enumerate() {
        let transition = step(state, ch);
        // GB1: always break at the start of text
        let (boundary, rule) = if index == 0 {
            (true, "GB1")
        } else {
            (transition.boundary, transition.rule.label())
        };
        rows.push(ScalarDecision {
            offset,
            code_point: format!("U+{:04X}", ch as u32),
            property: GraphemeProperty::of(ch),
            boundary,
            rule,
            state: transition.next,
        });
        state = transition.next;
    }

    rows
}

impl InspectArgs {
    /// Execute the inspect command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, false);
        let rows = decisions(&self.text);
        log::debug!("Inspected {} scalar(s)", rows.len());

        let mut stdout = io::stdout().lock();
        self.write_rows(&mut stdout, &rows)?;
        stdout.flush()?;
        Ok(())
    }

    fn write_rows<W: Write>(&self, writer: &mut W, rows: &[ScalarDecision]) -> Result<()> {
        match self.format {
            OutputFormat::Text => {
                for row in rows {
                    writeln!(
                        writer,
                        "{} {:>6}  {:<8} {:<20} {:<8} {:?}",
                        if row.boundary { '÷' } else { '×' },
                        row.offset,
                        row.code_point,
                        row.property.name(),
                        row.rule,
                        row.state
                    )?;
                }
                if !rows.is_empty() {
                    writeln!(writer, "÷ {:>6}  end of text (GB2)", self.text.len())?;
                }
            }
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut *writer, rows)?;
                writeln!(writer)?;
            }
            OutputFormat::Markdown => {
                writeln!(writer, "| Offset | Scalar | Code point | Property | Break | Rule |")?;
                writeln!(writer, "|-------:|--------|------------|----------|:-----:|------|")?;
                for (row, ch) in rows.iter().zip(self.text.chars()) {
                    writeln!(
                        writer,
                        "| {} | `{}` | {} | {} | {} | {} |",
                        row.offset,
                        escape_cluster(&ch.to_string()),
                        row.code_point,
                        row.property.name(),
                        if row.boundary { "÷" } else { "×" },
                        row.rule
                    )?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_scalar_is_gb1() {
        let rows = decisions("ab");
        assert_eq!(rows.len(), 2);
        assert!(rows[0].boundary);
        assert_eq!(rows[0].rule, "GB1");
        assert!(rows[1].boundary);
        assert_eq!(rows[1].rule, "GB999");
    }

    #[test]
    fn test_crlf_and_extend() {
        let rows = decisions("\r\na\u{308}");
        assert_eq!(rows[1].rule, "GB3");
        assert!(!rows[1].boundary);
        assert_eq!(rows[2].rule, "GB4");
        assert!(rows[2].boundary);
        assert_eq!(rows[3].rule, "GB9");
        assert!(!rows[3].boundary);
        assert_eq!(rows[3].property, GraphemeProperty::Extend);
        assert_eq!(rows[3].offset, 3);
        assert_eq!(rows[3].code_point, "U+0308");
    }

    #[test]
    fn test_mark_after_crlf_starts_a_cluster() {
        let rows = decisions("\r\n\u{308}");
        assert!(!rows[1].boundary);
        assert!(rows[2].boundary);
        assert_eq!(rows[2].rule, "GB4");
    }

    #[test]
    fn test_break_after_line_feed() {
        let rows = decisions("\na");
        assert_eq!(rows[0].property, GraphemeProperty::Lf);
        assert_eq!(rows[1].rule, "GB4");
        assert!(rows[1].boundary);
        assert_eq!(rows[1].state, ClusterState::Start);
    }

    #[test]
    fn test_regional_indicators() {
        let rows = decisions("\u{1F1E6}\u{1F1E7}\u{1F1E8}");
        assert!(!rows[1].boundary);
        assert_eq!(rows[1].rule, "GB12/13");
        assert!(rows[2].boundary);
        assert_eq!(rows[2].rule, "GB999");
    }

    #[test]
    fn test_empty_text() {
        assert!(decisions("").is_empty());
    }

    #[test]
    fn test_text_output() {
        let args = InspectArgs {
            text: "e\u{301}".to_string(),
            format: OutputFormat::Text,
            verbose: 0,
        };
        let mut buffer = Vec::new();
        args.write_rows(&mut buffer, &decisions(&args.text)).unwrap();
        let output = String::from_utf8(buffer).unwrap();
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with('÷'));
        assert!(lines[1].starts_with('×'));
        assert!(lines[1].contains("Extend"));
        assert!(lines[2].contains("GB2"));
    }

    #[test]
    fn test_json_output() {
        let args = InspectArgs {
            text: "\u{1F469}\u{200D}\u{1F469}".to_string(),
            format: OutputFormat::Json,
            verbose: 0,
        };
        let mut buffer = Vec::new();
        args.write_rows(&mut buffer, &decisions(&args.text)).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        let rows = value.as_array().unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1]["rule"], "GB9");
        assert_eq!(rows[2]["rule"], "GB11");
        assert_eq!(rows[2]["boundary"], false);
    }
}
