//! Command-line entry point for segra

use clap::Parser;
use segra_cli::commands::Commands;
use segra_cli::CliResult;

/// Split text into extended grapheme clusters
#[derive(Debug, Parser)]
#[command(name = "segra", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();
    cli.command.execute()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_split() {
        let cli = Cli::try_parse_from(["segra", "split", "-i", "a.txt", "-f", "json", "--stream"])
            .unwrap();
        match cli.command {
            Commands::Split(args) => {
                assert_eq!(args.input, vec!["a.txt"]);
                assert!(args.stream);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_stream_conflicts_with_strict() {
        let result = Cli::try_parse_from(["segra", "split", "-i", "a.txt", "--stream", "--strict"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_zero_chunk_rejected() {
        let result = Cli::try_parse_from(["segra", "split", "-i", "a.txt", "--chunk-kb", "0"]);
        assert!(result.is_err());
    }
}
