//! CLI command implementations

use crate::config::CliConfig;
use crate::error::CliError;
use crate::output::{JsonFormatter, MarkdownFormatter, OutputFormatter, TextFormatter};
use anyhow::{Context, Result};
use clap::{Args, Subcommand, ValueEnum};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

pub mod count;
pub mod generate_config;
pub mod inspect;
pub mod split;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Count grapheme clusters, scalars and bytes per file
    Count(count::CountArgs),

    /// Print every grapheme cluster of the input files
    Split(split::SplitArgs),

    /// Show how each scalar of a string is classified and joined
    Inspect(inspect::InspectArgs),

    /// Write a default configuration file
    GenerateConfig(generate_config::GenerateConfigArgs),
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Count(args) => args.execute(),
            Commands::Split(args) => args.execute(),
            Commands::Inspect(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
        }
    }
}

/// Options shared by the file-processing commands
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl CommonArgs {
    /// Initialize logging and load the configuration file
    pub fn setup(&self) -> Result<CliConfig> {
        init_logging(self.verbose, self.quiet);
        CliConfig::load(self.config.as_deref())
    }
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain text with one record per line
    Text,
    /// JSON array with metadata
    Json,
    /// Markdown formatted output
    Markdown,
}

impl OutputFormat {
    /// The explicit choice, else the configured default
    pub fn resolve(explicit: Option<Self>, config: &CliConfig) -> Result<Self> {
        if let Some(format) = explicit {
            return Ok(format);
        }
        let name = &config.output.default_format;
        Self::from_str(name, true).map_err(|_| {
            CliError::ConfigError(format!("unknown output format '{name}'")).into()
        })
    }

    /// Build the cluster formatter for this format
    pub fn formatter(
        self,
        writer: Box<dyn Write + Send + Sync>,
        config: &CliConfig,
    ) -> Box<dyn OutputFormatter> {
        match self {
            OutputFormat::Text => Box::new(TextFormatter::new(writer, config.output.show_offsets)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer, config.output.pretty_json)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        }
    }
}

/// Initialize logging based on verbosity level
pub fn init_logging(verbose: u8, quiet: bool) {
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    if !quiet {
        // A second initialization (e.g. in tests) keeps the first logger
        let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
            .try_init();
    }
}

/// Open the output destination, stdout when no file is given
pub fn open_output(path: Option<&Path>) -> Result<Box<dyn Write + Send + Sync>> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commands_debug_format() {
        let count_cmd = Commands::Count(count::CountArgs {
            input: vec!["test.txt".to_string()],
            output: None,
            format: None,
            parallel: false,
            strict: false,
            common: CommonArgs::default(),
        });

        let debug_str = format!("{:?}", count_cmd);
        assert!(debug_str.contains("Count"));
        assert!(debug_str.contains("test.txt"));
    }

    #[test]
    fn test_format_resolution() {
        let mut config = CliConfig::default();
        assert_eq!(
            OutputFormat::resolve(None, &config).unwrap(),
            OutputFormat::Text
        );
        assert_eq!(
            OutputFormat::resolve(Some(OutputFormat::Markdown), &config).unwrap(),
            OutputFormat::Markdown
        );

        config.output.default_format = "JSON".to_string();
        assert_eq!(
            OutputFormat::resolve(None, &config).unwrap(),
            OutputFormat::Json
        );

        config.output.default_format = "xml".to_string();
        let err = OutputFormat::resolve(None, &config).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::ConfigError(_))
        ));
    }

    #[test]
    fn test_open_output_file() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("out.txt");
        {
            let mut writer = open_output(Some(&path)).unwrap();
            writer.write_all(b"ok").unwrap();
            writer.flush().unwrap();
        }
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "ok");
    }

    #[test]
    fn test_open_output_bad_path() {
        let result = open_output(Some(Path::new("/nonexistent/dir/out.txt")));
        assert!(result.is_err());
    }
}
