//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

/// Commented configuration with every default spelled out
const TEMPLATE: &str = r#"# segra configuration

[output]
# Format used when -f is not given: "text", "json" or "markdown"
default_format = "text"

# Indent JSON output
pretty_json = true

# Prefix each cluster in text output with its byte offset
show_offsets = false

[streaming]
# Bytes read per chunk when streaming, in KB
chunk_kb = 64

# Files larger than this (MB) are streamed instead of loaded whole
threshold_mb = 10
"#;

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        fs::write(&self.output, TEMPLATE)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Use it with:");
        println!("   segra split -i input.txt --config {}", self.output.display());

        Ok(())
    }
}
