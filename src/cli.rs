//! Command-line argument parsing for the diagnostic binary
//!
//! Supports:
//! - Command text as an argument or on stdin
//! - Wrap width and continuation indent overrides
//! - Monospace or font-backed measurement
//! - Text or JSON output

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Parser, ValueEnum};

/// Tokenize and soft-wrap an HTTP command line
#[derive(Parser, Debug)]
#[command(
    name = "reqline",
    version,
    about = "Tokenize and soft-wrap an HTTP command line"
)]
pub struct CliArgs {
    /// Command line to lay out (read from stdin when omitted)
    #[arg(value_name = "COMMAND")]
    pub command: Option<String>,

    /// Available width: columns for monospace, pixels with --font
    #[arg(short = 'w', long, value_name = "N")]
    pub width: Option<f32>,

    /// Indent of wrapped continuation lines, in columns
    #[arg(long, value_name = "N")]
    pub indent: Option<usize>,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// TTF/OTF font to measure with instead of one unit per character
    #[arg(long, value_name = "PATH")]
    pub font: Option<PathBuf>,

    /// Font size in pixels (used with --font)
    #[arg(long, value_name = "PX", default_value_t = 14.0)]
    pub font_size: f32,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Where the command text comes from
#[derive(Debug, Clone, PartialEq)]
pub enum InputSource {
    Argument(String),
    Stdin,
}

/// How fragment widths are measured
#[derive(Debug, Clone, PartialEq)]
pub enum MeasureSpec {
    /// One unit per code point
    Monospace,
    Font { path: PathBuf, size: f32 },
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub input: InputSource,
    /// Wrap width (infinite when not given)
    pub width: f32,
    /// Overrides the configured continuation indent
    pub continuation_indent: Option<usize>,
    pub format: OutputFormat,
    pub measure: MeasureSpec,
}

impl CliArgs {
    /// Convert parsed CLI args into a run configuration
    pub fn into_config(self) -> Result<RunConfig> {
        let width = match self.width {
            Some(w) if !(w > 0.0) => bail!("--width must be positive, got {}", w),
            Some(w) => w,
            None => f32::INFINITY,
        };

        let measure = match self.font {
            Some(path) => {
                if !(self.font_size > 0.0) {
                    bail!("--font-size must be positive, got {}", self.font_size);
                }
                MeasureSpec::Font {
                    path,
                    size: self.font_size,
                }
            }
            None => MeasureSpec::Monospace,
        };

        let input = match self.command {
            Some(command) => InputSource::Argument(command),
            None => InputSource::Stdin,
        };

        Ok(RunConfig {
            input,
            width,
            continuation_indent: self.indent,
            format: self.format,
            measure,
        })
    }
}
