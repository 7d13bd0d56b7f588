//! reqline - print the tokens and soft-wrapped layout of a command line

use std::io::Read;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use reqline::cli::{CliArgs, InputSource, MeasureSpec, OutputFormat, RunConfig};
use reqline::layout::VisualLine;
use reqline::measure::{FontMeasure, Monospace, TextMeasure};
use reqline::model::CommandEditor;
use reqline::syntax::Token;
use reqline::EditorConfig;

/// Everything the binary prints
#[derive(Debug, Serialize)]
struct Report {
    text: String,
    max_width: f32,
    tokens: Vec<TokenReport>,
    lines: Vec<VisualLine>,
}

#[derive(Debug, Serialize)]
struct TokenReport {
    #[serde(flatten)]
    token: Token,
    highlight: &'static str,
    text: String,
}

impl Report {
    fn build<M: TextMeasure + ?Sized>(editor: &CommandEditor, measure: &M) -> Self {
        let text = editor.text();
        let tokens = editor
            .tokens()
            .into_iter()
            .map(|token| TokenReport {
                token,
                highlight: token.display_kind().highlight_name(),
                text: token.text(text).to_string(),
            })
            .collect();

        Self {
            text: text.to_string(),
            max_width: editor.max_width(),
            tokens,
            lines: editor.layout(measure),
        }
    }

    fn to_text(&self) -> String {
        let mut out = String::from("tokens:\n");
        for t in &self.tokens {
            let mut flags = String::new();
            if t.token.has_error {
                flags.push_str(" [unterminated]");
            }
            if t.token.header_value {
                flags.push_str(" [header]");
            }
            out.push_str(&format!(
                "  {:<10} {:>5}..{:<5} {:?}{}\n",
                t.highlight, t.token.start, t.token.end, t.text, flags
            ));
        }

        out.push_str("lines:\n");
        for (i, line) in self.lines.iter().enumerate() {
            let content: String = line
                .tokens
                .iter()
                .filter(|frag| !frag.collapsed)
                .map(|frag| frag.text(&self.text))
                .collect();
            out.push_str(&format!(
                "  {:>3} {:>7.1} {}{:?}\n",
                i,
                line.width(),
                " ".repeat(line.indent),
                content
            ));
        }
        out
    }
}

fn read_input(source: InputSource) -> Result<String> {
    match source {
        InputSource::Argument(command) => Ok(command),
        InputSource::Stdin => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read command from stdin")?;
            // Drop the newline a shell pipe appends
            if text.ends_with('\n') {
                text.pop();
                if text.ends_with('\r') {
                    text.pop();
                }
            }
            Ok(text)
        }
    }
}

fn load_measure(spec: &MeasureSpec) -> Result<Box<dyn TextMeasure>> {
    Ok(match spec {
        MeasureSpec::Monospace => Box::new(Monospace::default()),
        MeasureSpec::Font { path, size } => Box::new(FontMeasure::from_file(path, *size)?),
    })
}

fn run(run: RunConfig) -> Result<()> {
    let mut config = EditorConfig::load();
    if let Some(indent) = run.continuation_indent {
        config.continuation_indent = indent;
    }

    let text = read_input(run.input)?;
    let measure = load_measure(&run.measure)?;
    let editor = CommandEditor::with_text(&text, config, run.width);
    let report = Report::build(&editor, measure.as_ref());
    tracing::debug!(
        tokens = report.tokens.len(),
        lines = report.lines.len(),
        "laid out command"
    );

    match run.format {
        OutputFormat::Text => print!("{}", report.to_text()),
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&report).context("failed to serialize report")?
        ),
    }
    Ok(())
}

fn main() -> Result<()> {
    reqline::tracing::init();

    let config = CliArgs::parse().into_config()?;
    run(config)
}
