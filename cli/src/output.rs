//! Output formatting for scanned tokens.
//!
//! Text mode prints one token per line on stdout and diagnostics on stderr.
//! JSON mode prints a single object with every token and diagnostic, JSONL mode
//! streams one record per token and diagnostic followed by a summary line.

use lang::error::Diagnostic;
use lang::lexer::{Literal, Token};
use serde::Serialize;
use serde_json::Value;
use std::io::{self, Write};

/// Output mode for CLI execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable lines (default)
    Text,
    /// Single JSON object after scanning completes
    Json,
    /// One JSON record per line
    Jsonl,
}

impl OutputMode {
    pub fn parse(format: Option<&str>) -> Result<Self, String> {
        match format {
            None | Some("text") => Ok(OutputMode::Text),
            Some("json") => Ok(OutputMode::Json),
            Some("jsonl") => Ok(OutputMode::Jsonl),
            Some(other) => Err(format!("Invalid output format: '{}'. Use: text, json, jsonl", other)),
        }
    }
}

/// Token as it appears in JSON output.
#[derive(Debug, Clone, Serialize)]
pub struct JsonToken {
    #[serde(rename = "type")]
    pub token_type: &'static str,
    pub lexeme: String,
    pub literal: Value,
    pub line: usize,
}

impl From<&Token> for JsonToken {
    fn from(token: &Token) -> Self {
        let literal = match &token.literal {
            Some(Literal::String(value)) => Value::from(value.as_str()),
            Some(Literal::Number(value)) => Value::from(*value),
            None => Value::Null,
        };

        JsonToken {
            token_type: token.kind.name(),
            lexeme: token.lexeme.clone(),
            literal,
            line: token.line,
        }
    }
}

/// Diagnostic as it appears in JSON output.
#[derive(Debug, Clone, Serialize)]
pub struct JsonError {
    pub line: usize,
    pub location: String,
    pub message: String,
}

impl From<&Diagnostic> for JsonError {
    fn from(diagnostic: &Diagnostic) -> Self {
        JsonError {
            line: diagnostic.line,
            location: diagnostic.location.clone(),
            message: diagnostic.message.clone(),
        }
    }
}

/// JSON output for a whole scan.
#[derive(Debug, Clone, Serialize)]
pub struct JsonScanOutput {
    #[serde(rename = "type")]
    pub output_type: &'static str,
    pub status: &'static str,
    pub tokens: Vec<JsonToken>,
    pub errors: Vec<JsonError>,
}

/// One JSONL line.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "record", rename_all = "lowercase")]
pub enum JsonlRecord {
    Token(JsonToken),
    Error(JsonError),
    Summary { status: &'static str, tokens: usize, errors: usize },
}

fn status(diagnostics: &[Diagnostic]) -> &'static str {
    if diagnostics.is_empty() {
        "complete"
    } else {
        "error"
    }
}

/// Format a scan as a single JSON object.
pub fn format_scan_json(tokens: &[Token], diagnostics: &[Diagnostic]) -> serde_json::Result<String> {
    let output = JsonScanOutput {
        output_type: "scan",
        status: status(diagnostics),
        tokens: tokens.iter().map(JsonToken::from).collect(),
        errors: diagnostics.iter().map(JsonError::from).collect(),
    };

    serde_json::to_string(&output)
}

/// JSONL writer that flushes after every record.
pub struct JsonlWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonlWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn write_record(&mut self, record: &JsonlRecord) -> io::Result<()> {
        let json = serde_json::to_string(record)?;
        writeln!(self.writer, "{}", json)?;
        self.writer.flush()
    }
}

/// Write one scan's tokens and diagnostics in the given mode.
///
/// Only text mode uses `err`; the JSON modes keep diagnostics in the structured output.
pub fn write_scan<W: Write, E: Write>(
    mode: OutputMode,
    out: &mut W,
    err: &mut E,
    tokens: &[Token],
    diagnostics: &[Diagnostic],
) -> io::Result<()> {
    match mode {
        OutputMode::Text => {
            for token in tokens {
                writeln!(out, "{}", token)?;
            }
            for diagnostic in diagnostics {
                writeln!(err, "{}", diagnostic)?;
            }
            out.flush()?;
            err.flush()
        }
        OutputMode::Json => {
            let json = format_scan_json(tokens, diagnostics)?;
            writeln!(out, "{}", json)?;
            out.flush()
        }
        OutputMode::Jsonl => {
            let mut writer = JsonlWriter::new(out);
            for token in tokens {
                writer.write_record(&JsonlRecord::Token(JsonToken::from(token)))?;
            }
            for diagnostic in diagnostics {
                writer.write_record(&JsonlRecord::Error(JsonError::from(diagnostic)))?;
            }
            writer.write_record(&JsonlRecord::Summary {
                status: status(diagnostics),
                tokens: tokens.len(),
                errors: diagnostics.len(),
            })
        }
    }
}
