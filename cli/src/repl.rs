//! Interactive prompt: every line is scanned on its own and printed.

use crate::error::CliError;
use crate::output::{write_scan, OutputMode};
use lang::error::Diagnostics;
use lang::lexer::scan;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::io;
use tracing::debug;

const PROMPT: &str = "> ";

pub struct Repl {
    editor: DefaultEditor,
    mode: OutputMode,
}

impl Repl {
    pub fn new(mode: OutputMode) -> Result<Self, CliError> {
        Ok(Self {
            editor: DefaultEditor::new()?,
            mode,
        })
    }

    /// Read lines until end of input. Scan errors never end the loop.
    pub fn run(&mut self) -> Result<(), CliError> {
        loop {
            match self.editor.readline(PROMPT) {
                Ok(line) => {
                    if line.trim().is_empty() {
                        continue;
                    }
                    let _ = self.editor.add_history_entry(line.as_str());
                    self.scan_line(&line)?;
                }
                Err(ReadlineError::Interrupted) => continue,
                Err(ReadlineError::Eof) => break,
                Err(err) => return Err(err.into()),
            }
        }

        println!("Exiting lox scanner...");
        Ok(())
    }

    fn scan_line(&self, line: &str) -> Result<(), CliError> {
        // Fresh diagnostics per line; an error on one line does not taint the next
        let mut diagnostics = Diagnostics::new();
        let (tokens, had_error) = scan(line, &mut diagnostics);
        debug!(tokens = tokens.len(), had_error, "scanned prompt line");

        let diagnostics = diagnostics.into_vec();
        write_scan(
            self.mode,
            &mut io::stdout().lock(),
            &mut io::stderr().lock(),
            &tokens,
            &diagnostics,
        )?;
        Ok(())
    }
}
