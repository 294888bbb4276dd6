//! Lox scanner CLI
//!
//! Usage:
//!   lox <SCRIPT>           Scan a script file
//!   lox -e <CODE>          Scan inline source
//!   lox                    Start the interactive prompt
//!   lox -o <FORMAT>        Output format: text (default), json, jsonl

mod error;
mod output;
mod repl;

use clap::Parser;
use error::{CliError, EX_DATAERR, EX_USAGE};
use output::{write_scan, OutputMode};
use repl::Repl;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use lang::error::Diagnostics;
use lang::lexer::scan;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable holding the tracing filter, e.g. `LOX_LOG=lang=trace`
const LOG_ENV: &str = "LOX_LOG";

fn print_help() {
    println!(
        r#"lox scanner {}

USAGE:
    lox <SCRIPT>              Scan a script file
    lox -e <CODE>             Scan inline source
    lox                       Start the interactive prompt
    lox -o <FORMAT>           Output format (text, json, jsonl)
    lox -h                    Show this help

OPTIONS:
    -e, --eval <CODE>       Scan inline source
    -o, --output <FORMAT>   Output format: text (default), json, jsonl
    -h, --help              Show this help message
    -v, --version           Display version information

ENVIRONMENT:
    LOX_LOG                 Log filter (default: warn)

EXIT CODES:
    64  usage error
    65  the source contained lexical errors
    66  the script file could not be read"#,
        VERSION
    );
}

fn print_version() {
    println!("lox scanner {}", VERSION);
}

/// Lox scanner
#[derive(Parser, Debug)]
#[command(name = "lox")]
#[command(version, about = "Lox scanner", long_about = None)]
#[command(disable_version_flag = true, disable_help_flag = true)]
struct Args {
    /// Print version
    #[arg(short = 'v', long = "version")]
    version: bool,

    /// Show help message
    #[arg(short = 'h', long = "help")]
    help: bool,

    /// The script file to scan (prompt mode when absent)
    script: Option<PathBuf>,

    /// Scan inline source
    #[arg(short = 'e', long = "eval", conflicts_with = "script")]
    eval: Option<String>,

    /// Output format: text (default), json, jsonl
    #[arg(short = 'o', long = "output", value_name = "FORMAT")]
    output: Option<String>,
}

/// Source text handed to the scanner
enum Source {
    /// From a file path
    File { path: PathBuf, content: String },
    /// From the -e flag
    Inline { content: String },
}

impl Source {
    fn content(&self) -> &str {
        match self {
            Source::File { content, .. } => content,
            Source::Inline { content } => content,
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return ExitCode::from(EX_USAGE);
        }
    };

    init_tracing();

    if args.help {
        print_help();
        return ExitCode::SUCCESS;
    }

    if args.version {
        print_version();
        return ExitCode::SUCCESS;
    }

    let mode = match OutputMode::parse(args.output.as_deref()) {
        Ok(mode) => mode,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::from(EX_USAGE);
        }
    };

    let result = match get_source(&args) {
        Ok(Some(source)) => run_source(&source, mode),
        Ok(None) => run_prompt(mode),
        Err(e) => Err(e),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "lox failed");
            eprintln!("{}", e);
            e.exit_code()
        }
    }
}

/// `-e` wins over a script path; neither means prompt mode.
fn get_source(args: &Args) -> Result<Option<Source>, CliError> {
    if let Some(ref content) = args.eval {
        return Ok(Some(Source::Inline {
            content: content.clone(),
        }));
    }

    if let Some(ref path) = args.script {
        let content = std::fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.clone(),
            source,
        })?;
        return Ok(Some(Source::File {
            path: path.clone(),
            content,
        }));
    }

    Ok(None)
}

fn run_source(source: &Source, mode: OutputMode) -> Result<ExitCode, CliError> {
    if let Source::File { path, .. } = source {
        debug!(path = %path.display(), "scanning file");
    }

    let mut diagnostics = Diagnostics::new();
    let (tokens, had_error) = scan(source.content(), &mut diagnostics);
    let diagnostics = diagnostics.into_vec();

    write_scan(
        mode,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
        &tokens,
        &diagnostics,
    )?;

    if had_error {
        Ok(ExitCode::from(EX_DATAERR))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

fn run_prompt(mode: OutputMode) -> Result<ExitCode, CliError> {
    let mut repl = Repl::new(mode)?;
    repl.run()?;
    Ok(ExitCode::SUCCESS)
}
