/*!
Main binary for jsonlex.
*/

use anyhow::{Context, Result};
use clap::{ArgAction, CommandFactory, Parser, Subcommand};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use log::{debug, info};
use std::io::{self, IsTerminal, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use jsonlex::{commands, tokenize, write_colored_error, write_colored_tokens};

/// Split a JSON document into its lexical tokens.
#[derive(Parser)]
#[command(name = "jlex", version, about, long_about = None, disable_help_subcommand = true)]
struct Args {
    /// Optional subcommands
    #[command(subcommand)]
    command: Option<Commands>,
    #[arg(value_name = "FILE", conflicts_with = "expr")]
    /// Optional path to a JSON file. If omitted, reads from STDIN
    input: Option<PathBuf>,
    /// Tokenize TEXT instead of reading a file or STDIN
    #[arg(short, long, value_name = "TEXT")]
    expr: Option<String>,
    /// Print the tokens as a JSON array
    #[arg(long, action = ArgAction::SetTrue)]
    json: bool,
    /// Do not pretty-print the JSON output, instead use compact
    #[arg(long, action = ArgAction::SetTrue, requires = "json")]
    compact: bool,
    /// Display the number of tokens
    #[arg(long, action = ArgAction::SetTrue)]
    count: bool,
    /// Do not display the tokens
    #[arg(short, long, action = ArgAction::SetTrue)]
    no_display: bool,
    /// Omit the lexeme column from the token listing
    #[arg(long, action = ArgAction::SetTrue)]
    no_lexeme: bool,
    /// Disable colored output
    #[arg(long, action = ArgAction::SetTrue)]
    no_color: bool,
    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,
}

/// Available subcommands for `jlex`
#[derive(Subcommand)]
enum Commands {
    #[command(subcommand)]
    /// Generate additional documentation and/or completions
    Generate(GenerateCommand),
}

/// Generate shell completions and man pages
#[derive(Subcommand)]
enum GenerateCommand {
    /// Generate shell completions for the given shell to stdout.
    Shell { shell: clap_complete::Shell },
    /// Generate man pages for jlex to output directory if specified, else
    /// the current directory.
    Man {
        /// The output directory to write the man pages.
        #[clap(short, long)]
        output_dir: Option<PathBuf>,
    },
}

/// Entry point for main binary.
///
/// Reads the document from `--expr`, the given file, or piped STDIN, and
/// prints its tokens to STDOUT. A lexical error is reported (to STDERR, or as
/// JSON on STDOUT with `--json`) and the process exits with status 1.
fn main() -> Result<ExitCode> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .parse_default_env()
        .init();

    if args.no_color {
        colored::control::set_override(false);
    }

    match &args.command {
        Some(Commands::Generate(cmd)) => {
            match cmd {
                GenerateCommand::Shell { shell } => {
                    commands::generate::generate_completions(
                        *shell,
                        &mut Args::command(),
                        &mut io::stdout().lock(),
                    );
                }
                GenerateCommand::Man { output_dir } => {
                    for path in commands::generate::generate_man_pages(
                        &Args::command(),
                        output_dir.clone(),
                    )? {
                        write_stdout(&format!("Generated: {}", path.display()))?;
                    }
                }
            }
            Ok(ExitCode::SUCCESS)
        }
        None => run(&args),
    }
}

/// Tokenize the selected input and display the result.
fn run(args: &Args) -> Result<ExitCode> {
    let (source, text) = if let Some(expr) = &args.expr {
        ("<expr>".to_string(), expr.clone())
    } else if let Some(path) = &args.input {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read file {}", path.display()))?;
        (path.display().to_string(), text)
    } else {
        if io::stdin().is_terminal() {
            // No piped input and no file specified
            Args::command().print_help()?;
            return Ok(ExitCode::SUCCESS);
        }
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read STDIN")?;
        ("<stdin>".to_string(), buffer)
    };
    debug!("read {} bytes from {source}", text.len());

    let tokens = match tokenize(&text) {
        Ok(tokens) => tokens,
        Err(err) => {
            info!("{source}: {err}");
            if args.json {
                print_json(&err, args.compact)?;
            } else {
                write_colored_error(&mut io::stderr().lock(), &text, &err)?;
            }
            return Ok(ExitCode::FAILURE);
        }
    };
    info!("{source}: {} tokens", tokens.len());

    if args.count {
        write_stdout(&format!("Tokens: {}", tokens.len()))?;
    }

    if !args.no_display {
        if args.json {
            print_json(&tokens, args.compact)?;
        } else {
            write_colored_tokens(
                &mut io::stdout().lock(),
                &tokens,
                !args.no_lexeme,
            )?;
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Serialize `value` to STDOUT, compact or pretty-printed.
fn print_json<T: serde::Serialize>(value: &T, compact: bool) -> Result<()> {
    let json = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    write_stdout(&json)
}

/// Write one line to STDOUT. A broken pipe (e.g. `jlex ... | head`) is not an
/// error.
fn write_stdout(line: &str) -> Result<()> {
    match writeln!(io::stdout().lock(), "{line}") {
        Err(err) if err.kind() != io::ErrorKind::BrokenPipe => {
            Err(err).context("write to stdout")
        }
        _ => Ok(()),
    }
}
