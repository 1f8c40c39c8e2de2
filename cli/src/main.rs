use std::fs;
use std::process::ExitCode;

use clap::Parser;
use lol::LolError;
use owo_colors::OwoColorize;

mod output;
mod repl;
mod tracing_config;

#[derive(Parser)]
#[command(name = "lol", about = "Tokenizer for the lol language")]
struct Cli {
    /// Path to a source file to scan
    file: Option<String>,
    /// Scan inline source instead of a file
    #[arg(long)]
    eval: Option<String>,
    /// Print the token stream as JSON
    #[arg(long)]
    json: bool,
    /// Only report diagnostics
    #[arg(long, short)]
    quiet: bool,
    /// Print version and exit
    #[arg(long)]
    version: bool,
}

fn main() -> ExitCode {
    tracing_config::init_tracing();
    let cli = Cli::parse();

    if cli.version {
        println!(
            "{} {}",
            "lol".bright_cyan().bold(),
            env!("CARGO_PKG_VERSION").bright_black()
        );
        return ExitCode::SUCCESS;
    }

    let (source, name) = match (cli.eval, cli.file) {
        (Some(code), _) => (code, "<eval>".to_owned()),
        (None, Some(file)) => match fs::read_to_string(&file) {
            Ok(source) => (source, file),
            Err(err) => {
                output::report(LolError::io(file, err));
                return ExitCode::FAILURE;
            }
        },
        (None, None) => {
            return match repl::run() {
                Ok(()) => ExitCode::SUCCESS,
                Err(err) => {
                    eprintln!("{} {err}", "repl error:".red().bold());
                    ExitCode::FAILURE
                }
            };
        }
    };

    let scanned = lol::scan(&source);
    if !cli.quiet {
        if cli.json {
            output::print_json(&scanned.tokens);
        } else {
            output::print_tokens(&source, &scanned.tokens);
        }
    }

    match scanned.into_result(&name, &source) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            output::report(err);
            ExitCode::FAILURE
        }
    }
}
