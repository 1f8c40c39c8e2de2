mod completer;
mod helper;
mod highlighter;

use std::fs;

use owo_colors::OwoColorize;
use rustyline::error::ReadlineError;
use rustyline::{Config, EditMode, Editor};

use self::helper::ReplHelper;
use crate::output;

pub fn run() -> Result<(), ReadlineError> {
    let config = Config::builder()
        .history_ignore_dups(true)?
        .completion_type(rustyline::CompletionType::List)
        .edit_mode(EditMode::Emacs)
        .build();

    let mut rl: Editor<ReplHelper, rustyline::history::DefaultHistory> =
        Editor::with_config(config)?;
    rl.set_helper(Some(ReplHelper));

    println!(
        "{} {}",
        "lol".bright_cyan().bold(),
        env!("CARGO_PKG_VERSION").bright_black()
    );
    println!("{}", "Type .help for REPL commands".bright_black());

    loop {
        match rl.readline("> ") {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }

                match handle_command(trimmed) {
                    Command::Exit => break,
                    Command::Handled => continue,
                    Command::NotACommand => {}
                }

                let _ = rl.add_history_entry(trimmed);
                scan_snippet("<repl>", trimmed);
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", "^C".yellow());
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("{}", "bye".bright_black());
                break;
            }
            Err(err) => return Err(err),
        }
    }

    Ok(())
}

enum Command {
    Exit,
    Handled,
    NotACommand,
}

fn handle_command(trimmed: &str) -> Command {
    if trimmed == ".exit" || trimmed == "exit" {
        return Command::Exit;
    }
    if trimmed == ".help" {
        println!("{}", ".help                show commands".bright_blue());
        println!(
            "{}",
            ".load <file>         scan a file and print its tokens".bright_blue()
        );
        println!("{}", ".exit                exit REPL".bright_blue());
        return Command::Handled;
    }
    if let Some(path) = trimmed.strip_prefix(".load ") {
        let path = path.trim();
        match fs::read_to_string(path) {
            Ok(source) => scan_snippet(path, &source),
            Err(err) => eprintln!("{} {err}", "load error:".red().bold()),
        }
        return Command::Handled;
    }
    Command::NotACommand
}

fn scan_snippet(name: &str, source: &str) {
    let scanned = lol::scan(source);
    output::print_tokens(source, &scanned.tokens);
    if let Err(err) = scanned.into_result(name, source) {
        output::report(err);
    }
}
