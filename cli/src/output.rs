use lol::diagnostics::source_map::SourceMap;
use lol::{LolError, Token, TokenKind};
use owo_colors::OwoColorize;

/// One token per line: `line:col  Kind  "text"`.
pub fn print_tokens(source: &str, tokens: &[Token]) {
    let map = SourceMap::new(source);
    for token in tokens {
        let location = location(&map, token);
        println!(
            "{:>7}  {:<12} {}",
            location.bright_black(),
            paint_kind(token.kind),
            format!("{:?}", token.text).bright_white()
        );
    }
}

/// Where the lexeme starts in the source. A `Newline` token sits at the end
/// of the line it terminates, even though its `line` is the next one.
fn location(map: &SourceMap, token: &Token) -> String {
    let pos = map.position(token.span.start);
    format!("{}:{}", pos.line, pos.col)
}

pub fn print_json(tokens: &[Token]) {
    match serde_json::to_string_pretty(tokens) {
        Ok(json) => println!("{json}"),
        Err(err) => eprintln!("{} {err}", "error:".red().bold()),
    }
}

pub fn report(err: LolError) {
    eprintln!("{:?}", miette::Report::new(err));
}

fn paint_kind(kind: TokenKind) -> String {
    let name = kind.name();
    match kind {
        TokenKind::Ident => name.cyan().to_string(),
        TokenKind::Newline | TokenKind::Eof => name.bright_black().to_string(),
        k if k.is_literal() => name.yellow().to_string(),
        k if k.is_keyword() => name.blue().bold().to_string(),
        _ => name.to_string(),
    }
}
