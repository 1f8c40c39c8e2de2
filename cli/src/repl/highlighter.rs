use std::borrow::Cow;

use lol::TokenKind;
use owo_colors::OwoColorize;

/// Colour a line by scanning it. Text that produced no token (whitespace,
/// comments, bad characters, unterminated strings) is left as typed.
pub fn highlight_line(line: &str) -> Cow<'_, str> {
    let tokens = lol::scan(line).tokens;
    let mut out = String::with_capacity(line.len() * 2);
    let mut last = 0;

    for token in &tokens {
        let Some(lexeme) = line.get(token.span.start..token.span.end) else {
            continue;
        };
        out.push_str(line.get(last..token.span.start).unwrap_or_default());
        out.push_str(&paint(token.kind, lexeme));
        last = token.span.end;
    }
    out.push_str(line.get(last..).unwrap_or_default());

    Cow::Owned(out)
}

fn paint(kind: TokenKind, lexeme: &str) -> String {
    match kind {
        TokenKind::String => lexeme.green().to_string(),
        TokenKind::Number | TokenKind::True | TokenKind::False => lexeme.yellow().to_string(),
        k if k.is_keyword() => lexeme.blue().bold().to_string(),
        _ => lexeme.to_string(),
    }
}

pub fn highlight_prompt(prompt: &str) -> Cow<'_, str> {
    if prompt == "> " {
        return Cow::Owned(format!("{} ", ">".bright_green().bold()));
    }
    Cow::Borrowed(prompt)
}

#[cfg(test)]
mod tests {
    use super::highlight_line;

    fn strip_ansi(s: &str) -> String {
        let mut out = String::new();
        let mut chars = s.chars();
        while let Some(c) = chars.next() {
            if c == '\x1b' {
                for c in chars.by_ref() {
                    if c == 'm' {
                        break;
                    }
                }
            } else {
                out.push(c);
            }
        }
        out
    }

    #[test]
    fn highlighting_preserves_text() {
        for line in ["let x = \"hi\" // note", "if a >= 3.5 { $ }", "\"open", ""] {
            assert_eq!(strip_ansi(&highlight_line(line)), line);
        }
    }
}
