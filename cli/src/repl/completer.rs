use lol::lexer::token::KEYWORDS;
use rustyline::completion::Pair;

pub fn complete_line(line: &str, pos: usize) -> (usize, Vec<Pair>) {
    let safe_pos = pos.min(line.len());
    let prefix = line.get(..safe_pos).unwrap_or_default();

    let start = word_start(prefix);
    let needle = &prefix[start..];
    if needle.is_empty() {
        return (start, Vec::new());
    }

    let pairs = KEYWORDS
        .iter()
        .filter(|kw| kw.starts_with(needle))
        .map(|kw| Pair {
            display: (*kw).to_string(),
            replacement: (*kw).to_string(),
        })
        .collect();

    (start, pairs)
}

fn word_start(prefix: &str) -> usize {
    prefix
        .char_indices()
        .rev()
        .find(|&(_, c)| !(c.is_ascii_alphanumeric() || c == '_'))
        .map_or(0, |(idx, c)| idx + c.len_utf8())
}

#[cfg(test)]
mod tests {
    use super::complete_line;

    #[test]
    fn completes_keyword_prefix() {
        let (start, pairs) = complete_line("x = fa", 6);
        assert_eq!(start, 4);
        let words: Vec<_> = pairs.iter().map(|p| p.replacement.as_str()).collect();
        assert_eq!(words, vec!["false"]);
    }

    #[test]
    fn multiple_matches_keep_table_order() {
        let (_, pairs) = complete_line("i", 1);
        let words: Vec<_> = pairs.iter().map(|p| p.replacement.as_str()).collect();
        assert_eq!(words, vec!["int", "in", "if"]);
    }

    #[test]
    fn empty_word_offers_nothing() {
        let (start, pairs) = complete_line("let ", 4);
        assert_eq!(start, 4);
        assert!(pairs.is_empty());
    }
}
