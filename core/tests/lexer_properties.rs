use lol::lexer::scan;
use lol::lexer::token::TokenKind;
use proptest::prelude::*;

/// Sources biased towards the characters the scanner cares about.
fn lexical_source() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z0-9_ \n\t\r\"./=<>!$#(){}\\[\\]:;,|*+-]{0,80}",
        any::<String>(),
    ]
}

proptest! {
    #[test]
    fn ends_with_exactly_one_eof(source in lexical_source()) {
        let tokens = scan(&source).tokens;
        prop_assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
        prop_assert_eq!(tokens.iter().filter(|t| t.kind == TokenKind::Eof).count(), 1);
    }

    #[test]
    fn scanning_is_deterministic(source in lexical_source()) {
        prop_assert_eq!(scan(&source), scan(&source));
    }

    #[test]
    fn spans_stay_in_bounds_and_ordered(source in lexical_source()) {
        let tokens = scan(&source).tokens;
        let mut prev_end = 0;
        for token in &tokens {
            prop_assert!(token.span.start <= token.span.end);
            prop_assert!(token.span.end <= source.len());
            prop_assert!(prev_end <= token.span.start);
            prev_end = token.span.end;
        }
    }

    #[test]
    fn lines_count_preceding_newlines(source in lexical_source()) {
        for token in scan(&source).tokens {
            let before = source.as_bytes()[..token.span.start]
                .iter()
                .filter(|&&b| b == b'\n')
                .count();
            let expected = match token.kind {
                TokenKind::Newline => before + 2,
                _ => before + 1,
            };
            prop_assert_eq!(token.line, expected, "token {:?}", token);
        }
    }

    #[test]
    fn digit_runs_stay_whole(numbers in proptest::collection::vec(0u64..1_000_000, 0..12)) {
        let source = numbers
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        let texts: Vec<String> = scan(&source)
            .tokens
            .into_iter()
            .filter(|t| t.kind == TokenKind::Number)
            .map(|t| t.text)
            .collect();
        let expected: Vec<String> = numbers.iter().map(ToString::to_string).collect();
        prop_assert_eq!(texts, expected);
    }
}
