//! Property tests for the lexer.
//!
//! 1. Rendering a token list and lexing it again gives the same list.
//! 2. The lexer never panics, whatever bytes it is handed.

#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use lisk_ir::TokenList;
use lisk_lexer::tokenize;
use proptest::prelude::*;

/// One lexeme of well-formed input.
fn lexeme_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("(".to_string()),
        Just(")".to_string()),
        Just("'".to_string()),
        Just("if".to_string()),
        prop::string::string_regex("[0-9]{1,12}").unwrap(),
        prop::string::string_regex("[a-zA-Z_+*/-][a-zA-Z0-9_+*/-]{0,8}").unwrap(),
    ]
}

/// Whitespace between lexemes. Parens may also be glued to their neighbors.
fn separator_strategy() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just(" "), Just("  "), Just("\n"), Just("\t"), Just("")]
}

fn source_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec((lexeme_strategy(), separator_strategy()), 0..40).prop_map(|parts| {
        let mut out = String::new();
        let mut prev_is_paren = true;
        for (lexeme, sep) in parts {
            let is_paren = lexeme == "(" || lexeme == ")";
            // Gluing two non-paren lexemes would fuse them into one chunk.
            if sep.is_empty() && !prev_is_paren && !is_paren {
                out.push(' ');
            } else {
                out.push_str(sep);
            }
            out.push_str(&lexeme);
            prev_is_paren = is_paren;
        }
        out
    })
}

fn render(tokens: &TokenList) -> String {
    let texts: Vec<&str> = tokens.as_slice().iter().map(|t| t.text.as_str()).collect();
    texts.join(" ")
}

proptest! {
    #[test]
    fn relexing_rendered_tokens_is_identity(source in source_strategy()) {
        let tokens = tokenize(&source).unwrap();
        let again = tokenize(&render(&tokens)).unwrap();
        prop_assert_eq!(again, tokens);
    }

    #[test]
    fn lexer_never_panics(source in "\\PC{0,64}") {
        let _ = tokenize(&source);
    }
}
