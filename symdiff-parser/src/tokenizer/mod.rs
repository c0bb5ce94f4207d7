pub mod token;

use logos::{Lexer, Logos};
pub use token::{Token, TokenKind};

/// Returns an iterator over the token kinds produced by the tokenizer.
pub fn tokenize(input: &str) -> Lexer<TokenKind> {
    TokenKind::lexer(input)
}

/// Returns an owned array containing all of the non-whitespace tokens produced by the tokenizer.
pub fn tokenize_complete(input: &str) -> Box<[Token]> {
    let mut lexer = tokenize(input);
    let mut tokens = Vec::new();

    // every character belongs to one of the token kinds, so the lexer never reports an error
    while let Some(Ok(kind)) = lexer.next() {
        if kind.is_whitespace() {
            continue;
        }

        tokens.push(Token {
            span: lexer.span(),
            kind,
            lexeme: lexer.slice(),
        });
    }

    tokens.into_boxed_slice()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    /// Compares the tokens produced by the tokenizer to the raw expected tokens.
    fn compare_tokens<'source, const N: usize>(input: &'source str, expected: [(TokenKind, &'source str); N]) {
        let mut lexer = tokenize(input);

        for (expected_kind, expected_lexeme) in expected.into_iter() {
            assert_eq!(lexer.next(), Some(Ok(expected_kind)));
            assert_eq!(lexer.slice(), expected_lexeme);
        }

        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn postfix_expr() {
        compare_tokens(
            "2 x  *\t3 -",
            [
                (TokenKind::Word, "2"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Word, "x"),
                (TokenKind::Whitespace, "  "),
                (TokenKind::Word, "*"),
                (TokenKind::Whitespace, "\t"),
                (TokenKind::Word, "3"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Word, "-"),
            ],
        );
    }

    #[test]
    fn prefix_expr() {
        compare_tokens(
            "(- (* -2 x)3)",
            [
                (TokenKind::OpenParen, "("),
                (TokenKind::Word, "-"),
                (TokenKind::Whitespace, " "),
                (TokenKind::OpenParen, "("),
                (TokenKind::Word, "*"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Word, "-2"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Word, "x"),
                (TokenKind::CloseParen, ")"),
                (TokenKind::Word, "3"),
                (TokenKind::CloseParen, ")"),
            ],
        );
    }

    #[test]
    fn complete_skips_whitespace() {
        let tokens = tokenize_complete("  (sin\nx) ");
        let lexemes = tokens.iter().map(|t| t.lexeme).collect::<Vec<_>>();
        assert_eq!(lexemes, vec!["(", "sin", "x", ")"]);
        assert_eq!(tokens[1].span, 3..6);
    }

    #[test]
    fn complete_empty() {
        assert!(tokenize_complete("").is_empty());
        assert!(tokenize_complete(" \t\n ").is_empty());
    }
}
