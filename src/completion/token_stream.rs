//! Token stream with lookback for completion
//!
//! The completion engine never parses the line. It lexes the whole line once
//! and looks at the last few tokens before end-of-input to guess what the
//! user is typing.

use crate::parser::{Lexer, Token, TokenKind};

/// The last (up to) three tokens before end-of-input.
///
/// `target` is the token the cursor sits on or right after; `prev` and
/// `prev_prev` are the tokens before it, when the line has them.
#[derive(Debug, Clone, Copy)]
pub struct Lookback<'s, 'a> {
    pub target: &'s Token<'a>,
    pub prev: Option<&'s Token<'a>>,
    pub prev_prev: Option<&'s Token<'a>>,
}

impl Lookback<'_, '_> {
    pub fn target_kind(&self) -> TokenKind {
        self.target.kind
    }

    pub fn prev_kind(&self) -> Option<TokenKind> {
        self.prev.map(|t| t.kind)
    }

    pub fn prev_prev_kind(&self) -> Option<TokenKind> {
        self.prev_prev.map(|t| t.kind)
    }
}

/// All tokens of a line, including the terminal token
pub struct TokenStream<'a> {
    line: &'a str,
    tokens: Vec<Token<'a>>,
}

impl<'a> TokenStream<'a> {
    /// Lex the full line
    pub fn new(line: &'a str) -> Self {
        Self {
            line,
            tokens: Lexer::tokenize(line),
        }
    }

    pub fn line(&self) -> &'a str {
        self.line
    }

    /// Tokens before the terminal end-of-input (or unknown) token
    pub fn tokens_before_end(&self) -> &[Token<'a>] {
        let end = self.tokens.len().saturating_sub(1);
        &self.tokens[..end]
    }

    /// The first token, if it is an identifier
    pub fn command_token(&self) -> Option<&Token<'a>> {
        self.tokens.first().filter(|t| t.is_identifier())
    }

    /// Whether the command name is the only token on the line
    pub fn has_only_command(&self) -> bool {
        self.tokens_before_end().len() == 1
    }

    /// Lookback window ending at the last token before end-of-input
    pub fn lookback(&self) -> Option<Lookback<'_, 'a>> {
        let before = self.tokens_before_end();
        let (target, rest) = before.split_last()?;
        let mut rest = rest.iter().rev();
        Some(Lookback {
            target,
            prev: rest.next(),
            prev_prev: rest.next(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_stream() {
        let stream = TokenStream::new("");
        assert!(stream.tokens_before_end().is_empty());
        assert!(stream.command_token().is_none());
        assert!(stream.lookback().is_none());
    }

    #[test]
    fn test_command_token_requires_identifier() {
        assert!(TokenStream::new("-x").command_token().is_none());
        assert_eq!(
            TokenStream::new("cmd -x").command_token().map(|t| t.text),
            Some("cmd")
        );
    }

    #[test]
    fn test_only_command() {
        assert!(TokenStream::new("cmd").has_only_command());
        assert!(TokenStream::new("cmd  ").has_only_command());
        assert!(!TokenStream::new("cmd x").has_only_command());
    }

    #[test]
    fn test_lookback_window() {
        let stream = TokenStream::new("cmd --identity=fo");
        let window = stream.lookback().unwrap();
        assert_eq!(window.target.text, "fo");
        assert_eq!(window.prev_kind(), Some(TokenKind::EqualSign));
        assert_eq!(window.prev_prev.map(|t| t.text), Some("identity"));
    }

    #[test]
    fn test_lookback_short_line() {
        let stream = TokenStream::new("cmd -");
        let window = stream.lookback().unwrap();
        assert_eq!(window.target_kind(), TokenKind::Hyphen);
        assert_eq!(window.prev.map(|t| t.text), Some("cmd"));
        assert!(window.prev_prev.is_none());
    }

    #[test]
    fn test_lookback_ignores_trailing_whitespace() {
        let stream = TokenStream::new("cmd red   ");
        let window = stream.lookback().unwrap();
        assert_eq!(window.target.text, "red");
    }
}
