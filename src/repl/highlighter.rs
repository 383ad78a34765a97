//! Token-based syntax highlighter for command lines
//!
//! Colors each lexed token by its role: the command name, option names
//! after `-`/`--`, values after `=`, quoted strings and positionals.
//! Whitespace between tokens and any text after an unterminated quote
//! are passed through unstyled.

use nu_ansi_term::{Color, Style};
use reedline::{Highlighter, StyledText};

use crate::parser::{Lexer, Token, TokenKind};

/// Highlighter coloring tokens by role
pub struct TokenHighlighter {
    enabled: bool,
}

impl TokenHighlighter {
    /// Create a new highlighter
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    fn style_for(token: &Token<'_>, index: usize, prev: Option<TokenKind>) -> Style {
        match token.kind {
            TokenKind::Hyphen | TokenKind::EqualSign => Color::DarkGray.normal(),
            TokenKind::Identifier if index == 0 => Color::Green.bold(),
            TokenKind::Identifier if token.is_quoted() => Color::Yellow.normal(),
            TokenKind::Identifier => match prev {
                Some(TokenKind::Hyphen) => Color::Cyan.normal(),
                Some(TokenKind::EqualSign) => Color::Yellow.normal(),
                _ => Style::default(),
            },
            TokenKind::EndOfInput | TokenKind::Unknown => Style::default(),
        }
    }
}

impl Default for TokenHighlighter {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Highlighter for TokenHighlighter {
    fn highlight(&self, line: &str, _cursor: usize) -> StyledText {
        let mut styled = StyledText::new();
        if !self.enabled {
            styled.push((Style::default(), line.to_string()));
            return styled;
        }

        let mut written = 0;
        let mut prev = None;
        for (index, token) in Lexer::new(line).enumerate() {
            if token.is_end() {
                break;
            }
            if token.span.start > written {
                styled.push((Style::default(), line[written..token.span.start].to_string()));
            }
            styled.push((
                Self::style_for(&token, index, prev),
                token.text.to_string(),
            ));
            written = token.end();
            prev = Some(token.kind);
        }

        if written < line.len() {
            styled.push((Style::default(), line[written..].to_string()));
        }
        styled
    }
}
