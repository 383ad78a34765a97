//! Lexer for shell-like command lines
//!
//! Turns a line such as `cmd -flag --key="some value" positional` into a flat
//! stream of tokens. Both the command parser and the completion engine consume
//! this stream, so the lexer is forgiving: it never fails and never panics.
//!
//! # Rules
//!
//! - Whitespace (space, tab, CR, LF) separates tokens and is skipped
//! - `=` and `-` are always single-character tokens, so `--` is two hyphens
//! - `"` starts a quoted identifier running to the next `"` not preceded by
//!   a backslash; the token keeps both quotes and any escapes
//! - Anything else starts a bare identifier that runs until whitespace,
//!   `=`, `"`, `-` or the end of the line
//! - An unterminated quote lexes as end-of-input
//!
//! Offsets are byte offsets into the line. All special characters are ASCII,
//! so token boundaries always fall on UTF-8 character boundaries.

use std::ops::Range;

/// Token types of the command line language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Bare word or double-quoted run
    Identifier,
    /// `-`
    Hyphen,
    /// `=`
    EqualSign,
    /// End of the line
    EndOfInput,
    /// Reserved for characters without a lexical class
    Unknown,
}

/// Token borrowing its text from the lexed line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub span: Range<usize>,
    pub text: &'a str,
}

impl<'a> Token<'a> {
    fn new(kind: TokenKind, line: &'a str, span: Range<usize>) -> Self {
        let text = &line[span.clone()];
        Self { kind, span, text }
    }

    fn end_of_input(line: &'a str) -> Self {
        Self::new(TokenKind::EndOfInput, line, line.len()..line.len())
    }

    /// Byte offset of the first character after this token
    pub fn end(&self) -> usize {
        self.span.end
    }

    /// Whether the raw text starts with a double quote
    pub fn is_quoted(&self) -> bool {
        self.text.starts_with('"')
    }

    pub fn is_identifier(&self) -> bool {
        self.kind == TokenKind::Identifier
    }

    pub fn is_end(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }
}

/// Lex the single token starting at or after `position`.
///
/// Pure function of the line and the offset. Callers walk a line by feeding
/// back [`Token::end`] of the previous token. A position past the end of the
/// line, or one that does not sit on a character boundary and cannot be
/// rounded up to one, yields end-of-input.
pub fn lex(line: &str, position: usize) -> Token<'_> {
    let bytes = line.as_bytes();
    let mut pos = position;
    while pos < bytes.len() && !line.is_char_boundary(pos) {
        pos += 1;
    }

    while pos < bytes.len() && is_whitespace(bytes[pos]) {
        pos += 1;
    }

    if pos >= bytes.len() {
        return Token::end_of_input(line);
    }

    match bytes[pos] {
        b'=' => Token::new(TokenKind::EqualSign, line, pos..pos + 1),
        b'-' => Token::new(TokenKind::Hyphen, line, pos..pos + 1),
        b'"' => scan_quoted(line, pos),
        _ => scan_bare(line, pos),
    }
}

/// Scan a quoted identifier; the span covers both quotes
fn scan_quoted(line: &str, start: usize) -> Token<'_> {
    let bytes = line.as_bytes();
    let mut pos = start + 1;

    while pos < bytes.len() {
        if bytes[pos] == b'"' && bytes[pos - 1] != b'\\' {
            return Token::new(TokenKind::Identifier, line, start..pos + 1);
        }
        pos += 1;
    }

    Token::end_of_input(line)
}

/// Scan a bare identifier
fn scan_bare(line: &str, start: usize) -> Token<'_> {
    let bytes = line.as_bytes();
    let mut pos = start;

    while pos < bytes.len() && !is_special(bytes[pos]) && !is_whitespace(bytes[pos]) {
        pos += 1;
    }

    Token::new(TokenKind::Identifier, line, start..pos)
}

fn is_special(b: u8) -> bool {
    matches!(b, b'=' | b'"' | b'-')
}

fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\r' | b'\n')
}

/// Iterator over the tokens of a line, ending with (and including) the
/// end-of-input token
pub struct Lexer<'a> {
    line: &'a str,
    pos: usize,
    finished: bool,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer over a line
    pub fn new(line: &'a str) -> Self {
        Self {
            line,
            pos: 0,
            finished: false,
        }
    }

    /// Tokenize the entire line
    pub fn tokenize(line: &'a str) -> Vec<Token<'a>> {
        Self::new(line).collect()
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let token = lex(self.line, self.pos);
        self.pos = token.end();
        if matches!(token.kind, TokenKind::EndOfInput | TokenKind::Unknown) {
            self.finished = true;
        }
        Some(token)
    }
}
