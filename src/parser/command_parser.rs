//! Recursive-descent parser for command lines
//!
//! Grammar:
//!
//! ```text
//! command     := identifier (part)*
//! part        := flag | named_param | positional
//! flag        := '-' identifier
//! named_param := '-' '-' identifier '=' identifier
//! positional  := identifier
//! ```
//!
//! The parser pulls tokens one at a time from [`lex`] with an advancing
//! cursor. Every token is consumed exactly once; there is no backtracking.

use tracing::{debug, trace};

use super::command::{CommandBuilder, ParsedCommand};
use super::lexer::{Token, TokenKind, lex};
use crate::error::ParseError;

/// Parse a command line into a [`ParsedCommand`].
///
/// An empty line reports [`ParseError::MustStartWithCommand`] rather than
/// [`ParseError::EmptyCommand`], since the first token it yields is
/// end-of-input and not an identifier.
///
/// # Examples
///
/// ```
/// use cmdline::parser::parse_command;
///
/// let cmd = parse_command(r#"create_cube -r --name=cube --pos="0.0 0.0 0.0""#).unwrap();
/// assert_eq!(cmd.name, "create_cube");
/// assert_eq!(cmd.flags, vec!["r"]);
/// assert_eq!(cmd.named("pos"), Some("0.0 0.0 0.0"));
/// ```
pub fn parse_command(line: &str) -> Result<ParsedCommand, ParseError> {
    let result = CommandParser::new(line).parse();
    match &result {
        Ok(command) => trace!("Parsed command: {:?}", command),
        Err(err) => debug!("Failed to parse {:?}: {:?}", line, err),
    }
    result
}

/// Strip the quotes of a quoted value and resolve its `\"` escapes.
///
/// Values that do not start with a quote are returned verbatim.
pub fn normalize_identifier(raw: &str) -> String {
    match raw.strip_prefix('"') {
        Some(inner) => inner
            .strip_suffix('"')
            .unwrap_or(inner)
            .replace("\\\"", "\""),
        None => raw.to_string(),
    }
}

struct CommandParser<'a> {
    line: &'a str,
    pos: usize,
}

impl<'a> CommandParser<'a> {
    fn new(line: &'a str) -> Self {
        Self { line, pos: 0 }
    }

    /// Lex the next token and move the cursor past it
    fn next_token(&mut self) -> Token<'a> {
        let token = lex(self.line, self.pos);
        self.pos = token.end();
        token
    }

    fn parse(mut self) -> Result<ParsedCommand, ParseError> {
        let first = self.next_token();
        if !first.is_identifier() {
            return Err(ParseError::MustStartWithCommand);
        }

        let mut builder = CommandBuilder::new(first.text);

        loop {
            let token = self.next_token();
            match token.kind {
                TokenKind::EndOfInput => break,
                TokenKind::Hyphen => self.parse_after_hyphen(&mut builder)?,
                TokenKind::Identifier => builder.positional(normalize_identifier(token.text)),
                TokenKind::EqualSign => return Err(ParseError::EqualSignOutOfPlace),
                TokenKind::Unknown => return Err(ParseError::UnknownToken),
            }
        }

        Ok(builder.build())
    }

    /// `-` was consumed: either a flag or the second hyphen of `--name=value`
    fn parse_after_hyphen(&mut self, builder: &mut CommandBuilder) -> Result<(), ParseError> {
        let token = self.next_token();
        match token.kind {
            TokenKind::Hyphen => self.parse_named_param(builder),
            TokenKind::Identifier => {
                if token.is_quoted() {
                    return Err(ParseError::FlagCannotBeQuoted);
                }
                builder.flag(token.text);
                Ok(())
            }
            _ => Err(ParseError::WrongHyphenUse),
        }
    }

    /// `--` was consumed: expect `name=value`
    fn parse_named_param(&mut self, builder: &mut CommandBuilder) -> Result<(), ParseError> {
        let name = self.next_token();
        if !name.is_identifier() {
            return Err(ParseError::ParamExpected);
        }
        if name.is_quoted() {
            return Err(ParseError::ParamNameCannotBeQuoted);
        }

        if self.next_token().kind != TokenKind::EqualSign {
            return Err(ParseError::ExpectedEqualSign);
        }

        let value = self.next_token();
        if !value.is_identifier() {
            return Err(ParseError::ExpectedParameterValue);
        }

        builder.named(name.text, normalize_identifier(value.text));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_command() {
        let cmd = parse_command(r#"create_cube -r --name=cube --pos="0.0 0.0 0.0""#).unwrap();
        assert_eq!(cmd.name, "create_cube");
        assert_eq!(cmd.flags, vec!["r"]);
        assert_eq!(cmd.named("name"), Some("cube"));
        assert_eq!(cmd.named("pos"), Some("0.0 0.0 0.0"));
        assert!(cmd.ordered_params.is_empty());
    }

    #[test]
    fn test_parse_escaped_quotes_in_value() {
        let cmd =
            parse_command(r#"create_sphere --radius=10.0 --name="super \"sphere\"""#).unwrap();
        assert_eq!(cmd.named("radius"), Some("10.0"));
        assert_eq!(cmd.named("name"), Some(r#"super "sphere""#));
    }

    #[test]
    fn test_parse_command_only() {
        let cmd = parse_command("create_world").unwrap();
        assert_eq!(cmd.name, "create_world");
        assert!(cmd.flags.is_empty());
        assert!(cmd.named_params.is_empty());
        assert!(cmd.ordered_params.is_empty());
    }

    #[test]
    fn test_parse_positionals_in_order() {
        let cmd = parse_command("create_cylinder 0.0 0.0 0.0 3.0 10.0").unwrap();
        assert_eq!(cmd.ordered_params, vec!["0.0", "0.0", "0.0", "3.0", "10.0"]);
    }

    #[test]
    fn test_single_hyphen_identifier_is_flag() {
        let cmd = parse_command("create_something -f").unwrap();
        assert_eq!(cmd.flags, vec!["f"]);
        assert!(cmd.ordered_params.is_empty());
    }

    #[test]
    fn test_duplicate_flags_are_kept() {
        let cmd = parse_command("cmd -v -q -v").unwrap();
        assert_eq!(cmd.flags, vec!["v", "q", "v"]);
    }

    #[test]
    fn test_repeated_named_param_last_wins() {
        let cmd = parse_command("cmd --id=1 --id=2").unwrap();
        assert_eq!(cmd.named_params.len(), 1);
        assert_eq!(cmd.named("id"), Some("2"));
    }

    #[test]
    fn test_quoted_positional_is_normalized() {
        let cmd = parse_command(r#"say "hello world" plain"#).unwrap();
        assert_eq!(cmd.ordered_params, vec!["hello world", "plain"]);
    }

    #[test]
    fn test_whitespace_around_parts() {
        let cmd = parse_command("  cmd\t- f  -- key = value  ").unwrap();
        assert_eq!(cmd.flags, vec!["f"]);
        assert_eq!(cmd.named("key"), Some("value"));
    }

    #[test]
    fn test_error_must_start_with_command() {
        assert_eq!(
            parse_command("--param=hey create_cube"),
            Err(ParseError::MustStartWithCommand)
        );
        assert_eq!(parse_command("=x"), Err(ParseError::MustStartWithCommand));
    }

    #[test]
    fn test_empty_line_is_must_start_with_command() {
        assert_eq!(parse_command(""), Err(ParseError::MustStartWithCommand));
        assert_eq!(parse_command("   "), Err(ParseError::MustStartWithCommand));
    }

    #[test]
    fn test_error_param_expected() {
        assert_eq!(
            parse_command("create_something --"),
            Err(ParseError::ParamExpected)
        );
        assert_eq!(
            parse_command("create_something --="),
            Err(ParseError::ParamExpected)
        );
        assert_eq!(
            parse_command("create_something ---"),
            Err(ParseError::ParamExpected)
        );
    }

    #[test]
    fn test_error_expected_equal_sign() {
        assert_eq!(
            parse_command("create_something --a"),
            Err(ParseError::ExpectedEqualSign)
        );
        assert_eq!(
            parse_command("create_something --a b"),
            Err(ParseError::ExpectedEqualSign)
        );
    }

    #[test]
    fn test_error_wrong_hyphen_use() {
        assert_eq!(
            parse_command("create_something -"),
            Err(ParseError::WrongHyphenUse)
        );
        assert_eq!(
            parse_command("create_something -=x"),
            Err(ParseError::WrongHyphenUse)
        );
    }

    #[test]
    fn test_error_expected_parameter_value() {
        assert_eq!(
            parse_command("create_something --id="),
            Err(ParseError::ExpectedParameterValue)
        );
        assert_eq!(
            parse_command("create_something --id=-"),
            Err(ParseError::ExpectedParameterValue)
        );
    }

    #[test]
    fn test_error_quoted_names() {
        assert_eq!(
            parse_command(r#"cmd -"flag""#),
            Err(ParseError::FlagCannotBeQuoted)
        );
        assert_eq!(
            parse_command(r#"cmd --"name"=v"#),
            Err(ParseError::ParamNameCannotBeQuoted)
        );
    }

    #[test]
    fn test_error_equal_sign_out_of_place() {
        assert_eq!(
            parse_command("cmd value = other"),
            Err(ParseError::EqualSignOutOfPlace)
        );
    }

    #[test]
    fn test_unterminated_quote_ends_the_line() {
        let cmd = parse_command(r#"cmd a "unterminated b"#).unwrap();
        assert_eq!(cmd.ordered_params, vec!["a"]);
    }

    #[test]
    fn test_normalize_identifier() {
        assert_eq!(normalize_identifier("plain"), "plain");
        assert_eq!(normalize_identifier(r#""a b""#), "a b");
        assert_eq!(normalize_identifier(r#""say \"hi\"""#), r#"say "hi""#);
        assert_eq!(normalize_identifier(r#""""#), "");
        assert_eq!(normalize_identifier(r#"back\slash"#), r#"back\slash"#);
    }
}
