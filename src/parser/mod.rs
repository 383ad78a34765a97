//! Command line parsing
//!
//! A line of the form `cmd -flag --key=value positional "quoted value"` goes
//! through three stages:
//! - `lexer`: splits the line into identifier, hyphen and equal-sign tokens
//! - `command_parser`: walks the tokens and builds a [`ParsedCommand`]
//! - `serializer`: renders a [`ParsedCommand`] back to a line
//!
//! The lexer is shared with the completion engine, which reads the same
//! token stream to infer what the cursor is sitting on.
//!
//! # Examples
//!
//! ```
//! use cmdline::parser::{generate_command, parse_command};
//!
//! let cmd = parse_command("create_cylinder -v --height=3 0.0 1.0").unwrap();
//! assert!(cmd.has_flag("v"));
//! assert_eq!(cmd.named("height"), Some("3"));
//! assert_eq!(cmd.ordered_params, vec!["0.0", "1.0"]);
//!
//! assert_eq!(generate_command(&cmd), "create_cylinder -v --height=3 0.0 1.0");
//! ```

mod command;
mod command_parser;
mod lexer;
mod serializer;

// Re-export public API
pub use command::ParsedCommand;
pub use command_parser::{normalize_identifier, parse_command};
pub use lexer::{Lexer, Token, TokenKind, lex};
pub use serializer::{escape, generate_command};
