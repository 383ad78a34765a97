//! Command Line Parsing and Completion Library
//!
//! This library parses interactive command lines of the form
//! `name -flag --key=value positional "quoted value"` and drives
//! registry-based tab completion for them.
//!
//! # Modules
//!
//! - `cli`: Command-line interface and argument parsing
//! - `completion`: Context-aware completion against a command registry
//! - `config`: Configuration management
//! - `error`: Error types and handling
//! - `parser`: Lexer, command parser and serializer
//! - `registry`: Known commands and the parameters they accept
//! - `repl`: Interactive REPL engine
//!
//! # Example
//!
//! ```
//! use cmdline::{generate_command, get_completions, parse_command, Registry};
//!
//! let command = parse_command(r#"create_sphere --name="super \"sphere\"" -r"#).unwrap();
//! assert_eq!(command.named("name"), Some(r#"super "sphere""#));
//! assert_eq!(
//!     generate_command(&command),
//!     r#"create_sphere -r --name="super \"sphere\"""#
//! );
//!
//! let completions = get_completions(&Registry::sample(), "create_world re");
//! assert_eq!(completions.candidates, vec!["red", "reddy"]);
//! ```

pub mod cli;
pub mod completion;
pub mod config;
pub mod error;
pub mod parser;
pub mod registry;
pub mod repl;

// Re-export commonly used types
pub use completion::{CompletionEngine, CompletionResult, get_completions};
pub use config::Config;
pub use error::{CmdlineError, ParseError, Result};
pub use parser::{ParsedCommand, generate_command, parse_command};
pub use registry::{CommandSpec, Registry};
pub use repl::ReplEngine;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get library version string
pub fn version() -> &'static str {
    VERSION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }
}
