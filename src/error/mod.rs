//! Error handling for cmdline.
//!
//! The parsing core reports a single, closed [`ParseError`] per failed parse.
//! Everything around it (configuration, registry loading, the interactive
//! front end) reports a [`CmdlineError`], which can wrap a `ParseError`.
//!
//! # Example
//!
//! ```rust
//! use cmdline::error::ParseError;
//! use cmdline::parser::parse_command;
//!
//! let err = parse_command("create_something --").unwrap_err();
//! assert_eq!(err, ParseError::ParamExpected);
//! println!("{err}");
//! ```

pub mod kinds;

// Re-export commonly used types
pub use kinds::{CmdlineError, ConfigError, ParseError, RegistryError, Result};
