//! Tab completion for command lines
//!
//! Completion does not parse the line. It lexes it, looks at the last few
//! tokens and decides what the user is typing from their kinds alone, which
//! keeps it working on incomplete and malformed input.
//!
//! # Architecture
//!
//! - **TokenStream**: lexes the line and exposes a three-token lookback window
//! - **Context**: what to complete and the prefix already typed
//! - **Provider**: fetches candidates (implemented by [`Registry`](crate::registry::Registry))
//! - **Engine**: orchestrates the flow
//!
//! # Examples
//!
//! ```
//! use cmdline::completion::get_completions;
//! use cmdline::registry::Registry;
//!
//! let registry = Registry::sample();
//!
//! let result = get_completions(&registry, "create_sphere --i");
//! assert_eq!(result.candidates, vec!["id", "identity"]);
//! assert_eq!(result.replace_length, 1);
//! ```

mod context;
mod engine;
mod provider;
mod token_stream;

pub use context::CompletionContext;
pub use engine::{CompletionEngine, CompletionResult, get_completions};
pub use provider::CandidateProvider;
