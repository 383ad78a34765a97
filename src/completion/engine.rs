//! Completion engine - orchestrates the completion flow
//!
//! This module ties the completion components together: lexing the line,
//! classifying the lookback window into a context, and fetching candidates.

use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, trace};

use super::context::CompletionContext;
use super::provider::CandidateProvider;
use super::token_stream::{Lookback, TokenStream};
use crate::parser::TokenKind;
use crate::registry::Registry;

/// Candidates for the token being typed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CompletionResult {
    /// Suggestions in registry order
    pub candidates: Vec<String>,

    /// Bytes before the cursor a UI must overwrite when inserting a candidate
    pub replace_length: usize,
}

/// Compute completions for a line against a registry.
///
/// The line is treated as ending at the cursor. Completion never fails; input
/// it cannot make sense of yields fewer (or no) candidates.
///
/// # Examples
///
/// ```
/// use cmdline::completion::get_completions;
/// use cmdline::registry::Registry;
///
/// let registry = Registry::sample();
/// let result = get_completions(&registry, "create_cylinder --identity=fo");
/// assert_eq!(result.candidates, vec!["foo", "foooooo"]);
/// assert_eq!(result.replace_length, 2);
/// ```
pub fn get_completions(registry: &Registry, line: &str) -> CompletionResult {
    complete_with(registry, line)
}

/// Main completion engine
pub struct CompletionEngine {
    /// Candidate provider for fetching suggestions
    provider: Arc<dyn CandidateProvider>,
}

impl CompletionEngine {
    /// Create a new completion engine
    ///
    /// # Arguments
    /// * `provider` - Candidate provider for fetching suggestions
    pub fn new(provider: Arc<dyn CandidateProvider>) -> Self {
        Self { provider }
    }

    /// Create an engine over a registry
    pub fn from_registry(registry: Registry) -> Self {
        Self::new(Arc::new(registry))
    }

    /// Complete the line, treating its end as the cursor position
    pub fn complete(&self, line: &str) -> CompletionResult {
        complete_with(self.provider.as_ref(), line)
    }
}

fn complete_with(provider: &dyn CandidateProvider, line: &str) -> CompletionResult {
    // 1. Lex the whole line
    let stream = TokenStream::new(line);

    // 2. Classify the last tokens into a context
    let context = determine_context(provider, &stream);
    debug!("Completion context for {:?}: {:?}", line, context);

    // 3. Fetch candidates based on context
    let candidates = fetch_candidates(provider, &context);
    trace!("{} completion candidates", candidates.len());

    CompletionResult {
        candidates,
        replace_length: context.replace_length(),
    }
}

/// Decide what the cursor is on
fn determine_context<'a>(
    provider: &dyn CandidateProvider,
    stream: &TokenStream<'a>,
) -> CompletionContext<'a> {
    let Some(command) = stream.command_token() else {
        return CompletionContext::Commands { prefix: "" };
    };
    let command_name = command.text;

    if !provider.has_command(command_name) {
        // Only a name still being typed gets command suggestions
        return if stream.has_only_command() && command.end() == stream.line().len() {
            CompletionContext::Commands {
                prefix: command_name,
            }
        } else {
            CompletionContext::None
        };
    }

    if stream.has_only_command() {
        return CompletionContext::None;
    }

    match stream.lookback() {
        Some(window) => classify(provider, command_name, window),
        None => CompletionContext::None,
    }
}

/// Match the lookback window of a known command
fn classify<'a>(
    provider: &dyn CandidateProvider,
    command: &'a str,
    window: Lookback<'_, 'a>,
) -> CompletionContext<'a> {
    use TokenKind::*;

    let target = window.target.text;
    let prev = window.prev.map(|t| t.text).unwrap_or_default();
    let prev_prev = window.prev_prev.map(|t| t.text).unwrap_or_default();

    match (window.target_kind(), window.prev_kind(), window.prev_prev_kind()) {
        // --name=va
        (Identifier, Some(EqualSign), Some(Identifier))
            if provider.has_parameter(command, prev_prev) =>
        {
            CompletionContext::ParameterValues {
                command,
                parameter: prev_prev,
                prefix: target,
            }
        }
        (Identifier, Some(EqualSign), _) => CompletionContext::None,
        // --na
        (Identifier, Some(Hyphen), Some(Hyphen)) => CompletionContext::NamedParameters {
            command,
            prefix: target,
        },
        // -fl
        (Identifier, Some(Hyphen), _) => CompletionContext::Flags {
            command,
            prefix: target,
        },
        (Identifier, _, _) => CompletionContext::Positionals {
            command,
            prefix: target,
        },
        // --name=
        (EqualSign, Some(Identifier), _) if provider.has_parameter(command, prev) => {
            CompletionContext::ParameterValues {
                command,
                parameter: prev,
                prefix: "",
            }
        }
        (EqualSign, _, _) => CompletionContext::None,
        // --
        (Hyphen, Some(Hyphen), _) => CompletionContext::NamedParameters { command, prefix: "" },
        // -
        (Hyphen, _, _) => CompletionContext::Flags { command, prefix: "" },
        (EndOfInput | Unknown, _, _) => CompletionContext::Positionals { command, prefix: "" },
    }
}

/// Fetch candidates based on completion context
fn fetch_candidates(provider: &dyn CandidateProvider, context: &CompletionContext<'_>) -> Vec<String> {
    match *context {
        CompletionContext::Commands { prefix } => provider.commands(prefix),
        CompletionContext::Flags { command, prefix } => provider.flags(command, prefix),
        CompletionContext::NamedParameters { command, prefix } => {
            provider.named_parameters(command, prefix)
        }
        CompletionContext::ParameterValues {
            command,
            parameter,
            prefix,
        } => provider.parameter_values(command, parameter, prefix),
        CompletionContext::Positionals { command, prefix } => provider.positionals(command, prefix),
        CompletionContext::None => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::CommandSpec;

    fn complete(line: &str) -> CompletionResult {
        get_completions(&Registry::sample(), line)
    }

    #[test]
    fn test_complete_empty_line_lists_commands() {
        let result = complete("");
        assert_eq!(result.candidates.len(), 5);
        assert_eq!(result.candidates[0], "create_sphere");
        assert_eq!(result.replace_length, 0);
    }

    #[test]
    fn test_complete_line_not_starting_with_identifier() {
        let result = complete("--param=hey create_cube");
        assert_eq!(result.candidates.len(), 5);
        assert_eq!(result.replace_length, 0);
    }

    #[test]
    fn test_complete_command_prefix() {
        let result = complete("create");
        assert_eq!(
            result.candidates,
            vec![
                "create_sphere",
                "create_cube",
                "create_world",
                "create_cylinder",
                "create_something"
            ]
        );
        assert_eq!(result.replace_length, 6);

        let result = complete("create_c");
        assert_eq!(result.candidates, vec!["create_cube", "create_cylinder"]);
        assert_eq!(result.replace_length, 8);
    }

    #[test]
    fn test_complete_unknown_command_with_arguments() {
        let result = complete("create -");
        assert!(result.candidates.is_empty());
        assert_eq!(result.replace_length, 0);

        let result = complete("create ");
        assert!(result.candidates.is_empty());
    }

    #[test]
    fn test_complete_known_command_alone() {
        let result = complete("create_world");
        assert!(result.candidates.is_empty());
        assert_eq!(result.replace_length, 0);

        let result = complete("create_world ");
        assert!(result.candidates.is_empty());
    }

    #[test]
    fn test_complete_named_parameter_prefix() {
        let result = complete("create_sphere --i");
        assert_eq!(result.candidates, vec!["id", "identity"]);
        assert_eq!(result.replace_length, 1);

        let result = complete("create_sphere --ide");
        assert_eq!(result.candidates, vec!["identity"]);
        assert_eq!(result.replace_length, 3);
    }

    #[test]
    fn test_complete_parameter_value_prefix() {
        let result = complete("create_cylinder --identity=fo");
        assert_eq!(result.candidates, vec!["foo", "foooooo"]);
        assert_eq!(result.replace_length, 2);
    }

    #[test]
    fn test_complete_parameter_value_of_unknown_parameter() {
        let result = complete("create_cylinder --nope=fo");
        assert!(result.candidates.is_empty());
        assert_eq!(result.replace_length, 0);
    }

    #[test]
    fn test_complete_all_parameter_values() {
        let result = complete("create_something --id=");
        assert_eq!(result.candidates, vec!["unknown", "01", "99"]);
        assert_eq!(result.replace_length, 0);
    }

    #[test]
    fn test_complete_equal_sign_after_unknown_parameter() {
        let result = complete("create_something --nope=");
        assert!(result.candidates.is_empty());
    }

    #[test]
    fn test_complete_flags() {
        let result = complete("create_something -");
        assert_eq!(result.candidates, vec!["foo", "bar"]);
        assert_eq!(result.replace_length, 0);

        let result = complete("create_something -f");
        assert_eq!(result.candidates, vec!["foo"]);
        assert_eq!(result.replace_length, 1);

        let result = complete("create_something -foo");
        assert!(result.candidates.is_empty());
        assert_eq!(result.replace_length, 3);
    }

    #[test]
    fn test_complete_all_named_parameters() {
        let result = complete("create_something --");
        assert_eq!(result.candidates, vec!["id", "identity", "whatever"]);
        assert_eq!(result.replace_length, 0);
    }

    #[test]
    fn test_complete_positionals() {
        let result = complete("create_world re");
        assert_eq!(result.candidates, vec!["red", "reddy"]);
        assert_eq!(result.replace_length, 2);

        let result = complete("create_world red");
        assert_eq!(result.candidates, vec!["reddy"]);
        assert_eq!(result.replace_length, 3);
    }

    #[test]
    fn test_complete_after_complete_named_parameter() {
        let result = complete("create_cube --id=01 gr");
        assert_eq!(result.candidates, vec!["green", "greeny"]);
        assert_eq!(result.replace_length, 2);
    }

    #[test]
    fn test_complete_unterminated_quote() {
        let result = complete("create_world red \"gre");
        assert_eq!(result.candidates, vec!["reddy"]);
        assert_eq!(result.replace_length, 3);
    }

    #[test]
    fn test_engine_with_custom_registry() {
        let registry = Registry::new().with_command(
            "spawn",
            CommandSpec::new()
                .flag("quiet")
                .named_parameter("kind", ["orc", "elf"]),
        );
        let engine = CompletionEngine::from_registry(registry);

        assert_eq!(engine.complete("sp").candidates, vec!["spawn"]);
        assert_eq!(engine.complete("spawn -q").candidates, vec!["quiet"]);
        assert_eq!(engine.complete("spawn --kind=").candidates, vec!["orc", "elf"]);
    }
}
