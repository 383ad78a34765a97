//! Completer for reedline - provides completion suggestions

use reedline::{Completer, Span, Suggestion};

use crate::completion::CompletionEngine;
use crate::parser::Lexer;
use crate::registry::Registry;

/// Registry-driven completer for reedline
pub struct CommandCompleter {
    /// Completion engine for registry suggestions
    completion_engine: CompletionEngine,
}

impl CommandCompleter {
    /// Create a completer over a registry
    pub fn new(registry: Registry) -> Self {
        Self {
            completion_engine: CompletionEngine::from_registry(registry),
        }
    }
}

impl Completer for CommandCompleter {
    /// Complete the input at the given cursor position
    ///
    /// Only the text before the cursor is considered. Each suggestion
    /// replaces the part of the current token already typed.
    fn complete(&mut self, line: &str, pos: usize) -> Vec<Suggestion> {
        let pos = pos.min(line.len());
        let Some(before_cursor) = line.get(..pos) else {
            return Vec::new();
        };

        let result = self.completion_engine.complete(before_cursor);

        // The replaced prefix is the last token's text, which only sits right
        // before the cursor when nothing (whitespace, an open quote) follows it
        let last_token_end = Lexer::new(before_cursor)
            .filter(|token| !token.is_end())
            .last()
            .map_or(0, |token| token.end());
        let start = if last_token_end == pos {
            pos.saturating_sub(result.replace_length)
        } else {
            pos
        };

        result
            .candidates
            .into_iter()
            .map(|candidate| Suggestion {
                value: candidate,
                description: None,
                style: None,
                extra: None,
                span: Span::new(start, pos),
                append_whitespace: false,
                match_indices: None,
            })
            .collect()
    }
}
