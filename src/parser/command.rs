//! Parsed command representation

use indexmap::IndexMap;
use serde::Serialize;

/// A command line broken into its parts.
///
/// Values are stored unquoted: surrounding quotes are stripped and `\"`
/// escapes resolved. Named parameters keep their first-insertion order so
/// that serializing and re-parsing reproduces the original layout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParsedCommand {
    /// Command name (first token of the line)
    pub name: String,

    /// Positional values in encounter order
    pub ordered_params: Vec<String>,

    /// `--name=value` pairs; a repeated name keeps the last value
    pub named_params: IndexMap<String, String>,

    /// Flag names in encounter order, duplicates included
    pub flags: Vec<String>,
}

impl ParsedCommand {
    /// Whether a flag was given at least once
    pub fn has_flag(&self, flag: &str) -> bool {
        self.flags.iter().any(|f| f == flag)
    }

    /// Value of a named parameter
    pub fn named(&self, name: &str) -> Option<&str> {
        self.named_params.get(name).map(String::as_str)
    }
}

/// Accumulates the parts of a command while the parser walks the line.
///
/// Consumed exactly once by [`CommandBuilder::build`].
#[derive(Debug)]
pub(crate) struct CommandBuilder {
    name: String,
    ordered_params: Vec<String>,
    named_params: IndexMap<String, String>,
    flags: Vec<String>,
}

impl CommandBuilder {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ordered_params: Vec::new(),
            named_params: IndexMap::new(),
            flags: Vec::new(),
        }
    }

    pub(crate) fn flag(&mut self, flag: impl Into<String>) {
        self.flags.push(flag.into());
    }

    pub(crate) fn named(&mut self, name: impl Into<String>, value: String) {
        self.named_params.insert(name.into(), value);
    }

    pub(crate) fn positional(&mut self, value: String) {
        self.ordered_params.push(value);
    }

    pub(crate) fn build(self) -> ParsedCommand {
        ParsedCommand {
            name: self.name,
            ordered_params: self.ordered_params,
            named_params: self.named_params,
            flags: self.flags,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_keeps_last_named_value() {
        let mut builder = CommandBuilder::new("cmd");
        builder.named("id", "1".to_string());
        builder.named("other", "x".to_string());
        builder.named("id", "2".to_string());
        let command = builder.build();

        assert_eq!(command.named("id"), Some("2"));
        let keys: Vec<&String> = command.named_params.keys().collect();
        assert_eq!(keys, vec!["id", "other"]);
    }

    #[test]
    fn test_builder_keeps_duplicate_flags() {
        let mut builder = CommandBuilder::new("cmd");
        builder.flag("v");
        builder.flag("v");
        let command = builder.build();

        assert_eq!(command.flags, vec!["v", "v"]);
        assert!(command.has_flag("v"));
        assert!(!command.has_flag("q"));
    }
}
