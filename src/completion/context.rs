//! Completion context definitions
//!
//! A [`CompletionContext`] says what kind of thing the cursor is on and what
//! has already been typed of it. The typed prefix doubles as the text a
//! completion UI has to replace, so an empty prefix means "insert at the
//! cursor, suggest everything".

/// What to complete, based on the tokens before the cursor
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionContext<'a> {
    /// Command names
    Commands {
        /// Prefix to filter command names
        prefix: &'a str,
    },

    /// Flags of a command, after `-`
    Flags { command: &'a str, prefix: &'a str },

    /// Named parameter names of a command, after `--`
    NamedParameters { command: &'a str, prefix: &'a str },

    /// Suggested values of a named parameter, after `--name=`
    ParameterValues {
        command: &'a str,
        parameter: &'a str,
        prefix: &'a str,
    },

    /// Positional parameter suggestions of a command
    Positionals { command: &'a str, prefix: &'a str },

    /// No completion available
    None,
}

impl<'a> CompletionContext<'a> {
    /// Get the prefix for this context
    pub fn prefix(&self) -> &'a str {
        match self {
            Self::Commands { prefix }
            | Self::Flags { prefix, .. }
            | Self::NamedParameters { prefix, .. }
            | Self::ParameterValues { prefix, .. }
            | Self::Positionals { prefix, .. } => *prefix,
            Self::None => "",
        }
    }

    /// Number of already typed bytes a candidate replaces
    pub fn replace_length(&self) -> usize {
        self.prefix().len()
    }
}
