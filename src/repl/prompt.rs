//! Custom prompt implementation for the cmdline REPL

use std::borrow::Cow;

use nu_ansi_term::Color;
use reedline::{Prompt, PromptEditMode, PromptHistorySearch, PromptHistorySearchStatus};

/// Prompt showing the configured text
pub struct CommandPrompt {
    /// Prompt text, e.g. `"> "`
    text: String,
}

impl CommandPrompt {
    /// Create a new prompt
    ///
    /// # Arguments
    /// * `text` - Prompt text
    /// * `color_enabled` - Paint the prompt text
    pub fn new(text: &str, color_enabled: bool) -> Self {
        let text = if color_enabled {
            Color::Green.bold().paint(text).to_string()
        } else {
            text.to_string()
        };
        Self { text }
    }
}

impl Prompt for CommandPrompt {
    fn render_prompt_left(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.text)
    }

    fn render_prompt_right(&self) -> Cow<'_, str> {
        "".into()
    }

    /// The indicator is part of the left prompt text
    fn render_prompt_indicator(&self, _prompt_mode: PromptEditMode) -> Cow<'_, str> {
        "".into()
    }

    fn render_prompt_multiline_indicator(&self) -> Cow<'_, str> {
        "... ".into()
    }

    fn render_prompt_history_search_indicator(
        &self,
        history_search: PromptHistorySearch,
    ) -> Cow<'_, str> {
        let prefix = match history_search.status {
            PromptHistorySearchStatus::Passing => "",
            PromptHistorySearchStatus::Failing => "failing ",
        };

        format!("({}reverse-search: {}) ", prefix, history_search.term).into()
    }
}
