//! REPL (Read-Eval-Print Loop) for cmdline
//!
//! This module provides an interactive shell interface with features:
//! - Line editing with reedline
//! - File-backed command history
//! - Tab completion driven by the command registry
//! - Token highlighting
//!
//! Every entered line is parsed and echoed back in canonical form, or the
//! parse error is reported.

mod completer;
mod highlighter;
mod prompt;

pub use completer::CommandCompleter;
pub use highlighter::TokenHighlighter;
pub use prompt::CommandPrompt;

use nu_ansi_term::Color;
use reedline::{
    ColumnarMenu, Emacs, FileBackedHistory, KeyCode, KeyModifiers, MenuBuilder, Reedline,
    ReedlineEvent, ReedlineMenu, Signal, default_emacs_keybindings,
};
use std::fs;
use tracing::{debug, warn};

use crate::config::{Config, HistoryConfig};
use crate::error::{CmdlineError, Result};
use crate::parser::{generate_command, parse_command};
use crate::registry::Registry;

const COMPLETION_MENU: &str = "completion_menu";

/// What a single read from the editor produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplInput {
    /// A submitted line
    Line(String),
    /// Ctrl-C: the current line was discarded
    Interrupted,
    /// Ctrl-D: leave the REPL
    Exit,
}

/// REPL engine for interactive parsing
pub struct ReplEngine {
    /// Line editor for command input
    editor: Reedline,

    /// Prompt shown before each line
    prompt: CommandPrompt,

    /// Registered command names, for `help`
    commands: Vec<String>,

    /// Enable colored output
    color_enabled: bool,

    /// Whether to continue running
    running: bool,
}

impl ReplEngine {
    /// Create a new REPL engine
    ///
    /// # Arguments
    /// * `registry` - Commands offered by tab completion
    /// * `config` - History, prompt and color settings
    pub fn new(registry: Registry, config: &Config) -> Result<Self> {
        let color_enabled = config.display.color_output;
        if registry.is_empty() {
            warn!("Command registry is empty; Tab completion has nothing to offer");
        }
        let commands = registry.command_names().map(str::to_string).collect();

        let mut keybindings = default_emacs_keybindings();
        keybindings.add_binding(
            KeyModifiers::NONE,
            KeyCode::Tab,
            ReedlineEvent::UntilFound(vec![
                ReedlineEvent::Menu(COMPLETION_MENU.to_string()),
                ReedlineEvent::MenuNext,
            ]),
        );

        let menu = ColumnarMenu::default().with_name(COMPLETION_MENU);

        let mut editor = Reedline::create()
            .with_completer(Box::new(CommandCompleter::new(registry)))
            .with_highlighter(Box::new(TokenHighlighter::new(color_enabled)))
            .with_menu(ReedlineMenu::EngineCompleter(Box::new(menu)))
            .with_edit_mode(Box::new(Emacs::new(keybindings)));

        if config.history.persist {
            match Self::open_history(&config.history) {
                Ok(history) => editor = editor.with_history(Box::new(history)),
                Err(e) => warn!("History disabled: {}", e),
            }
        }

        Ok(Self {
            editor,
            prompt: CommandPrompt::new(&config.display.prompt, color_enabled),
            commands,
            color_enabled,
            running: true,
        })
    }

    /// Open the history file, creating its directory if needed
    fn open_history(history: &HistoryConfig) -> Result<FileBackedHistory> {
        if let Some(parent) = history.file_path.parent() {
            fs::create_dir_all(parent)?;
        }
        debug!("Using history file {}", history.file_path.display());
        FileBackedHistory::with_file(history.max_size, history.file_path.clone())
            .map_err(|e| CmdlineError::Generic(format!("Failed to open history: {e}")))
    }

    /// Start the REPL loop
    ///
    /// Reads lines until `exit`, `quit` or Ctrl-D, printing the result of
    /// each one.
    pub fn run(&mut self) -> Result<()> {
        while self.running {
            match self.read_line()? {
                ReplInput::Line(line) => {
                    if let Some(output) = self.process_input(&line) {
                        println!("{output}");
                    }
                }
                ReplInput::Interrupted => continue,
                ReplInput::Exit => self.running = false,
            }
        }
        Ok(())
    }

    /// Read a single line of input
    pub fn read_line(&mut self) -> Result<ReplInput> {
        match self.editor.read_line(&self.prompt)? {
            Signal::Success(line) => Ok(ReplInput::Line(line)),
            Signal::CtrlC => Ok(ReplInput::Interrupted),
            Signal::CtrlD => Ok(ReplInput::Exit),
            #[allow(unreachable_patterns)]
            _ => Ok(ReplInput::Interrupted),
        }
    }

    /// Process one line of user input
    ///
    /// # Returns
    /// * `Option<String>` - Text to print, if any
    pub fn process_input(&mut self, input: &str) -> Option<String> {
        let trimmed = input.trim();
        match trimmed {
            "" => None,
            "exit" | "quit" => {
                self.running = false;
                None
            }
            "help" => Some(self.help_text()),
            _ => Some(self.render_parse(input)),
        }
    }

    /// Check if REPL is still running
    pub fn is_running(&self) -> bool {
        self.running
    }

    fn render_parse(&self, input: &str) -> String {
        match parse_command(input) {
            Ok(command) => generate_command(&command),
            Err(e) => {
                debug!("Rejected {:?}: {:?}", input, e);
                let label = if self.color_enabled {
                    Color::Red.bold().paint("ERROR:").to_string()
                } else {
                    "ERROR:".to_string()
                };
                format!("{label} {e}")
            }
        }
    }

    fn help_text(&self) -> String {
        let mut text = String::from("Commands:\n");
        for name in &self.commands {
            text.push_str("  ");
            text.push_str(name);
            text.push('\n');
        }
        text.push_str("Type a command line to parse it, Tab to complete, `exit` to leave.");
        text
    }
}
