//! Command-line interface for cmdline
//!
//! This module handles:
//! - Command-line argument parsing using clap
//! - Configuration loading and validation
//! - Registry selection (file or built-in sample)
//! - One-shot subcommands (demo, parse, complete, completion, config)

use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::debug;

use crate::completion::get_completions;
use crate::config::{Config, LogLevel};
use crate::error::{CmdlineError, Result};
use crate::parser::{generate_command, parse_command};
use crate::registry::Registry;

pub mod completion;
mod demo;

pub use demo::{DEMO_LINES, render_completion, render_parse, write_demo};

/// Command line parser and completer for `name -flag --key=value positional` commands
#[derive(Parser, Debug)]
#[command(
    name = "cmdline",
    version,
    about = "Parse and complete command lines against a command registry",
    long_about = "Parses lines of the form `name -flag --key=value positional`, re-serializes
them, and offers registry-driven tab completion in an interactive REPL."
)]
pub struct CliArgs {
    /// Configuration file path
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Command registry file (TOML)
    ///
    /// Overrides `registry.path` from the config file. Without either,
    /// the built-in sample registry is used.
    #[arg(short = 'r', long, value_name = "FILE")]
    pub registry: Option<PathBuf>,

    /// Disable colored output
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Quiet mode (errors only)
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Very verbose mode (trace logging)
    #[arg(long = "vv")]
    pub very_verbose: bool,

    /// Subcommands
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands for cmdline
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show version information
    Version,

    /// Run the built-in demonstration lines through the parser and completer
    Demo,

    /// Parse a line and print its canonical form
    Parse {
        /// Command line to parse
        #[arg(value_name = "LINE", allow_hyphen_values = true)]
        line: String,

        /// Print the parsed command as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print completion candidates for a line ending at the cursor
    Complete {
        /// Command line to complete
        #[arg(value_name = "LINE", allow_hyphen_values = true)]
        line: String,

        /// Print the completion result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completion script
    Completion {
        /// Shell type (bash, zsh, fish)
        #[arg(value_name = "SHELL")]
        shell: String,
    },

    /// Show configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Validate configuration file
        #[arg(long)]
        validate: bool,
    },
}

/// CLI interface handler
pub struct CliInterface {
    /// Parsed command-line arguments
    args: CliArgs,

    /// Loaded configuration
    config: Config,
}

impl CliInterface {
    /// Create a new CLI interface from the process arguments
    pub fn new() -> Result<Self> {
        Self::from_args(CliArgs::parse())
    }

    /// Create a CLI interface from already parsed arguments
    pub fn from_args(args: CliArgs) -> Result<Self> {
        let config = Self::load_config(&args)?;
        Ok(Self { args, config })
    }

    /// Load configuration from file and merge with arguments
    fn load_config(args: &CliArgs) -> Result<Config> {
        let config_path = args.config_file.as_deref();
        let mut config = Config::load_from_file(config_path)?;

        if let Err(e) = config.validate() {
            eprintln!("Warning: Configuration validation failed: {}", e);
            eprintln!("Using default configuration instead.");
            config = Config::default();
        }

        Self::apply_args_to_config(&mut config, args);

        Ok(config)
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get the CLI arguments
    pub fn args(&self) -> &CliArgs {
        &self.args
    }

    /// Override configuration values with CLI arguments where provided
    fn apply_args_to_config(config: &mut Config, args: &CliArgs) {
        if let Some(path) = &args.registry {
            config.registry.path = Some(path.clone());
        }

        if args.no_color {
            config.display.color_output = false;
        }

        config.logging.level = if args.very_verbose {
            LogLevel::Trace
        } else if args.verbose {
            LogLevel::Debug
        } else if args.quiet {
            LogLevel::Error
        } else {
            config.logging.level
        };
    }

    /// Load the command registry named by the configuration
    ///
    /// # Returns
    /// * `Result<Registry>` - The registry file's contents, or the sample registry
    pub fn load_registry(&self) -> Result<Registry> {
        match &self.config.registry.path {
            Some(path) => {
                debug!("Loading registry from {}", path.display());
                Registry::from_file(path)
            }
            None => {
                debug!("Using built-in sample registry");
                Ok(Registry::sample())
            }
        }
    }

    /// Handle subcommands if present
    ///
    /// # Returns
    /// * `Result<bool>` - True if a subcommand was handled and the REPL should not start
    pub fn handle_subcommand(&self) -> Result<bool> {
        let Some(command) = &self.args.command else {
            return Ok(false);
        };

        let stdout = io::stdout();
        let mut out = stdout.lock();

        match command {
            Commands::Version => {
                writeln!(out, "cmdline {}", crate::version())?;
            }
            Commands::Demo => {
                let registry = self.load_registry()?;
                write_demo(&mut out, &registry, self.config.display.color_output)?;
            }
            Commands::Parse { line, json } => self.parse_line(&mut out, line, *json)?,
            Commands::Complete { line, json } => self.complete_line(&mut out, line, *json)?,
            Commands::Completion { shell } => {
                completion::generate_completion(shell, &mut out)?;
            }
            Commands::Config { show, validate } => {
                self.handle_config_command(&mut out, *show, *validate)?;
            }
        }

        Ok(true)
    }

    /// Parse one line and print the recreated command or its JSON form
    fn parse_line<W: Write>(&self, out: &mut W, line: &str, json: bool) -> Result<()> {
        let command = parse_command(line)?;
        if json {
            let rendered = serde_json::to_string_pretty(&command)
                .map_err(|e| CmdlineError::Generic(format!("Failed to render JSON: {e}")))?;
            writeln!(out, "{rendered}")?;
        } else {
            writeln!(out, "{}", generate_command(&command))?;
        }
        Ok(())
    }

    /// Print completion candidates for one line
    fn complete_line<W: Write>(&self, out: &mut W, line: &str, json: bool) -> Result<()> {
        let registry = self.load_registry()?;
        let result = get_completions(&registry, line);
        if json {
            let rendered = serde_json::to_string_pretty(&result)
                .map_err(|e| CmdlineError::Generic(format!("Failed to render JSON: {e}")))?;
            writeln!(out, "{rendered}")?;
        } else {
            for candidate in &result.candidates {
                writeln!(out, "{candidate}")?;
            }
            writeln!(out, "replace_length: {}", result.replace_length)?;
        }
        Ok(())
    }

    /// Handle config subcommand
    fn handle_config_command<W: Write>(&self, out: &mut W, show: bool, validate: bool) -> Result<()> {
        if validate {
            self.validate_config_file(out)?;
        }

        if show || !validate {
            writeln!(out, "{}", self.config.to_toml_string()?)?;
        }

        Ok(())
    }

    /// Validate the configuration file and the registry it points to
    fn validate_config_file<W: Write>(&self, out: &mut W) -> Result<()> {
        let path = self
            .args
            .config_file
            .clone()
            .unwrap_or_else(Config::default_path);

        if path.exists() {
            let config = Config::from_file(&path)?;
            config.validate()?;
            writeln!(out, "Configuration file {} is valid", path.display())?;
        } else {
            writeln!(
                out,
                "No configuration file at {}, using defaults",
                path.display()
            )?;
        }

        let registry = self.load_registry()?;
        writeln!(out, "Registry defines {} commands", registry.len())?;
        Ok(())
    }

    /// Print the REPL greeting
    pub fn print_banner(&self) {
        if !self.args.quiet {
            println!("cmdline {}", crate::version());
            println!("Press Tab to complete, Ctrl-D or `exit` to leave.");
        }
    }
}
