//! Registry of known commands
//!
//! Maps each command name to the flags, named parameters and positional
//! parameter names it accepts. The completion engine reads it; nothing in
//! this crate mutates a registry once it has been built.
//!
//! Registries are usually built in code or loaded from TOML:
//!
//! ```toml
//! [commands.create_sphere]
//! flags = ["foo", "bar"]
//! ordered_params = ["red", "green"]
//!
//! [commands.create_sphere.named_parameters]
//! identity = ["me", "him"]
//! ```
//!
//! Declaration order is preserved, so candidates come back in the order the
//! registry lists them.

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

use crate::error::{CmdlineError, RegistryError, Result};

/// What a single command accepts
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandSpec {
    /// Flag names, given on the line as `-name`
    #[serde(default)]
    pub flags: IndexSet<String>,

    /// Suggested positional values, used for completion only
    #[serde(default)]
    pub ordered_params: Vec<String>,

    /// Named parameter names with their suggested values
    #[serde(default)]
    pub named_parameters: IndexMap<String, Vec<String>>,
}

impl CommandSpec {
    /// Create an empty spec
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a flag
    pub fn flag(mut self, name: impl Into<String>) -> Self {
        self.flags.insert(name.into());
        self
    }

    /// Add a suggested positional value
    pub fn ordered_param(mut self, name: impl Into<String>) -> Self {
        self.ordered_params.push(name.into());
        self
    }

    /// Add a named parameter and its suggested values
    pub fn named_parameter<I, S>(mut self, name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.named_parameters
            .insert(name.into(), values.into_iter().map(Into::into).collect());
        self
    }

    /// Suggested values of a named parameter, if the parameter is known
    pub fn parameter_values(&self, name: &str) -> Option<&[String]> {
        self.named_parameters.get(name).map(Vec::as_slice)
    }
}

/// Command name to [`CommandSpec`] mapping
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registry {
    #[serde(default)]
    commands: IndexMap<String, CommandSpec>,
}

impl Registry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a command, replacing any previous spec of the same name
    pub fn insert(&mut self, name: impl Into<String>, spec: CommandSpec) {
        self.commands.insert(name.into(), spec);
    }

    /// Builder form of [`Registry::insert`]
    pub fn with_command(mut self, name: impl Into<String>, spec: CommandSpec) -> Self {
        self.insert(name, spec);
        self
    }

    /// Spec of a registered command
    pub fn get(&self, name: &str) -> Option<&CommandSpec> {
        self.commands.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    /// Registered command names in declaration order
    pub fn command_names(&self) -> impl Iterator<Item = &str> {
        self.commands.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Parse a registry from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let registry: Registry =
            toml::from_str(content).map_err(|e| RegistryError::InvalidFormat(e.to_string()))?;
        Ok(registry)
    }

    /// Load a registry from a TOML file
    ///
    /// # Arguments
    /// * `path` - Path to the registry file
    ///
    /// # Returns
    /// * `Result<Registry>` - Loaded registry or error
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => {
                CmdlineError::Registry(RegistryError::FileNotFound(path.display().to_string()))
            }
            _ => CmdlineError::Io(e),
        })?;

        let registry = Self::from_toml_str(&content)?;
        debug!(
            "Loaded {} commands from registry file {}",
            registry.len(),
            path.display()
        );
        Ok(registry)
    }

    /// Registry used by the demonstration front end.
    ///
    /// Five `create_*` commands sharing the same flags, named parameters and
    /// positional suggestions.
    pub fn sample() -> Self {
        let spec = CommandSpec::new()
            .flag("foo")
            .flag("bar")
            .named_parameter("id", ["unknown", "01", "99"])
            .named_parameter("identity", ["me", "him", "foo", "foooooo"])
            .named_parameter("whatever", Vec::<String>::new())
            .ordered_param("red")
            .ordered_param("reddy")
            .ordered_param("green")
            .ordered_param("greeny");

        [
            "create_sphere",
            "create_cube",
            "create_world",
            "create_cylinder",
            "create_something",
        ]
        .into_iter()
        .fold(Self::new(), |registry, name| {
            registry.with_command(name, spec.clone())
        })
    }
}
