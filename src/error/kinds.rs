use std::{fmt, io};

/// Crate-wide `Result` type using [`CmdlineError`] as the error.
///
/// This alias is re-exported by the parent `error` module and is intended
/// to be used throughout the crate for fallible operations outside of the
/// parsing core, which reports the narrower [`ParseError`].
pub type Result<T> = std::result::Result<T, CmdlineError>;

/// Top-level error type for cmdline operations.
#[derive(Debug)]
pub enum CmdlineError {
    /// Command line parsing errors.
    Parse(ParseError),

    /// Configuration errors.
    Config(ConfigError),

    /// Command registry errors.
    Registry(RegistryError),

    /// I/O errors.
    Io(io::Error),

    /// Generic error with a free-form message.
    Generic(String),
}

/// Reasons a command line fails to parse.
///
/// Exactly one of these is reported per failed parse. The set is closed;
/// parsing never aggregates several errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseError {
    /// The line holds no command at all.
    ///
    /// Never produced by [`parse_command`](crate::parser::parse_command): an
    /// empty line lexes straight to end-of-input and is reported as
    /// [`ParseError::MustStartWithCommand`].
    EmptyCommand,

    /// The first token is not an identifier.
    MustStartWithCommand,

    /// A `-` is followed by neither `-` nor an identifier.
    WrongHyphenUse,

    /// `--` is not followed by a parameter name.
    ParamExpected,

    /// `--name` is not followed by `=`.
    ExpectedEqualSign,

    /// `-"flag"`: flag names are bare identifiers.
    FlagCannotBeQuoted,

    /// `--"name"=value`: parameter names are bare identifiers.
    ParamNameCannotBeQuoted,

    /// `--name=` is not followed by a value.
    ExpectedParameterValue,

    /// A `=` outside of a `--name=value` sequence.
    EqualSignOutOfPlace,

    /// A token the parser has no rule for.
    UnknownToken,
}

/// Configuration-specific errors.
#[derive(Debug)]
pub enum ConfigError {
    /// Config file not found.
    FileNotFound(String),

    /// Invalid config format.
    InvalidFormat(String),

    /// Invalid field value.
    InvalidValue { field: String, value: String },

    /// Generic configuration error.
    Generic(String),
}

/// Command registry errors.
#[derive(Debug)]
pub enum RegistryError {
    /// Registry file not found.
    FileNotFound(String),

    /// Registry file is not valid TOML or has the wrong shape.
    InvalidFormat(String),
}

/* ========================= Display & Error impls ========================= */

impl fmt::Display for CmdlineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CmdlineError::Parse(e) => write!(f, "Parse error: {e}"),
            CmdlineError::Config(e) => write!(f, "Configuration error: {e}"),
            CmdlineError::Registry(e) => write!(f, "Registry error: {e}"),
            CmdlineError::Io(e) => write!(f, "I/O error: {e}"),
            CmdlineError::Generic(msg) => write!(f, "{msg}"),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            ParseError::EmptyCommand => "empty command",
            ParseError::MustStartWithCommand => "a line must start with a command name",
            ParseError::WrongHyphenUse => "'-' must be followed by a flag name or a second '-'",
            ParseError::ParamExpected => "expected a parameter name after '--'",
            ParseError::ExpectedEqualSign => "expected '=' after the parameter name",
            ParseError::FlagCannotBeQuoted => "flag names cannot be quoted",
            ParseError::ParamNameCannotBeQuoted => "parameter names cannot be quoted",
            ParseError::ExpectedParameterValue => "expected a value after '='",
            ParseError::EqualSignOutOfPlace => "'=' is only allowed in --name=value",
            ParseError::UnknownToken => "unknown token",
        };
        f.write_str(msg)
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::FileNotFound(path) => write!(f, "Config file not found: {path}"),
            ConfigError::InvalidFormat(msg) => write!(f, "Invalid config format: {msg}"),
            ConfigError::InvalidValue { field, value } => {
                write!(f, "Invalid value '{value}' for field '{field}'")
            }
            ConfigError::Generic(msg) => write!(f, "{msg}"),
        }
    }
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::FileNotFound(path) => write!(f, "Registry file not found: {path}"),
            RegistryError::InvalidFormat(msg) => write!(f, "Invalid registry format: {msg}"),
        }
    }
}

impl std::error::Error for CmdlineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CmdlineError::Parse(e) => Some(e),
            CmdlineError::Io(e) => Some(e),
            _ => None,
        }
    }
}
impl std::error::Error for ParseError {}
impl std::error::Error for ConfigError {}
impl std::error::Error for RegistryError {}

/* ========================= Conversions to CmdlineError ========================= */

impl From<io::Error> for CmdlineError {
    fn from(err: io::Error) -> Self {
        CmdlineError::Io(err)
    }
}

impl From<ParseError> for CmdlineError {
    fn from(err: ParseError) -> Self {
        CmdlineError::Parse(err)
    }
}

impl From<ConfigError> for CmdlineError {
    fn from(err: ConfigError) -> Self {
        CmdlineError::Config(err)
    }
}

impl From<RegistryError> for CmdlineError {
    fn from(err: RegistryError) -> Self {
        CmdlineError::Registry(err)
    }
}

impl From<String> for CmdlineError {
    fn from(msg: String) -> Self {
        CmdlineError::Generic(msg)
    }
}

impl From<&str> for CmdlineError {
    fn from(msg: &str) -> Self {
        CmdlineError::Generic(msg.to_owned())
    }
}
