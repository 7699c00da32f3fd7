//! Error types and Result aliases for texshell
//!
//! Every command failure is recoverable: the dispatcher renders the error
//! through `Display` and keeps reading input.

use std::fmt;
use std::path::PathBuf;

use crate::commands::ArgumentPolicy;

/// Result type alias for texshell operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for texshell
#[derive(Debug)]
pub enum Error {
    // === Dispatch errors ===
    /// Wrong number of arguments for a command
    Arity {
        command: String,
        policy: ArgumentPolicy,
    },

    /// Command token not present in the registry
    UnknownCommand {
        command: String,
    },

    // === Session errors ===
    /// Project or directory name with a disallowed character
    InvalidName {
        name: String,
    },

    /// Directory creation attempted while sitting in the root directory
    RootRestricted,

    /// Project path exists but is not a directory
    NotADirectory {
        path: PathBuf,
    },

    /// Compile target does not exist
    FileNotFound {
        path: PathBuf,
    },

    /// Requested compiler is not in the allow-list
    DisallowedCompiler {
        compiler: String,
    },

    // === Project configuration errors ===
    /// Persisted configuration file is malformed
    ConfigParse {
        path: PathBuf,
        reason: String,
    },

    /// Assignment token does not match the `key=value` grammar
    ConfigGrammar {
        token: String,
    },

    // === Shell settings errors ===
    /// Failed to load the settings file
    SettingsLoadFailed {
        path: PathBuf,
        reason: String,
    },

    /// Settings file loaded but a field is invalid
    SettingsValidationFailed {
        field: String,
        reason: String,
    },

    // === I/O and parsing errors ===
    /// I/O errors
    Io(std::io::Error),

    /// TOML parsing errors
    Toml(toml::de::Error),

    // === Generic fallback (use sparingly) ===
    Other(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Dispatch errors
            Error::Arity { command, policy } => match policy {
                ArgumentPolicy::NoArgs => {
                    write!(f, "{}: Function takes no arguments!", command)
                }
                ArgumentPolicy::ExactlyOne => {
                    write!(f, "{}: Function takes exactly one argument!", command)
                }
                ArgumentPolicy::Any => write!(f, "{}: Invalid arguments", command),
            },
            Error::UnknownCommand { command } => {
                write!(f, "*** Unknown command: {}", command)
            }

            // Session errors
            Error::InvalidName { name } => write!(
                f,
                "Invalid name '{}': following characters ' \\/|:.~!@#$%^&*()+,<>?`\"' are disallowed!",
                name
            ),
            Error::RootRestricted => write!(
                f,
                "You can't be in root to run mkdir, run im [user] first."
            ),
            Error::NotADirectory { path } => {
                write!(f, "{} exists and is not a directory", path.display())
            }
            Error::FileNotFound { path } => write!(f, "No such file {}", path.display()),
            Error::DisallowedCompiler { compiler } => {
                write!(f, "{} not allowed as compiler", compiler)
            }

            // Project configuration errors
            Error::ConfigParse { path, reason } => write!(
                f,
                "Configuration file {} contains failures, please inspect: {}",
                path.display(),
                reason
            ),
            Error::ConfigGrammar { token } => write!(
                f,
                "Config parameters ({}) are wrong. Make sure the separator is ','. \
                 Params should be in following format [A-Za-z0-9_]=[A-Za-z0-9'<>@]",
                token
            ),

            // Shell settings errors
            Error::SettingsLoadFailed { path, reason } => write!(
                f,
                "Failed to load settings from '{}': {}",
                path.display(),
                reason
            ),
            Error::SettingsValidationFailed { field, reason } => {
                write!(f, "Settings validation failed for '{}': {}", field, reason)
            }

            // I/O and parsing errors
            Error::Io(err) => write!(f, "I/O error: {}", err),
            Error::Toml(err) => write!(f, "TOML parsing error: {}", err),

            Error::Other(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Toml(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Toml(err)
    }
}

impl From<String> for Error {
    fn from(err: String) -> Self {
        Error::Other(err)
    }
}

impl From<&str> for Error {
    fn from(err: &str) -> Self {
        Error::Other(err.to_string())
    }
}
