use std::error::Error as StdError;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Custom error type for the template scaffolding library
#[derive(Debug)]
pub enum Error {
    /// Template root is missing or is not a directory
    TemplateNotFound { path: PathBuf },
    /// Folder holding the named templates is missing or is not a directory
    TemplatesFolderNotFound { path: PathBuf },
    /// The input collector did not supply a value for a required variable
    NoVariablesCollected { name: String },
    /// Error related to file operations
    FileOperation {
        source: io::Error,
        path: PathBuf,
        operation: String,
    },
    /// Error raised while walking a directory tree
    Traversal {
        source: walkdir::Error,
        path: PathBuf,
    },
    /// A rendered path would leave the destination root or is empty
    InvalidTargetPath { path: String, detail: String },
    /// Error when a filename is not valid Unicode
    InvalidFilename { path: PathBuf },
    /// Error related to configuration parsing
    ConfigParsing {
        source: Box<dyn StdError + Send + Sync>,
        detail: String,
    },
    /// Generic error with a message
    Generic { message: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::TemplateNotFound { path } => {
                write!(f, "Template not found: {}", path.display())
            }
            Error::TemplatesFolderNotFound { path } => {
                write!(f, "Templates folder not found: {}", path.display())
            }
            Error::NoVariablesCollected { name } => {
                write!(f, "No value provided for variable '{name}'")
            }
            Error::FileOperation {
                path, operation, ..
            } => {
                write!(f, "Failed to {} file: {}", operation, path.display())
            }
            Error::Traversal { path, source } => {
                write!(f, "Failed to walk {}: {source}", path.display())
            }
            Error::InvalidTargetPath { path, detail } => {
                write!(f, "Invalid target path '{path}': {detail}")
            }
            Error::InvalidFilename { path } => {
                write!(f, "Filename is not valid unicode: {}", path.display())
            }
            Error::ConfigParsing { detail, .. } => {
                write!(f, "Configuration parsing error: {detail}")
            }
            Error::Generic { message } => {
                write!(f, "{message}")
            }
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::FileOperation { source, .. } => Some(source),
            Error::Traversal { source, .. } => Some(source),
            Error::ConfigParsing { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::FileOperation {
            source: err,
            path: PathBuf::new(),
            operation: "perform operation on".to_string(),
        }
    }
}

/// Custom Result type for the template scaffolding library
///
/// # Examples
/// ```
/// use template_scaffold::prelude::{Result, template_not_found_error};
/// use std::path::Path;
///
/// fn require_template(path: &Path) -> Result<()> {
///     if !path.is_dir() {
///         return Err(template_not_found_error(path.to_path_buf()));
///     }
///     Ok(())
/// }
///
/// assert!(require_template(Path::new("/definitely/not/here")).is_err());
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// Helper function to create a template not found error
pub fn template_not_found_error(path: PathBuf) -> Error {
    Error::TemplateNotFound { path }
}

/// Helper function to create a templates folder not found error
pub fn templates_folder_not_found_error(path: PathBuf) -> Error {
    Error::TemplatesFolderNotFound { path }
}

/// Helper function to create a missing variable error
pub fn no_variables_collected_error(name: &str) -> Error {
    Error::NoVariablesCollected {
        name: name.to_string(),
    }
}

/// Helper function to create a file operation error
pub fn file_operation_error(err: io::Error, path: PathBuf, operation: &str) -> Error {
    Error::FileOperation {
        source: err,
        path,
        operation: operation.to_string(),
    }
}

/// Helper function to create a traversal error
pub fn traversal_error(err: walkdir::Error, path: PathBuf) -> Error {
    Error::Traversal { source: err, path }
}

/// Helper function to create an invalid target path error
pub fn invalid_target_path_error(path: &str, detail: &str) -> Error {
    Error::InvalidTargetPath {
        path: path.to_string(),
        detail: detail.to_string(),
    }
}

/// Helper function to create an invalid filename error
pub fn invalid_filename_error(path: PathBuf) -> Error {
    Error::InvalidFilename { path }
}

/// Helper function to create a config parsing error
pub fn config_parsing_error<E: StdError + Send + Sync + 'static>(err: E, detail: &str) -> Error {
    Error::ConfigParsing {
        source: Box::new(err),
        detail: detail.to_string(),
    }
}

/// Helper function to create a generic error
pub fn generic_error(message: &str) -> Error {
    Error::Generic {
        message: message.to_string(),
    }
}
