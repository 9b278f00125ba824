use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    /// Options were built without a template filesystem.
    #[error("Cannot build renderer: a template filesystem is required.")]
    MissingFilesystem,

    /// Options were built without any include pattern.
    #[error("Cannot build renderer: at least one include pattern is required.")]
    NoIncludePatterns,

    #[error("Cannot proceed: template directory '{dir}' does not exist.")]
    TemplateDirNotFound { dir: String },

    #[error("No configuration file found in '{dir}'. Tried: {config_files}.")]
    ConfigNotFound { dir: String, config_files: String },

    #[error("Failed to parse config file: {0}.")]
    ConfigParseError(String),

    #[error("Invalid template data: {0}.")]
    InvalidData(String),

    #[error("Invalid include pattern. Original error: {0}")]
    InvalidPattern(#[from] globset::Error),

    #[error("Include pattern '{pattern}' matches no files.")]
    PatternMatchedNothing { pattern: String },

    #[error("Template '{name}' does not exist in the template filesystem.")]
    TemplateNotFound { name: String },

    #[error("Invalid template path '{name}'.")]
    InvalidTemplatePath { name: String },

    #[error("Template '{name}' is not valid UTF-8.")]
    InvalidTemplateEncoding { name: String },

    /// The template file exists but could not be read.
    #[error("Failed to read template '{name}'. Original error: {source}")]
    TemplateRead {
        name: String,
        #[source]
        source: std::io::Error,
    },

    /// The template source could not be compiled.
    #[error("Failed to parse template '{name}'. Original error: {source}")]
    Parse {
        name: String,
        #[source]
        source: minijinja::Error,
    },

    /// The template compiled but failed while producing output.
    #[error("Failed to render template '{name}'. Original error: {source}")]
    Execute {
        name: String,
        #[source]
        source: minijinja::Error,
    },
}

impl Error {
    /// Raised while validating options or loading configuration.
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            Error::MissingFilesystem
                | Error::NoIncludePatterns
                | Error::TemplateDirNotFound { .. }
                | Error::ConfigNotFound { .. }
                | Error::ConfigParseError(_)
                | Error::InvalidData(_)
        )
    }

    /// Raised while resolving include patterns or compiling template sources.
    pub fn is_parse(&self) -> bool {
        matches!(
            self,
            Error::InvalidPattern(_)
                | Error::PatternMatchedNothing { .. }
                | Error::TemplateNotFound { .. }
                | Error::InvalidTemplatePath { .. }
                | Error::InvalidTemplateEncoding { .. }
                | Error::TemplateRead { .. }
                | Error::Parse { .. }
        )
    }

    pub fn is_execute(&self) -> bool {
        matches!(self, Error::Execute { .. })
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::ConfigParseError(err.to_string())
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(err: serde_yaml::Error) -> Self {
        Error::ConfigParseError(err.to_string())
    }
}

/// Convenience type alias for Results with this crate's Error as the error type.
///
/// # Type Parameters
/// * `T` - The type of the success value
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(crate::constants::exit_codes::FAILURE);
}
