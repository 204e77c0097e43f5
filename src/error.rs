use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, InstallerError>;

#[derive(Error, Debug)]
pub enum InstallerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid {option}: {value}")]
    InvalidArgument { option: String, value: String },

    #[error("Missing {option}")]
    MissingArgument { option: String },

    #[error("Invalid action: {action}")]
    InvalidAction { action: String },

    #[error("Invalid section: {section}")]
    InvalidSection { section: String },

    #[error("Invalid build: {build}")]
    InvalidBuild { build: String },

    #[error("Unsupported platform: {platform}")]
    UnsupportedPlatform { platform: String },

    #[error("{kind} {path} does not exist")]
    NotFound { kind: &'static str, path: PathBuf },

    #[error("Directory {path} is not writable, please run as root (sudo)")]
    PermissionDenied { path: PathBuf },

    #[error("Download failed: {url}: {reason}")]
    DownloadError { url: String, reason: String },

    #[error("Extraction failed: {path}: {reason}")]
    ExtractionError { path: PathBuf, reason: String },

    #[error("Failed to link {link} to {target}: {source}")]
    SymlinkError {
        target: PathBuf,
        link: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("File {name} does not exist")]
    BinaryNotFound { name: String },

    #[error("Home directory not found")]
    HomeDirectoryNotFound,

    #[error("Configuration error: {message}")]
    ConfigError { message: String },
}

impl InstallerError {
    pub fn invalid_argument<O: Into<String>, V: Into<String>>(option: O, value: V) -> Self {
        InstallerError::InvalidArgument {
            option: option.into(),
            value: value.into(),
        }
    }

    pub fn download_error<U: Into<String>, R: ToString>(url: U, reason: R) -> Self {
        InstallerError::DownloadError {
            url: url.into(),
            reason: reason.to_string(),
        }
    }

    pub fn config_error<S: Into<String>>(message: S) -> Self {
        InstallerError::ConfigError {
            message: message.into(),
        }
    }
}
