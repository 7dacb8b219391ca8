use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LineTallyError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to traverse: {}", path.display())]
    Traversal {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Failed to read file: {}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write output: {0}")]
    Output(#[source] std::io::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl LineTallyError {
    /// Short category name used as the error header.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) => "Config",
            Self::Traversal { .. } => "Traversal",
            Self::FileRead { .. } => "FileRead",
            Self::Output(_) => "Output",
            Self::JsonSerialize(_) => "JSON",
        }
    }

    /// The primary message, without the error type prefix.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Config(msg) => msg.clone(),
            Self::Traversal { path, .. } | Self::FileRead { path, .. } => {
                path.display().to_string()
            }
            Self::Output(_) => "could not write report to stdout".to_string(),
            Self::JsonSerialize(_) => "could not serialize report".to_string(),
        }
    }

    /// The underlying cause, if any.
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::Config(_) => None,
            Self::Traversal { source, .. } => Some(source.to_string()),
            Self::FileRead { source, .. } | Self::Output(source) => Some(source.to_string()),
            Self::JsonSerialize(source) => Some(source.to_string()),
        }
    }

    /// An actionable hint for the user, when one applies.
    #[must_use]
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::Config(_) => Some("Check the --suffix and --test-marker values"),
            Self::Traversal { source, .. } => source.io_error().and_then(io_suggestion),
            Self::FileRead { source, .. } => {
                if source.kind() == std::io::ErrorKind::InvalidData {
                    Some("Only UTF-8 text files can be counted")
                } else {
                    io_suggestion(source)
                }
            }
            Self::Output(_) | Self::JsonSerialize(_) => None,
        }
    }
}

fn io_suggestion(err: &std::io::Error) -> Option<&'static str> {
    match err.kind() {
        std::io::ErrorKind::NotFound => Some("Check that the path exists"),
        std::io::ErrorKind::PermissionDenied => Some("Check read permissions on the path"),
        _ => None,
    }
}

pub type Result<T> = std::result::Result<T, LineTallyError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
