//! Error types for fastmango-mcp.

/// Result type alias for tool execution.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors a tool handler can surface.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Arguments did not match the tool's input schema.
    #[error("invalid tool arguments: {0}")]
    InvalidArguments(#[from] serde_json::Error),

    /// The tool ran but failed.
    #[error("tool execution failed: {message}")]
    Execution {
        /// What went wrong.
        message: String,
    },
}

impl Error {
    /// Creates a new execution error.
    pub fn execution<S: Into<String>>(message: S) -> Self {
        Error::Execution {
            message: message.into(),
        }
    }
}
