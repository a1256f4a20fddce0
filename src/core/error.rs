//! Error types for sink output

pub type Result<T> = std::result::Result<T, SinkError>;

/// Failure raised by an individual sink.
///
/// These never reach the application: the dispatcher contains them and
/// reports best-effort on stderr. Disabled-level calls are not errors, and
/// message coercion cannot fail.
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    /// IO error with context
    #[error("IO error while {operation}: {message}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON decoding error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// File sink error with path
    #[error("file sink error for '{path}': {message}")]
    FileSink { path: String, message: String },

    /// Broadcast publish error
    #[error("publish error: {0}")]
    Publish(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl SinkError {
    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        SinkError::IoOperation {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a file sink error
    pub fn file_sink(path: impl Into<String>, message: impl Into<String>) -> Self {
        SinkError::FileSink {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a publish error
    pub fn publish(msg: impl Into<String>) -> Self {
        SinkError::Publish(msg.into())
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        SinkError::Other(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = SinkError::file_sink("/var/log/app.log", "permission denied");
        assert!(matches!(err, SinkError::FileSink { .. }));

        let err = SinkError::publish("no subscribers");
        assert!(matches!(err, SinkError::Publish(_)));
    }

    #[test]
    fn test_error_display() {
        let err = SinkError::file_sink("/var/log/app.log", "disk full");
        assert_eq!(
            err.to_string(),
            "file sink error for '/var/log/app.log': disk full"
        );
    }

    #[test]
    fn test_io_operation_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = SinkError::io_operation("appending log line", "cannot write to file", io_err);

        assert!(matches!(err, SinkError::IoOperation { .. }));
        assert!(err.to_string().contains("appending log line"));
        assert!(err.to_string().contains("cannot write to file"));
    }
}
