use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Field \"{field}\" of message \"{message}\" has unsupported kind {kind}")]
    UnsupportedKind {
        message: String,
        field:   String,
        kind:    String,
    },

    #[error("Failed to write \"{file_name}\": {msg}")]
    Sink {
        file_name: String,
        msg:       String,
    },

    #[error("Invalid option: {0}")]
    InvalidOption(String),

    #[error("Request decode error: {0}")]
    Decode(String),
}
