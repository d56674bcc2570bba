use thiserror::Error;

#[derive(Debug, Error)]
pub enum FlatError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid layout for field \"{field}\" of struct \"{struct_name}\": {reason}")]
    Layout {
        struct_name: String,
        field:       String,
        reason:      String,
    },

    #[error("Schema decode error: {0}")]
    DecodeError(String),

    #[error("Schema encode error: {0}")]
    EncodeError(String),
}
