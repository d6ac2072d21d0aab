use thiserror::Error;

/// Fixed message shown for any failure that is not reported by the server.
pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to generate palette";

pub type Result<T, E = PaletteError> = std::result::Result<T, E>;

/// Why a single palette-generation attempt failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaletteError {
    /// The server answered `success: false` with a reason.
    #[error("server rejected request: {0}")]
    Application(String),

    /// The request never produced a readable response body.
    #[error("transport error: {0}")]
    Transport(String),

    /// The body was read but is not a palette response.
    #[error("malformed response: {0}")]
    Malformed(String),
}

impl PaletteError {
    #[must_use]
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    #[must_use]
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed(message.into())
    }

    /// Text shown to the user after the `Error: ` prefix.
    #[must_use]
    pub fn user_message(&self) -> &str {
        match self {
            Self::Application(reason) => reason,
            Self::Transport(_) | Self::Malformed(_) => GENERIC_FAILURE_MESSAGE,
        }
    }
}

impl From<serde_json::Error> for PaletteError {
    fn from(err: serde_json::Error) -> Self {
        Self::Malformed(err.to_string())
    }
}

/// Key-value store access failure. Never surfaced to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("storage write rejected for key {key}: {message}")]
    WriteRejected { key: String, message: String },
}

/// The host refused a clipboard write.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("invalid hex color: {0:?}")]
    InvalidHex(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid config value for {field}: {message}")]
    Invalid {
        field: &'static str,
        message: String,
    },
}

impl ConfigError {
    #[must_use]
    pub fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        Self::Invalid {
            field,
            message: message.into(),
        }
    }
}
