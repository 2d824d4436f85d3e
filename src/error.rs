use thiserror::Error;

/// Error type for bzn client operations.
#[derive(Error, Debug)]
pub enum BznError {
    /// Opening the websocket connection failed.
    #[error("connection failed: {0}")]
    Connection(tungstenite::Error),

    /// Writing a frame to the connection failed.
    #[error("send failed: {0}")]
    Send(tungstenite::Error),

    /// Reading a frame from the connection failed.
    #[error("receive failed: {0}")]
    Receive(tungstenite::Error),

    /// The server sent a frame where a text reply was required.
    #[error("unexpected non-text frame from server")]
    UnexpectedFrame,

    /// The server closed the connection mid-exchange.
    #[error("connection closed by server")]
    ConnectionClosed,

    /// Serialization/deserialization error.
    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Result type alias for bzn client operations.
pub type Result<T> = std::result::Result<T, BznError>;
