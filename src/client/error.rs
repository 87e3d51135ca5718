/// Failures surfaced by the client collaborator.
///
/// The story layer never generates, wraps or retries these; they propagate
/// to the caller unchanged.
#[derive(thiserror::Error, Debug)]
pub enum ServiceError {
    #[error("Service request timed out: {reason}")]
    Timeout { reason: &'static str },

    #[error("Error sending request: {reason}")]
    SendError { reason: String },

    #[error("i/o error")]
    IO(#[from] std::io::Error),

    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("flood wait: retry in {seconds} seconds")]
    FloodWait { seconds: u32 },

    #[error("Authorization failed")]
    Unauthorized,

    #[error("peer id invalid: {peer_id}")]
    PeerIdInvalid { peer_id: i64 },

    #[error("Not found.")]
    NotFoundError,

    #[error("RPC error {code}: {message}")]
    Rpc { code: i32, message: String },
}
