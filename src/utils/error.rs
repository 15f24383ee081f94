use thiserror::Error;

#[derive(Error, Debug)]
pub enum WaitError {
    #[error("resource identifier is missing")]
    MissingResourceIdentifier,

    #[error("invalid resource identifier {uri:?}: {reason}")]
    InvalidResourceIdentifier { uri: String, reason: String },

    #[error("unsupported resource scheme: {0}")]
    UnsupportedScheme(String),

    // The two context sentinels. Returned as-is so callers can match on the
    // variant and tell their own expired budget apart from a not-ready probe.
    #[error("operation was canceled")]
    Canceled,

    #[error("deadline has been exceeded")]
    DeadlineExceeded,

    #[error("resource is not ready: {0}")]
    ResourceNotReady(#[source] std::io::Error),
}

impl WaitError {
    /// Whether the host's outer polling loop should keep trying.
    ///
    /// Only a failed existence check is worth retrying; everything else is
    /// either a configuration defect or the caller's own budget firing.
    pub fn is_retryable(&self) -> bool {
        matches!(self, WaitError::ResourceNotReady(_))
    }
}

pub type Result<T> = std::result::Result<T, WaitError>;
