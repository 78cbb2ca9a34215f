use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum FatSecretError {
    /// OAuth endpoint answered with a non-success status
    #[error("token request rejected with status {status}: {body}")]
    TokenRejected { status: u16, body: String },

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("invalid response from {endpoint}: {message}")]
    InvalidResponse {
        endpoint: &'static str,
        message: String,
    },
}

impl From<FatSecretError> for AppError {
    fn from(err: FatSecretError) -> Self {
        match err {
            FatSecretError::TokenRejected { .. } => AppError::UpstreamAuth(err.to_string()),
            FatSecretError::Transport(_) => AppError::ExternalService(err.to_string()),
            FatSecretError::InvalidResponse { .. } => AppError::Internal(err.to_string()),
        }
    }
}
