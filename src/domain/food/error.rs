use crate::domain::shared::InvalidParam;
use crate::error::AppError;
use crate::infrastructure::fatsecret::FatSecretError;

#[derive(Debug, thiserror::Error)]
pub enum FoodServiceError {
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error("upstream error: {0}")]
    Upstream(#[from] FatSecretError),
    #[error("failed to encode upstream body: {0}")]
    Encode(#[from] serde_json::Error),
}

impl From<InvalidParam> for FoodServiceError {
    fn from(err: InvalidParam) -> Self {
        FoodServiceError::Invalid(err.0)
    }
}

impl From<FoodServiceError> for AppError {
    fn from(err: FoodServiceError) -> Self {
        match err {
            FoodServiceError::Invalid(msg) => AppError::BadRequest(msg),
            FoodServiceError::Upstream(e) => AppError::from(e),
            FoodServiceError::Encode(e) => AppError::Internal(e.to_string()),
        }
    }
}
