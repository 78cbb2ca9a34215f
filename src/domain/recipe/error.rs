use crate::domain::shared::InvalidParam;
use crate::error::AppError;
use crate::infrastructure::fatsecret::FatSecretError;

#[derive(Debug, thiserror::Error)]
pub enum RecipeServiceError {
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error("upstream error: {0}")]
    Upstream(#[from] FatSecretError),
}

impl From<InvalidParam> for RecipeServiceError {
    fn from(err: InvalidParam) -> Self {
        RecipeServiceError::Invalid(err.0)
    }
}

impl From<RecipeServiceError> for AppError {
    fn from(err: RecipeServiceError) -> Self {
        match err {
            RecipeServiceError::Invalid(msg) => AppError::BadRequest(msg),
            RecipeServiceError::Upstream(e) => AppError::from(e),
        }
    }
}
