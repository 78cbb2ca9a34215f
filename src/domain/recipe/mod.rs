pub mod error;
pub mod service;

pub use error::RecipeServiceError;
pub use service::{RecipeService, RecipeServiceApi};

use serde::Deserialize;

/// Query for GET /api/recipes/details
#[derive(Debug, Default, Deserialize)]
pub struct RecipeDetailsParams {
    pub recipe_id: Option<String>,
    pub region: Option<String>,
}

/// Query for GET /api/recipes/search
#[derive(Debug, Default, Deserialize)]
pub struct RecipeSearchParams {
    pub q: Option<String>,
    pub recipe_types: Option<String>,
    pub must_have_images: Option<bool>,
    pub page: Option<u32>,
    pub max_results: Option<u32>,
    pub sort_by: Option<String>,
    pub region: Option<String>,
}
