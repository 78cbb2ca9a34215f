use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::Response,
};
use std::sync::Arc;

use super::relay;
use crate::{
    domain::{
        food::LocaleParams,
        recipe::{RecipeDetailsParams, RecipeSearchParams, RecipeService, RecipeServiceApi},
    },
    error::AppResult,
};

pub struct RecipeController {
    recipe_service: Arc<RecipeService>,
}

impl RecipeController {
    pub fn new(recipe_service: Arc<RecipeService>) -> Self {
        Self { recipe_service }
    }

    /// GET /api/recipes/details
    pub async fn details(
        State(controller): State<Arc<RecipeController>>,
        query: Result<Query<RecipeDetailsParams>, QueryRejection>,
    ) -> AppResult<Response> {
        let Query(params) = query?;
        let response = controller.recipe_service.get_recipe(params).await?;
        relay(response)
    }

    /// GET /api/recipes/search
    pub async fn search(
        State(controller): State<Arc<RecipeController>>,
        query: Result<Query<RecipeSearchParams>, QueryRejection>,
    ) -> AppResult<Response> {
        let Query(params) = query?;
        let response = controller.recipe_service.search(params).await?;
        relay(response)
    }

    /// GET /api/recipes/types
    pub async fn types(
        State(controller): State<Arc<RecipeController>>,
        query: Result<Query<LocaleParams>, QueryRejection>,
    ) -> AppResult<Response> {
        let Query(params) = query?;
        let response = controller.recipe_service.list_types(params).await?;
        relay(response)
    }
}
