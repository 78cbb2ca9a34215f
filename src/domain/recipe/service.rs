use super::error::RecipeServiceError;
use super::{RecipeDetailsParams, RecipeSearchParams};
use crate::domain::food::LocaleParams;
use crate::domain::shared::params::{
    clamp_max_results, non_blank, one_of, require_digits, with_locale,
};
use crate::infrastructure::fatsecret::{FatSecretApi, UpstreamRequest, UpstreamResponse};
use async_trait::async_trait;
use std::sync::Arc;

const RECIPE_PATH: &str = "/recipe/v2";
const RECIPES_SEARCH_PATH: &str = "/recipes/search/v3";
const RECIPE_TYPES_PATH: &str = "/recipe-types/v2";

pub const SEARCH_DEFAULT_RESULTS: u32 = 20;
pub const SEARCH_MAX_RESULTS: u32 = 50;

const SORT_ORDERS: [&str; 4] = [
    "newest",
    "oldest",
    "caloriesPerServingAscending",
    "caloriesPerServingDescending",
];

pub struct RecipeService {
    api: Arc<dyn FatSecretApi>,
}

impl RecipeService {
    pub fn new(api: Arc<dyn FatSecretApi>) -> Self {
        Self { api }
    }
}

#[async_trait]
pub trait RecipeServiceApi: Send + Sync {
    async fn get_recipe(
        &self,
        params: RecipeDetailsParams,
    ) -> Result<UpstreamResponse, RecipeServiceError>;

    async fn search(
        &self,
        params: RecipeSearchParams,
    ) -> Result<UpstreamResponse, RecipeServiceError>;

    async fn list_types(&self, params: LocaleParams)
        -> Result<UpstreamResponse, RecipeServiceError>;
}

#[async_trait]
impl RecipeServiceApi for RecipeService {
    async fn get_recipe(
        &self,
        params: RecipeDetailsParams,
    ) -> Result<UpstreamResponse, RecipeServiceError> {
        let recipe_id = require_digits("recipe_id", params.recipe_id)?;

        let request = UpstreamRequest::get(RECIPE_PATH)
            .param("recipe_id", recipe_id)
            .param_opt("region", non_blank(params.region));

        self.forward(request).await
    }

    async fn search(
        &self,
        params: RecipeSearchParams,
    ) -> Result<UpstreamResponse, RecipeServiceError> {
        let sort_by = one_of("sort_by", non_blank(params.sort_by), &SORT_ORDERS, None)?;
        let recipe_types = non_blank(params.recipe_types);
        let match_all = recipe_types.as_ref().map(|_| false);

        let request = UpstreamRequest::get(RECIPES_SEARCH_PATH)
            .param_opt("search_expression", non_blank(params.q))
            .param_opt("recipe_types", recipe_types)
            .param_opt("recipe_types_matchall", match_all)
            .param_opt("must_have_images", params.must_have_images)
            .param("page_number", params.page.unwrap_or(0))
            .param(
                "max_results",
                clamp_max_results(params.max_results, SEARCH_DEFAULT_RESULTS, SEARCH_MAX_RESULTS),
            )
            .param_opt("sort_by", sort_by)
            .param_opt("region", non_blank(params.region));

        self.forward(request).await
    }

    async fn list_types(
        &self,
        params: LocaleParams,
    ) -> Result<UpstreamResponse, RecipeServiceError> {
        let request = with_locale(
            UpstreamRequest::get(RECIPE_TYPES_PATH),
            params.region,
            params.language,
        );

        self.forward(request).await
    }
}

impl RecipeService {
    async fn forward(
        &self,
        request: UpstreamRequest,
    ) -> Result<UpstreamResponse, RecipeServiceError> {
        tracing::debug!(path = request.path, "Forwarding recipe request");
        Ok(self.api.send(request).await?)
    }
}
