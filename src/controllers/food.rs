use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    response::Response,
    Json,
};
use std::sync::Arc;

use super::relay;
use crate::{
    domain::food::{
        AutocompleteParams, BarcodeParams, BrandsParams, FoodDetailsParams, FoodSearchParams,
        FoodService, FoodServiceApi, ImageRecognitionRequest, LocaleParams,
        NaturalLanguageRequest, SubCategoriesParams,
    },
    error::AppResult,
};

pub struct FoodController {
    food_service: Arc<FoodService>,
}

impl FoodController {
    pub fn new(food_service: Arc<FoodService>) -> Self {
        Self { food_service }
    }

    /// GET /api/foods/search - Search foods by expression
    pub async fn search(
        State(controller): State<Arc<FoodController>>,
        query: Result<Query<FoodSearchParams>, QueryRejection>,
    ) -> AppResult<Response> {
        let Query(params) = query?;
        let response = controller.food_service.search(params).await?;
        relay(response)
    }

    /// GET /api/foods/autocomplete - Suggest search expressions
    pub async fn autocomplete(
        State(controller): State<Arc<FoodController>>,
        query: Result<Query<AutocompleteParams>, QueryRejection>,
    ) -> AppResult<Response> {
        let Query(params) = query?;
        let response = controller.food_service.autocomplete(params).await?;
        relay(response)
    }

    /// GET /api/foods/barcode - Look up a food by GTIN-13 barcode
    pub async fn barcode(
        State(controller): State<Arc<FoodController>>,
        query: Result<Query<BarcodeParams>, QueryRejection>,
    ) -> AppResult<Response> {
        let Query(params) = query?;
        let response = controller.food_service.find_by_barcode(params).await?;
        relay(response)
    }

    /// GET /api/foods/details - Full nutrition details for one food
    pub async fn details(
        State(controller): State<Arc<FoodController>>,
        query: Result<Query<FoodDetailsParams>, QueryRejection>,
    ) -> AppResult<Response> {
        let Query(params) = query?;
        let response = controller.food_service.get_food(params).await?;
        relay(response)
    }

    /// GET /api/foods/brands
    pub async fn brands(
        State(controller): State<Arc<FoodController>>,
        query: Result<Query<BrandsParams>, QueryRejection>,
    ) -> AppResult<Response> {
        let Query(params) = query?;
        let response = controller.food_service.list_brands(params).await?;
        relay(response)
    }

    /// GET /api/foods/categories
    pub async fn categories(
        State(controller): State<Arc<FoodController>>,
        query: Result<Query<LocaleParams>, QueryRejection>,
    ) -> AppResult<Response> {
        let Query(params) = query?;
        let response = controller.food_service.list_categories(params).await?;
        relay(response)
    }

    /// GET /api/foods/sub-categories
    pub async fn sub_categories(
        State(controller): State<Arc<FoodController>>,
        query: Result<Query<SubCategoriesParams>, QueryRejection>,
    ) -> AppResult<Response> {
        let Query(params) = query?;
        let response = controller.food_service.list_sub_categories(params).await?;
        relay(response)
    }

    /// POST /api/foods/natural-language - Parse free text into foods
    pub async fn natural_language(
        State(controller): State<Arc<FoodController>>,
        body: Result<Json<NaturalLanguageRequest>, JsonRejection>,
    ) -> AppResult<Response> {
        let Json(request) = body?;
        let response = controller.food_service.parse_natural_language(request).await?;
        relay(response)
    }

    /// POST /api/foods/image-recognition - Detect foods in a base64 image
    pub async fn image_recognition(
        State(controller): State<Arc<FoodController>>,
        body: Result<Json<ImageRecognitionRequest>, JsonRejection>,
    ) -> AppResult<Response> {
        let Json(request) = body?;
        let response = controller.food_service.recognize_image(request).await?;
        relay(response)
    }
}
