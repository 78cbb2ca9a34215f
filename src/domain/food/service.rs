use super::dto::{
    AutocompleteParams, BarcodeParams, BrandsParams, FoodDetailsParams, FoodSearchParams,
    ImageRecognitionRequest, LocaleParams, NaturalLanguageRequest, SubCategoriesParams,
};
use super::error::FoodServiceError;
use crate::domain::shared::params::{
    clamp_max_results, non_blank, one_of, require_barcode, require_digits, require_text,
    with_locale,
};
use crate::infrastructure::fatsecret::{FatSecretApi, UpstreamRequest, UpstreamResponse};
use async_trait::async_trait;
use std::sync::Arc;

const FOODS_SEARCH_PATH: &str = "/foods/search/v3";
const AUTOCOMPLETE_PATH: &str = "/food/autocomplete/v2";
const BARCODE_PATH: &str = "/food/barcode/find-by-id/v2";
const FOOD_PATH: &str = "/food/v4";
const BRANDS_PATH: &str = "/brands/v2";
const CATEGORIES_PATH: &str = "/food-categories/v2";
const SUB_CATEGORIES_PATH: &str = "/food-sub-categories/v2";
const NLP_PATH: &str = "/natural-language-processing/v1";
const IMAGE_RECOGNITION_PATH: &str = "/image-recognition/v2";

pub const SEARCH_DEFAULT_RESULTS: u32 = 20;
pub const SEARCH_MAX_RESULTS: u32 = 50;
pub const AUTOCOMPLETE_DEFAULT_RESULTS: u32 = 4;
pub const AUTOCOMPLETE_MAX_RESULTS: u32 = 10;
pub const NLP_MAX_INPUT_CHARS: usize = 1000;
pub const IMAGE_MAX_B64_CHARS: usize = 999_982;

const BRAND_TYPES: [&str; 3] = ["manufacturer", "restaurant", "supermarket"];

pub struct FoodService {
    api: Arc<dyn FatSecretApi>,
}

impl FoodService {
    pub fn new(api: Arc<dyn FatSecretApi>) -> Self {
        Self { api }
    }
}

#[async_trait]
pub trait FoodServiceApi: Send + Sync {
    async fn search(&self, params: FoodSearchParams) -> Result<UpstreamResponse, FoodServiceError>;

    async fn autocomplete(
        &self,
        params: AutocompleteParams,
    ) -> Result<UpstreamResponse, FoodServiceError>;

    async fn find_by_barcode(
        &self,
        params: BarcodeParams,
    ) -> Result<UpstreamResponse, FoodServiceError>;

    async fn get_food(&self, params: FoodDetailsParams)
        -> Result<UpstreamResponse, FoodServiceError>;

    async fn list_brands(&self, params: BrandsParams) -> Result<UpstreamResponse, FoodServiceError>;

    async fn list_categories(
        &self,
        params: LocaleParams,
    ) -> Result<UpstreamResponse, FoodServiceError>;

    async fn list_sub_categories(
        &self,
        params: SubCategoriesParams,
    ) -> Result<UpstreamResponse, FoodServiceError>;

    async fn parse_natural_language(
        &self,
        request: NaturalLanguageRequest,
    ) -> Result<UpstreamResponse, FoodServiceError>;

    async fn recognize_image(
        &self,
        request: ImageRecognitionRequest,
    ) -> Result<UpstreamResponse, FoodServiceError>;
}

#[async_trait]
impl FoodServiceApi for FoodService {
    async fn search(&self, params: FoodSearchParams) -> Result<UpstreamResponse, FoodServiceError> {
        let expression = require_text("q", params.q)?;

        let request = UpstreamRequest::get(FOODS_SEARCH_PATH)
            .param("search_expression", expression)
            .param("page_number", params.page.unwrap_or(0))
            .param(
                "max_results",
                clamp_max_results(params.max_results, SEARCH_DEFAULT_RESULTS, SEARCH_MAX_RESULTS),
            )
            .param_opt("food_type", non_blank(params.food_type));
        let request = with_locale(request, params.region, params.language);
        let request = with_food_flags(
            request,
            params.include_sub_categories,
            params.include_food_images,
            params.include_food_attributes,
            params.flag_default_serving,
        );

        self.forward(request).await
    }

    async fn autocomplete(
        &self,
        params: AutocompleteParams,
    ) -> Result<UpstreamResponse, FoodServiceError> {
        let expression = require_text("q", params.q)?;

        let request = UpstreamRequest::get(AUTOCOMPLETE_PATH)
            .param("expression", expression)
            .param(
                "max_results",
                clamp_max_results(
                    params.max_results,
                    AUTOCOMPLETE_DEFAULT_RESULTS,
                    AUTOCOMPLETE_MAX_RESULTS,
                ),
            )
            .param_opt("region", non_blank(params.region));

        self.forward(request).await
    }

    async fn find_by_barcode(
        &self,
        params: BarcodeParams,
    ) -> Result<UpstreamResponse, FoodServiceError> {
        let barcode = require_barcode(params.barcode)?;

        let request = UpstreamRequest::get(BARCODE_PATH).param("barcode", barcode);
        let request = with_locale(request, params.region, params.language);
        let request = with_food_flags(
            request,
            params.include_sub_categories,
            params.include_food_images,
            params.include_food_attributes,
            params.flag_default_serving,
        );

        self.forward(request).await
    }

    async fn get_food(
        &self,
        params: FoodDetailsParams,
    ) -> Result<UpstreamResponse, FoodServiceError> {
        let food_id = require_digits("food_id", params.food_id)?;

        let request = UpstreamRequest::get(FOOD_PATH).param("food_id", food_id);
        let request = with_locale(request, params.region, params.language);
        let request = with_food_flags(
            request,
            params.include_sub_categories,
            params.include_food_images,
            params.include_food_attributes,
            params.flag_default_serving,
        );

        self.forward(request).await
    }

    async fn list_brands(&self, params: BrandsParams) -> Result<UpstreamResponse, FoodServiceError> {
        let brand_type = one_of(
            "brand_type",
            non_blank(params.brand_type),
            &BRAND_TYPES,
            Some("manufacturer"),
        )?;

        let request = UpstreamRequest::get(BRANDS_PATH)
            .param_opt("starts_with", non_blank(params.starts_with))
            .param_opt("brand_type", brand_type);
        let request = with_locale(request, params.region, params.language);

        self.forward(request).await
    }

    async fn list_categories(
        &self,
        params: LocaleParams,
    ) -> Result<UpstreamResponse, FoodServiceError> {
        let request = with_locale(
            UpstreamRequest::get(CATEGORIES_PATH),
            params.region,
            params.language,
        );

        self.forward(request).await
    }

    async fn list_sub_categories(
        &self,
        params: SubCategoriesParams,
    ) -> Result<UpstreamResponse, FoodServiceError> {
        let category_id = require_digits("food_category_id", params.food_category_id)?;

        let request =
            UpstreamRequest::get(SUB_CATEGORIES_PATH).param("food_category_id", category_id);
        let request = with_locale(request, params.region, params.language);

        self.forward(request).await
    }

    async fn parse_natural_language(
        &self,
        request: NaturalLanguageRequest,
    ) -> Result<UpstreamResponse, FoodServiceError> {
        let user_input = require_text("user_input", request.user_input)?;
        if user_input.chars().count() > NLP_MAX_INPUT_CHARS {
            return Err(FoodServiceError::Invalid(format!(
                "user_input must be {} characters or less",
                NLP_MAX_INPUT_CHARS
            )));
        }

        let body = serde_json::to_value(NaturalLanguageRequest {
            user_input: Some(user_input),
            region: non_blank(request.region),
            language: non_blank(request.language),
            include_food_attributes: request.include_food_attributes,
            eaten_foods: request.eaten_foods,
        })?;

        self.forward(UpstreamRequest::post(NLP_PATH, body)).await
    }

    async fn recognize_image(
        &self,
        request: ImageRecognitionRequest,
    ) -> Result<UpstreamResponse, FoodServiceError> {
        let image_b64 = require_text("image_b64", request.image_b64)?;
        if image_b64.len() > IMAGE_MAX_B64_CHARS {
            return Err(FoodServiceError::Invalid(format!(
                "image_b64 must be {} characters or less",
                IMAGE_MAX_B64_CHARS
            )));
        }

        let body = serde_json::to_value(ImageRecognitionRequest {
            image_b64: Some(image_b64),
            region: non_blank(request.region),
            language: non_blank(request.language),
            include_food_attributes: request.include_food_attributes,
            eaten_foods: request.eaten_foods,
        })?;

        self.forward(UpstreamRequest::post(IMAGE_RECOGNITION_PATH, body))
            .await
    }
}

impl FoodService {
    async fn forward(&self, request: UpstreamRequest) -> Result<UpstreamResponse, FoodServiceError> {
        tracing::debug!(path = request.path, "Forwarding food request");
        Ok(self.api.send(request).await?)
    }
}

fn with_food_flags(
    request: UpstreamRequest,
    include_sub_categories: Option<bool>,
    include_food_images: Option<bool>,
    include_food_attributes: Option<bool>,
    flag_default_serving: Option<bool>,
) -> UpstreamRequest {
    request
        .param_opt("include_sub_categories", include_sub_categories)
        .param_opt("include_food_images", include_food_images)
        .param_opt("include_food_attributes", include_food_attributes)
        .param_opt("flag_default_serving", flag_default_serving)
}
