use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Query for GET /api/foods/search
#[derive(Debug, Default, Deserialize)]
pub struct FoodSearchParams {
    pub q: Option<String>,
    pub page: Option<u32>,
    pub max_results: Option<u32>,
    pub region: Option<String>,
    pub language: Option<String>,
    pub food_type: Option<String>,
    pub include_sub_categories: Option<bool>,
    pub include_food_images: Option<bool>,
    pub include_food_attributes: Option<bool>,
    pub flag_default_serving: Option<bool>,
}

/// Query for GET /api/foods/autocomplete
#[derive(Debug, Default, Deserialize)]
pub struct AutocompleteParams {
    pub q: Option<String>,
    pub max_results: Option<u32>,
    pub region: Option<String>,
}

/// Query for GET /api/foods/barcode
#[derive(Debug, Default, Deserialize)]
pub struct BarcodeParams {
    pub barcode: Option<String>,
    pub region: Option<String>,
    pub language: Option<String>,
    pub include_sub_categories: Option<bool>,
    pub include_food_images: Option<bool>,
    pub include_food_attributes: Option<bool>,
    pub flag_default_serving: Option<bool>,
}

/// Query for GET /api/foods/details
#[derive(Debug, Default, Deserialize)]
pub struct FoodDetailsParams {
    pub food_id: Option<String>,
    pub region: Option<String>,
    pub language: Option<String>,
    pub include_sub_categories: Option<bool>,
    pub include_food_images: Option<bool>,
    pub include_food_attributes: Option<bool>,
    pub flag_default_serving: Option<bool>,
}

/// Query for GET /api/foods/brands
#[derive(Debug, Default, Deserialize)]
pub struct BrandsParams {
    pub starts_with: Option<String>,
    pub brand_type: Option<String>,
    pub region: Option<String>,
    pub language: Option<String>,
}

/// Query for GET /api/foods/categories and GET /api/recipes/types
#[derive(Debug, Default, Deserialize)]
pub struct LocaleParams {
    pub region: Option<String>,
    pub language: Option<String>,
}

/// Query for GET /api/foods/sub-categories
#[derive(Debug, Default, Deserialize)]
pub struct SubCategoriesParams {
    pub food_category_id: Option<String>,
    pub region: Option<String>,
    pub language: Option<String>,
}

/// Body for POST /api/foods/natural-language
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct NaturalLanguageRequest {
    pub user_input: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_food_attributes: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eaten_foods: Option<Vec<Value>>,
}

/// Body for POST /api/foods/image-recognition
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ImageRecognitionRequest {
    pub image_b64: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_food_attributes: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eaten_foods: Option<Vec<Value>>,
}
