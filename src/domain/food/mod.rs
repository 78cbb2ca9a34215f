pub mod dto;
pub mod error;
pub mod service;

pub use dto::{
    AutocompleteParams, BarcodeParams, BrandsParams, FoodDetailsParams, FoodSearchParams,
    ImageRecognitionRequest, LocaleParams, NaturalLanguageRequest, SubCategoriesParams,
};
pub use error::FoodServiceError;
pub use service::{FoodService, FoodServiceApi};
