pub mod client;
pub mod error;
pub mod token_manager;

pub use client::{FatSecretApi, FatSecretClient, UpstreamMethod, UpstreamRequest, UpstreamResponse};
pub use error::FatSecretError;
pub use token_manager::TokenManager;
