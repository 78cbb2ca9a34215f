pub mod config;
pub mod fatsecret;
pub mod http;
