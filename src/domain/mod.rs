pub mod food;
pub mod recipe;
pub mod shared;
