pub mod json;
pub mod repository;
