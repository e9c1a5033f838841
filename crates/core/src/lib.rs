pub mod article;
pub mod error;
pub mod fold;
pub mod types;
pub mod validation;
