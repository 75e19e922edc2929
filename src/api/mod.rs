// src/api/mod.rs
// Wire types and error mapping shared by the HTTP handlers

pub mod error;
pub mod types;

pub use error::{ApiError, ApiResult};
pub use types::*;
