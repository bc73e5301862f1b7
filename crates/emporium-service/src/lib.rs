//! # Emporium Service
//!
//! Business logic service layer for the Emporium catalog backend.
//! Orchestrates the product repository, the featured-products cache, and
//! the asset host client.

pub mod cache;
pub mod dto;
pub mod mappers;
pub mod product_service;

mod r#impl;

pub use cache::*;
pub use dto::*;
pub use product_service::*;
pub use r#impl::*;
