//! # Emporium Core
//!
//! Core types, traits, and error definitions for the Emporium catalog
//! backend. This crate provides the foundational abstractions used across
//! all layers of the application.

pub mod domain;
pub mod error;
pub mod id;
pub mod result;
pub mod traits;

pub use domain::*;
pub use error::*;
pub use id::*;
pub use result::*;
pub use traits::*;
