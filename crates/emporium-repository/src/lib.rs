//! # Emporium Repository
//!
//! Data access layer for the Emporium catalog: the [`ProductRepository`]
//! trait consumed by the service layer and its MySQL / SQLx implementation.

pub mod mysql;
pub mod pool;
pub mod traits;

pub use mysql::*;
pub use pool::*;
pub use traits::*;
