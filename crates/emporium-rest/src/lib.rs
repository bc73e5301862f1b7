//! # Emporium REST
//!
//! REST API layer using Axum for the Emporium catalog backend.
//! Provides HTTP endpoints for catalog browsing, product management, and
//! health checks.

pub mod controllers;
pub mod middleware;
pub mod openapi;
pub mod responses;
pub mod router;
pub mod state;

pub use router::*;
pub use state::*;
