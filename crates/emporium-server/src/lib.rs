//! # Emporium Server Library
//!
//! Server startup utilities for the Emporium catalog application.

pub mod startup;
