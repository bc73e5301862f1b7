//! # Emporium Assets
//!
//! Client for the third-party asset host that stores product images.
//! Uploads return a durable URL that is persisted on the product record;
//! deletions are addressed by the upload key derived back from that URL.

pub mod client;
pub mod key;

pub use client::*;
pub use key::*;
