// src/models/mod.rs

//! Data structures shared across the publisher.

pub mod manifest;
pub mod post;

pub use manifest::Manifest;
pub use post::{IndexEntry, Post};
