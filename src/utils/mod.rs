// src/utils/mod.rs

//! Shared utilities.

pub mod html;
pub mod http;
