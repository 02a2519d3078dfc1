// src/utils/mod.rs

//! Utility functions and helpers.

pub mod html;
pub mod http;
pub mod report;
pub mod url;
