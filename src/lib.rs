// src/lib.rs

//! I-Chu card crawler library
//!
//! Scrapes LE/GR card pages from the I-Chu fan wiki into a JSON dataset.

pub mod error;
pub mod models;
pub mod pipeline;
pub mod services;
pub mod storage;
pub mod utils;
