//! Storage abstractions for the card dataset.
//!
//! The dataset is a single JSON array of card records consumed by the web
//! app. Writes replace the whole file.

pub mod local;

use std::path::PathBuf;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::models::CardRecord;

// Re-export for convenience
pub use local::LocalStorage;

/// Metadata about a storage write operation.
#[derive(Debug, Clone)]
pub struct WriteMetadata {
    /// Number of cards written
    pub card_count: usize,
    /// Size of the written file in bytes
    pub bytes: usize,
    /// Where the dataset was written
    pub location: PathBuf,
    /// Timestamp of the write
    pub timestamp: DateTime<Utc>,
}

/// Trait for card dataset storage backends.
#[async_trait]
pub trait CardStorage: Send + Sync {
    /// Replace the dataset with `cards`, in the given order.
    async fn write_cards(&self, cards: &[CardRecord]) -> Result<WriteMetadata>;

    /// Load the dataset, or `None` if nothing has been written yet.
    async fn load_cards(&self) -> Result<Option<Vec<CardRecord>>>;
}
