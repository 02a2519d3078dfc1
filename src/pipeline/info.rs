// src/pipeline/info.rs

//! Dataset status report.

use crate::error::Result;
use crate::storage::{CardStorage, LocalStorage};

/// Report whether the dataset exists and how many cards it holds.
///
/// Returns the card count, or `None` if no dataset has been written.
pub async fn run_info(storage: &LocalStorage) -> Result<Option<usize>> {
    log::info!("Dataset: {}", storage.path().display());

    let Some(cards) = storage.load_cards().await? else {
        log::info!("No dataset found yet.");
        return Ok(None);
    };

    log::info!("Cards: {}", cards.len());
    let leaders = cards.iter().filter(|c| c.leader_skill.name.is_some()).count();
    let without_stats = cards.iter().filter(|c| c.stats.is_empty()).count();
    log::info!("With leader skill: {}", leaders);
    log::info!("Without stats: {}", without_stats);

    Ok(Some(cards.len()))
}
