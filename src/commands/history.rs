use chrono::Utc;
use tracing::info;

use super::new_id;
use crate::error::{AppError, AppResult};
use crate::models::{AIAnalysisResponse, AnalysisHistoryItem, DateRange};
use crate::store::Store;

/// Most recent first.
pub fn get_history(store: &Store) -> &[AnalysisHistoryItem] {
    store.history()
}

/// Prepend a snapshot of an analysis. With a history limit configured the
/// oldest entries beyond it are dropped.
pub fn record_analysis(
    store: &mut Store,
    result: AIAnalysisResponse,
    date_range: DateRange,
) -> AppResult<AnalysisHistoryItem> {
    let item = AnalysisHistoryItem {
        id: new_id(),
        timestamp: Utc::now().to_rfc3339(),
        date_range,
        result,
    };

    store.history.insert(0, item.clone());
    if let Some(limit) = store.history_limit {
        store.history.truncate(limit);
    }
    store.save_history()?;

    info!(id = %item.id, range = %item.date_range, "Recorded analysis");
    Ok(item)
}

pub fn delete_history_item(store: &mut Store, id: &str) -> AppResult<()> {
    let before = store.history.len();
    store.history.retain(|h| h.id != id);
    if store.history.len() == before {
        return Err(AppError::not_found("Analysis", id));
    }
    store.save_history()?;

    info!(id, "Deleted analysis");
    Ok(())
}
