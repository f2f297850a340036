use serde::Serialize;
use tracing::info;

use super::menu::{find_menu_item_by_name, set_selling_price};
use crate::error::{AppError, AppResult};
use crate::models::QuickAction;
use crate::store::Store;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ActionOutcome {
    PriceUpdated {
        menu_item_id: String,
        previous_price: f64,
        new_price: f64,
    },
    /// Email for the caller to hand to a mail client; nothing is sent or stored.
    EmailDraft {
        recipient: String,
        subject: String,
        body: String,
    },
}

/// Execute the action at `index` of the active list.
///
/// A price update reprices the dish whose name matches (ignoring case) and
/// leaves the list. A supplier email only produces a draft and stays.
pub fn execute_quick_action(
    store: &mut Store,
    actions: &mut Vec<QuickAction>,
    index: usize,
) -> AppResult<ActionOutcome> {
    let action = actions
        .get(index)
        .cloned()
        .ok_or_else(|| AppError::not_found("Quick action", index.to_string()))?;

    match action {
        QuickAction::PriceUpdate {
            item_name,
            new_price,
            ..
        } => {
            let menu_item_id = find_menu_item_by_name(store, &item_name)
                .map(|m| m.id.clone())
                .ok_or_else(|| AppError::not_found("Menu item", &item_name))?;
            let previous_price = set_selling_price(store, &menu_item_id, new_price)?;
            actions.remove(index);

            info!(dish = %item_name, previous_price, new_price, "Applied price update");
            Ok(ActionOutcome::PriceUpdated {
                menu_item_id,
                previous_price,
                new_price,
            })
        }
        QuickAction::SupplierEmail {
            recipient,
            subject,
            body,
            ..
        } => Ok(ActionOutcome::EmailDraft {
            recipient,
            subject,
            body,
        }),
    }
}

/// Execute an action kept in a recorded analysis. The stored list is updated
/// the same way as an active one, so a price update cannot be replayed.
pub fn execute_stored_action(
    store: &mut Store,
    analysis_id: &str,
    index: usize,
) -> AppResult<ActionOutcome> {
    let mut actions = store
        .history
        .iter()
        .find(|h| h.id == analysis_id)
        .map(|h| h.result.quick_actions.clone())
        .ok_or_else(|| AppError::not_found("Analysis", analysis_id))?;

    let outcome = execute_quick_action(store, &mut actions, index)?;

    let mut changed = false;
    if let Some(item) = store.history.iter_mut().find(|h| h.id == analysis_id) {
        if item.result.quick_actions != actions {
            item.result.quick_actions = actions;
            changed = true;
        }
    }
    if changed {
        store.save_history()?;
    }

    Ok(outcome)
}

/// Drop an action from the active list without running it.
pub fn dismiss_action(actions: &mut Vec<QuickAction>, index: usize) -> AppResult<QuickAction> {
    if index >= actions.len() {
        return Err(AppError::not_found("Quick action", index.to_string()));
    }
    Ok(actions.remove(index))
}
