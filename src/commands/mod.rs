pub mod actions;
pub mod analysis;
pub mod history;
pub mod ingredients;
pub mod invoices;
pub mod menu;
pub mod reports;
pub mod reservations;
pub mod sales;

use chrono::{NaiveDate, NaiveTime};
use tracing::debug;

use crate::error::{AppError, AppResult};
use crate::models::{OrderLine, RecipeLine};

pub(crate) fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

pub(crate) fn require_text(field: &str, value: &str) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} is required")));
    }
    Ok(())
}

pub(crate) fn require_amount(field: &str, value: f64) -> AppResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(AppError::validation(format!(
            "{field} must be a non-negative number, got {value}"
        )));
    }
    Ok(())
}

pub(crate) fn require_date(value: &str) -> AppResult<()> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(|_| ())
        .map_err(|_| AppError::validation(format!("Invalid date '{value}', expected YYYY-MM-DD")))
}

pub(crate) fn require_time(value: &str) -> AppResult<()> {
    NaiveTime::parse_from_str(value, "%H:%M")
        .map(|_| ())
        .map_err(|_| AppError::validation(format!("Invalid time '{value}', expected HH:MM")))
}

/// Drop draft rows with no ingredient or a non-positive quantity.
pub(crate) fn clean_recipe(lines: Vec<RecipeLine>) -> Vec<RecipeLine> {
    let before = lines.len();
    let kept: Vec<RecipeLine> = lines
        .into_iter()
        .filter(|l| !l.ingredient_id.trim().is_empty() && l.quantity.is_finite() && l.quantity > 0.0)
        .collect();
    if kept.len() != before {
        debug!(dropped = before - kept.len(), "Discarded incomplete recipe lines");
    }
    kept
}

/// Drop draft rows with no dish or a zero quantity.
pub(crate) fn clean_orders(lines: Vec<OrderLine>) -> Vec<OrderLine> {
    let before = lines.len();
    let kept: Vec<OrderLine> = lines
        .into_iter()
        .filter(|l| !l.menu_item_id.trim().is_empty() && l.quantity > 0)
        .collect();
    if kept.len() != before {
        debug!(dropped = before - kept.len(), "Discarded incomplete order lines");
    }
    kept
}
