use chrono::{Local, NaiveDateTime};
use tracing::{info, warn};

use super::{clean_orders, new_id, require_date};
use crate::error::{AppError, AppResult};
use crate::models::{CreateSale, Sale};
use crate::store::Store;

pub fn get_sales(store: &Store) -> &[Sale] {
    store.sales()
}

pub fn create_sale(store: &mut Store, sale: CreateSale) -> AppResult<Sale> {
    create_sale_at(store, sale, Local::now().naive_local())
}

/// Record a sale at wall-clock `now`. The total is priced from the current
/// menu once and then frozen; later price changes never touch it.
pub fn create_sale_at(store: &mut Store, sale: CreateSale, now: NaiveDateTime) -> AppResult<Sale> {
    let items = clean_orders(sale.items);
    if items.is_empty() {
        return Err(AppError::validation("A sale needs at least one item"));
    }

    let date = sale
        .date
        .filter(|d| !d.trim().is_empty())
        .unwrap_or_else(|| now.format("%Y-%m-%d").to_string());
    require_date(&date)?;

    let mut total = 0.0;
    for line in &items {
        match store.menu().iter().find(|m| m.id == line.menu_item_id) {
            Some(item) => total += item.selling_price * f64::from(line.quantity),
            None => warn!(menu_item = %line.menu_item_id, "Sale line references a missing dish, priced at 0"),
        }
    }

    let sale = Sale {
        id: new_id(),
        date,
        time: now.format("%H:%M").to_string(),
        items,
        total_amount: total,
        payment_method: sale.payment_method,
    };

    store.sales.push(sale.clone());
    store.save_sales()?;

    info!(id = %sale.id, total = sale.total_amount, method = ?sale.payment_method, "Recorded sale");
    Ok(sale)
}
