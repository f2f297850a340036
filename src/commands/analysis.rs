use tracing::info;

use super::history::record_analysis;
use super::reports::derive_dashboard;
use crate::ai::Analyzer;
use crate::analytics::{market_movers, round_money};
use crate::error::AppResult;
use crate::models::{
    AnalysisHistoryItem, AnalysisRequest, DateRange, InventoryLevel, MarketUpdate,
    RecipeIngredient, RecipeSummary, TopSeller,
};
use crate::store::Store;

/// Snapshot of the store for the given period, in the shape the AI gateway expects.
pub fn build_analysis_request(store: &Store, range: &DateRange, top: usize) -> AnalysisRequest {
    let view = derive_dashboard(store, range, top);

    let top_selling_items = view
        .top_items
        .iter()
        .filter(|s| s.qty_sold > 0)
        .map(|s| TopSeller {
            name: s.name.clone(),
            qty: s.qty_sold,
        })
        .collect();

    let market_updates = market_movers(store.ingredients())
        .into_iter()
        .map(|i| MarketUpdate {
            ingredient: i.name.clone(),
            new_price_per_unit: round_money(i.current_market_price),
            unit: i.unit.clone(),
        })
        .collect();

    let current_inventory = store
        .ingredients()
        .iter()
        .map(|i| InventoryLevel {
            ingredient: i.name.clone(),
            qty: i.current_stock,
            unit: i.unit.clone(),
            supplier_name: i.supplier_name.clone(),
            supplier_contact: i.supplier_contact.clone(),
        })
        .collect();

    let recipes = store
        .menu()
        .iter()
        .map(|m| RecipeSummary {
            dish_name: m.name.clone(),
            selling_price: round_money(m.selling_price),
            ingredients: m
                .recipe
                .iter()
                .filter_map(|line| {
                    store
                        .ingredients()
                        .iter()
                        .find(|i| i.id == line.ingredient_id)
                        .map(|i| RecipeIngredient {
                            name: i.name.clone(),
                            qty: line.quantity,
                        })
                })
                .collect(),
        })
        .collect();

    AnalysisRequest {
        period: range.to_string(),
        reservation_pax: view.stats.reservation_pax,
        sales_volume: view.stats.sales_count,
        top_selling_items,
        market_updates,
        current_inventory,
        recipes,
    }
}

/// Analyze the period and log the result in history. A failed call leaves
/// every collection untouched.
pub async fn run_analysis(
    store: &mut Store,
    analyzer: &Analyzer,
    range: &DateRange,
    top: usize,
) -> AppResult<AnalysisHistoryItem> {
    let request = build_analysis_request(store, range, top);
    let response = analyzer.analyze(&request).await?;

    let item = record_analysis(store, response, range.clone())?;
    info!(id = %item.id, "Analysis stored in history");
    Ok(item)
}
