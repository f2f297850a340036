use std::collections::HashMap;

use super::costing::cost_item;
use crate::models::{Ingredient, ItemStat, MenuItem};

/// Costing and period figures for every dish, in menu order.
pub fn item_stats(
    menu: &[MenuItem],
    ingredients: &[Ingredient],
    demand: &HashMap<String, u64>,
) -> Vec<ItemStat> {
    menu.iter()
        .map(|item| {
            let costing = cost_item(item, ingredients);
            let qty_sold = demand.get(&item.id).copied().unwrap_or(0);
            ItemStat {
                menu_item_id: item.id.clone(),
                name: item.name.clone(),
                selling_price: item.selling_price,
                unit_cost: costing.unit_cost,
                unit_margin: costing.unit_margin,
                margin_percent: costing.margin_percent,
                qty_sold,
                period_cost: costing.unit_cost * qty_sold as f64,
                period_profit: costing.unit_margin * qty_sold as f64,
            }
        })
        .collect()
}

/// The `n` best sellers by quantity. The sort is stable, so dishes with equal
/// quantities keep their menu order.
pub fn top_n(
    menu: &[MenuItem],
    ingredients: &[Ingredient],
    demand: &HashMap<String, u64>,
    n: usize,
) -> Vec<ItemStat> {
    let mut stats = item_stats(menu, ingredients, demand);
    stats.sort_by(|a, b| b.qty_sold.cmp(&a.qty_sold));
    stats.truncate(n);
    stats
}
