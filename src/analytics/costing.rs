use crate::models::{Ingredient, MenuItem};

/// Per-unit economics of one dish at current market prices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Costing {
    pub unit_cost: f64,
    pub unit_margin: f64,
    pub margin_percent: f64,
}

/// Sum of `market price × quantity` over the recipe. Lines whose ingredient
/// no longer exists cost nothing.
pub fn unit_cost(item: &MenuItem, ingredients: &[Ingredient]) -> f64 {
    item.recipe
        .iter()
        .map(|line| {
            ingredients
                .iter()
                .find(|i| i.id == line.ingredient_id)
                .map(|i| i.current_market_price * line.quantity)
                .unwrap_or(0.0)
        })
        .sum()
}

pub fn cost_item(item: &MenuItem, ingredients: &[Ingredient]) -> Costing {
    let unit_cost = unit_cost(item, ingredients);
    let unit_margin = item.selling_price - unit_cost;
    Costing {
        unit_cost,
        unit_margin,
        margin_percent: margin_percent(unit_margin, item.selling_price),
    }
}

/// `margin / price × 100`. A zero price divides by 1 instead so the result
/// stays finite; the 1 is a guard, not a price.
pub fn margin_percent(unit_margin: f64, selling_price: f64) -> f64 {
    let denominator = if selling_price == 0.0 { 1.0 } else { selling_price };
    unit_margin / denominator * 100.0
}

/// Ingredients whose market price has moved away from the reference price.
pub fn market_movers(ingredients: &[Ingredient]) -> Vec<&Ingredient> {
    ingredients
        .iter()
        .filter(|i| i.current_market_price != i.base_price)
        .collect()
}
