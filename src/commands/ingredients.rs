use tracing::info;

use super::{new_id, require_amount, require_text};
use crate::error::{AppError, AppResult};
use crate::models::{CreateIngredient, Ingredient};
use crate::store::Store;

pub fn get_ingredients(store: &Store) -> &[Ingredient] {
    store.ingredients()
}

/// Case-insensitive exact name match.
pub fn find_ingredient_by_name<'a>(store: &'a Store, name: &str) -> Option<&'a Ingredient> {
    let needle = name.to_lowercase();
    store
        .ingredients()
        .iter()
        .find(|i| i.name.to_lowercase() == needle)
}

pub fn create_ingredient(store: &mut Store, ingredient: CreateIngredient) -> AppResult<Ingredient> {
    let market_price = ingredient.current_market_price.unwrap_or(ingredient.base_price);

    let ingredient = Ingredient {
        id: new_id(),
        name: ingredient.name.trim().to_string(),
        unit: ingredient.unit.trim().to_string(),
        base_price: ingredient.base_price,
        current_market_price: market_price,
        current_stock: ingredient.current_stock,
        supplier_name: ingredient.supplier_name,
        supplier_contact: ingredient.supplier_contact,
    };
    validate(&ingredient)?;

    store.ingredients.push(ingredient.clone());
    store.save_ingredients()?;

    info!(id = %ingredient.id, name = %ingredient.name, "Created ingredient");
    Ok(ingredient)
}

pub fn update_ingredient(store: &mut Store, ingredient: Ingredient) -> AppResult<Ingredient> {
    validate(&ingredient)?;

    let slot = store
        .ingredients
        .iter_mut()
        .find(|i| i.id == ingredient.id)
        .ok_or_else(|| AppError::not_found("Ingredient", &ingredient.id))?;
    *slot = ingredient.clone();
    store.save_ingredients()?;

    info!(id = %ingredient.id, "Updated ingredient");
    Ok(ingredient)
}

/// Recipe lines pointing at a deleted ingredient are left in place and cost nothing.
pub fn delete_ingredient(store: &mut Store, id: &str) -> AppResult<()> {
    let before = store.ingredients.len();
    store.ingredients.retain(|i| i.id != id);
    if store.ingredients.len() == before {
        return Err(AppError::not_found("Ingredient", id));
    }
    store.save_ingredients()?;

    info!(id, "Deleted ingredient");
    Ok(())
}

pub(crate) fn validate(ingredient: &Ingredient) -> AppResult<()> {
    require_text("Ingredient name", &ingredient.name)?;
    require_text("Unit", &ingredient.unit)?;
    require_amount("Base price", ingredient.base_price)?;
    require_amount("Market price", ingredient.current_market_price)?;
    if !ingredient.current_stock.is_finite() {
        return Err(AppError::validation("Stock must be a number"));
    }
    Ok(())
}
