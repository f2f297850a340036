use tracing::info;

use super::{clean_recipe, new_id, require_amount, require_text};
use crate::error::{AppError, AppResult};
use crate::models::{CreateMenuItem, MenuItem};
use crate::store::Store;

pub fn get_menu(store: &Store) -> &[MenuItem] {
    store.menu()
}

/// Case-insensitive exact name match.
pub fn find_menu_item_by_name<'a>(store: &'a Store, name: &str) -> Option<&'a MenuItem> {
    let needle = name.to_lowercase();
    store.menu().iter().find(|m| m.name.to_lowercase() == needle)
}

pub fn create_menu_item(store: &mut Store, item: CreateMenuItem) -> AppResult<MenuItem> {
    let item = MenuItem {
        id: new_id(),
        name: item.name.trim().to_string(),
        selling_price: item.selling_price,
        recipe: clean_recipe(item.recipe),
    };
    validate(&item)?;

    store.menu.push(item.clone());
    store.save_menu()?;

    info!(id = %item.id, name = %item.name, lines = item.recipe.len(), "Created menu item");
    Ok(item)
}

pub fn update_menu_item(store: &mut Store, item: MenuItem) -> AppResult<MenuItem> {
    let item = MenuItem {
        recipe: clean_recipe(item.recipe),
        ..item
    };
    validate(&item)?;

    let slot = store
        .menu
        .iter_mut()
        .find(|m| m.id == item.id)
        .ok_or_else(|| AppError::not_found("Menu item", &item.id))?;
    *slot = item.clone();
    store.save_menu()?;

    info!(id = %item.id, "Updated menu item");
    Ok(item)
}

/// Returns the previous price.
pub fn set_selling_price(store: &mut Store, id: &str, price: f64) -> AppResult<f64> {
    require_amount("Selling price", price)?;

    let item = store
        .menu
        .iter_mut()
        .find(|m| m.id == id)
        .ok_or_else(|| AppError::not_found("Menu item", id))?;
    let previous = std::mem::replace(&mut item.selling_price, price);
    store.save_menu()?;

    info!(id, previous, price, "Repriced menu item");
    Ok(previous)
}

/// Sales and pre-orders that reference a deleted dish keep their lines.
pub fn delete_menu_item(store: &mut Store, id: &str) -> AppResult<()> {
    let before = store.menu.len();
    store.menu.retain(|m| m.id != id);
    if store.menu.len() == before {
        return Err(AppError::not_found("Menu item", id));
    }
    store.save_menu()?;

    info!(id, "Deleted menu item");
    Ok(())
}

fn validate(item: &MenuItem) -> AppResult<()> {
    require_text("Dish name", &item.name)?;
    require_amount("Selling price", item.selling_price)
}
