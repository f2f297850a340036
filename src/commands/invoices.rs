use serde::Serialize;
use tracing::{info, warn};

use super::ingredients::validate;
use super::{new_id, require_amount, require_text};
use crate::ai::AiGateway;
use crate::error::{AppError, AppResult};
use crate::models::{Ingredient, InvoiceLine, ParsedInvoice};
use crate::store::Store;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceOutcome {
    /// Ids of existing ingredients that absorbed a line.
    pub merged: Vec<String>,
    /// Ids of ingredients created from unmatched lines.
    pub created: Vec<String>,
}

pub async fn scan_invoice(
    gateway: &dyn AiGateway,
    image: &[u8],
    mime_type: &str,
) -> AppResult<ParsedInvoice> {
    let invoice = gateway.parse_invoice(image, mime_type).await?;
    info!(
        supplier = %invoice.supplier_name,
        lines = invoice.items.len(),
        "Scanned invoice"
    );
    Ok(invoice)
}

/// Fold a confirmed invoice into the ingredient list.
///
/// A line whose name equals an existing ingredient's (ignoring case) adds to
/// its stock and sets its market price and supplier. Anything else becomes a
/// new ingredient priced at the invoice unit price. Lines that would leave
/// an ingredient invalid (no quantity, negative price, no unit) are skipped.
pub fn apply_invoice(store: &mut Store, invoice: &ParsedInvoice) -> AppResult<InvoiceOutcome> {
    let mut outcome = InvoiceOutcome::default();

    for line in &invoice.items {
        if let Err(e) = check_line(line) {
            warn!(name = %line.name, error = %e, "Skipping invalid invoice line");
            continue;
        }
        let name = line.name.trim();

        let needle = name.to_lowercase();
        if let Some(existing) = store
            .ingredients
            .iter_mut()
            .find(|i| i.name.to_lowercase() == needle)
        {
            existing.current_stock += line.qty;
            existing.current_market_price = line.unit_price;
            existing.supplier_name = Some(invoice.supplier_name.clone());
            outcome.merged.push(existing.id.clone());
            continue;
        }

        let ingredient = Ingredient {
            id: new_id(),
            name: name.to_string(),
            unit: line.unit.trim().to_string(),
            base_price: line.unit_price,
            current_market_price: line.unit_price,
            current_stock: line.qty,
            supplier_name: Some(invoice.supplier_name.clone()),
            supplier_contact: None,
        };
        if let Err(e) = validate(&ingredient) {
            warn!(name = %line.name, error = %e, "Skipping invalid invoice line");
            continue;
        }
        outcome.created.push(ingredient.id.clone());
        store.ingredients.push(ingredient);
    }

    if !outcome.merged.is_empty() || !outcome.created.is_empty() {
        store.save_ingredients()?;
    }

    info!(
        supplier = %invoice.supplier_name,
        merged = outcome.merged.len(),
        created = outcome.created.len(),
        "Applied invoice"
    );
    Ok(outcome)
}

fn check_line(line: &InvoiceLine) -> AppResult<()> {
    require_text("Item name", &line.name)?;
    require_amount("Unit price", line.unit_price)?;
    if !line.qty.is_finite() || line.qty <= 0.0 {
        return Err(AppError::validation(format!(
            "Quantity must be positive, got {}",
            line.qty
        )));
    }
    Ok(())
}
