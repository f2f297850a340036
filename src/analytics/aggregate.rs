use std::collections::HashMap;

use rust_decimal::prelude::*;
use tracing::debug;

use super::costing::unit_cost;
use super::period::filter_by_date;
use super::ranking::item_stats;
use super::money;
use crate::models::{DateRange, Ingredient, MenuItem, PeriodStats, Reservation, Sale};

/// Average ticket assumed for bookings without a pre-order when the menu is empty.
pub const FALLBACK_TICKET_PRICE: f64 = 30.0;

/// Cost of a booking without a pre-order, as a share of its estimated revenue.
/// A flat approximation, not derived from any recipe.
pub const ESTIMATED_COST_RATIO: f64 = 0.3;

/// Running totals for one period, before per-item statistics are attached.
/// Money is accumulated as exact decimals so the totals do not depend on
/// input order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Totals {
    pub revenue: Decimal,
    pub cost: Decimal,
    pub reservation_pax: u64,
    pub sales_count: usize,
    /// Menu item id to quantity ordered in the period.
    pub demand: HashMap<String, u64>,
}

/// Mean selling price across the whole menu.
pub fn average_ticket_price(menu: &[MenuItem]) -> f64 {
    if menu.is_empty() {
        return FALLBACK_TICKET_PRICE;
    }
    menu.iter().map(|m| m.selling_price).sum::<f64>() / menu.len() as f64
}

pub fn aggregate_totals(
    ingredients: &[Ingredient],
    menu: &[MenuItem],
    reservations: &[Reservation],
    sales: &[Sale],
    range: &DateRange,
) -> Totals {
    // (selling price, unit cost) per dish, resolved once
    let priced: HashMap<&str, (Decimal, Decimal)> = menu
        .iter()
        .map(|m| {
            (
                m.id.as_str(),
                (money(m.selling_price), money(unit_cost(m, ingredients))),
            )
        })
        .collect();

    let mut totals = Totals::default();

    for sale in filter_by_date(sales, range) {
        totals.sales_count += 1;
        // frozen at sale time, never recomputed from current prices
        totals.revenue += money(sale.total_amount);

        for line in &sale.items {
            if let Some((_, cost)) = priced.get(line.menu_item_id.as_str()) {
                totals.cost += *cost * Decimal::from(line.quantity);
            } else {
                debug!(sale = %sale.id, menu_item = %line.menu_item_id, "Sale line references a missing dish");
            }
            *totals.demand.entry(line.menu_item_id.clone()).or_default() += u64::from(line.quantity);
        }
    }

    let avg_ticket = money(average_ticket_price(menu));
    let cost_ratio = money(ESTIMATED_COST_RATIO);

    for reservation in filter_by_date(reservations, range)
        .into_iter()
        .filter(|r| r.status.is_actionable())
    {
        totals.reservation_pax += u64::from(reservation.pax);

        if reservation.orders.is_empty() {
            let estimated = Decimal::from(reservation.pax) * avg_ticket;
            totals.revenue += estimated;
            totals.cost += estimated * cost_ratio;
            continue;
        }

        for line in &reservation.orders {
            if let Some((price, cost)) = priced.get(line.menu_item_id.as_str()) {
                let qty = Decimal::from(line.quantity);
                totals.revenue += *price * qty;
                totals.cost += *cost * qty;
            } else {
                debug!(reservation = %reservation.id, menu_item = %line.menu_item_id, "Pre-order references a missing dish");
            }
            *totals.demand.entry(line.menu_item_id.clone()).or_default() += u64::from(line.quantity);
        }
    }

    totals
}

/// Revenue, cost, margin and per-dish figures for the period.
pub fn aggregate(
    ingredients: &[Ingredient],
    menu: &[MenuItem],
    reservations: &[Reservation],
    sales: &[Sale],
    range: &DateRange,
) -> PeriodStats {
    let totals = aggregate_totals(ingredients, menu, reservations, sales, range);
    period_stats(&totals, menu, ingredients)
}

pub fn period_stats(totals: &Totals, menu: &[MenuItem], ingredients: &[Ingredient]) -> PeriodStats {
    let revenue = totals.revenue.to_f64().unwrap_or_default();
    let cost = totals.cost.to_f64().unwrap_or_default();
    let profit = (totals.revenue - totals.cost).to_f64().unwrap_or_default();
    let margin_percent = if revenue > 0.0 {
        profit / revenue * 100.0
    } else {
        0.0
    };

    PeriodStats {
        revenue,
        cost,
        profit,
        margin_percent,
        reservation_pax: totals.reservation_pax,
        sales_count: totals.sales_count,
        per_item_stats: item_stats(menu, ingredients, &totals.demand),
    }
}
