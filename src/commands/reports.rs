use serde::Serialize;
use tracing::debug;

use crate::analytics::{aggregate, aggregate_totals, period_stats, round_money, top_n};
use crate::models::{DateRange, ItemStat, PeriodStats};
use crate::store::Store;

/// Everything the dashboard shows for one period.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub range: DateRange,
    pub stats: PeriodStats,
    /// Best sellers for the chart, highest quantity first.
    pub top_items: Vec<ItemStat>,
}

pub fn derive_stats(store: &Store, range: &DateRange) -> PeriodStats {
    aggregate(
        store.ingredients(),
        store.menu(),
        store.reservations(),
        store.sales(),
        range,
    )
}

/// Run the filter, aggregate and rank pipeline over the current store contents.
pub fn derive_dashboard(store: &Store, range: &DateRange, top: usize) -> DashboardView {
    let totals = aggregate_totals(
        store.ingredients(),
        store.menu(),
        store.reservations(),
        store.sales(),
        range,
    );

    DashboardView {
        range: range.clone(),
        stats: period_stats(&totals, store.menu(), store.ingredients()),
        top_items: top_n(store.menu(), store.ingredients(), &totals.demand, top),
    }
}

impl DashboardView {
    /// Copy with money and percentages rounded to 2 decimals, for display.
    pub fn rounded(&self) -> DashboardView {
        let round_item = |s: &ItemStat| ItemStat {
            selling_price: round_money(s.selling_price),
            unit_cost: round_money(s.unit_cost),
            unit_margin: round_money(s.unit_margin),
            margin_percent: round_money(s.margin_percent),
            period_cost: round_money(s.period_cost),
            period_profit: round_money(s.period_profit),
            ..s.clone()
        };

        DashboardView {
            range: self.range.clone(),
            stats: PeriodStats {
                revenue: round_money(self.stats.revenue),
                cost: round_money(self.stats.cost),
                profit: round_money(self.stats.profit),
                margin_percent: round_money(self.stats.margin_percent),
                per_item_stats: self.stats.per_item_stats.iter().map(round_item).collect(),
                ..self.stats.clone()
            },
            top_items: self.top_items.iter().map(round_item).collect(),
        }
    }
}

/// Memoizes [`derive_dashboard`] on (store revision, period, N). Any store
/// mutation bumps the revision, so a hit is never stale.
#[derive(Debug, Default)]
pub struct StatsCache {
    entry: Option<(CacheKey, DashboardView)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct CacheKey {
    revision: u64,
    range: DateRange,
    top: usize,
}

impl StatsCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_derive(&mut self, store: &Store, range: &DateRange, top: usize) -> &DashboardView {
        let key = CacheKey {
            revision: store.revision(),
            range: range.clone(),
            top,
        };

        let entry = match self.entry.take() {
            Some((cached, view)) if cached == key => {
                debug!(revision = key.revision, range = %range, "Dashboard cache hit");
                (cached, view)
            }
            _ => {
                debug!(revision = key.revision, range = %range, "Deriving dashboard");
                let view = derive_dashboard(store, range, top);
                (key, view)
            }
        };

        &self.entry.insert(entry).1
    }
}
