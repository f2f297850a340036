use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    pub id: String,
    pub name: String,
    pub unit: String,
    pub base_price: f64,
    pub current_market_price: f64,
    pub current_stock: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supplier_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supplier_contact: Option<String>,
}

impl Ingredient {
    /// Relative drift of the market price from the reference price.
    /// A zero base price yields 0 instead of dividing by zero.
    pub fn price_variance(&self) -> f64 {
        if self.base_price == 0.0 {
            return 0.0;
        }
        (self.current_market_price - self.base_price) / self.base_price
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateIngredient {
    pub name: String,
    pub unit: String,
    pub base_price: f64,
    pub current_market_price: Option<f64>,
    #[serde(default)]
    pub current_stock: f64,
    pub supplier_name: Option<String>,
    pub supplier_contact: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecipeLine {
    pub ingredient_id: String,
    pub quantity: f64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub selling_price: f64,
    #[serde(default)]
    pub recipe: Vec<RecipeLine>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMenuItem {
    pub name: String,
    pub selling_price: f64,
    #[serde(default)]
    pub recipe: Vec<RecipeLine>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    pub menu_item_id: String,
    pub quantity: u32,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReservationStatus {
    Confirmed,
    Seated,
    Completed,
    Cancelled,
}

impl ReservationStatus {
    /// Whether a booking in this state counts towards revenue, cost and demand.
    pub fn is_actionable(self) -> bool {
        !matches!(self, ReservationStatus::Cancelled)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub id: String,
    pub customer_name: String,
    pub pax: u32,
    pub date: String,
    pub time: String,
    pub status: ReservationStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default)]
    pub orders: Vec<OrderLine>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReservation {
    pub customer_name: String,
    pub pax: u32,
    pub date: String,
    pub time: String,
    pub status: Option<ReservationStatus>,
    pub notes: Option<String>,
    #[serde(default)]
    pub orders: Vec<OrderLine>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    Cash,
    Card,
    Online,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    pub id: String,
    pub date: String,
    pub time: String,
    pub items: Vec<OrderLine>,
    /// Charged total, frozen when the sale is recorded.
    pub total_amount: f64,
    pub payment_method: PaymentMethod,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSale {
    /// Defaults to today when absent.
    pub date: Option<String>,
    pub items: Vec<OrderLine>,
    pub payment_method: PaymentMethod,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Hash)]
pub struct DateRange {
    pub start: String,
    pub end: String,
}

impl DateRange {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisHistoryItem {
    pub id: String,
    pub timestamp: String,
    pub date_range: DateRange,
    pub result: AIAnalysisResponse,
}

// ===== AI gateway payloads =====

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertType {
    Stockout,
    Margin,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertSeverity {
    High,
    Medium,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Alert {
    #[serde(rename = "type")]
    pub kind: AlertType,
    pub item_name: String,
    pub severity: AlertSeverity,
    pub message: String,
    pub suggested_action: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ProcurementItem {
    pub item_name: String,
    pub quantity: f64,
    pub unit: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supplier_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuickAction {
    SupplierEmail {
        label: String,
        recipient: String,
        subject: String,
        body: String,
    },
    PriceUpdate {
        label: String,
        item_name: String,
        new_price: f64,
    },
}

impl QuickAction {
    pub fn label(&self) -> &str {
        match self {
            QuickAction::SupplierEmail { label, .. } | QuickAction::PriceUpdate { label, .. } => label,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AIAnalysisResponse {
    pub analysis_summary: String,
    pub alerts: Vec<Alert>,
    pub procurement_list: Vec<ProcurementItem>,
    pub quick_actions: Vec<QuickAction>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TopSeller {
    pub name: String,
    pub qty: u64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct MarketUpdate {
    pub ingredient: String,
    pub new_price_per_unit: f64,
    pub unit: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct InventoryLevel {
    pub ingredient: String,
    pub qty: f64,
    pub unit: String,
    pub supplier_name: Option<String>,
    pub supplier_contact: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct RecipeIngredient {
    pub name: String,
    pub qty: f64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct RecipeSummary {
    pub dish_name: String,
    pub selling_price: f64,
    pub ingredients: Vec<RecipeIngredient>,
}

/// Read-only projection of the dashboard handed to the AI gateway.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AnalysisRequest {
    pub period: String,
    pub reservation_pax: u64,
    pub sales_volume: usize,
    pub top_selling_items: Vec<TopSeller>,
    pub market_updates: Vec<MarketUpdate>,
    pub current_inventory: Vec<InventoryLevel>,
    pub recipes: Vec<RecipeSummary>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceLine {
    pub name: String,
    pub qty: f64,
    pub unit: String,
    pub unit_price: f64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ParsedInvoice {
    pub supplier_name: String,
    pub items: Vec<InvoiceLine>,
}

// ===== Derived statistics =====

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ItemStat {
    pub menu_item_id: String,
    pub name: String,
    pub selling_price: f64,
    pub unit_cost: f64,
    pub unit_margin: f64,
    pub margin_percent: f64,
    pub qty_sold: u64,
    pub period_cost: f64,
    pub period_profit: f64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PeriodStats {
    pub revenue: f64,
    pub cost: f64,
    pub profit: f64,
    pub margin_percent: f64,
    pub reservation_pax: u64,
    pub sales_count: usize,
    pub per_item_stats: Vec<ItemStat>,
}
