//! Default dataset used when nothing has been persisted yet.

use crate::models::{
    Ingredient, MenuItem, OrderLine, PaymentMethod, RecipeLine, Reservation, ReservationStatus,
    Sale,
};

#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub ingredients: Vec<Ingredient>,
    pub menu: Vec<MenuItem>,
    pub reservations: Vec<Reservation>,
    pub sales: Vec<Sale>,
}

impl Dataset {
    pub fn empty() -> Self {
        Self::default()
    }

    /// A small trattoria: four ingredients, three dishes, a couple of
    /// bookings and sales.
    pub fn sample() -> Self {
        let ingredient = |id: &str, name: &str, unit: &str, base: f64, market: f64, stock: f64, supplier: &str| Ingredient {
            id: id.to_string(),
            name: name.to_string(),
            unit: unit.to_string(),
            base_price: base,
            current_market_price: market,
            current_stock: stock,
            supplier_name: Some(supplier.to_string()),
            supplier_contact: Some(format!("orders@{}.example", supplier.to_lowercase().replace(' ', "-"))),
        };
        let line = |id: &str, qty: f64| RecipeLine {
            ingredient_id: id.to_string(),
            quantity: qty,
        };
        let order = |id: &str, qty: u32| OrderLine {
            menu_item_id: id.to_string(),
            quantity: qty,
        };

        Dataset {
            ingredients: vec![
                ingredient("ing-tomato", "Tomato", "kg", 2.5, 3.1, 18.0, "Green Valley"),
                ingredient("ing-mozzarella", "Mozzarella", "kg", 9.0, 9.0, 6.5, "Caseificio Rossi"),
                ingredient("ing-flour", "Flour 00", "kg", 1.2, 1.4, 40.0, "Mulino Bianco"),
                ingredient("ing-basil", "Basil", "bunch", 1.0, 0.9, 12.0, "Green Valley"),
            ],
            menu: vec![
                MenuItem {
                    id: "menu-margherita".to_string(),
                    name: "Pizza Margherita".to_string(),
                    selling_price: 12.0,
                    recipe: vec![
                        line("ing-flour", 0.25),
                        line("ing-tomato", 0.15),
                        line("ing-mozzarella", 0.12),
                        line("ing-basil", 0.1),
                    ],
                },
                MenuItem {
                    id: "menu-caprese".to_string(),
                    name: "Insalata Caprese".to_string(),
                    selling_price: 10.0,
                    recipe: vec![
                        line("ing-tomato", 0.2),
                        line("ing-mozzarella", 0.15),
                        line("ing-basil", 0.2),
                    ],
                },
                MenuItem {
                    id: "menu-bruschetta".to_string(),
                    name: "Bruschetta".to_string(),
                    selling_price: 7.5,
                    recipe: vec![line("ing-flour", 0.1), line("ing-tomato", 0.1)],
                },
            ],
            reservations: vec![
                Reservation {
                    id: "res-rossi".to_string(),
                    customer_name: "Famiglia Rossi".to_string(),
                    pax: 4,
                    date: "2024-05-10".to_string(),
                    time: "20:00".to_string(),
                    status: ReservationStatus::Confirmed,
                    notes: Some("Window table".to_string()),
                    orders: vec![order("menu-margherita", 2), order("menu-caprese", 2)],
                },
                Reservation {
                    id: "res-bianchi".to_string(),
                    customer_name: "Luca Bianchi".to_string(),
                    pax: 2,
                    date: "2024-05-11".to_string(),
                    time: "19:30".to_string(),
                    status: ReservationStatus::Confirmed,
                    notes: None,
                    orders: Vec::new(),
                },
            ],
            sales: vec![
                Sale {
                    id: "sale-1".to_string(),
                    date: "2024-05-10".to_string(),
                    time: "13:05".to_string(),
                    items: vec![order("menu-margherita", 3), order("menu-bruschetta", 1)],
                    total_amount: 43.5,
                    payment_method: PaymentMethod::Card,
                },
                Sale {
                    id: "sale-2".to_string(),
                    date: "2024-05-11".to_string(),
                    time: "12:40".to_string(),
                    items: vec![order("menu-caprese", 1)],
                    total_amount: 10.0,
                    payment_method: PaymentMethod::Cash,
                },
            ],
        }
    }
}
