//! Deterministic sample data.
//!
//! The screens this crate was distilled from generated their sample records
//! with inline randomness at render time. Tests and the demo binary need the
//! opposite: builders that produce the same records on every run, injected
//! through the same ports real collaborators would use.

use crate::domain::cart::Cart;
use crate::domain::catalog::Catalog;
use crate::domain::model::{CatalogEntry, Category, Customer, Table, TableStatus, Ticket};
use crate::domain::ports::CatalogSource;
use crate::utils::error::Result;
use chrono::{DateTime, TimeZone, Utc};

/// All fixture timestamps fall on this service day.
pub fn service_day(hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2023, 8, 15, hour, minute, 0)
        .single()
        .expect("fixture timestamp is valid")
}

/// The eight-dish menu of the source application, prices in đồng.
pub fn sample_menu() -> Catalog {
    let entry = |id: &str, name: &str, unit_price: u64, category: Category| CatalogEntry {
        id: id.to_string(),
        name: name.to_string(),
        unit_price,
        category,
    };

    Catalog::new(vec![
        entry("1", "Phở Bò", 75_000, Category::Main),
        entry("2", "Bún Chả", 65_000, Category::Main),
        entry("3", "Cơm Rang", 55_000, Category::Main),
        entry("4", "Nước Chanh", 25_000, Category::Drinks),
        entry("5", "Trà Đá", 10_000, Category::Drinks),
        entry("6", "Chè Thái", 35_000, Category::Dessert),
        entry("7", "Bánh Flan", 30_000, Category::Dessert),
        entry("8", "Gỏi Cuốn", 45_000, Category::Appetizer),
    ])
}

/// Catalog source backed by the built-in menu.
pub struct SampleMenu;

impl CatalogSource for SampleMenu {
    fn load(&self) -> Result<Catalog> {
        Ok(sample_menu())
    }
}

/// Floor plan with a deterministic spread of empty, occupied and reserved
/// tables.
pub fn sample_tables(count: usize) -> Vec<Table> {
    (0..count)
        .map(|i| {
            let mut table = Table::new(
                format!("T{:02}", i + 1),
                format!("Bàn {}", i + 1),
                2 + (i as u32 % 6),
            );
            match i % 3 {
                1 => {
                    table.status = TableStatus::Occupied;
                    table.occupied_since = Some(service_day(11, (i as u32 * 7) % 60));
                    table.customer = Some(format!("Khách {}", i + 1));
                    table.order_count = 1 + (i as u32 % 4);
                }
                2 => {
                    table.status = TableStatus::Reserved;
                    table.customer = Some(format!("Khách {}", i + 1));
                }
                _ => {}
            }
            table
        })
        .collect()
}

/// Directory seed. Every fifth customer is a favorite; visit counts cycle so
/// both regulars (>= 5 visits) and new faces appear.
pub fn sample_customers(count: usize) -> Vec<Customer> {
    (0..count)
        .map(|i| Customer {
            id: format!("CUS-{}", 1000 + i),
            name: format!("Khách hàng {}", i + 1),
            phone: format!("09{:08}", 12_345_678 + i * 11_111),
            email: format!("customer{}@example.com", i + 1),
            visits: (i as u32 % 20) + 1,
            total_spent: ((i as u64 % 50) + 1) * 100_000,
            last_visit: Some(service_day(9, 0)),
            favorite: i % 5 == 0,
        })
        .collect()
}

/// Tickets shaped like the source's sample order history: two or three lines
/// per order, composed through a real cart so the cart invariants hold.
pub fn sample_tickets(catalog: &Catalog, count: usize) -> Vec<Ticket> {
    (0..count)
        .filter_map(|i| {
            let mut cart = Cart::new();
            let pho = catalog.entry("1")?;
            let chanh = catalog.entry("4")?;
            let dessert = catalog.entry(if i % 3 == 0 { "7" } else { "6" })?;

            for _ in 0..(i % 3) + 1 {
                cart.add_item(pho);
            }
            for _ in 0..(i % 3) + 1 {
                cart.add_item(chanh);
            }
            for _ in 0..(i % 2) + 1 {
                cart.add_item(dessert);
            }

            Some(cart.compose_ticket(
                catalog,
                &format!("T{:02}", (i % 10) + 1),
                &format!("Khách {}", i + 1),
            ))
        })
        .collect()
}
