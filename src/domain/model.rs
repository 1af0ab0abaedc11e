use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Menu category a catalog entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Main,
    Appetizer,
    Drinks,
    Dessert,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Main,
        Category::Appetizer,
        Category::Drinks,
        Category::Dessert,
    ];
}

/// One purchasable menu entry. Immutable; owned by the catalog collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: String,
    pub name: String,
    pub unit_price: u64,
    pub category: Category,
}

/// One row in a cart: a catalog reference plus a quantity.
/// The cart guarantees quantity >= 1 and at most one line per catalog id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketLine {
    pub catalog_id: String,
    pub quantity: u32,
}

/// A cart line joined with its catalog entry, ready for display or submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TicketItem {
    pub name: String,
    pub quantity: u32,
    pub unit_price: u64,
}

/// Read-only, submission-ready projection of a cart plus table and customer
/// metadata. Recomputed on every composition, never cached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    pub table_id: String,
    pub customer_name: String,
    pub lines: Vec<TicketItem>,
    pub total: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Processing,
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Cash,
    Card,
    EWallet,
}

/// A placed order as the order book keeps it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    pub id: String,
    pub table_id: String,
    pub customer: String,
    pub placed_at: DateTime<Utc>,
    pub lines: Vec<TicketItem>,
    pub total: u64,
    pub status: OrderStatus,
    pub payment: Option<PaymentMethod>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl OrderRecord {
    /// True while the order still needs kitchen or cashier attention.
    pub fn is_open(&self) -> bool {
        matches!(self.status, OrderStatus::Pending | OrderStatus::Processing)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableStatus {
    Empty,
    Occupied,
    Reserved,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub id: String,
    pub name: String,
    pub capacity: u32,
    pub status: TableStatus,
    pub occupied_since: Option<DateTime<Utc>>,
    pub customer: Option<String>,
    pub order_count: u32,
}

impl Table {
    pub fn new(id: impl Into<String>, name: impl Into<String>, capacity: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            capacity,
            status: TableStatus::Empty,
            occupied_since: None,
            customer: None,
            order_count: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub visits: u32,
    pub total_spent: u64,
    pub last_visit: Option<DateTime<Utc>>,
    pub favorite: bool,
}
