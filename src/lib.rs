pub mod app;
pub mod config;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use app::customer_directory::{CustomerDirectory, CustomerFilter};
pub use app::order_book::OrderBook;
pub use app::session::OrderSession;
pub use app::table_board::TableBoard;
pub use config::menu_file::{FileCatalog, MenuFile};
pub use domain::cart::Cart;
pub use domain::catalog::Catalog;
pub use domain::model::{
    CatalogEntry, Category, Customer, OrderRecord, OrderStatus, PaymentMethod, Table, TableStatus,
    Ticket, TicketItem, TicketLine,
};
pub use domain::ports::{CatalogSource, OrderSubmitter};
pub use utils::error::{PosError, Result};
