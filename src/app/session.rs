use crate::domain::cart::Cart;
use crate::domain::catalog::Catalog;
use crate::domain::model::{CatalogEntry, Category, Ticket};
use crate::domain::ports::{CatalogSource, OrderSubmitter};
use crate::utils::error::{PosError, Result};
use chrono::{DateTime, Utc};

/// One order-entry session: a cart plus the screen-local selections the
/// source kept in component state (selected table, customer name).
///
/// The session owns the catalog for its lifetime; the cart is created empty
/// on start and discarded with the session.
pub struct OrderSession {
    catalog: Catalog,
    cart: Cart,
    table: Option<String>,
    customer_name: String,
}

impl OrderSession {
    pub fn start(source: &impl CatalogSource) -> Result<Self> {
        let catalog = source.load()?;
        tracing::debug!("Order session started with {} menu entries", catalog.len());
        Ok(Self {
            catalog,
            cart: Cart::new(),
            table: None,
            customer_name: String::new(),
        })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn browse(&self, category: Option<Category>, query: &str) -> Vec<&CatalogEntry> {
        self.catalog.browse(category, query)
    }

    pub fn select_table(&mut self, id: impl Into<String>) {
        self.table = Some(id.into());
    }

    pub fn selected_table(&self) -> Option<&str> {
        self.table.as_deref()
    }

    pub fn set_customer_name(&mut self, name: impl Into<String>) {
        self.customer_name = name.into();
    }

    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    /// Tap on a menu entry. An id the catalog does not know is logged and
    /// ignored, matching the cart's total-operation design.
    pub fn add_item(&mut self, catalog_id: &str) {
        match self.catalog.entry(catalog_id) {
            Some(entry) => self.cart.add_item(entry),
            None => tracing::warn!("Ignoring add for unknown menu id '{}'", catalog_id),
        }
    }

    pub fn remove_one_unit(&mut self, catalog_id: &str) {
        self.cart.remove_one_unit(catalog_id);
    }

    pub fn total(&self) -> u64 {
        self.cart.total(&self.catalog)
    }

    pub fn line_count(&self) -> usize {
        self.cart.line_count()
    }

    /// The confirmation gate: a table is selected and the cart is non-empty.
    /// The source renders this as a disabled button.
    pub fn can_confirm(&self) -> bool {
        self.table.is_some() && !self.cart.is_empty()
    }

    /// Compose the ticket and hand it to the submission port, synchronously.
    /// On success the cart and customer name reset for the next order; the
    /// table stays selected.
    pub fn confirm<S: OrderSubmitter>(
        &mut self,
        submitter: &mut S,
        at: DateTime<Utc>,
    ) -> Result<String> {
        let table = self.table.clone().ok_or_else(|| PosError::ConfirmationError {
            reason: "no table selected".to_string(),
        })?;
        if self.cart.is_empty() {
            return Err(PosError::ConfirmationError {
                reason: "cart is empty".to_string(),
            });
        }

        let ticket = self
            .cart
            .compose_ticket(&self.catalog, &table, &self.customer_name);
        let order_id = submitter.submit(ticket, at)?;

        tracing::info!("Order {} confirmed for table {}", order_id, table);
        self.cart.clear();
        self.customer_name.clear();
        Ok(order_id)
    }
}
