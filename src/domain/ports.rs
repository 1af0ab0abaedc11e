use crate::domain::catalog::Catalog;
use crate::domain::model::Ticket;
use crate::utils::error::Result;
use chrono::{DateTime, Utc};

/// Catalog collaborator. The interface is "read the full list", nothing more.
pub trait CatalogSource: Send + Sync {
    fn load(&self) -> Result<Catalog>;
}

/// Order-placement boundary. Consumes a finalized ticket and answers with the
/// assigned order id. The caller supplies the placement timestamp so the core
/// stays free of ambient clocks.
pub trait OrderSubmitter: Send {
    fn submit(&mut self, ticket: Ticket, placed_at: DateTime<Utc>) -> Result<String>;
}
