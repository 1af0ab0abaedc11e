use crate::domain::catalog::Catalog;
use crate::domain::model::{CatalogEntry, Ticket, TicketItem, TicketLine};

/// Mutable working set of ticket lines for one order session.
///
/// Lines keep insertion order. Two invariants hold after any sequence of
/// operations: no two lines share a catalog id, and every line present has
/// quantity >= 1. Every operation is total; missing ids are ordinary no-ops,
/// not errors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    lines: Vec<TicketLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[TicketLine] {
        &self.lines
    }

    /// Add one unit of the entry. A repeated add collapses into a quantity
    /// increment on the existing line; a first add appends at the end.
    pub fn add_item(&mut self, entry: &CatalogEntry) {
        match self.lines.iter_mut().find(|l| l.catalog_id == entry.id) {
            Some(line) => line.quantity += 1,
            None => self.lines.push(TicketLine {
                catalog_id: entry.id.clone(),
                quantity: 1,
            }),
        }
    }

    /// Remove one unit. Deleting the line when its quantity hits zero is what
    /// keeps the quantity >= 1 invariant; an absent id is a no-op.
    pub fn remove_one_unit(&mut self, catalog_id: &str) {
        if let Some(pos) = self.lines.iter().position(|l| l.catalog_id == catalog_id) {
            if self.lines[pos].quantity > 1 {
                self.lines[pos].quantity -= 1;
            } else {
                self.lines.remove(pos);
            }
        }
    }

    /// Sum of quantity x unit price over all lines, resolved through the
    /// catalog. Pure; 0 for an empty cart.
    pub fn total(&self, catalog: &Catalog) -> u64 {
        self.lines
            .iter()
            .filter_map(|l| {
                catalog
                    .entry(&l.catalog_id)
                    .map(|e| e.unit_price * u64::from(l.quantity))
            })
            .sum()
    }

    /// Distinct lines, not total units. Gates order confirmation.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.line_count() == 0
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Derive the read-only ticket view: lines joined with their catalog
    /// entries plus table and customer metadata. Recomputed on every call.
    pub fn compose_ticket(
        &self,
        catalog: &Catalog,
        table_id: &str,
        customer_name: &str,
    ) -> Ticket {
        let lines: Vec<TicketItem> = self
            .lines
            .iter()
            .filter_map(|l| {
                catalog.entry(&l.catalog_id).map(|e| TicketItem {
                    name: e.name.clone(),
                    quantity: l.quantity,
                    unit_price: e.unit_price,
                })
            })
            .collect();
        let total = lines.iter().map(|i| u64::from(i.quantity) * i.unit_price).sum();

        Ticket {
            table_id: table_id.to_string(),
            customer_name: customer_name.to_string(),
            lines,
            total,
        }
    }
}
