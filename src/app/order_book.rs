use crate::domain::model::{OrderRecord, OrderStatus, PaymentMethod, Ticket};
use crate::domain::ports::OrderSubmitter;
use crate::utils::error::{PosError, Result};
use chrono::{DateTime, Utc};

/// In-memory registry of placed orders, in placement order.
///
/// Ids run ORD-1000, ORD-1001, ... for the lifetime of the book. Status moves
/// Pending -> Processing -> Completed/Cancelled; Pending may also complete or
/// cancel directly.
#[derive(Debug, Default)]
pub struct OrderBook {
    orders: Vec<OrderRecord>,
    next_seq: u32,
}

impl OrderBook {
    pub fn new() -> Self {
        Self {
            orders: Vec::new(),
            next_seq: 1000,
        }
    }

    pub fn place(&mut self, ticket: Ticket, placed_at: DateTime<Utc>) -> String {
        let id = format!("ORD-{}", self.next_seq);
        self.next_seq += 1;

        tracing::debug!("Placing order {} for table {}", id, ticket.table_id);
        self.orders.push(OrderRecord {
            id: id.clone(),
            table_id: ticket.table_id,
            customer: ticket.customer_name,
            placed_at,
            lines: ticket.lines,
            total: ticket.total,
            status: OrderStatus::Pending,
            payment: None,
            completed_at: None,
        });
        id
    }

    pub fn get(&self, id: &str) -> Option<&OrderRecord> {
        self.orders.iter().find(|o| o.id == id)
    }

    pub fn all(&self) -> &[OrderRecord] {
        &self.orders
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn by_status(&self, status: OrderStatus) -> Vec<&OrderRecord> {
        self.orders.iter().filter(|o| o.status == status).collect()
    }

    /// Orders still needing attention (pending or processing).
    pub fn open(&self) -> Vec<&OrderRecord> {
        self.orders.iter().filter(|o| o.is_open()).collect()
    }

    /// Newest first, for the dashboard.
    pub fn recent(&self, n: usize) -> Vec<&OrderRecord> {
        self.orders.iter().rev().take(n).collect()
    }

    /// Case-insensitive substring match over id, customer and table, combined
    /// with an optional status filter, as the order-history screen does it.
    pub fn search(&self, query: &str, status: Option<OrderStatus>) -> Vec<&OrderRecord> {
        let needle = query.to_lowercase();
        self.orders
            .iter()
            .filter(|o| {
                needle.is_empty()
                    || o.id.to_lowercase().contains(&needle)
                    || o.customer.to_lowercase().contains(&needle)
                    || o.table_id.to_lowercase().contains(&needle)
            })
            .filter(|o| status.map_or(true, |s| o.status == s))
            .collect()
    }

    pub fn start_processing(&mut self, id: &str) -> Result<()> {
        let order = self.get_mut(id)?;
        if order.status != OrderStatus::Pending {
            return Err(PosError::InvalidTransitionError {
                id: id.to_string(),
                from: order.status,
                to: OrderStatus::Processing,
            });
        }
        order.status = OrderStatus::Processing;
        Ok(())
    }

    pub fn complete(
        &mut self,
        id: &str,
        payment: PaymentMethod,
        at: DateTime<Utc>,
    ) -> Result<()> {
        let order = self.get_mut(id)?;
        if !order.is_open() {
            return Err(PosError::InvalidTransitionError {
                id: id.to_string(),
                from: order.status,
                to: OrderStatus::Completed,
            });
        }
        order.status = OrderStatus::Completed;
        order.payment = Some(payment);
        order.completed_at = Some(at);
        tracing::info!("Order {} completed ({:?})", id, payment);
        Ok(())
    }

    pub fn cancel(&mut self, id: &str) -> Result<()> {
        let order = self.get_mut(id)?;
        if !order.is_open() {
            return Err(PosError::InvalidTransitionError {
                id: id.to_string(),
                from: order.status,
                to: OrderStatus::Cancelled,
            });
        }
        order.status = OrderStatus::Cancelled;
        Ok(())
    }

    fn get_mut(&mut self, id: &str) -> Result<&mut OrderRecord> {
        self.orders
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or_else(|| PosError::UnknownOrderError { id: id.to_string() })
    }
}

impl OrderSubmitter for OrderBook {
    fn submit(&mut self, ticket: Ticket, placed_at: DateTime<Utc>) -> Result<String> {
        Ok(self.place(ticket, placed_at))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fixtures::{sample_menu, sample_tickets, service_day};

    fn seeded_book(count: usize) -> OrderBook {
        let menu = sample_menu();
        let mut book = OrderBook::new();
        for (i, ticket) in sample_tickets(&menu, count).into_iter().enumerate() {
            book.place(ticket, service_day(10, i as u32));
        }
        book
    }

    #[test]
    fn test_ids_are_sequential_from_1000() {
        let book = seeded_book(3);
        let ids: Vec<&str> = book.all().iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["ORD-1000", "ORD-1001", "ORD-1002"]);
    }

    #[test]
    fn test_placed_orders_start_pending() {
        let book = seeded_book(4);
        assert!(book
            .all()
            .iter()
            .all(|o| o.status == OrderStatus::Pending && o.payment.is_none()));
        assert_eq!(book.open().len(), 4);
    }

    #[test]
    fn test_status_lifecycle() {
        let mut book = seeded_book(2);

        book.start_processing("ORD-1000").unwrap();
        assert_eq!(book.get("ORD-1000").unwrap().status, OrderStatus::Processing);

        book.complete("ORD-1000", PaymentMethod::Cash, service_day(12, 0))
            .unwrap();
        let done = book.get("ORD-1000").unwrap();
        assert_eq!(done.status, OrderStatus::Completed);
        assert_eq!(done.payment, Some(PaymentMethod::Cash));
        assert_eq!(done.completed_at, Some(service_day(12, 0)));

        // Pending may cancel directly
        book.cancel("ORD-1001").unwrap();
        assert_eq!(book.get("ORD-1001").unwrap().status, OrderStatus::Cancelled);
    }

    #[test]
    fn test_closed_orders_reject_further_transitions() {
        let mut book = seeded_book(1);
        book.complete("ORD-1000", PaymentMethod::Card, service_day(12, 0))
            .unwrap();

        let err = book.cancel("ORD-1000").unwrap_err();
        assert!(matches!(err, PosError::InvalidTransitionError { .. }));

        let err = book.start_processing("ORD-1000").unwrap_err();
        assert!(matches!(err, PosError::InvalidTransitionError { .. }));
    }

    #[test]
    fn test_unknown_order_id() {
        let mut book = seeded_book(1);
        let err = book.cancel("ORD-9999").unwrap_err();
        assert!(matches!(err, PosError::UnknownOrderError { .. }));
    }

    #[test]
    fn test_search_matches_id_customer_and_table() {
        let book = seeded_book(12);

        assert_eq!(book.search("ord-1003", None).len(), 1);
        assert_eq!(book.search("Khách 4", None).len(), 1);
        // Tables cycle T01..T10, so twelve orders land on T03 once
        assert_eq!(book.search("t03", None).len(), 1);
        assert!(book.search("nothing-here", None).is_empty());
    }

    #[test]
    fn test_search_with_status_filter() {
        let mut book = seeded_book(4);
        book.complete("ORD-1001", PaymentMethod::EWallet, service_day(13, 0))
            .unwrap();

        let completed = book.search("", Some(OrderStatus::Completed));
        assert_eq!(completed.len(), 1);
        assert_eq!(completed[0].id, "ORD-1001");
        assert_eq!(book.search("", Some(OrderStatus::Pending)).len(), 3);
    }

    #[test]
    fn test_recent_is_newest_first() {
        let book = seeded_book(5);
        let recent: Vec<&str> = book.recent(2).iter().map(|o| o.id.as_str()).collect();
        assert_eq!(recent, vec!["ORD-1004", "ORD-1003"]);
    }
}
