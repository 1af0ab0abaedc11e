use crate::domain::model::Customer;
use crate::utils::error::{PosError, Result};
use chrono::{DateTime, Utc};

/// Directory filter tabs. A regular is anyone with five or more visits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CustomerFilter {
    #[default]
    All,
    Favorite,
    Regular,
    New,
}

const REGULAR_VISITS: u32 = 5;

/// Customer records keyed CUS-1000 upward.
#[derive(Debug, Default)]
pub struct CustomerDirectory {
    customers: Vec<Customer>,
    next_seq: u32,
}

impl CustomerDirectory {
    pub fn new() -> Self {
        Self {
            customers: Vec::new(),
            next_seq: 1000,
        }
    }

    pub fn from_customers(customers: Vec<Customer>) -> Self {
        let next_seq = 1000 + customers.len() as u32;
        Self {
            customers,
            next_seq,
        }
    }

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn get(&self, id: &str) -> Option<&Customer> {
        self.customers.iter().find(|c| c.id == id)
    }

    pub fn len(&self) -> usize {
        self.customers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }

    /// Record a visit under the given name. Names match case-insensitively;
    /// an unknown name creates a fresh record. Returns the customer id.
    pub fn note_visit(&mut self, name: &str, spent: u64, at: DateTime<Utc>) -> String {
        let needle = name.to_lowercase();
        if let Some(customer) = self
            .customers
            .iter_mut()
            .find(|c| c.name.to_lowercase() == needle)
        {
            customer.visits += 1;
            customer.total_spent += spent;
            customer.last_visit = Some(at);
            return customer.id.clone();
        }

        let id = format!("CUS-{}", self.next_seq);
        self.next_seq += 1;
        tracing::debug!("New customer record {} for '{}'", id, name);
        self.customers.push(Customer {
            id: id.clone(),
            name: name.to_string(),
            phone: String::new(),
            email: String::new(),
            visits: 1,
            total_spent: spent,
            last_visit: Some(at),
            favorite: false,
        });
        id
    }

    pub fn toggle_favorite(&mut self, id: &str) -> Result<()> {
        let customer = self
            .customers
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| PosError::UnknownCustomerError { id: id.to_string() })?;
        customer.favorite = !customer.favorite;
        Ok(())
    }

    /// Substring search over name and email (case-insensitive) and phone
    /// (verbatim), combined with the filter tab.
    pub fn search(&self, query: &str, filter: CustomerFilter) -> Vec<&Customer> {
        let needle = query.to_lowercase();
        self.customers
            .iter()
            .filter(|c| {
                needle.is_empty()
                    || c.name.to_lowercase().contains(&needle)
                    || c.email.to_lowercase().contains(&needle)
                    || c.phone.contains(query)
            })
            .filter(|c| match filter {
                CustomerFilter::All => true,
                CustomerFilter::Favorite => c.favorite,
                CustomerFilter::Regular => c.visits >= REGULAR_VISITS,
                CustomerFilter::New => c.visits < REGULAR_VISITS,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fixtures::{sample_customers, service_day};

    #[test]
    fn test_note_visit_updates_existing_record() {
        let mut directory = CustomerDirectory::from_customers(sample_customers(3));
        let before = directory.get("CUS-1001").unwrap().clone();

        let id = directory.note_visit("khách hàng 2", 120_000, service_day(19, 0));

        assert_eq!(id, "CUS-1001");
        let after = directory.get("CUS-1001").unwrap();
        assert_eq!(after.visits, before.visits + 1);
        assert_eq!(after.total_spent, before.total_spent + 120_000);
        assert_eq!(after.last_visit, Some(service_day(19, 0)));
        assert_eq!(directory.len(), 3);
    }

    #[test]
    fn test_note_visit_creates_unknown_customer() {
        let mut directory = CustomerDirectory::from_customers(sample_customers(2));

        let id = directory.note_visit("Lan", 75_000, service_day(12, 0));

        assert_eq!(id, "CUS-1002");
        let lan = directory.get(&id).unwrap();
        assert_eq!(lan.visits, 1);
        assert_eq!(lan.total_spent, 75_000);
        assert!(!lan.favorite);
    }

    #[test]
    fn test_toggle_favorite() {
        let mut directory = CustomerDirectory::from_customers(sample_customers(2));
        assert!(!directory.get("CUS-1001").unwrap().favorite);

        directory.toggle_favorite("CUS-1001").unwrap();
        assert!(directory.get("CUS-1001").unwrap().favorite);

        let err = directory.toggle_favorite("CUS-9999").unwrap_err();
        assert!(matches!(err, PosError::UnknownCustomerError { .. }));
    }

    #[test]
    fn test_search_by_phone_and_email() {
        let customers = sample_customers(5);
        let phone = customers[2].phone.clone();
        let mut directory = CustomerDirectory::from_customers(customers);

        assert_eq!(directory.search(&phone, CustomerFilter::All).len(), 1);
        assert_eq!(
            directory.search("customer4@", CustomerFilter::All).len(),
            1
        );

        directory.note_visit("Lan", 0, service_day(9, 0));
        assert_eq!(directory.search("lan", CustomerFilter::All).len(), 1);
    }

    #[test]
    fn test_filter_tabs_partition_by_visits() {
        let directory = CustomerDirectory::from_customers(sample_customers(20));

        let regulars = directory.search("", CustomerFilter::Regular);
        let new = directory.search("", CustomerFilter::New);
        assert_eq!(regulars.len() + new.len(), 20);
        assert!(regulars.iter().all(|c| c.visits >= 5));
        assert!(new.iter().all(|c| c.visits < 5));

        let favorites = directory.search("", CustomerFilter::Favorite);
        assert_eq!(favorites.len(), 4);
    }
}
