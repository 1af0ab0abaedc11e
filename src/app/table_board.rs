use crate::domain::model::{Table, TableStatus};
use crate::utils::error::{PosError, Result};
use chrono::{DateTime, Utc};

/// Occupancy register for the floor plan.
#[derive(Debug, Default)]
pub struct TableBoard {
    tables: Vec<Table>,
}

impl TableBoard {
    pub fn from_tables(tables: Vec<Table>) -> Self {
        Self { tables }
    }

    /// A fresh board of `count` empty four-seat tables, T01 upward.
    pub fn with_count(count: usize) -> Self {
        Self {
            tables: (0..count)
                .map(|i| Table::new(format!("T{:02}", i + 1), format!("Bàn {}", i + 1), 4))
                .collect(),
        }
    }

    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    pub fn get(&self, id: &str) -> Option<&Table> {
        self.tables.iter().find(|t| t.id == id)
    }

    pub fn count(&self, status: TableStatus) -> usize {
        self.tables.iter().filter(|t| t.status == status).count()
    }

    /// Case-insensitive substring match over id and name plus an optional
    /// status filter, as the table screen does it.
    pub fn filter(&self, query: &str, status: Option<TableStatus>) -> Vec<&Table> {
        let needle = query.to_lowercase();
        self.tables
            .iter()
            .filter(|t| {
                needle.is_empty()
                    || t.id.to_lowercase().contains(&needle)
                    || t.name.to_lowercase().contains(&needle)
            })
            .filter(|t| status.map_or(true, |s| t.status == s))
            .collect()
    }

    /// Seat a party (or add another order to a seated one). The occupancy
    /// timestamp is stamped on the first edge into Occupied and kept after
    /// that.
    pub fn occupy(&mut self, id: &str, customer: &str, at: DateTime<Utc>) -> Result<()> {
        let table = self.get_mut(id)?;
        if table.status != TableStatus::Occupied {
            table.occupied_since = Some(at);
        }
        table.status = TableStatus::Occupied;
        table.customer = Some(customer.to_string());
        table.order_count += 1;
        Ok(())
    }

    /// Hold an empty table for a named party.
    pub fn reserve(&mut self, id: &str, customer: &str) -> Result<()> {
        let table = self.get_mut(id)?;
        if table.status != TableStatus::Empty {
            return Err(PosError::TableUnavailableError {
                id: id.to_string(),
                status: table.status,
            });
        }
        table.status = TableStatus::Reserved;
        table.customer = Some(customer.to_string());
        Ok(())
    }

    /// Clear the table back to empty. A no-op on an already-empty table.
    pub fn release(&mut self, id: &str) -> Result<()> {
        let table = self.get_mut(id)?;
        table.status = TableStatus::Empty;
        table.occupied_since = None;
        table.customer = None;
        table.order_count = 0;
        Ok(())
    }

    fn get_mut(&mut self, id: &str) -> Result<&mut Table> {
        self.tables
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| PosError::UnknownTableError { id: id.to_string() })
    }
}
