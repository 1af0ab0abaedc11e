use crate::domain::model::{OrderStatus, TableStatus};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PosError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Menu file error: {message}")]
    MenuParseError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Order cannot be confirmed: {reason}")]
    ConfirmationError { reason: String },

    #[error("Unknown order: {id}")]
    UnknownOrderError { id: String },

    #[error("Order {id} cannot move from {from:?} to {to:?}")]
    InvalidTransitionError {
        id: String,
        from: OrderStatus,
        to: OrderStatus,
    },

    #[error("Unknown table: {id}")]
    UnknownTableError { id: String },

    #[error("Table {id} is not available ({status:?})")]
    TableUnavailableError { id: String, status: TableStatus },

    #[error("Unknown customer: {id}")]
    UnknownCustomerError { id: String },

    #[error("Order submission failed: {message}")]
    SubmissionError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Data,
    Config,
    Menu,
    Session,
    Registry,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl PosError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::IoError(_) => ErrorCategory::Io,
            Self::SerializationError(_) => ErrorCategory::Data,
            Self::MenuParseError { .. } => ErrorCategory::Menu,
            Self::InvalidConfigValueError { .. } | Self::MissingConfigError { .. } => {
                ErrorCategory::Config
            }
            Self::ConfirmationError { .. } | Self::SubmissionError { .. } => ErrorCategory::Session,
            Self::UnknownOrderError { .. }
            | Self::InvalidTransitionError { .. }
            | Self::UnknownTableError { .. }
            | Self::TableUnavailableError { .. }
            | Self::UnknownCustomerError { .. } => ErrorCategory::Registry,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::IoError(_) => ErrorSeverity::Critical,
            Self::SerializationError(_)
            | Self::MenuParseError { .. }
            | Self::SubmissionError { .. } => ErrorSeverity::High,
            Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. }
            | Self::UnknownOrderError { .. }
            | Self::InvalidTransitionError { .. }
            | Self::UnknownTableError { .. }
            | Self::UnknownCustomerError { .. } => ErrorSeverity::Medium,
            Self::ConfirmationError { .. } | Self::TableUnavailableError { .. } => {
                ErrorSeverity::Low
            }
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            Self::IoError(_) => "Check that the path exists and is readable".to_string(),
            Self::SerializationError(_) => "The payload is not valid JSON".to_string(),
            Self::MenuParseError { .. } => {
                "Check the menu file against the expected TOML layout".to_string()
            }
            Self::InvalidConfigValueError { field, .. } => {
                format!("Adjust the value of '{}' and retry", field)
            }
            Self::MissingConfigError { field } => format!("Provide a value for '{}'", field),
            Self::ConfirmationError { .. } => {
                "Select a table and add at least one item before confirming".to_string()
            }
            Self::UnknownOrderError { .. } => "Use an order id returned by place()".to_string(),
            Self::InvalidTransitionError { from, .. } => {
                format!("Order is already {:?}; only open orders can move on", from)
            }
            Self::UnknownTableError { .. } => "Use a table id present on the board".to_string(),
            Self::TableUnavailableError { .. } => {
                "Pick an empty table or release this one first".to_string()
            }
            Self::UnknownCustomerError { .. } => {
                "Use a customer id present in the directory".to_string()
            }
            Self::SubmissionError { .. } => {
                "Retry the confirmation once the sink is back".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::IoError(e) => format!("Could not read or write a file: {}", e),
            Self::SerializationError(_) => "Data could not be encoded".to_string(),
            Self::MenuParseError { message } => format!("The menu file is invalid: {}", message),
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration problem in '{}': {}", field, reason)
            }
            Self::MissingConfigError { field } => {
                format!("Configuration is missing '{}'", field)
            }
            Self::ConfirmationError { reason } => {
                format!("The order is not ready to confirm: {}", reason)
            }
            Self::UnknownOrderError { id } => format!("No order with id {}", id),
            Self::InvalidTransitionError { id, .. } => {
                format!("Order {} is not in a state that allows this", id)
            }
            Self::UnknownTableError { id } => format!("No table with id {}", id),
            Self::TableUnavailableError { id, .. } => format!("Table {} is taken", id),
            Self::UnknownCustomerError { id } => format!("No customer with id {}", id),
            Self::SubmissionError { message } => format!("Order could not be placed: {}", message),
        }
    }
}

pub type Result<T> = std::result::Result<T, PosError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirmation_error_is_low_severity() {
        let err = PosError::ConfirmationError {
            reason: "cart is empty".to_string(),
        };
        assert_eq!(err.severity(), ErrorSeverity::Low);
        assert_eq!(err.category(), ErrorCategory::Session);
    }

    #[test]
    fn test_registry_errors_share_category() {
        let err = PosError::UnknownOrderError {
            id: "ORD-9999".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Registry);
        assert!(err.user_friendly_message().contains("ORD-9999"));
    }
}
