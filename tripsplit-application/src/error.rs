use thiserror::Error;
use tripsplit_domain::ExpenseError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettlementError {
    #[error("invalid expense '{id}': {source}")]
    InvalidExpense {
        id: String,
        #[source]
        source: ExpenseError,
    },
}

/// Failure to deliver a payment request. Always advisory.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotificationError {
    #[error("could not reach notification service: {0}")]
    Transport(String),
    #[error("notification service rejected the request: {0}")]
    Rejected(String),
    #[error("notification service did not confirm delivery")]
    Unconfirmed,
}
