use crate::model::Money;
use thiserror::Error;

/// Reasons an expense list is rejected. No balances are returned on error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExpenseError {
    #[error("expense #{index} is not split between anyone")]
    EmptySplit { index: usize },
    #[error("expense #{index} has non-positive amount {amount}")]
    NonPositiveAmount { index: usize, amount: Money },
    #[error("expense #{index} references a participant outside the roster")]
    UnregisteredParticipant { index: usize },
    #[error("expense #{index} pushes a running total past the representable range")]
    AmountOverflow { index: usize },
}

impl ExpenseError {
    pub fn index(&self) -> usize {
        match self {
            Self::EmptySplit { index }
            | Self::NonPositiveAmount { index, .. }
            | Self::UnregisteredParticipant { index }
            | Self::AmountOverflow { index } => *index,
        }
    }
}
