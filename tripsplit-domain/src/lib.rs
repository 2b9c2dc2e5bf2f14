#![warn(clippy::uninlined_format_args)]

pub mod error;
pub mod model;
pub mod services;

pub use error::ExpenseError;
pub use model::{
    Balance, BalanceStatus, Credit, Debt, EPSILON, Expense, Money, ParticipantId, Roster,
    SettlementEdge,
};
pub use services::{BalanceAggregator, Settlement, SettlementPlanner, SettlementStatistics};
