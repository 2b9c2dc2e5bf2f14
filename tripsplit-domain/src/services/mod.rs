pub mod balance_aggregator;
pub mod settlement_planner;
pub mod settlement_statistics;

pub use balance_aggregator::BalanceAggregator;
pub use settlement_planner::{Settlement, SettlementPlanner};
pub use settlement_statistics::SettlementStatistics;
