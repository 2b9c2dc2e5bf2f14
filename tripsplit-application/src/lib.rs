#![warn(clippy::uninlined_format_args)]

pub mod error;
pub mod model;
pub mod participant_resolver;
pub mod ports;
pub mod reminder;
pub mod settlement_facade;

pub use error::{NotificationError, SettlementError};
pub use model::{
    ExpenseRecord, OwedFrom, OwedTo, PersonBalance, SettlementSummary, SuggestedSettlement,
    TripContext, TripSnapshot,
};
pub use participant_resolver::{ParticipantResolver, ResolvedExpenses};
pub use ports::{NotificationPort, NotificationResponse, PaymentRequest};
pub use reminder::{PaymentReminder, ReminderOutcome};
pub use settlement_facade::SettlementFacade;
