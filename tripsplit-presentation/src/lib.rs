#![warn(clippy::uninlined_format_args)]

pub mod currency;
pub mod reminder_presenter;
pub mod settlement_presenter;
pub mod text_table;

pub use currency::{currency_symbol, format_amount};
pub use reminder_presenter::ReminderPresenter;
pub use settlement_presenter::{SettlementPresenter, SettlementView};
