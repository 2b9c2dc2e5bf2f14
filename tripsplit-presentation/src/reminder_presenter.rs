use crate::currency::format_amount;
use tripsplit_application::{ReminderOutcome, SuggestedSettlement};
use tripsplit_i18n as i18n;

pub struct ReminderPresenter;

impl ReminderPresenter {
    /// Friendly reminder the creditor can forward to the debtor.
    pub fn compose(settlement: &SuggestedSettlement, currency: &str) -> String {
        i18n::reminder_message(
            &settlement.debtor,
            format_amount(settlement.amount, currency),
        )
        .to_string()
    }

    /// One status line for a reminder that was attempted.
    pub fn outcome_line(settlement: &SuggestedSettlement, outcome: &ReminderOutcome) -> String {
        match outcome {
            ReminderOutcome::Sent => i18n::request_sent(&settlement.debtor),
            ReminderOutcome::Failed { reason } => format!(
                "{}: {} ({reason})",
                i18n::FAILED_TO_SEND_REQUEST,
                i18n::pays(&settlement.debtor, &settlement.creditor)
            ),
        }
    }
}
