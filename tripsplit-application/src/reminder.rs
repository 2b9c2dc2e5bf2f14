use crate::{
    model::{SettlementSummary, SuggestedSettlement, TripContext},
    ports::{NotificationPort, PaymentRequest},
};

/// Result of one reminder. Never affects the computed settlement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReminderOutcome {
    Sent,
    Failed { reason: String },
}

impl ReminderOutcome {
    pub fn is_sent(&self) -> bool {
        matches!(self, Self::Sent)
    }
}

/// Asks the notification service to remind debtors of a suggested payment.
#[derive(Clone, Copy)]
pub struct PaymentReminder<'a> {
    port: &'a dyn NotificationPort,
}

impl<'a> PaymentReminder<'a> {
    pub fn new(port: &'a dyn NotificationPort) -> Self {
        Self { port }
    }

    pub fn send(&self, context: &TripContext, settlement: &SuggestedSettlement) -> ReminderOutcome {
        let request = PaymentRequest::new(context, settlement);
        let delivered = self
            .port
            .request_payment(&request)
            .and_then(|response| response.into_result());

        match delivered {
            Ok(()) => {
                tracing::info!(
                    debtor = %request.debtor_name,
                    creditor = %request.creditor_name,
                    amount = %request.amount,
                    "payment request sent"
                );
                ReminderOutcome::Sent
            }
            Err(err) => {
                tracing::warn!(
                    debtor = %request.debtor_name,
                    creditor = %request.creditor_name,
                    "could not send reminder: {err}"
                );
                ReminderOutcome::Failed {
                    reason: err.to_string(),
                }
            }
        }
    }

    /// One reminder per suggested settlement, in plan order.
    pub fn send_all<'s>(
        &self,
        context: &TripContext,
        summary: &'s SettlementSummary,
    ) -> Vec<(&'s SuggestedSettlement, ReminderOutcome)> {
        summary
            .settlements
            .iter()
            .map(|settlement| (settlement, self.send(context, settlement)))
            .collect()
    }
}
