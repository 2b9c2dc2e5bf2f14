use crate::{
    error::NotificationError,
    model::{SuggestedSettlement, TripContext},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Payload of a single payment request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    pub trip_id: Option<String>,
    pub trip_name: String,
    pub currency: String,
    pub debtor_name: String,
    pub creditor_name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
}

impl PaymentRequest {
    pub fn new(context: &TripContext, settlement: &SuggestedSettlement) -> Self {
        Self {
            trip_id: context.trip_id.clone(),
            trip_name: context.trip_name.clone(),
            currency: context.currency.clone(),
            debtor_name: settlement.debtor.clone(),
            creditor_name: settlement.creditor.clone(),
            amount: settlement.amount.round_cents().as_decimal(),
        }
    }
}

/// Reply of the notification service: `{ "success": true }` or `{ "error": ... }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NotificationResponse {
    Success { success: bool },
    Error {
        error: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        details: Option<String>,
    },
}

impl NotificationResponse {
    pub fn delivered() -> Self {
        Self::Success { success: true }
    }

    pub fn into_result(self) -> Result<(), NotificationError> {
        match self {
            Self::Success { success: true } => Ok(()),
            Self::Success { success: false } => Err(NotificationError::Unconfirmed),
            Self::Error {
                error,
                details: Some(details),
            } => Err(NotificationError::Rejected(format!("{error} ({details})"))),
            Self::Error { error, .. } => Err(NotificationError::Rejected(error)),
        }
    }
}

/// Delivers payment requests to debtors. Implemented by infrastructure.
pub trait NotificationPort: Send + Sync {
    fn request_payment(
        &self,
        request: &PaymentRequest,
    ) -> Result<NotificationResponse, NotificationError>;
}
