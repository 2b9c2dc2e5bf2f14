use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tripsplit_domain::{BalanceStatus, Money};

pub const DEFAULT_TRIP_NAME: &str = "Trip";
pub const DEFAULT_CURRENCY: &str = "USD";

/// An expense as stored by the data service, with participants named.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseRecord {
    pub id: String,
    pub amount: Money,
    #[serde(alias = "paidBy")]
    pub payer: String,
    pub split_between: Vec<String>,
    #[serde(default)]
    pub category: String,
    pub date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Everything the data service hands over for one trip.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripSnapshot {
    #[serde(default)]
    pub trip_id: Option<String>,
    #[serde(default)]
    pub trip_name: Option<String>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub participants: Vec<String>,
    #[serde(default)]
    pub expenses: Vec<ExpenseRecord>,
}

impl TripSnapshot {
    /// Trip metadata with `fallback_name`/`fallback_currency` filling the gaps.
    pub fn context(&self, fallback_name: &str, fallback_currency: &str) -> TripContext {
        TripContext::new(
            self.trip_id.clone(),
            self.trip_name.as_deref().unwrap_or(fallback_name),
            self.currency.as_deref().unwrap_or(fallback_currency),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripContext {
    pub trip_id: Option<String>,
    pub trip_name: String,
    /// ISO 4217 code as the trip stores it, trimmed.
    pub currency: String,
}

impl TripContext {
    pub fn new(trip_id: Option<String>, trip_name: &str, currency: &str) -> Self {
        let trip_name = match trip_name.trim() {
            "" => DEFAULT_TRIP_NAME,
            name => name,
        };
        let currency = match currency.trim() {
            "" => DEFAULT_CURRENCY,
            code => code,
        };

        Self {
            trip_id,
            trip_name: trip_name.to_owned(),
            currency: currency.to_owned(),
        }
    }
}

impl Default for TripContext {
    fn default() -> Self {
        Self::new(None, DEFAULT_TRIP_NAME, DEFAULT_CURRENCY)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OwedTo {
    pub to: String,
    pub amount: Money,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OwedFrom {
    pub from: String,
    pub amount: Money,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonBalance {
    pub person: String,
    pub net: Money,
    pub owes: Vec<OwedTo>,
    pub owed_by: Vec<OwedFrom>,
}

impl PersonBalance {
    pub fn status(&self) -> BalanceStatus {
        BalanceStatus::of(self.net)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuggestedSettlement {
    pub debtor: String,
    pub creditor: String,
    pub amount: Money,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SettlementSummary {
    pub balances: Vec<PersonBalance>,
    pub settlements: Vec<SuggestedSettlement>,
    pub total_spent: Money,
    pub total_outstanding: Money,
    pub settled_count: usize,
}

impl SettlementSummary {
    pub fn is_all_settled(&self) -> bool {
        self.settlements.is_empty()
    }
}
