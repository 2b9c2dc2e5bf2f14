pub mod strings {
    pub const MEMBER: &str = "Member";
    pub const BALANCE: &str = "Balance";
    pub const STATUS: &str = "Status";
    pub const FROM: &str = "From";
    pub const TO: &str = "To";
    pub const AMOUNT: &str = "Amount";
    pub const TOTAL_SPENT: &str = "Total Spent";
    pub const TOTAL_OWED: &str = "Total Owed";
    pub const SETTLED_UP: &str = "Settled Up";
    pub const SUGGESTED_SETTLEMENTS: &str = "Suggested Settlements";
    pub const ALL_SETTLED_UP: &str = "All Settled Up!";
    pub const EVERYONE_PAID_FAIR_SHARE: &str = "Everyone has paid their fair share";
    pub const FAILED_TO_SEND_REQUEST: &str = "Failed to send request";
}

pub use strings::*;

use std::fmt;

pub fn gets_back(amount: impl fmt::Display) -> String {
    format!("Gets Back {amount}")
}

pub fn owes(amount: impl fmt::Display) -> String {
    format!("Owes {amount}")
}

pub fn pays(debtor: impl fmt::Display, creditor: impl fmt::Display) -> String {
    format!("{debtor} pays {creditor}")
}

pub fn request_sent(debtor: impl fmt::Display) -> String {
    format!("Payment request sent to {debtor}")
}

pub struct ReminderMessage<'a> {
    debtor: &'a str,
    amount: String,
}

/// `amount` is expected to be already formatted with its currency symbol.
pub fn reminder_message(debtor: &str, amount: String) -> ReminderMessage<'_> {
    ReminderMessage { debtor, amount }
}

impl fmt::Display for ReminderMessage<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Hi {}! 💰\n\n\
             Just a friendly reminder that you owe me {} from our recent trip expenses.\n\n\
             Could you please settle this when you get a chance? Thanks! 😊",
            self.debtor, self.amount
        )
    }
}
