use crate::{
    currency::format_amount,
    text_table::{Alignment, TextTableBuilder},
};
use std::borrow::Cow;
use tripsplit_application::{PersonBalance, SettlementSummary, SuggestedSettlement};
use tripsplit_domain::{BalanceStatus, Money};
use tripsplit_i18n as i18n;

pub struct SettlementPresenter;

pub struct SettlementView {
    pub overview_table: String,
    pub balance_table: String,
    /// `None` when nobody owes anything.
    pub transfer_table: Option<String>,
}

impl SettlementView {
    pub fn to_text(&self) -> String {
        let mut text = String::with_capacity(
            self.overview_table.len() + self.balance_table.len() + 128,
        );
        text.push_str(&self.overview_table);
        text.push('\n');
        text.push_str(&self.balance_table);
        text.push('\n');
        text.push_str(i18n::SUGGESTED_SETTLEMENTS);
        text.push('\n');
        match &self.transfer_table {
            Some(table) => text.push_str(table),
            None => {
                text.push_str(i18n::ALL_SETTLED_UP);
                text.push('\n');
                text.push_str(i18n::EVERYONE_PAID_FAIR_SHARE);
                text.push('\n');
            }
        }
        text
    }
}

impl SettlementPresenter {
    pub fn render(summary: &SettlementSummary, currency: &str) -> SettlementView {
        let overview_table = Self::build_overview_table(summary, currency);
        let balance_table = Self::build_balance_table(&summary.balances, currency);
        let transfer_table = if summary.is_all_settled() {
            None
        } else {
            Some(Self::build_transfer_table(&summary.settlements, currency))
        };

        SettlementView {
            overview_table,
            balance_table,
            transfer_table,
        }
    }

    pub fn build_overview_table(summary: &SettlementSummary, currency: &str) -> String {
        TextTableBuilder::new()
            .alignments(&[Alignment::Right, Alignment::Right, Alignment::Right])
            .headers(&[
                Cow::Borrowed(i18n::TOTAL_SPENT),
                Cow::Borrowed(i18n::TOTAL_OWED),
                Cow::Borrowed(i18n::SETTLED_UP),
            ])
            .row([
                Cow::Owned(format_amount(summary.total_spent, currency)),
                Cow::Owned(format_amount(summary.total_outstanding, currency)),
                Cow::Owned(summary.settled_count.to_string()),
            ])
            .build()
    }

    pub fn build_balance_table(balances: &[PersonBalance], currency: &str) -> String {
        let mut builder = TextTableBuilder::new()
            .alignments(&[Alignment::Left, Alignment::Right, Alignment::Left])
            .headers(&[
                Cow::Borrowed(i18n::MEMBER),
                Cow::Borrowed(i18n::BALANCE),
                Cow::Borrowed(i18n::STATUS),
            ]);

        for balance in balances {
            let (net, status) = match balance.status() {
                BalanceStatus::Settled => (
                    format_amount(Money::ZERO, currency),
                    Cow::Borrowed(i18n::SETTLED_UP),
                ),
                BalanceStatus::GetsBack(amount) => {
                    let amount = format_amount(amount, currency);
                    (format!("+{amount}"), Cow::Owned(i18n::gets_back(amount)))
                }
                BalanceStatus::Owes(amount) => {
                    let amount = format_amount(amount, currency);
                    (format!("-{amount}"), Cow::Owned(i18n::owes(amount)))
                }
            };
            builder = builder.row([
                Cow::Borrowed(balance.person.as_str()),
                Cow::Owned(net),
                status,
            ]);
        }

        builder.build()
    }

    pub fn build_transfer_table(settlements: &[SuggestedSettlement], currency: &str) -> String {
        let mut builder = TextTableBuilder::new()
            .alignments(&[Alignment::Left, Alignment::Left, Alignment::Right])
            .headers(&[
                Cow::Borrowed(i18n::FROM),
                Cow::Borrowed(i18n::TO),
                Cow::Borrowed(i18n::AMOUNT),
            ]);

        for settlement in settlements {
            builder = builder.row([
                Cow::Borrowed(settlement.debtor.as_str()),
                Cow::Borrowed(settlement.creditor.as_str()),
                Cow::Owned(format_amount(settlement.amount, currency)),
            ]);
        }

        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tripsplit_application::{OwedFrom, OwedTo};

    fn sample_summary() -> SettlementSummary {
        SettlementSummary {
            balances: vec![
                PersonBalance {
                    person: "Alice".to_owned(),
                    net: Money::from_i64(50),
                    owes: Vec::new(),
                    owed_by: vec![OwedFrom {
                        from: "Bob".to_owned(),
                        amount: Money::from_i64(50),
                    }],
                },
                PersonBalance {
                    person: "Bob".to_owned(),
                    net: Money::from_i64(-50),
                    owes: vec![OwedTo {
                        to: "Alice".to_owned(),
                        amount: Money::from_i64(50),
                    }],
                    owed_by: Vec::new(),
                },
                PersonBalance {
                    person: "Cleo".to_owned(),
                    net: Money::new(-4, 3),
                    owes: Vec::new(),
                    owed_by: Vec::new(),
                },
            ],
            settlements: vec![SuggestedSettlement {
                debtor: "Bob".to_owned(),
                creditor: "Alice".to_owned(),
                amount: Money::from_i64(50),
            }],
            total_spent: Money::from_i64(100),
            total_outstanding: Money::new(50004, 3),
            settled_count: 1,
        }
    }

    #[test]
    fn render_shows_signed_balances_and_status() {
        let view = SettlementPresenter::render(&sample_summary(), "EUR");

        assert!(view.balance_table.contains("+€50.00"));
        assert!(view.balance_table.contains("Gets Back €50.00"));
        assert!(view.balance_table.contains("-€50.00"));
        assert!(view.balance_table.contains("Owes €50.00"));
        assert!(view.balance_table.contains("€0.00"));
        assert!(!view.balance_table.contains("-€0.00"));
    }

    #[test]
    fn render_lists_transfers() {
        let view = SettlementPresenter::render(&sample_summary(), "USD");

        let transfers = view.transfer_table.expect("transfer table");
        assert!(transfers.lines().any(|line| {
            line.starts_with("Bob") && line.contains("Alice") && line.ends_with("$50.00")
        }));
        assert!(view.overview_table.contains("$100.00"));
        assert!(view.overview_table.contains("$50.00"));
    }

    #[test]
    fn all_settled_message_when_no_transfers() {
        let summary = SettlementSummary {
            settlements: Vec::new(),
            ..sample_summary()
        };

        let text = SettlementPresenter::render(&summary, "USD").to_text();

        assert!(text.contains(i18n::ALL_SETTLED_UP));
        assert!(text.contains(i18n::EVERYONE_PAID_FAIR_SHARE));
    }
}
