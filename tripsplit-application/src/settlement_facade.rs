use crate::{
    error::SettlementError,
    model::{
        ExpenseRecord, OwedFrom, OwedTo, PersonBalance, SettlementSummary, SuggestedSettlement,
        TripSnapshot,
    },
    participant_resolver::{ParticipantResolver, ResolvedExpenses},
};
use tripsplit_domain::{
    BalanceAggregator, ExpenseError, ParticipantId, Roster, SettlementPlanner,
    SettlementStatistics,
};

/// Runs aggregation and planning over one snapshot of expenses.
///
/// Holds no state between calls; every call recomputes from its inputs.
#[derive(Clone, Copy)]
pub struct SettlementFacade {
    aggregator: &'static BalanceAggregator,
    planner: &'static SettlementPlanner,
}

impl Default for SettlementFacade {
    fn default() -> Self {
        Self::new()
    }
}

impl SettlementFacade {
    pub fn new() -> Self {
        Self {
            aggregator: &BalanceAggregator,
            planner: &SettlementPlanner,
        }
    }

    pub fn summarize<S>(
        &self,
        expenses: &[ExpenseRecord],
        participants: &[S],
    ) -> Result<SettlementSummary, SettlementError>
    where
        S: AsRef<str>,
    {
        let ResolvedExpenses {
            roster,
            expenses: resolved,
        } = ParticipantResolver::resolve(participants, expenses);

        let invalid = |source: ExpenseError| SettlementError::InvalidExpense {
            id: expenses
                .get(source.index())
                .map(|record| record.id.clone())
                .unwrap_or_default(),
            source,
        };
        let balances = self
            .aggregator
            .aggregate(&roster, &resolved)
            .map_err(invalid)?;
        let statistics =
            SettlementStatistics::collect(&resolved, &balances).map_err(invalid)?;
        let settlement = self.planner.plan(balances);

        let settlements = settlement
            .edges
            .iter()
            .map(|edge| SuggestedSettlement {
                debtor: display_name(&roster, edge.debtor),
                creditor: display_name(&roster, edge.creditor),
                amount: edge.amount,
            })
            .collect();
        let balances = settlement
            .balances
            .iter()
            .map(|balance| PersonBalance {
                person: display_name(&roster, balance.person),
                net: balance.net,
                owes: balance
                    .owes
                    .iter()
                    .map(|debt| OwedTo {
                        to: display_name(&roster, debt.to),
                        amount: debt.amount,
                    })
                    .collect(),
                owed_by: balance
                    .owed_by
                    .iter()
                    .map(|credit| OwedFrom {
                        from: display_name(&roster, credit.from),
                        amount: credit.amount,
                    })
                    .collect(),
            })
            .collect();

        Ok(SettlementSummary {
            balances,
            settlements,
            total_spent: statistics.total_spent,
            total_outstanding: statistics.total_outstanding,
            settled_count: statistics.settled_count,
        })
    }

    pub fn summarize_snapshot(
        &self,
        snapshot: &TripSnapshot,
    ) -> Result<SettlementSummary, SettlementError> {
        self.summarize(&snapshot.expenses, &snapshot.participants)
    }
}

fn display_name(roster: &Roster, id: ParticipantId) -> String {
    roster.name(id).unwrap_or_default().to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use tripsplit_domain::Money;

    #[fixture]
    fn facade() -> SettlementFacade {
        SettlementFacade::new()
    }

    fn record(id: &str, amount: i64, payer: &str, split: &[&str]) -> ExpenseRecord {
        ExpenseRecord {
            id: id.to_owned(),
            amount: Money::from_i64(amount),
            payer: payer.to_owned(),
            split_between: split.iter().map(|name| (*name).to_owned()).collect(),
            category: "Food".to_owned(),
            date: None,
            description: None,
        }
    }

    #[rstest]
    fn invalid_expense_carries_record_id(facade: SettlementFacade) {
        let expenses = vec![record("ok", 10, "A", &["A"]), record("broken", 10, "A", &[])];

        let err = facade
            .summarize(&expenses, &["A"])
            .expect_err("empty split must fail");

        assert_eq!(
            err,
            SettlementError::InvalidExpense {
                id: "broken".to_owned(),
                source: ExpenseError::EmptySplit { index: 1 },
            }
        );
    }

    #[rstest]
    fn unknown_names_are_registered_with_zero(facade: SettlementFacade) {
        let summary = facade
            .summarize(&[record("e1", 30, "A", &["A", "B"])], &["A", "Zed"])
            .expect("valid expenses");

        let people: Vec<&str> = summary.balances.iter().map(|b| b.person.as_str()).collect();
        assert_eq!(people, vec!["A", "Zed", "B"]);
        assert_eq!(summary.balances[1].net, Money::ZERO);
        assert_eq!(summary.settled_count, 1);
    }
}
