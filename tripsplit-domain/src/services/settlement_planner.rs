use crate::model::{Balance, Credit, Debt, EPSILON, Money, SettlementEdge};

/// Balances annotated with `owes`/`owed_by`, plus the edges that produced them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settlement {
    pub balances: Vec<Balance>,
    pub edges: Vec<SettlementEdge>,
}

/// Greedy debtor-to-creditor matcher.
///
/// Debtors are visited in balance order and each one pays creditors in
/// balance order until its debt is covered. The result is deterministic but
/// does not minimise the number of transfers.
pub struct SettlementPlanner;

impl SettlementPlanner {
    /// Plan settlement transfers for `balances`
    ///
    /// Takes ownership of balances and returns them with `owes`/`owed_by`
    /// rebuilt from the generated edges. `net` values are left untouched.
    pub fn plan(&self, balances: Vec<Balance>) -> Settlement {
        let mut balances = balances;
        for balance in &mut balances {
            balance.owes.clear();
            balance.owed_by.clear();
        }

        let mut creditors: Vec<(usize, Money)> = balances
            .iter()
            .enumerate()
            .filter(|(_, balance)| balance.is_creditor())
            .map(|(idx, balance)| (idx, balance.net))
            .collect();
        let debtors: Vec<(usize, Money)> = balances
            .iter()
            .enumerate()
            .filter(|(_, balance)| balance.is_debtor())
            .map(|(idx, balance)| (idx, balance.net.abs()))
            .collect();

        let mut edges = Vec::new();

        for (debtor_idx, owed) in debtors {
            let mut remaining = owed;

            for (creditor_idx, available) in creditors.iter_mut() {
                if remaining <= EPSILON {
                    break;
                }
                if *available <= EPSILON {
                    continue;
                }

                let payment = remaining.min(*available);
                remaining -= payment;
                *available -= payment;

                let debtor = balances[debtor_idx].person;
                let creditor = balances[*creditor_idx].person;
                balances[debtor_idx].owes.push(Debt {
                    to: creditor,
                    amount: payment,
                });
                balances[*creditor_idx].owed_by.push(Credit {
                    from: debtor,
                    amount: payment,
                });
                edges.push(SettlementEdge {
                    debtor,
                    creditor,
                    amount: payment,
                });
            }
        }

        let unmatched_credit: Money = creditors.iter().map(|(_, available)| *available).sum();
        tracing::debug!(
            edges = edges.len(),
            %unmatched_credit,
            "planned settlement"
        );

        Settlement { balances, edges }
    }
}
