use crate::{
    error::ExpenseError,
    model::{Balance, Expense, Money, ParticipantId, Roster},
};
use std::num::NonZeroUsize;

/// Reduces expenses into one net balance per roster entry.
pub struct BalanceAggregator;

impl BalanceAggregator {
    /// Calculate net balances for every participant of `roster`
    ///
    /// The payer is credited the full amount and every split member is debited
    /// an equal share, so a payer inside the split nets `amount - share`.
    ///
    /// # Returns
    /// Balances in roster order, one per participant, or the first invalid
    /// expense. An expense that pushes the running total spent or any net
    /// balance out of `Decimal` range is reported as
    /// [`ExpenseError::AmountOverflow`].
    pub fn aggregate(
        &self,
        roster: &Roster,
        expenses: &[Expense],
    ) -> Result<Vec<Balance>, ExpenseError> {
        let mut nets = vec![Money::ZERO; roster.len()];
        let mut total_spent = Money::ZERO;

        for (index, expense) in expenses.iter().enumerate() {
            let parts = validate(index, roster, expense)?;
            let share = expense.amount.share(parts);
            let overflow = || ExpenseError::AmountOverflow { index };

            total_spent = total_spent
                .checked_add(expense.amount)
                .ok_or_else(overflow)?;
            let payer = &mut nets[slot(expense.payer)];
            *payer = payer.checked_add(expense.amount).ok_or_else(overflow)?;
            for &member in &expense.split_between {
                let net = &mut nets[slot(member)];
                *net = net.checked_sub(share).ok_or_else(overflow)?;
            }
        }

        tracing::debug!(
            participants = roster.len(),
            expenses = expenses.len(),
            %total_spent,
            "aggregated balances"
        );

        Ok(roster
            .ids()
            .zip(nets)
            .map(|(id, net)| Balance::new(id, net))
            .collect())
    }
}

fn validate(
    index: usize,
    roster: &Roster,
    expense: &Expense,
) -> Result<NonZeroUsize, ExpenseError> {
    let Some(parts) = NonZeroUsize::new(expense.split_between.len()) else {
        return Err(ExpenseError::EmptySplit { index });
    };
    if !expense.amount.is_positive() {
        return Err(ExpenseError::NonPositiveAmount {
            index,
            amount: expense.amount,
        });
    }
    let registered = roster.contains(expense.payer)
        && expense
            .split_between
            .iter()
            .all(|&member| roster.contains(member));
    if !registered {
        return Err(ExpenseError::UnregisteredParticipant { index });
    }
    Ok(parts)
}

fn slot(id: ParticipantId) -> usize {
    id.0 as usize
}
