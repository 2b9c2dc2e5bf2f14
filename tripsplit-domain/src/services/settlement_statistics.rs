use crate::{
    error::ExpenseError,
    model::{Balance, Expense, Money},
};

/// Headline numbers for a set of expenses and their balances.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SettlementStatistics {
    pub total_spent: Money,
    /// Sum of all debts, which equals the sum of all credits.
    pub total_outstanding: Money,
    pub settled_count: usize,
}

impl SettlementStatistics {
    /// Fails with [`ExpenseError::AmountOverflow`] at the first expense that
    /// takes the total spent out of range.
    pub fn collect(expenses: &[Expense], balances: &[Balance]) -> Result<Self, ExpenseError> {
        let mut total_spent = Money::ZERO;
        for (index, expense) in expenses.iter().enumerate() {
            total_spent = total_spent
                .checked_add(expense.amount)
                .ok_or(ExpenseError::AmountOverflow { index })?;
        }
        // Debts come from shares of expenses, so this stays within total_spent.
        let total_outstanding = balances
            .iter()
            .map(|balance| (-balance.net).max(Money::ZERO))
            .fold(Money::ZERO, Money::saturating_add);
        let settled_count = balances.iter().filter(|balance| balance.is_settled()).count();

        Ok(Self {
            total_spent,
            total_outstanding,
            settled_count,
        })
    }
}
