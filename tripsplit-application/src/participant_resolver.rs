use crate::model::ExpenseRecord;
use tripsplit_domain::{Expense, Roster};

/// Expenses rewritten against a roster that names everyone they mention.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedExpenses {
    pub roster: Roster,
    pub expenses: Vec<Expense>,
}

/// Maps display names to roster ids.
///
/// Names that only appear inside expenses are registered on the fly instead of
/// being rejected. Registration order is the roster, then every payer, then
/// every split member, each in expense order.
pub struct ParticipantResolver;

impl ParticipantResolver {
    pub fn resolve<S>(participants: &[S], records: &[ExpenseRecord]) -> ResolvedExpenses
    where
        S: AsRef<str>,
    {
        let mut roster = Roster::new();
        for name in participants {
            roster.register(name.as_ref());
        }
        for record in records {
            roster.register(&record.payer);
        }
        for record in records {
            for member in &record.split_between {
                roster.register(member);
            }
        }

        let expenses = records
            .iter()
            .map(|record| Expense {
                amount: record.amount,
                payer: roster.register(&record.payer),
                split_between: record
                    .split_between
                    .iter()
                    .map(|member| roster.register(member))
                    .collect(),
            })
            .collect();

        ResolvedExpenses { roster, expenses }
    }
}
