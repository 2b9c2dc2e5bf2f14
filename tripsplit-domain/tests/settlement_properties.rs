use proptest::prelude::*;
use rust_decimal::Decimal;
use tripsplit_domain::{
    BalanceAggregator, EPSILON, Expense, Money, ParticipantId, Roster, SettlementPlanner,
};

fn roster_of(size: usize) -> Roster {
    let names: Vec<String> = (0..size).map(|idx| format!("P{idx}")).collect();
    names.iter().map(String::as_str).collect()
}

fn expense_strategy(member_count: usize) -> impl Strategy<Value = Expense> {
    (
        1i64..=1_000_000,
        0..member_count,
        prop::collection::btree_set(0..member_count, 1..=member_count),
    )
        .prop_map(|(cents, payer, split)| Expense {
            amount: Money::new(cents, 2),
            payer: ParticipantId(payer as u32),
            split_between: split.into_iter().map(|idx| ParticipantId(idx as u32)).collect(),
        })
}

fn scenario() -> impl Strategy<Value = (Roster, Vec<Expense>)> {
    (1usize..=7).prop_flat_map(|member_count| {
        (
            Just(roster_of(member_count)),
            prop::collection::vec(expense_strategy(member_count), 0..=25),
        )
    })
}

proptest! {
    #[test]
    fn balances_sum_to_zero((roster, expenses) in scenario()) {
        let balances = BalanceAggregator.aggregate(&roster, &expenses).expect("valid expenses");

        let total: Money = balances.iter().map(|balance| balance.net).sum();
        prop_assert!(total.abs() < EPSILON, "total drifted to {}", total);
        prop_assert_eq!(balances.len(), roster.len());
    }

    #[test]
    fn edges_cover_every_debt_and_credit((roster, expenses) in scenario()) {
        let balances = BalanceAggregator.aggregate(&roster, &expenses).expect("valid expenses");
        let settlement = SettlementPlanner.plan(balances);
        // Sub-epsilon balances are never matched, so residue can add up across people.
        let tolerance = EPSILON * Decimal::from(roster.len());

        for balance in &settlement.balances {
            let paid: Money = settlement
                .edges
                .iter()
                .filter(|edge| edge.debtor == balance.person)
                .map(|edge| edge.amount)
                .sum();
            let received: Money = settlement
                .edges
                .iter()
                .filter(|edge| edge.creditor == balance.person)
                .map(|edge| edge.amount)
                .sum();

            if balance.is_debtor() {
                prop_assert!((paid - balance.net.abs()).abs() <= tolerance);
                prop_assert!(received.is_zero());
            } else if balance.is_creditor() {
                prop_assert!((received - balance.net).abs() <= tolerance);
                prop_assert!(paid.is_zero());
            } else {
                prop_assert!(paid.is_zero() && received.is_zero());
            }

            let owes: Money = balance.owes.iter().map(|debt| debt.amount).sum();
            let owed_by: Money = balance.owed_by.iter().map(|credit| credit.amount).sum();
            prop_assert_eq!(owes, paid);
            prop_assert_eq!(owed_by, received);
        }
    }

    #[test]
    fn edges_are_positive_and_never_self((roster, expenses) in scenario()) {
        let balances = BalanceAggregator.aggregate(&roster, &expenses).expect("valid expenses");
        let settlement = SettlementPlanner.plan(balances);

        for edge in &settlement.edges {
            prop_assert_ne!(edge.debtor, edge.creditor);
            prop_assert!(edge.amount > EPSILON);
        }
    }

    #[test]
    fn recomputation_is_identical((roster, expenses) in scenario()) {
        let first = BalanceAggregator.aggregate(&roster, &expenses).expect("valid expenses");
        let second = BalanceAggregator.aggregate(&roster, &expenses).expect("valid expenses");
        prop_assert_eq!(&first, &second);

        prop_assert_eq!(SettlementPlanner.plan(first), SettlementPlanner.plan(second));
    }
}
