use indexmap::IndexSet;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::{
    fmt,
    iter::Sum,
    num::NonZeroUsize,
    ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign},
};

/// Tolerance below which a balance or a transfer counts as zero.
pub const EPSILON: Money = Money(Decimal::from_parts(1, 0, 0, false, 2));

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(num: i64, scale: u32) -> Self {
        Self(Decimal::new(num, scale))
    }

    pub fn from_i64(value: i64) -> Self {
        Self(Decimal::from(value))
    }

    pub fn from_decimal(value: Decimal) -> Self {
        Self(value)
    }

    pub fn as_decimal(self) -> Decimal {
        self.0
    }

    pub fn abs(self) -> Self {
        Self(self.0.abs())
    }

    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }

    pub fn is_positive(self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// `|self| < EPSILON`.
    pub fn is_negligible(self) -> bool {
        self.abs() < EPSILON
    }

    pub fn max(self, other: Self) -> Self {
        if self >= other { self } else { other }
    }

    pub fn min(self, other: Self) -> Self {
        if self <= other { self } else { other }
    }

    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Self)
    }

    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        self.0.checked_sub(rhs.0).map(Self)
    }

    pub fn saturating_add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }

    /// Equal share of `self` among `parts` people.
    pub fn share(self, parts: NonZeroUsize) -> Self {
        Self(self.0 / Decimal::from(parts.get()))
    }

    /// Rounded to cents, midpoints away from zero.
    pub fn round_cents(self) -> Self {
        Self(
            self.0
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
        )
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.round_cents().0)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl Mul<Decimal> for Money {
    type Output = Self;

    fn mul(self, rhs: Decimal) -> Self::Output {
        Self(self.0 * rhs)
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Index of a participant inside a [`Roster`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ParticipantId(pub u32);

impl ParticipantId {
    fn index(self) -> usize {
        self.0 as usize
    }
}

/// Insertion-ordered arena of participant display names.
///
/// Registration order is the canonical output order for balances, and is the
/// tie-break used by [`crate::SettlementPlanner`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Roster {
    names: IndexSet<String>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the existing id when `name` is already known.
    pub fn register(&mut self, name: &str) -> ParticipantId {
        if let Some(index) = self.names.get_index_of(name) {
            return ParticipantId(index as u32);
        }
        let (index, _) = self.names.insert_full(name.to_owned());
        ParticipantId(index as u32)
    }

    pub fn id_of(&self, name: &str) -> Option<ParticipantId> {
        self.names
            .get_index_of(name)
            .map(|index| ParticipantId(index as u32))
    }

    pub fn name(&self, id: ParticipantId) -> Option<&str> {
        self.names.get_index(id.index()).map(String::as_str)
    }

    pub fn contains(&self, id: ParticipantId) -> bool {
        id.index() < self.names.len()
    }

    pub fn ids(&self) -> impl Iterator<Item = ParticipantId> + '_ {
        (0..self.names.len()).map(|index| ParticipantId(index as u32))
    }

    pub fn iter(&self) -> impl Iterator<Item = (ParticipantId, &str)> + '_ {
        self.names
            .iter()
            .enumerate()
            .map(|(index, name)| (ParticipantId(index as u32), name.as_str()))
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<'a> FromIterator<&'a str> for Roster {
    fn from_iter<T: IntoIterator<Item = &'a str>>(iter: T) -> Self {
        let mut roster = Self::new();
        for name in iter {
            roster.register(name);
        }
        roster
    }
}

/// A shared expense, split equally between `split_between`.
///
/// The payer does not have to be part of the split.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Expense {
    pub amount: Money,
    pub payer: ParticipantId,
    pub split_between: Vec<ParticipantId>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Debt {
    pub to: ParticipantId,
    pub amount: Money,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Credit {
    pub from: ParticipantId,
    pub amount: Money,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BalanceStatus {
    Settled,
    GetsBack(Money),
    Owes(Money),
}

impl BalanceStatus {
    pub fn of(net: Money) -> Self {
        if net.is_negligible() {
            Self::Settled
        } else if net.is_positive() {
            Self::GetsBack(net)
        } else {
            Self::Owes(net.abs())
        }
    }
}

/// Net position of one participant.
///
/// `net > 0` means the participant should receive money, `net < 0` that they
/// should pay. `owes`/`owed_by` stay empty until a settlement plan fills them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Balance {
    pub person: ParticipantId,
    pub net: Money,
    pub owes: Vec<Debt>,
    pub owed_by: Vec<Credit>,
}

impl Balance {
    pub fn new(person: ParticipantId, net: Money) -> Self {
        Self {
            person,
            net,
            owes: Vec::new(),
            owed_by: Vec::new(),
        }
    }

    pub fn is_settled(&self) -> bool {
        self.net.is_negligible()
    }

    pub fn is_creditor(&self) -> bool {
        self.net > EPSILON
    }

    pub fn is_debtor(&self) -> bool {
        self.net < -EPSILON
    }

    pub fn status(&self) -> BalanceStatus {
        BalanceStatus::of(self.net)
    }
}

/// One suggested payment from a debtor to a creditor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SettlementEdge {
    pub debtor: ParticipantId,
    pub creditor: ParticipantId,
    pub amount: Money,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn roster_keeps_first_registration() {
        let mut roster = Roster::new();
        let alice = roster.register("Alice");
        let bob = roster.register("Bob");

        assert_eq!(roster.register("Alice"), alice);
        assert_eq!(roster.len(), 2);
        assert_eq!(roster.name(bob), Some("Bob"));
        assert_eq!(roster.id_of("Carol"), None);
    }

    #[test]
    fn roster_matches_names_exactly() {
        let roster: Roster = ["alice", "Alice"].into_iter().collect();

        assert_eq!(roster.len(), 2);
        assert_ne!(roster.id_of("alice"), roster.id_of("Alice"));
    }

    #[rstest]
    #[case::exact(Money::from_i64(90), 3, Money::from_i64(30))]
    #[case::fractional(Money::from_i64(10), 4, Money::new(250, 2))]
    fn share_divides_equally(#[case] amount: Money, #[case] parts: usize, #[case] expected: Money) {
        let parts = NonZeroUsize::new(parts).expect("non-zero parts");
        assert_eq!(amount.share(parts), expected);
    }

    #[rstest]
    #[case::whole(Money::from_i64(50), "50.00")]
    #[case::third(Money::from_i64(100).share(NonZeroUsize::new(3).expect("3")), "33.33")]
    #[case::midpoint(Money::new(1005, 3), "1.01")]
    #[case::negative(Money::new(-2505, 3), "-2.51")]
    fn display_rounds_to_cents(#[case] amount: Money, #[case] expected: &str) {
        assert_eq!(amount.to_string(), expected);
    }

    #[rstest]
    #[case::settled(Money::new(5, 3), BalanceStatus::Settled)]
    #[case::gets_back(Money::from_i64(60), BalanceStatus::GetsBack(Money::from_i64(60)))]
    #[case::owes(Money::from_i64(-30), BalanceStatus::Owes(Money::from_i64(30)))]
    fn balance_status_uses_epsilon(#[case] net: Money, #[case] expected: BalanceStatus) {
        assert_eq!(Balance::new(ParticipantId(0), net).status(), expected);
    }
}
