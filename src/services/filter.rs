//! Transaction filtering by date interval

use crate::models::{DateInterval, Transaction};

/// Lazily select the transactions dated inside `interval`, both bounds inclusive
///
/// Input order is preserved and each transaction is inspected exactly once.
pub fn filter_by_interval<'a, I>(
    transactions: I,
    interval: &DateInterval,
) -> impl Iterator<Item = &'a Transaction>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let interval = *interval;
    transactions
        .into_iter()
        .filter(move |txn| interval.contains(txn.date))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample() -> Vec<Transaction> {
        vec![
            Transaction::expense("Gym", Money::from_cents(2000), "Other", date(2026, 1, 15)),
            Transaction::expense("Rent", Money::from_cents(12000), "Other", date(2026, 2, 1)),
            Transaction::income("Salary", Money::from_cents(45000), "SALARY", date(2026, 2, 1)),
            Transaction::expense("Uber", Money::from_cents(450), "Transport", date(2026, 2, 3)),
            Transaction::expense("Dining", Money::from_cents(3000), "Food & Drinks", date(2026, 1, 31)),
            Transaction::expense("Zara", Money::from_cents(3500), "Shopping", date(2026, 2, 28)),
        ]
    }

    #[test]
    fn test_filter_inclusive_bounds() {
        let transactions = sample();
        let feb = DateInterval::new(date(2026, 2, 1), date(2026, 2, 28)).unwrap();

        let names: Vec<_> = filter_by_interval(&transactions, &feb)
            .map(|t| t.name.as_str())
            .collect();

        assert_eq!(names, vec!["Rent", "Salary", "Uber", "Zara"]);
    }

    #[test]
    fn test_filter_single_day() {
        let transactions = sample();
        let day = DateInterval::single_day(date(2026, 2, 1));

        let matched: Vec<_> = filter_by_interval(&transactions, &day).collect();

        assert_eq!(matched.len(), 2);
        assert!(matched.iter().all(|t| t.date == date(2026, 2, 1)));
    }

    #[test]
    fn test_filter_does_not_touch_input() {
        let transactions = sample();
        let before = transactions.clone();
        let march = DateInterval::new(date(2026, 3, 1), date(2026, 3, 31)).unwrap();

        assert_eq!(filter_by_interval(&transactions, &march).count(), 0);
        assert_eq!(transactions, before);
    }

    #[test]
    fn test_filter_empty_input() {
        let transactions: Vec<Transaction> = Vec::new();
        let feb = DateInterval::new(date(2026, 2, 1), date(2026, 2, 28)).unwrap();
        assert_eq!(filter_by_interval(&transactions, &feb).count(), 0);
    }
}
