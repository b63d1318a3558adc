//! Spending summary
//!
//! Income, expense and balance totals for a set of transactions plus the
//! per-category expense breakdown shown next to the pie chart.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::models::{Color, Money, Transaction, TransactionType};
use crate::reports::palette::CategoryPalette;

/// Divisor for the expense ratio when there is no income: one major unit
const NO_INCOME_DIVISOR: Money = Money::from_cents(100);

/// One row of the category breakdown
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryShare {
    /// Category name, exactly as it appears on the transactions
    pub category: String,
    /// Exact sum of the category's expenses
    pub amount: Money,
    /// Share of all expenses, rounded to a whole percent
    pub percent: u8,
    /// Display color from the palette
    pub color: Color,
}

/// Totals and category breakdown for a set of transactions
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpendingSummary {
    /// Sum of income amounts
    pub income_total: Money,
    /// Sum of expense amounts
    pub expense_total: Money,
    /// `income_total - expense_total`, may be negative
    pub balance: Money,
    /// Expense categories, largest first; equal amounts ordered by name
    pub categories: Vec<CategoryShare>,
}

impl SpendingSummary {
    /// Aggregate the given transactions in a single pass
    ///
    /// Only expenses are grouped into categories. When there are no expenses
    /// every category percent is zero.
    pub fn generate<'a, I>(transactions: I, palette: &CategoryPalette) -> Self
    where
        I: IntoIterator<Item = &'a Transaction>,
    {
        let mut income_total = Money::zero();
        let mut expense_total = Money::zero();
        let mut by_category: BTreeMap<&str, Money> = BTreeMap::new();
        let mut count = 0usize;

        for txn in transactions {
            count += 1;
            match txn.kind {
                TransactionType::Income => income_total += txn.amount,
                TransactionType::Expense => {
                    expense_total += txn.amount;
                    *by_category.entry(txn.category.as_str()).or_default() += txn.amount;
                }
            }
        }

        let mut categories: Vec<CategoryShare> = by_category
            .into_iter()
            .map(|(category, amount)| CategoryShare {
                category: category.to_string(),
                amount,
                percent: percent_of(amount, expense_total),
                color: palette.color_for(category),
            })
            .collect();

        categories.sort_by(|a, b| {
            b.amount
                .cmp(&a.amount)
                .then_with(|| a.category.cmp(&b.category))
        });

        tracing::debug!(
            transactions = count,
            categories = categories.len(),
            income = %income_total,
            expense = %expense_total,
            "aggregated spending"
        );

        Self {
            income_total,
            expense_total,
            balance: income_total - expense_total,
            categories,
        }
    }

    /// Expenses as a share of income, capped at 100
    ///
    /// With no income one whole currency unit stands in as the divisor.
    pub fn expense_ratio(&self) -> u8 {
        let divisor = if self.income_total.is_zero() {
            NO_INCOME_DIVISOR
        } else {
            self.income_total
        };
        percent_of(self.expense_total, divisor)
    }

    /// Sum of the rounded category percentages
    pub fn percent_total(&self) -> u32 {
        self.categories.iter().map(|c| u32::from(c.percent)).sum()
    }

    /// Check if the summary covers no money at all
    pub fn is_empty(&self) -> bool {
        self.income_total.is_zero() && self.expense_total.is_zero() && self.categories.is_empty()
    }

    /// The first `limit` categories
    pub fn top_categories(&self, limit: usize) -> &[CategoryShare] {
        &self.categories[..limit.min(self.categories.len())]
    }
}

/// `round(part / whole * 100)` with halves rounded up, clamped to `[0, 100]`
///
/// Computed in integer arithmetic so identical inputs always give identical
/// results. A non-positive `whole` yields 0.
pub fn percent_of(part: Money, whole: Money) -> u8 {
    if !whole.is_positive() {
        return 0;
    }

    let part = i128::from(part.cents());
    let whole = i128::from(whole.cents());
    let rounded = (part * 200 + whole).div_euclid(whole * 2);

    rounded.clamp(0, 100) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::palette::DEFAULT_CATEGORY_COLOR;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn expense(amount: i64, category: &str) -> Transaction {
        Transaction::expense("test", Money::from_cents(amount), category, date(2026, 2, 10))
    }

    fn income(amount: i64) -> Transaction {
        Transaction::income("test", Money::from_cents(amount), "SALARY", date(2026, 2, 1))
    }

    #[test]
    fn test_single_category() {
        let transactions = vec![expense(100, "Food"), expense(300, "Food")];
        let summary = SpendingSummary::generate(&transactions, &CategoryPalette::standard());

        assert_eq!(summary.expense_total.cents(), 400);
        assert_eq!(summary.income_total, Money::zero());
        assert_eq!(summary.balance.cents(), -400);
        assert_eq!(summary.categories.len(), 1);
        assert_eq!(summary.categories[0].category, "Food");
        assert_eq!(summary.categories[0].amount.cents(), 400);
        assert_eq!(summary.categories[0].percent, 100);
        assert_eq!(summary.categories[0].color, DEFAULT_CATEGORY_COLOR);
    }

    #[test]
    fn test_empty_input() {
        let transactions: Vec<Transaction> = Vec::new();
        let summary = SpendingSummary::generate(&transactions, &CategoryPalette::standard());

        assert!(summary.is_empty());
        assert_eq!(summary.income_total, Money::zero());
        assert_eq!(summary.expense_total, Money::zero());
        assert_eq!(summary.balance, Money::zero());
        assert!(summary.categories.is_empty());
        assert_eq!(summary.expense_ratio(), 0);
    }

    #[test]
    fn test_income_only() {
        let transactions = vec![income(45000), income(5000)];
        let summary = SpendingSummary::generate(&transactions, &CategoryPalette::standard());

        assert_eq!(summary.income_total.cents(), 50000);
        assert_eq!(summary.balance.cents(), 50000);
        assert!(summary.categories.is_empty());
        assert!(!summary.is_empty());
    }

    #[test]
    fn test_zero_expense_total_gives_zero_percent() {
        let transactions = vec![expense(0, "Food"), expense(0, "Shopping")];
        let summary = SpendingSummary::generate(&transactions, &CategoryPalette::standard());

        assert_eq!(summary.categories.len(), 2);
        assert!(summary.categories.iter().all(|c| c.percent == 0));
    }

    #[test]
    fn test_sorted_by_amount_then_name() {
        let transactions = vec![
            expense(500, "Transport"),
            expense(900, "Shopping"),
            expense(500, "Entertainment"),
            expense(100, "Food & Drinks"),
        ];
        let summary = SpendingSummary::generate(&transactions, &CategoryPalette::standard());

        let order: Vec<_> = summary.categories.iter().map(|c| c.category.as_str()).collect();
        assert_eq!(
            order,
            vec!["Shopping", "Entertainment", "Transport", "Food & Drinks"]
        );
    }

    #[test]
    fn test_grouping_is_case_sensitive() {
        let transactions = vec![expense(100, "Food"), expense(100, "food")];
        let summary = SpendingSummary::generate(&transactions, &CategoryPalette::standard());

        assert_eq!(summary.categories.len(), 2);
        assert_eq!(summary.categories[0].category, "Food");
        assert_eq!(summary.categories[1].category, "food");
    }

    #[test]
    fn test_income_not_grouped() {
        let transactions = vec![income(1000), expense(250, "Transport")];
        let summary = SpendingSummary::generate(&transactions, &CategoryPalette::standard());

        assert_eq!(summary.categories.len(), 1);
        assert_eq!(summary.categories[0].category, "Transport");
        assert_eq!(summary.categories[0].percent, 100);
        assert_eq!(summary.balance.cents(), 750);
        assert_eq!(summary.expense_ratio(), 25);
    }

    #[test]
    fn test_february_sample_data() {
        let transactions = vec![
            income(45000),
            income(5000),
            expense(649, "Entertainment"),
            expense(1250, "Food & Drinks"),
            expense(12000, "Other"),
            expense(450, "Transport"),
            expense(3500, "Shopping"),
            expense(800, "Entertainment"),
        ];
        let summary = SpendingSummary::generate(&transactions, &CategoryPalette::standard());

        assert_eq!(summary.income_total.cents(), 50000);
        assert_eq!(summary.expense_total.cents(), 18649);
        assert_eq!(summary.balance.cents(), 31351);

        let rows: Vec<_> = summary
            .categories
            .iter()
            .map(|c| (c.category.as_str(), c.amount.cents(), c.percent))
            .collect();
        assert_eq!(
            rows,
            vec![
                ("Other", 12000, 64),
                ("Shopping", 3500, 19),
                ("Entertainment", 1449, 8),
                ("Food & Drinks", 1250, 7),
                ("Transport", 450, 2),
            ]
        );
        assert_eq!(summary.percent_total(), 100);
        assert_eq!(summary.expense_ratio(), 37);
    }

    #[test]
    fn test_expense_ratio_caps_at_100() {
        let no_income = vec![expense(250, "Food")];
        let summary = SpendingSummary::generate(&no_income, &CategoryPalette::standard());
        assert_eq!(summary.expense_ratio(), 100);

        let overspent = vec![income(100), expense(300, "Food")];
        let summary = SpendingSummary::generate(&overspent, &CategoryPalette::standard());
        assert_eq!(summary.expense_ratio(), 100);
    }

    #[test]
    fn test_expense_ratio_without_income_uses_one_unit() {
        let small = vec![expense(10, "Food")];
        let summary = SpendingSummary::generate(&small, &CategoryPalette::standard());
        assert_eq!(summary.expense_ratio(), 10);

        let fractional_income = vec![income(50), expense(25, "Food")];
        let summary = SpendingSummary::generate(&fractional_income, &CategoryPalette::standard());
        assert_eq!(summary.expense_ratio(), 50);
    }

    #[test]
    fn test_huge_amounts_saturate_instead_of_overflowing() {
        let transactions = vec![expense(i64::MAX, "Shopping"), expense(1, "Food")];
        let summary = SpendingSummary::generate(&transactions, &CategoryPalette::standard());

        assert_eq!(summary.expense_total, Money::from_cents(i64::MAX));
        assert!(!summary.expense_total.is_negative());
        assert_eq!(summary.balance, Money::from_cents(-i64::MAX));
        assert_eq!(summary.categories[0].category, "Shopping");
        assert_eq!(summary.categories[0].percent, 100);
        assert_eq!(summary.categories[1].percent, 0);
    }

    #[test]
    fn test_percent_of_rounding() {
        let whole = Money::from_cents(200);
        assert_eq!(percent_of(Money::from_cents(1), whole), 1); // 0.5 rounds up
        assert_eq!(percent_of(Money::from_cents(3), whole), 2); // 1.5 rounds up
        assert_eq!(percent_of(Money::from_cents(2), Money::from_cents(3)), 67);
        assert_eq!(percent_of(Money::from_cents(1), Money::from_cents(3)), 33);
        assert_eq!(percent_of(Money::from_cents(5), Money::zero()), 0);
    }

    #[test]
    fn test_rounding_drift_is_bounded() {
        let transactions = vec![
            expense(1, "A"),
            expense(1, "B"),
            expense(1, "C"),
        ];
        let summary = SpendingSummary::generate(&transactions, &CategoryPalette::standard());

        assert!(summary.categories.iter().all(|c| c.percent == 33));
        assert_eq!(summary.percent_total(), 99);
    }

    #[test]
    fn test_top_categories() {
        let transactions = vec![expense(300, "A"), expense(200, "B"), expense(100, "C")];
        let summary = SpendingSummary::generate(&transactions, &CategoryPalette::standard());

        let top = summary.top_categories(2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].category, "A");
        assert_eq!(summary.top_categories(10).len(), 3);
    }
}
