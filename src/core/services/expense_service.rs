use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use crate::clock::Clock;
use crate::domain::Expense;
use crate::period::{Granularity, PeriodToken};
use crate::summary::{round2, share_percent, summarize, PeriodSummary};

use super::ServiceResult;

/// One category's slice of a period's spending.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryShare {
    pub category: String,
    pub total: f64,
    /// Share of the period total, 0-100.
    pub percentage: f64,
}

pub struct ExpenseService;

impl ExpenseService {
    /// Summarizes spending for a textual period token such as `"April 2025"`.
    pub fn summarize(expenses: &[Expense], token: &str) -> ServiceResult<PeriodSummary> {
        let period: PeriodToken = token.parse()?;
        let summary = summarize(expenses, &period);
        debug!(period = %period, total = summary.total, "expense summary computed");
        Ok(summary)
    }

    /// Summarizes spending for the period containing the clock's today.
    pub fn current_summary(
        expenses: &[Expense],
        granularity: Granularity,
        clock: &dyn Clock,
    ) -> PeriodSummary {
        let period = PeriodToken::current(granularity, clock.today());
        summarize(expenses, &period)
    }

    /// Per-category totals within the period, largest first.
    pub fn category_breakdown(expenses: &[Expense], period: &PeriodToken) -> Vec<CategoryShare> {
        let range = period.resolve();
        let mut by_category: BTreeMap<&str, f64> = BTreeMap::new();
        let mut total = 0.0;
        for expense in expenses {
            if range.contains(expense.date) {
                *by_category.entry(expense.category.as_str()).or_insert(0.0) += expense.amount;
                total += expense.amount;
            }
        }
        let mut shares: Vec<CategoryShare> = by_category
            .into_iter()
            .map(|(category, category_total)| CategoryShare {
                category: category.to_string(),
                total: round2(category_total),
                percentage: round2(share_percent(category_total, total)),
            })
            .collect();
        shares.sort_by(|a, b| b.total.partial_cmp(&a.total).unwrap_or(Ordering::Equal));
        shares
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::clock::Clock;
    use crate::core::services::ServiceError;

    struct FixedClock(NaiveDate);

    impl Clock for FixedClock {
        fn now(&self) -> chrono::DateTime<chrono::Utc> {
            self.0.and_hms_opt(12, 0, 0).unwrap().and_utc()
        }
    }

    fn sample_date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 4, day).unwrap()
    }

    fn sample_expenses() -> Vec<Expense> {
        vec![
            Expense::new(100.0, "Rent", "flat", sample_date(1)).with_recurring(true),
            Expense::new(30.0, "Food", "groceries", sample_date(8)),
            Expense::new(20.0, "Food", "takeout", sample_date(19)),
            Expense::new(50.0, "Transport", "fuel", sample_date(22)),
        ]
    }

    #[test]
    fn summarize_parses_the_token_and_totals_the_period() {
        let summary = ExpenseService::summarize(&sample_expenses(), "April 2025").unwrap();
        assert_eq!(summary.total, 200.0);
        assert_eq!(summary.recurring_total, 100.0);
        assert_eq!(summary.recurring_percentage, 50.0);
    }

    #[test]
    fn summarize_surfaces_invalid_tokens() {
        let result = ExpenseService::summarize(&sample_expenses(), "Aprilish-2025");
        assert!(matches!(result, Err(ServiceError::Tracker(_))));
    }

    #[test]
    fn current_summary_uses_the_injected_clock() {
        let clock = FixedClock(sample_date(15));
        let summary =
            ExpenseService::current_summary(&sample_expenses(), Granularity::Monthly, &clock);
        assert_eq!(summary.period, "April 2025".parse().unwrap());
        assert_eq!(summary.total, 200.0);
    }

    #[test]
    fn category_breakdown_sorts_largest_first() {
        let period = "April 2025".parse().unwrap();
        let shares = ExpenseService::category_breakdown(&sample_expenses(), &period);
        assert_eq!(shares.len(), 3);
        assert_eq!(shares[0].category, "Rent");
        assert_eq!(shares[0].percentage, 50.0);
        assert_eq!(shares[1].category, "Food");
        assert_eq!(shares[1].total, 50.0);
        assert_eq!(shares[1].percentage, 25.0);
        assert_eq!(shares[2].category, "Transport");
    }

    #[test]
    fn category_breakdown_ignores_records_outside_the_period() {
        let mut expenses = sample_expenses();
        expenses.push(Expense::new(
            999.0,
            "Food",
            "last month",
            NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
        ));
        let period = "April 2025".parse().unwrap();
        let shares = ExpenseService::category_breakdown(&expenses, &period);
        let food = shares.iter().find(|s| s.category == "Food").unwrap();
        assert_eq!(food.total, 50.0);
    }

    #[test]
    fn category_breakdown_of_nothing_is_empty() {
        let period = "April 2025".parse().unwrap();
        assert!(ExpenseService::category_breakdown(&[], &period).is_empty());
    }
}
