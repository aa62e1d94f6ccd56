//! Rolling summaries over monetary records.
//!
//! Everything here is a pure fold over borrowed slices: a summary walks the
//! records once, bucketing each into the requested period or the one before
//! it, and derives totals, the recurring share, growth against the prior
//! period, and a flat monthly average. Budget usage and multi-period trends
//! build on the same period resolution.

use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::{Budget, Expense, MonetaryRecord};
use crate::period::{Granularity, PeriodToken};

/// Aggregated view of one period, shaped for the tracker's summary cards.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodSummary {
    pub total: f64,
    pub recurring_total: f64,
    /// Share of the total carried by recurring records, 0-100.
    pub recurring_percentage: f64,
    /// Total normalized by the period length in months.
    pub average_monthly: f64,
    /// Signed change against the immediately preceding period, in percent.
    /// Zero when the preceding period had no activity.
    pub growth_percentage: f64,
    pub period: PeriodToken,
    pub period_type: Granularity,
}

/// Summarizes `records` for `period` in a single pass.
///
/// Records outside both `period` and the period before it are ignored. All
/// monetary outputs are rounded to two decimal places.
pub fn summarize<R: MonetaryRecord>(records: &[R], period: &PeriodToken) -> PeriodSummary {
    let current = period.resolve();
    let previous = period.previous().resolve();

    let mut total = 0.0;
    let mut recurring_total = 0.0;
    let mut previous_total = 0.0;
    for record in records {
        let date = record.date();
        if current.contains(date) {
            total += record.amount();
            if record.is_recurring() {
                recurring_total += record.amount();
            }
        } else if previous.contains(date) {
            previous_total += record.amount();
        }
    }

    PeriodSummary {
        total: round2(total),
        recurring_total: round2(recurring_total),
        recurring_percentage: round2(share_percent(recurring_total, total)),
        average_monthly: round2(total / period.granularity().month_count() as f64),
        growth_percentage: round2(growth_percent(total, previous_total)),
        period: *period,
        period_type: period.granularity(),
    }
}

/// Health tiers for budget consumption, mildest first. Serialized as the
/// labels the tracker's badges show.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum BudgetStatus {
    #[serde(rename = "Under Budget")]
    UnderBudget,
    #[serde(rename = "On Track")]
    OnTrack,
    #[serde(rename = "At Risk")]
    AtRisk,
    #[serde(rename = "Over Budget")]
    OverBudget,
}

impl BudgetStatus {
    /// Classifies a consumption percentage. The thresholds are strict, so
    /// exactly 75, 90, and 100 percent land in the milder tier.
    pub fn classify(percentage_used: f64) -> BudgetStatus {
        if percentage_used > 100.0 {
            BudgetStatus::OverBudget
        } else if percentage_used > 90.0 {
            BudgetStatus::AtRisk
        } else if percentage_used > 75.0 {
            BudgetStatus::OnTrack
        } else {
            BudgetStatus::UnderBudget
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BudgetStatus::UnderBudget => "Under Budget",
            BudgetStatus::OnTrack => "On Track",
            BudgetStatus::AtRisk => "At Risk",
            BudgetStatus::OverBudget => "Over Budget",
        }
    }
}

impl fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One budget's consumption within a period.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetUsage {
    pub category: String,
    pub allocated: f64,
    pub spent: f64,
    /// Negative once the budget is overspent.
    pub remaining: f64,
    pub percentage_used: f64,
    pub status: BudgetStatus,
    pub period: PeriodToken,
}

/// Computes consumption for every budget whose period length matches the
/// token's granularity; budgets at other granularities are skipped. A budget
/// with nothing allocated reports zero percent used.
pub fn budget_usage(
    budgets: &[Budget],
    expenses: &[Expense],
    period: &PeriodToken,
) -> Vec<BudgetUsage> {
    let range = period.resolve();
    budgets
        .iter()
        .filter(|budget| budget.period == period.granularity())
        .map(|budget| {
            let spent: f64 = expenses
                .iter()
                .filter(|expense| {
                    expense.category == budget.category && range.contains(expense.date)
                })
                .map(|expense| expense.amount)
                .sum();
            let percentage_used = round2(share_percent(spent, budget.allocated));
            BudgetUsage {
                category: budget.category.clone(),
                allocated: round2(budget.allocated),
                spent: round2(spent),
                remaining: round2(budget.allocated - spent),
                percentage_used,
                status: BudgetStatus::classify(percentage_used),
                period: *period,
            }
        })
        .collect()
}

/// A period and the sum of record amounts that fall inside it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodTotal {
    pub period: PeriodToken,
    pub total: f64,
}

/// Totals per candidate period around `today`, ascending, for trend charts.
pub fn trend<R: MonetaryRecord>(
    records: &[R],
    granularity: Granularity,
    today: NaiveDate,
) -> Vec<PeriodTotal> {
    PeriodToken::enumerate(granularity, today)
        .into_iter()
        .map(|period| {
            let range = period.resolve();
            let total: f64 = records
                .iter()
                .filter(|record| range.contains(record.date()))
                .map(|record| record.amount())
                .sum();
            PeriodTotal {
                period,
                total: round2(total),
            }
        })
        .collect()
}

/// Rounds to two decimal places, the precision every summary field reports.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Percentage of `whole` that `part` represents; zero when `whole` is not
/// positive rather than a division error.
pub(crate) fn share_percent(part: f64, whole: f64) -> f64 {
    if whole > 0.0 {
        part / whole * 100.0
    } else {
        0.0
    }
}

fn growth_percent(current: f64, previous: f64) -> f64 {
    if previous > 0.0 {
        (current - previous) / previous * 100.0
    } else {
        0.0
    }
}
