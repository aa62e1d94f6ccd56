use serde::Serialize;
use tracing::debug;

use crate::clock::Clock;
use crate::config::Settings;
use crate::domain::{Expense, Income, MonetaryRecord};
use crate::period::{Granularity, PeriodToken};
use crate::summary::{self, round2, share_percent, PeriodTotal};

use super::ServiceResult;

/// Income against spending for one period.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CashFlowReport {
    pub period: PeriodToken,
    pub income_total: f64,
    pub expense_total: f64,
    /// Income minus spending; negative when the period ran at a loss.
    pub net: f64,
    /// Net as a share of income, 0-100 and negative for a loss; zero when
    /// the period had no income.
    pub savings_rate: f64,
    pub currency: String,
}

pub struct ReportService;

impl ReportService {
    /// Cash flow for a textual period token.
    pub fn cash_flow(
        expenses: &[Expense],
        incomes: &[Income],
        token: &str,
        settings: &Settings,
    ) -> ServiceResult<CashFlowReport> {
        let period: PeriodToken = token.parse()?;
        Ok(Self::cash_flow_for(expenses, incomes, &period, settings))
    }

    pub fn cash_flow_for(
        expenses: &[Expense],
        incomes: &[Income],
        period: &PeriodToken,
        settings: &Settings,
    ) -> CashFlowReport {
        let range = period.resolve();
        let expense_total: f64 = expenses
            .iter()
            .filter(|expense| range.contains(expense.date))
            .map(|expense| expense.amount)
            .sum();
        let income_total: f64 = incomes
            .iter()
            .filter(|income| range.contains(income.date))
            .map(|income| income.amount)
            .sum();
        let net = income_total - expense_total;
        debug!(period = %period, net, "cash flow computed");
        CashFlowReport {
            period: *period,
            income_total: round2(income_total),
            expense_total: round2(expense_total),
            net: round2(net),
            savings_rate: round2(share_percent(net, income_total)),
            currency: settings.currency.clone(),
        }
    }

    /// Totals per candidate period around the clock's today, for trend
    /// charts over either record stream.
    pub fn trend<R: MonetaryRecord>(
        records: &[R],
        granularity: Granularity,
        clock: &dyn Clock,
    ) -> Vec<PeriodTotal> {
        summary::trend(records, granularity, clock.today())
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn sample_date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 4, day).unwrap()
    }

    fn sample_settings() -> Settings {
        Settings::default()
    }

    #[test]
    fn cash_flow_nets_income_against_spending() {
        let expenses = vec![
            Expense::new(800.0, "Rent", "flat", sample_date(1)),
            Expense::new(200.0, "Food", "groceries", sample_date(12)),
        ];
        let incomes = vec![Income::new(2000.0, "Employer", "salary", sample_date(25))];
        let report =
            ReportService::cash_flow(&expenses, &incomes, "April 2025", &sample_settings())
                .unwrap();
        assert_eq!(report.income_total, 2000.0);
        assert_eq!(report.expense_total, 1000.0);
        assert_eq!(report.net, 1000.0);
        assert_eq!(report.savings_rate, 50.0);
        assert_eq!(report.currency, "USD");
    }

    #[test]
    fn loss_periods_report_a_negative_savings_rate() {
        let expenses = vec![Expense::new(1500.0, "Rent", "flat", sample_date(1))];
        let incomes = vec![Income::new(1000.0, "Employer", "salary", sample_date(25))];
        let report =
            ReportService::cash_flow(&expenses, &incomes, "April 2025", &sample_settings())
                .unwrap();
        assert_eq!(report.net, -500.0);
        assert_eq!(report.savings_rate, -50.0);
    }

    #[test]
    fn no_income_means_a_zero_savings_rate() {
        let expenses = vec![Expense::new(100.0, "Food", "groceries", sample_date(5))];
        let report = ReportService::cash_flow(&expenses, &[], "April 2025", &sample_settings())
            .unwrap();
        assert_eq!(report.net, -100.0);
        assert_eq!(report.savings_rate, 0.0);
    }

    #[test]
    fn cash_flow_rejects_bad_tokens() {
        assert!(ReportService::cash_flow(&[], &[], "whenever", &sample_settings()).is_err());
    }

    #[test]
    fn trend_runs_over_the_clock_today() {
        struct April;
        impl Clock for April {
            fn now(&self) -> chrono::DateTime<chrono::Utc> {
                sample_date(15).and_hms_opt(10, 0, 0).unwrap().and_utc()
            }
        }
        let expenses = vec![Expense::new(60.0, "Food", "groceries", sample_date(2))];
        let points = ReportService::trend(&expenses, Granularity::Yearly, &April);
        assert_eq!(points.len(), 5);
        assert_eq!(points[2].period, "2025".parse().unwrap());
        assert_eq!(points[2].total, 60.0);
    }
}
