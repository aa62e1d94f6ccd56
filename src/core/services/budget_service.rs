use tracing::debug;

use crate::clock::Clock;
use crate::domain::{Budget, Expense};
use crate::period::{Granularity, PeriodToken};
use crate::summary::{budget_usage, BudgetUsage};

use super::ServiceResult;

pub struct BudgetService;

impl BudgetService {
    /// Budget consumption for a textual period token. Only budgets defined at
    /// the token's granularity participate.
    pub fn usage(
        budgets: &[Budget],
        expenses: &[Expense],
        token: &str,
    ) -> ServiceResult<Vec<BudgetUsage>> {
        let period: PeriodToken = token.parse()?;
        Ok(Self::usage_for(budgets, expenses, &period))
    }

    pub fn usage_for(
        budgets: &[Budget],
        expenses: &[Expense],
        period: &PeriodToken,
    ) -> Vec<BudgetUsage> {
        let usage = budget_usage(budgets, expenses, period);
        debug!(period = %period, budgets = usage.len(), "budget usage computed");
        usage
    }

    /// Budget consumption for the period containing the clock's today.
    pub fn current_usage(
        budgets: &[Budget],
        expenses: &[Expense],
        granularity: Granularity,
        clock: &dyn Clock,
    ) -> Vec<BudgetUsage> {
        let period = PeriodToken::current(granularity, clock.today());
        Self::usage_for(budgets, expenses, &period)
    }
}
