use tracing::debug;

use crate::clock::Clock;
use crate::domain::Income;
use crate::period::{Granularity, PeriodToken};
use crate::summary::{summarize, PeriodSummary};

use super::ServiceResult;

pub struct IncomeService;

impl IncomeService {
    /// Summarizes income for a textual period token. Salary-style recurring
    /// entries feed the summary's recurring share.
    pub fn summarize(incomes: &[Income], token: &str) -> ServiceResult<PeriodSummary> {
        let period: PeriodToken = token.parse()?;
        let summary = summarize(incomes, &period);
        debug!(period = %period, total = summary.total, "income summary computed");
        Ok(summary)
    }

    /// Summarizes income for the period containing the clock's today.
    pub fn current_summary(
        incomes: &[Income],
        granularity: Granularity,
        clock: &dyn Clock,
    ) -> PeriodSummary {
        let period = PeriodToken::current(granularity, clock.today());
        summarize(incomes, &period)
    }
}
