use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::period::{Granularity, PeriodToken};

/// How many months the monthly picker reaches either side of today.
const MONTH_PICKER_REACH: usize = 6;
/// How many years the yearly picker reaches either side of today.
const YEAR_PICKER_REACH: i32 = 2;

/// An inclusive range of calendar days.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

impl PeriodToken {
    /// Resolves the token to its inclusive calendar range.
    pub fn resolve(&self) -> DateRange {
        match *self {
            PeriodToken::Month { year, month } => DateRange {
                start: first_day_of_month(year, month),
                end: last_day_of_month(year, month),
            },
            PeriodToken::Quarter { year, quarter } => {
                let start_month = (quarter - 1) * 3 + 1;
                DateRange {
                    start: first_day_of_month(year, start_month),
                    end: last_day_of_month(year, start_month + 2),
                }
            }
            PeriodToken::Year { year } => DateRange {
                start: first_day_of_month(year, 1),
                end: last_day_of_month(year, 12),
            },
        }
    }

    /// The period immediately before this one, rolling the year at the
    /// January, Q1, and year boundaries.
    pub fn previous(&self) -> PeriodToken {
        match *self {
            PeriodToken::Month { year, month } => {
                if month == 1 {
                    PeriodToken::Month {
                        year: year - 1,
                        month: 12,
                    }
                } else {
                    PeriodToken::Month {
                        year,
                        month: month - 1,
                    }
                }
            }
            PeriodToken::Quarter { year, quarter } => {
                if quarter == 1 {
                    PeriodToken::Quarter {
                        year: year - 1,
                        quarter: 4,
                    }
                } else {
                    PeriodToken::Quarter {
                        year,
                        quarter: quarter - 1,
                    }
                }
            }
            PeriodToken::Year { year } => PeriodToken::Year { year: year - 1 },
        }
    }

    /// The period immediately after this one; exact inverse of
    /// [`previous`](Self::previous).
    pub fn next(&self) -> PeriodToken {
        match *self {
            PeriodToken::Month { year, month } => {
                if month == 12 {
                    PeriodToken::Month {
                        year: year + 1,
                        month: 1,
                    }
                } else {
                    PeriodToken::Month {
                        year,
                        month: month + 1,
                    }
                }
            }
            PeriodToken::Quarter { year, quarter } => {
                if quarter == 4 {
                    PeriodToken::Quarter {
                        year: year + 1,
                        quarter: 1,
                    }
                } else {
                    PeriodToken::Quarter {
                        year,
                        quarter: quarter + 1,
                    }
                }
            }
            PeriodToken::Year { year } => PeriodToken::Year { year: year + 1 },
        }
    }

    /// The period containing `today` at the requested granularity.
    pub fn current(granularity: Granularity, today: NaiveDate) -> PeriodToken {
        match granularity {
            Granularity::Monthly => PeriodToken::Month {
                year: today.year(),
                month: today.month(),
            },
            Granularity::Quarterly => PeriodToken::Quarter {
                year: today.year(),
                quarter: (today.month() - 1) / 3 + 1,
            },
            Granularity::Yearly => PeriodToken::Year { year: today.year() },
        }
    }

    /// Ascending candidate periods around `today` for a period picker:
    /// thirteen months centered on the current one, the twelve quarters of
    /// last year through next year, or five years centered on the current
    /// one.
    pub fn enumerate(granularity: Granularity, today: NaiveDate) -> Vec<PeriodToken> {
        let current = PeriodToken::current(granularity, today);
        match granularity {
            Granularity::Monthly => {
                let mut token = current;
                for _ in 0..MONTH_PICKER_REACH {
                    token = token.previous();
                }
                let mut periods = Vec::with_capacity(MONTH_PICKER_REACH * 2 + 1);
                for _ in 0..MONTH_PICKER_REACH * 2 + 1 {
                    periods.push(token);
                    token = token.next();
                }
                periods
            }
            Granularity::Quarterly => {
                let year = today.year();
                let mut periods = Vec::with_capacity(12);
                for y in year - 1..=year + 1 {
                    for quarter in 1..=4 {
                        periods.push(PeriodToken::Quarter { year: y, quarter });
                    }
                }
                periods
            }
            Granularity::Yearly => {
                let year = today.year();
                (year - YEAR_PICKER_REACH..=year + YEAR_PICKER_REACH)
                    .map(|y| PeriodToken::Year { year: y })
                    .collect()
            }
        }
    }
}

fn first_day_of_month(year: i32, month: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, 1).unwrap()
}

/// Last day of the month, computed as the day before the first of the next
/// month so leap Februaries come out right.
fn last_day_of_month(year: i32, month: u32) -> NaiveDate {
    let first_of_next = if month == 12 {
        first_day_of_month(year + 1, 1)
    } else {
        first_day_of_month(year, month + 1)
    };
    first_of_next - Duration::days(1)
}
