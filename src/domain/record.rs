use chrono::NaiveDate;

/// A dated monetary entry. Expenses and incomes both implement this, which
/// lets summaries and trends run over either stream with the same code.
pub trait MonetaryRecord {
    fn amount(&self) -> f64;
    fn date(&self) -> NaiveDate;
    /// Whether the record repeats every period (rent, salary) as opposed to
    /// being a one-off.
    fn is_recurring(&self) -> bool;
}
