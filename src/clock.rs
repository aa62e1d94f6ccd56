use chrono::{DateTime, NaiveDate, Utc};

/// Clock abstracts access to the current timestamp so period math stays
/// deterministic in tests. Core period functions take a date argument
/// directly; this seam is for callers sitting at the UI edge.
pub trait Clock: Send + Sync {
    /// Returns the current UTC timestamp.
    fn now(&self) -> DateTime<Utc>;

    /// Returns the current UTC date. Defaults to `now().date_naive()`.
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

/// Real-time clock backed by the system UTC time source.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
