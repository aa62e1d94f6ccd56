use chrono::NaiveDate;
use fintrack_core::domain::{Budget, Expense, Income};
use fintrack_core::period::Granularity;

pub fn sample_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn expense(amount: f64, category: &str, date: NaiveDate) -> Expense {
    Expense::new(amount, category, "", date)
}

pub fn recurring_expense(amount: f64, category: &str, date: NaiveDate) -> Expense {
    Expense::new(amount, category, "", date).with_recurring(true)
}

pub fn income(amount: f64, source: &str, date: NaiveDate) -> Income {
    Income::new(amount, source, "", date)
}

pub fn recurring_income(amount: f64, source: &str, date: NaiveDate) -> Income {
    Income::new(amount, source, "", date).with_recurring(true)
}

pub fn monthly_budget(category: &str, allocated: f64) -> Budget {
    Budget::new(category, allocated, Granularity::Monthly)
}
