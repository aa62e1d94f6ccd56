//! CSV export of expense and income records, shaped for spreadsheet import.

use std::io::Write;

use serde::Serialize;

use crate::domain::{Expense, Income};
use crate::errors::TrackerError;

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct ExpenseRow<'a> {
    date: String,
    category: &'a str,
    description: &'a str,
    amount: f64,
    recurring: &'static str,
}

impl<'a> From<&'a Expense> for ExpenseRow<'a> {
    fn from(expense: &'a Expense) -> Self {
        Self {
            date: expense.date.format(DATE_FORMAT).to_string(),
            category: &expense.category,
            description: &expense.description,
            amount: expense.amount,
            recurring: flag(expense.recurring),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct IncomeRow<'a> {
    date: String,
    source: &'a str,
    description: &'a str,
    amount: f64,
    recurring: &'static str,
}

impl<'a> From<&'a Income> for IncomeRow<'a> {
    fn from(income: &'a Income) -> Self {
        Self {
            date: income.date.format(DATE_FORMAT).to_string(),
            source: &income.source,
            description: &income.description,
            amount: income.amount,
            recurring: flag(income.recurring),
        }
    }
}

fn flag(recurring: bool) -> &'static str {
    if recurring {
        "yes"
    } else {
        "no"
    }
}

/// Writes expenses as CSV with a header row, one line per record.
pub fn write_expenses_csv<W: Write>(writer: W, expenses: &[Expense]) -> Result<(), TrackerError> {
    let mut wtr = csv::Writer::from_writer(writer);
    for expense in expenses {
        wtr.serialize(ExpenseRow::from(expense))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Renders expenses to an in-memory CSV string.
pub fn expenses_csv(expenses: &[Expense]) -> Result<String, TrackerError> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    for expense in expenses {
        wtr.serialize(ExpenseRow::from(expense))?;
    }
    let bytes = wtr
        .into_inner()
        .map_err(|err| TrackerError::Io(err.into_error()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Writes incomes as CSV with a header row, one line per record.
pub fn write_incomes_csv<W: Write>(writer: W, incomes: &[Income]) -> Result<(), TrackerError> {
    let mut wtr = csv::Writer::from_writer(writer);
    for income in incomes {
        wtr.serialize(IncomeRow::from(income))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Renders incomes to an in-memory CSV string.
pub fn incomes_csv(incomes: &[Income]) -> Result<String, TrackerError> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    for income in incomes {
        wtr.serialize(IncomeRow::from(income))?;
    }
    let bytes = wtr
        .into_inner()
        .map_err(|err| TrackerError::Io(err.into_error()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
