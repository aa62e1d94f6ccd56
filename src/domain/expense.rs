use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::record::MonetaryRecord;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Expense {
    pub id: Uuid,
    pub amount: f64,
    pub category: String,
    pub description: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub recurring: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receipt_url: Option<String>,
}

impl Expense {
    pub fn new(
        amount: f64,
        category: impl Into<String>,
        description: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            amount,
            category: category.into(),
            description: description.into(),
            date,
            recurring: false,
            receipt_url: None,
        }
    }

    pub fn with_recurring(mut self, recurring: bool) -> Self {
        self.recurring = recurring;
        self
    }

    pub fn with_receipt(mut self, url: impl Into<String>) -> Self {
        self.receipt_url = Some(url.into());
        self
    }
}

impl MonetaryRecord for Expense {
    fn amount(&self) -> f64 {
        self.amount
    }

    fn date(&self) -> NaiveDate {
        self.date
    }

    fn is_recurring(&self) -> bool {
        self.recurring
    }
}
