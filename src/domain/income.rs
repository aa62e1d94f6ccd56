use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::record::MonetaryRecord;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Income {
    pub id: Uuid,
    pub amount: f64,
    pub source: String,
    pub description: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub recurring: bool,
}

impl Income {
    pub fn new(
        amount: f64,
        source: impl Into<String>,
        description: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            amount,
            source: source.into(),
            description: description.into(),
            date,
            recurring: false,
        }
    }

    pub fn with_recurring(mut self, recurring: bool) -> Self {
        self.recurring = recurring;
        self
    }
}

impl MonetaryRecord for Income {
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
