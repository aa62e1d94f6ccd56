use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SavingsGoal {
    pub id: Uuid,
    pub name: String,
    pub target_amount: f64,
    #[serde(default)]
    pub saved_amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_date: Option<NaiveDate>,
}

impl SavingsGoal {
    pub fn new(name: impl Into<String>, target_amount: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            target_amount,
            saved_amount: 0.0,
            target_date: None,
        }
    }

    pub fn with_target_date(mut self, date: NaiveDate) -> Self {
        self.target_date = Some(date);
        self
    }

    pub fn with_saved(mut self, amount: f64) -> Self {
        self.saved_amount = amount;
        self
    }
}
