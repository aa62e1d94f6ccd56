use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::period::Granularity;

/// A spending limit for one category over one period length. The limit
/// applies to every period of that length, not to a specific one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Budget {
    pub id: Uuid,
    pub category: String,
    pub allocated: f64,
    pub period: Granularity,
}

impl Budget {
    pub fn new(category: impl Into<String>, allocated: f64, period: Granularity) -> Self {
        Self {
            id: Uuid::new_v4(),
            category: category.into(),
            allocated,
            period,
        }
    }
}
