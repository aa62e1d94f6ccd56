use serde::{Deserialize, Serialize};

/// User preferences that shape report output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Settings {
    /// ISO 4217 code stamped onto reports.
    pub currency: String,
    pub locale: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency: "USD".into(),
            locale: "en-US".into(),
            theme: None,
        }
    }
}
