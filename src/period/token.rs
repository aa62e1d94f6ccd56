use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::TrackerError;

/// Canonical English month names in calendar order. Prefix lookups scan this
/// array front to back, so an ambiguous prefix such as `"Ju"` resolves to the
/// earliest match (June).
pub(crate) const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Period granularities supported by the tracker's reporting views.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Monthly,
    Quarterly,
    Yearly,
}

impl Granularity {
    /// Number of calendar months a period of this granularity spans; the flat
    /// divisor used when normalizing a period total to a monthly average.
    pub fn month_count(&self) -> u32 {
        match self {
            Granularity::Monthly => 1,
            Granularity::Quarterly => 3,
            Granularity::Yearly => 12,
        }
    }
}

/// A calendar period at monthly, quarterly, or yearly granularity.
///
/// The textual forms are `"April 2025"`, `"Q2 2025"`, and `"2025"`; parsing
/// and display round-trip. The variant itself fixes the granularity, so a
/// token can never be walked at a granularity that disagrees with its shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PeriodToken {
    /// A single month; `month` is 1-based.
    Month { year: i32, month: u32 },
    /// A calendar quarter; `quarter` is 1-4.
    Quarter { year: i32, quarter: u32 },
    /// A full calendar year.
    Year { year: i32 },
}

impl PeriodToken {
    pub fn granularity(&self) -> Granularity {
        match self {
            PeriodToken::Month { .. } => Granularity::Monthly,
            PeriodToken::Quarter { .. } => Granularity::Quarterly,
            PeriodToken::Year { .. } => Granularity::Yearly,
        }
    }

    /// Parses a token requiring full month names.
    ///
    /// The default [`FromStr`] accepts any prefix of a month name and settles
    /// ambiguity by calendar order; this variant rejects anything short of
    /// the canonical name (still case-insensitively).
    pub fn parse_exact(s: &str) -> Result<PeriodToken, TrackerError> {
        parse_token(s, MonthMatch::Exact)
    }
}

impl fmt::Display for PeriodToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            PeriodToken::Month { year, month } => {
                write!(f, "{} {}", MONTH_NAMES[(month - 1) as usize], year)
            }
            PeriodToken::Quarter { year, quarter } => write!(f, "Q{} {}", quarter, year),
            PeriodToken::Year { year } => write!(f, "{}", year),
        }
    }
}

impl FromStr for PeriodToken {
    type Err = TrackerError;

    /// Dispatches on token shape: anything containing `Q` is read as a
    /// quarter, a bare number as a year (which must have four digits), and
    /// everything else as a month name plus year. Month names match
    /// case-insensitively by prefix.
    fn from_str(s: &str) -> Result<PeriodToken, TrackerError> {
        parse_token(s, MonthMatch::Prefix)
    }
}

impl Serialize for PeriodToken {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PeriodToken {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

#[derive(Clone, Copy)]
enum MonthMatch {
    Prefix,
    Exact,
}

fn parse_token(s: &str, matching: MonthMatch) -> Result<PeriodToken, TrackerError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(TrackerError::invalid_token(s, "empty token"));
    }
    if trimmed.contains('Q') {
        return parse_quarter(s, trimmed);
    }
    if trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Ok(PeriodToken::Year {
            year: parse_year(s, trimmed)?,
        });
    }
    parse_month(s, trimmed, matching)
}

fn parse_quarter(raw: &str, trimmed: &str) -> Result<PeriodToken, TrackerError> {
    let rest = trimmed
        .strip_prefix('Q')
        .ok_or_else(|| TrackerError::invalid_token(raw, "expected `Q<1-4> <year>`"))?;
    let fields: Vec<&str> = rest.split_whitespace().collect();
    if fields.len() != 2 {
        return Err(TrackerError::invalid_token(raw, "expected `Q<1-4> <year>`"));
    }
    let quarter: u32 = fields[0]
        .parse()
        .map_err(|_| TrackerError::invalid_token(raw, "quarter must be a number"))?;
    if !(1..=4).contains(&quarter) {
        return Err(TrackerError::invalid_token(
            raw,
            "quarter must be between 1 and 4",
        ));
    }
    Ok(PeriodToken::Quarter {
        year: parse_year(raw, fields[1])?,
        quarter,
    })
}

fn parse_month(
    raw: &str,
    trimmed: &str,
    matching: MonthMatch,
) -> Result<PeriodToken, TrackerError> {
    let fields: Vec<&str> = trimmed.split_whitespace().collect();
    if fields.len() != 2 {
        return Err(TrackerError::invalid_token(
            raw,
            "expected `<month name> <year>`",
        ));
    }
    let needle = fields[0].to_ascii_lowercase();
    let index = MONTH_NAMES
        .iter()
        .position(|name| {
            let name = name.to_ascii_lowercase();
            match matching {
                MonthMatch::Prefix => name.starts_with(&needle),
                MonthMatch::Exact => name == needle,
            }
        })
        .ok_or_else(|| {
            TrackerError::invalid_token(raw, format!("`{}` is not a month name", fields[0]))
        })?;
    Ok(PeriodToken::Month {
        year: parse_year(raw, fields[1])?,
        month: index as u32 + 1,
    })
}

fn parse_year(raw: &str, field: &str) -> Result<i32, TrackerError> {
    if field.len() == 4 && field.bytes().all(|b| b.is_ascii_digit()) {
        if let Ok(year) = field.parse::<i32>() {
            return Ok(year);
        }
    }
    Err(TrackerError::invalid_token(raw, "year must be four digits"))
}
