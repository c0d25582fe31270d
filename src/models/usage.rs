//! Compute usage (quota) models from `az vm list-usage`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A usage count. The CLI reports counts as strings, the REST API as numbers.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum Count {
    Number(i64),
    Float(f64),
    Text(String),
}

impl Count {
    /// Integer value of the count, `None` if it is not numeric.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Count::Number(n) => Some(*n),
            Count::Float(f) if f.is_finite() => Some(f.round() as i64),
            Count::Float(_) => None,
            Count::Text(s) => {
                let s = s.trim();
                s.parse::<i64>().ok().or_else(|| {
                    s.parse::<f64>()
                        .ok()
                        .filter(|f| f.is_finite())
                        .map(|f| f.round() as i64)
                })
            }
        }
    }
}

impl fmt::Display for Count {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Count::Number(n) => write!(f, "{n}"),
            Count::Float(x) => write!(f, "{x}"),
            Count::Text(s) => f.write_str(s),
        }
    }
}

/// Name of a usage entry.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UsageName {
    /// Machine name, e.g. `cores` or `standardDSv3Family`.
    pub value: String,
    #[serde(default)]
    pub localized_value: Option<String>,
}

/// One countable resource in a region.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UsageEntry {
    pub name: UsageName,
    pub current_value: Count,
    pub limit: Count,
    #[serde(default)]
    pub local_name: Option<String>,
}

/// A usage entry with its remaining capacity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuotaReport {
    pub name: String,
    pub current: i64,
    pub limit: i64,
    /// `limit - current`, negative when over quota.
    pub available: i64,
}

impl QuotaReport {
    /// `None` when `limit - current` does not fit in an `i64`.
    pub fn new(name: &str, current: i64, limit: i64) -> Option<QuotaReport> {
        Some(QuotaReport {
            name: name.to_string(),
            current,
            limit,
            available: limit.checked_sub(current)?,
        })
    }
}

impl fmt::Display for QuotaReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Current={}, Limit={}, Available={}",
            self.current, self.limit, self.available
        )
    }
}
