// Date category
// Relationship of a date to "today", which keys every per-date style

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateCategory {
    Past,
    Current,
    Future,
}

impl DateCategory {
    pub fn classify(date: NaiveDate, today: NaiveDate) -> Self {
        match date.cmp(&today) {
            std::cmp::Ordering::Less => DateCategory::Past,
            std::cmp::Ordering::Equal => DateCategory::Current,
            std::cmp::Ordering::Greater => DateCategory::Future,
        }
    }

    pub fn is_past(self) -> bool {
        self == DateCategory::Past
    }
}
