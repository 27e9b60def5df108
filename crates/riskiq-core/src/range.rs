//! Date windows for feed-style endpoints.

use crate::{Params, Result, RiskIqError};
use chrono::{Duration, NaiveDate, Utc};

/// Query parameter for the first day of the window
pub const START_PARAM: &str = "startDateInclusive";

/// Query parameter for the day after the window
pub const END_PARAM: &str = "endDateExclusive";

/// A half-open range of calendar days `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Range between two days, end exclusive
    pub fn between(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if end < start {
            return Err(RiskIqError::InvalidParameter(format!(
                "date range ends ({end}) before it starts ({start})"
            )));
        }
        Ok(Self { start, end })
    }

    /// The last `days` days including today (UTC)
    pub fn last_days(days: u32) -> Result<Self> {
        let today = Utc::now().date_naive();
        let end = today
            .checked_add_signed(Duration::days(1))
            .ok_or_else(|| RiskIqError::InvalidParameter(format!("no day after {today}")))?;
        let start = end
            .checked_sub_signed(Duration::days(i64::from(days)))
            .ok_or_else(|| {
                RiskIqError::InvalidParameter(format!("{days} days back is out of range"))
            })?;
        Ok(Self { start, end })
    }

    /// Parse `YYYY-MM-DD` bounds
    pub fn parse(start: &str, end: &str) -> Result<Self> {
        Self::between(parse_day(start)?, parse_day(end)?)
    }

    /// First day in the range
    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// First day after the range
    #[must_use]
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// Query parameters describing this range
    #[must_use]
    pub fn params(&self) -> Params {
        Params::new()
            .with(START_PARAM, self.start.format("%Y-%m-%d").to_string())
            .with(END_PARAM, self.end.format("%Y-%m-%d").to_string())
    }
}

fn parse_day(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| RiskIqError::InvalidParameter(format!("invalid date {s:?}: {e}")))
}

/// Parameters for an optional range (empty when absent)
#[must_use]
pub fn range_params(range: Option<&DateRange>) -> Params {
    range.map(DateRange::params).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params() {
        let range = DateRange::parse("2015-01-01", "2015-01-08").unwrap();
        assert_eq!(
            range.params(),
            Params::new()
                .with("startDateInclusive", "2015-01-01")
                .with("endDateExclusive", "2015-01-08")
        );
    }

    #[test]
    fn test_last_days() {
        let range = DateRange::last_days(7).unwrap();
        assert_eq!(range.end() - range.start(), Duration::days(7));
        assert!(range.end() > Utc::now().date_naive());
    }

    #[test]
    fn test_last_days_out_of_range() {
        let err = DateRange::last_days(u32::MAX).unwrap_err();
        assert!(matches!(err, RiskIqError::InvalidParameter(_)));
    }

    #[test]
    fn test_reversed_range() {
        assert!(DateRange::parse("2015-02-01", "2015-01-01").is_err());
        assert!(DateRange::parse("yesterday", "2015-01-01").is_err());
    }
}
