//! Calendar helpers for monthly budget periods

use chrono::NaiveDate;

use crate::error::{Error, Result};

/// First and last calendar day of a month
///
/// Accounts for month length and leap years. Fails for a month outside 1-12
/// or a year chrono cannot represent.
pub fn month_date_range(year: i32, month: u32) -> Result<(NaiveDate, NaiveDate)> {
    validate_month(month)?;

    let start = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| Error::Validation(format!("Invalid year: {}", year)))?;

    // Day before the first of the following month
    let next_start = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    let end = next_start
        .and_then(|d| d.pred_opt())
        .ok_or_else(|| Error::Validation(format!("Invalid year: {}", year)))?;

    Ok((start, end))
}

/// Reject months outside 1-12
pub fn validate_month(month: u32) -> Result<()> {
    if (1..=12).contains(&month) {
        Ok(())
    } else {
        Err(Error::Validation(format!(
            "Month must be between 1 and 12, got {}",
            month
        )))
    }
}
