//! Common parameter handling shared across Fitbit tools.
//!
//! Fitbit resource endpoints are date-parameterized; this module provides
//! the shared date validation and the schema descriptions tools attach to
//! their parameters.

use chrono::NaiveDate;

use crate::domains::tools::error::ToolError;

/// Fitbit accepts the literal string "today" wherever a date is expected.
pub const TODAY: &str = "today";

/// Check whether a string is a calendar date in YYYY-MM-DD format.
pub fn is_iso_date(value: &str) -> bool {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok()
}

/// Validate a single date parameter.
pub fn validate_date(value: &str) -> Result<(), ToolError> {
    if value == TODAY || is_iso_date(value) {
        Ok(())
    } else {
        Err(ToolError::invalid_arguments(format!(
            "date must be YYYY-MM-DD or 'today', got '{}'",
            value
        )))
    }
}

/// Validate a date-range parameter pair.
///
/// When both bounds are literal dates the start must not come after the end;
/// "today" bounds are accepted as-is since their resolution happens remotely.
pub fn validate_date_range(start: &str, end: &str) -> Result<(), ToolError> {
    validate_date(start)?;
    validate_date(end)?;

    if let (Ok(start_date), Ok(end_date)) = (
        NaiveDate::parse_from_str(start, "%Y-%m-%d"),
        NaiveDate::parse_from_str(end, "%Y-%m-%d"),
    ) {
        if start_date > end_date {
            return Err(ToolError::invalid_arguments(format!(
                "start date {} is after end date {}",
                start, end
            )));
        }
    }

    Ok(())
}

/// Default page size for list endpoints.
pub fn default_limit() -> u32 {
    20
}

/// Clamp a requested page size to the range Fitbit accepts (1-100).
pub fn clamp_limit(limit: u32) -> u32 {
    limit.clamp(1, 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_iso_date_valid() {
        assert!(is_iso_date("2023-01-15"));
        assert!(is_iso_date("2024-02-29")); // leap day
    }

    #[test]
    fn test_is_iso_date_invalid() {
        assert!(!is_iso_date("2023-02-30")); // no such day
        assert!(!is_iso_date("15-01-2023"));
        assert!(!is_iso_date("2023/01/15"));
        assert!(!is_iso_date("today"));
        assert!(!is_iso_date(""));
    }

    #[test]
    fn test_validate_date_accepts_today() {
        assert!(validate_date("today").is_ok());
        assert!(validate_date("2023-01-15").is_ok());
    }

    #[test]
    fn test_validate_date_rejects_garbage() {
        let err = validate_date("yesterday").unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments(_)));
        assert!(err.to_string().contains("yesterday"));
    }

    #[test]
    fn test_validate_date_range_ordering() {
        assert!(validate_date_range("2023-01-01", "2023-01-07").is_ok());
        assert!(validate_date_range("2023-01-01", "2023-01-01").is_ok());
        assert!(validate_date_range("2023-01-07", "2023-01-01").is_err());
    }

    #[test]
    fn test_validate_date_range_with_today_bounds() {
        assert!(validate_date_range("2023-01-01", "today").is_ok());
        assert!(validate_date_range("today", "today").is_ok());
    }

    #[test]
    fn test_clamp_limit() {
        assert_eq!(clamp_limit(0), 1);
        assert_eq!(clamp_limit(20), 20);
        assert_eq!(clamp_limit(500), 100);
    }
}
