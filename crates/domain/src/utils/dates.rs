//! Date parameters for history queries
//!
//! Callers pass dates as `YYYY-MM-DD-<UTC offset>` (for example
//! `2018-07-28-+0300`); the service expects a full ISO-8601 timestamp at
//! midnight in that offset.

use chrono::DateTime;

use crate::{QiwiError, Result};

const DATE_PART_LEN: usize = "YYYY-MM-DD".len();

/// Normalize a `YYYY-MM-DD-<offset>` date to `YYYY-MM-DDT00:00:00±HH:MM`.
///
/// `None` passes through so that no query field is emitted.
///
/// # Errors
/// Returns [`QiwiError::InvalidArgument`] if the input is not a calendar date
/// followed by `-` and a `±HHMM` offset.
pub fn normalize_date(date: Option<&str>) -> Result<Option<String>> {
    let Some(date) = date else {
        return Ok(None);
    };

    let invalid = || {
        QiwiError::InvalidArgument(format!(
            "Unexpected date: {date} (expected YYYY-MM-DD-<UTC offset>)"
        ))
    };

    let day = date.get(..DATE_PART_LEN).ok_or_else(invalid)?;
    let offset = date
        .get(DATE_PART_LEN..)
        .and_then(|rest| rest.strip_prefix('-'))
        .ok_or_else(invalid)?;

    let parsed = DateTime::parse_from_str(&format!("{day}T00:00:00{offset}"), "%Y-%m-%dT%H:%M:%S%z")
        .map_err(|_| invalid())?;

    Ok(Some(parsed.to_rfc3339()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_moscow_offset() {
        assert_eq!(
            normalize_date(Some("2018-07-28-+0300")).unwrap().as_deref(),
            Some("2018-07-28T00:00:00+03:00")
        );
    }

    #[test]
    fn normalizes_utc_and_negative_offsets() {
        assert_eq!(
            normalize_date(Some("2019-01-01-+0000")).unwrap().as_deref(),
            Some("2019-01-01T00:00:00+00:00")
        );
        assert_eq!(
            normalize_date(Some("2019-12-31--0530")).unwrap().as_deref(),
            Some("2019-12-31T00:00:00-05:30")
        );
    }

    #[test]
    fn absent_date_stays_absent() {
        assert_eq!(normalize_date(None).unwrap(), None);
    }

    #[test]
    fn rejects_malformed_dates() {
        for input in ["", "2018-07-28", "2018-07-28+0300", "2018-13-01-+0300", "28.07.2018-+0300", "2018-07-28-Z"]
        {
            assert!(
                matches!(normalize_date(Some(input)), Err(QiwiError::InvalidArgument(_))),
                "{input}"
            );
        }
    }
}
