#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use daylog::libs::validate::{validate_cutoff_date, validate_http_port, ValidationError};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    #[test]
    fn test_cutoff_rejects_empty_input() {
        assert_eq!(validate_cutoff_date("", today()), Err(ValidationError::EmptyCutoffDate));
    }

    #[test]
    fn test_cutoff_rejects_bad_format() {
        for input in ["2024/01/01", "24-01-01", "2024-1-01", "2024-01-1", "20240101", "january"] {
            assert_eq!(
                validate_cutoff_date(input, today()),
                Err(ValidationError::CutoffDateFormat(input.to_string())),
                "input: {}",
                input
            );
        }
    }

    #[test]
    fn test_cutoff_rejects_impossible_calendar_dates() {
        for input in ["2024-02-31", "2023-02-29", "2024-13-01", "2024-00-10", "2024-04-31"] {
            assert_eq!(
                validate_cutoff_date(input, today()),
                Err(ValidationError::CutoffDateNotReal(input.to_string())),
                "input: {}",
                input
            );
        }
    }

    #[test]
    fn test_cutoff_rejects_year_out_of_range() {
        assert_eq!(
            validate_cutoff_date("1969-12-31", today()),
            Err(ValidationError::CutoffYearOutOfRange { year: 1969, max_year: 2024 })
        );
        assert_eq!(
            validate_cutoff_date("2025-01-01", today()),
            Err(ValidationError::CutoffYearOutOfRange { year: 2025, max_year: 2024 })
        );
    }

    #[test]
    fn test_cutoff_rejects_future_date() {
        // Future but within the current year, so the year check passes first
        assert_eq!(
            validate_cutoff_date("2024-07-01", today()),
            Err(ValidationError::CutoffDateInFuture("2024-07-01".to_string()))
        );
        assert_eq!(
            validate_cutoff_date("2024-06-16", today()),
            Err(ValidationError::CutoffDateInFuture("2024-06-16".to_string()))
        );
    }

    #[test]
    fn test_cutoff_rejects_too_recent_date() {
        // 29 days old and today itself are both too recent
        assert_eq!(
            validate_cutoff_date("2024-05-17", today()),
            Err(ValidationError::CutoffDateTooRecent("2024-05-17".to_string()))
        );
        assert_eq!(
            validate_cutoff_date("2024-06-15", today()),
            Err(ValidationError::CutoffDateTooRecent("2024-06-15".to_string()))
        );
    }

    #[test]
    fn test_cutoff_accepts_thirty_days_or_older() {
        // Exactly 30 days before today is the boundary and passes
        assert_eq!(validate_cutoff_date("2024-05-16", today()), Ok("2024-05-16"));
        assert_eq!(validate_cutoff_date("2024-01-01", today()), Ok("2024-01-01"));
        assert_eq!(validate_cutoff_date("1970-01-01", today()), Ok("1970-01-01"));
    }

    #[test]
    fn test_cutoff_returns_input_unchanged() {
        let input = "2023-12-24";
        let output = validate_cutoff_date(input, today()).unwrap();
        assert!(std::ptr::eq(input, output));
    }

    #[test]
    fn test_cutoff_violations_have_distinct_messages() {
        let violations = [
            validate_cutoff_date("", today()),
            validate_cutoff_date("bogus-date", today()),
            validate_cutoff_date("2024-02-31", today()),
            validate_cutoff_date("1969-01-01", today()),
            validate_cutoff_date("2024-12-01", today()),
            validate_cutoff_date("2024-06-10", today()),
        ];
        let messages: Vec<String> = violations.into_iter().map(|v| v.unwrap_err().to_string()).collect();
        for (i, a) in messages.iter().enumerate() {
            for b in messages.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_port_accepts_valid_range() {
        assert_eq!(validate_http_port(1024), Ok(1024));
        assert_eq!(validate_http_port(8080), Ok(8080));
        assert_eq!(validate_http_port(65535), Ok(65535));
    }

    #[test]
    fn test_port_rejects_out_of_range() {
        for port in [-1, 0, 80, 1023, 65536, 100000] {
            assert_eq!(validate_http_port(port), Err(ValidationError::PortOutOfRange(port)), "port: {}", port);
        }
    }
}
