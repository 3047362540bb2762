#[cfg(test)]
mod tests {
    use chrono::{Datelike, NaiveDate, Weekday};
    use repic::libs::period::{last_calendar_day, Period};

    fn is_weekend(day: &NaiveDate) -> bool {
        matches!(day.weekday(), Weekday::Sat | Weekday::Sun)
    }

    #[test]
    fn test_february_2026_starts_on_a_sunday() {
        // Feb 1 2026 is a Sunday, Feb 28 is a Saturday.
        let period = Period::resolve(2, 2026).unwrap();
        assert_eq!(period.first_working_day, NaiveDate::from_ymd_opt(2026, 2, 2).unwrap());
        assert_eq!(period.last_working_day, NaiveDate::from_ymd_opt(2026, 2, 27).unwrap());
    }

    #[test]
    fn test_weekday_boundaries_used_directly() {
        // September 2025 starts on a Monday and ends on a Tuesday.
        let period = Period::resolve(9, 2025).unwrap();
        assert_eq!(period.first_working_day, NaiveDate::from_ymd_opt(2025, 9, 1).unwrap());
        assert_eq!(period.last_working_day, NaiveDate::from_ymd_opt(2025, 9, 30).unwrap());
    }

    #[test]
    fn test_working_days_stay_within_bounds_for_all_months() {
        for year in 2024..=2030 {
            for month in 1..=12 {
                let period = Period::resolve(month, year).unwrap();
                assert!(period.first_working_day.day() <= 5, "first working day of {}/{} too late", month, year);
                assert!(!is_weekend(&period.first_working_day));
                let last = last_calendar_day(year, month);
                assert!(last.day() - period.last_working_day.day() <= 4, "last working day of {}/{} too early", month, year);
                assert!(!is_weekend(&period.last_working_day));
            }
        }
    }

    #[test]
    fn test_previous_wraps_the_year_at_january() {
        let january = Period::resolve(1, 2026).unwrap();
        let previous = january.previous().unwrap();
        assert_eq!(previous.month, 12);
        assert_eq!(previous.year, 2025);

        let march = Period::resolve(3, 2026).unwrap();
        let previous = march.previous().unwrap();
        assert_eq!(previous.month, 2);
        assert_eq!(previous.year, 2026);
    }

    #[test]
    fn test_month_out_of_range_is_rejected() {
        assert!(Period::resolve(0, 2026).is_err());
        assert!(Period::resolve(13, 2026).is_err());
    }

    #[test]
    fn test_display_tokens() {
        let period = Period::resolve(3, 2026).unwrap();
        assert_eq!(period.month_name(), "March");
        assert_eq!(period.month_short(), "Mar");
        assert_eq!(period.year_short(), "26");
        assert_eq!(period.quarter(), "Q1");
        assert_eq!(period.suffix(), "Mar'26");

        let period = Period::resolve(11, 2026).unwrap();
        assert_eq!(period.quarter(), "Q4");
    }

    #[test]
    fn test_leap_year_february() {
        // Feb 29 2028 is a Tuesday.
        let period = Period::resolve(2, 2028).unwrap();
        assert_eq!(period.last_working_day, NaiveDate::from_ymd_opt(2028, 2, 29).unwrap());
    }
}
