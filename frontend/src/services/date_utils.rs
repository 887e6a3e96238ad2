use chrono::NaiveDate;

/// Today's local date from the browser clock
pub fn today() -> NaiveDate {
    use js_sys::Date;
    let now = Date::new_0();
    let year = now.get_full_year() as i32;
    let month = now.get_month() + 1; // JavaScript months are 0-indexed
    let day = now.get_date();
    from_parts(year, month, day)
}

fn from_parts(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// Value for `<input type="date">`
pub fn to_input_value(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Compact table cell form, e.g. "Mar 14"
pub fn format_spent_on(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_input_value() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 4).unwrap();
        assert_eq!(to_input_value(date), "2025-03-04");
    }

    #[test]
    fn test_format_spent_on() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 4).unwrap();
        assert_eq!(format_spent_on(date), "Mar 4");
    }

    #[test]
    fn test_from_parts_out_of_range() {
        assert_eq!(from_parts(2025, 2, 30), NaiveDate::default());
        assert_eq!(from_parts(2024, 2, 29), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    }
}
