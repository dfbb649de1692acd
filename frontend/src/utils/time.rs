use chrono::{Datelike, Local, NaiveDate};

/// Current calendar date in the browser's local time zone. The store keys
/// attendance by plain date, so no further time zone handling is needed.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn format_date(date: NaiveDate) -> String {
    format!("{} {}, {}", month_abbrev(date.month()), date.day(), date.year())
}

pub fn format_long_date(date: NaiveDate) -> String {
    format!(
        "{}, {} {}, {}",
        date.format("%A"),
        date.format("%B"),
        date.day(),
        date.year()
    )
}

fn month_abbrev(month: u32) -> &'static str {
    match month {
        1 => "Jan",
        2 => "Feb",
        3 => "Mar",
        4 => "Apr",
        5 => "May",
        6 => "Jun",
        7 => "Jul",
        8 => "Aug",
        9 => "Sep",
        10 => "Oct",
        11 => "Nov",
        _ => "Dec",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_format_matches_display_convention() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 9).unwrap();
        assert_eq!(format_date(date), "Mar 9, 2025");
    }

    #[test]
    fn long_format_spells_out_weekday_and_month() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 9).unwrap();
        assert_eq!(format_long_date(date), "Sunday, March 9, 2025");
    }
}
