use chrono::{Datelike, Duration, NaiveDate};

/// Number of cells in a month view: six weeks of seven days.
pub const MONTH_GRID_CELLS: usize = 42;

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Parse `YYYY-MM` into the first day of that month.
pub fn parse_month(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(&format!("{}-01", s.trim()), "%Y-%m-%d").ok()
}

pub fn first_of_month(d: NaiveDate) -> NaiveDate {
    d.with_day(1).unwrap_or(d)
}

/// The 42 days shown for the month containing `month`.
///
/// Weeks start on Sunday. The grid opens with the tail of the previous
/// month so that the 1st lands in its weekday column, and is padded with
/// the start of the next month.
pub fn month_grid(month: NaiveDate) -> Vec<NaiveDate> {
    let first = first_of_month(month);
    let lead = first.weekday().num_days_from_sunday() as i64;
    let start = first - Duration::days(lead);

    (0..MONTH_GRID_CELLS as i64)
        .map(|i| start + Duration::days(i))
        .collect()
}

pub fn same_month(a: NaiveDate, b: NaiveDate) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

pub fn month_title(d: NaiveDate) -> String {
    d.format("%B %Y").to_string()
}
