use std::fmt;

use chrono::{Datelike, Local, NaiveDate, TimeDelta};

use crate::error::WodError;

/// Source of "today". The scraper only ever needs a calendar date.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Local wall-clock date.
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock pinned to one date.
#[cfg(test)]
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

#[cfg(test)]
impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Blog path of a WOD post, e.g. `2024/09/09/wod-tuesday-sept-10/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestPath(String);

impl RequestPath {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RequestPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Build the post path for the workout `delay` days before today.
///
/// Posts go up the evening before, so the date segment is one day earlier
/// than the weekday/month/day in the slug. Negative delays are not rejected;
/// they just point at posts that don't exist yet.
pub fn resolve(clock: &impl Clock, delay: i64) -> Result<RequestPath, WodError> {
    let day = TimeDelta::try_days(delay)
        .and_then(|d| clock.today().checked_sub_signed(d))
        .ok_or(WodError::DateOutOfRange(delay))?;
    let post_day = day.pred_opt().ok_or(WodError::DateOutOfRange(delay))?;

    let weekday = day.format("%A").to_string().to_lowercase();
    let month = month_abbrev(day);
    let path = format!(
        "{}/wod-{}-{}-{}/",
        post_day.format("%Y/%m/%d"),
        weekday,
        month,
        day.day()
    );
    Ok(RequestPath(path))
}

/// The blog writes "sept" but "oct", "nov", ... so September gets one extra letter.
fn month_abbrev(day: NaiveDate) -> String {
    let len = if day.month() == 9 { 4 } else { 3 };
    day.format("%B")
        .to_string()
        .chars()
        .take(len)
        .collect::<String>()
        .to_lowercase()
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn path_for(today: NaiveDate, delay: i64) -> String {
        resolve(&FixedClock(today), delay).unwrap().to_string()
    }

    #[test]
    fn september_uses_four_letters() {
        assert_eq!(path_for(date(2024, 9, 10), 0), "2024/09/09/wod-tuesday-sept-10/");
    }

    #[test]
    fn post_date_crosses_leap_day() {
        assert_eq!(path_for(date(2024, 3, 1), 0), "2024/02/29/wod-friday-mar-1/");
    }

    #[test]
    fn delay_crosses_year_boundary() {
        assert_eq!(path_for(date(2024, 1, 2), 1), "2023/12/31/wod-monday-jan-1/");
    }

    #[test]
    fn negative_delay_points_forward() {
        assert_eq!(path_for(date(2024, 9, 10), -1), "2024/09/10/wod-wednesday-sept-11/");
    }

    #[test]
    fn huge_delay_is_an_error() {
        let err = resolve(&FixedClock(date(2024, 1, 1)), i64::MAX).unwrap_err();
        assert!(matches!(err, WodError::DateOutOfRange(d) if d == i64::MAX));
    }

    #[test]
    fn abbreviation_length_by_month() {
        for year in [2019, 2023, 2024, 2025] {
            for month in 1..=12 {
                let abbrev = month_abbrev(date(year, month, 1));
                let expected = if month == 9 { 4 } else { 3 };
                assert_eq!(abbrev.len(), expected, "{year}-{month}: {abbrev}");
                assert_eq!(abbrev, abbrev.to_lowercase());
            }
        }
    }

    #[test]
    fn paths_follow_grammar_and_date_offsets() {
        let re = Regex::new(r"^(\d{4}/\d{2}/\d{2})/wod-([a-z]+)-([a-z]{3,4})-(\d{1,2})/$").unwrap();
        let today = date(2025, 6, 15);
        for delay in 0..800 {
            let path = path_for(today, delay);
            let caps = re.captures(&path).unwrap_or_else(|| panic!("bad path {path}"));

            let target = today - TimeDelta::days(delay);
            let post = target - TimeDelta::days(1);
            assert_eq!(&caps[1], post.format("%Y/%m/%d").to_string());
            assert_eq!(&caps[2], target.format("%A").to_string().to_lowercase());
            assert_eq!(caps[4].parse::<u32>().unwrap(), target.day());
            assert!(target
                .format("%B")
                .to_string()
                .to_lowercase()
                .starts_with(&caps[3]));
        }
    }

    #[test]
    fn system_clock_resolves() {
        let path = resolve(&SystemClock, 0).unwrap();
        assert!(path.as_str().contains("/wod-"));
        assert!(path.as_str().ends_with('/'));
    }
}
