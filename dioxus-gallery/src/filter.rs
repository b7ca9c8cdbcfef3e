//! Pure helpers behind the photo grid: date-range filtering, selection and share links

use chrono::{DateTime, Months, NaiveDate};

pub const SHARE_BASE_URL: &str = "https://wa.me/?text=";
/// URL-encoded line break placed between shared URLs
pub const SHARE_SEPARATOR: &str = "%0A";

/// How far back the grid shows photos
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateRange {
    #[default]
    All,
    OneMonth,
    SixMonths,
    OneYear,
}

impl DateRange {
    pub const OPTIONS: [DateRange; 4] = [
        DateRange::All,
        DateRange::OneMonth,
        DateRange::SixMonths,
        DateRange::OneYear,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DateRange::All => "All",
            DateRange::OneMonth => "1 Month",
            DateRange::SixMonths => "6 Months",
            DateRange::OneYear => "1 Year",
        }
    }

    fn months(&self) -> Option<u32> {
        match self {
            DateRange::All => None,
            DateRange::OneMonth => Some(1),
            DateRange::SixMonths => Some(6),
            DateRange::OneYear => Some(12),
        }
    }

    /// Whether a photo dated `date` falls inside the range ending `today`.
    ///
    /// The boundary is inclusive: a photo exactly N calendar months old is kept.
    pub fn includes(&self, date: &str, today: NaiveDate) -> bool {
        let Some(months) = self.months() else {
            return true;
        };
        let Some(taken) = parse_photo_date(date) else {
            return false;
        };
        match today.checked_sub_months(Months::new(months)) {
            Some(cutoff) => taken >= cutoff,
            None => true,
        }
    }
}

/// Accepts `YYYY-MM-DD` and full RFC 3339 timestamps
pub fn parse_photo_date(date: &str) -> Option<NaiveDate> {
    let date = date.trim();
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(date)
                .ok()
                .map(|dt| dt.date_naive())
        })
}

/// `Oct 5, 2026`; unparseable input is shown as-is
pub fn format_display_date(date: &str) -> String {
    parse_photo_date(date)
        .map(|d| d.format("%b %-d, %Y").to_string())
        .unwrap_or_else(|| date.to_string())
}

/// Ordered multi-select set of photo URLs
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    urls: Vec<String>,
}

impl Selection {
    /// Add at the end, or remove if already selected
    pub fn toggle(&mut self, url: &str) {
        if let Some(pos) = self.urls.iter().position(|u| u == url) {
            self.urls.remove(pos);
        } else {
            self.urls.push(url.to_string());
        }
    }

    pub fn contains(&self, url: &str) -> bool {
        self.urls.iter().any(|u| u == url)
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    pub fn urls(&self) -> &[String] {
        &self.urls
    }

    pub fn share_link(&self) -> String {
        share_link(&self.urls)
    }
}

/// Messaging link carrying the URLs one per line, in the given order
pub fn share_link(urls: &[String]) -> String {
    format!("{}{}", SHARE_BASE_URL, urls.join(SHARE_SEPARATOR))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_one_month_boundary() {
        let today = day(2026, 10, 19);
        let recent = (today - chrono::Duration::days(25)).format("%Y-%m-%d").to_string();
        let older = (today - chrono::Duration::days(40)).format("%Y-%m-%d").to_string();

        assert!(DateRange::OneMonth.includes(&recent, today));
        assert!(!DateRange::OneMonth.includes(&older, today));
        assert!(DateRange::OneMonth.includes("2026-09-19", today));
        assert!(DateRange::SixMonths.includes(&older, today));
    }

    #[test]
    fn test_year_and_all() {
        let today = day(2026, 10, 19);
        assert!(DateRange::OneYear.includes("2025-10-19", today));
        assert!(!DateRange::OneYear.includes("2025-10-18", today));
        assert!(DateRange::All.includes("not a date", today));
        assert!(!DateRange::OneYear.includes("not a date", today));
    }

    #[test]
    fn test_month_end_clamps() {
        // 31 March minus one month lands on the last day of February
        let today = day(2026, 3, 31);
        assert!(DateRange::OneMonth.includes("2026-02-28", today));
        assert!(!DateRange::OneMonth.includes("2026-02-27", today));
    }

    #[test]
    fn test_parse_and_format() {
        assert_eq!(parse_photo_date("2026-10-05"), Some(day(2026, 10, 5)));
        assert_eq!(
            parse_photo_date("2026-10-05T23:10:00.000Z"),
            Some(day(2026, 10, 5))
        );
        assert_eq!(format_display_date("2026-10-05"), "Oct 5, 2026");
        assert_eq!(format_display_date("soon"), "soon");
    }

    #[test]
    fn test_selection_keeps_order() {
        let mut selection = Selection::default();
        selection.toggle("https://x/b.jpg");
        selection.toggle("https://x/a.jpg");
        selection.toggle("https://x/c.jpg");
        selection.toggle("https://x/a.jpg");

        assert_eq!(selection.len(), 2);
        assert!(!selection.contains("https://x/a.jpg"));
        assert_eq!(
            selection.share_link(),
            "https://wa.me/?text=https://x/b.jpg%0Ahttps://x/c.jpg"
        );
    }
}
