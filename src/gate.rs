// src/gate.rs
// Skip-if-unchanged check around a tiny persisted marker file.
//
// Accepted date formats are pinned rather than locale-guessed:
//   "June 27, 2025"   (%B %d, %Y)
//   "06/27/2025"      (%m/%d/%Y)
//   "2025-06-27"      (%Y-%m-%d)
// A leading label ("Last Updated: …") is tolerated. The marker itself
// stores the page text verbatim.

use std::{fs, io, path::Path};

use chrono::NaiveDate;

const DATE_FORMATS: [&str; 3] = ["%B %d, %Y", "%m/%d/%Y", "%Y-%m-%d"];

pub fn parse_page_date(text: &str) -> Option<NaiveDate> {
    let t = text.trim();
    let unlabeled = t.rsplit(':').next().unwrap_or(t).trim();
    for cand in [t, unlabeled] {
        for fmt in DATE_FORMATS {
            if let Ok(d) = NaiveDate::parse_from_str(cand, fmt) {
                return Some(d);
            }
        }
    }
    None
}

/// Stored marker text, if a previous run left one.
pub fn load_marker(path: &Path) -> Option<String> {
    fs::read_to_string(path)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// True when the page offers nothing newer than the marker remembers.
/// Either side failing to parse means "proceed".
pub fn should_skip(page_text: Option<&str>, stored_text: Option<&str>) -> bool {
    let page = match page_text.and_then(parse_page_date) {
        Some(d) => d,
        None => return false,
    };
    let stored = match stored_text.and_then(parse_page_date) {
        Some(d) => d,
        None => return false,
    };
    page <= stored
}

/// Persist the page's date text verbatim.
pub fn save_marker(path: &Path, text: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn parses_pinned_formats() {
        assert_eq!(parse_page_date("June 27, 2025"), Some(d(2025, 6, 27)));
        assert_eq!(parse_page_date("June 5, 2025"), Some(d(2025, 6, 5)));
        assert_eq!(parse_page_date("06/27/2025"), Some(d(2025, 6, 27)));
        assert_eq!(parse_page_date("2025-06-27"), Some(d(2025, 6, 27)));
    }

    #[test]
    fn tolerates_leading_label() {
        assert_eq!(
            parse_page_date("Last Updated: June 27, 2025"),
            Some(d(2025, 6, 27))
        );
    }

    #[test]
    fn rejects_free_form_text() {
        assert_eq!(parse_page_date("soon"), None);
        assert_eq!(parse_page_date(""), None);
        assert_eq!(parse_page_date("27 June 2025"), None);
    }

    #[test]
    fn equal_or_older_page_date_skips() {
        assert!(should_skip(Some("June 27, 2025"), Some("June 27, 2025")));
        assert!(should_skip(Some("June 26, 2025"), Some("June 27, 2025")));
        // stored in a different pinned format still compares
        assert!(should_skip(Some("06/27/2025"), Some("June 27, 2025")));
    }

    #[test]
    fn newer_page_date_proceeds() {
        assert!(!should_skip(Some("June 28, 2025"), Some("June 27, 2025")));
    }

    #[test]
    fn unparseable_either_side_proceeds() {
        assert!(!should_skip(None, Some("June 27, 2025")));
        assert!(!should_skip(Some("garbled"), Some("June 27, 2025")));
        assert!(!should_skip(Some("June 27, 2025"), None));
        assert!(!should_skip(Some("June 27, 2025"), Some("garbled")));
    }
}
