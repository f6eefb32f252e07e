// src/specs/locale_detail.rs
//! Page *spec* for the PostalPro ZIP Locale Detail page.
//!
//! Purpose:
//! - Parse the **remote HTML** and find the download link whose href ends
//!   in `ZIP_Locale_Detail.xls`.
//! - Pull the last-updated text from the `mb-2` block the site places
//!   right above that link.
//!
//! Responsibilities:
//! - HTML slicing via `core::html` helpers.
//! - Origin-prefix resolution of relative hrefs.
//!
//! Non-Responsibilities (by design):
//! - **No networking, no gate decision, no persistence.** Callers fetch
//!   the page and decide what to do with the result.

use crate::config::consts::{BASE_URL, XLS_LINK_SUFFIX};
use crate::core::html;

/// What one read of the page yields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageInfo {
    /// Raw text of the date block, if the page still carries one.
    pub last_updated_text: Option<String>,
    /// Href of the spreadsheet link, exactly as written in the page.
    pub xls_href: Option<String>,
}

pub fn extract(doc: &str) -> PageInfo {
    match html::find_anchor_by_href_suffix(doc, XLS_LINK_SUFFIX) {
        Some((at, href)) => {
            let text = html::class_block_text_before(doc, at, "mb-2")
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty());
            PageInfo {
                last_updated_text: text,
                xls_href: Some(href),
            }
        }
        None => PageInfo {
            last_updated_text: None,
            xls_href: None,
        },
    }
}

/// Relative hrefs get the site origin prefixed; absolute ones pass through.
pub fn resolve_link(href: &str) -> String {
    if href.starts_with("http") {
        s!(href)
    } else {
        join!(BASE_URL, href)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <div class="download-block">
          <div class="mb-2"><strong>June 27, 2025</strong></div>
          <p><a href="/forms/ZIP_Locale_Detail.xls">ZIP Locale Detail</a></p>
        </div>
    "#;

    #[test]
    fn extracts_link_and_date() {
        let page = extract(PAGE);
        assert_eq!(page.xls_href.as_deref(), Some("/forms/ZIP_Locale_Detail.xls"));
        assert_eq!(page.last_updated_text.as_deref(), Some("June 27, 2025"));
    }

    #[test]
    fn missing_link_yields_nothing() {
        let page = extract(r#"<div class="mb-2">June 27, 2025</div>"#);
        assert_eq!(page.xls_href, None);
        assert_eq!(page.last_updated_text, None);
    }

    #[test]
    fn missing_date_block_still_yields_link() {
        let page = extract(r#"<a href='/forms/ZIP_Locale_Detail.xls'>dl</a>"#);
        assert_eq!(page.xls_href.as_deref(), Some("/forms/ZIP_Locale_Detail.xls"));
        assert_eq!(page.last_updated_text, None);
    }

    #[test]
    fn relative_link_gets_origin_prefixed() {
        assert_eq!(
            resolve_link("/forms/ZIP_Locale_Detail.xls"),
            "https://postalpro.usps.com/forms/ZIP_Locale_Detail.xls"
        );
    }

    #[test]
    fn absolute_link_passes_through() {
        let abs = "https://cdn.example.com/ZIP_Locale_Detail.xls";
        assert_eq!(resolve_link(abs), abs);
    }

    #[test]
    fn fragment_resolves_end_to_end() {
        let page = extract(r#"<p><a href="/x/ZIP_Locale_Detail.xls">x</a></p>"#);
        let url = resolve_link(&page.xls_href.unwrap());
        assert_eq!(url, "https://postalpro.usps.com/x/ZIP_Locale_Detail.xls");
    }
}
