// src/core/html.rs
// Minimal HTML slicing, enough to pull one anchor and one labeled block out
// of a page. Tag scanning is ASCII case-insensitive; attribute values are
// compared as written.

use super::sanitize::{normalize_entities, normalize_ws};

pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_ascii() { c.to_ascii_lowercase() } else { c })
        .collect()
}

/// First `<a>` whose href value ends with `suffix`.
/// Returns (byte offset of the `<a`, href value as written).
pub fn find_anchor_by_href_suffix(doc: &str, suffix: &str) -> Option<(usize, String)> {
    let lc = to_lower(doc);
    let mut from = 0usize;
    while let Some(rel) = lc[from..].find("<a") {
        let start = from + rel;
        let gt = start + doc[start..].find('>')?;
        // reject <abbr>, <article>, …
        let boundary = matches!(
            doc.as_bytes().get(start + 2),
            Some(b' ') | Some(b'\t') | Some(b'\n') | Some(b'\r') | Some(b'>')
        );
        if boundary {
            if let Some(href) = attr_value(&doc[start..gt], "href") {
                if href.ends_with(suffix) {
                    return Some((start, href));
                }
            }
        }
        from = gt + 1;
    }
    None
}

/// Attribute value from a tag opener, tolerant of single/double/no quotes.
pub fn attr_value(opener: &str, name: &str) -> Option<String> {
    let lc = to_lower(opener);
    let pat = format!("{name}=");
    // whitespace boundary: `href=` must not match inside `data-href=`
    let mut from = 0usize;
    let at = loop {
        let at = from + lc[from..].find(&pat)?;
        if at == 0 || lc.as_bytes()[at - 1].is_ascii_whitespace() {
            break at;
        }
        from = at + pat.len();
    };
    let val = opener[at + pat.len()..].trim_start();
    let (quote, start) = match val.as_bytes().first() {
        Some(b'"') => ('"', 1),
        Some(b'\'') => ('\'', 1),
        _ => ('\0', 0),
    };
    let end = if quote != '\0' {
        val[start..].find(quote).map(|e| start + e)
    } else {
        val.find(|c: char| c.is_ascii_whitespace() || c == '>')
    }
    .unwrap_or(val.len());
    Some(val[start..end].to_string())
}

/// Inner text of the last element before byte offset `before` whose class
/// attribute contains `class_sub`. Non-nesting: the first matching closing
/// tag ends the block.
pub fn class_block_text_before(doc: &str, before: usize, class_sub: &str) -> Option<String> {
    let hay = &doc[..before];
    let lc = to_lower(hay);
    let needle = to_lower(class_sub);

    let mut at = None;
    let mut from = 0usize;
    while let Some(rel) = lc[from..].find(&needle) {
        at = Some(from + rel);
        from = from + rel + needle.len();
    }
    let at = at?;

    // Walk back to the '<' of the element carrying the class.
    let tag_start = hay[..at].rfind('<')?;
    let gt = tag_start + hay[tag_start..].find('>')?;
    let opener = &hay[tag_start..gt];
    let class = attr_value(opener, "class")?;
    if !to_lower(&class).contains(&needle) {
        return None;
    }

    let tag_name: String = opener[1..]
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric())
        .collect();
    if tag_name.is_empty() {
        return None;
    }

    let close = join!("</", to_lower(&tag_name), ">");
    let rest_lc = to_lower(&doc[gt + 1..]);
    let close_rel = rest_lc.find(&close)?;
    Some(strip_tags(&doc[gt + 1..gt + 1 + close_rel]))
}

pub fn strip_tags<S: AsRef<str>>(s: S) -> String {
    let s = normalize_entities(s.as_ref());

    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;
    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    normalize_ws(&out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchor_by_suffix_skips_other_links() {
        let doc = r#"<a href="/guide.pdf">guide</a> <a href="/forms/ZIP_Locale_Detail.xls">data</a>"#;
        let (at, href) = find_anchor_by_href_suffix(doc, "ZIP_Locale_Detail.xls").unwrap();
        assert_eq!(href, "/forms/ZIP_Locale_Detail.xls");
        assert!(doc[at..].starts_with("<a href=\"/forms"));
    }

    #[test]
    fn anchor_not_confused_by_longer_tags() {
        let doc = r#"<abbr title="x">z</abbr><a href="/a/ZIP_Locale_Detail.xls">d</a>"#;
        let (_, href) = find_anchor_by_href_suffix(doc, "ZIP_Locale_Detail.xls").unwrap();
        assert_eq!(href, "/a/ZIP_Locale_Detail.xls");
    }

    #[test]
    fn attr_value_handles_quote_styles() {
        assert_eq!(attr_value(r#"<a href="/x">"#, "href").as_deref(), Some("/x"));
        assert_eq!(attr_value(r#"<a href='/y'>"#, "href").as_deref(), Some("/y"));
        assert_eq!(attr_value("<a href=/z>", "href").as_deref(), Some("/z"));
        assert_eq!(attr_value("<a rel=nofollow>", "href"), None);
    }

    #[test]
    fn attr_value_skips_prefixed_attribute_names() {
        let opener = r#"<a data-href="/no" href="/yes">"#;
        assert_eq!(attr_value(opener, "href").as_deref(), Some("/yes"));
    }

    #[test]
    fn class_block_text_takes_nearest_match() {
        let doc = concat!(
            r#"<div class="mb-2">stale</div>"#,
            r#"<div class="mb-2"><strong>June 27, 2025</strong></div>"#,
            r#"<a href="/f.xls">link</a>"#,
        );
        let at = doc.find("<a").unwrap();
        assert_eq!(
            class_block_text_before(doc, at, "mb-2").as_deref(),
            Some("June 27, 2025")
        );
    }

    #[test]
    fn strip_tags_flattens_markup_and_entities() {
        assert_eq!(strip_tags("<b>a&nbsp;&amp;</b>\n b"), "a & b");
    }
}
