//! In-page anchor arithmetic for smooth scrolling under a fixed header.

/// Extract the element id a same-page anchor points at. The bare `"#"`
/// and non-fragment hrefs yield `None`; those clicks keep their default
/// behavior.
pub fn fragment(href: &str) -> Option<&str> {
    let id = href.strip_prefix('#')?;
    if id.is_empty() {
        return None;
    }
    Some(id)
}

/// Absolute document Y that puts the element just below the fixed header,
/// with `gap_px` of breathing room.
pub fn scroll_target_y(rect_top: f64, page_y_offset: f64, header_height: f64, gap_px: f64) -> f64 {
    rect_top + page_y_offset - header_height - gap_px
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragment_extracts_ids() {
        assert_eq!(fragment("#contact"), Some("contact"));
        assert_eq!(fragment("#om-oss"), Some("om-oss"));
    }

    #[test]
    fn bare_hash_and_plain_links_fall_through() {
        assert_eq!(fragment("#"), None);
        assert_eq!(fragment(""), None);
        assert_eq!(fragment("/tjenester"), None);
        assert_eq!(fragment("https://example.no/#contact"), None);
    }

    #[test]
    fn target_sits_below_the_header() {
        // Element 400px down the viewport, page scrolled 1000px, header 80px.
        let y = scroll_target_y(400.0, 1000.0, 80.0, 20.0);
        assert_eq!(y, 1300.0);
    }

    #[test]
    fn missing_header_costs_only_the_gap() {
        let y = scroll_target_y(400.0, 0.0, 0.0, 20.0);
        assert_eq!(y, 380.0);
    }
}
