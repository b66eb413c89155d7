//! Scroll-driven navigation effects: sticky shadow, active link, hero parallax,
//! reveal-on-scroll.

/// Page section geometry as read from the DOM.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionBox {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

/// Id of the section containing `scroll_y + offset`, if any.
pub fn active_section(sections: &[SectionBox], scroll_y: f64, offset: f64) -> Option<&str> {
    let marker = scroll_y + offset;
    sections
        .iter()
        .find(|s| marker >= s.top && marker < s.top + s.height)
        .map(|s| s.id.as_str())
}

pub fn nav_scrolled(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

/// CSS transform for the oversized hero background text.
pub fn parallax_transform(scroll_y: f64, factor: f64) -> String {
    format!("translate(-50%, calc(-50% + {}px))", scroll_y * factor)
}

/// True once at least `threshold` of an element's height is inside the viewport.
pub fn is_revealed(top: f64, height: f64, viewport_height: f64, threshold: f64) -> bool {
    if height <= 0.0 {
        return top < viewport_height && top >= 0.0;
    }
    let visible = (top + height).min(viewport_height) - top.max(0.0);
    visible / height >= threshold
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections() -> Vec<SectionBox> {
        vec![
            SectionBox {
                id: "hero".into(),
                top: 0.0,
                height: 600.0,
            },
            SectionBox {
                id: "skills".into(),
                top: 600.0,
                height: 400.0,
            },
            SectionBox {
                id: "games".into(),
                top: 1000.0,
                height: 800.0,
            },
        ]
    }

    #[test]
    fn test_active_section_uses_scroll_offset() {
        let s = sections();
        assert_eq!(active_section(&s, 0.0, 140.0), Some("hero"));
        assert_eq!(active_section(&s, 460.0, 140.0), Some("skills"));
        assert_eq!(active_section(&s, 859.0, 140.0), Some("skills"));
        assert_eq!(active_section(&s, 5000.0, 140.0), None);
    }

    #[test]
    fn test_nav_shadow_threshold() {
        assert!(!nav_scrolled(10.0, 10.0));
        assert!(nav_scrolled(10.5, 10.0));
    }

    #[test]
    fn test_parallax_transform() {
        assert_eq!(
            parallax_transform(100.0, 0.3),
            format!("translate(-50%, calc(-50% + {}px))", 100.0 * 0.3)
        );
    }

    #[test]
    fn test_reveal_threshold() {
        assert!(!is_revealed(900.0, 200.0, 800.0, 0.1));
        assert!(is_revealed(700.0, 200.0, 800.0, 0.1));
        assert!(is_revealed(-150.0, 200.0, 800.0, 0.1));
        assert!(!is_revealed(-195.0, 200.0, 800.0, 0.1));
    }
}
