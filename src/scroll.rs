//! Scroll-driven effects: active navigation link, parallax, header shadow.

pub const SECTION_SELECTOR: &str = "section, main";
pub const CIRCLE_SELECTOR: &str = ".bg-circle";
pub const HERO_IMAGE_SELECTOR: &str = ".profile-image";
pub const HEADER_SELECTOR: &str = ".header";
pub const ACTIVE_LINK_CLASS: &str = "active-link";

pub const SECTION_LEAD_PX: f64 = 150.0;
pub const CIRCLE_BASE_SPEED: f64 = 0.1;
pub const CIRCLE_SPEED_STEP: f64 = 0.05;
pub const HERO_SPEED: f64 = 0.2;
pub const HEADER_SHADOW: &str = "0 4px 20px rgba(0, 0, 0, 0.5)";
pub const HEADER_NO_SHADOW: &str = "none";

/// A page section as measured at scroll time.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionBox {
    pub id: Option<String>,
    pub top: f64,
}

/// Sections are walked in document order and the last one whose top (minus
/// the lead) has been scrolled past wins.
pub fn current_section(scroll_y: f64, sections: &[SectionBox]) -> Option<&SectionBox> {
    sections
        .iter()
        .filter(|section| scroll_y >= section.top - SECTION_LEAD_PX)
        .last()
}

/// `href` of the nav link that should carry the active marker. With no
/// current section, or one without an id, this is the bare `#`.
pub fn active_href(scroll_y: f64, sections: &[SectionBox]) -> String {
    let id = current_section(scroll_y, sections)
        .and_then(|section| section.id.as_deref())
        .unwrap_or_default();
    format!("#{id}")
}

pub fn header_shadow(scroll_y: f64) -> &'static str {
    if scroll_y <= 0.0 {
        HEADER_NO_SHADOW
    } else {
        HEADER_SHADOW
    }
}

pub fn circle_speed(index: usize) -> f64 {
    CIRCLE_BASE_SPEED + index as f64 * CIRCLE_SPEED_STEP
}

pub fn circle_transform(index: usize, scroll_y: f64) -> String {
    translate_y(scroll_y * circle_speed(index))
}

/// The hero image only moves while the first viewport is still on screen.
pub fn hero_transform(scroll_y: f64, viewport_height: f64) -> Option<String> {
    (scroll_y < viewport_height).then(|| translate_y(scroll_y * HERO_SPEED))
}

fn translate_y(offset: f64) -> String {
    format!("translateY({offset}px)")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections() -> Vec<SectionBox> {
        vec![
            SectionBox { id: Some("home".to_string()), top: 0.0 },
            SectionBox { id: Some("about".to_string()), top: 800.0 },
            SectionBox { id: Some("projects".to_string()), top: 1600.0 },
        ]
    }

    #[test]
    fn section_becomes_current_150px_before_its_top() {
        let sections = sections();

        assert_eq!(active_href(0.0, &sections), "#home");
        assert_eq!(active_href(649.0, &sections), "#home");
        assert_eq!(active_href(650.0, &sections), "#about");
        assert_eq!(active_href(5000.0, &sections), "#projects");
    }

    #[test]
    fn last_matching_section_wins() {
        let overlapping = vec![
            SectionBox { id: Some("a".to_string()), top: 100.0 },
            SectionBox { id: Some("b".to_string()), top: 100.0 },
        ];

        assert_eq!(active_href(0.0, &overlapping), "#b");
    }

    #[test]
    fn bare_hash_is_active_above_the_first_section_or_without_an_id() {
        let below = vec![SectionBox { id: Some("late".to_string()), top: 1000.0 }];
        assert_eq!(active_href(0.0, &below), "#");
        assert_eq!(active_href(0.0, &[]), "#");

        let anonymous = vec![SectionBox { id: None, top: 0.0 }];
        assert_eq!(active_href(10.0, &anonymous), "#");
    }

    #[test]
    fn header_shadow_appears_once_scrolled() {
        assert_eq!(header_shadow(0.0), "none");
        assert_eq!(header_shadow(-4.0), "none");
        assert_eq!(header_shadow(1.0), HEADER_SHADOW);
    }

    #[test]
    fn circle_speed_grows_per_index() {
        assert_eq!(circle_transform(0, 100.0), "translateY(10px)");
        assert!((circle_speed(2) - 0.2).abs() < 1e-9);
        assert!(circle_speed(3) > circle_speed(2));
    }

    #[test]
    fn hero_moves_only_within_first_viewport() {
        assert_eq!(hero_transform(50.0, 900.0).as_deref(), Some("translateY(10px)"));
        assert_eq!(hero_transform(900.0, 900.0), None);
    }
}
