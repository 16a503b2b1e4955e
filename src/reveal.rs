//! Visibility-triggered fade-in and the one-shot skill bar / stat counter
//! animations it hands off to.

pub const OBSERVED_SELECTOR: &str =
    "section, .skill-card, .project-card, .stat-item, .about-content, .contact-content";
pub const VISIBILITY_THRESHOLD: f64 = 0.15;
pub const ROOT_MARGIN: &str = "0px 0px -50px 0px";

pub const HIDDEN_OPACITY: &str = "0";
pub const HIDDEN_TRANSFORM: &str = "translateY(30px)";
pub const REVEAL_TRANSITION: &str = "opacity 0.8s ease, transform 0.8s ease";
pub const SHOWN_OPACITY: &str = "1";
pub const SHOWN_TRANSFORM: &str = "translateY(0)";

pub const SKILL_CARD_CLASS: &str = "skill-card";
pub const SKILL_FILL_SELECTOR: &str = ".progress-fill";
pub const SKILL_ANIMATED_MARKER: &str = "animated";
pub const SKILL_FILL_DELAY_MS: u32 = 200;
pub const SKILL_COLLAPSED_WIDTH: &str = "0";

pub const STAT_ITEM_CLASS: &str = "stat-item";
pub const STAT_NUMBER_SELECTOR: &str = "h4";
pub const STAT_COUNTED_MARKER: &str = "counted";

pub const DEFAULT_COUNTER_STEPS: i64 = 50;
pub const DEFAULT_COUNTER_DURATION_MS: f64 = 1_500.0;

/// Elements that carry a presence marker used to run an animation only once.
pub trait Markable {
    fn has_marker(&self, marker: &str) -> bool;
    fn set_marker(&self, marker: &str);
}

/// Sets `marker` and returns true the first time; false afterwards.
pub fn claim_once(target: &impl Markable, marker: &str) -> bool {
    if target.has_marker(marker) {
        return false;
    }
    target.set_marker(marker);
    true
}

/// Follow-up animations for an element that just became visible.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FollowUps {
    pub skill_bar: bool,
    pub counter: bool,
}

impl FollowUps {
    pub fn for_classes(has_class: impl Fn(&str) -> bool) -> Self {
        Self {
            skill_bar: has_class(SKILL_CARD_CLASS),
            counter: has_class(STAT_ITEM_CLASS),
        }
    }
}

/// `parseInt` with an implied radix of ten: leading whitespace, an optional
/// sign, then as many decimal digits as follow.
pub fn parse_leading_int(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits: &str = {
        let end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        &rest[..end]
    };

    if digits.is_empty() {
        return None;
    }

    let magnitude = digits.bytes().fold(0i64, |acc, digit| {
        acc.saturating_mul(10).saturating_add(i64::from(digit - b'0'))
    });

    Some(if negative { -magnitude } else { magnitude })
}

/// Frames of a stat counter counting up from zero to the number its text
/// starts with. The last frame is always the original text.
#[derive(Clone, Debug)]
pub struct CounterAnimation {
    original: String,
    target: i64,
    step: i64,
    current: i64,
    plus_suffix: bool,
    finished: bool,
    duration_ms: f64,
}

impl CounterAnimation {
    pub fn new(text: &str) -> Option<Self> {
        Self::with_timing(text, DEFAULT_COUNTER_STEPS, DEFAULT_COUNTER_DURATION_MS)
    }

    /// `None` when the text has no leading integer or `steps` is not positive.
    pub fn with_timing(text: &str, steps: i64, duration_ms: f64) -> Option<Self> {
        if steps <= 0 {
            return None;
        }

        let target = parse_leading_int(text)?;
        let step = if target > 0 {
            target / steps + i64::from(target % steps != 0)
        } else {
            0
        };

        Some(Self {
            original: text.to_string(),
            target,
            step,
            current: 0,
            plus_suffix: text.contains('+'),
            finished: false,
            duration_ms,
        })
    }

    pub fn target(&self) -> i64 {
        self.target
    }

    pub fn step(&self) -> i64 {
        self.step
    }

    /// Delay between frames, spreading the whole count over the duration.
    /// Fractional delays are truncated the way timers treat them.
    pub fn interval_ms(&self) -> u32 {
        if self.target <= 0 || self.step == 0 {
            return 0;
        }

        let ticks = self.target as f64 / self.step as f64;
        (self.duration_ms / ticks).trunc().max(0.0) as u32
    }
}

impl Iterator for CounterAnimation {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.finished {
            return None;
        }

        self.current = self.current.saturating_add(self.step);
        if self.current >= self.target {
            self.finished = true;
            return Some(self.original.clone());
        }

        let suffix = if self.plus_suffix { "+" } else { "" };
        Some(format!("{}{suffix}", self.current))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashSet;

    #[derive(Default)]
    struct FakeElement {
        markers: RefCell<HashSet<String>>,
    }

    impl Markable for FakeElement {
        fn has_marker(&self, marker: &str) -> bool {
            self.markers.borrow().contains(marker)
        }

        fn set_marker(&self, marker: &str) {
            self.markers.borrow_mut().insert(marker.to_string());
        }
    }

    #[test]
    fn parse_leading_int_follows_parse_int() {
        assert_eq!(parse_leading_int("120+"), Some(120));
        assert_eq!(parse_leading_int("  42 projects"), Some(42));
        assert_eq!(parse_leading_int("-7"), Some(-7));
        assert_eq!(parse_leading_int("3.9k"), Some(3));
        assert_eq!(parse_leading_int("+15"), Some(15));
        assert_eq!(parse_leading_int("years"), None);
        assert_eq!(parse_leading_int("-"), None);
        assert_eq!(parse_leading_int(""), None);
    }

    #[test]
    fn counter_for_120_plus_climbs_and_snaps_to_original() {
        let animation = CounterAnimation::new("120+").expect("numeric text");
        assert_eq!(animation.step(), 3);
        assert_eq!(animation.interval_ms(), 37);

        let frames: Vec<String> = animation.collect();
        assert_eq!(frames.first().map(String::as_str), Some("3+"));
        assert_eq!(frames.last().map(String::as_str), Some("120+"));
        assert_eq!(frames.len(), 40);

        let values: Vec<i64> = frames[..frames.len() - 1]
            .iter()
            .map(|frame| parse_leading_int(frame).expect("frame is numeric"))
            .collect();
        assert!(values.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(frames[..frames.len() - 1].iter().all(|frame| frame.ends_with('+')));
    }

    #[test]
    fn counter_without_plus_has_no_suffix() {
        let frames: Vec<String> = CounterAnimation::new("10").expect("numeric").collect();

        assert_eq!(frames.first().map(String::as_str), Some("1"));
        assert_eq!(frames.last().map(String::as_str), Some("10"));
        assert_eq!(frames.len(), 10);
    }

    #[test]
    fn counter_overshoot_still_lands_on_original_text() {
        let frames: Vec<String> = CounterAnimation::new("101 clients").expect("numeric").collect();

        assert_eq!(frames[0], "3");
        assert_eq!(frames.last().map(String::as_str), Some("101 clients"));
    }

    #[test]
    fn non_positive_targets_snap_immediately() {
        let frames: Vec<String> = CounterAnimation::new("0").expect("numeric").collect();
        assert_eq!(frames, vec!["0".to_string()]);

        let negative = CounterAnimation::new("-5").expect("numeric");
        assert_eq!(negative.interval_ms(), 0);
        assert_eq!(negative.collect::<Vec<_>>(), vec!["-5".to_string()]);
    }

    #[test]
    fn non_numeric_text_has_no_animation() {
        assert!(CounterAnimation::new("many").is_none());
    }

    #[test]
    fn saturated_target_counts_without_overflow() {
        let animation = CounterAnimation::new("99999999999999999999+").expect("numeric");
        assert_eq!(animation.target(), i64::MAX);
        assert!(animation.step() > 0);
        assert!(animation.interval_ms() > 0);

        let frames: Vec<String> = animation.collect();
        assert_eq!(frames.len(), 50);
        assert_eq!(frames.last().map(String::as_str), Some("99999999999999999999+"));
    }

    #[test]
    fn non_positive_step_counts_are_rejected() {
        assert!(CounterAnimation::with_timing("120+", 0, 1_500.0).is_none());
        assert!(CounterAnimation::with_timing("120+", -3, 1_500.0).is_none());
        assert!(CounterAnimation::with_timing("120+", 1, 1_500.0).is_some());
    }

    #[test]
    fn marker_allows_a_single_trigger() {
        let stat = FakeElement::default();

        assert!(claim_once(&stat, STAT_COUNTED_MARKER));
        assert!(!claim_once(&stat, STAT_COUNTED_MARKER));
        assert!(!claim_once(&stat, STAT_COUNTED_MARKER));
        assert!(claim_once(&stat, SKILL_ANIMATED_MARKER));
    }

    #[test]
    fn follow_ups_come_from_element_classes() {
        let skill = FollowUps::for_classes(|class| class == SKILL_CARD_CLASS);
        assert!(skill.skill_bar && !skill.counter);

        let stat = FollowUps::for_classes(|class| class == STAT_ITEM_CLASS);
        assert!(!stat.skill_bar && stat.counter);

        assert_eq!(FollowUps::for_classes(|_| false), FollowUps::default());
    }
}
