//! Typing-text looper: types a greeting one character at a time, holds,
//! erases it, holds, and starts over.

use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;

pub const TARGET_ID: &str = "typed";
pub const DEFAULT_PREFIX: &str = "Hello, I am ";
pub const DEFAULT_NAME: &str = "Gab";
pub const HIGHLIGHT_OPEN: &str = "<span class=\"highlight\">";
pub const HIGHLIGHT_CLOSE: &str = "</span>";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypingTimings {
    pub start_delay_ms: u32,
    pub type_ms: u32,
    pub erase_ms: u32,
    pub hold_ms: u32,
}

impl Default for TypingTimings {
    fn default() -> Self {
        Self {
            start_delay_ms: 500,
            type_ms: 90,
            erase_ms: 60,
            hold_ms: 1_200,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Typing,
    Erasing,
}

/// One scheduled step: optional new markup, then how long to wait.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    pub markup: Option<String>,
    pub delay_ms: u32,
}

#[derive(Clone, Debug)]
pub struct Typewriter {
    text: Vec<char>,
    prefix_len: usize,
    index: usize,
    phase: Phase,
    timings: TypingTimings,
}

impl Default for Typewriter {
    fn default() -> Self {
        Self::new(DEFAULT_PREFIX, DEFAULT_NAME, TypingTimings::default())
    }
}

impl Typewriter {
    pub fn new(prefix: &str, name: &str, timings: TypingTimings) -> Self {
        let text: Vec<char> = prefix.chars().chain(name.chars()).collect();
        Self {
            prefix_len: prefix.chars().count(),
            text,
            index: 0,
            phase: Phase::Typing,
            timings,
        }
    }

    pub fn timings(&self) -> TypingTimings {
        self.timings
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn full_text(&self) -> String {
        self.text.iter().collect()
    }

    pub fn visible_text(&self) -> String {
        self.text[..self.index].iter().collect()
    }

    /// Markup for the current index. The highlight span wraps the name part
    /// only once the index has moved past the prefix boundary.
    pub fn markup(&self) -> String {
        if self.index <= self.prefix_len {
            return escape_html(&self.visible_text());
        }

        let prefix: String = self.text[..self.prefix_len].iter().collect();
        let name: String = self.text[self.prefix_len..self.index].iter().collect();
        format!(
            "{}{HIGHLIGHT_OPEN}{}{HIGHLIGHT_CLOSE}",
            escape_html(&prefix),
            escape_html(&name)
        )
    }

    pub fn advance(&mut self) -> Frame {
        match self.phase {
            Phase::Typing if self.index < self.text.len() => {
                self.index += 1;
                Frame {
                    markup: Some(self.markup()),
                    delay_ms: self.timings.type_ms,
                }
            }
            Phase::Typing => {
                self.phase = Phase::Erasing;
                Frame {
                    markup: None,
                    delay_ms: self.timings.hold_ms,
                }
            }
            Phase::Erasing if self.index > 0 => {
                self.index -= 1;
                Frame {
                    markup: Some(self.markup()),
                    delay_ms: self.timings.erase_ms,
                }
            }
            Phase::Erasing => {
                self.phase = Phase::Typing;
                Frame {
                    markup: None,
                    delay_ms: self.timings.hold_ms,
                }
            }
        }
    }
}

/// Shared stop flag for the typing task. Nothing stops it on a live page.
#[derive(Clone, Debug, Default)]
pub struct StopSignal(Rc<Cell<bool>>);

impl StopSignal {
    pub fn stop(&self) {
        self.0.set(true);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.get()
    }
}

/// Runs the loop until `stop` is raised. `sleep` yields for the given number
/// of milliseconds; `render` receives each new markup string.
pub async fn drive<S, F, R>(mut typewriter: Typewriter, stop: StopSignal, mut sleep: S, mut render: R)
where
    S: FnMut(u32) -> F,
    F: Future<Output = ()>,
    R: FnMut(&str),
{
    sleep(typewriter.timings().start_delay_ms).await;

    while !stop.is_stopped() {
        let frame = typewriter.advance();
        if let Some(markup) = frame.markup.as_deref() {
            render(markup);
        }
        sleep(frame.delay_ms).await;
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    fn strip_tags(markup: &str) -> String {
        markup.replace(HIGHLIGHT_OPEN, "").replace(HIGHLIGHT_CLOSE, "")
    }

    #[test]
    fn types_one_character_per_step_then_holds() {
        let mut typewriter = Typewriter::default();
        let full = typewriter.full_text();
        assert_eq!(full, "Hello, I am Gab");

        for expected_len in 1..=full.chars().count() {
            let frame = typewriter.advance();
            assert_eq!(frame.delay_ms, 90);
            let markup = frame.markup.expect("typing renders");
            assert_eq!(strip_tags(&markup), full[..expected_len]);
        }

        let hold = typewriter.advance();
        assert_eq!(hold, Frame { markup: None, delay_ms: 1_200 });
        assert_eq!(typewriter.phase(), Phase::Erasing);
    }

    #[test]
    fn span_opens_only_past_the_prefix_boundary() {
        let mut typewriter = Typewriter::default();

        for _ in 0..DEFAULT_PREFIX.len() {
            typewriter.advance();
        }
        assert_eq!(typewriter.index(), 12);
        assert_eq!(typewriter.markup(), "Hello, I am ");

        typewriter.advance();
        assert_eq!(
            typewriter.markup(),
            "Hello, I am <span class=\"highlight\">G</span>"
        );

        typewriter.advance();
        typewriter.advance();
        assert_eq!(
            typewriter.markup(),
            "Hello, I am <span class=\"highlight\">Gab</span>"
        );
    }

    #[test]
    fn erasing_drops_the_span_at_the_boundary() {
        let mut typewriter = Typewriter::default();
        for _ in 0..16 {
            typewriter.advance();
        }
        assert_eq!(typewriter.phase(), Phase::Erasing);

        let first = typewriter.advance();
        assert_eq!(first.delay_ms, 60);
        assert_eq!(
            first.markup.as_deref(),
            Some("Hello, I am <span class=\"highlight\">Ga</span>")
        );

        typewriter.advance();
        let boundary = typewriter.advance();
        assert_eq!(boundary.markup.as_deref(), Some("Hello, I am "));
    }

    #[test]
    fn full_cycle_returns_to_typing_after_hold() {
        let mut typewriter = Typewriter::default();
        let len = typewriter.full_text().chars().count();

        for _ in 0..len {
            typewriter.advance();
        }
        typewriter.advance();
        for _ in 0..len {
            typewriter.advance();
        }
        assert_eq!(typewriter.index(), 0);
        assert_eq!(typewriter.markup(), "");

        let hold = typewriter.advance();
        assert_eq!(hold.markup, None);
        assert_eq!(typewriter.phase(), Phase::Typing);
    }

    #[test]
    fn markup_escapes_custom_text() {
        let mut typewriter = Typewriter::new("a<", "&b", TypingTimings::default());
        for _ in 0..4 {
            typewriter.advance();
        }

        assert_eq!(
            typewriter.markup(),
            "a&lt;<span class=\"highlight\">&amp;b</span>"
        );
    }

    #[tokio::test]
    async fn driver_keeps_cycling_until_stopped() {
        let stop = StopSignal::default();
        let full = Typewriter::default().full_text();
        let rendered = Rc::new(RefCell::new(Vec::<String>::new()));
        let delays = Rc::new(RefCell::new(Vec::<u32>::new()));

        let render_log = rendered.clone();
        let render_stop = stop.clone();
        let sleep_log = delays.clone();

        drive(
            Typewriter::default(),
            stop.clone(),
            move |ms| {
                sleep_log.borrow_mut().push(ms);
                std::future::ready(())
            },
            move |markup| {
                render_log.borrow_mut().push(markup.to_string());
                if render_log.borrow().len() >= 300 {
                    render_stop.stop();
                }
            },
        )
        .await;

        let rendered = rendered.borrow();
        assert_eq!(rendered.len(), 300);
        assert!(rendered
            .iter()
            .all(|markup| full.starts_with(&strip_tags(markup))));
        assert_eq!(delays.borrow().first(), Some(&500));
        assert!(delays.borrow().iter().filter(|ms| **ms == 1_200).count() >= 9);
    }
}
