pub const CARD_SELECTOR: &str = ".project-card";
pub const SLIDER_SELECTOR: &str = ".project-slider";
pub const IMAGE_SELECTOR: &str = ".slider-img";
pub const DOT_SELECTOR: &str = ".dot";
pub const PREV_SELECTOR: &str = ".prev";
pub const NEXT_SELECTOR: &str = ".next";
pub const ACTIVE_CLASS: &str = "active";
pub const AUTOPLAY_INTERVAL_MS: u32 = 3_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Navigation {
    Next,
    Prev,
    Jump(usize),
}

/// Slide position for one card plus its autoplay timer handle. Storing a new
/// handle drops the previous one, and dropping a handle cancels its timer.
#[derive(Debug)]
pub struct Slider<T> {
    len: usize,
    current: usize,
    autoplay: Option<T>,
}

impl<T> Slider<T> {
    /// `None` for a slider without images.
    pub fn new(len: usize) -> Option<Self> {
        (len > 0).then_some(Self {
            len,
            current: 0,
            autoplay: None,
        })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn autoplays_on_load(&self) -> bool {
        self.len > 1
    }

    pub fn is_autoplaying(&self) -> bool {
        self.autoplay.is_some()
    }

    pub fn go(&mut self, navigation: Navigation) -> usize {
        self.current = match navigation {
            Navigation::Next => (self.current + 1) % self.len,
            Navigation::Prev => (self.current + self.len - 1) % self.len,
            Navigation::Jump(index) if index < self.len => index,
            Navigation::Jump(_) => 0,
        };
        self.current
    }

    pub fn is_active(&self, index: usize) -> bool {
        index == self.current
    }

    pub fn start_autoplay(&mut self, timer: impl FnOnce() -> T) {
        self.autoplay = None;
        self.autoplay = Some(timer());
    }

    pub fn stop_autoplay(&mut self) {
        self.autoplay = None;
    }

    /// Manual navigation: move, then cancel and restart autoplay.
    pub fn navigate(&mut self, navigation: Navigation, timer: impl FnOnce() -> T) -> usize {
        let index = self.go(navigation);
        self.start_autoplay(timer);
        index
    }
}
