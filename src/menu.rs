pub const TOGGLE_ID: &str = "burgerMenu";
pub const PANEL_ID: &str = "navMenu";
pub const NAV_LINK_SELECTOR: &str = ".nav-menu a";
pub const OPEN_CLASS: &str = "active";
pub const SCROLL_LOCKED: &str = "hidden";
pub const SCROLL_UNLOCKED: &str = "";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuEvent {
    Toggle,
    LinkClicked,
    OutsideClick,
    Escape,
}

impl MenuEvent {
    /// Document-level click: only a click landing outside both the toggle
    /// control and the panel closes the menu.
    pub fn from_document_click(in_toggle: bool, in_panel: bool) -> Option<Self> {
        (!in_toggle && !in_panel).then_some(Self::OutsideClick)
    }

    pub fn from_key(key: &str) -> Option<Self> {
        (key == "Escape").then_some(Self::Escape)
    }
}

/// Navigation overlay state. Both class lists and the body scroll lock are
/// rendered from this one flag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn apply(&mut self, event: MenuEvent) {
        self.open = match event {
            MenuEvent::Toggle => !self.open,
            MenuEvent::LinkClicked | MenuEvent::OutsideClick | MenuEvent::Escape => false,
        };
    }

    pub fn body_overflow(self) -> &'static str {
        if self.open {
            SCROLL_LOCKED
        } else {
            SCROLL_UNLOCKED
        }
    }
}
