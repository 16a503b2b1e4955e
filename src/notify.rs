//! Toast notifications. One at a time; a new toast replaces the current one.

use std::future::Future;

pub const NOTIFICATION_SELECTOR: &str = ".notification";
pub const DISMISS_AFTER_MS: u32 = 5_000;
pub const SLIDE_OUT_MS: u32 = 400;
pub const SLIDE_IN_ANIMATION: &str = "slideInRight 0.4s ease";
pub const SLIDE_OUT_ANIMATION: &str = "slideOutRight 0.4s ease";

pub const KEYFRAMES_CSS: &str = "
    @keyframes slideInRight {
        from { transform: translateX(400px); opacity: 0; }
        to { transform: translateX(0); opacity: 1; }
    }

    @keyframes slideOutRight {
        from { transform: translateX(0); opacity: 1; }
        to { transform: translateX(400px); opacity: 0; }
    }
";

const SUCCESS_BACKGROUND: &str = "rgba(34, 197, 94, 0.95)";
const SUCCESS_BORDER: &str = "2px solid rgba(34, 197, 94, 0.3)";
const ALERT_BACKGROUND: &str = "rgba(239, 68, 68, 0.95)";
const ALERT_BORDER: &str = "2px solid rgba(239, 68, 68, 0.3)";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NotificationKind {
    #[default]
    Info,
    Success,
    Error,
}

impl NotificationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
        }
    }

    pub fn class_name(self) -> String {
        format!("notification notification-{}", self.as_str())
    }

    /// Success is green; info and error share the alert palette.
    pub fn background(self) -> &'static str {
        match self {
            Self::Success => SUCCESS_BACKGROUND,
            Self::Info | Self::Error => ALERT_BACKGROUND,
        }
    }

    pub fn border(self) -> &'static str {
        match self {
            Self::Success => SUCCESS_BORDER,
            Self::Info | Self::Error => ALERT_BORDER,
        }
    }

    /// Inline style declarations, as CSS property names.
    pub fn style(self) -> [(&'static str, &'static str); 15] {
        [
            ("position", "fixed"),
            ("top", "100px"),
            ("right", "20px"),
            ("padding", "1.5rem 2rem"),
            ("background", self.background()),
            ("color", "white"),
            ("border-radius", "15px"),
            ("box-shadow", "0 10px 40px rgba(0, 0, 0, 0.3)"),
            ("z-index", "10000"),
            ("font-size", "1rem"),
            ("font-weight", "600"),
            ("max-width", "400px"),
            ("animation", SLIDE_IN_ANIMATION),
            ("backdrop-filter", "blur(10px)"),
            ("border", self.border()),
        ]
    }
}

/// Where toasts live. The browser implementation works on the document body.
pub trait ToastHost {
    type Node;

    fn current(&self) -> Option<Self::Node>;
    fn remove(&self, node: &Self::Node);
    fn mount(&self, message: &str, kind: NotificationKind) -> Option<Self::Node>;
    fn slide_out(&self, node: &Self::Node);
}

/// Removes any visible toast and mounts a new one. The caller owns the
/// returned node's dismissal.
pub fn present<H: ToastHost>(host: &H, message: &str, kind: NotificationKind) -> Option<H::Node> {
    if let Some(existing) = host.current() {
        host.remove(&existing);
    }
    host.mount(message, kind)
}

/// Timed dismissal of a mounted toast: slide out after five seconds, then
/// detach once the animation has played. Removing a toast that was already
/// replaced is a no-op.
pub async fn dismiss<H, S, F>(host: &H, node: H::Node, mut sleep: S)
where
    H: ToastHost,
    S: FnMut(u32) -> F,
    F: Future<Output = ()>,
{
    sleep(DISMISS_AFTER_MS).await;
    host.slide_out(&node);
    sleep(SLIDE_OUT_MS).await;
    host.remove(&node);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct FakeBody {
        toasts: RefCell<Vec<(usize, String, NotificationKind)>>,
        next_id: RefCell<usize>,
        log: RefCell<Vec<String>>,
    }

    impl ToastHost for FakeBody {
        type Node = usize;

        fn current(&self) -> Option<usize> {
            self.toasts.borrow().first().map(|(id, _, _)| *id)
        }

        fn remove(&self, node: &usize) {
            self.log.borrow_mut().push(format!("remove {node}"));
            self.toasts.borrow_mut().retain(|(id, _, _)| id != node);
        }

        fn slide_out(&self, node: &usize) {
            self.log.borrow_mut().push(format!("slide out {node}"));
        }

        fn mount(&self, message: &str, kind: NotificationKind) -> Option<usize> {
            let id = {
                let mut next = self.next_id.borrow_mut();
                *next += 1;
                *next
            };
            self.toasts.borrow_mut().push((id, message.to_string(), kind));
            Some(id)
        }
    }

    #[test]
    fn second_toast_replaces_the_first() {
        let body = FakeBody::default();

        present(&body, "first", NotificationKind::Error);
        let second = present(&body, "second", NotificationKind::Success);

        let toasts = body.toasts.borrow();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].1, "second");
        assert_eq!(Some(toasts[0].0), second);
    }

    #[test]
    fn removing_a_dismissed_toast_twice_is_harmless() {
        let body = FakeBody::default();
        let node = present(&body, "hello", NotificationKind::Info).expect("mounted");

        body.remove(&node);
        body.remove(&node);
        assert!(body.current().is_none());
    }

    #[tokio::test]
    async fn toast_slides_out_after_five_seconds_then_detaches() {
        let body = FakeBody::default();
        let node = present(&body, "saved", NotificationKind::Success).expect("mounted");

        dismiss(&body, node, |ms| {
            body.log.borrow_mut().push(format!("sleep {ms}"));
            std::future::ready(())
        })
        .await;

        assert_eq!(
            *body.log.borrow(),
            vec!["sleep 5000", "slide out 1", "sleep 400", "remove 1"]
        );
        assert!(body.current().is_none());
    }

    #[tokio::test]
    async fn dismissing_a_replaced_toast_leaves_the_new_one() {
        let body = FakeBody::default();
        let first = present(&body, "first", NotificationKind::Error).expect("mounted");
        let second = present(&body, "second", NotificationKind::Info).expect("mounted");

        dismiss(&body, first, |_| std::future::ready(())).await;

        assert_eq!(body.current(), Some(second));
        assert_eq!(body.toasts.borrow()[0].1, "second");
    }

    #[test]
    fn class_name_carries_kind() {
        assert_eq!(NotificationKind::Success.class_name(), "notification notification-success");
        assert_eq!(NotificationKind::default().as_str(), "info");
    }

    #[test]
    fn only_success_is_green() {
        assert_eq!(NotificationKind::Success.background(), SUCCESS_BACKGROUND);
        assert_eq!(NotificationKind::Error.background(), ALERT_BACKGROUND);
        assert_eq!(NotificationKind::Info.border(), ALERT_BORDER);

        let style = NotificationKind::Success.style();
        assert!(style.contains(&("border", SUCCESS_BORDER)));
        assert!(style.contains(&("animation", SLIDE_IN_ANIMATION)));
    }
}
