use crate::carousel::{self, Navigation, Slider};
use crate::contact::{self, ContactFields, RelayError, SubmissionView};
use crate::lazy::{self, LazyImage};
use crate::menu::{self, MenuEvent, MenuState};
use crate::notify::{self, NotificationKind, ToastHost};
use crate::reveal::{self, CounterAnimation, FollowUps, Markable};
use crate::scroll::{self, SectionBox};
use crate::telemetry::Logger;
use crate::typing::{self, StopSignal, Typewriter};
use gloo_net::http::Request;
use gloo_timers::{callback::Interval, future::TimeoutFuture};
use js_sys::Array;
use std::{cell::RefCell, rc::Rc};
use thiserror::Error;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::{
    window, Document, Element, Event, EventTarget, HtmlButtonElement,
    HtmlElement, HtmlFormElement, HtmlImageElement, HtmlInputElement, HtmlTextAreaElement,
    IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, KeyboardEvent,
    Node, NodeList, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, Window,
};

const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";
const CARD_RAISED_Z_INDEX: &str = "10";
const CARD_RESTING_Z_INDEX: &str = "1";
const PAGE_FADE_DELAY_MS: u32 = 100;
const PAGE_FADE_TRANSITION: &str = "opacity 0.5s ease";
const BANNER_TITLE: &str = "%c🚀 Portfolio Loaded Successfully! ";
const BANNER_TITLE_STYLE: &str = "background: linear-gradient(135deg, #8b5cf6, #a855f7); color: white; padding: 10px 20px; border-radius: 5px; font-size: 16px; font-weight: bold;";
const BANNER_CREDIT: &str = "%cDeveloped by GAB";
const BANNER_CREDIT_STYLE: &str = "color: #a855f7; font-size: 14px;";

#[derive(Debug, Error)]
enum SetupError {
    #[error("missing element `{0}`")]
    MissingElement(&'static str),
    #[error("{context}: {detail}")]
    Browser { context: &'static str, detail: String },
}

impl SetupError {
    fn browser(context: &'static str, value: JsValue) -> Self {
        Self::Browser {
            context,
            detail: value.as_string().unwrap_or_else(|| format!("{value:?}")),
        }
    }
}

fn listen(
    target: &EventTarget,
    event: &'static str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), SetupError> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(|err| SetupError::browser("addEventListener", err))?;
    closure.forget();
    Ok(())
}

fn elements(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|index| list.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    document
        .query_selector_all(selector)
        .map(elements)
        .unwrap_or_default()
}

fn query_all_in(root: &Element, selector: &str) -> Vec<Element> {
    root.query_selector_all(selector)
        .map(elements)
        .unwrap_or_default()
}

fn query_in(root: &Element, selector: &str) -> Option<Element> {
    root.query_selector(selector).ok().flatten()
}

fn set_style(element: &Element, property: &str, value: &str) {
    if let Some(element) = element.dyn_ref::<HtmlElement>() {
        let _ = element.style().set_property(property, value);
    }
}

fn style_value(element: &Element, property: &str) -> String {
    element
        .dyn_ref::<HtmlElement>()
        .and_then(|element| element.style().get_property_value(property).ok())
        .unwrap_or_default()
}

fn set_class(element: &Element, class: &str, present: bool) {
    let classes = element.class_list();
    let _ = if present {
        classes.add_1(class)
    } else {
        classes.remove_1(class)
    };
}

fn scroll_y(window: &Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

fn alert(message: &str) {
    if let Some(window) = window() {
        let _ = window.alert_with_message(message);
    }
}

impl Markable for Element {
    fn has_marker(&self, marker: &str) -> bool {
        self.class_list().contains(marker)
    }

    fn set_marker(&self, marker: &str) {
        let _ = self.class_list().add_1(marker);
    }
}

impl LazyImage for HtmlImageElement {
    fn placeholder(&self) -> Option<String> {
        self.get_attribute(lazy::PLACEHOLDER_ATTRIBUTE)
    }

    fn set_source(&self, src: &str) {
        self.set_src(src);
    }

    fn clear_placeholder(&self) {
        let _ = self.remove_attribute(lazy::PLACEHOLDER_ATTRIBUTE);
    }
}

struct PageToasts {
    document: Document,
}

impl ToastHost for PageToasts {
    type Node = Element;

    fn current(&self) -> Option<Element> {
        self.document
            .query_selector(notify::NOTIFICATION_SELECTOR)
            .ok()
            .flatten()
    }

    fn remove(&self, node: &Element) {
        node.remove();
    }

    fn mount(&self, message: &str, kind: NotificationKind) -> Option<Element> {
        let body = self.document.body()?;
        let node = self.document.create_element("div").ok()?;
        node.set_class_name(&kind.class_name());
        node.set_text_content(Some(message));
        for (property, value) in kind.style() {
            set_style(&node, property, value);
        }
        body.append_child(&node).ok()?;
        Some(node)
    }

    fn slide_out(&self, node: &Element) {
        set_style(node, "animation", notify::SLIDE_OUT_ANIMATION);
    }
}

fn show_notification(message: &str, kind: NotificationKind) {
    let Some(document) = window().and_then(|w| w.document()) else {
        return;
    };

    let toasts = PageToasts { document };
    let Some(node) = notify::present(&toasts, message, kind) else {
        return;
    };

    spawn_local(async move {
        notify::dismiss(&toasts, node, TimeoutFuture::new).await;
    });
}

fn install_notification_keyframes(document: &Document) -> Result<(), SetupError> {
    let head = document.head().ok_or(SetupError::MissingElement("head"))?;
    let style = document
        .create_element("style")
        .map_err(|err| SetupError::browser("createElement", err))?;
    style.set_text_content(Some(notify::KEYFRAMES_CSS));
    head.append_child(&style)
        .map_err(|err| SetupError::browser("appendChild", err))?;
    Ok(())
}

struct MenuController {
    state: RefCell<MenuState>,
    toggle: Element,
    panel: Element,
    body: HtmlElement,
}

impl MenuController {
    fn dispatch(&self, event: MenuEvent) {
        let state = {
            let mut state = self.state.borrow_mut();
            state.apply(event);
            *state
        };

        set_class(&self.toggle, menu::OPEN_CLASS, state.is_open());
        set_class(&self.panel, menu::OPEN_CLASS, state.is_open());
        let _ = self
            .body
            .style()
            .set_property("overflow", state.body_overflow());
    }

    fn contains(&self, target: Option<&Node>) -> (bool, bool) {
        (self.toggle.contains(target), self.panel.contains(target))
    }
}

fn install_menu(document: &Document) -> Result<(), SetupError> {
    let toggle = document
        .get_element_by_id(menu::TOGGLE_ID)
        .ok_or(SetupError::MissingElement("#burgerMenu"))?;
    let panel = document
        .get_element_by_id(menu::PANEL_ID)
        .ok_or(SetupError::MissingElement("#navMenu"))?;
    let body = document.body().ok_or(SetupError::MissingElement("body"))?;

    let controller = Rc::new(MenuController {
        state: RefCell::new(MenuState::default()),
        toggle,
        panel,
        body,
    });

    let on_toggle = controller.clone();
    listen(&controller.toggle, "click", move |_| {
        on_toggle.dispatch(MenuEvent::Toggle)
    })?;

    for link in query_all(document, menu::NAV_LINK_SELECTOR) {
        let on_link = controller.clone();
        listen(&link, "click", move |_| on_link.dispatch(MenuEvent::LinkClicked))?;
    }

    let on_click = controller.clone();
    listen(document, "click", move |event| {
        let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
        let (in_toggle, in_panel) = on_click.contains(target.as_ref());
        if let Some(event) = MenuEvent::from_document_click(in_toggle, in_panel) {
            on_click.dispatch(event);
        }
    })?;

    let on_key = controller;
    listen(document, "keydown", move |event| {
        let event = event
            .dyn_ref::<KeyboardEvent>()
            .and_then(|key| MenuEvent::from_key(&key.key()));
        if let Some(event) = event {
            on_key.dispatch(event);
        }
    })?;

    Ok(())
}

fn install_smooth_anchors(document: &Document) -> Result<(), SetupError> {
    for anchor in query_all(document, ANCHOR_SELECTOR) {
        let document = document.clone();
        let href = anchor.get_attribute("href").unwrap_or_default();
        listen(&anchor, "click", move |event| {
            event.prevent_default();
            let Some(target) = document.query_selector(&href).ok().flatten() else {
                return;
            };
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            target.scroll_into_view_with_scroll_into_view_options(&options);
        })?;
    }
    Ok(())
}

fn install_active_link_tracking(window: &Window, document: &Document) -> Result<(), SetupError> {
    let links = query_all(document, menu::NAV_LINK_SELECTOR);
    let scroller = window.clone();
    let document = document.clone();

    listen(window, "scroll", move |_| {
        let sections: Vec<SectionBox> = query_all(&document, scroll::SECTION_SELECTOR)
            .iter()
            .map(|section| SectionBox {
                id: section.get_attribute("id"),
                top: section
                    .dyn_ref::<HtmlElement>()
                    .map(|section| f64::from(section.offset_top()))
                    .unwrap_or(0.0),
            })
            .collect();
        let active = scroll::active_href(scroll_y(&scroller), &sections);

        for link in &links {
            let is_active = link.get_attribute("href").as_deref() == Some(active.as_str());
            set_class(link, scroll::ACTIVE_LINK_CLASS, false);
            if is_active {
                set_class(link, scroll::ACTIVE_LINK_CLASS, true);
            }
        }
    })
}

fn install_parallax(window: &Window, document: &Document) -> Result<(), SetupError> {
    let scroller = window.clone();
    let document = document.clone();

    listen(window, "scroll", move |_| {
        let scrolled = scroll_y(&scroller);

        for (index, circle) in query_all(&document, scroll::CIRCLE_SELECTOR).iter().enumerate() {
            set_style(circle, "transform", &scroll::circle_transform(index, scrolled));
        }

        let viewport_height = scroller
            .inner_height()
            .ok()
            .and_then(|value| value.as_f64())
            .unwrap_or(0.0);
        let hero = document.query_selector(scroll::HERO_IMAGE_SELECTOR).ok().flatten();
        if let (Some(hero), Some(transform)) = (hero, scroll::hero_transform(scrolled, viewport_height)) {
            set_style(&hero, "transform", &transform);
        }
    })
}

fn install_header_shadow(window: &Window, document: &Document) -> Result<(), SetupError> {
    let header = document
        .query_selector(scroll::HEADER_SELECTOR)
        .ok()
        .flatten()
        .ok_or(SetupError::MissingElement(".header"))?;
    let scroller = window.clone();

    listen(window, "scroll", move |_| {
        set_style(&header, "box-shadow", scroll::header_shadow(scroll_y(&scroller)));
    })
}

fn animate_skill_bar(card: &Element) {
    let Some(bar) = query_in(card, reveal::SKILL_FILL_SELECTOR) else {
        return;
    };
    if !reveal::claim_once(&bar, reveal::SKILL_ANIMATED_MARKER) {
        return;
    }

    let target_width = style_value(&bar, "width");
    set_style(&bar, "width", reveal::SKILL_COLLAPSED_WIDTH);

    spawn_local(async move {
        TimeoutFuture::new(reveal::SKILL_FILL_DELAY_MS).await;
        set_style(&bar, "width", &target_width);
    });
}

fn animate_stat_counter(item: &Element) {
    let Some(number) = query_in(item, reveal::STAT_NUMBER_SELECTOR) else {
        return;
    };
    if !reveal::claim_once(&number, reveal::STAT_COUNTED_MARKER) {
        return;
    }

    let text = number.text_content().unwrap_or_default();
    let Some(animation) = CounterAnimation::new(&text) else {
        return;
    };
    let interval = animation.interval_ms();

    spawn_local(async move {
        for frame in animation {
            TimeoutFuture::new(interval).await;
            number.set_text_content(Some(&frame));
        }
    });
}

fn reveal_element(target: &Element) {
    set_style(target, "opacity", reveal::SHOWN_OPACITY);
    set_style(target, "transform", reveal::SHOWN_TRANSFORM);

    let classes = target.class_list();
    let follow_ups = FollowUps::for_classes(|class| classes.contains(class));
    if follow_ups.skill_bar {
        animate_skill_bar(target);
    }
    if follow_ups.counter {
        animate_stat_counter(target);
    }
}

fn intersecting_targets(entries: &Array) -> Vec<Element> {
    entries
        .iter()
        .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
        .filter(IntersectionObserverEntry::is_intersecting)
        .map(|entry| entry.target())
        .collect()
}

fn install_reveal(document: &Document) -> Result<(), SetupError> {
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, _observer: IntersectionObserver| {
            for target in intersecting_targets(&entries) {
                reveal_element(&target);
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(reveal::VISIBILITY_THRESHOLD));
    options.set_root_margin(reveal::ROOT_MARGIN);

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(|err| SetupError::browser("IntersectionObserver", err))?;
    callback.forget();

    for element in query_all(document, reveal::OBSERVED_SELECTOR) {
        set_style(&element, "opacity", reveal::HIDDEN_OPACITY);
        set_style(&element, "transform", reveal::HIDDEN_TRANSFORM);
        set_style(&element, "transition", reveal::REVEAL_TRANSITION);
        observer.observe(&element);
    }
    Ok(())
}

fn install_lazy_images(document: &Document) -> Result<(), SetupError> {
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for target in intersecting_targets(&entries) {
                if let Some(image) = target.dyn_ref::<HtmlImageElement>() {
                    lazy::load(image);
                }
                observer.unobserve(&target);
            }
        },
    );

    let observer = IntersectionObserver::new(callback.as_ref().unchecked_ref())
        .map_err(|err| SetupError::browser("IntersectionObserver", err))?;
    callback.forget();

    for image in query_all(document, lazy::LAZY_IMAGE_SELECTOR) {
        observer.observe(&image);
    }
    Ok(())
}

fn install_typing(document: &Document) -> Result<StopSignal, SetupError> {
    let target = document
        .get_element_by_id(typing::TARGET_ID)
        .ok_or(SetupError::MissingElement("#typed"))?;
    let stop = StopSignal::default();

    spawn_local(typing::drive(
        Typewriter::default(),
        stop.clone(),
        TimeoutFuture::new,
        move |markup| target.set_inner_html(markup),
    ));
    Ok(stop)
}

struct CardCarousel {
    slider: RefCell<Slider<Interval>>,
    images: Vec<Element>,
    dots: Vec<Element>,
}

impl CardCarousel {
    fn render(&self) {
        let slider = self.slider.borrow();
        for (index, image) in self.images.iter().enumerate() {
            set_class(image, carousel::ACTIVE_CLASS, slider.is_active(index));
        }
        for (index, dot) in self.dots.iter().enumerate() {
            set_class(dot, carousel::ACTIVE_CLASS, slider.is_active(index));
        }
    }

    fn autoplay_timer(self: &Rc<Self>) -> impl FnOnce() -> Interval {
        let card = Rc::downgrade(self);
        move || {
            Interval::new(carousel::AUTOPLAY_INTERVAL_MS, move || {
                if let Some(card) = card.upgrade() {
                    card.slider.borrow_mut().go(Navigation::Next);
                    card.render();
                }
            })
        }
    }

    fn navigate(self: &Rc<Self>, navigation: Navigation) {
        let timer = self.autoplay_timer();
        self.slider.borrow_mut().navigate(navigation, timer);
        self.render();
    }

    fn resume(self: &Rc<Self>) {
        let timer = self.autoplay_timer();
        self.slider.borrow_mut().start_autoplay(timer);
    }

    fn pause(&self) {
        self.slider.borrow_mut().stop_autoplay();
    }
}

fn on_control_click(
    control: &Element,
    carousel: &Rc<CardCarousel>,
    navigation: Navigation,
) -> Result<(), SetupError> {
    let carousel = carousel.clone();
    listen(control, "click", move |event| {
        event.prevent_default();
        event.stop_propagation();
        carousel.navigate(navigation);
    })
}

fn install_carousels(document: &Document) -> Result<usize, SetupError> {
    let mut installed = 0;

    for card in query_all(document, carousel::CARD_SELECTOR) {
        let Some(slider_root) = query_in(&card, carousel::SLIDER_SELECTOR) else {
            continue;
        };
        let images = query_all_in(&slider_root, carousel::IMAGE_SELECTOR);
        let Some(slider) = Slider::new(images.len()) else {
            continue;
        };
        let autoplays = slider.autoplays_on_load();

        let card_carousel = Rc::new(CardCarousel {
            slider: RefCell::new(slider),
            images,
            dots: query_all_in(&card, carousel::DOT_SELECTOR),
        });

        if let Some(next) = query_in(&card, carousel::NEXT_SELECTOR) {
            on_control_click(&next, &card_carousel, Navigation::Next)?;
        }
        if let Some(prev) = query_in(&card, carousel::PREV_SELECTOR) {
            on_control_click(&prev, &card_carousel, Navigation::Prev)?;
        }
        for (index, dot) in card_carousel.dots.iter().enumerate() {
            on_control_click(dot, &card_carousel, Navigation::Jump(index))?;
        }

        let on_enter = card_carousel.clone();
        listen(&card, "mouseenter", move |_| on_enter.pause())?;
        let on_leave = card_carousel.clone();
        listen(&card, "mouseleave", move |_| on_leave.resume())?;

        if autoplays {
            card_carousel.resume();
        }
        installed += 1;
    }

    Ok(installed)
}

fn install_card_stacking(document: &Document) -> Result<(), SetupError> {
    for card in query_all(document, carousel::CARD_SELECTOR) {
        let raised = card.clone();
        listen(&card, "mouseenter", move |_| {
            set_style(&raised, "z-index", CARD_RAISED_Z_INDEX)
        })?;
        let resting = card.clone();
        listen(&card, "mouseleave", move |_| {
            set_style(&resting, "z-index", CARD_RESTING_Z_INDEX)
        })?;
    }
    Ok(())
}

fn field_value(document: &Document, id: &str) -> String {
    let Some(field) = document.get_element_by_id(id) else {
        return String::new();
    };

    if let Some(input) = field.dyn_ref::<HtmlInputElement>() {
        return input.value();
    }
    field
        .dyn_ref::<HtmlTextAreaElement>()
        .map(HtmlTextAreaElement::value)
        .unwrap_or_default()
}

fn read_contact_fields(document: &Document) -> ContactFields {
    ContactFields {
        name: field_value(document, contact::NAME_FIELD_ID),
        email: field_value(document, contact::EMAIL_FIELD_ID),
        subject: field_value(document, contact::SUBJECT_FIELD_ID),
        message: field_value(document, contact::MESSAGE_FIELD_ID),
    }
}

fn set_disabled(control: &Element, disabled: bool) {
    if let Some(button) = control.dyn_ref::<HtmlButtonElement>() {
        button.set_disabled(disabled);
    } else if disabled {
        let _ = control.set_attribute("disabled", "");
    } else {
        let _ = control.remove_attribute("disabled");
    }
}

async fn send_via_relay(fields: &ContactFields) -> Result<(), RelayError> {
    let response = Request::post(contact::RELAY_ENDPOINT)
        .json(&fields.relay_request())
        .map_err(|err| RelayError::Transport(err.to_string()))?
        .send()
        .await
        .map_err(|err| RelayError::Transport(err.to_string()))?;

    if response.ok() {
        return Ok(());
    }

    Err(RelayError::Rejected {
        status: response.status(),
        body: response.text().await.unwrap_or_default(),
    })
}

struct ContactPage {
    form: HtmlFormElement,
    button: Option<Element>,
}

impl SubmissionView for ContactPage {
    fn submit_label(&self) -> Option<String> {
        self.button
            .as_ref()
            .map(|button| button.text_content().unwrap_or_default())
    }

    fn set_submit(&self, label: &str, disabled: bool) {
        if let Some(button) = &self.button {
            button.set_text_content(Some(label));
            set_disabled(button, disabled);
        }
    }

    fn notify(&self, message: &str, kind: NotificationKind) {
        show_notification(message, kind);
    }

    fn reset(&self) {
        self.form.reset();
    }
}

fn submit_validated(document: &Document, form: &HtmlFormElement) {
    let fields = read_contact_fields(document);
    let page = ContactPage {
        form: form.clone(),
        button: form.query_selector(contact::SUBMIT_SELECTOR).ok().flatten(),
    };

    spawn_local(async move {
        contact::submit(&page, &fields, TimeoutFuture::new).await;
    });
}

fn install_contact_form(document: &Document, logger: Logger) -> Result<(), SetupError> {
    let form = document
        .get_element_by_id(contact::FORM_ID)
        .and_then(|form| form.dyn_into::<HtmlFormElement>().ok())
        .ok_or(SetupError::MissingElement("#contactForm"))?;

    // The relay path and the validated path are independent listeners; both
    // run on every submission.
    let relay_document = document.clone();
    let relay_form = form.clone();
    listen(&form, "submit", move |event| {
        event.prevent_default();
        let fields = read_contact_fields(&relay_document);
        let form = relay_form.clone();
        spawn_local(async move {
            match send_via_relay(&fields).await {
                Ok(()) => {
                    alert(contact::RELAY_SUCCESS_ALERT);
                    form.reset();
                }
                Err(error) => {
                    alert(contact::RELAY_FAILURE_ALERT);
                    logger.error(
                        "mail_relay_failed",
                        serde_json::json!({ "message": "FAILED...", "detail": error.to_string() }),
                    );
                }
            }
        });
    })?;

    let validated_document = document.clone();
    let validated_form = form.clone();
    listen(&form, "submit", move |event| {
        event.prevent_default();
        submit_validated(&validated_document, &validated_form);
    })
}

fn fade_in_body(document: &Document) {
    let Some(body) = document.body() else {
        return;
    };
    let _ = body.style().set_property("opacity", "0");

    spawn_local(async move {
        TimeoutFuture::new(PAGE_FADE_DELAY_MS).await;
        let style = body.style();
        let _ = style.set_property("transition", PAGE_FADE_TRANSITION);
        let _ = style.set_property("opacity", "1");
    });
}

fn install_page_fade(window: &Window, document: &Document) -> Result<(), SetupError> {
    if document.ready_state() == "complete" {
        fade_in_body(document);
        return Ok(());
    }

    let document = document.clone();
    listen(window, "load", move |_| fade_in_body(&document))
}

fn log_banner() {
    web_sys::console::log_2(
        &JsValue::from_str(BANNER_TITLE),
        &JsValue::from_str(BANNER_TITLE_STYLE),
    );
    web_sys::console::log_2(
        &JsValue::from_str(BANNER_CREDIT),
        &JsValue::from_str(BANNER_CREDIT_STYLE),
    );
}

fn report<T>(logger: Logger, component: &str, result: Result<T, SetupError>) -> Option<T> {
    match result {
        Ok(value) => {
            logger.debug(
                "component_installed",
                serde_json::json!({ "component": component }),
            );
            Some(value)
        }
        Err(error) => {
            logger.warn(
                "component_skipped",
                serde_json::json!({ "component": component, "reason": error.to_string() }),
            );
            None
        }
    }
}

fn install_after_parse(document: &Document, logger: Logger) {
    // Nothing stops the typing loop on a live page.
    let _typing = report(logger, "typing", install_typing(document));
    report(logger, "reveal", install_reveal(document));
    report(logger, "card_stacking", install_card_stacking(document));
    report(logger, "lazy_images", install_lazy_images(document));
    if let Some(count) = report(logger, "carousels", install_carousels(document)) {
        logger.info("carousels_ready", serde_json::json!({ "count": count }));
    }
}

pub fn run() {
    let logger = Logger::default();
    let Some(window) = window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    report(logger, "menu", install_menu(&document));
    report(logger, "contact_form", install_contact_form(&document, logger));
    report(logger, "smooth_anchors", install_smooth_anchors(&document));
    report(logger, "active_links", install_active_link_tracking(&window, &document));
    report(logger, "parallax", install_parallax(&window, &document));
    report(logger, "header_shadow", install_header_shadow(&window, &document));
    report(logger, "notifications", install_notification_keyframes(&document));
    report(logger, "page_fade", install_page_fade(&window, &document));
    log_banner();

    if document.ready_state() == "loading" {
        let parsed = document.clone();
        report(
            logger,
            "dom_ready",
            listen(&document, "DOMContentLoaded", move |_| {
                install_after_parse(&parsed, logger)
            }),
        );
    } else {
        install_after_parse(&document, logger);
    }
}
