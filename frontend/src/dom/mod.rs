//! Element handles the controller is written against.
//!
//! The browser backend lives in [`web`]; host tests use an in-memory tree from
//! `test_support`.

pub mod registry;
pub mod selector;
pub mod web;

pub use registry::{Anchor, Group, Lookup, UiRegistry, Wiring};
pub use selector::Selector;

use crate::error::UiError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
    MouseEnter,
    MouseLeave,
    Submit,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Click => "click",
            EventKind::MouseEnter => "mouseenter",
            EventKind::MouseLeave => "mouseleave",
            EventKind::Submit => "submit",
        }
    }

    /// Whether the event travels from the target up through its ancestors.
    pub fn bubbles(&self) -> bool {
        !matches!(self, EventKind::MouseEnter | EventKind::MouseLeave)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

pub type Handler<E> = Box<dyn Fn(&<E as UiElement>::Event)>;

pub trait UiEvent {
    type Element;

    fn target(&self) -> Option<Self::Element>;
    fn client_position(&self) -> (f64, f64);
    fn stop_propagation(&self);
    fn prevent_default(&self);
}

/// A handle to one node of the page. Handles are cheap to clone and compare
/// by node identity.
pub trait UiElement: Clone + PartialEq + 'static {
    type Event: UiEvent<Element = Self>;

    fn attribute(&self, name: &str) -> Option<String>;
    fn has_class(&self, class: &str) -> bool;
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);
    /// Returns whether the class is present afterwards.
    fn toggle_class(&self, class: &str) -> bool;

    fn style(&self, property: &str) -> Option<String>;
    fn set_style(&self, property: &str, value: &str);
    fn clear_style(&self, property: &str);

    fn text(&self) -> String;
    fn set_text(&self, text: &str);

    /// Inclusive: an element contains itself.
    fn contains(&self, other: &Self) -> bool;
    fn parent(&self) -> Option<Self>;
    fn closest(&self, selector: &Selector) -> Option<Self>;
    fn query(&self, selector: &Selector) -> Option<Self>;
    fn query_all(&self, selector: &Selector) -> Vec<Self>;
    fn find_by_id(&self, id: &str) -> Option<Self>;

    fn bounding_rect(&self) -> Rect;
    fn append_new(&self, tag: &str) -> Option<Self>;
    fn remove(&self);
    fn reset_form(&self);

    fn listen(&self, kind: EventKind, handler: Handler<Self>) -> Result<(), UiError>;
}

/// Text of the first `h4` below `scope`, trimmed.
pub fn heading_text<E: UiElement>(scope: &E) -> Option<String> {
    scope
        .query(&Selector::parse("h4"))
        .map(|heading| heading.text().trim().to_string())
}
