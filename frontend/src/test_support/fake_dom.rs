use crate::dom::{EventKind, Handler, Rect, Selector, UiElement, UiEvent};
use crate::error::UiError;
use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};

type Listener = Rc<dyn Fn(&FakeEvent)>;

struct Node {
    tag: String,
    attrs: RefCell<BTreeMap<String, String>>,
    classes: RefCell<Vec<String>>,
    styles: RefCell<BTreeMap<String, String>>,
    text: RefCell<String>,
    value: RefCell<String>,
    rect: Cell<Rect>,
    parent: RefCell<Weak<Node>>,
    children: RefCell<Vec<FakeElement>>,
    listeners: RefCell<Vec<(EventKind, Listener)>>,
}

/// In-memory element tree with DOM-like event bubbling.
#[derive(Clone)]
pub struct FakeElement(Rc<Node>);

impl PartialEq for FakeElement {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl std::fmt::Debug for FakeElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<{}", self.0.tag)?;
        if let Some(id) = self.attribute("id") {
            write!(f, " id={id}")?;
        }
        write!(f, " class={:?}>", self.0.classes.borrow())
    }
}

impl FakeElement {
    pub fn new(tag: &str) -> Self {
        Self(Rc::new(Node {
            tag: tag.to_ascii_lowercase(),
            attrs: RefCell::new(BTreeMap::new()),
            classes: RefCell::new(Vec::new()),
            styles: RefCell::new(BTreeMap::new()),
            text: RefCell::new(String::new()),
            value: RefCell::new(String::new()),
            rect: Cell::new(Rect::default()),
            parent: RefCell::new(Weak::new()),
            children: RefCell::new(Vec::new()),
            listeners: RefCell::new(Vec::new()),
        }))
    }

    pub fn child(&self, tag: &str) -> FakeElement {
        let child = FakeElement::new(tag);
        *child.0.parent.borrow_mut() = Rc::downgrade(&self.0);
        self.0.children.borrow_mut().push(child.clone());
        child
    }

    pub fn with_id(self, id: &str) -> Self {
        self.with_attr("id", id)
    }

    pub fn with_class(self, classes: &str) -> Self {
        for class in classes.split_whitespace() {
            self.add_class(class);
        }
        self
    }

    pub fn with_attr(self, name: &str, value: &str) -> Self {
        self.0
            .attrs
            .borrow_mut()
            .insert(name.to_string(), value.to_string());
        self
    }

    pub fn with_text(self, text: &str) -> Self {
        *self.0.text.borrow_mut() = text.to_string();
        self
    }

    pub fn with_rect(self, rect: Rect) -> Self {
        self.0.rect.set(rect);
        self
    }

    pub fn tag(&self) -> &str {
        &self.0.tag
    }

    pub fn children(&self) -> Vec<FakeElement> {
        self.0.children.borrow().clone()
    }

    pub fn value(&self) -> String {
        self.0.value.borrow().clone()
    }

    pub fn set_value(&self, value: &str) {
        *self.0.value.borrow_mut() = value.to_string();
    }

    pub fn listener_count(&self) -> usize {
        self.0.listeners.borrow().len()
    }

    pub fn click(&self) -> FakeEvent {
        self.dispatch(EventKind::Click, (0.0, 0.0))
    }

    pub fn click_at(&self, x: f64, y: f64) -> FakeEvent {
        self.dispatch(EventKind::Click, (x, y))
    }

    pub fn hover(&self) -> FakeEvent {
        self.dispatch(EventKind::MouseEnter, (0.0, 0.0))
    }

    pub fn unhover(&self) -> FakeEvent {
        self.dispatch(EventKind::MouseLeave, (0.0, 0.0))
    }

    pub fn submit(&self) -> FakeEvent {
        self.dispatch(EventKind::Submit, (0.0, 0.0))
    }

    pub fn dispatch(&self, kind: EventKind, position: (f64, f64)) -> FakeEvent {
        let event = FakeEvent {
            target: self.clone(),
            position,
            stopped: Cell::new(false),
            prevented: Cell::new(false),
        };
        let mut current = Some(self.clone());
        while let Some(node) = current {
            let listeners: Vec<Listener> = node
                .0
                .listeners
                .borrow()
                .iter()
                .filter(|(k, _)| *k == kind)
                .map(|(_, l)| l.clone())
                .collect();
            for listener in listeners {
                listener(&event);
            }
            if event.stopped.get() || !kind.bubbles() {
                break;
            }
            current = node.parent();
        }
        event
    }

    fn descendants(&self) -> Vec<FakeElement> {
        let mut out = Vec::new();
        for child in self.children() {
            out.push(child.clone());
            out.extend(child.descendants());
        }
        out
    }

    fn matches(&self, selector: &Selector) -> bool {
        let steps = selector.steps();
        let Some((last, ancestors)) = steps.split_last() else {
            return false;
        };
        if !self.matches_step(last) {
            return false;
        }
        let mut remaining = ancestors.iter().rev().peekable();
        let mut current = self.parent();
        while let Some(step) = remaining.peek() {
            match current {
                Some(node) => {
                    if node.matches_step(step) {
                        remaining.next();
                    }
                    current = node.parent();
                }
                None => return false,
            }
        }
        true
    }

    fn matches_step(&self, step: &crate::dom::selector::Step) -> bool {
        let id = self.attribute("id");
        step.matches(&self.0.tag, id.as_deref(), |class| self.has_class(class))
    }
}

pub struct FakeEvent {
    target: FakeElement,
    position: (f64, f64),
    stopped: Cell<bool>,
    prevented: Cell<bool>,
}

impl FakeEvent {
    pub fn default_prevented(&self) -> bool {
        self.prevented.get()
    }

    pub fn propagation_stopped(&self) -> bool {
        self.stopped.get()
    }
}

impl UiEvent for FakeEvent {
    type Element = FakeElement;

    fn target(&self) -> Option<FakeElement> {
        Some(self.target.clone())
    }

    fn client_position(&self) -> (f64, f64) {
        self.position
    }

    fn stop_propagation(&self) {
        self.stopped.set(true);
    }

    fn prevent_default(&self) {
        self.prevented.set(true);
    }
}

impl UiElement for FakeElement {
    type Event = FakeEvent;

    fn attribute(&self, name: &str) -> Option<String> {
        if name == "class" {
            return Some(self.0.classes.borrow().join(" "));
        }
        self.0.attrs.borrow().get(name).cloned()
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.classes.borrow().iter().any(|c| c == class)
    }

    fn add_class(&self, class: &str) {
        if !self.has_class(class) {
            self.0.classes.borrow_mut().push(class.to_string());
        }
    }

    fn remove_class(&self, class: &str) {
        self.0.classes.borrow_mut().retain(|c| c != class);
    }

    fn toggle_class(&self, class: &str) -> bool {
        if self.has_class(class) {
            self.remove_class(class);
            false
        } else {
            self.add_class(class);
            true
        }
    }

    fn style(&self, property: &str) -> Option<String> {
        self.0.styles.borrow().get(property).cloned()
    }

    fn set_style(&self, property: &str, value: &str) {
        if value.is_empty() {
            self.clear_style(property);
            return;
        }
        self.0
            .styles
            .borrow_mut()
            .insert(property.to_string(), value.to_string());
    }

    fn clear_style(&self, property: &str) {
        self.0.styles.borrow_mut().remove(property);
    }

    fn text(&self) -> String {
        let mut text = self.0.text.borrow().clone();
        for child in self.children() {
            text.push_str(&child.text());
        }
        text
    }

    fn set_text(&self, text: &str) {
        self.0.children.borrow_mut().clear();
        *self.0.text.borrow_mut() = text.to_string();
    }

    fn contains(&self, other: &Self) -> bool {
        let mut current = Some(other.clone());
        while let Some(node) = current {
            if node == *self {
                return true;
            }
            current = node.parent();
        }
        false
    }

    fn parent(&self) -> Option<Self> {
        self.0.parent.borrow().upgrade().map(FakeElement)
    }

    fn closest(&self, selector: &Selector) -> Option<Self> {
        let mut current = Some(self.clone());
        while let Some(node) = current {
            if node.matches(selector) {
                return Some(node);
            }
            current = node.parent();
        }
        None
    }

    fn query(&self, selector: &Selector) -> Option<Self> {
        self.descendants().into_iter().find(|e| e.matches(selector))
    }

    fn query_all(&self, selector: &Selector) -> Vec<Self> {
        self.descendants()
            .into_iter()
            .filter(|e| e.matches(selector))
            .collect()
    }

    fn find_by_id(&self, id: &str) -> Option<Self> {
        std::iter::once(self.clone())
            .chain(self.descendants())
            .find(|e| e.attribute("id").as_deref() == Some(id))
    }

    fn bounding_rect(&self) -> Rect {
        self.0.rect.get()
    }

    fn append_new(&self, tag: &str) -> Option<Self> {
        Some(self.child(tag))
    }

    fn remove(&self) {
        if let Some(parent) = self.parent() {
            parent.0.children.borrow_mut().retain(|c| c != self);
        }
        *self.0.parent.borrow_mut() = Weak::new();
    }

    fn reset_form(&self) {
        for field in self.descendants() {
            if matches!(field.tag(), "input" | "textarea" | "select") {
                let initial = field.attribute("value").unwrap_or_default();
                field.set_value(&initial);
            }
        }
    }

    fn listen(&self, kind: EventKind, handler: Handler<Self>) -> Result<(), UiError> {
        self.0.listeners.borrow_mut().push((kind, Rc::from(handler)));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn click_bubbles_until_stopped() {
        let root = FakeElement::new("html");
        let row = root.child("tr");
        let button = row.child("button");
        let hits = Rc::new(RefCell::new(Vec::new()));

        let log = hits.clone();
        row.listen(EventKind::Click, Box::new(move |_: &FakeEvent| log.borrow_mut().push("row")))
            .unwrap();
        let log = hits.clone();
        root.listen(EventKind::Click, Box::new(move |_: &FakeEvent| log.borrow_mut().push("root")))
            .unwrap();
        button.click();
        assert_eq!(*hits.borrow(), vec!["row", "root"]);

        hits.borrow_mut().clear();
        button
            .listen(EventKind::Click, Box::new(|ev: &FakeEvent| ev.stop_propagation()))
            .unwrap();
        let event = button.click();
        assert!(event.propagation_stopped());
        assert!(hits.borrow().is_empty());
    }

    #[test]
    fn text_concatenates_descendants() {
        let card = FakeElement::new("div");
        card.child("h4").with_text("Intro to Python");
        card.child("p").with_text(" - 4 weeks");
        assert_eq!(card.text(), "Intro to Python - 4 weeks");
    }

    #[test]
    fn reset_form_restores_initial_values() {
        let form = FakeElement::new("form");
        let kind = form.child("select").with_attr("value", "annual");
        let reason = form.child("textarea");
        kind.set_value("sick");
        reason.set_value("flu");
        form.reset_form();
        assert_eq!(kind.value(), "annual");
        assert_eq!(reason.value(), "");
    }

    #[test]
    fn closest_walks_from_self() {
        let card = FakeElement::new("div").with_class("course-card");
        let button = card.child("div").child("button").with_class("btn-enroll");
        assert_eq!(button.closest(&Selector::parse(".course-card")), Some(card.clone()));
        assert_eq!(card.closest(&Selector::parse(".course-card")), Some(card));
        assert!(button.closest(&Selector::parse(".modal")).is_none());
    }
}
