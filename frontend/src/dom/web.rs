use super::{EventKind, Handler, Rect, Selector, UiElement, UiEvent};
use crate::error::UiError;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// `web_sys` element handle.
#[derive(Clone, Debug)]
pub struct WebElement(web_sys::Element);

impl WebElement {
    pub fn new(element: web_sys::Element) -> Self {
        Self(element)
    }

    pub fn as_element(&self) -> &web_sys::Element {
        &self.0
    }

    fn html(&self) -> Option<&web_sys::HtmlElement> {
        self.0.dyn_ref::<web_sys::HtmlElement>()
    }
}

impl PartialEq for WebElement {
    fn eq(&self, other: &Self) -> bool {
        self.0.is_same_node(Some(other.0.as_ref()))
    }
}

pub struct WebEvent(web_sys::Event);

impl UiEvent for WebEvent {
    type Element = WebElement;

    fn target(&self) -> Option<WebElement> {
        self.0
            .target()
            .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
            .map(WebElement)
    }

    fn client_position(&self) -> (f64, f64) {
        self.0
            .dyn_ref::<web_sys::MouseEvent>()
            .map(|ev| (f64::from(ev.client_x()), f64::from(ev.client_y())))
            .unwrap_or((0.0, 0.0))
    }

    fn stop_propagation(&self) {
        self.0.stop_propagation();
    }

    fn prevent_default(&self) {
        self.0.prevent_default();
    }
}

impl UiElement for WebElement {
    type Event = WebEvent;

    fn attribute(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.class_list().contains(class)
    }

    fn add_class(&self, class: &str) {
        let _ = self.0.class_list().add_1(class);
    }

    fn remove_class(&self, class: &str) {
        let _ = self.0.class_list().remove_1(class);
    }

    fn toggle_class(&self, class: &str) -> bool {
        self.0.class_list().toggle(class).unwrap_or(false)
    }

    fn style(&self, property: &str) -> Option<String> {
        self.html()
            .and_then(|el| el.style().get_property_value(property).ok())
            .filter(|value| !value.is_empty())
    }

    fn set_style(&self, property: &str, value: &str) {
        if let Some(el) = self.html() {
            let _ = el.style().set_property(property, value);
        }
    }

    fn clear_style(&self, property: &str) {
        if let Some(el) = self.html() {
            let _ = el.style().remove_property(property);
        }
    }

    fn text(&self) -> String {
        self.0.text_content().unwrap_or_default()
    }

    fn set_text(&self, text: &str) {
        self.0.set_text_content(Some(text));
    }

    fn contains(&self, other: &Self) -> bool {
        self.0.contains(Some(other.0.as_ref()))
    }

    fn parent(&self) -> Option<Self> {
        self.0.parent_element().map(WebElement)
    }

    fn closest(&self, selector: &Selector) -> Option<Self> {
        self.0.closest(selector.css()).ok().flatten().map(WebElement)
    }

    fn query(&self, selector: &Selector) -> Option<Self> {
        self.0
            .query_selector(selector.css())
            .ok()
            .flatten()
            .map(WebElement)
    }

    fn query_all(&self, selector: &Selector) -> Vec<Self> {
        let Ok(list) = self.0.query_selector_all(selector.css()) else {
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
            .map(WebElement)
            .collect()
    }

    fn find_by_id(&self, id: &str) -> Option<Self> {
        if self.0.id() == id {
            return Some(self.clone());
        }
        self.0
            .owner_document()
            .and_then(|doc| doc.get_element_by_id(id))
            .filter(|found| self.0.contains(Some(found.as_ref())))
            .map(WebElement)
    }

    fn bounding_rect(&self) -> Rect {
        let rect = self.0.get_bounding_client_rect();
        Rect {
            left: rect.left(),
            top: rect.top(),
            width: rect.width(),
            height: rect.height(),
        }
    }

    fn append_new(&self, tag: &str) -> Option<Self> {
        let child = self.0.owner_document()?.create_element(tag).ok()?;
        self.0.append_child(&child).ok()?;
        Some(WebElement(child))
    }

    fn remove(&self) {
        self.0.remove();
    }

    fn reset_form(&self) {
        if let Some(form) = self.0.dyn_ref::<web_sys::HtmlFormElement>() {
            form.reset();
        }
    }

    fn listen(&self, kind: EventKind, handler: Handler<Self>) -> Result<(), UiError> {
        let closure = Closure::<dyn Fn(web_sys::Event)>::new(move |event: web_sys::Event| {
            handler(&WebEvent(event));
        });
        self.0
            .add_event_listener_with_callback(kind.as_str(), closure.as_ref().unchecked_ref())
            .map_err(|err| UiError::listener(kind.as_str(), format!("{:?}", err)))?;
        // Listeners live as long as the page.
        closure.forget();
        Ok(())
    }
}

pub fn document() -> Result<web_sys::Document, UiError> {
    web_sys::window()
        .ok_or(UiError::NoWindow)?
        .document()
        .ok_or(UiError::NoDocument)
}

/// The `<html>` element, root of every registry lookup.
pub fn document_root() -> Result<WebElement, UiError> {
    document()?
        .document_element()
        .map(WebElement)
        .ok_or(UiError::NoDocument)
}

/// Appends a `<style>` element with `css` to the document head.
pub fn install_stylesheet(css: &str) -> Result<(), UiError> {
    let document = document()?;
    let Some(head) = document.head() else {
        return Ok(());
    };
    let style = document
        .create_element("style")
        .map_err(|_| UiError::NoDocument)?;
    style.set_text_content(Some(css));
    let _ = head.append_child(&style);
    Ok(())
}
