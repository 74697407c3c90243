//! [`Document`] over the browser DOM.

use crate::box_model::{VerticalBox, parse_px};
use navslide_ui::{Document, Height, Selector};
use wasm_bindgen::JsCast;
use web_sys::{CssStyleDeclaration, Element, HtmlElement};

/// The page's DOM, addressed through [`Selector`]s.
pub struct WebDocument {
    document: web_sys::Document,
}

impl WebDocument {
    pub fn new(document: web_sys::Document) -> Self {
        Self { document }
    }

    /// Every element the selector matches, in document order.
    pub fn elements(&self, selector: &Selector) -> Vec<Element> {
        match selector {
            Selector::Id(id) => self.document.get_element_by_id(id).into_iter().collect(),
            Selector::Class(_) => {
                let Ok(nodes) = self.document.query_selector_all(&selector.to_css()) else {
                    log::warn!("querySelectorAll failed for {}", selector);
                    return Vec::new();
                };
                (0..nodes.length())
                    .filter_map(|i| nodes.item(i))
                    .filter_map(|node| node.dyn_into::<Element>().ok())
                    .collect()
            }
        }
    }

    fn first(&self, selector: &Selector) -> Option<Element> {
        match selector {
            Selector::Id(id) => self.document.get_element_by_id(id),
            Selector::Class(_) => self
                .document
                .query_selector(&selector.to_css())
                .ok()
                .flatten(),
        }
    }

    fn computed_style(&self, element: &Element) -> Option<CssStyleDeclaration> {
        self.document
            .default_view()?
            .get_computed_style(element)
            .ok()
            .flatten()
    }

    fn html_elements(&self, selector: &Selector) -> impl Iterator<Item = HtmlElement> {
        self.elements(selector)
            .into_iter()
            .filter_map(|e| e.dyn_into::<HtmlElement>().ok())
    }
}

impl Document for WebDocument {
    fn exists(&self, selector: &Selector) -> bool {
        self.first(selector).is_some()
    }

    fn has_class(&self, selector: &Selector, class: &str) -> bool {
        self.first(selector)
            .is_some_and(|e| e.class_list().contains(class))
    }

    fn add_class(&mut self, selector: &Selector, class: &str) {
        for element in self.elements(selector) {
            if let Err(e) = element.class_list().add_1(class) {
                log::warn!("failed to add class {} on {}: {:?}", class, selector, e);
            }
        }
    }

    fn remove_class(&mut self, selector: &Selector, class: &str) {
        for element in self.elements(selector) {
            if let Err(e) = element.class_list().remove_1(class) {
                log::warn!("failed to remove class {} on {}: {:?}", class, selector, e);
            }
        }
    }

    /// Height in the unit `style.height` is written in, so a measured value
    /// can be pinned back without a jump.
    fn height(&self, selector: &Selector) -> Option<f32> {
        let element = self.first(selector)?;
        let offset_height = match element.dyn_ref::<HtmlElement>() {
            Some(html) => html.offset_height() as f32,
            None => element.client_height() as f32,
        };
        let Some(style) = self.computed_style(&element) else {
            return Some(offset_height);
        };
        let px = |property: &str| {
            style
                .get_property_value(property)
                .ok()
                .and_then(|value| parse_px(&value))
                .unwrap_or(0.0)
        };
        let metrics = VerticalBox {
            offset_height,
            padding_top: px("padding-top"),
            padding_bottom: px("padding-bottom"),
            border_top: px("border-top-width"),
            border_bottom: px("border-bottom-width"),
            border_box: style
                .get_property_value("box-sizing")
                .is_ok_and(|sizing| sizing == "border-box"),
        };
        Some(metrics.style_height())
    }

    fn set_height(&mut self, selector: &Selector, height: Height) {
        let css = height.to_css();
        for element in self.html_elements(selector) {
            if let Err(e) = element.style().set_property("height", &css) {
                log::warn!("failed to set height on {}: {:?}", selector, e);
            }
        }
    }

    fn clear_style(&mut self, selector: &Selector) {
        for element in self.elements(selector) {
            if let Err(e) = element.remove_attribute("style") {
                log::warn!("failed to clear style on {}: {:?}", selector, e);
            }
        }
    }

    fn has_inline_style(&self, selector: &Selector) -> bool {
        self.first(selector)
            .and_then(|e| e.get_attribute("style"))
            .is_some_and(|style| !style.trim().is_empty())
    }
}
