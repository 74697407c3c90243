//! In-memory document used by tests and the native demo.
//!
//! Rendered height resolution mirrors a browser closely enough for the
//! toggle: an inline height wins, otherwise the last stylesheet rule whose
//! class the element carries, otherwise the element's default height.
//! `auto` resolves to the element's content height.

use crate::dom::{Document, Height, Selector};

/// One element of a [`MemoryDocument`].
#[derive(Debug, Clone)]
pub struct MemoryElement {
    pub id: Option<String>,
    pub classes: Vec<String>,
    /// Height the content would take with unconstrained flow
    pub content_height: f32,
    /// Height from the base stylesheet when no class rule applies
    pub default_height: Height,
    /// Inline `style="height: ..."`, if any
    pub inline_height: Option<Height>,
}

impl MemoryElement {
    /// Element with an id and auto height.
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            classes: Vec::new(),
            content_height: 0.0,
            default_height: Height::Auto,
            inline_height: None,
        }
    }

    /// Anonymous element carrying one class.
    pub fn with_class(class: impl Into<String>) -> Self {
        Self {
            id: None,
            classes: vec![class.into()],
            content_height: 0.0,
            default_height: Height::Auto,
            inline_height: None,
        }
    }

    pub fn content_height(mut self, height: f32) -> Self {
        self.content_height = height;
        self
    }

    pub fn default_height(mut self, height: Height) -> Self {
        self.default_height = height;
        self
    }

    fn matches(&self, selector: &Selector) -> bool {
        match selector {
            Selector::Id(id) => self.id.as_deref() == Some(id.as_str()),
            Selector::Class(class) => self.has_class(class),
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

/// Minimal DOM: a flat element list plus class-based height rules.
#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
    elements: Vec<MemoryElement>,
    /// (class, height) rules; later rules win
    stylesheet: Vec<(String, Height)>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Document matching the stock navigation markup.
    ///
    /// The panel is hidden by default and `.nav-open` lets it grow to
    /// `content_height`.
    pub fn navigation(content_height: f32) -> Self {
        use crate::constants::PANEL_OPEN_CLASS;

        let mut doc = Self::new();
        doc.insert(MemoryElement::with_class("wrapper"));
        doc.insert(MemoryElement::with_id("nav-open"));
        doc.insert(
            MemoryElement::with_id("navigation")
                .content_height(content_height)
                .default_height(Height::Px(0.0)),
        );
        doc.add_rule(PANEL_OPEN_CLASS, Height::Auto);
        doc
    }

    pub fn insert(&mut self, element: MemoryElement) {
        self.elements.push(element);
    }

    /// Remove every element the selector matches, returning how many.
    pub fn remove(&mut self, selector: &Selector) -> usize {
        let before = self.elements.len();
        self.elements.retain(|e| !e.matches(selector));
        before - self.elements.len()
    }

    /// Register a stylesheet rule `.class { height: ... }`.
    pub fn add_rule(&mut self, class: impl Into<String>, height: Height) {
        self.stylesheet.push((class.into(), height));
    }

    /// Change the content height of matching elements (e.g. menu items added).
    pub fn set_content_height(&mut self, selector: &Selector, height: f32) {
        for element in self.matching_mut(selector) {
            element.content_height = height;
        }
    }

    pub fn element(&self, selector: &Selector) -> Option<&MemoryElement> {
        self.elements.iter().find(|e| e.matches(selector))
    }

    /// Inline height of the first match.
    pub fn inline_height(&self, selector: &Selector) -> Option<Height> {
        self.element(selector).and_then(|e| e.inline_height)
    }

    fn matching_mut<'a>(
        &'a mut self,
        selector: &'a Selector,
    ) -> impl Iterator<Item = &'a mut MemoryElement> + 'a {
        self.elements.iter_mut().filter(move |e| e.matches(selector))
    }

    fn rendered_height(&self, element: &MemoryElement) -> f32 {
        let styled = element.inline_height.unwrap_or_else(|| {
            self.stylesheet
                .iter()
                .rev()
                .find(|(class, _)| element.has_class(class))
                .map(|(_, height)| *height)
                .unwrap_or(element.default_height)
        });

        match styled {
            Height::Px(px) => px.max(0.0),
            Height::Auto => element.content_height.max(0.0),
        }
    }
}

impl Document for MemoryDocument {
    fn exists(&self, selector: &Selector) -> bool {
        self.element(selector).is_some()
    }

    fn has_class(&self, selector: &Selector, class: &str) -> bool {
        self.element(selector).is_some_and(|e| e.has_class(class))
    }

    fn add_class(&mut self, selector: &Selector, class: &str) {
        for element in self.matching_mut(selector) {
            if !element.has_class(class) {
                element.classes.push(class.to_string());
            }
        }
    }

    fn remove_class(&mut self, selector: &Selector, class: &str) {
        for element in self.matching_mut(selector) {
            element.classes.retain(|c| c != class);
        }
    }

    fn height(&self, selector: &Selector) -> Option<f32> {
        self.element(selector).map(|e| self.rendered_height(e))
    }

    fn set_height(&mut self, selector: &Selector, height: Height) {
        for element in self.matching_mut(selector) {
            element.inline_height = Some(height);
        }
    }

    fn clear_style(&mut self, selector: &Selector) {
        for element in self.matching_mut(selector) {
            element.inline_height = None;
        }
    }

    fn has_inline_style(&self, selector: &Selector) -> bool {
        self.inline_height(selector).is_some()
    }
}
