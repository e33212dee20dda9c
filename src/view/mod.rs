//! Page view model.
//!
//! The elements, canvases and forms a dashboard page exposes to the
//! presentation helpers, plus the page-ready auto-formatting pass that
//! rewrites tagged elements in place.

pub mod confirm;

pub use confirm::{confirm_delete, ConfirmPrompt, DEFAULT_CONFIRM_MESSAGE};

use std::path::PathBuf;

use crate::format::{format_currency, format_date, format_percentage, DEFAULT_CURRENCY};
use crate::theme::ThemeProvider;

/// Class hooks consumed by the auto-formatter.
pub const FORMAT_CURRENCY_CLASS: &str = "format-currency";
pub const FORMAT_PERCENTAGE_CLASS: &str = "format-percentage";
pub const FORMAT_DATE_CLASS: &str = "format-date";

/// Classes the auto-formatter adds to percentage elements by sign.
pub const PERFORMANCE_POSITIVE_CLASS: &str = "performance-positive";
pub const PERFORMANCE_NEGATIVE_CLASS: &str = "performance-negative";

/// A text-bearing page element tagged with formatting classes.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewElement {
    pub id: String,
    pub classes: Vec<String>,
    pub text: String,
    /// Per-element currency override (the `data-currency` attribute)
    pub currency: Option<String>,
}

impl ViewElement {
    pub fn new(id: impl Into<String>, class: &str, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            classes: vec![class.to_string()],
            text: text.into(),
            currency: None,
        }
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }
}

/// A chart target on the page.
#[derive(Clone, Debug)]
pub struct Canvas {
    pub id: String,
    /// Where the rendered chart PNG lands
    pub plot_path: PathBuf,
}

impl Canvas {
    pub fn new(id: impl Into<String>, plot_path: impl Into<PathBuf>) -> Self {
        Self {
            id: id.into(),
            plot_path: plot_path.into(),
        }
    }
}

/// A named form that can be submitted once confirmed.
#[derive(Clone, Debug, PartialEq)]
pub struct FormElement {
    pub id: String,
    pub submitted: bool,
}

impl FormElement {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            submitted: false,
        }
    }

    pub fn submit(&mut self) {
        self.submitted = true;
    }
}

/// Payload-free custom events dispatched on the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageEvent {
    ThemeChanged,
}

/// Stand-in for the document: theme attribute, tagged elements, chart targets,
/// forms and a pending event queue.
#[derive(Default)]
pub struct Page {
    pub dark_mode: bool,
    pub elements: Vec<ViewElement>,
    pub canvases: Vec<Canvas>,
    pub forms: Vec<FormElement>,
    events: Vec<PageEvent>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn canvas(&self, id: &str) -> Option<&Canvas> {
        self.canvases.iter().find(|c| c.id == id)
    }

    pub fn element(&self, id: &str) -> Option<&ViewElement> {
        self.elements.iter().find(|e| e.id == id)
    }

    pub fn element_mut(&mut self, id: &str) -> Option<&mut ViewElement> {
        self.elements.iter_mut().find(|e| e.id == id)
    }

    pub fn form_mut(&mut self, id: &str) -> Option<&mut FormElement> {
        self.forms.iter_mut().find(|f| f.id == id)
    }

    pub fn dispatch(&mut self, event: PageEvent) {
        self.events.push(event);
    }

    pub fn drain_events(&mut self) -> Vec<PageEvent> {
        std::mem::take(&mut self.events)
    }

    /// Page-ready pass over every tagged element.
    pub fn auto_format(&mut self) {
        auto_format(&mut self.elements);
    }
}

impl ThemeProvider for Page {
    fn dark_mode(&self) -> bool {
        self.dark_mode
    }
}

/// Rewrite the text of every element tagged with a formatting class.
///
/// Currency and percentage elements whose text does not parse as a number are
/// left untouched; date elements are rewritten unconditionally. Percentage
/// elements additionally pick up a performance class by sign (zero gets
/// neither).
pub fn auto_format(elements: &mut [ViewElement]) {
    for element in elements {
        if element.has_class(FORMAT_CURRENCY_CLASS) {
            if let Ok(value) = element.text.trim().parse::<f64>() {
                let currency = element
                    .currency
                    .clone()
                    .unwrap_or_else(|| DEFAULT_CURRENCY.to_string());
                element.text = format_currency(value, &currency);
            }
        }

        if element.has_class(FORMAT_PERCENTAGE_CLASS) {
            if let Ok(value) = element.text.trim().parse::<f64>() {
                element.text = format_percentage(value);
                if value > 0.0 {
                    element.add_class(PERFORMANCE_POSITIVE_CLASS);
                } else if value < 0.0 {
                    element.add_class(PERFORMANCE_NEGATIVE_CLASS);
                }
            }
        }

        if element.has_class(FORMAT_DATE_CLASS) {
            element.text = format_date(&element.text);
        }
    }
}
