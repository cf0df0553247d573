use std::rc::Rc;

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{window, DomException};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum RedirectError {
    #[error("browser window is not available")]
    NoWindow,
    /// Carries whatever text the browser attached to the failure, if any.
    #[error("{}", .0.as_deref().unwrap_or_default())]
    Rejected(Option<String>),
}

/// Sends the browser away to an external page.
pub trait Redirector {
    fn redirect(&self, url: &str) -> Result<(), RedirectError>;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserRedirector;

impl Redirector for BrowserRedirector {
    fn redirect(&self, url: &str) -> Result<(), RedirectError> {
        let window = window().ok_or(RedirectError::NoWindow)?;
        window
            .location()
            .set_href(url)
            .map_err(|e| RedirectError::Rejected(rejection_text(&e)))
    }
}

/// `location.href` assignment throws a DOMException or TypeError object,
/// rarely a bare string.
fn rejection_text(value: &JsValue) -> Option<String> {
    first_text([
        value.dyn_ref::<DomException>().map(|e| e.message()),
        value.dyn_ref::<js_sys::Error>().map(|e| String::from(e.message())),
        value.as_string(),
    ])
}

fn first_text(candidates: impl IntoIterator<Item = Option<String>>) -> Option<String> {
    candidates
        .into_iter()
        .flatten()
        .find(|text| !text.trim().is_empty())
}

#[derive(Clone)]
pub struct RedirectHandle(Rc<dyn Redirector>);

impl RedirectHandle {
    pub fn new(redirector: impl Redirector + 'static) -> Self {
        Self(Rc::new(redirector))
    }

    pub fn redirector(&self) -> &dyn Redirector {
        self.0.as_ref()
    }
}

impl Default for RedirectHandle {
    fn default() -> Self {
        Self::new(BrowserRedirector)
    }
}

impl PartialEq for RedirectHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}
