//! Browser glue for the navigation bar: window listeners, section measurement
//! and scrolling.
//!
//! Everything here calls into `web_sys` and only runs inside effects and event
//! handlers, which never execute during server rendering.

use leptos::{
    ev::EventDescriptor,
    prelude::{WindowListenerHandle, document, window, window_event_listener},
    wasm_bindgen::JsCast,
};
use thiserror::Error;
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::navigation::{NavTarget, SectionBounds};

/// Selector for the page regions the bar can track.
pub const SECTION_SELECTOR: &str = "section[id]";

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DomError {
    #[error("no element with id `{0}` on this page")]
    MissingTarget(String),
    #[error("browser rejected the request: {0}")]
    Browser(String),
}

/// Window-level listeners registered together and removed together.
///
/// Hand the subscription to `on_cleanup` of the owning effect so the listeners
/// go away on unmount and before the effect re-registers.
#[derive(Default)]
#[must_use = "listeners stay attached until the subscription is unregistered"]
pub struct WindowSubscription {
    handles: Vec<WindowListenerHandle>,
}

impl WindowSubscription {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn listen<E>(mut self, event: E, handler: impl Fn(E::EventType) + 'static) -> Self
    where
        E: EventDescriptor + 'static,
        E::EventType: JsCast,
    {
        self.handles.push(window_event_listener(event, handler));
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    pub fn unregister(self) {
        for handle in self.handles {
            handle.remove();
        }
    }
}

/// Current `window.innerWidth`, if the browser reports one.
pub fn viewport_width() -> Option<f64> {
    window().inner_width().ok()?.as_f64()
}

/// Current `window.scrollY`.
pub fn scroll_offset() -> f64 {
    window().scroll_y().unwrap_or_default()
}

/// Measures every `section[id]` in document order.
pub fn measure_sections() -> Vec<SectionBounds> {
    let Ok(nodes) = document().query_selector_all(SECTION_SELECTOR) else {
        return Vec::new();
    };

    (0..nodes.length())
        .filter_map(|index| nodes.item(index))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .map(|section| {
            SectionBounds::new(
                section.id(),
                f64::from(section.offset_top()),
                f64::from(section.offset_height()),
            )
        })
        .collect()
}

/// Smooth-scrolls so the element with `id` sits `offset` pixels below the top
/// of the viewport.
pub fn scroll_to_anchor(id: &str, offset: f64) -> Result<(), DomError> {
    let target = document()
        .get_element_by_id(id)
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
        .ok_or_else(|| DomError::MissingTarget(id.to_owned()))?;

    let options = ScrollToOptions::new();
    options.set_top(f64::from(target.offset_top()) - offset);
    options.set_behavior(ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&options);
    Ok(())
}

/// Full page navigation, replacing the current document.
pub fn navigate_to(url: &str) -> Result<(), DomError> {
    window()
        .location()
        .set_href(url)
        .map_err(|err| DomError::Browser(format!("{err:?}")))
}

/// Follows a clicked entry.
pub fn follow(target: &NavTarget, anchor_offset: f64) -> Result<(), DomError> {
    match target {
        NavTarget::Anchor(id) => scroll_to_anchor(id, anchor_offset),
        NavTarget::External(url) => navigate_to(url),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dom_error_messages() {
        assert_eq!(
            DomError::MissingTarget("pricing".into()).to_string(),
            "no element with id `pricing` on this page"
        );
        assert!(DomError::Browser("SecurityError".into())
            .to_string()
            .contains("SecurityError"));
    }

    #[test]
    fn test_empty_subscription() {
        let subscription = WindowSubscription::new();
        assert!(subscription.is_empty());
        assert_eq!(subscription.len(), 0);
        subscription.unregister();
    }
}
