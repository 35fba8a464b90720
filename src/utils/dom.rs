//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to the browser window for the viewport
//! height source.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::Window;

use crate::core::{Subscription, ViewportHeightSource};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Current usable viewport height in pixels.
///
/// Uses `window.innerHeight`, falling back to the body and then the document
/// element client height. Returns `0.0` outside a browser.
pub fn viewport_height() -> f64 {
    let Some(window) = window() else {
        return 0.0;
    };

    let inner = window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .filter(|h| *h > 0.0);
    if let Some(height) = inner {
        return height;
    }

    let Some(document) = window.document() else {
        return 0.0;
    };
    document
        .body()
        .map(|body| body.client_height())
        .filter(|h| *h > 0)
        .or_else(|| document.document_element().map(|el| el.client_height()))
        .map(f64::from)
        .unwrap_or(0.0)
}

// =============================================================================
// WindowViewport
// =============================================================================

/// Viewport height source backed by the browser window and its `resize` event.
#[derive(Clone, Copy, Debug, Default)]
pub struct WindowViewport;

impl ViewportHeightSource for WindowViewport {
    fn current(&self) -> f64 {
        viewport_height()
    }

    fn subscribe(&self, callback: Box<dyn Fn(f64)>) -> Subscription {
        let Some(window) = window() else {
            return Subscription::empty();
        };

        let listener = Closure::<dyn Fn()>::new(move || callback(viewport_height()));
        if window
            .add_event_listener_with_callback("resize", listener.as_ref().unchecked_ref())
            .is_err()
        {
            log::warn!(target: crate::config::LOG_TARGET, "failed to listen for window resize");
            return Subscription::empty();
        }

        Subscription::new(move || {
            let _ = window
                .remove_event_listener_with_callback("resize", listener.as_ref().unchecked_ref());
        })
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_window_height_is_positive() {
        assert!(WindowViewport.current() > 0.0);
    }

    #[wasm_bindgen_test]
    fn test_resize_subscription_releases() {
        let sub = WindowViewport.subscribe(Box::new(|_: f64| {}));
        sub.unsubscribe();
    }
}
