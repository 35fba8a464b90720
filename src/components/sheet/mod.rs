//! Draggable bottom sheet component.
//!
//! Renders a backdrop and a container anchored to the bottom of the viewport.
//! Touch and scroll events on the container are forwarded to a
//! [`SheetController`]; its frame drives the container's position and
//! animation class.
//!
//! - [`BottomSheet`] - The component
//! - [`SheetHandle`], [`use_sheet_handle`] - Close the sheet from nested content

mod handle;
pub mod style;

use leptos::ev::{MouseEvent, TouchEvent};
use leptos::prelude::*;

pub use handle::{SheetHandle, use_sheet_handle};

use crate::config::LOG_TARGET;
use crate::core::{SheetController, ViewportHeightSource};
use crate::models::{RawSheetOptions, SheetOptions};
use crate::utils::WindowViewport;

stylance::import_crate_style!(css, "src/components/sheet/sheet.module.css");

/// Y coordinate of the first active touch.
fn touch_y(event: &TouchEvent) -> Option<f64> {
    event.touches().get(0).map(|touch| f64::from(touch.client_y()))
}

/// Bottom sheet overlay.
///
/// `is_expandable` is required: without it the sheet logs a configuration
/// error and renders nothing.
#[component]
pub fn BottomSheet(
    /// Three rest states (closed, half, full) instead of two.
    #[prop(optional)]
    is_expandable: Option<bool>,
    /// Called once the sheet has closed.
    #[prop(optional, into)]
    on_close: Option<Callback<()>>,
    /// Fixed pixel height for non-expandable sheets.
    #[prop(optional)]
    custom_height: Option<f64>,
    /// Commit delay in milliseconds.
    #[prop(optional)]
    animation_delay: Option<u32>,
    #[prop(optional, into)] backdrop_class: Option<String>,
    #[prop(optional, into)] backdrop_style: Option<String>,
    #[prop(optional, into)] container_class: Option<String>,
    #[prop(optional, into)] container_style: Option<String>,
    children: Children,
) -> impl IntoView {
    let raw = RawSheetOptions {
        is_expandable,
        custom_height,
        animation_delay,
        backdrop_class,
        backdrop_style,
        container_class,
        container_style,
    };
    let options = match SheetOptions::try_from(raw) {
        Ok(options) => options,
        Err(err) => {
            log::error!(target: LOG_TARGET, "bottom sheet not rendered: {}", err);
            return ().into_any();
        }
    };

    let viewport = WindowViewport;
    let (controller, opening) = SheetController::mount(&options, viewport.current());
    let handle = SheetHandle::new(controller, on_close);
    handle.react(opening);

    // Released with the component's owner
    let subscription =
        viewport.subscribe(Box::new(move |height: f64| handle.viewport_resized(height)));
    let _subscription = StoredValue::new_local(subscription);

    provide_context(handle);

    let frame = handle.frame();
    let mode = options.mode();
    let custom_height = options.custom_height;
    let SheetOptions {
        backdrop_class,
        backdrop_style,
        container_class,
        container_style,
        ..
    } = options;

    let backdrop_class =
        style::class_list(&[css::backdrop, backdrop_class.as_deref().unwrap_or("")]);
    let backdrop_style = backdrop_style.unwrap_or_default();
    let container_class = move || {
        style::class_list(&[
            css::container,
            container_class.as_deref().unwrap_or(""),
            frame.get().animation.class_name(),
        ])
    };
    let container_style = move || {
        style::container_style(&frame.get(), mode, custom_height, container_style.as_deref())
    };

    let on_backdrop_click = move |event: MouseEvent| {
        event.prevent_default();
        event.stop_propagation();
        handle.dismiss();
    };

    let on_backdrop_touch_move = move |event: TouchEvent| {
        event.prevent_default();
        event.stop_propagation();
    };

    let on_touch_start = move |event: TouchEvent| {
        if let Some(y) = touch_y(&event) {
            handle.touch_start(y);
        }
    };

    // Only swallow the native scroll when the sheet itself moved
    let on_touch_move = move |event: TouchEvent| {
        event.stop_propagation();
        if let Some(y) = touch_y(&event)
            && handle.touch_move(y)
        {
            event.prevent_default();
        }
    };

    // A cancelled touch releases the gesture like a lift
    let on_touch_end = move |_: TouchEvent| {
        handle.touch_end();
    };

    let on_scroll = move |event: web_sys::Event| {
        let target = event_target::<web_sys::Element>(&event);
        handle.content_scroll(f64::from(target.scroll_top()));
    };

    view! {
        <div
            class=backdrop_class
            style=backdrop_style
            on:click=on_backdrop_click
            on:touchmove=on_backdrop_touch_move
        >
            <div
                class=container_class
                style=container_style
                role="dialog"
                aria-modal="true"
                on:click=|event: MouseEvent| event.stop_propagation()
                on:scroll=on_scroll
                on:touchstart=on_touch_start
                on:touchmove=on_touch_move
                on:touchend=on_touch_end
                on:touchcancel=on_touch_end
            >
                {children()}
            </div>
        </div>
    }
    .into_any()
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use gloo_timers::future::TimeoutFuture;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    type Slot = Arc<Mutex<Option<SheetHandle>>>;

    /// Stores the enclosing sheet's handle.
    #[component]
    fn Capture(slot: Slot) -> impl IntoView {
        *slot.lock().unwrap() = Some(use_sheet_handle());
    }

    fn host() -> web_sys::HtmlElement {
        let document = document();
        let host = document
            .create_element("div")
            .unwrap()
            .unchecked_into::<web_sys::HtmlElement>();
        document.body().unwrap().append_child(&host).unwrap();
        host
    }

    fn bubbling(name: &str) -> web_sys::Event {
        let init = web_sys::EventInit::new();
        init.set_bubbles(true);
        web_sys::Event::new_with_event_init_dict(name, &init).unwrap()
    }

    #[wasm_bindgen_test]
    async fn test_dismiss_runs_on_close_once() {
        let closes = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&closes);
        let slot: Slot = Arc::default();
        let captured = Arc::clone(&slot);
        let _mount = mount_to(host(), move || {
            view! {
                <BottomSheet
                    is_expandable=false
                    on_close=move |_: ()| {
                        counter.fetch_add(1, Ordering::SeqCst);
                    }
                >
                    <Capture slot=captured />
                </BottomSheet>
            }
        });
        let handle = slot.lock().unwrap().unwrap();

        handle.dismiss();
        handle.dismiss();
        TimeoutFuture::new(400).await;

        assert_eq!(closes.load(Ordering::SeqCst), 1);
    }

    #[wasm_bindgen_test]
    async fn test_pending_close_is_dropped_after_unmount() {
        let closes = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&closes);
        let slot: Slot = Arc::default();
        let captured = Arc::clone(&slot);
        let mount = mount_to(host(), move || {
            view! {
                <BottomSheet
                    is_expandable=true
                    on_close=move |_: ()| {
                        counter.fetch_add(1, Ordering::SeqCst);
                    }
                >
                    <Capture slot=captured />
                </BottomSheet>
            }
        });
        let handle = slot.lock().unwrap().unwrap();

        handle.dismiss();
        drop(mount);
        TimeoutFuture::new(400).await;

        assert_eq!(closes.load(Ordering::SeqCst), 0);
    }

    #[wasm_bindgen_test]
    async fn test_touch_cancel_snaps_back() {
        let slot: Slot = Arc::default();
        let captured = Arc::clone(&slot);
        let root = host();
        let _mount = mount_to(root.clone(), move || {
            view! {
                <BottomSheet is_expandable=false>
                    <Capture slot=captured />
                </BottomSheet>
            }
        });
        let handle = slot.lock().unwrap().unwrap();
        TimeoutFuture::new(300).await;

        handle.touch_start(100.0);
        assert!(handle.touch_move(105.0));
        assert_eq!(handle.frame().get_untracked().offset, -5.0);

        let container = root.query_selector("[role=dialog]").unwrap().unwrap();
        container.dispatch_event(&bubbling("touchcancel")).unwrap();
        TimeoutFuture::new(300).await;

        assert_eq!(handle.frame().get_untracked().offset, 0.0);
    }
}
