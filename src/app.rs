//! Demo application.
//!
//! Two buttons open an expandable and a fixed-height sheet. Each sheet's
//! content closes it through the [`SheetHandle`] context.

use bottom_sheet::{BottomSheet, use_sheet_handle};
use leptos::prelude::*;

/// Which demo sheet is open.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum OpenSheet {
    Expandable,
    Fixed,
}

/// Close button rendered inside a sheet.
#[component]
fn CloseButton() -> impl IntoView {
    let sheet = use_sheet_handle();
    view! {
        <button on:click=move |_| sheet.dismiss()>"Close"</button>
    }
}

/// Long list so the fullscreen sheet has something to scroll.
#[component]
fn Filler(count: usize) -> impl IntoView {
    view! {
        <ul>
            {(1..=count)
                .map(|i| view! { <li>{format!("Item {}", i)}</li> })
                .collect::<Vec<_>>()}
        </ul>
    }
}

#[component]
pub fn App() -> impl IntoView {
    let open = RwSignal::new(None::<OpenSheet>);
    let close = move || open.set(None);

    view! {
        <main style="padding: 2rem; font-family: sans-serif;">
            <button on:click=move |_| open.set(Some(OpenSheet::Expandable))>
                "Open expandable sheet"
            </button>
            <button on:click=move |_| open.set(Some(OpenSheet::Fixed))>
                "Open fixed sheet"
            </button>

            <Show when=move || open.get() == Some(OpenSheet::Expandable)>
                <BottomSheet is_expandable=true on_close=move |_: ()| close()>
                    <h2>"Drag me"</h2>
                    <p>"Pull up for fullscreen, down to close."</p>
                    <CloseButton />
                    <Filler count=60 />
                </BottomSheet>
            </Show>

            <Show when=move || open.get() == Some(OpenSheet::Fixed)>
                <BottomSheet
                    is_expandable=false
                    custom_height=280.0
                    container_style="border-radius: 16px 16px 0 0;"
                    on_close=move |_: ()| close()
                >
                    <h2>"Fixed height"</h2>
                    <p>"Swipe down to dismiss."</p>
                    <CloseButton />
                </BottomSheet>
            </Show>
        </main>
    }
}
