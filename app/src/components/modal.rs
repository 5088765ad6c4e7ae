//! Minimal modal primitive: backdrop, centred panel, title, close glyph.
//!
//! Clicking the backdrop, pressing Escape, or pressing the close glyph all call
//! `on_dismiss`. Whether the modal is shown is decided by the caller.

use leptos::{ev, prelude::*};

use crate::dom::WindowSubscription;

const TITLE_ID: &str = "modal-title";

#[component]
pub fn Modal(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] on_dismiss: Callback<()>,
    title: &'static str,
    children: ChildrenFn,
) -> impl IntoView {
    // Escape only needs a listener while the modal is visible.
    Effect::new(move |_| {
        if !open.get() {
            return;
        }
        let subscription = WindowSubscription::new().listen(ev::keydown, move |ev| {
            if ev.key() == "Escape" {
                on_dismiss.run(());
            }
        });
        on_cleanup(move || subscription.unregister());
    });

    view! {
        <Show when=move || open.get()>
            <div
                class="fixed inset-0 z-50 bg-black/50 backdrop-blur-sm modal-fade"
                on:click=move |_| on_dismiss.run(())
            ></div>
            <div
                role="dialog"
                aria-modal="true"
                aria-labelledby=TITLE_ID
                class="fixed top-1/2 left-1/2 z-50 p-6 w-full max-w-md bg-black rounded-xl border shadow-xl -translate-x-1/2 -translate-y-1/2 border-amber-500/20"
            >
                <h2 id=TITLE_ID class="mb-4 text-xl font-medium text-white">
                    {title}
                </h2>
                {children()}
                <button
                    type="button"
                    aria-label="Close"
                    class="absolute top-4 right-4 text-white rounded-sm opacity-70 hover:opacity-100 focus:ring-1 focus:ring-amber-500 focus:outline-none"
                    on:click=move |_| on_dismiss.run(())
                >
                    <svg class="size-4" viewBox="0 0 15 15" fill="none" xmlns="http://www.w3.org/2000/svg">
                        <path
                            d="M11.78 4.03a.75.75 0 0 0-1.06-1.06L7.5 6.19 4.28 2.97a.75.75 0 0 0-1.06 1.06L6.44 7.5l-3.22 3.22a.75.75 0 1 0 1.06 1.06L7.5 8.81l3.22 3.22a.75.75 0 1 0 1.06-1.06L8.56 7.5l3.22-3.47z"
                            fill="currentColor"
                        ></path>
                    </svg>
                </button>
            </div>
        </Show>
    }
}
