//! Modal dialog that captures an email address for a sales follow-up.
//!
//! After a successful submit the dialog shows a confirmation, then resets itself
//! and asks the caller to close it once [`AUTO_CLOSE_DELAY`] has passed. The
//! pending timer is cleared whenever `open` changes and when the dialog is torn
//! down; the form's ticket check covers a timer that fires anyway.

use leptos::{ev, prelude::*};

use crate::{
    components::modal::Modal,
    contact_form::{AUTO_CLOSE_DELAY, ContactForm, ContactRequest, ContactSink, LogSink, SubmitError},
};

/// Forwards captured requests to the caller's callback, or logs them when the
/// caller did not pass one.
struct CallbackSink(Option<Callback<ContactRequest>>);

impl ContactSink for CallbackSink {
    fn deliver(&self, request: &ContactRequest) {
        match self.0 {
            Some(on_submit) => on_submit.run(request.clone()),
            None => LogSink.deliver(request),
        }
    }
}

#[component]
pub fn ContactDialog(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] on_open_change: Callback<bool>,
    #[prop(optional, into)] on_submit: Option<Callback<ContactRequest>>,
) -> impl IntoView {
    let form = RwSignal::new(ContactForm::default());
    let pending = StoredValue::new(None::<TimeoutHandle>);

    let clear_timer = move || {
        pending.update_value(|slot| {
            if let Some(handle) = slot.take() {
                handle.clear();
            }
        });
    };

    Effect::new(move |was_open: Option<bool>| {
        let is_open = open.get();
        if was_open.is_some_and(|was_open| was_open != is_open) {
            clear_timer();
            form.update(ContactForm::invalidate);
        }
        is_open
    });
    on_cleanup(clear_timer);

    let submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let sink = CallbackSink(on_submit);
        let Some(outcome) = form.try_update(|form| form.submit(&sink)) else {
            return;
        };
        let ticket = match outcome {
            Ok(ticket) => ticket,
            Err(SubmitError::EmptyEmail) => {
                log::debug!("Ignoring contact submit without an email address");
                return;
            }
            Err(err) => {
                log::debug!("Ignoring contact submit: {err}");
                return;
            }
        };

        clear_timer();
        let scheduled = set_timeout_with_handle(
            move || {
                pending.set_value(None);
                if form.try_update(|form| form.expire(ticket)).unwrap_or(false) {
                    on_open_change.run(false);
                }
            },
            AUTO_CLOSE_DELAY,
        );
        match scheduled {
            Ok(handle) => pending.set_value(Some(handle)),
            Err(err) => log::error!("Failed to schedule contact dialog auto-close: {err:?}"),
        }
    };

    let dismiss = Callback::new(move |()| on_open_change.run(false));

    view! {
        <Modal open=open on_dismiss=dismiss title="Contact Sales">
            <Show when=move || form.with(ContactForm::is_editing) fallback=confirmation>
                <form class="space-y-4 modal-fade" on:submit=submit>
                    <p class="text-sm text-neutral-300">
                        "Enter your email and our sales team will get back to you shortly."
                    </p>
                    <div class="space-y-2">
                        <label for="contact-email" class="block text-sm font-medium text-white">
                            "Email"
                        </label>
                        <input
                            id="contact-email"
                            name="email"
                            type="email"
                            autocomplete="email"
                            placeholder="you@example.com"
                            required
                            prop:value=move || form.with(|form| form.email().to_owned())
                            on:input=move |ev| {
                                let email = event_target_value(&ev);
                                form.update(|form| form.set_email(email));
                            }
                            class="py-2 px-3 w-full text-sm text-white bg-transparent rounded-md border border-amber-500/20 placeholder:text-neutral-500 focus:border-amber-500 focus:ring-1 focus:ring-amber-500 focus:outline-none"
                        />
                    </div>
                    <div class="flex gap-3 justify-end pt-2">
                        <button
                            type="button"
                            class="py-2 px-4 text-sm font-medium rounded-md transition-colors text-neutral-400 hover:text-white"
                            on:click=move |_| on_open_change.run(false)
                        >
                            "Cancel"
                        </button>
                        <button
                            type="submit"
                            class="py-2 px-4 text-sm font-medium text-black bg-gradient-to-r from-amber-500 to-amber-600 rounded-md transition-colors hover:from-amber-600 hover:to-amber-700"
                        >
                            "Submit"
                        </button>
                    </div>
                </form>
            </Show>
        </Modal>
    }
}

fn confirmation() -> impl IntoView {
    view! {
        <div class="flex flex-col justify-center items-center py-4 modal-rise">
            <div class="p-3 mb-4 rounded-full bg-amber-500/20">
                <svg
                    width="24"
                    height="24"
                    viewBox="0 0 24 24"
                    fill="none"
                    stroke="currentColor"
                    stroke-width="2"
                    stroke-linecap="round"
                    stroke-linejoin="round"
                    class="text-amber-500"
                >
                    <polyline points="20 6 9 17 4 12"></polyline>
                </svg>
            </div>
            <h3 class="mb-2 text-lg font-medium text-white">"Thank you!"</h3>
            <p class="text-center text-neutral-400">
                "We've received your email and will contact you soon."
            </p>
        </div>
    }
}
