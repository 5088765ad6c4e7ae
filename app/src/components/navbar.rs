//! Fixed top navigation bar that highlights the section currently in view.
//!
//! The bar renders nothing until its mount effect has run in the browser, so the
//! first client paint already knows the viewport class and scroll position.

use leptos::{ev, prelude::*};

use crate::{
    dom::{self, WindowSubscription},
    navigation::{
        DEFAULT_ACTIVE, ICON_SIZE_PX, ICON_STROKE_WIDTH, NavItem, NavLayout, NavState, tracks_scroll,
    },
};

/// Brand image pinned to the top left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Logo {
    pub href: &'static str,
    pub src: &'static str,
    pub alt: &'static str,
}

#[component]
pub fn NavBar(
    #[prop(into)] items: Signal<Vec<NavItem>>,
    #[prop(optional, into)] class: String,
    #[prop(into, default = Signal::stored(DEFAULT_ACTIVE.to_owned()))] default_active: Signal<
        String,
    >,
    #[prop(optional)] layout: NavLayout,
    #[prop(optional)] logo: Option<Logo>,
    #[prop(optional)] children: Option<ChildrenFn>,
) -> impl IntoView {
    let state = RwSignal::new(NavState::new(default_active.get_untracked()));

    Effect::new(move |_| {
        state.update(|nav| nav.mount(dom::viewport_width(), &layout));

        let subscription = WindowSubscription::new().listen(ev::resize, move |_| {
            if let Some(width) = dom::viewport_width() {
                state.maybe_update(|nav| nav.resize(width, &layout));
            }
        });
        on_cleanup(move || subscription.unregister());
    });

    Effect::new(move |previous_default: Option<String>| {
        let items = items.get();
        let default = default_active.get();
        if previous_default.is_some_and(|previous| previous != default) {
            state.update(|nav| nav.reset_active(&default));
        }

        let section_count = dom::measure_sections().len();
        if !tracks_scroll(&items, section_count) {
            log::debug!("Scroll tracking off ({section_count} sections on page)");
            return default;
        }

        sync_active_section(state, &items, &layout);
        let subscription = WindowSubscription::new().listen(ev::scroll, move |_| {
            sync_active_section(state, &items, &layout);
        });
        on_cleanup(move || subscription.unregister());

        default
    });

    let bar_class = format!(
        "fixed top-0 left-0 right-0 z-[9999] py-4 bg-gradient-to-b from-black/50 to-transparent backdrop-blur-sm {class}"
    );

    view! {
        <Show when=move || state.with(|nav| nav.mounted)>
            {logo.map(|logo| view! {
                <div class="fixed top-2 left-4 z-[10000]">
                    <a href=logo.href>
                        <img src=logo.src alt=logo.alt class="h-24 md:h-28"/>
                    </a>
                </div>
            })}
            <nav class=bar_class.clone()>
                <div class="container relative flex justify-center items-center mx-auto">
                    {children.clone().map(|children| view! {
                        <div class="absolute right-4 top-1/2 -translate-y-1/2">{children()}</div>
                    })}
                    <div class="flex relative gap-3 items-center py-2 px-2 rounded-full border shadow-lg bg-black/50 border-white/10 backdrop-blur-lg nav-enter">
                        <For each=move || items.get() key=|item| item.name.clone() let:item>
                            <NavEntry item=item state=state layout=layout/>
                        </For>
                    </div>
                </div>
            </nav>
        </Show>
    }
}

/// One clickable entry of the bar.
#[component]
fn NavEntry(item: NavItem, state: RwSignal<NavState>, layout: NavLayout) -> impl IntoView {
    let is_active = {
        let name = item.name.clone();
        move || state.with(|nav| nav.is_active(&name))
    };
    let shows_hover = {
        let name = item.name.clone();
        move || state.with(|nav| nav.shows_hover(&name))
    };
    let entry_class = {
        let is_active = is_active.clone();
        move || {
            let tone = if is_active() { "text-white" } else { "text-white/70 hover:text-white" };
            format!(
                "relative py-3 px-6 text-sm font-semibold rounded-full transition-all duration-300 cursor-pointer {tone}"
            )
        }
    };

    let on_click = {
        let item = item.clone();
        move |ev: ev::MouseEvent| {
            ev.prevent_default();
            let Some(target) = state.try_update(|nav| nav.select(&item)) else {
                return;
            };
            if let Err(err) = dom::follow(&target, layout.anchor_offset) {
                log::warn!("Navigation to {target} skipped: {err}");
            }
        }
    };
    let on_enter = {
        let name = item.name.clone();
        move |_: ev::MouseEvent| state.update(|nav| nav.hover(&name))
    };

    let label = item.name.clone();
    let icon = item.icon;

    view! {
        <a
            href=item.url.clone()
            class=entry_class
            on:click=on_click
            on:mouseenter=on_enter
            on:mouseleave=move |_| state.update(NavState::leave)
        >
            <Show when=is_active>
                <div class="overflow-hidden absolute inset-0 rounded-full -z-10 nav-pulse">
                    <div class="absolute inset-0 rounded-full blur-md bg-primary/25"></div>
                    <div class="absolute rounded-full blur-xl inset-[-4px] bg-primary/20"></div>
                    <div class="absolute rounded-full blur-2xl inset-[-8px] bg-primary/15"></div>
                    <div class="absolute rounded-full blur-3xl inset-[-12px] bg-primary/5"></div>
                    <div class="absolute inset-0 bg-gradient-to-r from-primary/0 via-primary/20 to-primary/0 nav-shine"></div>
                </div>
            </Show>
            <Show
                when=move || state.with(|nav| nav.viewport.shows_labels())
                fallback=move || view! {
                    <span class="relative z-10 nav-icon">
                        <svg
                            viewBox=icon.view_box
                            inner_html=icon.data
                            width=ICON_SIZE_PX.to_string()
                            height=ICON_SIZE_PX.to_string()
                            fill="none"
                            stroke="currentColor"
                            stroke-width=ICON_STROKE_WIDTH.to_string()
                            stroke-linecap="round"
                            stroke-linejoin="round"
                        ></svg>
                    </span>
                }
            >
                <span class="relative z-10 nav-fade-in">{label.clone()}</span>
            </Show>
            <Show when=shows_hover>
                <div class="absolute inset-0 rounded-full bg-white/10 -z-10 nav-hover"></div>
            </Show>
        </a>
    }
}

/// Measures the page and moves the highlight if the section in view changed.
fn sync_active_section(state: RwSignal<NavState>, items: &[NavItem], layout: &NavLayout) {
    let sections = dom::measure_sections();
    if sections.is_empty() {
        return;
    }
    let scroll_y = dom::scroll_offset();
    state.maybe_update(|nav| nav.follow_scroll(items, &sections, scroll_y, layout));
}
