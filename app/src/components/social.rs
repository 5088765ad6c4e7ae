use leptos::prelude::*;

/// Round link to the company's X profile, shown at the right edge of the bar.
#[component]
pub fn SocialButton(href: &'static str, #[prop(default = "X")] label: &'static str) -> impl IntoView {
    view! {
        <a
            href=href
            rel="noopener noreferrer"
            target="_blank"
            aria-label=label
            class="flex justify-center items-center text-white rounded-full border transition-all duration-500 size-9 border-white/10 bg-black/50 hover:text-[#ffef5c]"
        >
            <span class="text-sm">"𝕏"</span>
        </a>
    }
}
