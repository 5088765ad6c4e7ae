//! Landing page: four anchorable sections under the navigation bar, and a
//! button that opens the contact dialog.

use icondata::{FiDollarSign, FiHome, FiMail, FiShield, FiStar};
use leptos::prelude::*;
use leptos_meta::Title;

use crate::{
    components::{
        contact_dialog::ContactDialog,
        navbar::{Logo, NavBar},
        social::SocialButton,
    },
    navigation::NavItem,
};

pub const LOGO: Logo = Logo {
    href: "/",
    src: "/logo.svg",
    alt: "Landing",
};

pub const SOCIAL_URL: &str = "https://x.com/alexthola";

/// Entries shared by every page of the site.
#[must_use]
pub fn nav_items() -> Vec<NavItem> {
    vec![
        NavItem::new("Home", "#home", FiHome),
        NavItem::new("Features", "#features", FiStar),
        NavItem::new("Pricing", "#pricing", FiDollarSign),
        NavItem::new("Contact", "#contact", FiMail),
        NavItem::new("Privacy", "/privacy", FiShield),
    ]
}

pub fn component() -> impl IntoView {
    let (dialog_open, set_dialog_open) = signal(false);

    view! {
        <Title text="Landing \u{2013} Scroll-aware navigation"/>
        <NavBar items=nav_items() logo=LOGO>
            <SocialButton href=SOCIAL_URL/>
        </NavBar>
        <section id="home" class="flex flex-col justify-center px-4 min-h-screen">
            <h1 class="mb-6 text-5xl font-extrabold leading-tight sm:text-6xl text-[#ffef5c]">
                "Ship faster with fewer surprises"
            </h1>
            <p class="text-gray-300">"Scroll down; the bar follows along."</p>
        </section>
        <section id="features" class="flex flex-col justify-center px-4 min-h-screen bg-[#2a2a2a]">
            <h2 class="mb-6 text-3xl font-bold text-[#ffef5c]">"Features"</h2>
            <p class="text-gray-300">"Smooth anchor scrolling, responsive icons, a glowing active tab."</p>
        </section>
        <section id="pricing" class="flex flex-col justify-center px-4 min-h-screen">
            <h2 class="mb-6 text-3xl font-bold text-[#ffef5c]">"Pricing"</h2>
            <p class="text-gray-300">"Talk to us about a plan that fits."</p>
        </section>
        <section id="contact" class="flex flex-col justify-center px-4 min-h-screen bg-[#2a2a2a]">
            <h2 class="mb-6 text-3xl font-bold text-[#ffef5c]">"Contact"</h2>
            <button
                type="button"
                class="py-3 px-6 w-fit text-lg font-semibold transition-colors bg-[#ffef5c] text-[#1e1e1e] hover:bg-[#ffef5c]/90"
                on:click=move |_| set_dialog_open.set(true)
            >
                "Contact sales"
            </button>
        </section>
        <ContactDialog open=dialog_open on_open_change=move |open| set_dialog_open.set(open)/>
    }
}
