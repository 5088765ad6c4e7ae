//! Privacy page. It has no `section[id]` elements, so the bar never attaches a
//! scroll listener here and the highlight only moves on click.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::{
    components::{navbar::NavBar, social::SocialButton},
    landing::{LOGO, SOCIAL_URL, nav_items},
};

pub fn component() -> impl IntoView {
    view! {
        <Title text="Privacy \u{2013} Landing"/>
        <NavBar items=nav_items() default_active="Privacy" logo=LOGO>
            <SocialButton href=SOCIAL_URL/>
        </NavBar>
        <article class="px-4 pt-40 pb-24 mx-auto max-w-3xl text-gray-300">
            <h1 class="mb-6 text-4xl font-bold text-[#ffef5c]">"Privacy"</h1>
            <p class="mb-4">
                "The contact form only keeps the address you type for as long as the dialog is open."
            </p>
            <p>"Nothing on this page is tracked while you scroll."</p>
        </article>
    }
}
