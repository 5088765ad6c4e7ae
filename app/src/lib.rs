// Core application modules and components
use chrono::{Datelike as _, Utc};
use leptos::{
    html::{a, body, div, footer, h1, head, html, meta, p},
    prelude::*,
};
use leptos_meta::{MetaTags, Stylesheet, StylesheetProps, Title, TitleProps, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{FlatRoutes, Route, Router},
};

pub mod components;
pub mod contact_form;
pub mod dom;
mod landing;
pub mod navigation;
mod privacy;

pub use landing::nav_items;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let html_comp = html().lang("en").child((
        head().child((
            meta().charset("utf-8"),
            meta()
                .name("viewport")
                .content("width=device-width, initial-scale=1"),
            HydrationScripts(HydrationScriptsProps::builder().options(options).build()),
            MetaTags(),
            Stylesheet(
                StylesheetProps::builder()
                    .id("leptos")
                    .href("/pkg/landing.css")
                    .build(),
            ),
            Title(TitleProps::builder().text("Landing").build()),
        )),
        body().class("bg-[#1e1e1e]").child(self::component),
    ));

    view! {
        <!DOCTYPE html>
        {html_comp}
    }
}

#[must_use]
pub fn component() -> impl IntoView {
    view! {
        <Router>
            <div class="text-white font-poppins">
                <main>
                    <FlatRoutes fallback=not_found>
                        <Route path=StaticSegment("") view=landing::component/>
                        <Route path=StaticSegment("privacy") view=privacy::component/>
                    </FlatRoutes>
                </main>
                {footer_component()}
            </div>
        </Router>
    }
}

fn not_found() -> impl IntoView {
    // On the server, answer unknown paths with a 404 status.
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(http::StatusCode::NOT_FOUND);
        }
    }

    div().class("grid place-content-center px-4 h-screen").child((
        h1().class("text-xl tracking-widest text-gray-400 uppercase")
            .child("404 | Not Found"),
        a().href("/")
            .class("mt-6 text-center duration-200 hover:text-[#68b5fc]")
            .child("Go back home"),
    ))
}

fn footer_component() -> impl IntoView {
    footer()
        .class("py-4 text-center bg-[#1e1e1e]/80")
        .child(
            p().class("text-gray-400").child((
                "Powered by",
                a().href("https://github.com/athola")
                    .class("hover:underline text-[#ffef5c]")
                    .child(" athola"),
                format!(" \u{a9} {}", Utc::now().year()),
            )),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shell_creation() {
        let options = LeptosOptions::builder().output_name("landing").build();
        let shell_view = shell(options);
        drop(shell_view);
    }

    #[test]
    fn test_component_function_signatures() {
        let _shell_fn: fn(LeptosOptions) -> _ = shell;
        let _component_fn: fn() -> _ = component;

        let options = LeptosOptions::builder().output_name("landing").build();
        assert_eq!(options.site_addr.port(), 3000);
        assert_eq!(options.site_addr.ip().to_string(), "127.0.0.1");
    }

    #[test]
    fn test_site_nav_items() {
        let items = nav_items();
        let names: Vec<&str> = items.iter().map(|item| item.name.as_str()).collect();
        assert_eq!(names, ["Home", "Features", "Pricing", "Contact", "Privacy"]);
        assert_eq!(items[0].name, navigation::DEFAULT_ACTIVE);
        assert!(navigation::tracks_scroll(&items, 4));
    }
}
