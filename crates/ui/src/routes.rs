use dioxus::document::eval;
use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use tema_core::model::{Theme, UserSettings};

use crate::context::AppContext;
use crate::views::{HomeView, Toolbar, TopicView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/tema/:position", TopicView)] Topic { position: usize },
        // Unrecognized fragments fall back to the home view.
        #[route("/:..segments", FallbackView)] Fallback { segments: Vec<String> },
}

#[component]
fn FallbackView(segments: Vec<String>) -> Element {
    tracing::debug!(fragment = segments.join("/"), "unknown route, showing home");
    rsx! {
        HomeView {}
    }
}

#[component]
fn Layout() -> Element {
    let ctx = use_context::<AppContext>();
    let mut settings = use_signal(UserSettings::default);
    let announcement = use_signal(String::new);

    // Pull persisted presentation settings before the first interaction.
    let settings_service = ctx.settings();
    use_future(move || {
        let settings_service = settings_service.clone();
        async move {
            if let Ok(stored) = settings_service.load().await {
                settings.set(stored);
            }
        }
    });

    // The text scale lives in a CSS variable so the whole app follows it.
    use_effect(move || {
        let size = settings().text_size;
        let js = format!(
            "document.documentElement.style.setProperty('--text-base', '{size}rem');",
        );
        let _ = eval(&js);
    });

    let current = settings();
    let theme_class = match current.theme {
        Theme::Dark => "theme-dark",
        Theme::Light => "theme-light",
    };
    let contrast_class = if current.high_contrast {
        " high-contrast"
    } else {
        ""
    };

    rsx! {
        div { class: "app {theme_class}{contrast_class}",
            header { class: "app-header",
                Link { to: Route::Home {}, class: "app-title", h1 { "Fagtema" } }
                Toolbar { settings, announcement }
            }
            main { class: "content",
                Outlet::<Route> {}
            }
            div {
                id: "a11y-live",
                class: "visually-hidden",
                role: "status",
                aria_live: "polite",
                "{announcement}"
            }
        }
    }
}
