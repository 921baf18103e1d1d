use dioxus::prelude::*;
use tracing::warn;

use tema_core::model::{Theme, UserSettings};

use crate::context::AppContext;

/// Accessibility toolbar: theme toggle, text size controls, high contrast.
///
/// Every change is applied to the shared settings signal first (so the UI
/// reacts immediately), then persisted, then announced to the live region.
#[component]
pub fn Toolbar(settings: Signal<UserSettings>, announcement: Signal<String>) -> Element {
    let ctx = use_context::<AppContext>();

    let apply = {
        let settings_service = ctx.settings();
        use_callback(move |(next, message): (UserSettings, String)| {
            let mut settings = settings;
            let mut announcement = announcement;
            settings.set(next);
            announcement.set(message);
            let settings_service = settings_service.clone();
            spawn(async move {
                if let Err(err) = settings_service.save(next).await {
                    warn!(error = %err, "could not persist settings");
                }
            });
        })
    };

    let current = settings();
    let dark = current.theme == Theme::Dark;

    rsx! {
        div { class: "toolbar", role: "group", aria_label: "Tilgjengelighet",
            button {
                id: "theme-toggle",
                class: "toolbar-btn",
                r#type: "button",
                aria_pressed: "{dark}",
                onclick: move |_| {
                    let mut next = settings();
                    next.theme = next.theme.toggled();
                    let message = match next.theme {
                        Theme::Dark => "Mørk modus på.",
                        Theme::Light => "Lys modus på.",
                    };
                    apply.call((next, message.to_string()));
                },
                "Mørk modus"
            }
            button {
                id: "size-increase",
                class: "toolbar-btn",
                r#type: "button",
                aria_label: "Større tekst",
                onclick: move |_| {
                    let mut next = settings();
                    let increased = next.text_size.increased();
                    if increased != next.text_size {
                        next.text_size = increased;
                        let message =
                            format!("Tekststørrelse {} prosent.", increased.percent());
                        apply.call((next, message));
                    }
                },
                "A+"
            }
            button {
                id: "size-decrease",
                class: "toolbar-btn",
                r#type: "button",
                aria_label: "Mindre tekst",
                onclick: move |_| {
                    let mut next = settings();
                    let decreased = next.text_size.decreased();
                    if decreased != next.text_size {
                        next.text_size = decreased;
                        let message =
                            format!("Tekststørrelse {} prosent.", decreased.percent());
                        apply.call((next, message));
                    }
                },
                "A-"
            }
            button {
                id: "contrast-toggle",
                class: "toolbar-btn",
                r#type: "button",
                aria_pressed: "{current.high_contrast}",
                onclick: move |_| {
                    let mut next = settings();
                    next.high_contrast = !next.high_contrast;
                    let message = if next.high_contrast {
                        "Høy kontrast på."
                    } else {
                        "Høy kontrast av."
                    };
                    apply.call((next, message.to_string()));
                },
                "Kontrast"
            }
        }
    }
}
