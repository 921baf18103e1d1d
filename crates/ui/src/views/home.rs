use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{highlight_links, map_topic_links, overall_progress_percent};

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let content = ctx.content();

    let progress_service = ctx.progress();
    let resource = use_resource(move || {
        let progress_service = progress_service.clone();
        async move { Ok::<_, ViewError>(progress_service.load().await) }
    });

    let state = view_state_from_resource(&resource);
    let total_topics = content.topic_count();
    let links = highlight_links();

    rsx! {
        div { class: "content-area home-page",
            header { class: "content-header",
                h2 { "Fagtema" }
                p { "Praktisk opplæring i fagspråk, rutiner og samarbeid i produksjonen." }
            }

            div { class: "content-body",
                section { class: "intro",
                    p {
                        "Denne læringsressursen gir nye og erfarne medarbeidere et praktisk "
                        "innblikk i prosessene, sikkerheten og kvalitetskravene i fabrikkene våre."
                    }
                    p {
                        "Arbeid gjennom temaene for å styrke fagspråk, rutiner og samarbeid "
                        "på tvers av linjene. Hver modul er koblet til konkrete arbeidsoppgaver "
                        "i produksjonen."
                    }
                }

                section { class: "brand-highlights", aria_label: "Utforsk satsingsområdene",
                    h3 { "Utforsk" }
                    div { class: "highlight-grid",
                        for link in links {
                            article { class: "highlight-card",
                                h4 { "{link.title()}" }
                                p { "{link.description()}" }
                                a {
                                    href: "{link.href()}",
                                    class: "button-link",
                                    target: "_blank",
                                    rel: "noopener noreferrer",
                                    "{link.cta()}"
                                }
                            }
                        }
                    }
                }

                match state {
                    ViewState::Idle | ViewState::Loading => rsx! {
                        p { "Laster..." }
                    },
                    ViewState::Error(err) => rsx! {
                        p { "{err.message()}" }
                    },
                    ViewState::Ready(progress) => {
                        let completed = progress.completed_count();
                        let percent = overall_progress_percent(completed, total_topics);
                        let topic_links = map_topic_links(&content, &progress);
                        rsx! {
                            section { class: "progress-section", aria_label: "Din fremdrift",
                                h3 { "Din fremdrift" }
                                p { "Du har fullført {completed} av {total_topics} temaer." }
                                div {
                                    class: "progress-bar",
                                    role: "progressbar",
                                    aria_valuenow: "{percent}",
                                    aria_valuemin: "0",
                                    aria_valuemax: "100",
                                    div { class: "progress", style: "width:{percent}%" }
                                }
                            }

                            section { class: "topic-list",
                                h3 { "Start på et tema" }
                                ul {
                                    if topic_links.is_empty() {
                                        li { class: "topic-link__empty",
                                            "Ingen tema er publisert ennå."
                                        }
                                    } else {
                                        for link in topic_links {
                                            li {
                                                Link {
                                                    to: Route::Topic { position: link.position },
                                                    class: "topic-link",
                                                    span { class: "topic-link__title", "{link.label}" }
                                                    span { class: "topic-link__name", "{link.title}" }
                                                    if link.completed {
                                                        span { class: "topic-link__status", "Fullført" }
                                                    }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
