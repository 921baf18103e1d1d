use dioxus::prelude::*;

use tema_core::model::{MediaBlock, Topic};

use crate::context::AppContext;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::sanitize_html;

use super::quiz::QuizSection;

#[component]
pub fn TopicView(position: usize) -> Element {
    let ctx = use_context::<AppContext>();
    let content = ctx.content();

    let topic = content.topic_by_position(position).cloned();
    let tasks = topic
        .as_ref()
        .map(|topic| content.tasks_for(&topic.id).to_vec())
        .unwrap_or_default();
    let has_quiz = topic
        .as_ref()
        .is_some_and(|topic| content.quiz_for(&topic.id).is_some());

    // The stored attempt record for this topic, sized to the current quiz.
    let progress_service = ctx.progress();
    let lookup = topic.as_ref().map(|topic| topic.id.clone());
    let task_count = tasks.len();
    let resource = use_resource(move || {
        let progress_service = progress_service.clone();
        let lookup = lookup.clone();
        async move {
            match lookup {
                Some(topic_id) => Ok::<_, ViewError>(Some(
                    progress_service.record_for(&topic_id, task_count).await,
                )),
                None => Ok(None),
            }
        }
    });
    let record_state = view_state_from_resource(&resource);

    let Some(topic) = topic else {
        return rsx! {
            div { class: "content-area",
                p { "Temaet ble ikke funnet." }
            }
        };
    };

    let icon_html = topic.icon.as_deref().map(sanitize_html);
    let text_html = sanitize_html(&topic.text);

    rsx! {
        div { class: "content-area topic-page",
            header { class: "content-header",
                if let Some(icon) = icon_html {
                    span { class: "topic-icon", dangerous_inner_html: "{icon}" }
                }
                h2 { "{topic.title}" }
                p { "Tema {position}" }
            }

            div { class: "content-body",
                if let Some(hero) = topic.hero.as_ref() {
                    div { class: "hero-image",
                        img { src: "{hero.src}", alt: "{hero.alt}" }
                    }
                }

                p { dangerous_inner_html: "{text_html}" }

                MediaBlockList { blocks: topic.media_blocks.clone() }

                if !topic.dialogues.is_empty() {
                    div { class: "dialogue",
                        for line in topic.dialogues.iter() {
                            p {
                                strong { "{line.speaker}" }
                                ": {line.text}"
                            }
                        }
                    }
                }

                if !topic.grammar.is_empty() {
                    h3 { "Grammatikkfokus" }
                    ul {
                        for note in topic.grammar.iter() {
                            li { "{note}" }
                        }
                    }
                }
            }

            VocabPanel { topic: topic.clone() }

            div { class: "quiz-container",
                h3 { "Oppgaver" }
                if has_quiz && !tasks.is_empty() {
                    p { "Fullfør alle oppgavene for å fullføre temaet." }
                    match record_state {
                        ViewState::Idle | ViewState::Loading => rsx! {
                            p { "Laster..." }
                        },
                        ViewState::Error(err) => rsx! {
                            p { "{err.message()}" }
                        },
                        ViewState::Ready(record) => rsx! {
                            if let Some(record) = record {
                                QuizSection {
                                    topic_id: topic.id.clone(),
                                    tasks: tasks.clone(),
                                    initial: record,
                                }
                            }
                        },
                    }
                } else {
                    p { "Ingen oppgaver er lagt inn for dette temaet ennå." }
                }
            }
        }
    }
}

/// The per-topic word list, closable like the original side panel.
#[component]
fn VocabPanel(topic: Topic) -> Element {
    let mut hidden = use_signal(|| false);

    if topic.vocabulary.is_empty() || hidden() {
        return rsx! {};
    }

    rsx! {
        aside { class: "vocab-panel", aria_label: "Ordliste",
            div { class: "vocab-panel__header",
                h3 { "Ordliste" }
                button {
                    id: "close-vocab-btn",
                    class: "vocab-panel__close",
                    r#type: "button",
                    aria_label: "Lukk ordliste",
                    onclick: move |_| hidden.set(true),
                    "×"
                }
            }
            ul { class: "word-list",
                for entry in topic.vocabulary.iter() {
                    li {
                        strong { "{entry.word}" }
                        ": {entry.explanation}"
                    }
                }
            }
        }
    }
}

#[component]
fn MediaBlockList(blocks: Vec<MediaBlock>) -> Element {
    rsx! {
        for block in blocks {
            match block {
                MediaBlock::Poster { title, image, alt, caption } => rsx! {
                    div { class: "media-block poster-block",
                        h3 { "{title}" }
                        img { src: "{image}", alt: "{alt}" }
                        if let Some(caption) = caption {
                            p {
                                em { "{caption}" }
                            }
                        }
                    }
                },
                MediaBlock::IconGrid { title, intro, items } => rsx! {
                    div { class: "media-block icon-grid-block",
                        h3 { "{title}" }
                        if let Some(intro) = intro {
                            p { "{intro}" }
                        }
                        div { class: "icon-grid",
                            for item in items {
                                div { class: "icon-item",
                                    img { src: "{item.icon}", alt: "{item.title}" }
                                    h4 { "{item.title}" }
                                    p { "{item.desc}" }
                                }
                            }
                        }
                    }
                },
                // Unknown block types render nothing rather than failing.
                MediaBlock::Unknown => rsx! {},
            }
        }
    }
}
