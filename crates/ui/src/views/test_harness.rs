use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};

use services::{AppServices, ContentLibrary, ProgressService, SettingsService};
use storage::repository::Storage;
use tema_core::Clock;
use tema_core::time::fixed_clock;

use crate::context::{UiApp, build_app_context};
use crate::views::{HomeView, TopicView};

#[derive(Clone)]
struct TestApp {
    services: AppServices,
}

impl UiApp for TestApp {
    fn content(&self) -> Arc<ContentLibrary> {
        Arc::clone(&self.services.content)
    }

    fn settings(&self) -> Arc<SettingsService> {
        Arc::clone(&self.services.settings)
    }

    fn progress(&self) -> Arc<ProgressService> {
        Arc::clone(&self.services.progress)
    }

    fn clock(&self) -> Clock {
        self.services.clock
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Topic(usize),
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Topic(position) => rsx! { TopicView { position } },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub storage: Storage,
    pub services: AppServices,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

/// Two topics, one full quiz; topic 2 has content but no quiz.
pub fn sample_library() -> ContentLibrary {
    let topics = serde_json::from_str(
        r#"[
            {
                "id": 1,
                "title": "Sikkerhet i produksjonen",
                "text": "Sikkerhet kommer alltid først på gulvet.",
                "dialogues": [{"speaker": "Kari", "text": "Husk hjelmen!"}],
                "grammar": ["Imperativ: husk, stopp, vent"],
                "vocabulary": [{"word": "vernebriller", "explanation": "beskytter øynene"}]
            },
            {"id": 2, "title": "Montasjelinjen", "text": "Montasje krever presisjon."}
        ]"#,
    )
    .expect("sample topics parse");
    let quizzes = serde_json::from_str(
        r#"[
            {
                "topicId": 1,
                "tasks": [
                    {
                        "type": "Leseforståelse",
                        "question": "Hva tar du på først?",
                        "options": [
                            {"text": "Hjelm", "value": "a", "isCorrect": true},
                            {"text": "Ingenting", "value": "b"}
                        ]
                    },
                    {
                        "type": "Fyll-inn-tomrom",
                        "question": "Fyll inn riktig ord.",
                        "sentence": "Jeg bruker [_] på hodet.",
                        "correctAnswers": ["hjelm"],
                        "wordBank": ["hjelm", "vest"]
                    }
                ]
            }
        ]"#,
    )
    .expect("sample quizzes parse");
    ContentLibrary::new(topics, quizzes)
}

pub fn setup_view_harness(view: ViewKind, library: ContentLibrary) -> ViewHarness {
    let storage = Storage::in_memory();
    let services = AppServices::with_library(storage.clone(), library, fixed_clock());
    let app = Arc::new(TestApp {
        services: services.clone(),
    });

    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app, view });

    ViewHarness {
        dom,
        storage,
        services,
    }
}
