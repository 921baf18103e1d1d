use dioxus::prelude::*;
use tracing::warn;

use services::QuizSession;
use tema_core::TaskAnswer;
use tema_core::model::{AttemptRecord, Task, TopicId};

use crate::context::AppContext;
use crate::vm::map_task_card;

use super::tasks::{ClassifyTask, ClozeTask, ComprehensionTask, MatchTask, OrderTask};

/// Feedback line under a task card.
#[derive(Clone, Debug, PartialEq)]
enum Feedback {
    Correct,
    Incorrect,
    Solution(String),
}

impl Feedback {
    fn text(&self) -> String {
        match self {
            Feedback::Correct => "Riktig! Bra jobbet.".to_string(),
            Feedback::Incorrect => "Feil. Prøv igjen!".to_string(),
            Feedback::Solution(solution) => format!("Fasit: {solution}"),
        }
    }

    fn class(&self) -> &'static str {
        match self {
            Feedback::Correct => "feedback-message feedback-correct",
            Feedback::Incorrect => "feedback-message feedback-incorrect",
            Feedback::Solution(_) => "feedback-message",
        }
    }
}

/// The task list for one topic, with the per-quiz progress bar.
///
/// Owns the working `QuizSession`; every check/retry writes the updated
/// attempt record back through the progress service.
#[component]
pub fn QuizSection(topic_id: TopicId, tasks: Vec<Task>, initial: AttemptRecord) -> Element {
    let ctx = use_context::<AppContext>();

    let task_count = tasks.len();
    let clock = ctx.clock();
    let session_topic = topic_id.clone();
    let session_seed = initial.clone();
    let session = use_signal(move || {
        QuizSession::new(
            session_topic.clone(),
            task_count,
            Some(session_seed.clone()),
            clock,
        )
    });

    let persist = {
        let progress_service = ctx.progress();
        let topic_id = topic_id.clone();
        use_callback(move |record: AttemptRecord| {
            let progress_service = progress_service.clone();
            let topic_id = topic_id.clone();
            spawn(async move {
                if let Err(err) = progress_service.save_topic(&topic_id, record).await {
                    warn!(error = %err, "could not persist quiz progress");
                }
            });
        })
    };

    let percent = session.read().progress_percent();

    rsx! {
        div {
            class: "progress-bar",
            role: "progressbar",
            aria_valuenow: "{percent}",
            aria_valuemin: "0",
            aria_valuemax: "100",
            div { class: "progress", style: "width:{percent}%" }
        }

        for (index, task) in tasks.iter().enumerate() {
            TaskCard {
                index,
                task: task.clone(),
                session,
                persist,
            }
        }
    }
}

#[component]
fn TaskCard(
    index: usize,
    task: Task,
    session: Signal<QuizSession>,
    persist: Callback<AttemptRecord>,
) -> Element {
    let vm = map_task_card(index, &task);
    let mut generation = use_signal(|| 0_u32);
    let answer_seed = task.clone();
    let mut answer = use_signal(move || TaskAnswer::empty_for(&answer_seed));
    let mut feedback = use_signal(|| None::<Feedback>);

    let controls = session.read().controls(index);
    let solved = session.read().is_solved(index);

    let on_check = {
        let task = task.clone();
        move |_| {
            let mut session = session;
            let captured = answer.read().clone();
            let report = session.write().check(index, &task, &captured);
            feedback.set(Some(if report.correct {
                Feedback::Correct
            } else {
                Feedback::Incorrect
            }));
            persist.call(session.read().record().clone());
        }
    };

    let on_retry = {
        let task = task.clone();
        move |_| {
            let mut session = session;
            session.write().retry(index);
            answer.set(TaskAnswer::empty_for(&task));
            feedback.set(None);
            // Remount the interactive surface so the redrawn subtree gets
            // fresh boards and fresh drag/keyboard bindings.
            generation += 1;
            persist.call(session.read().record().clone());
        }
    };

    let on_solution = {
        let task = task.clone();
        move |_| {
            feedback.set(Some(Feedback::Solution(task.solution_text())));
        }
    };

    let card_class = if solved {
        "task-card task-card--solved"
    } else {
        "task-card"
    };

    rsx! {
        div { class: "{card_class}",
            h4 { "{vm.heading}" }
            p { "{vm.question}" }

            div { class: "task-content", key: "{generation}",
                match &task {
                    Task::Comprehension { options, .. } => rsx! {
                        ComprehensionTask {
                            group: format!("task-{index}-answer"),
                            options: options.clone(),
                            answer,
                        }
                    },
                    Task::Match { terms, explanations, .. } => rsx! {
                        MatchTask {
                            terms: terms.clone(),
                            explanations: explanations.clone(),
                            answer,
                        }
                    },
                    Task::Order { items, .. } => rsx! {
                        OrderTask { items: items.clone(), answer }
                    },
                    Task::Cloze { sentence, correct_answers, word_bank, .. } => rsx! {
                        ClozeTask {
                            sentence: sentence.clone(),
                            blank_count: correct_answers.len(),
                            word_bank: word_bank.clone().unwrap_or_default(),
                            answer,
                        }
                    },
                    Task::ClassifyDrag { items, .. } => rsx! {
                        ClassifyTask { items: items.clone(), answer }
                    },
                }
            }

            if let Some(current) = feedback() {
                div {
                    class: "{current.class()}",
                    role: "alert",
                    aria_live: "polite",
                    "{current.text()}"
                }
            }

            div { class: "button-group",
                if controls.check {
                    button { class: "check-btn", r#type: "button", onclick: on_check, "Sjekk svar" }
                }
                if controls.retry {
                    button { class: "retry-btn", r#type: "button", onclick: on_retry, "Prøv på nytt" }
                }
                if controls.solution {
                    button { class: "solution-btn", r#type: "button", onclick: on_solution, "Vis fasit" }
                }
            }
        }
    }
}
