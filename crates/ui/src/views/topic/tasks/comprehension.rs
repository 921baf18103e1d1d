use dioxus::prelude::*;

use tema_core::TaskAnswer;
use tema_core::model::ChoiceOption;

/// Single-choice reading comprehension: one radio group per task.
#[component]
pub fn ComprehensionTask(
    group: String,
    options: Vec<ChoiceOption>,
    answer: Signal<TaskAnswer>,
) -> Element {
    let selected = match &*answer.read() {
        TaskAnswer::Choice { selected } => selected.clone(),
        _ => None,
    };

    let rendered = options
        .iter()
        .enumerate()
        .map(|(index, option)| {
            let id = format!("{group}-option-{index}");
            let value = option.value.clone();
            let checked = selected.as_deref() == Some(option.value.as_str());
            let mut answer = answer;
            rsx! {
                label { key: "{id}", class: "answer-option", r#for: "{id}",
                    input {
                        r#type: "radio",
                        id: "{id}",
                        name: "{group}",
                        value: "{option.value}",
                        checked: checked,
                        aria_label: "{option.text}",
                        onchange: move |_| {
                            answer.set(TaskAnswer::Choice {
                                selected: Some(value.clone()),
                            });
                        },
                    }
                    "{option.text}"
                }
            }
        })
        .collect::<Vec<_>>();

    rsx! {
        form { class: "answer-options",
            {rendered.into_iter()}
        }
    }
}
