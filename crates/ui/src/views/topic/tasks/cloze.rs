use dioxus::prelude::*;

use tema_core::TaskAnswer;
use tema_core::model::{ClozeSegment, cloze_segments};

/// Fill-in-the-blank sentence, with an optional word bank that fills the
/// inputs round-robin like the original.
#[component]
pub fn ClozeTask(
    sentence: String,
    blank_count: usize,
    word_bank: Vec<String>,
    answer: Signal<TaskAnswer>,
) -> Element {
    let mut fill_index = use_signal(|| 0_usize);

    let entries = match &*answer.read() {
        TaskAnswer::Cloze { entries } => entries.clone(),
        _ => vec![String::new(); blank_count],
    };

    let mut blank_no = 0_usize;
    let rendered = cloze_segments(&sentence)
        .into_iter()
        .map(|segment| match segment {
            ClozeSegment::Text(text) => rsx! {
                span { "{text}" }
            },
            ClozeSegment::Blank => {
                let slot = blank_no;
                blank_no += 1;
                let value = entries.get(slot).cloned().unwrap_or_default();
                let mut answer = answer;
                rsx! {
                    input {
                        r#type: "text",
                        class: "cloze-input",
                        aria_label: "Fyll inn riktig ord",
                        value: "{value}",
                        oninput: move |evt| {
                            let mut current = answer.write();
                            if let TaskAnswer::Cloze { entries } = &mut *current {
                                if let Some(entry) = entries.get_mut(slot) {
                                    *entry = evt.value();
                                }
                            }
                        },
                    }
                }
            }
        })
        .collect::<Vec<_>>();

    let bank_buttons = word_bank
        .iter()
        .map(|word| {
            let word = word.clone();
            let mut answer = answer;
            rsx! {
                button {
                    key: "{word}",
                    r#type: "button",
                    class: "word-btn",
                    onclick: move |_| {
                        let slot = fill_index();
                        {
                            let mut current = answer.write();
                            if let TaskAnswer::Cloze { entries } = &mut *current {
                                if let Some(entry) = entries.get_mut(slot) {
                                    *entry = word.trim().to_string();
                                }
                            }
                        }
                        if blank_count > 0 {
                            fill_index.set((slot + 1) % blank_count);
                        }
                    },
                    "{word}"
                }
            }
        })
        .collect::<Vec<_>>();

    rsx! {
        p { class: "cloze-sentence",
            {rendered.into_iter()}
        }
        if !bank_buttons.is_empty() {
            div { class: "word-bank", role: "group", aria_label: "Velg ord",
                {bank_buttons.into_iter()}
            }
        }
    }
}
