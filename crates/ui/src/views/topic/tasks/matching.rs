use dioxus::html::input_data::keyboard_types::Code;
use dioxus::prelude::*;

use tema_core::TaskAnswer;
use tema_core::model::{MatchSlot, MatchTerm};
use tema_core::placement::{GrabState, MatchBoard};

/// Term-to-explanation matching.
///
/// Pointer drag and keyboard grab/activate both resolve to the same board
/// placement, so the captured answer is identical regardless of modality.
#[component]
pub fn MatchTask(
    terms: Vec<MatchTerm>,
    explanations: Vec<MatchSlot>,
    answer: Signal<TaskAnswer>,
) -> Element {
    let board_seed: Vec<String> = terms.iter().map(|term| term.id.clone()).collect();
    let board = use_signal(move || MatchBoard::new(board_seed.clone()));
    let mut dragging = use_signal(|| None::<usize>);
    let mut grab = use_signal(GrabState::<usize>::new);

    // The single move operation both input paths converge on.
    let place = {
        let terms = terms.clone();
        use_callback(move |(index, slot_id): (usize, String)| {
            let mut board = board;
            let mut answer = answer;
            let Some(term) = terms.get(index) else {
                return;
            };
            board.write().place(&term.id, &slot_id);
            answer.set(board.read().answer());
        })
    };

    let unplaced: Vec<(usize, MatchTerm)> = terms
        .iter()
        .enumerate()
        .filter(|(_, term)| board.read().location_of(&term.id).is_none())
        .map(|(index, term)| (index, term.clone()))
        .collect();

    let term_items = unplaced
        .into_iter()
        .map(|(index, term)| {
            let grabbed = grab.read().is_grabbed(index);
            let class = if grabbed {
                "match-item match-item--grabbed"
            } else {
                "match-item"
            };
            rsx! {
                li {
                    key: "{term.id}",
                    class: "{class}",
                    role: "option",
                    tabindex: "0",
                    draggable: "true",
                    aria_grabbed: "{grabbed}",
                    ondragstart: move |_| dragging.set(Some(index)),
                    ondragend: move |_| dragging.set(None),
                    onkeydown: move |evt| {
                        if evt.data().code() == Code::Space {
                            evt.prevent_default();
                            grab.write().toggle(index);
                        }
                    },
                    "{term.text}"
                }
            }
        })
        .collect::<Vec<_>>();

    let slot_items = explanations
        .iter()
        .map(|slot| {
            let slot_id_for_drop = slot.id.clone();
            let slot_id_for_enter = slot.id.clone();
            let placed: Vec<(usize, MatchTerm)> = terms
                .iter()
                .enumerate()
                .filter(|(_, term)| {
                    board.read().location_of(&term.id) == Some(slot.id.as_str())
                })
                .map(|(index, term)| (index, term.clone()))
                .collect();

            let chips = placed
                .into_iter()
                .map(|(index, term)| {
                    let grabbed = grab.read().is_grabbed(index);
                    rsx! {
                        span {
                            key: "{term.id}",
                            class: "match-chip",
                            tabindex: "0",
                            draggable: "true",
                            aria_grabbed: "{grabbed}",
                            ondragstart: move |_| dragging.set(Some(index)),
                            ondragend: move |_| dragging.set(None),
                            onkeydown: move |evt| {
                                if evt.data().code() == Code::Space {
                                    evt.prevent_default();
                                    grab.write().toggle(index);
                                }
                            },
                            "{term.text}"
                        }
                    }
                })
                .collect::<Vec<_>>();

            rsx! {
                li {
                    key: "{slot.id}",
                    class: "target-item",
                    tabindex: "0",
                    ondragover: move |evt| evt.prevent_default(),
                    ondrop: move |evt| {
                        evt.prevent_default();
                        let current = dragging();
                        dragging.set(None);
                        if let Some(index) = current {
                            place.call((index, slot_id_for_drop.clone()));
                        }
                    },
                    onkeydown: move |evt| {
                        if evt.data().code() == Code::Enter {
                            evt.prevent_default();
                            if let Some(index) = grab.write().take() {
                                place.call((index, slot_id_for_enter.clone()));
                            }
                        }
                    },
                    span { class: "target-item__text", "{slot.text}" }
                    {chips.into_iter()}
                }
            }
        })
        .collect::<Vec<_>>();

    rsx! {
        div { class: "match-container",
            ul { class: "match-list", role: "listbox", aria_label: "Begreper",
                {term_items.into_iter()}
            }
            ul { class: "target-list", aria_label: "Forklaringer",
                {slot_items.into_iter()}
            }
        }
    }
}
