use dioxus::html::input_data::keyboard_types::Code;
use dioxus::prelude::*;

use tema_core::TaskAnswer;
use tema_core::model::ClassifyItem;
use tema_core::placement::{ClassifyBoard, GrabState, Zone};

/// Drag items into the "correct" or "incorrect" routine zone.
///
/// Items stay movable after placement, so a wrong drop can be corrected
/// by dragging (or keyboard-placing) the item again.
#[component]
pub fn ClassifyTask(items: Vec<ClassifyItem>, answer: Signal<TaskAnswer>) -> Element {
    let item_count = items.len();
    let board = use_signal(move || ClassifyBoard::new(item_count));
    let mut dragging = use_signal(|| None::<usize>);
    let mut grab = use_signal(GrabState::<usize>::new);

    let place = use_callback(move |(index, zone): (usize, Zone)| {
        let mut board = board;
        let mut answer = answer;
        board.write().place(index, zone);
        answer.set(board.read().answer());
    });

    let item_node = |index: usize, text: &str| {
        let grabbed = grab.read().is_grabbed(index);
        let text = text.to_string();
        rsx! {
            li {
                key: "{index}",
                class: if grabbed { "drag-item drag-item--grabbed" } else { "drag-item" },
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
                "{text}"
            }
        }
    };

    let unplaced = board
        .read()
        .items_in(Zone::Unplaced)
        .into_iter()
        .filter_map(|index| items.get(index).map(|item| item_node(index, &item.text)))
        .collect::<Vec<_>>();

    let zone_node = |zone: Zone, label: &'static str, hint: &'static str| {
        let contents = board
            .read()
            .items_in(zone)
            .into_iter()
            .filter_map(|index| items.get(index).map(|item| item_node(index, &item.text)))
            .collect::<Vec<_>>();
        rsx! {
            div {
                class: "drop-zone",
                tabindex: "0",
                aria_label: "{label}",
                ondragover: move |evt| evt.prevent_default(),
                ondrop: move |evt| {
                    evt.prevent_default();
                    let current = dragging();
                    dragging.set(None);
                    if let Some(index) = current {
                        place.call((index, zone));
                    }
                },
                onkeydown: move |evt| {
                    if evt.data().code() == Code::Enter {
                        evt.prevent_default();
                        if let Some(index) = grab.write().take() {
                            place.call((index, zone));
                        }
                    }
                },
                p { "{hint}" }
                ul { class: "drop-zone__items",
                    {contents.into_iter()}
                }
            }
        }
    };

    rsx! {
        div { class: "drag-drop-container",
            ul { class: "drag-list", aria_label: "Riktige og feil rutiner",
                {unplaced.into_iter()}
            }
            {zone_node(Zone::Correct, "Riktige rutiner", "Dra de riktige rutinene hit")}
            {zone_node(Zone::Incorrect, "Feil rutiner", "Dra de feil rutinene hit")}
        }
    }
}
