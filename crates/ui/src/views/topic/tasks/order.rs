use std::collections::HashMap;
use std::rc::Rc;

use dioxus::html::MountedData;
use dioxus::html::input_data::keyboard_types::Code;
use dioxus::prelude::*;

use tema_core::TaskAnswer;
use tema_core::model::OrderItem;
use tema_core::placement::{GrabState, OrderBoard, insertion_index};

/// Reorderable step list.
///
/// While a drag is in flight the dragged item is continuously reinserted
/// before the nearest sibling below the pointer, using the live midpoints
/// of the mounted rows. Keyboard users grab a row with Space and place it
/// before another row with Enter.
#[component]
pub fn OrderTask(items: Vec<OrderItem>, answer: Signal<TaskAnswer>) -> Element {
    let labels: Vec<String> = items.iter().map(|item| item.text.clone()).collect();
    let board = use_signal(move || OrderBoard::new(labels.clone()));
    let mut dragging = use_signal(|| None::<usize>);
    let mut grab = use_signal(GrabState::<usize>::new);
    let mut mounts = use_signal(HashMap::<usize, Rc<MountedData>>::new);

    let apply_move = use_callback(move |(item, before): (usize, Option<usize>)| {
        let mut board = board;
        let mut answer = answer;
        board.write().move_before(item, before);
        answer.set(board.read().answer());
    });

    let on_list_dragover = move |evt: DragEvent| {
        evt.prevent_default();
        let Some(dragged) = dragging() else {
            return;
        };
        let pointer_y = evt.client_coordinates().y;
        let candidates: Vec<(usize, Rc<MountedData>)> = board
            .read()
            .entries()
            .iter()
            .filter(|entry| entry.handle != dragged)
            .filter_map(|entry| {
                mounts
                    .read()
                    .get(&entry.handle)
                    .map(|mounted| (entry.handle, Rc::clone(mounted)))
            })
            .collect();
        spawn(async move {
            let mut handles = Vec::with_capacity(candidates.len());
            let mut midpoints = Vec::with_capacity(candidates.len());
            for (handle, mounted) in candidates {
                if let Ok(rect) = mounted.get_client_rect().await {
                    handles.push(handle);
                    midpoints.push(rect.origin.y + rect.size.height / 2.0);
                }
            }
            let before = insertion_index(pointer_y, &midpoints).map(|index| handles[index]);
            apply_move.call((dragged, before));
        });
    };

    let rows = board
        .read()
        .entries()
        .iter()
        .map(|entry| {
            let handle = entry.handle;
            let label = entry.label.clone();
            let is_dragging = dragging() == Some(handle);
            let grabbed = grab.read().is_grabbed(handle);
            let class = match (is_dragging, grabbed) {
                (true, _) => "sortable-item dragging",
                (false, true) => "sortable-item sortable-item--grabbed",
                (false, false) => "sortable-item",
            };
            rsx! {
                li {
                    key: "{handle}",
                    class: "{class}",
                    role: "option",
                    tabindex: "0",
                    draggable: "true",
                    aria_grabbed: "{grabbed}",
                    onmounted: move |evt| {
                        mounts.write().insert(handle, evt.data());
                    },
                    ondragstart: move |_| dragging.set(Some(handle)),
                    ondragend: move |_| dragging.set(None),
                    onkeydown: move |evt| match evt.data().code() {
                        Code::Space => {
                            evt.prevent_default();
                            grab.write().toggle(handle);
                        }
                        Code::Enter => {
                            evt.prevent_default();
                            if let Some(item) = grab.write().take() {
                                if item != handle {
                                    apply_move.call((item, Some(handle)));
                                }
                            }
                        }
                        _ => {}
                    },
                    "{label}"
                }
            }
        })
        .collect::<Vec<_>>();

    rsx! {
        ul {
            class: "sortable-list",
            role: "listbox",
            aria_label: "Trinn i rekkefølge",
            ondragover: on_list_dragover,
            ondrop: move |evt| {
                evt.prevent_default();
                dragging.set(None);
            },
            {rows.into_iter()}
        }
    }
}
