use tema_core::model::Task;

/// Authored topic text and icons may carry markup; everything is cleaned
/// before it reaches `dangerous_inner_html`.
#[must_use]
pub fn sanitize_html(raw: &str) -> String {
    ammonia::clean(raw)
}

/// Header data for one task card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TaskCardVm {
    pub index: usize,
    /// "Oppgave <n>: <kind>" heading.
    pub heading: String,
    pub question: String,
}

#[must_use]
pub fn map_task_card(index: usize, task: &Task) -> TaskCardVm {
    TaskCardVm {
        index,
        heading: format!("Oppgave {}: {}", index + 1, task.kind_label()),
        question: task.question().to_string(),
    }
}
