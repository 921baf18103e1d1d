mod home_vm;
mod topic_vm;

pub use home_vm::{TopicLinkVm, highlight_links, map_topic_links, overall_progress_percent};
pub use topic_vm::{TaskCardVm, map_task_card, sanitize_html};
