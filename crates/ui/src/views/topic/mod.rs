mod quiz;
mod tasks;
mod topic;

pub use topic::TopicView;
