mod home;
mod state;
mod toolbar;
mod topic;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use home::HomeView;
pub use state::{ViewError, ViewState, view_state_from_resource};
pub use toolbar::Toolbar;
pub use topic::TopicView;
