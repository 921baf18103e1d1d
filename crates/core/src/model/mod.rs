mod ids;
mod progress;
mod settings;
mod task;
mod topic;

pub use ids::TopicId;

pub use progress::{AttemptRecord, UserProgress};
pub use settings::{Theme, TextSize, UserSettings};
pub use task::{
    ChoiceOption, ClassifyItem, ClozeSegment, MatchSlot, MatchTerm, OrderItem, Quiz, Task,
    cloze_segments,
};
pub use topic::{
    DialogueLine, ExternalLink, HeroImage, IconGridItem, MediaBlock, Topic, TopicError, VocabEntry,
};
