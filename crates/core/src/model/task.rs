use serde::{Deserialize, Serialize};

use crate::model::ids::{TopicId, string_or_number};

/// One graded exercise within a topic's quiz.
///
/// Closed tagged union over the content document's `type` field. The wire
/// names are the Norwegian labels used by the authoring format; each kind
/// carries exactly the definition its evaluator needs.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(tag = "type")]
pub enum Task {
    #[serde(rename = "Leseforståelse")]
    Comprehension {
        question: String,
        options: Vec<ChoiceOption>,
    },

    #[serde(rename = "Match begrep-forklaring")]
    Match {
        question: String,
        terms: Vec<MatchTerm>,
        explanations: Vec<MatchSlot>,
    },

    #[serde(rename = "Sorter rekkefølge")]
    #[serde(rename_all = "camelCase")]
    Order {
        question: String,
        items: Vec<OrderItem>,
        correct_order: Vec<OrderItem>,
    },

    #[serde(rename = "Fyll-inn-tomrom")]
    #[serde(rename_all = "camelCase")]
    Cloze {
        question: String,
        sentence: String,
        correct_answers: Vec<String>,
        #[serde(default)]
        word_bank: Option<Vec<String>>,
    },

    #[serde(rename = "Dra-og-slipp")]
    ClassifyDrag {
        question: String,
        items: Vec<ClassifyItem>,
    },
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChoiceOption {
    pub text: String,
    pub value: String,
    #[serde(default)]
    pub is_correct: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct MatchTerm {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct MatchSlot {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct OrderItem {
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifyItem {
    pub text: String,
    #[serde(default)]
    pub is_correct: bool,
}

/// One quiz per topic, matched to its topic by string id equality.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    pub topic_id: TopicId,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl Task {
    #[must_use]
    pub fn question(&self) -> &str {
        match self {
            Task::Comprehension { question, .. }
            | Task::Match { question, .. }
            | Task::Order { question, .. }
            | Task::Cloze { question, .. }
            | Task::ClassifyDrag { question, .. } => question,
        }
    }

    /// The Norwegian kind label, as shown in each task card heading.
    #[must_use]
    pub fn kind_label(&self) -> &'static str {
        match self {
            Task::Comprehension { .. } => "Leseforståelse",
            Task::Match { .. } => "Match begrep-forklaring",
            Task::Order { .. } => "Sorter rekkefølge",
            Task::Cloze { .. } => "Fyll-inn-tomrom",
            Task::ClassifyDrag { .. } => "Dra-og-slipp",
        }
    }

    /// Renders the reveal ("fasit") text for this task.
    ///
    /// Read-only with respect to progress: revealing a solution never
    /// changes scores or attempt counters.
    #[must_use]
    pub fn solution_text(&self) -> String {
        match self {
            Task::Comprehension { options, .. } => options
                .iter()
                .find(|option| option.is_correct)
                .map(|option| option.text.clone())
                .unwrap_or_default(),
            Task::Match {
                terms,
                explanations,
                ..
            } => terms
                .iter()
                .filter_map(|term| {
                    explanations
                        .iter()
                        .find(|slot| slot.id == term.id)
                        .map(|slot| format!("{} = {}", term.text, slot.text))
                })
                .collect::<Vec<_>>()
                .join(", "),
            Task::Order { correct_order, .. } => correct_order
                .iter()
                .map(|item| item.text.as_str())
                .collect::<Vec<_>>()
                .join(" -> "),
            Task::Cloze {
                correct_answers, ..
            } => correct_answers.join(", "),
            Task::ClassifyDrag { items, .. } => {
                let correct = items
                    .iter()
                    .filter(|item| item.is_correct)
                    .map(|item| item.text.as_str())
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("Riktige rutiner er: {correct}")
            }
        }
    }
}

/// Marker used in cloze sentences for a fill-in blank.
pub const BLANK_MARKER: &str = "[_]";

/// A run of a cloze sentence: literal text, or a blank the user fills.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClozeSegment {
    Text(String),
    Blank,
}

/// Splits a cloze sentence on `[_]` markers.
///
/// The number of `Blank` segments drives how many inputs the task renders,
/// and positions line up with `correct_answers`.
#[must_use]
pub fn cloze_segments(sentence: &str) -> Vec<ClozeSegment> {
    let mut segments = Vec::new();
    let mut rest = sentence;
    while let Some(at) = rest.find(BLANK_MARKER) {
        if at > 0 {
            segments.push(ClozeSegment::Text(rest[..at].to_string()));
        }
        segments.push(ClozeSegment::Blank);
        rest = &rest[at + BLANK_MARKER.len()..];
    }
    if !rest.is_empty() {
        segments.push(ClozeSegment::Text(rest.to_string()));
    }
    segments
}

// ─── Tests ─────────────────────────────────────────────────────────────────────
