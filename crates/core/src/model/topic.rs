use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use crate::model::ids::TopicId;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TopicError {
    #[error("external link href is not a valid URL")]
    InvalidHref,

    #[error("external link title cannot be empty")]
    EmptyLinkTitle,
}

/// A content unit (lesson) with associated vocabulary and grammar notes.
///
/// Topics are immutable once loaded; all fields come straight from the
/// content document. Collections default to empty so partially authored
/// topics still load.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Topic {
    pub id: TopicId,
    pub title: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub hero: Option<HeroImage>,
    #[serde(default)]
    pub dialogues: Vec<DialogueLine>,
    #[serde(default)]
    pub grammar: Vec<String>,
    #[serde(default)]
    pub vocabulary: Vec<VocabEntry>,
    #[serde(default)]
    pub media_blocks: Vec<MediaBlock>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct HeroImage {
    pub src: String,
    #[serde(default)]
    pub alt: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct DialogueLine {
    pub speaker: String,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct VocabEntry {
    pub word: String,
    pub explanation: String,
}

/// Supplementary media attached to a topic body.
///
/// Closed over the block `type` tag; unrecognized types deserialize to
/// `Unknown` and are skipped at render time rather than failing the load.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum MediaBlock {
    Poster {
        #[serde(default)]
        title: String,
        image: String,
        #[serde(default)]
        alt: String,
        #[serde(default)]
        caption: Option<String>,
    },
    IconGrid {
        #[serde(default)]
        title: String,
        #[serde(default)]
        intro: Option<String>,
        #[serde(default)]
        items: Vec<IconGridItem>,
    },
    #[serde(other)]
    Unknown,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct IconGridItem {
    pub icon: String,
    pub title: String,
    pub desc: String,
}

/// An outbound resource card shown on the home page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExternalLink {
    title: String,
    description: String,
    href: Url,
    cta: String,
}

impl ExternalLink {
    /// Creates a validated external link.
    ///
    /// # Errors
    ///
    /// Returns `TopicError::InvalidHref` if `href` does not parse as an
    /// absolute URL, or `TopicError::EmptyLinkTitle` for a blank title.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        href: &str,
        cta: impl Into<String>,
    ) -> Result<Self, TopicError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(TopicError::EmptyLinkTitle);
        }
        let href = Url::parse(href).map_err(|_| TopicError::InvalidHref)?;
        Ok(Self {
            title,
            description: description.into(),
            href,
            cta: cta.into(),
        })
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn href(&self) -> &str {
        self.href.as_str()
    }

    #[must_use]
    pub fn cta(&self) -> &str {
        &self.cta
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────
