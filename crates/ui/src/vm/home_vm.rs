use services::ContentLibrary;
use tema_core::model::{ExternalLink, UserProgress};

/// One entry in the home page topic list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TopicLinkVm {
    /// 1-based route position.
    pub position: usize,
    /// "Tema <id>" label.
    pub label: String,
    pub title: String,
    pub completed: bool,
}

#[must_use]
pub fn map_topic_links(content: &ContentLibrary, progress: &UserProgress) -> Vec<TopicLinkVm> {
    content
        .topics()
        .iter()
        .enumerate()
        .map(|(index, topic)| TopicLinkVm {
            position: index + 1,
            label: format!("Tema {}", topic.id),
            title: topic.title.clone(),
            completed: progress.is_completed(&topic.id),
        })
        .collect()
}

/// Completed-topics share for the home progress bar, 0–100.
#[must_use]
pub fn overall_progress_percent(completed: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    completed as f64 / total as f64 * 100.0
}

/// The outbound resource cards on the home page.
///
/// Static content; links that fail validation are dropped rather than
/// rendered broken.
#[must_use]
pub fn highlight_links() -> Vec<ExternalLink> {
    [
        ExternalLink::new(
            "Energieffektive løsninger",
            "Utforsk hvordan vi reduserer energiforbruket gjennom lysstyring, sensorer og rådgivning.",
            "https://www.glamox.com/no/pbs/energibesparelse/",
            "Se energitiltakene",
        ),
        ExternalLink::new(
            "Bærekraft i fokus",
            "Les om satsningen vår på miljø, ansvarlige materialvalg og sirkulær økonomi i produksjonen.",
            "https://www.glamox.com/no/pbs/baerekraft/",
            "Les om bærekraft",
        ),
        ExternalLink::new(
            "Ressurssenter",
            "Finn guider, webinarer og referanser som holder deg oppdatert på fag og produkter.",
            "https://www.glamox.com/no/pbs/kunnskapssenter/",
            "Åpne ressurssenteret",
        ),
    ]
    .into_iter()
    .filter_map(Result::ok)
    .collect()
}

// ─── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use tema_core::model::{AttemptRecord, TopicId};
    use tema_core::time::fixed_now;

    fn library() -> ContentLibrary {
        ContentLibrary::new(
            vec![
                serde_json::from_str(r#"{"id": 1, "title": "HMS"}"#).unwrap(),
                serde_json::from_str(r#"{"id": 2, "title": "Montasje"}"#).unwrap(),
            ],
            Vec::new(),
        )
    }

    #[test]
    fn topic_links_carry_position_and_completion() {
        let mut progress = UserProgress::new();
        let mut record = AttemptRecord::for_task_count(1);
        record.record_success(0);
        record.refresh_completion(fixed_now());
        progress.insert(&TopicId::new("2"), record);

        let links = map_topic_links(&library(), &progress);
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].position, 1);
        assert_eq!(links[0].label, "Tema 1");
        assert!(!links[0].completed);
        assert!(links[1].completed);
    }

    #[test]
    fn progress_percent_handles_empty_content() {
        assert!((overall_progress_percent(0, 0) - 0.0).abs() < f64::EPSILON);
        assert!((overall_progress_percent(1, 2) - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn highlight_links_are_all_valid() {
        assert_eq!(highlight_links().len(), 3);
    }
}
