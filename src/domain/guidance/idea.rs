//! Phase-tagged ideas and the built-in fallback list.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::domain::cycle::Phase;

/// An advice suggestion for one phase, as returned to API callers.
///
/// Carries no storage identity or timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Idea {
    pub phase: Phase,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl Idea {
    pub fn new(phase: Phase, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            phase,
            title: title.into(),
            description: description.into(),
            tags: None,
        }
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = Some(tags);
        self
    }
}

/// One idea per phase, in phase order.
static FALLBACK_IDEAS: Lazy<Vec<Idea>> = Lazy::new(|| {
    vec![
        Idea::new(
            Phase::Period,
            "Comfort kit",
            "Heat pad, chocolate, tea, low-key movie night",
        ),
        Idea::new(
            Phase::Follicular,
            "Plan a fun date",
            "She may feel more energetic—try a new activity together",
        ),
        Idea::new(
            Phase::Ovulation,
            "Hype her up",
            "Compliments and quality time—she'll likely feel confident",
        ),
        Idea::new(
            Phase::Luteal,
            "Gentle support",
            "Be patient, offer snacks, suggest cozy plans",
        ),
    ]
});

/// Ideas served when the idea store cannot be queried.
pub fn fallback_ideas() -> Vec<Idea> {
    FALLBACK_IDEAS.clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_has_one_idea_per_phase_in_order() {
        let ideas = fallback_ideas();
        let phases: Vec<Phase> = ideas.iter().map(|i| i.phase).collect();
        assert_eq!(phases, Phase::ALL.to_vec());
    }

    #[test]
    fn fallback_entries_have_text() {
        for idea in fallback_ideas() {
            assert!(!idea.title.is_empty());
            assert!(!idea.description.is_empty());
        }
    }

    #[test]
    fn fallback_descriptions_match_service_wording() {
        let descriptions: Vec<String> = fallback_ideas().into_iter().map(|i| i.description).collect();
        assert_eq!(
            descriptions,
            vec![
                "Heat pad, chocolate, tea, low-key movie night",
                "She may feel more energetic—try a new activity together",
                "Compliments and quality time—she'll likely feel confident",
                "Be patient, offer snacks, suggest cozy plans",
            ]
        );
    }

    #[test]
    fn untagged_idea_omits_tags_field() {
        let json = serde_json::to_value(Idea::new(Phase::Luteal, "t", "d")).unwrap();
        assert!(json.get("tags").is_none());
        assert_eq!(json["phase"], "luteal");
    }

    #[test]
    fn tagged_idea_serializes_tags() {
        let idea = Idea::new(Phase::Period, "t", "d").with_tags(vec!["food".to_string()]);
        let json = serde_json::to_value(idea).unwrap();
        assert_eq!(json["tags"][0], "food");
    }
}
