//! Presentation records and creation DTOs.

use serde::{Deserialize, Serialize};

use crate::types::{EntityId, Timestamp};

/// Summary line given to every newly created presentation.
const NEW_SUMMARY_PREFIX: &str = "New presentation: ";

/// Audience assigned to newly created presentations.
pub const DEFAULT_AUDIENCE: &str = "General audience";

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

/// Lifecycle state of a presentation.
///
/// New presentations always start as [`PresentationStatus::Draft`]; no
/// transition operations are exposed, so seeded records keep whatever state
/// they were seeded with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PresentationStatus {
    Draft,
    InProgress,
    Completed,
}

impl PresentationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
        }
    }
}

impl std::fmt::Display for PresentationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Entity
// ---------------------------------------------------------------------------

/// Descriptive content attached to a presentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresentationContent {
    pub summary: String,
    pub key_topics: Vec<String>,
    pub audience: String,
}

/// A slide-deck metadata record tracked by the registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Presentation {
    pub id: EntityId,
    pub title: String,
    pub author: String,
    pub created_at: Timestamp,
    pub slides_count: u32,
    pub status: PresentationStatus,
    pub content: PresentationContent,
    /// Template the presentation was started from.
    ///
    /// This is a loose reference: it is stored as given and never checked
    /// against the template collection.
    #[serde(default)]
    pub template_id: Option<EntityId>,
}

impl Presentation {
    /// Build the record for a freshly created presentation.
    pub fn draft(id: EntityId, input: NewPresentation, created_at: Timestamp) -> Self {
        let summary = format!("{NEW_SUMMARY_PREFIX}{}", input.title);
        Self {
            id,
            title: input.title,
            author: input.author,
            created_at,
            slides_count: 0,
            status: PresentationStatus::Draft,
            content: PresentationContent {
                summary,
                key_topics: Vec::new(),
                audience: DEFAULT_AUDIENCE.to_string(),
            },
            template_id: input.template_id,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.status == PresentationStatus::Completed
    }
}

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

/// DTO for creating a new presentation.
#[derive(Debug, Clone, Deserialize)]
pub struct NewPresentation {
    pub title: String,
    pub author: String,
    #[serde(default)]
    pub template_id: Option<EntityId>,
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    use super::*;

    fn input(template_id: Option<&str>) -> NewPresentation {
        NewPresentation {
            title: "Quarterly Review".into(),
            author: "Ada".into(),
            template_id: template_id.map(str::to_string),
        }
    }

    #[test]
    fn draft_fills_creation_defaults() {
        let at = Utc.with_ymd_and_hms(2025, 5, 1, 12, 0, 0).unwrap();
        let p = Presentation::draft("ppt_004".into(), input(Some("template_002")), at);

        assert_eq!(p.id, "ppt_004");
        assert_eq!(p.created_at, at);
        assert_eq!(p.slides_count, 0);
        assert_eq!(p.status, PresentationStatus::Draft);
        assert_eq!(p.content.summary, "New presentation: Quarterly Review");
        assert!(p.content.key_topics.is_empty());
        assert_eq!(p.content.audience, "General audience");
        assert_eq!(p.template_id.as_deref(), Some("template_002"));
    }

    #[test]
    fn status_serializes_snake_case() {
        assert_eq!(
            serde_json::to_value(PresentationStatus::InProgress).unwrap(),
            json!("in_progress")
        );
        assert_eq!(PresentationStatus::Completed.to_string(), "completed");
    }

    #[test]
    fn unknown_status_is_rejected() {
        let parsed = serde_json::from_value::<PresentationStatus>(json!("archived"));
        assert!(parsed.is_err());
    }

    #[test]
    fn missing_template_id_serializes_as_null() {
        let at = Utc.with_ymd_and_hms(2025, 5, 1, 12, 0, 0).unwrap();
        let p = Presentation::draft("ppt_004".into(), input(None), at);
        let value = serde_json::to_value(&p).unwrap();

        assert_eq!(value["template_id"], serde_json::Value::Null);
        assert_eq!(value["status"], "draft");
        assert_eq!(value["created_at"], "2025-05-01T12:00:00Z");
    }

    #[test]
    fn new_presentation_template_id_is_optional() {
        let dto: NewPresentation =
            serde_json::from_value(json!({"title": "T", "author": "A"})).unwrap();
        assert!(dto.template_id.is_none());
    }
}
