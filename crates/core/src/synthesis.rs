//! Synthetic slide content.
//!
//! Produces placeholder slide text for a topic using fixed string templates.
//! The output depends only on the topic; the slide kind is echoed back
//! untouched and does not influence the generated fields.

use serde::{Deserialize, Serialize};

use crate::types::Timestamp;

/// Slide kind used when the caller does not name one.
pub const DEFAULT_SLIDE_KIND: &str = "content";

/// Generated body of a slide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideContent {
    pub bullet_points: Vec<String>,
    pub notes: String,
    pub suggested_images: Vec<String>,
}

/// A synthesized slide for a topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedSlide {
    pub slide_type: String,
    pub topic: String,
    pub title: String,
    pub content: SlideContent,
    pub generated_at: Timestamp,
}

/// Synthesize a slide for `topic`, stamped with the current time.
pub fn synthesize(topic: &str, slide_kind: &str) -> GeneratedSlide {
    synthesize_at(topic, slide_kind, chrono::Utc::now())
}

/// Synthesize a slide for `topic` with an explicit generation time.
///
/// ```
/// use chrono::Utc;
/// use deckgate_core::synthesis::synthesize_at;
///
/// let slide = synthesize_at("machine learning", "content", Utc::now());
/// assert_eq!(slide.title, "Machine Learning Overview");
/// assert_eq!(slide.content.suggested_images[0], "chart_related_to_machine_learning");
/// ```
pub fn synthesize_at(topic: &str, slide_kind: &str, generated_at: Timestamp) -> GeneratedSlide {
    let slug = image_slug(topic);

    GeneratedSlide {
        slide_type: slide_kind.to_string(),
        topic: topic.to_string(),
        title: format!("{} Overview", title_case(topic)),
        content: SlideContent {
            bullet_points: vec![
                format!("Key insight about {topic}"),
                format!("Important aspect of {topic}"),
                format!("Future implications of {topic}"),
            ],
            notes: format!("Speaker notes for {topic} slide"),
            suggested_images: vec![
                format!("chart_related_to_{slug}"),
                format!("diagram_showing_{slug}"),
            ],
        },
        generated_at,
    }
}

/// Upper-case the first letter of every alphabetic run and lower-case the rest.
///
/// Any non-alphabetic character (space, digit, punctuation) starts a new run,
/// so `"ai-driven 3d"` becomes `"Ai-Driven 3D"`.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_word = false;

    for ch in text.chars() {
        if ch.is_alphabetic() {
            if in_word {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(ch);
            in_word = false;
        }
    }

    out
}

/// Lower-case `topic` and replace each space with an underscore.
///
/// Spaces are not collapsed: `"Deep  Learning"` maps to `"deep__learning"`.
pub fn image_slug(topic: &str) -> String {
    topic.to_lowercase().replace(' ', "_")
}
