//! Fixture data loaded into a fresh registry at process start.

use chrono::{TimeZone, Utc};

use crate::presentation::{Presentation, PresentationContent, PresentationStatus};
use crate::template::Template;
use crate::types::Timestamp;

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Timestamp {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .expect("fixture timestamps are valid calendar dates")
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[allow(clippy::too_many_arguments)]
fn presentation(
    id: &str,
    title: &str,
    author: &str,
    created_at: Timestamp,
    slides_count: u32,
    status: PresentationStatus,
    summary: &str,
    key_topics: &[&str],
    audience: &str,
) -> Presentation {
    Presentation {
        id: id.to_string(),
        title: title.to_string(),
        author: author.to_string(),
        created_at,
        slides_count,
        status,
        content: PresentationContent {
            summary: summary.to_string(),
            key_topics: strings(key_topics),
            audience: audience.to_string(),
        },
        template_id: None,
    }
}

fn template(id: &str, name: &str, description: &str, category: &str, slides: &[&str]) -> Template {
    Template {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        category: category.to_string(),
        slides_included: strings(slides),
    }
}

/// The three presentations every process starts with.
pub fn presentations() -> Vec<Presentation> {
    vec![
        presentation(
            "ppt_001",
            "AI in Healthcare",
            "Dr. Jane Smith",
            at(2024, 1, 15, 10, 30),
            25,
            PresentationStatus::Completed,
            "Comprehensive overview of AI applications in healthcare",
            &["Machine Learning", "Medical Imaging", "Drug Discovery"],
            "Healthcare professionals",
        ),
        presentation(
            "ppt_002",
            "Future of Transportation",
            "John Doe",
            at(2024, 2, 20, 14, 15),
            18,
            PresentationStatus::InProgress,
            "Exploring autonomous vehicles and smart city infrastructure",
            &["Autonomous Vehicles", "Smart Infrastructure", "Sustainability"],
            "Urban planners and engineers",
        ),
        presentation(
            "ppt_003",
            "Climate Change Solutions",
            "Dr. Emily Green",
            at(2024, 3, 10, 9, 45),
            32,
            PresentationStatus::Completed,
            "Innovative approaches to combat climate change",
            &["Renewable Energy", "Carbon Capture", "Policy Changes"],
            "Environmental scientists and policymakers",
        ),
    ]
}

/// The built-in template catalogue.
pub fn templates() -> Vec<Template> {
    vec![
        template(
            "template_001",
            "Corporate Presentation",
            "Professional corporate presentation template",
            "business",
            &["title", "agenda", "content", "charts", "conclusion"],
        ),
        template(
            "template_002",
            "Academic Research",
            "Template for academic research presentations",
            "academic",
            &["title", "abstract", "methodology", "results", "references"],
        ),
        template(
            "template_003",
            "Startup Pitch",
            "Template for startup pitch presentations",
            "startup",
            &["problem", "solution", "market", "business_model", "team"],
        ),
    ]
}
