//! Aggregate statistics over the presentation registry.

use serde::{Deserialize, Serialize};

use crate::presentation::Presentation;

/// Derived counts and ratios over the registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresentationStats {
    pub total_presentations: usize,
    pub completed_presentations: usize,
    /// Every presentation that is not completed, drafts included.
    ///
    /// The name is historical; clients rely on the "total minus completed"
    /// semantics, so drafts are deliberately counted here.
    pub in_progress_presentations: usize,
    pub total_slides: u64,
    pub average_slides_per_presentation: f64,
    pub available_templates: usize,
}

/// Compute statistics over `presentations` in a single pass.
///
/// The average is `0.0` for an empty registry.
pub fn aggregate<'a, I>(presentations: I, available_templates: usize) -> PresentationStats
where
    I: IntoIterator<Item = &'a Presentation>,
{
    let mut total = 0usize;
    let mut completed = 0usize;
    let mut total_slides = 0u64;

    for p in presentations {
        total += 1;
        if p.is_completed() {
            completed += 1;
        }
        total_slides += u64::from(p.slides_count);
    }

    let average = if total == 0 {
        0.0
    } else {
        total_slides as f64 / total as f64
    };

    PresentationStats {
        total_presentations: total,
        completed_presentations: completed,
        in_progress_presentations: total - completed,
        total_slides,
        average_slides_per_presentation: average,
        available_templates,
    }
}
