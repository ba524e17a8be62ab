use serde::{Deserialize, Serialize};

use crate::types::EntityId;

/// A named slide-deck structure. Templates are seeded at startup and never
/// change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    pub id: EntityId,
    pub name: String,
    pub description: String,
    pub category: String,
    /// Slide kinds in presentation order, e.g. `title`, `agenda`.
    pub slides_included: Vec<String>,
}
