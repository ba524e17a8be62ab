pub mod generation;
pub mod health;
pub mod presentations;
pub mod stats;
pub mod templates;
