//! Domain core for the Deckgate presentation service.
//!
//! Holds the in-memory registry of presentations and templates together with
//! the pure operations layered on top of it (id allocation, synthetic slide
//! generation, statistics). Nothing in here knows about HTTP.

pub mod error;
pub mod ids;
pub mod presentation;
pub mod registry;
pub mod seed;
pub mod stats;
pub mod synthesis;
pub mod template;
pub mod types;
