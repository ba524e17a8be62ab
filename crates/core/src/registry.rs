//! In-memory registry of presentations and templates.
//!
//! The registry is the single owner of both collections. Readers receive
//! cloned snapshots, so nothing handed out can alias stored state. All
//! mutation happens under one write lock: allocating an id and appending the
//! record form a single critical section.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use indexmap::IndexMap;

use crate::error::{CoreError, CoreResult};
use crate::ids::{IdAllocator, PRESENTATION_ID_PREFIX};
use crate::presentation::{NewPresentation, Presentation};
use crate::seed;
use crate::stats::{self, PresentationStats};
use crate::template::Template;
use crate::types::{EntityId, Timestamp};

const PRESENTATION: &str = "Presentation";
const TEMPLATE: &str = "Template";

#[derive(Debug, Default)]
struct Collections {
    presentations: IndexMap<EntityId, Presentation>,
    templates: IndexMap<EntityId, Template>,
}

/// Owner of the presentation and template collections.
///
/// Thread-safe via interior `RwLock`; designed to be wrapped in `Arc` and
/// shared across request handlers.
#[derive(Debug)]
pub struct Registry {
    inner: RwLock<Collections>,
    presentation_ids: IdAllocator,
}

impl Registry {
    /// Registry holding the startup fixture (3 presentations, 3 templates).
    pub fn seeded() -> Self {
        Self::from_parts(seed::presentations(), seed::templates())
            .expect("seed fixture ids are unique")
    }

    /// Registry with no presentations and no templates.
    pub fn empty() -> Self {
        Self {
            inner: RwLock::new(Collections::default()),
            presentation_ids: IdAllocator::new(PRESENTATION_ID_PREFIX),
        }
    }

    /// Build a registry from pre-existing records, preserving their order.
    ///
    /// Fails with [`CoreError::Validation`] if either collection repeats an
    /// id. The presentation id counter is advanced past every `ppt_NNN` id
    /// already present.
    pub fn from_parts(
        presentations: Vec<Presentation>,
        templates: Vec<Template>,
    ) -> CoreResult<Self> {
        let presentation_ids = IdAllocator::new(PRESENTATION_ID_PREFIX);
        let mut collections = Collections::default();

        for p in presentations {
            presentation_ids.observe(&p.id);
            if let Some(dup) = collections.presentations.insert(p.id.clone(), p) {
                return Err(CoreError::Validation(format!(
                    "duplicate presentation id {}",
                    dup.id
                )));
            }
        }

        for t in templates {
            if let Some(dup) = collections.templates.insert(t.id.clone(), t) {
                return Err(CoreError::Validation(format!(
                    "duplicate template id {}",
                    dup.id
                )));
            }
        }

        Ok(Self {
            inner: RwLock::new(collections),
            presentation_ids,
        })
    }

    fn read(&self) -> CoreResult<RwLockReadGuard<'_, Collections>> {
        self.inner
            .read()
            .map_err(|_| CoreError::Internal("registry lock poisoned".into()))
    }

    fn write(&self) -> CoreResult<RwLockWriteGuard<'_, Collections>> {
        self.inner
            .write()
            .map_err(|_| CoreError::Internal("registry lock poisoned".into()))
    }

    // -----------------------------------------------------------------------
    // Presentations
    // -----------------------------------------------------------------------

    /// All presentations in insertion order.
    pub fn list_presentations(&self) -> CoreResult<Vec<Presentation>> {
        Ok(self.read()?.presentations.values().cloned().collect())
    }

    /// Look up a presentation by id.
    pub fn get_presentation(&self, id: &str) -> CoreResult<Presentation> {
        self.read()?
            .presentations
            .get(id)
            .cloned()
            .ok_or_else(|| CoreError::NotFound {
                entity: PRESENTATION,
                id: id.to_string(),
            })
    }

    /// Create a draft presentation stamped with the current time.
    pub fn create_presentation(&self, input: NewPresentation) -> CoreResult<Presentation> {
        self.create_presentation_at(input, chrono::Utc::now())
    }

    /// Create a draft presentation with an explicit creation time.
    ///
    /// `template_id` is stored as given; it is not checked against the
    /// template collection.
    pub fn create_presentation_at(
        &self,
        input: NewPresentation,
        created_at: Timestamp,
    ) -> CoreResult<Presentation> {
        let mut collections = self.write()?;

        let id = self.presentation_ids.next_id();
        if collections.presentations.contains_key(&id) {
            return Err(CoreError::Internal(format!(
                "allocated presentation id {id} is already taken"
            )));
        }

        let presentation = Presentation::draft(id.clone(), input, created_at);
        collections.presentations.insert(id, presentation.clone());

        Ok(presentation)
    }

    pub fn presentation_count(&self) -> CoreResult<usize> {
        Ok(self.read()?.presentations.len())
    }

    // -----------------------------------------------------------------------
    // Templates
    // -----------------------------------------------------------------------

    /// All templates in insertion order.
    pub fn list_templates(&self) -> CoreResult<Vec<Template>> {
        Ok(self.read()?.templates.values().cloned().collect())
    }

    /// Look up a template by id.
    pub fn get_template(&self, id: &str) -> CoreResult<Template> {
        self.read()?
            .templates
            .get(id)
            .cloned()
            .ok_or_else(|| CoreError::NotFound {
                entity: TEMPLATE,
                id: id.to_string(),
            })
    }

    pub fn template_count(&self) -> CoreResult<usize> {
        Ok(self.read()?.templates.len())
    }

    // -----------------------------------------------------------------------
    // Statistics
    // -----------------------------------------------------------------------

    /// Aggregate statistics computed under a single read lock.
    pub fn stats(&self) -> CoreResult<PresentationStats> {
        let collections = self.read()?;
        Ok(stats::aggregate(
            collections.presentations.values(),
            collections.templates.len(),
        ))
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::seeded()
    }
}
