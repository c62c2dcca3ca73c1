// File: src/store.rs
use crate::model::ScheduleEntry;
use thiserror::Error;

/// Stable, index-based reference to one entry in the store.
///
/// Toggle events address entries through this key instead of holding a
/// reference to the entry itself, so UI callbacks never alias store state.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct EntryKey {
    pub source: usize,
    pub entry: usize,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("source '{0}' is already registered")]
    DuplicateSource(String),
}

/// All entries parsed from one image, in parse order.
#[derive(Debug, Clone)]
pub struct Source {
    pub label: String,
    pub entries: Vec<ScheduleEntry>,
}

/// Owns every parsed entry for the lifetime of the session, grouped per
/// source image in registration order. Single-threaded: driven only by the
/// UI event loop.
#[derive(Debug, Clone, Default)]
pub struct ScheduleStore {
    sources: Vec<Source>,
}

impl ScheduleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new source and its parsed entries.
    ///
    /// Labels must be unique; a reused label fails without mutating the
    /// store. Callers are expected to validate titles at input time, so this
    /// firing means a configuration error upstream.
    pub fn ingest(
        &mut self,
        label: &str,
        entries: Vec<ScheduleEntry>,
    ) -> Result<(), StoreError> {
        if self.sources.iter().any(|s| s.label == label) {
            return Err(StoreError::DuplicateSource(label.to_string()));
        }
        self.sources.push(Source {
            label: label.to_string(),
            entries,
        });
        Ok(())
    }

    pub fn sources(&self) -> &[Source] {
        &self.sources
    }

    pub fn get(&self, key: EntryKey) -> Option<&ScheduleEntry> {
        self.sources.get(key.source)?.entries.get(key.entry)
    }

    /// Flips the active flag of exactly one entry. Returns the new state,
    /// or `None` for a dangling key.
    pub fn toggle(&mut self, key: EntryKey) -> Option<bool> {
        let entry = self
            .sources
            .get_mut(key.source)?
            .entries
            .get_mut(key.entry)?;
        entry.active = !entry.active;
        Some(entry.active)
    }

    pub fn is_active(&self, key: EntryKey) -> bool {
        self.get(key).is_some_and(|e| e.active)
    }

    /// Every active entry across all sources, in stable order: source
    /// registration order, then within-source parse order. This is the
    /// layout engine's input.
    pub fn active_entries(&self) -> Vec<&ScheduleEntry> {
        self.sources
            .iter()
            .flat_map(|s| s.entries.iter())
            .filter(|e| e.active)
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}
