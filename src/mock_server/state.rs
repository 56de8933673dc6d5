//! Mock server state management.
//!
//! Provides the in-memory species store for the mock catalog server.

use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Shared state for the mock server.
///
/// Species names indexed by id. It's wrapped in `Arc<RwLock<_>>` for
/// concurrent access.
#[derive(Debug, Default)]
pub struct MockState {
    /// Species names indexed by national dex number.
    pub species: BTreeMap<u32, String>,
}

impl MockState {
    /// Create a new empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create state wrapped in Arc<RwLock> for sharing.
    pub fn shared(self) -> Arc<RwLock<Self>> {
        Arc::new(RwLock::new(self))
    }

    /// Add a species to the state.
    pub fn with_species(mut self, id: u32, name: &str) -> Self {
        self.insert_species(id, name);
        self
    }

    /// Insert a species, returning false if the id was already taken.
    pub fn insert_species(&mut self, id: u32, name: &str) -> bool {
        if self.species.contains_key(&id) {
            return false;
        }
        self.species.insert(id, name.to_string());
        true
    }

    /// Rename an existing species, returning false if it does not exist.
    pub fn rename_species(&mut self, id: u32, name: &str) -> bool {
        match self.species.get_mut(&id) {
            Some(existing) => {
                *existing = name.to_string();
                true
            }
            None => false,
        }
    }

    /// Remove a species and return its name.
    pub fn remove_species(&mut self, id: u32) -> Option<String> {
        self.species.remove(&id)
    }

    /// Get a species name by id.
    pub fn get_species(&self, id: u32) -> Option<&str> {
        self.species.get(&id).map(String::as_str)
    }

    /// Number of species stored.
    pub fn count(&self) -> usize {
        self.species.len()
    }

    /// Species in id order, skipping `offset` and returning at most `limit`.
    pub fn list(&self, offset: usize, limit: usize) -> Vec<(u32, &str)> {
        self.species
            .iter()
            .skip(offset)
            .take(limit)
            .map(|(id, name)| (*id, name.as_str()))
            .collect()
    }
}
