//! Load-once directory cache state.

use std::collections::HashMap;

use sd_model::DirectoryEntry;
use uuid::Uuid;

/// In-memory state of the two directory mappings.
///
/// Populated at most once. A load attempt marks the cache loaded before
/// any query runs, so a failed attempt is not retried and the cache keeps
/// whatever partial state the attempt reached.
#[derive(Debug, Default)]
pub(crate) struct DirectoryCache {
    users: HashMap<Uuid, String>,
    groups: HashMap<Uuid, String>,
    loaded: bool,
}

impl DirectoryCache {
    pub(crate) const fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub(crate) fn mark_loaded(&mut self) {
        self.loaded = true;
    }

    pub(crate) fn fill_users(&mut self, entries: Vec<DirectoryEntry>) {
        self.users = entries.into_iter().map(|e| (e.id, e.name)).collect();
    }

    pub(crate) fn fill_groups(&mut self, entries: Vec<DirectoryEntry>) {
        self.groups = entries.into_iter().map(|e| (e.id, e.name)).collect();
    }

    pub(crate) fn user_name(&self, id: Uuid) -> Option<&str> {
        self.users.get(&id).map(String::as_str)
    }

    pub(crate) fn group_name(&self, id: Uuid) -> Option<&str> {
        self.groups.get(&id).map(String::as_str)
    }

    pub(crate) fn len(&self) -> (usize, usize) {
        (self.users.len(), self.groups.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_replaces_rather_than_extends() {
        let mut cache = DirectoryCache::default();
        let first = Uuid::new_v4();
        let second = Uuid::new_v4();

        cache.fill_users(vec![DirectoryEntry::new(first, "Alice")]);
        cache.fill_users(vec![DirectoryEntry::new(second, "Bob")]);

        assert_eq!(cache.user_name(first), None);
        assert_eq!(cache.user_name(second), Some("Bob"));
    }

    #[test]
    fn loaded_flag_starts_clear() {
        let mut cache = DirectoryCache::default();
        assert!(!cache.is_loaded());

        cache.mark_loaded();
        assert!(cache.is_loaded());
        assert_eq!(cache.len(), (0, 0));
    }
}
