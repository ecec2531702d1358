//! Directory identifier resolver.

use sd_model::Resolution;
use sd_storage::DirectoryProvider;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::cache::DirectoryCache;
use crate::error::ResolveResult;

/// Resolves identifiers to display names against a load-once cache.
///
/// The resolver reads both directory tables through its provider on the
/// first call and answers every later request from memory. The cache is
/// never invalidated or refreshed; a resolver lives as long as the
/// session that owns it.
pub struct Resolver<P> {
    provider: P,
    cache: Mutex<DirectoryCache>,
}

impl<P: DirectoryProvider> Resolver<P> {
    /// Creates a resolver over the given directory provider.
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            cache: Mutex::new(DirectoryCache::default()),
        }
    }

    /// Loads both directory tables if no load has been attempted yet.
    ///
    /// Idempotent. The lock serializes concurrent first calls so at most
    /// one load executes. A failing load leaves the cache in whatever
    /// partial state it reached and is not retried; the attempt itself
    /// marks the cache loaded.
    ///
    /// # Errors
    ///
    /// Propagates the storage error of a failing first load.
    pub async fn ensure_loaded(&self) -> ResolveResult<()> {
        let mut cache = self.cache.lock().await;
        if cache.is_loaded() {
            return Ok(());
        }
        cache.mark_loaded();

        let users = self.provider.list_users().await?;
        cache.fill_users(users);

        let groups = self.provider.list_groups().await?;
        cache.fill_groups(groups);

        let (users, groups) = cache.len();
        tracing::debug!(users, groups, "directory cache loaded");
        Ok(())
    }

    /// Resolves an identifier to a typed outcome.
    ///
    /// The users mapping is consulted first. An entry with an empty name
    /// falls back to the groups mapping; absence from both mappings is
    /// [`Resolution::Unknown`], not an error.
    ///
    /// # Errors
    ///
    /// Fails only when the first load fails; lookups themselves cannot.
    pub async fn resolve(&self, id: Uuid) -> ResolveResult<Resolution> {
        self.ensure_loaded().await?;

        let cache = self.cache.lock().await;
        if let Some(name) = cache.user_name(id) {
            if !name.is_empty() {
                return Ok(Resolution::user(name));
            }
        }
        if let Some(name) = cache.group_name(id) {
            if !name.is_empty() {
                return Ok(Resolution::group(name));
            }
        }
        Ok(Resolution::Unknown)
    }

    /// Resolves an identifier to the single string the host displays.
    ///
    /// Never fails: a resolved name, the literal `"Unknown"`, or a
    /// diagnostic describing the load failure.
    pub async fn resolve_display(&self, id: Uuid) -> String {
        match self.resolve(id).await {
            Ok(resolution) => resolution.display_name().to_string(),
            Err(err) => {
                tracing::warn!(%id, error = %err, "directory resolution failed");
                err.diagnostic()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex as StdMutex};

    use async_trait::async_trait;
    use sd_model::DirectoryEntry;
    use sd_storage::{StorageError, StorageResult};

    use super::*;

    #[derive(Default)]
    struct DirectoryState {
        users: StdMutex<Vec<DirectoryEntry>>,
        groups: StdMutex<Vec<DirectoryEntry>>,
        fail_connection: AtomicBool,
        queries: AtomicUsize,
    }

    /// Cloneable in-memory directory; clones share the same backing state.
    #[derive(Clone, Default)]
    struct MemoryDirectory {
        state: Arc<DirectoryState>,
    }

    impl MemoryDirectory {
        fn with_user(self, id: Uuid, name: &str) -> Self {
            self.state
                .users
                .lock()
                .unwrap()
                .push(DirectoryEntry::new(id, name));
            self
        }

        fn with_group(self, id: Uuid, name: &str) -> Self {
            self.state
                .groups
                .lock()
                .unwrap()
                .push(DirectoryEntry::new(id, name));
            self
        }

        fn set_failing(&self, failing: bool) {
            self.state
                .fail_connection
                .store(failing, Ordering::SeqCst);
        }

        fn queries(&self) -> usize {
            self.state.queries.load(Ordering::SeqCst)
        }

        fn read(&self, rows: &StdMutex<Vec<DirectoryEntry>>) -> StorageResult<Vec<DirectoryEntry>> {
            self.state.queries.fetch_add(1, Ordering::SeqCst);
            if self.state.fail_connection.load(Ordering::SeqCst) {
                return Err(StorageError::Connection("server unreachable".to_string()));
            }
            Ok(rows.lock().unwrap().clone())
        }
    }

    #[async_trait]
    impl DirectoryProvider for MemoryDirectory {
        async fn list_users(&self) -> StorageResult<Vec<DirectoryEntry>> {
            self.read(&self.state.users)
        }

        async fn list_groups(&self) -> StorageResult<Vec<DirectoryEntry>> {
            self.read(&self.state.groups)
        }
    }

    #[tokio::test]
    async fn resolves_user_name() {
        let id = Uuid::new_v4();
        let directory = MemoryDirectory::default().with_user(id, "Alice");
        let resolver = Resolver::new(directory);

        assert_eq!(resolver.resolve(id).await.unwrap(), Resolution::user("Alice"));
        assert_eq!(resolver.resolve_display(id).await, "Alice");
    }

    #[tokio::test]
    async fn resolves_group_name_when_user_absent() {
        let id = Uuid::new_v4();
        let directory = MemoryDirectory::default().with_group(id, "Admins");
        let resolver = Resolver::new(directory);

        assert_eq!(
            resolver.resolve(id).await.unwrap(),
            Resolution::group("Admins")
        );
        assert_eq!(resolver.resolve_display(id).await, "Admins");
    }

    #[tokio::test]
    async fn miss_in_both_tables_is_unknown() {
        let resolver = Resolver::new(MemoryDirectory::default());

        let resolution = resolver.resolve(Uuid::new_v4()).await.unwrap();
        assert!(resolution.is_unknown());
        assert_eq!(resolver.resolve_display(Uuid::new_v4()).await, "Unknown");
    }

    #[tokio::test]
    async fn empty_user_name_falls_back_to_group() {
        let id = Uuid::new_v4();
        let directory = MemoryDirectory::default()
            .with_user(id, "")
            .with_group(id, "Operators");
        let resolver = Resolver::new(directory);

        assert_eq!(
            resolver.resolve(id).await.unwrap(),
            Resolution::group("Operators")
        );
    }

    #[tokio::test]
    async fn empty_user_name_without_group_is_unknown() {
        let id = Uuid::new_v4();
        let directory = MemoryDirectory::default().with_user(id, "");
        let resolver = Resolver::new(directory);

        assert_eq!(resolver.resolve_display(id).await, "Unknown");
    }

    #[tokio::test]
    async fn user_mapping_wins_over_group_mapping() {
        let id = Uuid::new_v4();
        let directory = MemoryDirectory::default()
            .with_user(id, "Alice")
            .with_group(id, "Admins");
        let resolver = Resolver::new(directory);

        assert_eq!(resolver.resolve_display(id).await, "Alice");
    }

    #[tokio::test]
    async fn cache_does_not_observe_later_mutation() {
        let known = Uuid::new_v4();
        let added_later = Uuid::new_v4();
        let directory = MemoryDirectory::default().with_user(known, "Alice");
        let resolver = Resolver::new(directory.clone());

        assert_eq!(resolver.resolve_display(known).await, "Alice");

        // Mutate the backing table after the first load.
        let directory = directory.with_user(added_later, "Bob");

        assert_eq!(resolver.resolve_display(added_later).await, "Unknown");
        assert_eq!(resolver.resolve_display(known).await, "Alice");
        assert_eq!(directory.queries(), 2);
    }

    #[tokio::test]
    async fn queries_run_once_per_resolver() {
        let id = Uuid::new_v4();
        let directory = MemoryDirectory::default().with_user(id, "Alice");
        let resolver = Resolver::new(directory.clone());

        let first = resolver.resolve_display(id).await;
        let second = resolver.resolve_display(id).await;

        assert_eq!(first, second);
        // One query per table, issued on the first call only.
        assert_eq!(directory.queries(), 2);
    }

    #[tokio::test]
    async fn concurrent_first_calls_load_once() {
        let id = Uuid::new_v4();
        let directory = MemoryDirectory::default().with_user(id, "Alice");
        let resolver = Resolver::new(directory.clone());

        let (a, b) = tokio::join!(resolver.resolve_display(id), resolver.resolve_display(id));

        assert_eq!(a, "Alice");
        assert_eq!(b, "Alice");
        assert_eq!(directory.queries(), 2);
    }

    #[tokio::test]
    async fn load_failure_becomes_diagnostic_string() {
        let directory = MemoryDirectory::default();
        directory.set_failing(true);
        let resolver = Resolver::new(directory);

        let shown = resolver.resolve_display(Uuid::new_v4()).await;

        assert!(shown.starts_with("Error querying directory."));
        assert!(shown.contains("server unreachable"));
    }

    #[tokio::test]
    async fn load_failure_is_typed_on_the_result_path() {
        let directory = MemoryDirectory::default();
        directory.set_failing(true);
        let resolver = Resolver::new(directory);

        let err = resolver.resolve(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(
            err,
            crate::ResolveError::Load(StorageError::Connection(_))
        ));
    }

    #[tokio::test]
    async fn failed_load_is_not_retried() {
        let id = Uuid::new_v4();
        let directory = MemoryDirectory::default();
        directory.set_failing(true);
        let resolver = Resolver::new(directory.clone());

        let shown = resolver.resolve_display(id).await;
        assert!(shown.contains("server unreachable"));
        assert_eq!(directory.queries(), 1);

        // Even after the backend recovers, the cache keeps the state the
        // failed attempt reached.
        directory.set_failing(false);
        let directory = directory.with_user(id, "Alice");

        assert_eq!(resolver.resolve_display(id).await, "Unknown");
        assert_eq!(directory.queries(), 1);
    }
}
