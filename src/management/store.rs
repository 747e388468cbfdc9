use std::{
    collections::HashMap,
    future::Future,
    io::ErrorKind,
    path::{Path, PathBuf},
    sync::{
        Mutex,
        atomic::{AtomicU64, Ordering},
    },
};

use crate::error::StoreError;

/// Logical areas of the persistence store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Namespace {
    Token,
    Bestsellers,
}

impl Namespace {
    fn relative_path(&self) -> &'static str {
        match self {
            Namespace::Token => "auth/token.json",
            Namespace::Bestsellers => "cache/bestsellers.json",
        }
    }
}

/// Durable key-value store holding one serialized value per namespace.
pub trait KeyValueStore: Send + Sync {
    /// Returns `None` when nothing was ever written to the namespace.
    fn get(
        &self,
        namespace: Namespace,
    ) -> impl Future<Output = Result<Option<String>, StoreError>> + Send;

    /// Replaces the namespace's value.
    fn put(
        &self,
        namespace: Namespace,
        value: String,
    ) -> impl Future<Output = Result<(), StoreError>> + Send;
}

/// Stores each namespace as a JSON file below a root directory.
///
/// Writes go to a temporary sibling file that is then renamed over the
/// target, so a concurrent `get` sees either the old or the new content.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_for(&self, namespace: Namespace) -> PathBuf {
        self.root.join(namespace.relative_path())
    }

    /// Sibling of `path`, unique per write so concurrent writers never share one.
    fn temp_path_for(&self, path: &Path) -> PathBuf {
        static NEXT: AtomicU64 = AtomicU64::new(0);
        let n = NEXT.fetch_add(1, Ordering::Relaxed);
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        path.with_file_name(format!(".{}.{}.{}.tmp", name, std::process::id(), n))
    }
}

impl KeyValueStore for JsonFileStore {
    async fn get(&self, namespace: Namespace) -> Result<Option<String>, StoreError> {
        match async_fs::read_to_string(self.path_for(namespace)).await {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::Io(e)),
        }
    }

    async fn put(&self, namespace: Namespace, value: String) -> Result<(), StoreError> {
        let path = self.path_for(namespace);
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent).await?;
        }

        // readers must never observe a truncated file
        let tmp = self.temp_path_for(&path);
        if let Err(e) = async_fs::write(&tmp, value).await {
            let _ = async_fs::remove_file(&tmp).await;
            return Err(StoreError::Io(e));
        }
        if let Err(e) = async_fs::rename(&tmp, &path).await {
            let _ = async_fs::remove_file(&tmp).await;
            return Err(StoreError::Io(e));
        }
        Ok(())
    }
}

/// Keeps namespaces in process memory only.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<Namespace, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    async fn get(&self, namespace: Namespace) -> Result<Option<String>, StoreError> {
        let values = self
            .values
            .lock()
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        Ok(values.get(&namespace).cloned())
    }

    async fn put(&self, namespace: Namespace, value: String) -> Result<(), StoreError> {
        let mut values = self
            .values
            .lock()
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        values.insert(namespace, value);
        Ok(())
    }
}
