use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::PermitStore;
use crate::{errors::PermitError, permit::Permit};

/// In-memory store for one category. Nothing survives a restart.
///
/// Records are keyed by id in a `BTreeMap`; ids only grow, so iteration order
/// is insertion order and lookups do not depend on storage position.
pub struct MemoryPermitStore {
    inner: RwLock<Inner>,
}

struct Inner {
    records: BTreeMap<i64, Permit>,
    next_id: i64,
    default_status: bool,
}

impl Inner {
    fn push(&mut self, pid: i64, status: bool) -> Permit {
        let permit = Permit { id: self.next_id, pid, status };
        self.next_id += 1;
        self.records.insert(permit.id, permit);
        permit
    }
}

impl MemoryPermitStore {
    /// Empty store whose default status starts as `true`.
    pub fn new() -> Self {
        Self::with_default_status(true)
    }

    pub fn with_default_status(default_status: bool) -> Self {
        Self {
            inner: RwLock::new(Inner { records: BTreeMap::new(), next_id: 1, default_status }),
        }
    }

    /// Snapshot of all permits in id order.
    #[cfg(test)]
    pub async fn list(&self) -> Vec<Permit> {
        let inner = self.inner.read().await;
        inner.records.values().copied().collect()
    }
}

impl Default for MemoryPermitStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PermitStore for MemoryPermitStore {
    async fn append(&self, pid: i64, status: bool) -> Permit {
        let mut inner = self.inner.write().await;
        inner.push(pid, status)
    }

    async fn create_with_default(&self, pid: i64) -> Permit {
        let mut inner = self.inner.write().await;
        let status = inner.default_status;
        inner.push(pid, status)
    }

    async fn get(&self, id: i64) -> Result<Permit, PermitError> {
        let inner = self.inner.read().await;
        inner.records.get(&id).copied().ok_or(PermitError::NotFound(id))
    }

    async fn count(&self) -> usize {
        self.inner.read().await.records.len()
    }

    async fn default_status(&self) -> bool {
        self.inner.read().await.default_status
    }

    async fn set_default_status(&self, status: bool) {
        self.inner.write().await.default_status = status;
    }
}
