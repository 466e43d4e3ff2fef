//! Per-category permit storage.
//!
//! A store owns every permit of one category plus that category's default
//! status. Implementations must make id assignment and insertion atomic.

use async_trait::async_trait;

use crate::{errors::PermitError, permit::Permit};

pub mod memory;

pub use memory::MemoryPermitStore;

/// Trait abstraction for one category's permits.
#[async_trait]
pub trait PermitStore: Send + Sync {
    /// Insert a permit with the next id and the given status.
    async fn append(&self, pid: i64, status: bool) -> Permit;
    /// Insert a permit stamped with the current default status, read under
    /// the same lock as the insertion.
    async fn create_with_default(&self, pid: i64) -> Permit;
    /// Fetch a permit by id; `NotFound` for ids never assigned.
    async fn get(&self, id: i64) -> Result<Permit, PermitError>;
    /// Number of permits stored.
    async fn count(&self) -> usize;
    async fn default_status(&self) -> bool;
    /// Replace the default status. Existing permits keep theirs.
    async fn set_default_status(&self, status: bool);
}
