use std::sync::Arc;

use tracing::debug;

use crate::{
    category::Category,
    errors::PermitError,
    permit::Permit,
    store::{MemoryPermitStore, PermitStore},
};

/// Entry point for permit operations. Resolves category names to stores.
///
/// Constructed once at startup and shared with request handlers; cloning
/// shares the underlying stores.
#[derive(Clone)]
pub struct PermitService {
    electrical: Arc<dyn PermitStore>,
    structural: Arc<dyn PermitStore>,
}

impl PermitService {
    /// Two empty in-memory stores, both defaulting to status `true`.
    pub fn new() -> Self {
        Self::with_stores(Arc::new(MemoryPermitStore::new()), Arc::new(MemoryPermitStore::new()))
    }

    pub fn with_stores(electrical: Arc<dyn PermitStore>, structural: Arc<dyn PermitStore>) -> Self {
        Self { electrical, structural }
    }

    fn store(&self, category: Category) -> &Arc<dyn PermitStore> {
        match category {
            Category::Electrical => &self.electrical,
            Category::Structural => &self.structural,
        }
    }

    fn resolve(&self, category: &str) -> Result<(Category, &Arc<dyn PermitStore>), PermitError> {
        let category: Category = category.parse()?;
        Ok((category, self.store(category)))
    }

    pub fn list_categories(&self) -> [Category; 2] {
        Category::ALL
    }

    pub async fn get_permit(&self, category: &str, id: i64) -> Result<Permit, PermitError> {
        let (_, store) = self.resolve(category)?;
        store.get(id).await
    }

    /// Create a permit owned by `pid`. The id and status are always
    /// server-assigned; status comes from the category's default at this moment.
    pub async fn create_permit(&self, category: &str, pid: i64) -> Result<Permit, PermitError> {
        let (category, store) = self.resolve(category)?;
        let permit = store.create_with_default(pid).await;
        debug!(%category, id = permit.id, pid, status = permit.status, "permit appended");
        Ok(permit)
    }

    /// Set the status stamped onto future permits of `category`.
    pub async fn set_category_status(&self, category: &str, status: bool) -> Result<(), PermitError> {
        let (category, store) = self.resolve(category)?;
        store.set_default_status(status).await;
        debug!(%category, status, "default status replaced");
        Ok(())
    }

    pub async fn default_status(&self, category: &str) -> Result<bool, PermitError> {
        let (_, store) = self.resolve(category)?;
        Ok(store.default_status().await)
    }

    pub async fn count(&self, category: &str) -> Result<usize, PermitError> {
        let (_, store) = self.resolve(category)?;
        Ok(store.count().await)
    }
}

impl Default for PermitService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn lists_fixed_categories() {
        let svc = PermitService::new();
        assert_eq!(svc.list_categories(), [Category::Electrical, Category::Structural]);
    }

    #[tokio::test]
    async fn sequential_creates_get_consecutive_ids() -> anyhow::Result<()> {
        let svc = PermitService::new();
        for category in ["electrical", "structural"] {
            for expected in 1..=5 {
                let p = svc.create_permit(category, expected * 100).await?;
                assert_eq!(p.id, expected);
            }
            assert_eq!(svc.count(category).await?, 5);
        }
        Ok(())
    }

    #[tokio::test]
    async fn categories_are_independent() -> anyhow::Result<()> {
        let svc = PermitService::new();
        svc.create_permit("electrical", 1).await?;
        svc.create_permit("electrical", 2).await?;
        let s = svc.create_permit("structural", 3).await?;
        assert_eq!(s.id, 1);

        svc.set_category_status("structural", false).await?;
        assert!(svc.default_status("electrical").await?);
        assert!(!svc.default_status("structural").await?);
        Ok(())
    }

    #[tokio::test]
    async fn unknown_category_is_rejected_everywhere() {
        let svc = PermitService::new();
        let unknown = PermitError::UnknownCategory("plumbing".into());
        assert_eq!(svc.get_permit("plumbing", 1).await, Err(unknown.clone()));
        assert_eq!(svc.create_permit("plumbing", 1).await, Err(unknown.clone()));
        assert_eq!(svc.set_category_status("plumbing", true).await, Err(unknown.clone()));
        assert_eq!(unknown.to_string(), "Type not found!");
    }

    #[tokio::test]
    async fn lookup_on_empty_store_is_not_found() {
        let svc = PermitService::new();
        assert_eq!(svc.get_permit("electrical", 0).await, Err(PermitError::NotFound(0)));
        let err = svc.get_permit("electrical", 1).await.unwrap_err();
        assert_eq!(err, PermitError::NotFound(1));
        assert_eq!(err.to_string(), "1 not found");
    }

    #[tokio::test]
    async fn status_toggle_only_affects_later_permits() -> anyhow::Result<()> {
        let svc = PermitService::new();

        let first = svc.create_permit("electrical", 5).await?;
        assert_eq!(first, Permit { id: 1, pid: 5, status: true });

        svc.set_category_status("electrical", false).await?;
        let second = svc.create_permit("electrical", 9).await?;
        assert_eq!(second, Permit { id: 2, pid: 9, status: false });

        assert_eq!(svc.get_permit("electrical", 1).await?, first);
        assert_eq!(svc.get_permit("electrical", 2).await?, second);
        Ok(())
    }

    #[tokio::test]
    async fn clones_share_state() -> anyhow::Result<()> {
        let svc = PermitService::new();
        let other = svc.clone();
        other.create_permit("structural", 11).await?;
        assert_eq!(svc.get_permit("structural", 1).await?.pid, 11);
        Ok(())
    }
}
