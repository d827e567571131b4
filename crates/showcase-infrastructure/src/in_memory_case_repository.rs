//! Process-lifetime case repository.

use showcase_core::case::{CaseRepository, SuccessCase, seed_cases};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Case repository backed by a vector held in memory.
///
/// Index 0 is the newest case. Nothing is persisted.
#[derive(Debug, Default)]
pub struct InMemoryCaseRepository {
    cases: RwLock<Vec<SuccessCase>>,
}

impl InMemoryCaseRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository holding the given cases in the given order.
    pub fn with_cases(cases: Vec<SuccessCase>) -> Self {
        Self {
            cases: RwLock::new(cases),
        }
    }

    /// Creates a repository holding the built-in showcase cases.
    pub fn seeded() -> Self {
        Self::with_cases(seed_cases())
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // A panic while holding the lock cannot leave the vector half-written,
    // so a poisoned lock is still safe to use.
    fn read(&self) -> RwLockReadGuard<'_, Vec<SuccessCase>> {
        self.cases.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<SuccessCase>> {
        self.cases.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl CaseRepository for InMemoryCaseRepository {
    fn list_all(&self) -> Vec<SuccessCase> {
        self.read().clone()
    }

    fn find_by_id(&self, case_id: &str) -> Option<SuccessCase> {
        self.read().iter().find(|case| case.id == case_id).cloned()
    }

    fn add(&self, case: SuccessCase) {
        tracing::info!("[CaseRepository] Adding case '{}' ({})", case.id, case.title);
        self.write().insert(0, case);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use showcase_core::case::{CaseDraft, Industry, Role};

    #[test]
    fn test_seeded_repository_finds_by_id() {
        let repo = InMemoryCaseRepository::seeded();
        assert_eq!(repo.len(), 6);
        assert_eq!(repo.find_by_id("3").unwrap().id, "3");
        assert!(repo.find_by_id("99").is_none());
        assert!(!repo.contains("99"));
    }

    #[test]
    fn test_add_prepends_newest_first() {
        let repo = InMemoryCaseRepository::seeded();
        let first = CaseDraft::new("A", Role::DataInsight, Industry::Retail).into_case("new-a");
        let second = CaseDraft::new("B", Role::DataInsight, Industry::Retail).into_case("new-b");

        repo.add(first);
        repo.add(second);

        let ids: Vec<String> = repo.list_all().into_iter().map(|c| c.id).collect();
        assert_eq!(&ids[..3], &["new-b", "new-a", "1"]);
        assert_eq!(repo.len(), 8);
        assert!(repo.contains("new-a"));
    }

    #[test]
    fn test_empty_repository() {
        let repo = InMemoryCaseRepository::new();
        assert!(repo.is_empty());
        assert!(repo.list_all().is_empty());
    }
}
