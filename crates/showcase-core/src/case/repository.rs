//! Case repository trait.
//!
//! Defines the interface for the in-memory case collection.

use super::model::SuccessCase;

/// An abstract repository for the success case collection.
///
/// The collection is ordered newest-first: `add` prepends. Implementations
/// hold the records for the lifetime of the process only.
///
/// Callers are responsible for supplying unique ids; the repository does not
/// enforce uniqueness.
pub trait CaseRepository: Send + Sync {
    /// Lists all cases, newest first.
    fn list_all(&self) -> Vec<SuccessCase>;

    /// Finds a case by its ID.
    ///
    /// # Returns
    ///
    /// - `Some(SuccessCase)`: Case found
    /// - `None`: No case with that ID
    fn find_by_id(&self, case_id: &str) -> Option<SuccessCase>;

    /// Returns true if a case with this ID exists.
    fn contains(&self, case_id: &str) -> bool {
        self.find_by_id(case_id).is_some()
    }

    /// Prepends a case to the front of the collection.
    fn add(&self, case: SuccessCase);
}
