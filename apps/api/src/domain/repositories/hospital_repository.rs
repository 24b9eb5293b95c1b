use async_trait::async_trait;

use crate::domain::errors::HospitalResult;
use crate::domain::hospital::{Hospital, HospitalDraft};

/// Repository trait for Hospital records
///
/// Defines the contract for persisting and retrieving hospitals.
/// Implementations should handle database-specific details.
#[async_trait]
pub trait HospitalRepository: Send + Sync {
    /// Save a hospital
    ///
    /// `id == None` inserts with a storage-assigned id. `id == Some(n)`
    /// overwrites row `n` and fails with `HospitalError::NotFound(n)` when
    /// it does not exist, so deleted ids are never brought back.
    async fn save(&self, hospital: HospitalDraft) -> HospitalResult<Hospital>;

    /// Find every hospital, ordered by id
    async fn find_all(&self) -> HospitalResult<Vec<Hospital>>;

    /// Find a hospital by its ID
    async fn find_by_id(&self, id: i32) -> HospitalResult<Option<Hospital>>;

    /// Find the lowest-id hospital with the given email
    async fn find_by_email(&self, email: &str) -> HospitalResult<Option<Hospital>>;

    /// Find the lowest-id hospital with the given contact
    async fn find_by_contact(&self, contact: &str) -> HospitalResult<Option<Hospital>>;

    /// Delete a hospital by ID, returning whether a record was removed
    async fn delete_by_id(&self, id: i32) -> HospitalResult<bool>;
}
