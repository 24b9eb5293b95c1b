use std::sync::Arc;

use crate::auth::password::hash_password;
use crate::domain::errors::{HospitalError, HospitalResult};
use crate::domain::hospital::{Hospital, HospitalDraft, HospitalInput};
use crate::domain::repositories::HospitalRepository;

/// Use-case service for hospital records
///
/// A pass-through over [`HospitalRepository`] that hashes passwords before
/// anything reaches storage. Missing records are reported as `None` (reads)
/// or `false` (deletes); only an update of a missing id is an error.
#[derive(Clone)]
pub struct HospitalService {
    repo: Arc<dyn HospitalRepository>,
    bcrypt_cost: u32,
}

impl HospitalService {
    /// Creates a service over the given repository
    ///
    /// # Arguments
    /// * `repo` - Storage backend for hospital records
    /// * `bcrypt_cost` - Work factor used when hashing passwords
    pub fn new(repo: Arc<dyn HospitalRepository>, bcrypt_cost: u32) -> Self {
        Self { repo, bcrypt_cost }
    }

    /// Persists a new hospital and returns it with its assigned id
    ///
    /// Any caller-supplied id is ignored; storage always numbers new records.
    ///
    /// # Errors
    /// * `HospitalError::MissingPassword` - If no password is given
    pub async fn add_hospital(&self, mut input: HospitalInput) -> HospitalResult<Hospital> {
        if let Some(ignored) = input.id.take() {
            tracing::debug!(requested_id = ignored, "Ignoring client id on add");
        }
        let password = input.password.take().ok_or(HospitalError::MissingPassword)?;
        let password_hash = hash_password(&password, self.bcrypt_cost)?;

        let hospital = self
            .repo
            .save(HospitalDraft::from_input(input, password_hash))
            .await?;
        tracing::info!(hospital_id = hospital.id, "Hospital added");
        Ok(hospital)
    }

    /// Returns every hospital in id order
    pub async fn get_all_hospitals(&self) -> HospitalResult<Vec<Hospital>> {
        self.repo.find_all().await
    }

    /// Returns the hospital with `id`, or `None` when there is none
    pub async fn get_hospital_by_id(&self, id: i32) -> HospitalResult<Option<Hospital>> {
        self.repo.find_by_id(id).await
    }

    /// Returns the lowest-id hospital registered under `email`
    pub async fn get_hospital_by_email(&self, email: &str) -> HospitalResult<Option<Hospital>> {
        self.repo.find_by_email(email).await
    }

    /// Returns the lowest-id hospital registered under `contact`
    pub async fn get_hospital_by_contact(
        &self,
        contact: &str,
    ) -> HospitalResult<Option<Hospital>> {
        self.repo.find_by_contact(contact).await
    }

    /// Overwrites the full record identified by `input.id`
    ///
    /// Without a password the stored hash is kept.
    ///
    /// # Errors
    /// * `HospitalError::MissingId` - If `input.id` is absent
    /// * `HospitalError::NotFound` - If no hospital has that id
    pub async fn update_hospital(&self, mut input: HospitalInput) -> HospitalResult<Hospital> {
        let id = input.id.ok_or(HospitalError::MissingId)?;

        let password_hash = match input.password.take() {
            Some(password) => hash_password(&password, self.bcrypt_cost)?,
            None => {
                self.repo
                    .find_by_id(id)
                    .await?
                    .ok_or(HospitalError::NotFound(id))?
                    .password_hash
            }
        };

        let hospital = self
            .repo
            .save(HospitalDraft::from_input(input, password_hash))
            .await?;
        tracing::info!(hospital_id = hospital.id, "Hospital updated");
        Ok(hospital)
    }

    /// Deletes a hospital, returning whether it existed
    pub async fn delete_hospital_by_id(&self, id: i32) -> HospitalResult<bool> {
        let deleted = self.repo.delete_by_id(id).await?;
        if deleted {
            tracing::info!(hospital_id = id, "Hospital deleted");
        } else {
            tracing::debug!(hospital_id = id, "Delete requested for missing hospital");
        }
        Ok(deleted)
    }
}
