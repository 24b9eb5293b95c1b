//! Shared fixtures for integration tests

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use hospital_api::domain::errors::{HospitalError, HospitalResult};
use hospital_api::domain::hospital::{Hospital, HospitalDraft, HospitalInput};
use hospital_api::domain::repositories::HospitalRepository;
use hospital_api::service::HospitalService;

/// Lowest cost bcrypt accepts, keeps tests fast
pub const TEST_BCRYPT_COST: u32 = 4;

#[derive(Default)]
struct Store {
    rows: Vec<Hospital>,
    last_id: i32,
}

/// In-memory HospitalRepository with the same id and ordering rules as the
/// PostgreSQL adapter: ids only grow, and saving with an id updates an
/// existing row or fails with `NotFound`
#[derive(Default)]
pub struct InMemoryHospitalRepository {
    store: Mutex<Store>,
}

#[async_trait]
impl HospitalRepository for InMemoryHospitalRepository {
    async fn save(&self, hospital: HospitalDraft) -> HospitalResult<Hospital> {
        let mut store = self.store.lock().unwrap();
        let now = Utc::now();

        if let Some(id) = hospital.id {
            let existing = store
                .rows
                .iter_mut()
                .find(|h| h.id == id)
                .ok_or(HospitalError::NotFound(id))?;
            existing.name = hospital.name;
            existing.branch = hospital.branch;
            existing.experience = hospital.experience;
            existing.email = hospital.email;
            existing.password_hash = hospital.password_hash;
            existing.contact = hospital.contact;
            existing.updated_at = now;
            return Ok(existing.clone());
        }

        store.last_id += 1;
        let saved = Hospital {
            id: store.last_id,
            name: hospital.name,
            branch: hospital.branch,
            experience: hospital.experience,
            email: hospital.email,
            password_hash: hospital.password_hash,
            contact: hospital.contact,
            created_at: now,
            updated_at: now,
        };
        store.rows.push(saved.clone());
        Ok(saved)
    }

    async fn find_all(&self) -> HospitalResult<Vec<Hospital>> {
        Ok(self.store.lock().unwrap().rows.clone())
    }

    async fn find_by_id(&self, id: i32) -> HospitalResult<Option<Hospital>> {
        let store = self.store.lock().unwrap();
        Ok(store.rows.iter().find(|h| h.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> HospitalResult<Option<Hospital>> {
        let store = self.store.lock().unwrap();
        Ok(store.rows.iter().find(|h| h.email == email).cloned())
    }

    async fn find_by_contact(&self, contact: &str) -> HospitalResult<Option<Hospital>> {
        let store = self.store.lock().unwrap();
        Ok(store.rows.iter().find(|h| h.contact == contact).cloned())
    }

    async fn delete_by_id(&self, id: i32) -> HospitalResult<bool> {
        let mut store = self.store.lock().unwrap();
        let before = store.rows.len();
        store.rows.retain(|h| h.id != id);
        Ok(store.rows.len() != before)
    }
}

/// Service backed by a fresh in-memory repository
pub fn test_service() -> HospitalService {
    HospitalService::new(
        Arc::new(InMemoryHospitalRepository::default()),
        TEST_BCRYPT_COST,
    )
}

/// Build a hospital input with sensible defaults
pub fn hospital_input(email: &str, contact: &str) -> HospitalInput {
    HospitalInput {
        id: None,
        name: "Test Hospital".to_string(),
        branch: "HYD".to_string(),
        experience: 2,
        email: email.to_string(),
        password: Some("hospital-pass".to_string()),
        contact: contact.to_string(),
    }
}
