use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::api::errors::ApiError;
use crate::api::routes::AppState;
use crate::domain::hospital::{Hospital, HospitalInput};

/// Hospital as returned to clients (no credential material)
#[derive(Debug, Serialize)]
pub struct HospitalResponse {
    pub id: i32,
    pub name: String,
    pub branch: String,
    pub experience: i32,
    pub email: String,
    pub contact: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Hospital> for HospitalResponse {
    fn from(hospital: &Hospital) -> Self {
        Self {
            id: hospital.id,
            name: hospital.name.clone(),
            branch: hospital.branch.clone(),
            experience: hospital.experience,
            email: hospital.email.clone(),
            contact: hospital.contact.clone(),
            created_at: hospital.created_at,
            updated_at: hospital.updated_at,
        }
    }
}

/// Create a hospital
///
/// POST /hospitalapi/add
pub async fn add_hospital(
    State(state): State<AppState>,
    Json(req): Json<HospitalInput>,
) -> Result<(StatusCode, Json<HospitalResponse>), ApiError> {
    let hospital = state.hospitals.add_hospital(req).await?;

    Ok((StatusCode::CREATED, Json(HospitalResponse::from(&hospital))))
}

/// List every hospital
///
/// GET /hospitalapi/all
pub async fn get_all_hospitals(
    State(state): State<AppState>,
) -> Result<Json<Vec<HospitalResponse>>, ApiError> {
    let hospitals = state.hospitals.get_all_hospitals().await?;

    Ok(Json(hospitals.iter().map(HospitalResponse::from).collect()))
}

/// Get a hospital by ID
///
/// GET /hospitalapi/get/:id
pub async fn get_hospital(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<HospitalResponse>, ApiError> {
    let hospital = state
        .hospitals
        .get_hospital_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Hospital not found: {}", id)))?;

    Ok(Json(HospitalResponse::from(&hospital)))
}

/// Replace a hospital record
///
/// PUT /hospitalapi/update
pub async fn update_hospital(
    State(state): State<AppState>,
    Json(req): Json<HospitalInput>,
) -> Result<Json<HospitalResponse>, ApiError> {
    let hospital = state.hospitals.update_hospital(req).await?;

    Ok(Json(HospitalResponse::from(&hospital)))
}

/// Delete a hospital
///
/// DELETE /hospitalapi/delete/:id
pub async fn delete_hospital(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<String, ApiError> {
    if !state.hospitals.delete_hospital_by_id(id).await? {
        return Err(ApiError::not_found(format!("Hospital not found: {}", id)));
    }

    Ok(format!("Hospital {} deleted successfully", id))
}

/// Look up a hospital by email
///
/// GET /hospitalapi/email/:email
pub async fn get_hospital_by_email(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<HospitalResponse>, ApiError> {
    let hospital = state
        .hospitals
        .get_hospital_by_email(&email)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("No hospital with email: {}", email)))?;

    Ok(Json(HospitalResponse::from(&hospital)))
}

/// Look up a hospital by contact
///
/// GET /hospitalapi/contact/:contact
pub async fn get_hospital_by_contact(
    State(state): State<AppState>,
    Path(contact): Path<String>,
) -> Result<Json<HospitalResponse>, ApiError> {
    let hospital = state
        .hospitals
        .get_hospital_by_contact(&contact)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("No hospital with contact: {}", contact)))?;

    Ok(Json(HospitalResponse::from(&hospital)))
}
