//! Handlers for `/contacts` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/contacts` | All contacts, insertion order |
//! | `POST`   | `/contacts` | Body: [`ContactFields`]; returns 201 + stored contact |
//! | `GET`    | `/contacts/:id` | 404 if not found |
//! | `PUT`    | `/contacts/:id` | Body: [`ContactFields`]; full replacement, 404 if not found |
//! | `DELETE` | `/contacts/:id` | `{"deleted":"<id>"}`; 404 if not found |
//!
//! The id in the path is authoritative. Any `id` in a request body is ignored.

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};
use roster_core::{Contact, ContactFields, ContactStore};
use serde::Serialize;
use uuid::Uuid;

use crate::error::ApiError;

fn not_found(id: Uuid) -> ApiError {
  ApiError::NotFound(format!("contact {id} not found"))
}

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /contacts`
pub async fn list<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<Contact>>, ApiError>
where
  S: ContactStore,
{
  let contacts = store.list_contacts().await.map_err(ApiError::store)?;
  Ok(Json(contacts))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /contacts`; returns 201 + the stored [`Contact`].
pub async fn create<S>(
  State(store): State<Arc<S>>,
  Json(body): Json<ContactFields>,
) -> Result<impl IntoResponse, ApiError>
where
  S: ContactStore,
{
  let contact = store.create_contact(body).await.map_err(ApiError::store)?;
  tracing::debug!(id = %contact.id, "created contact");
  Ok((StatusCode::CREATED, Json(contact)))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /contacts/:id`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<Uuid>,
) -> Result<Json<Contact>, ApiError>
where
  S: ContactStore,
{
  let contact = store
    .get_contact(id)
    .await
    .map_err(ApiError::store)?
    .ok_or_else(|| not_found(id))?;
  Ok(Json(contact))
}

// ─── Update ───────────────────────────────────────────────────────────────────

/// `PUT /contacts/:id`. Replaces every field.
pub async fn update<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<Uuid>,
  Json(body): Json<ContactFields>,
) -> Result<Json<Contact>, ApiError>
where
  S: ContactStore,
{
  let contact = store
    .update_contact(id, body)
    .await
    .map_err(ApiError::store)?
    .ok_or_else(|| not_found(id))?;
  Ok(Json(contact))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// Confirmation body returned by `DELETE /contacts/:id`.
#[derive(Debug, Serialize)]
pub struct Deleted {
  pub deleted: Uuid,
}

/// `DELETE /contacts/:id`
pub async fn delete_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<Uuid>,
) -> Result<Json<Deleted>, ApiError>
where
  S: ContactStore,
{
  let removed = store.delete_contact(id).await.map_err(ApiError::store)?;
  if !removed {
    return Err(not_found(id));
  }
  tracing::debug!(%id, "deleted contact");
  Ok(Json(Deleted { deleted: id }))
}
