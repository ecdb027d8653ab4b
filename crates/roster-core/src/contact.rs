//! Contact types: the single entity kept in the directory.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ─── ContactFields ───────────────────────────────────────────────────────────

/// The editable part of a contact. Used as the body of create and update
/// requests, and as the pending record held by the client while typing.
///
/// Every field defaults to the empty string; no validation is applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactFields {
  pub name:    String,
  pub address: String,
  pub phone:   String,
}

impl ContactFields {
  pub fn new(
    name: impl Into<String>,
    address: impl Into<String>,
    phone: impl Into<String>,
  ) -> Self {
    Self { name: name.into(), address: address.into(), phone: phone.into() }
  }
}

// ─── Contact ─────────────────────────────────────────────────────────────────

/// A stored contact. `id` is assigned by the store on creation and never
/// changes afterwards; updates replace `fields` wholesale.
///
/// Serialised flat: `{"id": "...", "name": "...", "address": "...", "phone": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
  pub id:     Uuid,
  #[serde(flatten)]
  pub fields: ContactFields,
}
