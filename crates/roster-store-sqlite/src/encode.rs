//! Encoding and decoding helpers between Rust domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! UUIDs are stored as hyphenated lowercase strings.

use roster_core::{Contact, ContactFields};
use uuid::Uuid;

use crate::Result;

// ─── Uuid ─────────────────────────────────────────────────────────────────────

pub fn encode_uuid(id: Uuid) -> String { id.hyphenated().to_string() }

pub fn decode_uuid(s: &str) -> Result<Uuid> { Ok(Uuid::parse_str(s)?) }

// ─── Row types ───────────────────────────────────────────────────────────────

/// Raw strings read directly from a `contacts` row.
pub struct RawContact {
  pub contact_id: String,
  pub name:       String,
  pub address:    String,
  pub phone:      String,
}

impl RawContact {
  /// Column order must match [`CONTACT_COLUMNS`].
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      contact_id: row.get(0)?,
      name:       row.get(1)?,
      address:    row.get(2)?,
      phone:      row.get(3)?,
    })
  }

  pub fn into_contact(self) -> Result<Contact> {
    Ok(Contact {
      id:     decode_uuid(&self.contact_id)?,
      fields: ContactFields {
        name:    self.name,
        address: self.address,
        phone:   self.phone,
      },
    })
  }
}

pub const CONTACT_COLUMNS: &str = "contact_id, name, address, phone";
