//! The `ContactStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `roster-store-sqlite`).
//! Higher layers (`roster-api`, `roster-server`) depend on this abstraction,
//! not on any concrete backend.

use std::future::Future;

use uuid::Uuid;

use crate::contact::{Contact, ContactFields};

/// Abstraction over a Roster contact store backend.
///
/// Every method maps to exactly one store operation; nothing spans more than
/// one call. Concurrent writers race and the last write wins. An update or
/// delete against an id removed in the meantime reports "not found"
/// (`None` / `false`) rather than an error.
///
/// All methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`).
pub trait ContactStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// All contacts in the store's natural (insertion) order.
  fn list_contacts(
    &self,
  ) -> impl Future<Output = Result<Vec<Contact>, Self::Error>> + Send + '_;

  /// Persist a new contact. The id is assigned by the store.
  fn create_contact(
    &self,
    fields: ContactFields,
  ) -> impl Future<Output = Result<Contact, Self::Error>> + Send + '_;

  /// Retrieve a contact by id. Returns `None` if not found.
  fn get_contact(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<Contact>, Self::Error>> + Send + '_;

  /// Replace every field of the contact `id`. Returns the stored record, or
  /// `None` if no contact has that id.
  fn update_contact(
    &self,
    id: Uuid,
    fields: ContactFields,
  ) -> impl Future<Output = Result<Option<Contact>, Self::Error>> + Send + '_;

  /// Remove the contact `id`. Returns `false` if no contact has that id.
  fn delete_contact(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;
}
