//! In-process stand-in for the server, shared by the unit tests.

use std::sync::{
  Mutex,
  atomic::{AtomicBool, AtomicUsize, Ordering},
};

use anyhow::anyhow;
use roster_core::{Contact, ContactFields};
use uuid::Uuid;

use crate::directory::ContactsApi;

#[derive(Default)]
pub(crate) struct FakeApi {
  pub contacts: Mutex<Vec<Contact>>,
  /// When set, every request fails as if the server were unreachable.
  pub fail:     AtomicBool,
  /// Number of requests issued, failed ones included.
  pub requests: AtomicUsize,
}

impl FakeApi {
  /// A store holding `n` contacts named `n0..`, with addresses `a0..` and
  /// phones `p0..`.
  pub fn seeded(n: usize) -> Self {
    let contacts = (0..n)
      .map(|i| Contact {
        id:     Uuid::new_v4(),
        fields: ContactFields::new(format!("n{i}"), format!("a{i}"), format!("p{i}")),
      })
      .collect();
    Self { contacts: Mutex::new(contacts), ..Self::default() }
  }

  pub fn stored(&self) -> Vec<Contact> { self.contacts.lock().unwrap().clone() }

  fn begin(&self) -> anyhow::Result<()> {
    self.requests.fetch_add(1, Ordering::SeqCst);
    if self.fail.load(Ordering::SeqCst) {
      return Err(anyhow!("connection refused"));
    }
    Ok(())
  }
}

impl ContactsApi for &FakeApi {
  async fn list_contacts(&self) -> anyhow::Result<Vec<Contact>> {
    self.begin()?;
    Ok(self.stored())
  }

  async fn create_contact(&self, fields: &ContactFields) -> anyhow::Result<Contact> {
    self.begin()?;
    let contact = Contact { id: Uuid::new_v4(), fields: fields.clone() };
    self.contacts.lock().unwrap().push(contact.clone());
    Ok(contact)
  }

  async fn update_contact(
    &self,
    id: Uuid,
    fields: &ContactFields,
  ) -> anyhow::Result<Contact> {
    self.begin()?;
    let mut contacts = self.contacts.lock().unwrap();
    let slot = contacts
      .iter_mut()
      .find(|c| c.id == id)
      .ok_or_else(|| anyhow!("PUT /contacts/{id} → 404 Not Found"))?;
    slot.fields = fields.clone();
    Ok(slot.clone())
  }

  async fn delete_contact(&self, id: Uuid) -> anyhow::Result<()> {
    self.begin()?;
    let mut contacts = self.contacts.lock().unwrap();
    let before = contacts.len();
    contacts.retain(|c| c.id != id);
    if contacts.len() == before {
      return Err(anyhow!("DELETE /contacts/{id} → 404 Not Found"));
    }
    Ok(())
  }
}
