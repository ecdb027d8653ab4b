//! Directory state container and the request-issuing controller around it.
//!
//! Data flows one way: the controller performs a request, turns the outcome
//! into an [`Action`], and feeds it to [`DirectoryState::apply`]. Failures
//! never reach the state; they go to the [`ErrorHook`] instead.

use std::{fmt, sync::Arc};

use roster_core::{Contact, ContactFields};
use uuid::Uuid;

// ─── Backend seam ─────────────────────────────────────────────────────────────

/// The four requests the directory issues. Implemented over HTTP by
/// [`crate::client::ApiClient`].
pub trait ContactsApi {
  async fn list_contacts(&self) -> anyhow::Result<Vec<Contact>>;
  async fn create_contact(&self, fields: &ContactFields) -> anyhow::Result<Contact>;
  async fn update_contact(
    &self,
    id: Uuid,
    fields: &ContactFields,
  ) -> anyhow::Result<Contact>;
  async fn delete_contact(&self, id: Uuid) -> anyhow::Result<()>;
}

// ─── Error reporting ──────────────────────────────────────────────────────────

/// The user action whose request failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
  Load,
  Add,
  Save,
  Delete,
}

impl fmt::Display for Operation {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      Self::Load => "load contacts",
      Self::Add => "add contact",
      Self::Save => "save contact",
      Self::Delete => "delete contact",
    })
  }
}

/// Receives every swallowed failure. Never changes what the user sees.
pub type ErrorHook = Arc<dyn Fn(Operation, &anyhow::Error) + Send + Sync>;

/// The default hook: log and move on.
pub fn log_error(op: Operation, err: &anyhow::Error) {
  tracing::error!(operation = %op, error = %format!("{err:#}"), "request failed");
}

// ─── Fields ───────────────────────────────────────────────────────────────────

/// One editable input of a pending record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
  Name,
  Address,
  Phone,
}

impl Field {
  pub const ALL: [Field; 3] = [Field::Name, Field::Address, Field::Phone];

  pub fn label(self) -> &'static str {
    match self {
      Self::Name => "Name",
      Self::Address => "Address",
      Self::Phone => "Phone",
    }
  }

  pub fn next(self) -> Self {
    match self {
      Self::Name => Self::Address,
      Self::Address => Self::Phone,
      Self::Phone => Self::Name,
    }
  }

  pub fn prev(self) -> Self {
    match self {
      Self::Name => Self::Phone,
      Self::Address => Self::Name,
      Self::Phone => Self::Address,
    }
  }

  pub fn get(self, fields: &ContactFields) -> &str {
    match self {
      Self::Name => &fields.name,
      Self::Address => &fields.address,
      Self::Phone => &fields.phone,
    }
  }

  fn slot(self, fields: &mut ContactFields) -> &mut String {
    match self {
      Self::Name => &mut fields.name,
      Self::Address => &mut fields.address,
      Self::Phone => &mut fields.phone,
    }
  }
}

// ─── State ────────────────────────────────────────────────────────────────────

/// Everything the directory view shows. Changed only through
/// [`DirectoryState::apply`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryState {
  /// Mirrors the server's collection, in server order.
  pub contacts:     Vec<Contact>,
  /// Index into `contacts` of the row being edited, if any.
  pub editing:      Option<usize>,
  pub pending_add:  ContactFields,
  pub pending_edit: ContactFields,
}

/// A state transition. Applying one performs no I/O.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
  Loaded(Vec<Contact>),
  SetField(Field, String),
  Added(Contact),
  BeginEdit(usize),
  Saved { index: usize, contact: Contact },
  CancelEdit,
  Removed(usize),
}

impl DirectoryState {
  pub fn apply(&mut self, action: Action) {
    match action {
      Action::Loaded(contacts) => {
        self.contacts = contacts;
        self.editing = None;
      }
      Action::SetField(field, value) => {
        *field.slot(self.pending_mut()) = value;
      }
      Action::Added(contact) => {
        self.contacts.push(contact);
        self.pending_add = ContactFields::default();
      }
      Action::BeginEdit(index) => {
        if let Some(contact) = self.contacts.get(index) {
          self.pending_edit = contact.fields.clone();
          self.editing = Some(index);
        }
      }
      Action::Saved { index, contact } => {
        if let Some(slot) = self.contacts.get_mut(index) {
          *slot = contact;
        }
        self.editing = None;
      }
      Action::CancelEdit => {
        self.editing = None;
      }
      Action::Removed(index) => {
        if index >= self.contacts.len() {
          return;
        }
        self.contacts.remove(index);
        self.editing = match self.editing {
          Some(e) if e == index => None,
          Some(e) if e > index => Some(e - 1),
          other => other,
        };
      }
    }
  }

  pub fn is_editing(&self) -> bool { self.editing.is_some() }

  /// The record that field edits currently go to.
  pub fn pending(&self) -> &ContactFields {
    if self.is_editing() { &self.pending_edit } else { &self.pending_add }
  }

  fn pending_mut(&mut self) -> &mut ContactFields {
    if self.is_editing() {
      &mut self.pending_edit
    } else {
      &mut self.pending_add
    }
  }
}

// ─── Controller ───────────────────────────────────────────────────────────────

/// Drives [`DirectoryState`] from user operations, issuing at most one
/// request per operation.
pub struct Directory<A> {
  api:      A,
  state:    DirectoryState,
  on_error: ErrorHook,
}

impl<A> Directory<A> {
  pub fn state(&self) -> &DirectoryState { &self.state }
}

impl<A: ContactsApi> Directory<A> {
  /// A directory whose failures are logged through `tracing`.
  pub fn new(api: A) -> Self { Self::with_error_hook(api, Arc::new(log_error)) }

  pub fn with_error_hook(api: A, on_error: ErrorHook) -> Self {
    Self { api, state: DirectoryState::default(), on_error }
  }

  fn report(&self, op: Operation, err: anyhow::Error) { (self.on_error)(op, &err); }

  /// Fetch the full collection and replace the local sequence.
  pub async fn load(&mut self) {
    match self.api.list_contacts().await {
      Ok(contacts) => self.state.apply(Action::Loaded(contacts)),
      Err(e) => self.report(Operation::Load, e),
    }
  }

  /// Update one field of whichever pending record is active.
  pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
    self.state.apply(Action::SetField(field, value.into()));
  }

  /// Send the pending add record; append the stored contact on success.
  pub async fn submit_add(&mut self) {
    let created = self.api.create_contact(&self.state.pending_add).await;
    match created {
      Ok(contact) => self.state.apply(Action::Added(contact)),
      Err(e) => self.report(Operation::Add, e),
    }
  }

  pub fn begin_edit(&mut self, index: usize) { self.state.apply(Action::BeginEdit(index)); }

  /// Send the pending edit record for the contact at `index`.
  pub async fn save_edit(&mut self, index: usize) {
    let Some(id) = self.state.contacts.get(index).map(|c| c.id) else {
      tracing::debug!(index, "save requested for a row that does not exist");
      return;
    };
    let updated = self.api.update_contact(id, &self.state.pending_edit).await;
    match updated {
      Ok(contact) => self.state.apply(Action::Saved { index, contact }),
      Err(e) => self.report(Operation::Save, e),
    }
  }

  pub fn cancel_edit(&mut self) { self.state.apply(Action::CancelEdit); }

  /// Delete the contact at `index`; drop it locally on success.
  pub async fn delete(&mut self, index: usize) {
    let Some(id) = self.state.contacts.get(index).map(|c| c.id) else {
      tracing::debug!(index, "delete requested for a row that does not exist");
      return;
    };
    match self.api.delete_contact(id).await {
      Ok(()) => self.state.apply(Action::Removed(index)),
      Err(e) => self.report(Operation::Delete, e),
    }
  }
}

// ─── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use std::sync::{Mutex, atomic::Ordering};

  use super::*;
  use crate::testing::FakeApi;

  type Reported = Arc<Mutex<Vec<Operation>>>;

  fn recording(api: &FakeApi) -> (Directory<&FakeApi>, Reported) {
    let reported: Reported = Arc::default();
    let sink = reported.clone();
    let hook: ErrorHook = Arc::new(move |op, _err| sink.lock().unwrap().push(op));
    (Directory::with_error_hook(api, hook), reported)
  }

  async fn loaded(api: &FakeApi) -> (Directory<&FakeApi>, Reported) {
    let (mut dir, reported) = recording(api);
    dir.load().await;
    (dir, reported)
  }

  // ── Load ─────────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn load_replaces_local_sequence() {
    let api = FakeApi::seeded(3);
    let (dir, reported) = loaded(&api).await;

    assert_eq!(dir.state().contacts, api.stored());
    assert!(reported.lock().unwrap().is_empty());
  }

  #[tokio::test]
  async fn load_failure_is_reported_and_leaves_list_empty() {
    let api = FakeApi::seeded(3);
    api.fail.store(true, Ordering::SeqCst);
    let (dir, reported) = loaded(&api).await;

    assert!(dir.state().contacts.is_empty());
    assert_eq!(*reported.lock().unwrap(), [Operation::Load]);
  }

  // ── Add ──────────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn field_edits_go_to_add_record_when_not_editing() {
    let api = FakeApi::default();
    let (mut dir, _) = recording(&api);

    dir.set_field(Field::Name, "Ada");
    dir.set_field(Field::Phone, "555");

    assert_eq!(dir.state().pending_add, ContactFields::new("Ada", "", "555"));
    assert_eq!(dir.state().pending_edit, ContactFields::default());
    assert_eq!(api.requests.load(Ordering::SeqCst), 0);
  }

  #[tokio::test]
  async fn submit_add_appends_stored_contact_and_clears_pending() {
    let api = FakeApi::seeded(1);
    let (mut dir, reported) = loaded(&api).await;

    dir.set_field(Field::Name, "Ada");
    dir.set_field(Field::Address, "12 Loop Rd");
    dir.submit_add().await;

    let state = dir.state();
    assert_eq!(state.contacts.len(), 2);
    assert_eq!(state.contacts[1], api.stored()[1]);
    assert_eq!(state.contacts[1].fields.name, "Ada");
    assert_eq!(state.pending_add, ContactFields::default());
    assert!(reported.lock().unwrap().is_empty());
  }

  #[tokio::test]
  async fn submit_add_failure_keeps_pending_fields() {
    let api = FakeApi::default();
    let (mut dir, reported) = loaded(&api).await;

    dir.set_field(Field::Name, "Ada");
    api.fail.store(true, Ordering::SeqCst);
    dir.submit_add().await;

    assert!(dir.state().contacts.is_empty());
    assert_eq!(dir.state().pending_add.name, "Ada");
    assert_eq!(*reported.lock().unwrap(), [Operation::Add]);
  }

  // ── Edit ─────────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn begin_edit_copies_fields_and_redirects_field_edits() {
    let api = FakeApi::seeded(3);
    let (mut dir, _) = loaded(&api).await;

    dir.set_field(Field::Name, "draft");
    dir.begin_edit(1);
    dir.set_field(Field::Phone, "999");

    let state = dir.state();
    assert_eq!(state.editing, Some(1));
    assert_eq!(state.pending_edit, ContactFields::new("n1", "a1", "999"));
    assert_eq!(state.pending_add.name, "draft");
    assert_eq!(state.pending(), &state.pending_edit);
  }

  #[tokio::test]
  async fn begin_edit_out_of_range_is_ignored() {
    let api = FakeApi::seeded(2);
    let (mut dir, _) = loaded(&api).await;

    dir.begin_edit(5);
    assert_eq!(dir.state().editing, None);
  }

  #[tokio::test]
  async fn beginning_another_edit_replaces_the_first() {
    let api = FakeApi::seeded(3);
    let (mut dir, _) = loaded(&api).await;

    dir.begin_edit(0);
    dir.set_field(Field::Name, "changed");
    dir.begin_edit(2);

    assert_eq!(dir.state().editing, Some(2));
    assert_eq!(dir.state().pending_edit, ContactFields::new("n2", "a2", "p2"));
  }

  #[tokio::test]
  async fn save_edit_replaces_record_and_leaves_edit_mode() {
    let api = FakeApi::seeded(3);
    let (mut dir, reported) = loaded(&api).await;

    dir.begin_edit(1);
    dir.set_field(Field::Phone, "999");
    dir.save_edit(1).await;

    let state = dir.state();
    assert_eq!(state.editing, None);
    assert_eq!(state.contacts[1].fields, ContactFields::new("n1", "a1", "999"));
    assert_eq!(state.contacts, api.stored());
    assert!(reported.lock().unwrap().is_empty());
  }

  #[tokio::test]
  async fn save_edit_failure_keeps_edit_mode() {
    let api = FakeApi::seeded(3);
    let (mut dir, reported) = loaded(&api).await;

    dir.begin_edit(1);
    dir.set_field(Field::Phone, "999");
    api.fail.store(true, Ordering::SeqCst);
    dir.save_edit(1).await;

    let state = dir.state();
    assert_eq!(state.editing, Some(1));
    assert_eq!(state.pending_edit.phone, "999");
    assert_eq!(state.contacts[1].fields.phone, "p1");
    assert_eq!(*reported.lock().unwrap(), [Operation::Save]);
  }

  #[tokio::test]
  async fn edit_then_cancel_leaves_local_and_store_unchanged() {
    let api = FakeApi::seeded(4);
    let (mut dir, _) = loaded(&api).await;
    let before = dir.state().contacts.clone();
    let requests = api.requests.load(Ordering::SeqCst);

    dir.begin_edit(2);
    dir.set_field(Field::Name, "scratch");
    dir.set_field(Field::Address, "nowhere");
    dir.cancel_edit();

    assert_eq!(dir.state().editing, None);
    assert_eq!(dir.state().contacts, before);
    assert_eq!(api.stored(), before);
    assert_eq!(api.requests.load(Ordering::SeqCst), requests);
  }

  // ── Delete ───────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn delete_removes_entry_at_index() {
    let api = FakeApi::seeded(3);
    let (mut dir, _) = loaded(&api).await;
    let removed = dir.state().contacts[1].id;

    dir.delete(1).await;

    assert_eq!(dir.state().contacts.len(), 2);
    assert!(dir.state().contacts.iter().all(|c| c.id != removed));
    assert_eq!(dir.state().contacts, api.stored());
  }

  #[tokio::test]
  async fn delete_failure_keeps_entry() {
    let api = FakeApi::seeded(3);
    let (mut dir, reported) = loaded(&api).await;

    api.fail.store(true, Ordering::SeqCst);
    dir.delete(0).await;

    assert_eq!(dir.state().contacts.len(), 3);
    assert_eq!(*reported.lock().unwrap(), [Operation::Delete]);
  }

  #[tokio::test]
  async fn out_of_range_save_and_delete_issue_no_request() {
    let api = FakeApi::seeded(1);
    let (mut dir, reported) = loaded(&api).await;
    let requests = api.requests.load(Ordering::SeqCst);

    dir.save_edit(3).await;
    dir.delete(3).await;

    assert_eq!(api.requests.load(Ordering::SeqCst), requests);
    assert!(reported.lock().unwrap().is_empty());
  }

  // ── Reducer ──────────────────────────────────────────────────────────────────

  fn state_with(n: usize) -> DirectoryState {
    let mut state = DirectoryState::default();
    state.apply(Action::Loaded(FakeApi::seeded(n).stored()));
    state
  }

  #[test]
  fn removing_edited_row_clears_edit_mode() {
    let mut state = state_with(3);
    state.apply(Action::BeginEdit(1));
    state.apply(Action::Removed(1));
    assert_eq!(state.editing, None);
  }

  #[test]
  fn removing_earlier_row_shifts_edit_index() {
    let mut state = state_with(3);
    let edited = state.contacts[2].id;
    state.apply(Action::BeginEdit(2));
    state.apply(Action::Removed(0));

    assert_eq!(state.editing, Some(1));
    assert_eq!(state.contacts[1].id, edited);
  }

  #[test]
  fn field_cycle_visits_every_field() {
    let mut field = Field::Name;
    for expected in Field::ALL.iter().cycle().skip(1).take(3) {
      field = field.next();
      assert_eq!(field, *expected);
    }
    assert_eq!(Field::Name.prev(), Field::Phone);
  }
}
