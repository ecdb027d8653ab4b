//! Terminal application state and key dispatcher.
//!
//! Directory data lives in [`Directory`]; this module only adds what the
//! terminal needs on top of it: keyboard focus, the focused input, and the
//! list cursor.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::directory::{ContactsApi, Directory, Field};

// ─── Focus ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
  /// Moving through the contact list.
  List,
  /// Typing into the add form.
  AddForm,
  /// Typing into the inline edit form of the row being edited.
  EditForm,
}

// ─── App ──────────────────────────────────────────────────────────────────────

/// Top-level application state.
pub struct App<A> {
  pub directory:   Directory<A>,
  pub focus:       Focus,
  /// The input receiving keystrokes while a form has focus.
  pub field:       Field,
  /// Cursor position within the contact list.
  pub list_cursor: usize,
}

impl<A: ContactsApi> App<A> {
  pub fn new(directory: Directory<A>) -> Self {
    Self {
      directory,
      focus: Focus::List,
      field: Field::Name,
      list_cursor: 0,
    }
  }

  fn len(&self) -> usize { self.directory.state().contacts.len() }

  // ── Key handling ──────────────────────────────────────────────────────────

  /// Process a key event. Returns `true` to continue, `false` to quit.
  pub async fn handle_key(&mut self, key: KeyEvent) -> bool {
    // Global: Ctrl-C quits from anywhere.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
      return false;
    }

    match self.focus {
      Focus::List => self.handle_list_key(key).await,
      Focus::AddForm | Focus::EditForm => {
        self.handle_form_key(key).await;
        true
      }
    }
  }

  async fn handle_list_key(&mut self, key: KeyEvent) -> bool {
    match key.code {
      KeyCode::Char('q') => return false,

      KeyCode::Down | KeyCode::Char('j') => {
        if self.list_cursor + 1 < self.len() {
          self.list_cursor += 1;
        }
      }
      KeyCode::Up | KeyCode::Char('k') => {
        self.list_cursor = self.list_cursor.saturating_sub(1);
      }

      KeyCode::Char('a') => {
        self.focus = Focus::AddForm;
        self.field = Field::Name;
      }

      KeyCode::Enter | KeyCode::Char('e') => {
        self.directory.begin_edit(self.list_cursor);
        if self.directory.state().editing == Some(self.list_cursor) {
          self.focus = Focus::EditForm;
          self.field = Field::Name;
        }
      }

      KeyCode::Char('d') => {
        self.directory.delete(self.list_cursor).await;
        self.list_cursor = self.list_cursor.min(self.len().saturating_sub(1));
      }

      _ => {}
    }
    true
  }

  async fn handle_form_key(&mut self, key: KeyEvent) {
    match key.code {
      KeyCode::Esc => {
        if self.focus == Focus::EditForm {
          self.directory.cancel_edit();
        }
        self.focus = Focus::List;
      }

      KeyCode::Tab => self.field = self.field.next(),
      KeyCode::BackTab => self.field = self.field.prev(),

      KeyCode::Backspace => {
        let mut value = self.field.get(self.directory.state().pending()).to_owned();
        value.pop();
        self.directory.set_field(self.field, value);
      }
      KeyCode::Char(c) => {
        let mut value = self.field.get(self.directory.state().pending()).to_owned();
        value.push(c);
        self.directory.set_field(self.field, value);
      }

      KeyCode::Enter => match self.focus {
        Focus::AddForm => {
          self.directory.submit_add().await;
          self.field = Field::Name;
        }
        Focus::EditForm => {
          if let Some(index) = self.directory.state().editing {
            self.directory.save_edit(index).await;
          }
          // A failed save keeps the form open.
          if !self.directory.state().is_editing() {
            self.focus = Focus::List;
          }
        }
        Focus::List => {}
      },

      _ => {}
    }
  }
}

// ─── Tests ────────────────────────────────────────────────────────────────────
