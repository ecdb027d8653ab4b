//! Contact list pane. The row being edited turns into an inline edit form.

use ratatui::{
  Frame,
  layout::Rect,
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use crate::app::{App, Focus};

/// Render the contact list into `area`.
pub fn draw<A>(f: &mut Frame, area: Rect, app: &App<A>) {
  let state = app.directory.state();

  let block = Block::default()
    .title(format!(" Contacts ({}) ", state.contacts.len()))
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::DarkGray));

  let inner = block.inner(area);
  f.render_widget(block, area);

  if state.contacts.is_empty() {
    let empty = Paragraph::new("No contacts. Press [a] to add one.")
      .style(Style::default().fg(Color::DarkGray));
    f.render_widget(empty, inner);
    return;
  }

  let items: Vec<ListItem> = state
    .contacts
    .iter()
    .enumerate()
    .map(|(i, contact)| {
      if state.editing == Some(i) {
        let active = (app.focus == Focus::EditForm).then_some(app.field);
        return ListItem::new(Line::from(super::field_spans(&state.pending_edit, active)));
      }

      let c = &contact.fields;
      ListItem::new(Line::from(vec![
        Span::styled(format!(" {:<24}", c.name), Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(format!("{:<32}", c.address)),
        Span::styled(c.phone.clone(), Style::default().fg(Color::Cyan)),
      ]))
    })
    .collect();

  // Scrollable list with cursor tracking.
  let mut list_state = ListState::default();
  list_state.select(Some(app.list_cursor));

  let highlight = if app.focus == Focus::List {
    Style::default()
      .bg(Color::Blue)
      .fg(Color::White)
      .add_modifier(Modifier::BOLD)
  } else {
    Style::default()
  };

  f.render_stateful_widget(
    List::new(items).highlight_style(highlight).highlight_symbol(""),
    inner,
    &mut list_state,
  );
}
