//! TUI rendering for every pane.

pub mod add_form;
pub mod contact_list;

use chrono::Local;
use ratatui::{
  Frame,
  layout::{Constraint, Direction, Layout, Rect},
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Paragraph},
};
use roster_core::ContactFields;

use crate::{
  app::{App, Focus},
  directory::Field,
};

// ─── Root draw ────────────────────────────────────────────────────────────────

/// Main draw function called each frame.
pub fn draw<A>(f: &mut Frame, app: &App<A>) {
  let area = f.area();

  // Vertical stack: header, add form, list, status bar.
  let rows = Layout::default()
    .direction(Direction::Vertical)
    .constraints([
      Constraint::Length(1), // header
      Constraint::Length(3), // add form
      Constraint::Min(0),    // list
      Constraint::Length(1), // status bar
    ])
    .split(area);

  draw_header(f, rows[0]);
  add_form::draw(f, rows[1], app);
  contact_list::draw(f, rows[2], app);
  draw_status(f, rows[3], app);
}

// ─── Shared helpers ───────────────────────────────────────────────────────────

/// Render the three inputs of `fields` on one line. The `active` input gets a
/// highlight and a trailing cursor.
pub(crate) fn field_spans(fields: &ContactFields, active: Option<Field>) -> Vec<Span<'static>> {
  let mut spans = Vec::with_capacity(Field::ALL.len() * 2);
  for field in Field::ALL {
    let is_active = active == Some(field);
    let label_style = Style::default().fg(Color::Cyan);
    let value_style = if is_active {
      Style::default().fg(Color::Black).bg(Color::Yellow)
    } else {
      Style::default()
    };
    let value = if is_active {
      format!("{}_", field.get(fields))
    } else {
      field.get(fields).to_string()
    };

    spans.push(Span::styled(format!(" {}: ", field.label()), label_style));
    spans.push(Span::styled(format!("{value:<18}"), value_style));
  }
  spans
}

// ─── Header ───────────────────────────────────────────────────────────────────

fn draw_header(f: &mut Frame, area: Rect) {
  let date = Local::now().format("%Y-%m-%d").to_string();

  let left = Span::styled(
    " roster  [a] add  [e] edit  [d] delete  [q] quit",
    Style::default()
      .fg(Color::White)
      .add_modifier(Modifier::BOLD),
  );
  let right = Span::styled(
    format!("{date} "),
    Style::default().fg(Color::DarkGray),
  );

  // Simple left-right header: pad the middle.
  let left_width = left.content.len() as u16;
  let right_width = right.content.len() as u16;
  let pad = area
    .width
    .saturating_sub(left_width)
    .saturating_sub(right_width);

  let line = Line::from(vec![
    left,
    Span::raw(" ".repeat(pad as usize)),
    right,
  ]);

  let block = Block::default().style(Style::default().bg(Color::DarkGray));
  let inner = block.inner(area);
  f.render_widget(block, area);
  f.render_widget(Paragraph::new(line), inner);
}

// ─── Status bar ───────────────────────────────────────────────────────────────

fn draw_status<A>(f: &mut Frame, area: Rect, app: &App<A>) {
  let (mode_label, hints) = match app.focus {
    Focus::List => (
      "LIST",
      "↑↓/jk navigate  a add  e/Enter edit  d delete  q quit",
    ),
    Focus::AddForm => (
      "ADD",
      "Type to fill  Tab next field  Enter add  Esc back",
    ),
    Focus::EditForm => (
      "EDIT",
      "Type to change  Tab next field  Enter save  Esc cancel",
    ),
  };

  let mode_span = Span::styled(
    format!(" {mode_label} "),
    Style::default()
      .fg(Color::Black)
      .bg(Color::Cyan)
      .add_modifier(Modifier::BOLD),
  );
  let hint_span = Span::styled(
    format!("  {hints}"),
    Style::default().fg(Color::DarkGray),
  );

  let line = Line::from(vec![mode_span, hint_span]);
  f.render_widget(
    Paragraph::new(line).style(Style::default().bg(Color::Black)),
    area,
  );
}
