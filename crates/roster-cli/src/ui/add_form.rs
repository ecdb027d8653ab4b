//! Add form: the three inputs for a new contact.

use ratatui::{
  Frame,
  layout::Rect,
  style::{Color, Style},
  text::Line,
  widgets::{Block, Borders, Paragraph},
};

use crate::app::{App, Focus};

/// Render the add form into `area`.
pub fn draw<A>(f: &mut Frame, area: Rect, app: &App<A>) {
  let focused = app.focus == Focus::AddForm;
  let border = if focused { Color::Yellow } else { Color::DarkGray };

  let block = Block::default()
    .title(" New contact ")
    .borders(Borders::ALL)
    .border_style(Style::default().fg(border));

  let active = focused.then_some(app.field);
  let line = Line::from(super::field_spans(&app.directory.state().pending_add, active));

  let inner = block.inner(area);
  f.render_widget(block, area);
  f.render_widget(Paragraph::new(line), inner);
}
