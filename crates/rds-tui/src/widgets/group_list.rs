//! Group list widget

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph};

use crate::picker::GroupPicker;

/// Footer shown under the list.
pub const KEY_HINTS: &str = "Up/Down move  Enter select  Esc cancel";

impl Widget for &GroupPicker<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let [list_area, hint_area] =
            Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).areas(area);

        let title = if self.groups().is_empty() {
            format!(" {} ", self.prompt())
        } else {
            format!(
                " {} ({}/{}) ",
                self.prompt(),
                self.cursor() + 1,
                self.groups().len()
            )
        };
        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White));

        let inner = block.inner(list_area);
        block.render(list_area, buf);

        if self.groups().is_empty() {
            Paragraph::new("No parameter groups.")
                .style(Style::default().fg(Color::Gray))
                .render(inner, buf);
        } else {
            let items: Vec<ListItem> = self
                .groups()
                .iter()
                .map(|g| {
                    ListItem::new(Line::from(vec![
                        Span::styled(g.name.clone(), Style::default().fg(Color::White)),
                        Span::styled(
                            format!(" ({})", g.kind),
                            Style::default().fg(Color::DarkGray),
                        ),
                    ]))
                })
                .collect();

            let list = List::new(items)
                .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
                .highlight_symbol("> ");
            let mut state = ListState::default().with_selected(Some(self.cursor()));
            StatefulWidget::render(list, inner, buf, &mut state);
        }

        Paragraph::new(KEY_HINTS)
            .style(Style::default().fg(Color::Gray))
            .render(hint_area, buf);
    }
}
