//! Received and sent application views.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};
use time::macros::format_description;

use crate::app::applications::ApplicationsBoard;
use crate::domain::model::{ApplicationStatus, PropertyApplication};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoardSection {
    #[default]
    Received,
    Sent,
}

/// Cursor state across the two application sections.
#[derive(Debug, Default, Clone)]
pub struct ApplicationListState {
    section: BoardSection,
    cursor: usize,
}

impl ApplicationListState {
    pub fn section(&self) -> BoardSection {
        self.section
    }

    pub fn toggle_section(&mut self) {
        self.section = match self.section {
            BoardSection::Received => BoardSection::Sent,
            BoardSection::Sent => BoardSection::Received,
        };
        self.cursor = 0;
    }

    pub fn move_down(&mut self, board: &ApplicationsBoard) {
        let len = self.section_len(board);
        if len > 0 && self.cursor + 1 < len {
            self.cursor += 1;
        }
    }

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn selected<'a>(&self, board: &'a ApplicationsBoard) -> Option<&'a PropertyApplication> {
        match self.section {
            BoardSection::Received => board.received.get(self.cursor),
            BoardSection::Sent => board.sent.get(self.cursor),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn section_len(&self, board: &ApplicationsBoard) -> usize {
        match self.section {
            BoardSection::Received => board.received.len(),
            BoardSection::Sent => board.sent.len(),
        }
    }
}

/// Visual component rendering both application sections.
#[derive(Debug, Default)]
pub struct ApplicationList;

impl ApplicationList {
    pub fn render(
        &self,
        frame: &mut Frame<'_>,
        area: Rect,
        board: &ApplicationsBoard,
        state: &ApplicationListState,
    ) {
        let halves = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        self.render_section(
            frame,
            halves[0],
            &board.received,
            format!("Applications Received ({})", board.received.len()),
            "No applications received yet",
            state.section() == BoardSection::Received,
            state.cursor,
            true,
        );
        self.render_section(
            frame,
            halves[1],
            &board.sent,
            format!("Your Applications ({})", board.sent.len()),
            "You haven't submitted any applications yet",
            state.section() == BoardSection::Sent,
            state.cursor,
            false,
        );
    }

    #[allow(clippy::too_many_arguments)]
    fn render_section(
        &self,
        frame: &mut Frame<'_>,
        area: Rect,
        applications: &[PropertyApplication],
        title: String,
        empty_notice: &str,
        active: bool,
        cursor: usize,
        show_contact: bool,
    ) {
        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(if active { Color::Cyan } else { Color::DarkGray }));

        if applications.is_empty() {
            let inner = block.inner(area);
            frame.render_widget(block, area);
            let placeholder = Paragraph::new(empty_notice.to_owned())
                .style(
                    Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::ITALIC),
                )
                .wrap(Wrap { trim: true });
            frame.render_widget(placeholder, inner);
            return;
        }

        let items: Vec<ListItem> = applications
            .iter()
            .map(|application| ListItem::new(application_line(application, show_contact)))
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().add_modifier(Modifier::BOLD))
            .highlight_symbol("▸ ");

        let mut list_state = ListState::default();
        if active {
            list_state.select(Some(cursor.min(applications.len() - 1)));
        }
        frame.render_stateful_widget(list, area, &mut list_state);
    }
}

fn application_line(application: &PropertyApplication, show_contact: bool) -> Line<'static> {
    let listing = application
        .property
        .as_ref()
        .map(|summary| format!("{} · {}", summary.title, summary.address))
        .unwrap_or_else(|| application.property_id.clone());

    let mut spans = vec![Span::raw(listing)];
    if show_contact {
        spans.push(Span::styled(
            format!("  {} {}", application.email, application.phone),
            Style::default().fg(Color::Gray),
        ));
    }
    if let Some(date) = application.created_date() {
        if let Ok(formatted) = date.format(format_description!("[year]-[month]-[day]")) {
            spans.push(Span::styled(
                format!("  {formatted}"),
                Style::default().fg(Color::DarkGray),
            ));
        }
    }
    spans.push(Span::styled(
        format!("  {}", application.status.as_str()),
        status_style(application.status),
    ));
    Line::from(spans)
}

pub fn status_style(status: ApplicationStatus) -> Style {
    let color = match status {
        ApplicationStatus::Pending => Color::Yellow,
        ApplicationStatus::Approved => Color::Green,
        ApplicationStatus::Rejected => Color::Red,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> ApplicationsBoard {
        let application = |id: &str| -> PropertyApplication {
            serde_json::from_value(serde_json::json!({
                "id": id,
                "property_id": "p-1",
                "applicant_id": "u-2",
                "email": "tenant@example.org",
                "status": "pending"
            }))
            .unwrap()
        };
        ApplicationsBoard {
            received: vec![application("a-1"), application("a-2")],
            sent: vec![application("a-3")],
        }
    }

    #[test]
    fn cursor_moves_within_the_active_section() {
        let board = board();
        let mut state = ApplicationListState::default();

        state.move_down(&board);
        assert_eq!(state.selected(&board).unwrap().id, "a-2");
        state.move_down(&board);
        assert_eq!(state.selected(&board).unwrap().id, "a-2");
        state.move_up();
        assert_eq!(state.selected(&board).unwrap().id, "a-1");
    }

    #[test]
    fn toggling_sections_resets_the_cursor() {
        let board = board();
        let mut state = ApplicationListState::default();
        state.move_down(&board);
        state.toggle_section();
        assert_eq!(state.section(), BoardSection::Sent);
        assert_eq!(state.selected(&board).unwrap().id, "a-3");
    }
}
