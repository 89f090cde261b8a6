//! Suggestion panel for the address autocomplete.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph};

use crate::app::suggest::AddressSearch;

/// Overlay listing geocoding candidates beneath the address input.
#[derive(Debug, Default)]
pub struct AddressSearchPanel;

impl AddressSearchPanel {
    /// Draw the panel anchored under `anchor` when there is something to
    /// show: a lookup in progress, candidates, or a no-results notice.
    pub fn render(&self, frame: &mut Frame<'_>, anchor: Rect, search: &AddressSearch, cursor: usize) {
        if !search.panel_visible() {
            return;
        }
        if search.query().trim().is_empty() && !search.is_loading() {
            return;
        }

        // The popup opens directly below the input and must stay inside the
        // frame; rendering outside the buffer is a hard error.
        let screen = frame.size();
        let top = anchor.y.saturating_add(1);
        let available = screen.bottom().saturating_sub(top);
        let rows = search.candidates().len().max(1) as u16;
        let height = (rows + 2).min(available);
        if height < 3 {
            return;
        }
        let popup = Rect {
            x: anchor.x,
            y: top,
            width: anchor.width,
            height,
        };

        frame.render_widget(Clear, popup);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));

        if search.is_loading() {
            let inner = block.inner(popup);
            frame.render_widget(block, popup);
            let notice = Paragraph::new("Searching…").style(Style::default().fg(Color::Gray));
            frame.render_widget(notice, inner);
            return;
        }

        if search.candidates().is_empty() {
            let inner = block.inner(popup);
            frame.render_widget(block, popup);
            let notice =
                Paragraph::new("No locations found").style(Style::default().fg(Color::DarkGray));
            frame.render_widget(notice, inner);
            return;
        }

        let items: Vec<ListItem> = search
            .candidates()
            .iter()
            .map(|candidate| {
                ListItem::new(Line::from(vec![
                    Span::styled("⌕ ", Style::default().fg(Color::DarkGray)),
                    Span::raw(candidate.display_name.clone()),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▸ ");

        let mut list_state = ListState::default();
        list_state.select(Some(cursor.min(search.candidates().len() - 1)));
        frame.render_stateful_widget(list, popup, &mut list_state);
    }
}
