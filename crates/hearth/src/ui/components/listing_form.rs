//! Creation form for new listings, hosting the address autocomplete.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::app::listings::ListingDraft;
use crate::app::suggest::AddressSearch;
use crate::ui::components::address_search::AddressSearchPanel;

/// Input fields of the listing form, in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingField {
    Title,
    Description,
    Price,
    Address,
    Bedrooms,
    Bathrooms,
    SquareFeet,
    Images,
}

const FIELD_ORDER: [ListingField; 8] = [
    ListingField::Title,
    ListingField::Description,
    ListingField::Price,
    ListingField::Address,
    ListingField::Bedrooms,
    ListingField::Bathrooms,
    ListingField::SquareFeet,
    ListingField::Images,
];

impl ListingField {
    fn label(&self) -> &'static str {
        match self {
            ListingField::Title => "Title",
            ListingField::Description => "Description",
            ListingField::Price => "Price ($)",
            ListingField::Address => "Address",
            ListingField::Bedrooms => "Bedrooms",
            ListingField::Bathrooms => "Bathrooms",
            ListingField::SquareFeet => "Square feet",
            ListingField::Images => "Image URLs",
        }
    }

    fn placeholder(&self) -> &'static str {
        match self {
            ListingField::Title => "Beautiful House in Downtown",
            ListingField::Description => "Describe your property…",
            ListingField::Price => "299999",
            ListingField::Address => "Search for an address…",
            ListingField::Bedrooms => "3",
            ListingField::Bathrooms => "2",
            ListingField::SquareFeet => "2000",
            ListingField::Images => "Comma-separated URLs",
        }
    }
}

/// Interactive state backing the listing form.
#[derive(Debug, Default, Clone)]
pub struct ListingFormState {
    pub draft: ListingDraft,
    focus_index: usize,
    pub suggestion_cursor: usize,
}

impl ListingFormState {
    pub fn focus(&self) -> ListingField {
        FIELD_ORDER[self.focus_index]
    }

    pub fn focus_next(&mut self) {
        self.focus_index = (self.focus_index + 1) % FIELD_ORDER.len();
    }

    pub fn focus_previous(&mut self) {
        self.focus_index = (self.focus_index + FIELD_ORDER.len() - 1) % FIELD_ORDER.len();
    }

    /// Append a character to the focused field.
    pub fn push_char(&mut self, ch: char) {
        self.field_mut(self.focus()).push(ch);
    }

    /// Remove the last character of the focused field.
    pub fn pop_char(&mut self) {
        self.field_mut(self.focus()).pop();
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn field_value(&self, field: ListingField) -> &str {
        match field {
            ListingField::Title => &self.draft.title,
            ListingField::Description => &self.draft.description,
            ListingField::Price => &self.draft.price,
            ListingField::Address => &self.draft.address,
            ListingField::Bedrooms => &self.draft.bedrooms,
            ListingField::Bathrooms => &self.draft.bathrooms,
            ListingField::SquareFeet => &self.draft.square_feet,
            ListingField::Images => &self.draft.images,
        }
    }

    fn field_mut(&mut self, field: ListingField) -> &mut String {
        match field {
            ListingField::Title => &mut self.draft.title,
            ListingField::Description => &mut self.draft.description,
            ListingField::Price => &mut self.draft.price,
            ListingField::Address => &mut self.draft.address,
            ListingField::Bedrooms => &mut self.draft.bedrooms,
            ListingField::Bathrooms => &mut self.draft.bathrooms,
            ListingField::SquareFeet => &mut self.draft.square_feet,
            ListingField::Images => &mut self.draft.images,
        }
    }
}

/// Visual component rendering the listing form and its suggestion panel.
#[derive(Debug, Default)]
pub struct ListingForm;

impl ListingForm {
    pub fn render(
        &self,
        frame: &mut Frame<'_>,
        area: Rect,
        state: &ListingFormState,
        search: &AddressSearch,
    ) {
        let block = Block::default()
            .title("List a New Property")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut constraints: Vec<Constraint> =
            FIELD_ORDER.iter().map(|_| Constraint::Length(1)).collect();
        constraints.push(Constraint::Length(1));
        constraints.push(Constraint::Min(0));
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(inner);

        let mut address_row = inner;
        for (i, field) in FIELD_ORDER.iter().enumerate() {
            let focused = state.focus() == *field;
            frame.render_widget(field_line(state, *field, focused), rows[i]);
            if *field == ListingField::Address {
                address_row = rows[i];
            }
        }

        let hints = Paragraph::new(Line::from(vec![
            Span::styled("tab", Style::default().fg(Color::Cyan)),
            Span::raw(" next field · "),
            Span::styled("↑/↓ ↵", Style::default().fg(Color::Cyan)),
            Span::raw(" pick suggestion · "),
            Span::styled("ctrl+s", Style::default().fg(Color::Cyan)),
            Span::raw(" publish · "),
            Span::styled("esc", Style::default().fg(Color::Cyan)),
            Span::raw(" back"),
        ]))
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(Color::Gray));
        frame.render_widget(hints, rows[FIELD_ORDER.len()]);

        // Suggestion overlay last so it paints over the rows below the input.
        AddressSearchPanel.render(frame, address_row, search, state.suggestion_cursor);
    }
}

fn field_line(state: &ListingFormState, field: ListingField, focused: bool) -> Paragraph<'static> {
    let value = state.field_value(field);
    let label_style = if focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };

    let mut spans = vec![Span::styled(format!("{:<12} ", field.label()), label_style)];
    if value.is_empty() && !focused {
        spans.push(Span::styled(
            field.placeholder().to_owned(),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        ));
    } else {
        spans.push(Span::raw(value.to_owned()));
    }
    if focused {
        spans.push(Span::styled("▏", Style::default().fg(Color::Cyan)));
    }
    Paragraph::new(Line::from(spans))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_cycles_through_all_fields() {
        let mut state = ListingFormState::default();
        assert_eq!(state.focus(), ListingField::Title);
        for _ in 0..FIELD_ORDER.len() {
            state.focus_next();
        }
        assert_eq!(state.focus(), ListingField::Title);
        state.focus_previous();
        assert_eq!(state.focus(), ListingField::Images);
    }

    #[test]
    fn characters_route_to_the_focused_field() {
        let mut state = ListingFormState::default();
        state.push_char('H');
        state.push_char('i');
        assert_eq!(state.draft.title, "Hi");

        state.focus_next();
        state.focus_next();
        state.push_char('9');
        assert_eq!(state.draft.price, "9");
        state.pop_char();
        assert_eq!(state.draft.price, "");
    }
}
