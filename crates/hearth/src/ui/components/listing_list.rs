//! Property list component and state management.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};

use crate::domain::model::Property;

/// Maintains the navigable state of a property list.
#[derive(Debug, Default, Clone)]
pub struct ListingListState {
    properties: Vec<Property>,
    selected: usize,
}

impl ListingListState {
    pub fn set_properties(&mut self, properties: Vec<Property>) {
        self.properties = properties;
        if self.selected >= self.properties.len() {
            self.selected = self.properties.len().saturating_sub(1);
        }
    }

    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn select_next(&mut self) {
        if !self.properties.is_empty() && self.selected + 1 < self.properties.len() {
            self.selected += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn selected_property(&self) -> Option<&Property> {
        self.properties.get(self.selected)
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }
}

/// Visual component rendering a navigable list of listings.
#[derive(Debug, Default)]
pub struct ListingList;

impl ListingList {
    pub fn render(
        &self,
        frame: &mut Frame<'_>,
        area: Rect,
        state: &ListingListState,
        title: &str,
        limit: Option<usize>,
    ) {
        let block = Block::default()
            .title(title.to_owned())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));

        if state.is_empty() {
            let inner = block.inner(area);
            frame.render_widget(block, area);
            let placeholder = Paragraph::new("No properties listed yet — be the first!").style(
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            );
            frame.render_widget(placeholder, inner);
            return;
        }

        let shown = limit.unwrap_or(state.properties().len());
        let items: Vec<ListItem> = state
            .properties()
            .iter()
            .take(shown)
            .map(|property| ListItem::new(listing_line(property)))
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
        list_state.select(Some(state.selected_index().min(shown.saturating_sub(1))));
        frame.render_stateful_widget(list, area, &mut list_state);
    }
}

fn listing_line(property: &Property) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            property.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            format!("${}", format_amount(property.price)),
            Style::default().fg(Color::Green),
        ),
        Span::styled(
            format!(
                "  · {} beds · {} baths · {} sqft",
                property.bedrooms,
                property.bathrooms,
                format_amount(property.square_feet)
            ),
            Style::default().fg(Color::Gray),
        ),
    ])
}

/// Thousands-separated rendering of a non-negative amount, dropping the
/// fraction when it is zero.
pub fn format_amount(amount: f64) -> String {
    let negative = amount < 0.0;
    let rounded = (amount.abs() * 100.0).round() / 100.0;
    let whole = rounded.trunc() as u64;
    let fraction = ((rounded - rounded.trunc()) * 100.0).round() as u64;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&grouped);
    if fraction > 0 {
        out.push_str(&format!(".{fraction:02}"));
    }
    out
}
