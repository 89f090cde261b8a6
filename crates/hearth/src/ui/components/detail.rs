//! Property detail panel.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::app::listings::PropertyDetail;
use crate::ui::components::application_form::{ApplicationForm, ApplicationFormState};
use crate::ui::components::listing_list::format_amount;

/// Relationship of the current viewer to the listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerRole {
    SignedOut,
    Owner,
    Applicant,
}

/// Visual component rendering one listing with location and application
/// affordances.
#[derive(Debug, Default)]
pub struct DetailView;

impl DetailView {
    pub fn render(
        &self,
        frame: &mut Frame<'_>,
        area: Rect,
        detail: &PropertyDetail,
        role: ViewerRole,
        form: &ApplicationFormState,
    ) {
        let property = &detail.property;
        let block = Block::default()
            .title(property.title.clone())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let sections = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Min(3),
                Constraint::Length(3),
                Constraint::Length(7),
            ])
            .split(inner);

        let facts = Paragraph::new(vec![
            Line::from(Span::styled(
                format!("${}", format_amount(property.price)),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!(
                    "{} beds · {} baths · {} sqft",
                    property.bedrooms,
                    property.bathrooms,
                    format_amount(property.square_feet)
                ),
                Style::default().fg(Color::Gray),
            )),
        ]);
        frame.render_widget(facts, sections[0]);

        let mut body = vec![
            Line::from(Span::styled(
                "Description",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(property.description.clone()),
        ];
        if !property.images.is_empty() {
            body.push(Line::default());
            body.push(Line::from(Span::styled(
                format!("Images ({})", property.images.len()),
                Style::default().add_modifier(Modifier::BOLD),
            )));
            for url in &property.images {
                body.push(Line::from(Span::styled(
                    url.clone(),
                    Style::default().fg(Color::Blue),
                )));
            }
        }
        frame.render_widget(Paragraph::new(body).wrap(Wrap { trim: true }), sections[1]);

        frame.render_widget(location_lines(detail), sections[2]);

        match role {
            ViewerRole::Applicant => ApplicationForm.render(frame, sections[3], form),
            ViewerRole::Owner => frame.render_widget(
                notice("This is your property listing"),
                sections[3],
            ),
            ViewerRole::SignedOut => frame.render_widget(
                notice("Please sign in to apply for this property — press s"),
                sections[3],
            ),
        }
    }
}

fn location_lines(detail: &PropertyDetail) -> Paragraph<'static> {
    let mut lines = vec![
        Line::from(Span::styled(
            "Location",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(detail.property.address.clone()),
    ];
    if let Some((lat, lon)) = detail.coordinates {
        lines.push(Line::from(Span::styled(
            format!("{lat:.4}, {lon:.4}"),
            Style::default().fg(Color::Gray),
        )));
    }
    Paragraph::new(lines)
}

fn notice(text: &str) -> Paragraph<'static> {
    Paragraph::new(text.to_owned())
        .style(
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )
        .wrap(Wrap { trim: true })
}
