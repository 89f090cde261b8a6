//! Contact form for applying to a listing.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::app::applications::ApplicationDraft;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ApplicationField {
    #[default]
    Email,
    Phone,
    Message,
}

const FIELD_ORDER: [ApplicationField; 3] = [
    ApplicationField::Email,
    ApplicationField::Phone,
    ApplicationField::Message,
];

/// Interactive state backing the application form.
#[derive(Debug, Default, Clone)]
pub struct ApplicationFormState {
    pub draft: ApplicationDraft,
    focus: ApplicationField,
}

impl ApplicationFormState {
    pub fn with_draft(draft: ApplicationDraft) -> Self {
        Self {
            draft,
            focus: ApplicationField::default(),
        }
    }

    pub fn focus(&self) -> ApplicationField {
        self.focus
    }

    pub fn focus_next(&mut self) {
        let index = FIELD_ORDER
            .iter()
            .position(|field| *field == self.focus)
            .unwrap_or(0);
        self.focus = FIELD_ORDER[(index + 1) % FIELD_ORDER.len()];
    }

    pub fn push_char(&mut self, ch: char) {
        self.field_mut().push(ch);
    }

    pub fn pop_char(&mut self) {
        self.field_mut().pop();
    }

    /// Keep the contact email, drop the rest (after a submission).
    pub fn clear_message(&mut self) {
        self.draft.phone.clear();
        self.draft.message.clear();
        self.focus = ApplicationField::default();
    }

    fn field_mut(&mut self) -> &mut String {
        match self.focus {
            ApplicationField::Email => &mut self.draft.email,
            ApplicationField::Phone => &mut self.draft.phone,
            ApplicationField::Message => &mut self.draft.message,
        }
    }
}

/// Visual component rendering the application form.
#[derive(Debug, Default)]
pub struct ApplicationForm;

impl ApplicationForm {
    pub fn render(&self, frame: &mut Frame<'_>, area: Rect, state: &ApplicationFormState) {
        let block = Block::default()
            .title("Apply for this Property")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(1),
                Constraint::Length(1),
            ])
            .split(inner);

        frame.render_widget(
            input_line("Email", &state.draft.email, state.focus() == ApplicationField::Email),
            rows[0],
        );
        frame.render_widget(
            input_line("Phone", &state.draft.phone, state.focus() == ApplicationField::Phone),
            rows[1],
        );
        frame.render_widget(
            input_line(
                "Message",
                &state.draft.message,
                state.focus() == ApplicationField::Message,
            )
            .wrap(Wrap { trim: false }),
            rows[2],
        );

        let hints = Paragraph::new(Line::from(vec![
            Span::styled("tab", Style::default().fg(Color::Cyan)),
            Span::raw(" next field · "),
            Span::styled("↵", Style::default().fg(Color::Cyan)),
            Span::raw(" submit application"),
        ]))
        .style(Style::default().fg(Color::Gray));
        frame.render_widget(hints, rows[3]);
    }
}

fn input_line(label: &str, value: &str, focused: bool) -> Paragraph<'static> {
    let label_style = if focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    let mut spans = vec![
        Span::styled(format!("{label:<8} "), label_style),
        Span::raw(value.to_owned()),
    ];
    if focused {
        spans.push(Span::styled("▏", Style::default().fg(Color::Cyan)));
    }
    Paragraph::new(Line::from(spans))
}
