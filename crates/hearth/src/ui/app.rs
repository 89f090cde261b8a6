//! Application loop for the TUI.

use std::io;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::{Frame, Terminal};

use crate::app::applications::{ApplicationDraft, ApplicationsBoard};
use crate::app::listings::{self, PropertyDetail};
use crate::app::session::SessionStore;
use crate::app::suggest::AddressSearch;
use crate::domain::model::{ApplicationStatus, AuthSession};
use crate::infra::backend::Backend;
use crate::infra::config::Config;
use crate::infra::geocoder::Geocoder;
use crate::ui::components::application_form::ApplicationFormState;
use crate::ui::components::application_list::{ApplicationList, ApplicationListState, BoardSection};
use crate::ui::components::detail::{DetailView, ViewerRole};
use crate::ui::components::listing_form::{ListingField, ListingForm, ListingFormState};
use crate::ui::components::listing_list::{ListingList, ListingListState};

/// Primary entry point for running the interactive TUI.
pub struct UiApp {
    config: Config,
    backend: Backend,
    geocoder: Geocoder,
    session_store: SessionStore,
    session: Option<AuthSession>,
    page: Page,
    listings: ListingListState,
    listing_list: ListingList,
    detail: Option<PropertyDetail>,
    detail_view: DetailView,
    application_form: ApplicationFormState,
    listing_form: ListingFormState,
    address_search: AddressSearch,
    board: ApplicationsBoard,
    board_state: ApplicationListState,
    board_view: ApplicationList,
    signin: SignInState,
    status: Option<StatusMessage>,
    should_quit: bool,
}

impl UiApp {
    pub fn new(config: Config) -> Self {
        let backend = Backend::new(config.backend.url.as_str(), config.backend.api_key.as_str());
        let geocoder = Geocoder::new(config.geocoder.url.as_str());
        Self {
            config,
            backend,
            geocoder,
            session_store: SessionStore::for_user(),
            session: None,
            page: Page::Home,
            listings: ListingListState::default(),
            listing_list: ListingList,
            detail: None,
            detail_view: DetailView,
            application_form: ApplicationFormState::default(),
            listing_form: ListingFormState::default(),
            address_search: AddressSearch::new(),
            board: ApplicationsBoard::default(),
            board_state: ApplicationListState::default(),
            board_view: ApplicationList,
            signin: SignInState::default(),
            status: None,
            should_quit: false,
        }
    }

    /// Launch the terminal UI and enter the event loop.
    pub fn run(&mut self) -> Result<()> {
        self.bootstrap();

        enable_raw_mode().context("failed to enable raw mode")?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).context("failed to enter alternate screen")?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).context("failed to initialize terminal")?;
        terminal.hide_cursor().ok();

        let event_loop_result = self.event_loop(&mut terminal);

        disable_raw_mode().ok();
        let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
        let _ = terminal.show_cursor();

        event_loop_result
    }

    fn bootstrap(&mut self) {
        match self.session_store.load() {
            Ok(session) => self.session = session,
            Err(err) => {
                tracing::warn!(error = %err, "failed to restore session");
            }
        }
        self.refresh_properties();
    }

    fn event_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
        let tick_rate = self.config.ui.tick_rate();
        loop {
            terminal.draw(|frame| self.render(frame))?;
            self.tick();

            if self.should_quit {
                break;
            }

            if event::poll(tick_rate)? {
                let ev = event::read()?;
                self.handle_event(ev)?;
            }
        }
        Ok(())
    }

    fn tick(&mut self) {
        if let Some(status) = &self.status
            && status.is_expired()
        {
            self.status = None;
        }
        if self.page == Page::NewListing {
            self.address_search.tick(Instant::now(), &self.geocoder);
            let count = self.address_search.candidates().len();
            if count > 0 && self.listing_form.suggestion_cursor >= count {
                self.listing_form.suggestion_cursor = count - 1;
            }
        }
    }

    fn render(&mut self, frame: &mut Frame<'_>) {
        let size = frame.size();
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(3),
                Constraint::Length(2),
            ])
            .split(size);

        self.render_nav(frame, layout[0]);

        match self.page {
            Page::Home => self.render_home(frame, layout[1]),
            Page::Properties => self.render_properties(frame, layout[1]),
            Page::Detail => self.render_detail(frame, layout[1]),
            Page::NewListing => {
                self.listing_form_view().render(
                    frame,
                    layout[1],
                    &self.listing_form,
                    &self.address_search,
                );
            }
            Page::Applications => {
                self.board_view
                    .render(frame, layout[1], &self.board, &self.board_state);
            }
            Page::SignIn => self.render_signin(frame, layout[1]),
        }

        self.render_status(frame, layout[2]);
    }

    fn listing_form_view(&self) -> &ListingForm {
        static FORM: ListingForm = ListingForm;
        &FORM
    }

    fn render_nav(&self, frame: &mut Frame<'_>, area: Rect) {
        let gated = |label: &str| -> Span<'static> {
            if self.session.is_some() {
                Span::raw(label.to_owned())
            } else {
                Span::styled(label.to_owned(), Style::default().fg(Color::DarkGray))
            }
        };

        let account = match &self.session {
            Some(session) => Span::styled(
                format!("{} · [o] sign out", session.email),
                Style::default().fg(Color::Gray),
            ),
            None => Span::styled("[s] sign in", Style::default().fg(Color::Yellow)),
        };

        let nav = Paragraph::new(Line::from(vec![
            Span::styled(
                "⌂ Hearth",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  [h] home  [p] properties  "),
            gated("[n] list property  "),
            gated("[a] applications  "),
            Span::raw("· "),
            account,
        ]));
        frame.render_widget(nav, area);
    }

    fn render_home(&mut self, frame: &mut Frame<'_>, area: Rect) {
        let sections = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(4), Constraint::Min(5)])
            .split(area);

        let hero = Paragraph::new(vec![
            Line::from(Span::styled(
                "Find Your Dream Home",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(
                "Discover the perfect property from our collection of homes, \
                 apartments, and luxury estates.",
            ),
            Line::from(Span::styled(
                "↵ view details · p browse all properties",
                Style::default().fg(Color::Gray),
            )),
        ])
        .wrap(Wrap { trim: true });
        frame.render_widget(hero, sections[0]);

        let featured = self.config.ui.featured;
        self.listing_list.render(
            frame,
            sections[1],
            &self.listings,
            "Featured Properties",
            Some(featured),
        );
    }

    fn render_properties(&mut self, frame: &mut Frame<'_>, area: Rect) {
        self.listing_list
            .render(frame, area, &self.listings, "Available Properties", None);
    }

    fn render_detail(&mut self, frame: &mut Frame<'_>, area: Rect) {
        let Some(detail) = &self.detail else {
            let placeholder = Paragraph::new("Property not found")
                .style(Style::default().fg(Color::Red));
            frame.render_widget(placeholder, area);
            return;
        };
        let role = self.viewer_role(detail);
        self.detail_view
            .render(frame, area, detail, role, &self.application_form);
    }

    fn render_signin(&self, frame: &mut Frame<'_>, area: Rect) {
        let width = area.width.saturating_sub(10).min(60);
        let height = area.height.min(7);
        let popup = Rect {
            x: area.x + (area.width.saturating_sub(width)) / 2,
            y: area.y + area.height.saturating_sub(height) / 3,
            width,
            height,
        };

        let title = if self.signin.create_account {
            "Create an Account"
        } else {
            "Sign In"
        };
        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(popup);
        frame.render_widget(block, popup);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(inner);

        let masked: String = "•".repeat(self.signin.password.chars().count());
        frame.render_widget(
            credential_line(
                "Email",
                &self.signin.email,
                self.signin.focus == CredentialField::Email,
            ),
            rows[0],
        );
        frame.render_widget(
            credential_line(
                "Password",
                &masked,
                self.signin.focus == CredentialField::Password,
            ),
            rows[1],
        );

        let hints = Paragraph::new(Line::from(vec![
            Span::styled("↵", Style::default().fg(Color::Cyan)),
            Span::raw(if self.signin.create_account {
                " create account · "
            } else {
                " sign in · "
            }),
            Span::styled("ctrl+n", Style::default().fg(Color::Cyan)),
            Span::raw(" toggle sign-up · "),
            Span::styled("esc", Style::default().fg(Color::Cyan)),
            Span::raw(" back"),
        ]))
        .style(Style::default().fg(Color::Gray));
        frame.render_widget(hints, rows[3]);
    }

    fn render_status(&mut self, frame: &mut Frame<'_>, area: Rect) {
        let message = self.status.as_ref().map(|status| {
            let style = match status.level {
                StatusLevel::Info => Style::default().fg(Color::Gray),
                StatusLevel::Success => Style::default().fg(Color::Green),
                StatusLevel::Error => Style::default().fg(Color::Red),
            };
            Line::styled(status.text.clone(), style)
        });

        let block = Block::default().borders(Borders::TOP);
        frame.render_widget(block.clone(), area);
        let inner = block.inner(area);

        let line = message.unwrap_or_else(|| {
            Line::styled(
                "Ready · q quits from browse pages",
                Style::default().fg(Color::DarkGray),
            )
        });
        frame.render_widget(Paragraph::new(line), inner);
    }

    fn handle_event(&mut self, event: Event) -> Result<()> {
        match event {
            Event::Key(key) => self.handle_key_event(key)?,
            Event::Resize(..) => {}
            Event::Mouse(_) => {}
            Event::FocusGained | Event::FocusLost | Event::Paste(_) => {}
        }
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<()> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return Ok(());
        }

        match self.page {
            Page::Home | Page::Properties => self.handle_browse_key(key),
            Page::Detail => self.handle_detail_key(key),
            Page::NewListing => self.handle_new_listing_key(key),
            Page::Applications => self.handle_applications_key(key),
            Page::SignIn => self.handle_signin_key(key),
        }
        Ok(())
    }

    fn handle_browse_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                if self.page == Page::Properties && key.code == KeyCode::Esc {
                    self.page = Page::Home;
                } else {
                    self.should_quit = true;
                }
            }
            KeyCode::Char('h') => self.page = Page::Home,
            KeyCode::Char('p') => self.page = Page::Properties,
            KeyCode::Char('n') => self.open_new_listing(),
            KeyCode::Char('a') => self.open_applications(),
            KeyCode::Char('s') => {
                if self.session.is_none() {
                    self.page = Page::SignIn;
                }
            }
            KeyCode::Char('o') => self.sign_out(),
            KeyCode::Char('r') => {
                self.refresh_properties();
                self.set_status(StatusLevel::Info, "Listings refreshed");
            }
            KeyCode::Char('j') | KeyCode::Down => self.listings.select_next(),
            KeyCode::Char('k') | KeyCode::Up => self.listings.select_previous(),
            KeyCode::Enter => self.open_selected_detail(),
            _ => {}
        }
    }

    fn handle_detail_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Esc {
            self.detail = None;
            self.page = Page::Properties;
            return;
        }

        let role = match &self.detail {
            Some(detail) => self.viewer_role(detail),
            None => {
                self.page = Page::Properties;
                return;
            }
        };

        match role {
            ViewerRole::Applicant => match key.code {
                KeyCode::Tab => self.application_form.focus_next(),
                KeyCode::Enter => self.submit_application(),
                KeyCode::Backspace => self.application_form.pop_char(),
                KeyCode::Char(ch) => {
                    if !key
                        .modifiers
                        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
                    {
                        self.application_form.push_char(ch);
                    }
                }
                _ => {}
            },
            ViewerRole::SignedOut => {
                if key.code == KeyCode::Char('s') {
                    self.page = Page::SignIn;
                }
            }
            ViewerRole::Owner => {}
        }
    }

    fn handle_new_listing_key(&mut self, key: KeyEvent) {
        let address_focused = self.listing_form.focus() == ListingField::Address;
        let panel_active = address_focused
            && self.address_search.panel_visible()
            && !self.address_search.candidates().is_empty();

        match key.code {
            KeyCode::Esc => {
                if self.address_search.panel_visible() {
                    self.address_search.dismiss();
                } else {
                    self.leave_new_listing();
                }
            }
            KeyCode::Tab => {
                if address_focused {
                    self.address_search.dismiss();
                }
                self.listing_form.focus_next();
                self.on_listing_focus_changed();
            }
            KeyCode::BackTab => {
                if address_focused {
                    self.address_search.dismiss();
                }
                self.listing_form.focus_previous();
                self.on_listing_focus_changed();
            }
            KeyCode::Down if panel_active => {
                let last = self.address_search.candidates().len() - 1;
                if self.listing_form.suggestion_cursor < last {
                    self.listing_form.suggestion_cursor += 1;
                }
            }
            KeyCode::Up if panel_active => {
                self.listing_form.suggestion_cursor =
                    self.listing_form.suggestion_cursor.saturating_sub(1);
            }
            KeyCode::Enter => {
                if panel_active {
                    self.select_suggestion();
                } else {
                    self.listing_form.focus_next();
                    self.on_listing_focus_changed();
                }
            }
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.publish_listing();
            }
            KeyCode::Backspace => {
                self.listing_form.pop_char();
                if address_focused {
                    self.sync_address_query();
                }
            }
            KeyCode::Char(ch) => {
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
                {
                    self.listing_form.push_char(ch);
                    if address_focused {
                        self.sync_address_query();
                    }
                }
            }
            _ => {}
        }
    }

    fn handle_applications_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => self.page = Page::Home,
            KeyCode::Char('h') => self.page = Page::Home,
            KeyCode::Char('p') => self.page = Page::Properties,
            KeyCode::Tab => self.board_state.toggle_section(),
            KeyCode::Char('j') | KeyCode::Down => self.board_state.move_down(&self.board),
            KeyCode::Char('k') | KeyCode::Up => self.board_state.move_up(),
            KeyCode::Char('r') => self.reload_board(),
            KeyCode::Char('y') => self.decide_selected(ApplicationStatus::Approved),
            KeyCode::Char('x') => self.decide_selected(ApplicationStatus::Rejected),
            _ => {}
        }
    }

    fn handle_signin_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.page = Page::Home,
            KeyCode::Tab => self.signin.toggle_focus(),
            KeyCode::Enter => self.submit_credentials(),
            KeyCode::Backspace => {
                self.signin.field_mut().pop();
            }
            KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.signin.create_account = !self.signin.create_account;
            }
            KeyCode::Char(ch) => {
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
                {
                    self.signin.field_mut().push(ch);
                }
            }
            _ => {}
        }
    }

    fn viewer_role(&self, detail: &PropertyDetail) -> ViewerRole {
        match &self.session {
            None => ViewerRole::SignedOut,
            Some(session) if session.user_id == detail.property.owner_id => ViewerRole::Owner,
            Some(_) => ViewerRole::Applicant,
        }
    }

    fn refresh_properties(&mut self) {
        match self.backend.list_properties() {
            Ok(properties) => self.listings.set_properties(properties),
            Err(err) => {
                tracing::error!(error = %err, "failed to fetch listings");
                self.set_status(StatusLevel::Error, format!("Could not load listings: {err}"));
            }
        }
    }

    fn open_selected_detail(&mut self) {
        let Some(property) = self.listings.selected_property() else {
            return;
        };
        let id = property.id.clone();
        match listings::load_detail(&self.backend, &self.geocoder, &id) {
            Ok(detail) => {
                self.application_form = match &self.session {
                    Some(session) => {
                        ApplicationFormState::with_draft(ApplicationDraft::for_session(session))
                    }
                    None => ApplicationFormState::default(),
                };
                self.detail = Some(detail);
                self.page = Page::Detail;
            }
            Err(err) => {
                self.set_status(StatusLevel::Error, format!("Could not open listing: {err}"));
            }
        }
    }

    fn open_new_listing(&mut self) {
        if !self.require_session("list a property") {
            return;
        }
        self.listing_form.reset();
        self.address_search.cancel();
        self.page = Page::NewListing;
    }

    fn leave_new_listing(&mut self) {
        self.address_search.cancel();
        self.listing_form.reset();
        self.page = Page::Properties;
    }

    fn on_listing_focus_changed(&mut self) {
        if self.listing_form.focus() == ListingField::Address {
            self.address_search.reveal();
        }
    }

    fn sync_address_query(&mut self) {
        // A manual edit invalidates any previously picked coordinates.
        self.listing_form.draft.coordinates = None;
        self.listing_form.suggestion_cursor = 0;
        self.address_search
            .on_query_change(self.listing_form.draft.address.clone());
    }

    fn select_suggestion(&mut self) {
        if let Some(candidate) = self.address_search.select(self.listing_form.suggestion_cursor) {
            self.listing_form.draft.address = candidate.display_name.clone();
            self.listing_form.draft.coordinates =
                Some((candidate.latitude, candidate.longitude));
            self.listing_form.suggestion_cursor = 0;
        }
    }

    fn publish_listing(&mut self) {
        let Some(session) = self.session.clone() else {
            self.require_session("list a property");
            return;
        };
        let listing = match self.listing_form.draft.build(&session.user_id) {
            Ok(listing) => listing,
            Err(err) => {
                self.set_status(StatusLevel::Error, err.to_string());
                return;
            }
        };
        match self.backend.create_property(&listing, &session) {
            Ok(()) => {
                self.leave_new_listing();
                self.refresh_properties();
                self.set_status(StatusLevel::Success, format!("Listed \"{}\"", listing.title));
            }
            Err(err) => {
                self.set_status(StatusLevel::Error, format!("Could not create listing: {err}"));
            }
        }
    }

    fn submit_application(&mut self) {
        let Some(session) = self.session.clone() else {
            self.require_session("submit an application");
            return;
        };
        let Some(detail) = &self.detail else {
            return;
        };
        let application = match self
            .application_form
            .draft
            .build(&detail.property, &session)
        {
            Ok(application) => application,
            Err(err) => {
                self.set_status(StatusLevel::Error, err.to_string());
                return;
            }
        };
        match self.backend.submit_application(&application, &session) {
            Ok(()) => {
                self.application_form.clear_message();
                self.set_status(
                    StatusLevel::Success,
                    "Application sent to the property owner",
                );
            }
            Err(err) => {
                self.set_status(
                    StatusLevel::Error,
                    format!("Could not submit application: {err}"),
                );
            }
        }
    }

    fn open_applications(&mut self) {
        if !self.require_session("view applications") {
            return;
        }
        self.board_state.reset();
        self.reload_board();
        self.page = Page::Applications;
    }

    fn reload_board(&mut self) {
        let Some(session) = self.session.clone() else {
            return;
        };
        match ApplicationsBoard::load(&self.backend, &session) {
            Ok(board) => self.board = board,
            Err(err) => {
                self.set_status(
                    StatusLevel::Error,
                    format!("Could not load applications: {err}"),
                );
            }
        }
    }

    fn decide_selected(&mut self, status: ApplicationStatus) {
        if self.board_state.section() != BoardSection::Received {
            return;
        }
        let Some(session) = self.session.clone() else {
            return;
        };
        let Some(application) = self.board_state.selected(&self.board) else {
            return;
        };
        if application.status == status {
            return;
        }
        let id = application.id.clone();
        match self.board.decide(&self.backend, &session, &id, status) {
            Ok(()) => {
                self.set_status(
                    StatusLevel::Success,
                    format!("Application {}", status.as_str()),
                );
            }
            Err(err) => {
                self.set_status(
                    StatusLevel::Error,
                    format!("Could not update application: {err}"),
                );
            }
        }
    }

    fn submit_credentials(&mut self) {
        let email = self.signin.email.trim().to_owned();
        let password = self.signin.password.clone();
        if email.is_empty() || password.is_empty() {
            self.set_status(StatusLevel::Error, "Email and password are required");
            return;
        }

        let result = if self.signin.create_account {
            self.backend.sign_up(&email, &password)
        } else {
            self.backend.sign_in(&email, &password)
        };

        match result {
            Ok(session) => {
                if let Err(err) = self.session_store.save(&session) {
                    tracing::warn!(error = %err, "failed to persist session");
                }
                self.set_status(StatusLevel::Success, format!("Signed in as {}", session.email));
                self.session = Some(session);
                self.signin = SignInState::default();
                self.page = Page::Home;
            }
            Err(err) => {
                self.set_status(StatusLevel::Error, err.to_string());
            }
        }
    }

    fn sign_out(&mut self) {
        let Some(session) = self.session.take() else {
            return;
        };
        if let Err(err) = self.backend.sign_out(&session) {
            tracing::warn!(error = %err, "sign-out request failed");
        }
        if let Err(err) = self.session_store.clear() {
            tracing::warn!(error = %err, "failed to clear persisted session");
        }
        self.board = ApplicationsBoard::default();
        self.set_status(StatusLevel::Info, "Signed out");
    }

    fn require_session(&mut self, action: &'static str) -> bool {
        if self.session.is_some() {
            return true;
        }
        self.set_status(
            StatusLevel::Error,
            format!("You must be signed in to {action}"),
        );
        self.page = Page::SignIn;
        false
    }

    fn set_status<S: Into<String>>(&mut self, level: StatusLevel, message: S) {
        self.status = Some(StatusMessage::new(
            level,
            message.into(),
            self.config.ui.status_ttl(),
        ));
    }
}

fn credential_line(label: &str, value: &str, focused: bool) -> Paragraph<'static> {
    let label_style = if focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    let mut spans = vec![
        Span::styled(format!("{label:<10} "), label_style),
        Span::raw(value.to_owned()),
    ];
    if focused {
        spans.push(Span::styled("▏", Style::default().fg(Color::Cyan)));
    }
    Paragraph::new(Line::from(spans))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Page {
    Home,
    Properties,
    Detail,
    NewListing,
    Applications,
    SignIn,
}

#[derive(Debug, Default)]
struct SignInState {
    email: String,
    password: String,
    focus: CredentialField,
    create_account: bool,
}

impl SignInState {
    fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            CredentialField::Email => CredentialField::Password,
            CredentialField::Password => CredentialField::Email,
        };
    }

    fn field_mut(&mut self) -> &mut String {
        match self.focus {
            CredentialField::Email => &mut self.email,
            CredentialField::Password => &mut self.password,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum CredentialField {
    #[default]
    Email,
    Password,
}

#[derive(Debug)]
struct StatusMessage {
    level: StatusLevel,
    text: String,
    expires_at: Instant,
}

impl StatusMessage {
    fn new(level: StatusLevel, text: String, ttl: Duration) -> Self {
        Self {
            level,
            text,
            expires_at: Instant::now() + ttl,
        }
    }

    fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

#[derive(Debug, Clone, Copy)]
enum StatusLevel {
    Info,
    Success,
    Error,
}
