// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Baseconv-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Baseconv and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Terminal UI.
//!
//! Provides the interactive converter shell (ratatui + crossterm): the common-bases table, the side
//! menu, settings, alerts and the ad overlays.

use std::{
    error::Error,
    io,
    time::{Duration, Instant},
};

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
};

use crate::config::{share_message, AppConfig, APP_NAME, PAID_APP_ID, UPGRADE_MESSAGE};
use crate::model::Radix;
use crate::services::{AdEvent, MailDraft, Platform};
use crate::store::{PreferenceStore, Preferences, MAX_DECIMAL_PLACES};
use crate::sync::ConverterSession;
use crate::ui::FieldTable;

mod theme;

use theme::TuiTheme;

const FOOTER_BRAND: &str = "🅱 🅰 🆂 🅴 ";
const TOAST_TTL: Duration = Duration::from_secs(2);
const TICK: Duration = Duration::from_millis(250);

/// Runs the interactive terminal UI until the user quits.
///
/// `store` is where settings are saved and re-read at the reload points; without it settings only
/// live for this run.
pub fn run(
    config: AppConfig,
    store: Option<PreferenceStore>,
    platform: Platform,
) -> Result<(), Box<dyn Error>> {
    let mut terminal = TerminalSession::new()?;
    let mut app = App::new(config, store, platform);

    while !app.should_quit {
        app.poll_ads();
        terminal.draw(|frame| draw(frame, &mut app))?;

        if event::poll(TICK)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                _ => {}
            }
        }
    }

    Ok(())
}

fn draw(frame: &mut Frame<'_>, app: &mut App) {
    let area = frame.area();
    app.expire_toast();
    frame.render_widget(Block::default().style(app.theme.base_style()), area);

    let banner_height = if app.banner.is_some() { 3 } else { 0 };
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(banner_height),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);
    let banner_area = layout[0];
    let main_area = layout[1];
    let status_area = layout[2];

    if let Some(headline) = app.banner.as_deref() {
        render_banner(frame, &app.theme, headline, banner_area);
    }
    render_common_bases(frame, app, main_area);

    match app.screen {
        Screen::Converter => {}
        Screen::Menu => render_menu(frame, app, main_area),
        Screen::Settings => render_settings(frame, app, main_area),
    }

    match &app.modal {
        Some(Modal::Alert(alert)) => render_alert(frame, &app.theme, alert, main_area),
        Some(Modal::Interstitial { headline }) => {
            render_interstitial(frame, &app.theme, headline, main_area)
        }
        None => {}
    }

    if app.show_help {
        render_help(frame, &app.theme, main_area);
    }

    let brand_width = FOOTER_BRAND.chars().count() as u16;
    let footer = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(brand_width)])
        .split(status_area);
    let toast = app.toast.as_ref().map(|toast| toast.message.as_str()).unwrap_or("");
    frame.render_widget(
        Paragraph::new(footer_help_line(app, toast)).style(app.theme.base_style()),
        footer[0],
    );
    frame.render_widget(
        Paragraph::new(footer_brand_line(&app.theme)).style(app.theme.base_style()),
        footer[1],
    );
}

fn render_common_bases(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let focused = app.screen == Screen::Converter && app.modal.is_none();
    let last_source = app.session.last_source();

    let mut lines = Vec::<Line<'static>>::new();
    for radix in Radix::ALL {
        let selected = radix == app.fields.focused();
        let marker = if last_source == Some(radix) { "•" } else { " " };
        let label_style = if selected {
            app.theme.selection_style()
        } else {
            app.theme.label_style()
        };

        let mut spans = vec![
            Span::styled(format!("{marker}{:<4}", radix.label()), label_style),
            Span::raw(" "),
            Span::styled(app.fields.text(radix).to_owned(), app.theme.base_style()),
        ];
        if selected && focused {
            spans.push(Span::styled("▏", app.theme.accent_style()));
        }
        lines.push(Line::from(spans));
        lines.push(Line::default());
    }

    let paragraph = Paragraph::new(Text::from(lines))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {APP_NAME} "))
                .border_style(app.theme.panel_border_style(focused)),
        )
        .style(app.theme.base_style())
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Screen {
    Converter,
    Menu,
    Settings,
}

/// Entries of the side menu, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MenuAction {
    Settings,
    Feedback,
    Rate,
    Share,
    Close,
}

impl MenuAction {
    const ALL: [MenuAction; 5] = [
        MenuAction::Settings,
        MenuAction::Feedback,
        MenuAction::Rate,
        MenuAction::Share,
        MenuAction::Close,
    ];

    fn label(self) -> &'static str {
        match self {
            MenuAction::Settings => "Settings",
            MenuAction::Feedback => "Send feedback",
            MenuAction::Rate => "Rate app",
            MenuAction::Share => "Share app",
            MenuAction::Close => "Close",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SettingsRow {
    Theme,
    DecimalPlaces,
}

impl SettingsRow {
    fn toggle(self) -> Self {
        match self {
            SettingsRow::Theme => SettingsRow::DecimalPlaces,
            SettingsRow::DecimalPlaces => SettingsRow::Theme,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AlertButton {
    Done,
    Upgrade,
}

impl AlertButton {
    fn label(self) -> &'static str {
        match self {
            AlertButton::Done => "Done",
            AlertButton::Upgrade => "Upgrade",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Alert {
    title: String,
    message: String,
    buttons: Vec<AlertButton>,
    selected: usize,
}

impl Alert {
    fn upgrade() -> Self {
        Self {
            title: APP_NAME.to_owned(),
            message: UPGRADE_MESSAGE.to_owned(),
            buttons: vec![AlertButton::Done, AlertButton::Upgrade],
            selected: 0,
        }
    }

    fn notice(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            buttons: vec![AlertButton::Done],
            selected: 0,
        }
    }

    fn selected_button(&self) -> AlertButton {
        self.buttons.get(self.selected).copied().unwrap_or(AlertButton::Done)
    }

    fn cycle(&mut self) {
        self.selected = (self.selected + 1) % self.buttons.len().max(1);
    }

    pub(crate) fn title(&self) -> &str {
        &self.title
    }

    pub(crate) fn buttons(&self) -> &[AlertButton] {
        &self.buttons
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Modal {
    Alert(Alert),
    Interstitial { headline: String },
}

#[derive(Debug, Clone)]
struct Toast {
    message: String,
    expires_at: Instant,
}

struct App {
    config: AppConfig,
    store: Option<PreferenceStore>,
    platform: Platform,
    theme: TuiTheme,
    session: ConverterSession,
    fields: FieldTable,
    screen: Screen,
    menu_selected: usize,
    settings_row: SettingsRow,
    modal: Option<Modal>,
    banner: Option<String>,
    toast: Option<Toast>,
    show_help: bool,
    should_quit: bool,
}

impl App {
    fn new(config: AppConfig, store: Option<PreferenceStore>, platform: Platform) -> Self {
        let theme = TuiTheme::for_preference(config.preferences.light_theme);
        let session = ConverterSession::new(config.sync);
        let mut app = Self {
            config,
            store,
            platform,
            theme,
            session,
            fields: FieldTable::default(),
            screen: Screen::Converter,
            menu_selected: 0,
            settings_row: SettingsRow::Theme,
            modal: None,
            banner: None,
            toast: None,
            show_help: false,
            should_quit: false,
        };
        app.fields.show(app.session.bases());
        app.request_ads();
        app
    }

    fn request_ads(&mut self) {
        if !self.config.edition.shows_ads() {
            return;
        }
        tracing::info!("requesting banner and interstitial");
        self.platform.ads.load_banner();
        self.platform.ads.load_interstitial();
    }

    /// Drains finished ad loads. Never blocks.
    fn poll_ads(&mut self) {
        while let Some(event) = self.platform.ads.poll_event() {
            match event {
                AdEvent::BannerLoaded { unit_id, headline } => {
                    tracing::info!(%unit_id, "banner loaded");
                    self.banner = Some(headline);
                }
                AdEvent::BannerFailed { reason } => {
                    tracing::warn!(%reason, "banner failed to load");
                }
                AdEvent::InterstitialLoaded { unit_id, headline } => {
                    tracing::info!(%unit_id, "interstitial loaded");
                    self.modal = Some(Modal::Interstitial { headline });
                }
                AdEvent::InterstitialFailed { reason } => {
                    tracing::warn!(%reason, "interstitial failed to load");
                    self.show_upgrade_alert();
                }
            }
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }
        self.handle_key_code(key.code);
    }

    /// Returns whether the key was consumed.
    fn handle_key_code(&mut self, code: KeyCode) -> bool {
        if self.show_help {
            match code {
                KeyCode::Char('?') | KeyCode::Esc => self.show_help = false,
                KeyCode::Char('q') => self.should_quit = true,
                _ => {}
            }
            return true;
        }

        if self.modal.is_some() {
            return self.handle_modal_key(code);
        }

        match self.screen {
            Screen::Converter => self.handle_converter_key(code),
            Screen::Menu => self.handle_menu_key(code),
            Screen::Settings => self.handle_settings_key(code),
        }
    }

    fn handle_converter_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('?') => self.show_help = true,
            KeyCode::Char('m') | KeyCode::Esc => self.open_menu(),
            KeyCode::Char('s') => self.open_settings(),
            KeyCode::Char('r') => self.refresh(),
            KeyCode::Char('y') => self.copy_focused(),
            KeyCode::Up | KeyCode::BackTab => self.fields.focus_prev(),
            KeyCode::Down | KeyCode::Tab | KeyCode::Enter => self.fields.focus_next(),
            KeyCode::Backspace => {
                let mut candidate = self.fields.text(self.fields.focused()).to_owned();
                if candidate.pop().is_none() {
                    return true;
                }
                self.edit_focused(candidate);
            }
            KeyCode::Delete => self.edit_focused(String::new()),
            KeyCode::Char(ch) => {
                let mut candidate = self.fields.text(self.fields.focused()).to_owned();
                candidate.push(ch);
                self.edit_focused(candidate);
            }
            _ => return false,
        }
        true
    }

    fn edit_focused(&mut self, candidate: String) {
        let event = self.fields.user_edit(self.fields.focused(), candidate);
        match self.session.on_field_edited(event.radix, &event.text) {
            Ok(bases) => self.fields.show(bases),
            Err(err) => self.set_toast(err.to_string()),
        }
    }

    fn refresh(&mut self) {
        let bases = self.session.on_clear();
        self.fields.show(bases);
    }

    fn copy_focused(&mut self) {
        let radix = self.fields.focused();
        let text = self.fields.text(radix).to_owned();
        if text.is_empty() {
            self.set_toast(format!("{radix} is empty"));
            return;
        }
        match self.platform.clipboard.copy(&text) {
            Ok(backend) => {
                tracing::debug!(%radix, backend, "copied field");
                self.set_toast(format!("Copied {radix}"));
            }
            Err(err) => self.set_toast(format!("Clipboard error: {err}")),
        }
    }

    fn open_menu(&mut self) {
        tracing::debug!("menu opened");
        self.menu_selected = 0;
        self.screen = Screen::Menu;
    }

    fn handle_menu_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.menu_selected = self.menu_selected.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.menu_selected = (self.menu_selected + 1).min(MenuAction::ALL.len() - 1);
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.dispatch_menu_action(MenuAction::ALL[self.menu_selected]);
            }
            KeyCode::Esc | KeyCode::Char('m') => self.dispatch_menu_action(MenuAction::Close),
            KeyCode::Char('q') => self.should_quit = true,
            _ => return false,
        }
        true
    }

    fn dispatch_menu_action(&mut self, action: MenuAction) {
        tracing::debug!(?action, "menu action");
        match action {
            MenuAction::Settings => self.open_settings(),
            MenuAction::Feedback => self.send_feedback(),
            MenuAction::Rate => {
                let app_id = self.config.store_app_id();
                self.rate(app_id);
            }
            MenuAction::Share => self.share(),
            MenuAction::Close => {
                self.screen = Screen::Converter;
                self.reload_preferences();
                self.show_upgrade_alert();
            }
        }
    }

    fn send_feedback(&mut self) {
        if !self.platform.mail.can_send_mail() {
            tracing::warn!("no mail client available");
            self.modal = Some(Modal::Alert(Alert::notice(
                "Mail services are not available",
                "",
            )));
            return;
        }
        if let Err(err) = self.platform.mail.compose(&MailDraft::feedback()) {
            tracing::warn!(%err, "feedback mail failed");
            self.set_toast(format!("Mail error: {err}"));
        }
    }

    fn rate(&mut self, app_id: &str) {
        match self.platform.rating.rate(app_id) {
            Ok(()) => tracing::info!(app_id, "rating page opened"),
            Err(err) => {
                tracing::warn!(app_id, %err, "rating failed");
                self.set_toast(format!("Rating failed: {err}"));
            }
        }
    }

    fn share(&mut self) {
        let message = share_message(self.config.store_app_id());
        match self.platform.share.share(&message) {
            Ok(backend) => {
                tracing::debug!(backend, "shared app link");
                self.set_toast("Share link copied");
            }
            Err(err) => self.set_toast(format!("Share failed: {err}")),
        }
    }

    fn open_settings(&mut self) {
        tracing::debug!("settings opened");
        self.settings_row = SettingsRow::Theme;
        self.screen = Screen::Settings;
    }

    fn handle_settings_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Up | KeyCode::Down | KeyCode::Tab | KeyCode::BackTab => {
                self.settings_row = self.settings_row.toggle();
            }
            KeyCode::Left => self.adjust_setting(-1),
            KeyCode::Right => self.adjust_setting(1),
            KeyCode::Enter | KeyCode::Char(' ') if self.settings_row == SettingsRow::Theme => {
                self.adjust_setting(1)
            }
            KeyCode::Esc | KeyCode::Char('s') => {
                self.screen = Screen::Converter;
                self.reload_preferences();
            }
            KeyCode::Char('q') => self.should_quit = true,
            _ => return false,
        }
        true
    }

    fn adjust_setting(&mut self, delta: i16) {
        let mut preferences = self.config.preferences;
        match self.settings_row {
            SettingsRow::Theme => preferences.light_theme = !preferences.light_theme,
            SettingsRow::DecimalPlaces => {
                let places = i16::from(preferences.decimal_places) + delta;
                preferences.decimal_places =
                    places.clamp(0, i16::from(MAX_DECIMAL_PLACES)) as u8;
            }
        }
        if self.config.apply_preferences(preferences) {
            self.save_preferences(preferences);
        }
    }

    fn save_preferences(&mut self, preferences: Preferences) {
        let Some(store) = self.store.as_ref() else {
            return;
        };
        match store.save(&preferences) {
            Ok(()) => tracing::info!(path = %store.path().display(), "preferences saved"),
            Err(err) => {
                tracing::warn!(%err, "saving preferences failed");
                self.set_toast(format!("Saving settings failed: {err}"));
            }
        }
    }

    /// Re-reads preferences and re-applies theme and sync options.
    fn reload_preferences(&mut self) {
        if let Some(store) = self.store.as_ref() {
            if let Err(err) = self.config.reload_preferences(store) {
                tracing::warn!(%err, "reloading preferences failed");
                self.set_toast(format!("Reloading settings failed: {err}"));
            }
        }
        self.theme = TuiTheme::for_preference(self.config.preferences.light_theme);
        if self.session.options() != self.config.sync {
            self.session.reconfigure(self.config.sync);
        }
    }

    fn show_upgrade_alert(&mut self) {
        if !self.config.edition.shows_ads() {
            return;
        }
        self.modal = Some(Modal::Alert(Alert::upgrade()));
    }

    fn handle_modal_key(&mut self, code: KeyCode) -> bool {
        let Some(modal) = self.modal.as_mut() else {
            return false;
        };

        match modal {
            Modal::Interstitial { .. } => match code {
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('q') => {
                    tracing::debug!("interstitial dismissed");
                    self.modal = None;
                    self.show_upgrade_alert();
                }
                _ => return false,
            },
            Modal::Alert(alert) => match code {
                KeyCode::Left | KeyCode::Right | KeyCode::Tab | KeyCode::BackTab => alert.cycle(),
                KeyCode::Enter | KeyCode::Char(' ') => {
                    let button = alert.selected_button();
                    self.press_alert_button(button);
                }
                KeyCode::Esc | KeyCode::Char('d') => self.press_alert_button(AlertButton::Done),
                KeyCode::Char('u') if alert.buttons.contains(&AlertButton::Upgrade) => {
                    self.press_alert_button(AlertButton::Upgrade)
                }
                _ => return false,
            },
        }
        true
    }

    fn press_alert_button(&mut self, button: AlertButton) {
        self.modal = None;
        if button == AlertButton::Upgrade {
            self.rate(PAID_APP_ID);
        }
    }

    fn set_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast {
            message: message.into(),
            expires_at: Instant::now() + TOAST_TTL,
        });
    }

    fn expire_toast(&mut self) {
        if self
            .toast
            .as_ref()
            .is_some_and(|toast| Instant::now() >= toast.expires_at)
        {
            self.toast = None;
        }
    }
}

include!("chrome.rs");

struct TerminalSession {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self, Box<dyn Error>> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).map_err(|err| {
            teardown_terminal();
            err
        })?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).map_err(|err| {
            teardown_terminal();
            err
        })?;
        terminal.clear().map_err(|err| {
            teardown_terminal();
            err
        })?;
        terminal.hide_cursor().map_err(|err| {
            teardown_terminal();
            err
        })?;

        Ok(Self { terminal })
    }

    fn draw(&mut self, draw_fn: impl FnOnce(&mut Frame<'_>)) -> io::Result<()> {
        self.terminal.draw(draw_fn)?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        teardown_terminal();
    }
}

fn teardown_terminal() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = execute!(stdout, LeaveAlternateScreen);
}


#[cfg(test)]
mod tests;
