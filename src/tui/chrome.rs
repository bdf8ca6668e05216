// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Baseconv-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Baseconv and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

const MENU_WIDTH: u16 = 26;

fn footer_help_line(app: &App, toast_message: &str) -> Line<'static> {
    let theme = &app.theme;
    let mut spans = Vec::<Span<'static>>::new();

    if app.show_help {
        push_footer_entry(&mut spans, theme, "CLOSE", "?/Esc");
    } else if let Some(modal) = &app.modal {
        match modal {
            Modal::Interstitial { .. } => push_footer_entry(&mut spans, theme, "CLOSE AD", "Esc"),
            Modal::Alert(alert) => {
                push_footer_entry(&mut spans, theme, "BUTTON", "←/→");
                push_footer_entry(&mut spans, theme, "PRESS", "Enter");
                push_footer_entry(&mut spans, theme, "DONE", "Esc");
                if alert.buttons().contains(&AlertButton::Upgrade) {
                    push_footer_entry(&mut spans, theme, "UPGRADE", "u");
                }
            }
        }
    } else {
        match app.screen {
            Screen::Converter => {
                push_footer_entry(&mut spans, theme, "FIELD", "↑/↓");
                push_footer_entry(&mut spans, theme, "CLEAR", "r");
                push_footer_entry(&mut spans, theme, "COPY", "y");
                push_footer_entry(&mut spans, theme, "MENU", "m");
                push_footer_entry(&mut spans, theme, "SETTINGS", "s");
                push_footer_entry(&mut spans, theme, "HELP", "?");
                push_footer_entry(&mut spans, theme, "QUIT", "q");
            }
            Screen::Menu => {
                push_footer_entry(&mut spans, theme, "SELECT", "↑/↓");
                push_footer_entry(&mut spans, theme, "OPEN", "Enter");
                push_footer_entry(&mut spans, theme, "CLOSE", "Esc");
            }
            Screen::Settings => {
                push_footer_entry(&mut spans, theme, "ROW", "↑/↓");
                push_footer_entry(&mut spans, theme, "CHANGE", "←/→");
                push_footer_entry(&mut spans, theme, "BACK", "Esc");
            }
        }
    }

    if !toast_message.is_empty() {
        spans.push(Span::styled(" | ".to_owned(), theme.muted_style()));
        spans.push(Span::styled(toast_message.to_owned(), theme.error_style()));
    }

    Line::from(spans)
}

fn footer_brand_line(theme: &TuiTheme) -> Line<'static> {
    Line::from(vec![Span::styled(FOOTER_BRAND.to_owned(), theme.accent_style())])
}

fn centered_rect(width_percent: u16, height_percent: u16, area: Rect) -> Rect {
    let vertical_margin = (100u16.saturating_sub(height_percent)) / 2;
    let horizontal_margin = (100u16.saturating_sub(width_percent)) / 2;

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(vertical_margin),
            Constraint::Percentage(height_percent),
            Constraint::Percentage(vertical_margin),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(horizontal_margin),
            Constraint::Percentage(width_percent),
            Constraint::Percentage(horizontal_margin),
        ])
        .split(vertical[1])[1]
}

fn render_banner(frame: &mut Frame<'_>, theme: &TuiTheme, headline: &str, area: Rect) {
    let banner = Paragraph::new(Line::from(Span::styled(headline.to_owned(), theme.accent_style())))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Ad ")
                .border_style(theme.muted_style()),
        )
        .style(theme.base_style());
    frame.render_widget(banner, area);
}

/// Side menu docked to the left edge of the converter.
fn render_menu(frame: &mut Frame<'_>, app: &App, main_area: Rect) {
    let width = MENU_WIDTH.min(main_area.width);
    let area = Rect { width, ..main_area };
    frame.render_widget(Clear, area);

    let items = MenuAction::ALL
        .iter()
        .map(|action| ListItem::new(action.label()))
        .collect::<Vec<_>>();
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Menu ")
                .border_style(app.theme.panel_border_style(app.modal.is_none())),
        )
        .style(app.theme.base_style())
        .highlight_style(app.theme.selection_style())
        .highlight_symbol("› ");

    let mut state = ListState::default().with_selected(Some(app.menu_selected));
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_settings(frame: &mut Frame<'_>, app: &App, main_area: Rect) {
    let area = centered_rect(60, 50, main_area);
    frame.render_widget(Clear, area);

    let theme = &app.theme;
    let preferences = app.config.preferences;
    let row_style = |row: SettingsRow| {
        if app.settings_row == row {
            theme.selection_style()
        } else {
            theme.base_style()
        }
    };
    let theme_label = if preferences.light_theme { "Light" } else { "Dark" };

    let lines = vec![
        Line::from(vec![
            Span::styled(format!("{:<16}", "Theme"), row_style(SettingsRow::Theme)),
            Span::raw(" "),
            Span::styled(format!("‹ {theme_label} ›"), theme.accent_style()),
        ]),
        Line::default(),
        Line::from(vec![
            Span::styled(
                format!("{:<16}", "Decimal places"),
                row_style(SettingsRow::DecimalPlaces),
            ),
            Span::raw(" "),
            Span::styled(
                format!("‹ {:>2} ›", preferences.decimal_places),
                theme.accent_style(),
            ),
        ]),
        Line::default(),
        Line::from(Span::styled(
            format!("Decimal places range 0..={MAX_DECIMAL_PLACES}."),
            theme.muted_style(),
        )),
    ];

    let paragraph = Paragraph::new(Text::from(lines))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Settings ")
                .border_style(theme.panel_border_style(app.modal.is_none())),
        )
        .style(theme.base_style())
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn render_alert(frame: &mut Frame<'_>, theme: &TuiTheme, alert: &Alert, main_area: Rect) {
    let area = centered_rect(60, 40, main_area);
    frame.render_widget(Clear, area);

    let mut lines = vec![Line::from(Span::styled(
        alert.title().to_owned(),
        theme.label_style(),
    ))];
    if !alert.message.is_empty() {
        lines.push(Line::default());
        lines.push(Line::from(alert.message.clone()));
    }
    lines.push(Line::default());

    let mut buttons = Vec::<Span<'static>>::new();
    for (idx, button) in alert.buttons().iter().enumerate() {
        if idx > 0 {
            buttons.push(Span::raw("   "));
        }
        let style = if idx == alert.selected {
            theme.selection_style()
        } else {
            theme.accent_style()
        };
        buttons.push(Span::styled(format!("[ {} ]", button.label()), style));
    }
    lines.push(Line::from(buttons).alignment(Alignment::Center));

    let paragraph = Paragraph::new(Text::from(lines))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.accent_style()),
        )
        .style(theme.base_style())
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn render_interstitial(frame: &mut Frame<'_>, theme: &TuiTheme, headline: &str, main_area: Rect) {
    frame.render_widget(Clear, main_area);

    let top_pad = main_area.height.saturating_sub(6) / 2;
    let mut lines = vec![Line::default(); usize::from(top_pad)];
    lines.push(Line::from(Span::styled("Advertisement", theme.muted_style())));
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(headline.to_owned(), theme.label_style())));
    lines.push(Line::default());
    lines.push(Line::from(Span::styled("Esc to close", theme.muted_style())));

    let paragraph = Paragraph::new(Text::from(lines))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.accent_style()),
        )
        .style(theme.base_style())
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, main_area);
}

fn help_kv(key: &str, desc: &str, key_width: usize, key_style: Style) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{key:>width$}", width = key_width), key_style),
        Span::raw("  "),
        Span::raw(desc.to_owned()),
    ])
}

fn render_help(frame: &mut Frame<'_>, theme: &TuiTheme, main_area: Rect) {
    let area = centered_rect(70, 80, main_area);
    frame.render_widget(Clear, area);

    let key_style = theme.label_style();
    let header_style = theme.base_style().add_modifier(Modifier::BOLD);
    const ENTRIES: [(&str, &str); 11] = [
        ("0-9 a-f", "Type into the focused field"),
        ("Backspace", "Remove the last digit"),
        ("Delete", "Clear the focused field"),
        ("↑/↓ Tab", "Focus previous/next field"),
        ("r", "Refresh (clear all fields)"),
        ("y", "Copy the focused field"),
        ("m/Esc", "Open the menu"),
        ("s", "Settings"),
        ("?", "Help (toggle)"),
        ("q", "Quit"),
        ("Ctrl-C", "Quit from anywhere"),
    ];
    let key_col_width = ENTRIES
        .iter()
        .map(|(key, _)| key.chars().count())
        .max()
        .unwrap_or(0);

    let mut lines = vec![
        Line::from(Span::styled("--- Common bases ---", header_style)),
        Line::default(),
    ];
    lines.extend(
        ENTRIES
            .iter()
            .map(|(key, desc)| help_kv(key, desc, key_col_width, key_style)),
    );
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "Each field accepts only its own digits; hex takes a-f in either case.",
        theme.muted_style(),
    )));

    let paragraph = Paragraph::new(Text::from(lines))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Help ")
                .border_style(theme.accent_style()),
        )
        .style(theme.base_style())
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn push_footer_entry(spans: &mut Vec<Span<'static>>, theme: &TuiTheme, label: &str, value: &str) {
    if !spans.is_empty() {
        spans.push(Span::styled(" | ".to_owned(), theme.muted_style()));
    }
    spans.push(Span::styled(
        format!("{}:", footer_label_ucfirst(label)),
        theme.muted_style(),
    ));
    spans.push(Span::styled(
        value.to_owned(),
        theme.accent_style().add_modifier(Modifier::BOLD),
    ));
}

fn footer_label_ucfirst(label: &str) -> String {
    let lower = label.to_lowercase();
    let mut chars = lower.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let mut out = first.to_uppercase().collect::<String>();
    out.push_str(chars.as_str());
    out
}
