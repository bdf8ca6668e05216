// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Baseconv-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Baseconv and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::env;

use ratatui::style::{Color, Modifier, Style};
use thiserror::Error;

const PALETTE_ENV: &str = "BASECONV_TUI_PALETTE";

const DEEP_BLUE: Color = Color::Rgb(0x0b, 0x3d, 0x91);
const ORANGE: Color = Color::Rgb(0xff, 0x95, 0x00);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct TuiPalette {
    fg: Color,
    bg: Color,
    accent: Color,
}

impl TuiPalette {
    const CSV_LEN: usize = 3;

    pub(crate) fn light() -> Self {
        Self {
            fg: Color::Black,
            bg: Color::White,
            accent: DEEP_BLUE,
        }
    }

    pub(crate) fn dark() -> Self {
        Self {
            fg: Color::White,
            bg: Color::Black,
            accent: ORANGE,
        }
    }

    fn parse_csv(value: &str) -> Result<Self, String> {
        let parts: Vec<&str> = value.split(',').map(|part| part.trim()).collect();
        if parts.len() != Self::CSV_LEN {
            return Err(format!(
                "expected {} comma-separated colors (fg,bg,accent), got {}",
                Self::CSV_LEN,
                parts.len()
            ));
        }

        Ok(Self {
            fg: parse_palette_color(parts[0])?,
            bg: parse_palette_color(parts[1])?,
            accent: parse_palette_color(parts[2])?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TuiTheme {
    light: bool,
    palette: TuiPalette,
}

impl Default for TuiTheme {
    fn default() -> Self {
        Self::new(true)
    }
}

impl TuiTheme {
    pub(crate) fn new(light: bool) -> Self {
        let palette = if light {
            TuiPalette::light()
        } else {
            TuiPalette::dark()
        };
        Self { light, palette }
    }

    /// The light/dark theme, unless `BASECONV_TUI_PALETTE` overrides the colors.
    ///
    /// An unusable override is logged and ignored.
    pub(crate) fn for_preference(light: bool) -> Self {
        let mut theme = Self::new(light);
        match palette_override_from_env() {
            Ok(Some(palette)) => theme.palette = palette,
            Ok(None) => {}
            Err(err) => tracing::warn!("{err}"),
        }
        theme
    }

    pub(crate) fn is_light(&self) -> bool {
        self.light
    }

    pub(crate) fn base_style(&self) -> Style {
        Style::default().fg(self.palette.fg).bg(self.palette.bg)
    }

    pub(crate) fn accent_style(&self) -> Style {
        self.base_style().fg(self.palette.accent)
    }

    pub(crate) fn label_style(&self) -> Style {
        self.accent_style().add_modifier(Modifier::BOLD)
    }

    pub(crate) fn muted_style(&self) -> Style {
        self.base_style().fg(Color::DarkGray)
    }

    pub(crate) fn panel_border_style(&self, focused: bool) -> Style {
        if focused {
            self.accent_style()
        } else {
            self.base_style()
        }
    }

    pub(crate) fn selection_style(&self) -> Style {
        self.base_style()
            .fg(self.palette.bg)
            .bg(self.palette.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub(crate) fn error_style(&self) -> Style {
        self.base_style().fg(Color::Red)
    }
}

fn palette_override_from_env() -> Result<Option<TuiPalette>, ThemeError> {
    let value = match env::var(PALETTE_ENV) {
        Ok(value) => value,
        Err(env::VarError::NotPresent) => return Ok(None),
        Err(env::VarError::NotUnicode(_)) => {
            return Err(ThemeError::InvalidEnv {
                name: PALETTE_ENV.to_owned(),
                value: "<non-unicode>".to_owned(),
            });
        }
    };

    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let parsed = TuiPalette::parse_csv(trimmed).map_err(|error| ThemeError::InvalidEnv {
        name: PALETTE_ENV.to_owned(),
        value: format!("{trimmed} ({error})"),
    })?;

    Ok(Some(parsed))
}

/// Parses `#RRGGBB`, `0xRRGGBB`, bare `RRGGBB` or xterm-style `rgb:RR/GG/BB`.
fn parse_palette_color(value: &str) -> Result<Color, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err("empty color".to_owned());
    }

    let lower = trimmed.to_ascii_lowercase();
    if let Some(rest) = lower.strip_prefix("rgb:") {
        let channels = rest
            .split('/')
            .map(parse_hex_channel)
            .collect::<Result<Vec<u8>, String>>()?;
        let [r, g, b] = channels[..] else {
            return Err(format!("invalid rgb: value: {trimmed}"));
        };
        return Ok(Color::Rgb(r, g, b));
    }

    let hex = lower
        .strip_prefix('#')
        .or_else(|| lower.strip_prefix("0x"))
        .unwrap_or(&lower);
    if hex.len() != 6 || !hex.chars().all(|ch| ch.is_ascii_hexdigit()) {
        return Err(format!("invalid hex color: {trimmed} (expected #RRGGBB)"));
    }
    let rgb = u32::from_str_radix(hex, 16).map_err(|_| format!("invalid hex color: {trimmed}"))?;
    Ok(Color::Rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8))
}

fn parse_hex_channel(value: &str) -> Result<u8, String> {
    let value = value.trim();
    match value.len() {
        2 => u8::from_str_radix(value, 16).map_err(|_| format!("invalid rgb: component {value}")),
        // 16-bit channels keep their high byte.
        4 => u16::from_str_radix(value, 16)
            .map(|wide| (wide >> 8) as u8)
            .map_err(|_| format!("invalid rgb: component {value}")),
        _ => Err(format!("invalid rgb: component {value} (expected 2 or 4 hex digits)")),
    }
}

#[derive(Debug, Clone, Error)]
pub(crate) enum ThemeError {
    #[error("invalid env {name}={value}")]
    InvalidEnv { name: String, value: String },
}
