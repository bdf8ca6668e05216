// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Baseconv-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Baseconv and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Multi-base synchronization.
//!
//! An edit to one field is validated in that field's radix, parsed into an arbitrary-precision
//! integer and rendered into the other three radixes. The edited field keeps the raw text exactly
//! as typed (leading zeros and letter case included).

use num_bigint::BigUint;
use num_traits::Zero;
use thiserror::Error;

use crate::model::{BaseSet, Radix};

mod session;

pub use session::ConverterSession;

pub const DEFAULT_MAX_DIGITS: usize = 256;
pub const DEFAULT_DECIMAL_PLACES: u8 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncOptions {
    /// Upper bound on the number of digits accepted in the edited field.
    pub max_digits: usize,
    /// Fractional precision for non-integer rendering. Integer conversion ignores it.
    pub decimal_places: u8,
}

impl Default for SyncOptions {
    fn default() -> Self {
        Self {
            max_digits: DEFAULT_MAX_DIGITS,
            decimal_places: DEFAULT_DECIMAL_PLACES,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyncError {
    #[error("{digit:?} is not a valid {radix} digit (position {position})")]
    InvalidDigit {
        radix: Radix,
        digit: char,
        position: usize,
    },
    #[error("{radix} input has {len} digits, the limit is {max}")]
    TooLong { radix: Radix, len: usize, max: usize },
}

#[derive(Debug, Clone, Default)]
pub struct Synchronizer {
    options: SyncOptions,
}

impl Synchronizer {
    pub fn new(options: SyncOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> SyncOptions {
        self.options
    }

    pub fn set_options(&mut self, options: SyncOptions) {
        self.options = options;
    }

    /// Applies an edit of `source` to `current` and returns the resynchronized set.
    ///
    /// `current` is never modified; on error the caller keeps it as-is.
    pub fn apply(
        &self,
        current: &BaseSet,
        source: Radix,
        raw_text: &str,
    ) -> Result<BaseSet, SyncError> {
        let mut next = current.clone();
        if raw_text.is_empty() {
            next.clear();
            return Ok(next);
        }

        let value = parse_digits(source, raw_text, self.options.max_digits)?;
        for radix in Radix::ALL {
            let text = if radix == source {
                raw_text.to_owned()
            } else {
                render_digits(&value, radix)
            };
            next.set_text(radix, Some(text));
        }

        debug_assert!(next.is_consistent());
        Ok(next)
    }
}

/// Parses `raw_text` as a non-negative integer in `radix`.
///
/// Only plain digits are accepted: no sign, prefix, whitespace or separators.
pub fn parse_digits(radix: Radix, raw_text: &str, max_digits: usize) -> Result<BigUint, SyncError> {
    let mut len = 0usize;
    for (position, digit) in raw_text.chars().enumerate() {
        if !radix.is_digit(digit) {
            return Err(SyncError::InvalidDigit {
                radix,
                digit,
                position,
            });
        }
        len += 1;
    }

    if len > max_digits {
        return Err(SyncError::TooLong {
            radix,
            len,
            max: max_digits,
        });
    }

    // Every char was validated above, so the only remaining failure is the empty string.
    Ok(BigUint::parse_bytes(raw_text.as_bytes(), radix.radix()).unwrap_or_else(BigUint::zero))
}

/// Renders `value` in minimal form: no leading zeros, `"0"` for zero, upper-case hex letters.
pub fn render_digits(value: &BigUint, radix: Radix) -> String {
    let mut text = value.to_str_radix(radix.radix());
    if radix == Radix::Hex {
        text.make_ascii_uppercase();
    }
    text
}
