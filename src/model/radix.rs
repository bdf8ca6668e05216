// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Baseconv-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Baseconv and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// One of the four numeral systems shown in the converter table.
///
/// The declaration order is the table order; `index()` and `from_index()` rely on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Radix {
    Bin,
    Oct,
    Dec,
    Hex,
}

impl Radix {
    pub const ALL: [Radix; 4] = [Radix::Bin, Radix::Oct, Radix::Dec, Radix::Hex];

    pub const fn radix(self) -> u32 {
        match self {
            Self::Bin => 2,
            Self::Oct => 8,
            Self::Dec => 10,
            Self::Hex => 16,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Bin => "BIN",
            Self::Oct => "OCT",
            Self::Dec => "DEC",
            Self::Hex => "HEX",
        }
    }

    pub const fn index(self) -> usize {
        match self {
            Self::Bin => 0,
            Self::Oct => 1,
            Self::Dec => 2,
            Self::Hex => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Returns the digit value of `ch` in this radix, or `None` if `ch` is not a valid digit.
    ///
    /// Hexadecimal letters are accepted in either case.
    pub fn digit_value(self, ch: char) -> Option<u32> {
        ch.to_digit(self.radix())
    }

    pub fn is_digit(self, ch: char) -> bool {
        self.digit_value(ch).is_some()
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Radix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown radix {0:?} (expected BIN, OCT, DEC, HEX, 2, 8, 10 or 16)")]
pub struct ParseRadixError(pub String);

impl FromStr for Radix {
    type Err = ParseRadixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "BIN" | "2" => Ok(Self::Bin),
            "OCT" | "8" => Ok(Self::Oct),
            "DEC" | "10" => Ok(Self::Dec),
            "HEX" | "16" => Ok(Self::Hex),
            _ => Err(ParseRadixError(s.to_owned())),
        }
    }
}
