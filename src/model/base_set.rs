// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Baseconv-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Baseconv and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use num_bigint::BigUint;

use super::Radix;

/// A single converter field: its radix plus the currently displayed text.
///
/// `text` is `None` while the field is unset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Base {
    radix: Radix,
    text: Option<String>,
}

impl Base {
    pub fn new(radix: Radix) -> Self {
        Self { radix, text: None }
    }

    pub fn radix(&self) -> Radix {
        self.radix
    }

    pub fn label(&self) -> &'static str {
        self.radix.label()
    }

    /// The displayed text, or `""` when the field is unset.
    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }

    pub fn is_empty(&self) -> bool {
        self.text.as_deref().map_or(true, str::is_empty)
    }

    pub(crate) fn set_text(&mut self, text: Option<String>) {
        self.text = text.filter(|text| !text.is_empty());
    }
}

/// The four synchronized converter fields, one per [`Radix`], in table order.
///
/// Either every field shows the same value in its own radix or every field is empty. Only the
/// synchronizer mutates a set, and it always replaces all four texts in one step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseSet {
    bases: [Base; 4],
}

impl Default for BaseSet {
    fn default() -> Self {
        Self::new()
    }
}

impl BaseSet {
    pub fn new() -> Self {
        Self {
            bases: Radix::ALL.map(Base::new),
        }
    }

    pub fn get(&self, radix: Radix) -> &Base {
        &self.bases[radix.index()]
    }

    pub fn text(&self, radix: Radix) -> &str {
        self.get(radix).text()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Base> {
        self.bases.iter()
    }

    pub fn is_cleared(&self) -> bool {
        self.bases.iter().all(Base::is_empty)
    }

    /// The shared numeric value, read back from the decimal field.
    pub fn value(&self) -> Option<BigUint> {
        parse_field(self.get(Radix::Dec))
    }

    /// Checks that all fields are empty or that all fields encode the same value.
    pub fn is_consistent(&self) -> bool {
        if self.is_cleared() {
            return true;
        }

        let mut values = self.bases.iter().map(parse_field);
        let Some(Some(first)) = values.next() else {
            return false;
        };
        values.all(|value| value.as_ref() == Some(&first))
    }

    pub(crate) fn set_text(&mut self, radix: Radix, text: Option<String>) {
        self.bases[radix.index()].set_text(text);
    }

    pub(crate) fn clear(&mut self) {
        for base in &mut self.bases {
            base.set_text(None);
        }
    }
}

impl<'a> IntoIterator for &'a BaseSet {
    type Item = &'a Base;
    type IntoIter = std::slice::Iter<'a, Base>;

    fn into_iter(self) -> Self::IntoIter {
        self.bases.iter()
    }
}

fn parse_field(base: &Base) -> Option<BigUint> {
    if base.is_empty() {
        return None;
    }
    BigUint::parse_bytes(base.text().as_bytes(), base.radix().radix())
}
