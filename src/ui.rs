// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Baseconv-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Baseconv and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Displayed field state for the converter table.
//!
//! Cells remember whether their current text came from the user or from the synchronizer. Only
//! user edits produce [`EditEvent`]s; programmatic updates are absorbed so a redisplay can never
//! feed back into another synchronization.

use crate::model::{BaseSet, Radix};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldOrigin {
    #[default]
    Programmatic,
    User,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditEvent {
    pub radix: Radix,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct FieldCell {
    text: String,
    origin: FieldOrigin,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldTable {
    cells: [FieldCell; 4],
    focused: Radix,
    rev: u64,
    suppressed: u64,
}

impl Default for FieldTable {
    fn default() -> Self {
        Self {
            cells: Default::default(),
            focused: Radix::Dec,
            rev: 0,
            suppressed: 0,
        }
    }
}

impl FieldTable {
    pub fn rev(&self) -> u64 {
        self.rev
    }

    /// Number of programmatic updates that were kept from emitting edit events.
    pub fn suppressed(&self) -> u64 {
        self.suppressed
    }

    pub fn text(&self, radix: Radix) -> &str {
        &self.cells[radix.index()].text
    }

    pub fn origin(&self, radix: Radix) -> FieldOrigin {
        self.cells[radix.index()].origin
    }

    pub fn focused(&self) -> Radix {
        self.focused
    }

    pub fn focus(&mut self, radix: Radix) {
        self.focused = radix;
    }

    pub fn focus_next(&mut self) {
        self.focused = self.focused.next();
    }

    pub fn focus_prev(&mut self) {
        self.focused = self.focused.prev();
    }

    /// Proposes `candidate` as the new text of `radix` without committing it.
    pub fn user_edit(&self, radix: Radix, candidate: impl Into<String>) -> EditEvent {
        EditEvent {
            radix,
            text: candidate.into(),
        }
    }

    /// Sets one cell. Returns an event only for a user change.
    pub fn set_text(&mut self, radix: Radix, text: &str, origin: FieldOrigin) -> Option<EditEvent> {
        let cell = &mut self.cells[radix.index()];
        let changed = cell.text != text;
        if changed {
            cell.text = text.to_owned();
            self.rev = self.rev.wrapping_add(1);
        }
        cell.origin = origin;

        match origin {
            FieldOrigin::User if changed => Some(EditEvent {
                radix,
                text: text.to_owned(),
            }),
            FieldOrigin::User => None,
            FieldOrigin::Programmatic => {
                self.suppressed = self.suppressed.wrapping_add(1);
                None
            }
        }
    }

    /// Redisplays every cell from `bases`, tagging all of them as programmatic.
    pub fn show(&mut self, bases: &BaseSet) {
        for base in bases {
            let event = self.set_text(base.radix(), base.text(), FieldOrigin::Programmatic);
            debug_assert!(event.is_none());
        }
    }
}
