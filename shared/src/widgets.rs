//! State models behind the interactive widgets.
//!
//! The frontend components only hold one of these and forward events to it;
//! selection, open/closed and highlight rules all live here.

use crate::error::WidgetError;

/// A set of mutually exclusive items with exactly one selected
pub trait Selection {
    fn selected(&self) -> usize;
    fn len(&self) -> usize;
    fn select(&mut self, index: usize) -> Result<(), WidgetError>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn is_selected(&self, index: usize) -> bool {
        self.selected() == index
    }
}

/// Something that is either open or closed
pub trait Toggle {
    fn is_open(&self) -> bool;
    fn toggle(&mut self);
}

/// Active tab of a tab group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabSelection {
    index: usize,
    len: usize,
}

impl TabSelection {
    /// Start at `default_index`, falling back to the first tab when it is out of range.
    pub fn new(len: usize, default_index: usize) -> Self {
        let index = if default_index < len { default_index } else { 0 };
        Self { index, len }
    }

    pub fn select_next(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    pub fn select_previous(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    pub fn select_first(&mut self) {
        self.index = 0;
    }

    pub fn select_last(&mut self) {
        self.index = self.len.saturating_sub(1);
    }
}

impl Selection for TabSelection {
    fn selected(&self) -> usize {
        self.index
    }

    fn len(&self) -> usize {
        self.len
    }

    fn select(&mut self, index: usize) -> Result<(), WidgetError> {
        if index >= self.len {
            return Err(WidgetError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        self.index = index;
        Ok(())
    }
}

/// Open flag of a collapsible region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DisclosureState {
    open: bool,
}

impl DisclosureState {
    pub fn new(default_open: bool) -> Self {
        Self { open: default_open }
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}

impl Toggle for DisclosureState {
    fn is_open(&self) -> bool {
        self.open
    }

    fn toggle(&mut self) {
        self.open = !self.open;
    }
}

/// Dropdown menu: open flag plus the keyboard-highlighted item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuState {
    open: bool,
    active: Option<usize>,
}

impl MenuState {
    pub fn open(&mut self) {
        self.open = true;
    }

    /// Closing also clears the highlight.
    pub fn close(&mut self) {
        self.open = false;
        self.active = None;
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn highlight(&mut self, index: usize, item_count: usize) -> Result<(), WidgetError> {
        if index >= item_count {
            return Err(WidgetError::IndexOutOfRange {
                index,
                len: item_count,
            });
        }
        self.active = Some(index);
        Ok(())
    }

    pub fn clear_highlight(&mut self) {
        self.active = None;
    }

    pub fn highlight_next(&mut self, item_count: usize) {
        if item_count == 0 {
            return;
        }
        self.active = Some(match self.active {
            Some(i) => (i + 1) % item_count,
            None => 0,
        });
    }

    pub fn highlight_previous(&mut self, item_count: usize) {
        if item_count == 0 {
            return;
        }
        self.active = Some(match self.active {
            Some(i) => (i + item_count - 1) % item_count,
            None => item_count - 1,
        });
    }
}

impl Toggle for MenuState {
    fn is_open(&self) -> bool {
        self.open
    }

    fn toggle(&mut self) {
        if self.open {
            self.close();
        } else {
            self.open();
        }
    }
}
