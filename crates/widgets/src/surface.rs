//! Display-surface contracts and the in-memory implementations.
//!
//! Surfaces are the toolkit's side of the bargain: they own the real text
//! buffer, caret, and colors, and forward key/text/focus notifications to
//! the widgets. Widgets push programmatic updates back through these traits,
//! so the whole kit stays testable without a toolkit. All caret offsets are
//! character offsets.

use core_types::Palette;
use entry_core::EntryStyle;

/// The text-editing face a toolkit adapter exposes to widgets.
pub trait DisplaySurface {
    fn text(&self) -> String;
    fn set_text(&mut self, text: &str);

    /// Current selection as `(start, end)`; a plain caret is `(pos, pos)`.
    fn selection(&self) -> (usize, usize);
    fn set_selection(&mut self, start: usize, end: usize);

    /// Apply the valid/invalid color cue.
    fn set_palette(&mut self, palette: Palette);

    /// Produce the rejection cue (bell, flash) for an invalid commit.
    fn rejection_cue(&mut self);

    /// Style hints applied once when a numeric entry attaches.
    fn apply_style(&mut self, style: EntryStyle);
}

/// A dropdown-style surface listing mutually exclusive choices.
pub trait ChoiceSurface {
    fn set_items(&mut self, items: &[String]);
    fn selected(&self) -> Option<usize>;
    fn set_selected(&mut self, index: usize);
}

/// A row of toggle buttons with at most one pressed at a time.
pub trait ButtonRowSurface {
    fn set_items(&mut self, items: &[String]);
    fn pressed(&self) -> Option<usize>;
    fn set_pressed(&mut self, index: usize);
}

/// In-memory [`DisplaySurface`] for tests and headless screens.
#[derive(Clone, Debug, Default)]
pub struct BufferSurface {
    text: String,
    selection: (usize, usize),
    palette: Option<Palette>,
    style: EntryStyle,
    bells: u32,
}

impl BufferSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Native single-line editing: insert at the selection start and move
    /// the caret past the new character, as a toolkit would for an admitted
    /// keystroke.
    pub fn insert_char(&mut self, ch: char) {
        let (start, _) = self.selection;
        let byte = byte_index_of_char(&self.text, start);
        self.text.insert(byte, ch);
        self.selection = (start + 1, start + 1);
    }

    pub fn palette(&self) -> Option<Palette> {
        self.palette
    }

    pub fn style(&self) -> EntryStyle {
        self.style
    }

    /// How many rejection cues have been produced.
    pub fn bells(&self) -> u32 {
        self.bells
    }
}

impl DisplaySurface for BufferSurface {
    fn text(&self) -> String {
        self.text.clone()
    }

    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
        let len = self.text.chars().count();
        self.selection = (self.selection.0.min(len), self.selection.1.min(len));
    }

    fn selection(&self) -> (usize, usize) {
        self.selection
    }

    fn set_selection(&mut self, start: usize, end: usize) {
        let len = self.text.chars().count();
        self.selection = (start.min(len), end.min(len));
    }

    fn set_palette(&mut self, palette: Palette) {
        self.palette = Some(palette);
    }

    fn rejection_cue(&mut self) {
        self.bells += 1;
    }

    fn apply_style(&mut self, style: EntryStyle) {
        self.style = style;
    }
}

/// In-memory [`ChoiceSurface`].
#[derive(Clone, Debug, Default)]
pub struct BufferChoice {
    items: Vec<String>,
    selected: Option<usize>,
}

impl BufferChoice {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }
}

impl ChoiceSurface for BufferChoice {
    fn set_items(&mut self, items: &[String]) {
        self.items = items.to_vec();
        if self.selected.is_some_and(|s| s >= self.items.len()) {
            self.selected = None;
        }
    }

    fn selected(&self) -> Option<usize> {
        self.selected
    }

    fn set_selected(&mut self, index: usize) {
        if index < self.items.len() {
            self.selected = Some(index);
        }
    }
}

/// In-memory [`ButtonRowSurface`].
#[derive(Clone, Debug, Default)]
pub struct BufferButtonRow {
    items: Vec<String>,
    pressed: Option<usize>,
}

impl BufferButtonRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }
}

impl ButtonRowSurface for BufferButtonRow {
    fn set_items(&mut self, items: &[String]) {
        self.items = items.to_vec();
        if self.pressed.is_some_and(|p| p >= self.items.len()) {
            self.pressed = None;
        }
    }

    fn pressed(&self) -> Option<usize> {
        self.pressed
    }

    fn set_pressed(&mut self, index: usize) {
        if index < self.items.len() {
            self.pressed = Some(index);
        }
    }
}

fn byte_index_of_char(s: &str, char_pos: usize) -> usize {
    s.char_indices()
        .nth(char_pos)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_char_advances_the_caret() {
        let mut surface = BufferSurface::new();
        surface.set_text("50");
        surface.set_selection(1, 1);
        surface.insert_char('7');
        assert_eq!(surface.text(), "570");
        assert_eq!(surface.selection(), (2, 2));
    }

    #[test]
    fn set_text_clamps_the_selection() {
        let mut surface = BufferSurface::new();
        surface.set_text("123456");
        surface.set_selection(6, 6);
        surface.set_text("12");
        assert_eq!(surface.selection(), (2, 2));
    }

    #[test]
    fn choice_ignores_out_of_range_selection() {
        let mut choice = BufferChoice::new();
        choice.set_items(&["open".to_string(), "closed".to_string()]);
        choice.set_selected(5);
        assert_eq!(choice.selected(), None);
        choice.set_selected(1);
        assert_eq!(choice.selected(), Some(1));
    }

    #[test]
    fn shrinking_items_clears_stale_pressed_state() {
        let mut row = BufferButtonRow::new();
        row.set_items(&["a".to_string(), "b".to_string(), "c".to_string()]);
        row.set_pressed(2);
        row.set_items(&["a".to_string()]);
        assert_eq!(row.pressed(), None);
    }
}
