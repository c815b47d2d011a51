//! Keystroke model for the admission filter.
//!
//! Surfaces translate their native key events into [`Key`] before asking the
//! entry what to do with them. The entry answers with a [`KeyDecision`]; the
//! surface is responsible for acting on it (insert, swallow, or let its own
//! native editing handle the event).

/// A single keyboard event as delivered by a display surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    /// Enter/Return. Always treated as a commit request.
    Enter,
    /// A character keystroke. Control and non-Latin-1 characters are passed
    /// through to the surface unfiltered, see [`Key::is_filterable`].
    Char(char),
    /// Forward delete. Handled natively by the surface.
    Delete,
    /// Any other navigation or function key (arrows, home/end, ...).
    Other(u32),
}

impl Key {
    /// Whether this key is subject to character admission filtering.
    ///
    /// Only single-byte printable characters are filtered; control codes,
    /// DEL, and anything outside the Latin-1 range are the surface's own
    /// business (navigation, IME input, shortcuts).
    pub fn is_filterable(self) -> bool {
        match self {
            Self::Char(ch) => {
                let code = ch as u32;
                (0x20..=0xff).contains(&code) && code != 0x7f
            }
            _ => false,
        }
    }
}

/// What the entry decided about one keystroke. First matching rule wins.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyDecision {
    /// Treat the current trimmed text as a full value-set request and
    /// consume the event; the character must not reach the buffer.
    Commit,
    /// Not ours to filter: the surface handles the key natively.
    PassThrough,
    /// The character is admitted; the surface should insert it.
    Insert(char),
    /// Silently consume the event without inserting anything.
    Reject,
}
