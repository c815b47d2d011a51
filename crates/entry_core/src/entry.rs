//! Bounded numeric entry state.
//!
//! [`FloatEntry`] mirrors the surface's text buffer and owns everything the
//! surface does not: the parsed value, bounds, precision, validity, the
//! remembered caret, and the commit action. It never talks to a toolkit;
//! commits return a [`CommitOutcome`] that the owning widget applies.

use std::fmt;

use bitflags::bitflags;

use crate::key::{Key, KeyDecision};
use crate::parse::{format_fixed, parse_float, parse_float_or, round_to};

bitflags! {
    /// Display-style hints forwarded to the surface when the entry attaches.
    ///
    /// These affect presentation and event dispatch only; the admission
    /// filter does not consult them.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct EntryStyle: u8 {
        /// Right-align the text, the conventional look for numeric fields.
        const RIGHT_ALIGN = 1 << 0;
        /// The surface must report Enter as a key event instead of
        /// swallowing it itself.
        const PROCESS_ENTER = 1 << 1;
    }
}

impl Default for EntryStyle {
    fn default() -> Self {
        Self::RIGHT_ALIGN | Self::PROCESS_ENTER
    }
}

/// Commit action, invoked with the accepted value on every valid commit.
///
/// Fixed auxiliary arguments, when a consumer needs them, live in the
/// closure's captures.
pub type CommitAction = Box<dyn FnMut(f64)>;

/// Construction options for [`FloatEntry`].
#[derive(Clone, Debug)]
pub struct FloatEntryOptions {
    /// Initial surface text. May be empty or unparsable.
    pub initial: String,
    /// Inclusive lower bound; `None` is unbounded below.
    pub min: Option<f64>,
    /// Inclusive upper bound; `None` is unbounded above.
    pub max: Option<f64>,
    /// Fractional digits; `None` normalizes to 0 (integer-only entry, the
    /// decimal point itself is rejected by the filter). Defaults to 3.
    pub precision: Option<usize>,
    /// Value to fall back to when `initial` does not parse.
    pub fallback: Option<f64>,
    pub style: EntryStyle,
}

impl Default for FloatEntryOptions {
    fn default() -> Self {
        Self {
            initial: String::new(),
            min: None,
            max: None,
            precision: Some(3),
            fallback: None,
            style: EntryStyle::default(),
        }
    }
}

impl FloatEntryOptions {
    /// Parse textual bounds permissively: empty or non-numeric text means
    /// unbounded on that side.
    pub fn with_bounds_text(mut self, min: &str, max: &str) -> Self {
        self.min = parse_float(min);
        self.max = parse_float(max);
        self
    }
}

/// What the display surface should show after a commit.
///
/// The entry has already updated its own state and fired the action (valid
/// commits only); the widget layer applies this to the surface: the text,
/// the valid/invalid palette, the rejection cue when `valid` is false, and
/// the caret.
#[derive(Clone, Debug, PartialEq)]
pub struct CommitOutcome {
    /// Text the surface should display now.
    pub display: String,
    /// Whether the committed text was accepted as entered.
    pub valid: bool,
    /// Caret position (chars) to restore, already clamped to `display`.
    pub caret: usize,
    /// The accepted value; `None` on an invalid commit.
    pub accepted: Option<f64>,
}

/// Bounded, format-aware numeric entry.
///
/// The surface owns the real text buffer and caret; this type mirrors them
/// and decides, one character at a time, what may enter the buffer
/// ([`FloatEntry::on_key`]), and on commit resolves text to a value, clamps,
/// reformats, and fires the commit action ([`FloatEntry::commit`]).
///
/// Bounds are a caller precondition: `min > max` is not detected, each bound
/// clamps independently.
pub struct FloatEntry {
    /// Mirror of the surface's current text.
    text: String,
    /// Last accepted value; `None` only before any valid input exists.
    value: Option<f64>,
    /// `value` clamped to `[min, max]`; equals `value` when valid.
    bound_value: Option<f64>,
    min: Option<f64>,
    max: Option<f64>,
    precision: usize,
    valid: bool,
    /// Remembered caret offset (chars), restored after any reformat.
    mark: usize,
    style: EntryStyle,
    action: Option<CommitAction>,
}

impl FloatEntry {
    pub fn new(options: FloatEntryOptions) -> Self {
        let FloatEntryOptions {
            initial,
            min,
            max,
            precision,
            fallback,
            style,
        } = options;

        let mut entry = Self {
            text: initial.trim().to_string(),
            value: None,
            bound_value: None,
            min,
            max,
            precision: precision.unwrap_or(0),
            valid: false,
            mark: 0,
            style,
            action: None,
        };

        let parsed = parse_float_or(&entry.text, fallback);
        let (valid, resolved) = entry.check(parsed);
        entry.valid = valid;
        entry.value = resolved;
        entry.bound_value = resolved;
        if let Some(v) = resolved {
            entry.text = format_fixed(v, entry.precision);
        }
        entry
    }

    /// Decide what a single keystroke may do. First matching rule wins:
    ///
    /// 1. Enter commits the current text.
    /// 2. Non-printable, navigation, and non-Latin-1 keys pass through.
    /// 3. `.` is rejected for integer entries or when one is present.
    /// 4. `-` is rejected unless it would become the very first character.
    /// 5. Nothing may be inserted in front of an existing sign.
    /// 6. Digits, `.`, and `-` are admitted; everything else is rejected.
    ///
    /// `caret` is the surface's selection start at event time. This is pure
    /// admission filtering; the whole buffer is only re-parsed on commit.
    pub fn on_key(&self, key: Key, caret: usize) -> KeyDecision {
        match key {
            Key::Enter => KeyDecision::Commit,
            Key::Char(ch) if key.is_filterable() => {
                let entry = self.text.trim();
                let has_minus = entry.contains('-');
                if (ch == '.' && (self.precision == 0 || entry.contains('.')))
                    || (ch == '-' && (has_minus || caret != 0))
                    || (ch != '-' && has_minus && caret == 0)
                {
                    return KeyDecision::Reject;
                }
                if ch.is_ascii_digit() || ch == '.' || ch == '-' {
                    KeyDecision::Insert(ch)
                } else {
                    KeyDecision::Reject
                }
            }
            _ => KeyDecision::PassThrough,
        }
    }

    /// Mirror a surface text change and refresh validity.
    ///
    /// No reformat and no action; this only keeps `is_valid` (and therefore
    /// the live color cue) in step while the user is typing. Returns the new
    /// validity.
    pub fn text_changed(&mut self, text: &str) -> bool {
        self.text = text.to_string();
        let trimmed = self.text.trim();
        if !trimmed.is_empty() {
            let (valid, resolved) = self.check(parse_float(trimmed));
            self.valid = valid;
            self.bound_value = resolved;
            if valid {
                self.value = resolved;
            }
        }
        self.valid
    }

    /// Remember the caret so it can be restored after a reformat.
    ///
    /// Clamped to the trimmed text length, which defends against a caret
    /// sitting past newly-shortened text.
    pub fn record_mark(&mut self, selection_start: usize) {
        self.mark = selection_start.min(self.text.trim().chars().count());
    }

    /// Commit `candidate` (or the current trimmed mirror text) as a full
    /// value-set request.
    ///
    /// Valid: the value is stored, the text reformats to fixed point, and
    /// the action fires once with the accepted value. Invalid: the value
    /// resolves to the nearer violated bound (or stays at the previous value
    /// on a parse failure), the text reformats from that, and the action is
    /// withheld; the missing commit signal is the caller's error signal.
    /// Neither branch moves the caret from the recorded mark.
    pub fn commit(&mut self, candidate: Option<&str>) -> CommitOutcome {
        let candidate = match candidate {
            Some(text) => text.trim().to_string(),
            None => self.text.trim().to_string(),
        };

        let (valid, resolved) = self.check(parse_float(&candidate));
        self.valid = valid;
        let accepted = if valid { resolved } else { None };

        match resolved {
            Some(v) => {
                self.value = Some(v);
                self.bound_value = Some(v);
                self.text = format_fixed(v, self.precision);
            }
            None => {
                // Nothing has ever parsed and there is no bound to clamp
                // to; keep the raw text, there is no value to reformat.
                self.text = candidate;
            }
        }

        let caret = self.mark.min(self.text.chars().count());
        if let Some(v) = accepted
            && let Some(action) = self.action.as_mut()
        {
            action(v);
        }

        CommitOutcome {
            display: self.text.clone(),
            valid,
            caret,
            accepted,
        }
    }

    /// Validity check: parse failure recovers with the previous value,
    /// out-of-range resolves to the violated bound.
    fn check(&self, candidate: Option<f64>) -> (bool, Option<f64>) {
        let Some(v) = candidate else {
            return (false, self.value);
        };
        if let Some(min) = self.min
            && v < min
        {
            return (false, Some(min));
        }
        if let Some(max) = self.max
            && v > max
        {
            return (false, Some(max));
        }
        (true, Some(v))
    }

    /// Current value rounded per precision; an integer cast (truncation)
    /// when `precision == 0`.
    pub fn value(&self) -> Option<f64> {
        self.value.map(|v| round_to(v, self.precision))
    }

    /// `value` clamped to `[min, max]`.
    pub fn bound_value(&self) -> Option<f64> {
        self.bound_value
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn mark(&self) -> usize {
        self.mark
    }

    pub fn min(&self) -> Option<f64> {
        self.min
    }

    pub fn set_min(&mut self, min: Option<f64>) {
        self.min = min;
    }

    pub fn max(&self) -> Option<f64> {
        self.max
    }

    pub fn set_max(&mut self, max: Option<f64>) {
        self.max = max;
    }

    pub fn precision(&self) -> usize {
        self.precision
    }

    /// Change the precision for all *future* formatting. `None` normalizes
    /// to 0. Nothing is reformatted here; callers that depend on formatting
    /// must set precision before the value assignment that uses it.
    pub fn set_precision(&mut self, precision: Option<usize>) {
        self.precision = precision.unwrap_or(0);
    }

    pub fn style(&self) -> EntryStyle {
        self.style
    }

    /// Replace the commit action (and its captured fixed arguments)
    /// wholesale.
    pub fn set_action(&mut self, action: Option<CommitAction>) {
        self.action = action;
    }
}

impl fmt::Debug for FloatEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FloatEntry")
            .field("text", &self.text)
            .field("value", &self.value)
            .field("bound_value", &self.bound_value)
            .field("min", &self.min)
            .field("max", &self.max)
            .field("precision", &self.precision)
            .field("valid", &self.valid)
            .field("mark", &self.mark)
            .field("style", &self.style)
            .field("action", &self.action.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn entry(initial: &str, min: Option<f64>, max: Option<f64>, precision: usize) -> FloatEntry {
        FloatEntry::new(FloatEntryOptions {
            initial: initial.to_string(),
            min,
            max,
            precision: Some(precision),
            ..Default::default()
        })
    }

    fn recorded_action() -> (CommitAction, Rc<RefCell<Vec<f64>>>) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&calls);
        (Box::new(move |v| sink.borrow_mut().push(v)), calls)
    }

    #[test]
    fn construction_formats_initial_value() {
        let e = entry("50", Some(0.0), Some(100.0), 2);
        assert_eq!(e.text(), "50.00");
        assert!(e.is_valid());
        assert_eq!(e.value(), Some(50.0));
    }

    #[test]
    fn construction_with_unparsable_initial_keeps_raw_text() {
        let e = entry("abc", None, None, 2);
        assert!(!e.is_valid());
        assert_eq!(e.text(), "abc");
        assert_eq!(e.value(), None);
    }

    #[test]
    fn construction_falls_back_when_initial_does_not_parse() {
        let e = FloatEntry::new(FloatEntryOptions {
            initial: "oops".to_string(),
            fallback: Some(1.5),
            ..Default::default()
        });
        assert!(e.is_valid());
        assert_eq!(e.text(), "1.500");
        assert_eq!(e.value(), Some(1.5));
    }

    #[test]
    fn construction_clamps_out_of_range_initial() {
        let e = entry("250", Some(0.0), Some(100.0), 1);
        assert!(!e.is_valid());
        assert_eq!(e.text(), "100.0");
        assert_eq!(e.value(), Some(100.0));
    }

    #[test]
    fn bounds_parse_permissively_from_text() {
        let opts = FloatEntryOptions::default().with_bounds_text("", "not a number");
        assert_eq!(opts.min, None);
        assert_eq!(opts.max, None);

        let opts = FloatEntryOptions::default().with_bounds_text("-5", "5.5");
        assert_eq!(opts.min, Some(-5.0));
        assert_eq!(opts.max, Some(5.5));
    }

    #[test]
    fn commit_in_range_invokes_action_exactly_once() {
        let mut e = entry("0", Some(0.0), Some(100.0), 2);
        let (action, calls) = recorded_action();
        e.set_action(Some(action));

        let out = e.commit(Some("42.5"));
        assert!(out.valid);
        assert_eq!(out.display, "42.50");
        assert_eq!(out.accepted, Some(42.5));
        assert_eq!(e.value(), Some(42.5));
        assert_eq!(*calls.borrow(), vec![42.5]);
    }

    #[test]
    fn commit_below_min_clamps_and_withholds_action() {
        let mut e = entry("50", Some(0.0), Some(100.0), 2);
        let (action, calls) = recorded_action();
        e.set_action(Some(action));

        let out = e.commit(Some("-5"));
        assert!(!out.valid);
        assert_eq!(out.accepted, None);
        assert_eq!(out.display, "0.00");
        assert_eq!(e.value(), Some(0.0));
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn commit_above_max_clamps_to_max() {
        // precision=2, min=0, max=100, initial "50.00": a direct commit of
        // "750.00" bypasses the filter and resolves to the upper bound.
        let mut e = entry("50.00", Some(0.0), Some(100.0), 2);
        let (action, calls) = recorded_action();
        e.set_action(Some(action));

        let out = e.commit(Some("750.00"));
        assert!(!out.valid);
        assert_eq!(e.value(), Some(100.0));
        assert_eq!(out.display, "100.00");
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn integer_entry_accepts_negative_whole_numbers() {
        let mut e = entry("0", None, None, 0);
        let (action, calls) = recorded_action();
        e.set_action(Some(action));

        let out = e.commit(Some("-12"));
        assert!(out.valid);
        assert_eq!(out.display, "-12");
        assert_eq!(e.value(), Some(-12.0));
        assert_eq!(*calls.borrow(), vec![-12.0]);
    }

    #[test]
    fn idempotent_commits_reinvoke_the_action() {
        let mut e = entry("0", Some(0.0), Some(100.0), 2);
        let (action, calls) = recorded_action();
        e.set_action(Some(action));

        let first = e.commit(Some("42.50"));
        let second = e.commit(Some("42.50"));
        assert_eq!(first, second);
        assert_eq!(*calls.borrow(), vec![42.5, 42.5]);
    }

    #[test]
    fn unparsable_commit_reformats_previous_value() {
        let mut e = entry("42.5", None, None, 2);
        let (action, calls) = recorded_action();
        e.set_action(Some(action));

        let out = e.commit(Some("garbage"));
        assert!(!out.valid);
        assert_eq!(out.display, "42.50");
        assert_eq!(e.value(), Some(42.5));
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn caret_restored_to_recorded_mark_after_reformat() {
        let mut e = entry("50.00", Some(0.0), Some(100.0), 2);
        e.text_changed("750.00");
        e.record_mark(3);

        let out = e.commit(None);
        assert_eq!(out.display, "100.00");
        assert_eq!(out.caret, 3);
    }

    #[test]
    fn recorded_mark_clamps_to_trimmed_length() {
        let mut e = entry("5", None, None, 0);
        e.record_mark(40);
        assert_eq!(e.mark(), 1);
    }

    #[test]
    fn caret_clamps_to_new_display_length() {
        let mut e = entry("123456", None, None, 0);
        e.record_mark(6);
        e.text_changed("7");

        // Mark was recorded on the long text; the reformat shortens it.
        let out = e.commit(None);
        assert_eq!(out.display, "7");
        assert_eq!(out.caret, 1);
    }

    #[test]
    fn second_decimal_point_is_rejected() {
        let mut e = entry("", None, None, 3);
        e.text_changed("1.5");
        assert_eq!(e.on_key(Key::Char('.'), 3), KeyDecision::Reject);

        e.text_changed("15");
        assert_eq!(e.on_key(Key::Char('.'), 2), KeyDecision::Insert('.'));
    }

    #[test]
    fn decimal_point_is_rejected_for_integer_entries() {
        let mut e = entry("", None, None, 0);
        assert_eq!(e.on_key(Key::Char('.'), 0), KeyDecision::Reject);
        e.text_changed("12");
        assert_eq!(e.on_key(Key::Char('.'), 2), KeyDecision::Reject);
    }

    #[test]
    fn minus_is_accepted_only_as_first_character() {
        let mut e = entry("", None, None, 2);
        assert_eq!(e.on_key(Key::Char('-'), 0), KeyDecision::Insert('-'));

        e.text_changed("5");
        assert_eq!(e.on_key(Key::Char('-'), 1), KeyDecision::Reject);
        assert_eq!(e.on_key(Key::Char('-'), 0), KeyDecision::Insert('-'));

        e.text_changed("-5");
        assert_eq!(e.on_key(Key::Char('-'), 0), KeyDecision::Reject);
        assert_eq!(e.on_key(Key::Char('-'), 2), KeyDecision::Reject);
    }

    #[test]
    fn nothing_inserts_in_front_of_an_existing_sign() {
        let mut e = entry("", None, None, 2);
        e.text_changed("-5");
        assert_eq!(e.on_key(Key::Char('3'), 0), KeyDecision::Reject);
        assert_eq!(e.on_key(Key::Char('3'), 1), KeyDecision::Insert('3'));
    }

    #[test]
    fn enter_commits_and_unfiltered_keys_pass_through() {
        let e = entry("1.0", None, None, 2);
        assert_eq!(e.on_key(Key::Enter, 0), KeyDecision::Commit);
        assert_eq!(e.on_key(Key::Delete, 0), KeyDecision::PassThrough);
        assert_eq!(e.on_key(Key::Other(316), 0), KeyDecision::PassThrough);
        assert_eq!(e.on_key(Key::Char('\u{8}'), 0), KeyDecision::PassThrough);
        assert_eq!(e.on_key(Key::Char('€'), 0), KeyDecision::PassThrough);
        assert_eq!(e.on_key(Key::Char('a'), 0), KeyDecision::Reject);
    }

    #[test]
    fn text_changed_tracks_validity_while_typing() {
        let mut e = entry("50", Some(0.0), Some(100.0), 2);
        assert!(!e.text_changed("150"));
        assert!(!e.is_valid());
        assert_eq!(e.bound_value(), Some(100.0));

        assert!(e.text_changed("75"));
        assert!(e.is_valid());
        assert_eq!(e.value(), Some(75.0));
    }

    #[test]
    fn set_precision_changes_future_formatting_only() {
        let mut e = entry("1.25", None, None, 2);
        assert_eq!(e.text(), "1.25");

        e.set_precision(Some(3));
        assert_eq!(e.text(), "1.25");

        let out = e.commit(None);
        assert_eq!(out.display, "1.250");
    }

    #[test]
    fn set_precision_none_means_integer_entry() {
        let mut e = entry("7.8", None, None, 2);
        e.set_precision(None);
        assert_eq!(e.precision(), 0);
        assert_eq!(e.value(), Some(7.0));
    }

    #[test]
    fn replacing_the_action_replaces_it_wholesale() {
        let mut e = entry("1", None, None, 0);
        let (first, first_calls) = recorded_action();
        e.set_action(Some(first));
        e.commit(Some("2"));

        let (second, second_calls) = recorded_action();
        e.set_action(Some(second));
        e.commit(Some("3"));

        assert_eq!(*first_calls.borrow(), vec![2.0]);
        assert_eq!(*second_calls.borrow(), vec![3.0]);
    }

    #[test]
    fn default_style_is_right_aligned_process_enter() {
        let style = EntryStyle::default();
        assert!(style.contains(EntryStyle::RIGHT_ALIGN));
        assert!(style.contains(EntryStyle::PROCESS_ENTER));
    }
}
