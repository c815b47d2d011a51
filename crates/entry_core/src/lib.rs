//! # entry_core
//!
//! UI-agnostic bounded numeric text-entry core.
//!
//! This crate owns everything a format-aware numeric field needs that is not
//! toolkit-specific:
//! - [`FloatEntry`]: text mirror, parsed value, bounds, precision, validity,
//!   remembered caret, and the commit action
//! - [`Key`] / [`KeyDecision`]: the per-keystroke admission filter
//! - permissive float parsing and fixed-point formatting helpers
//!
//! ## Design Principles
//!
//! This crate is intentionally UI-agnostic and does not depend on:
//! - Any graphics framework or widget toolkit
//! - The process-variable layer
//! - Platform-specific APIs
//!
//! The display surface owns the real text buffer and caret; [`FloatEntry`]
//! mirrors them, decides what each keystroke may do, and on commit returns a
//! [`CommitOutcome`] describing what the surface should now show. Applying
//! that outcome (text, colors, caret, rejection cue) is the integration
//! layer's job, which keeps the whole state machine testable without a
//! toolkit.
//!
//! All caret offsets in this crate are character offsets, matching how
//! toolkit selection ranges are reported.

mod entry;
mod key;
mod parse;

pub use entry::{CommitAction, CommitOutcome, EntryStyle, FloatEntry, FloatEntryOptions};
pub use key::{Key, KeyDecision};
pub use parse::{format_fixed, parse_float, parse_float_or, round_to};
