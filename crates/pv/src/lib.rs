//! # pv
//!
//! The control-system boundary: an in-process face over "process variables",
//! the named live data points widgets bind to.
//!
//! Protocol semantics (connection lifecycles, wire subscriptions, alarm
//! plumbing) stay behind the [`ProcessVariable`] trait; the rest of the
//! workspace only sees values, metadata, and change monitors. [`SimHost`]
//! provides the in-process implementation used by tests and the demo binary.

mod error;
mod sim;
mod source;
mod value;

pub use error::PvError;
pub use sim::{SimHost, SimPv};
pub use source::{Monitor, ProcessVariable};
pub use value::{PvMetadata, PvUpdate, PvValue, char_value};
