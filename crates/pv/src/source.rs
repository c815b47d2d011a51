//! The trait widgets program against.

use crate::error::PvError;
use crate::value::{PvMetadata, PvUpdate, PvValue};

/// Change-notification callback.
///
/// Monitors may fire on whatever thread performs the `put`; they must only
/// hand the update off (post it to a dispatch queue), never touch widget
/// state, and never call back into the variable they watch.
pub type Monitor = Box<dyn Fn(&PvUpdate) + Send>;

/// A named live data point in the control system.
///
/// This is the in-process face of the client library. Implementations hide
/// every protocol concern; callers get values, control metadata, and change
/// monitors, nothing else.
pub trait ProcessVariable {
    fn name(&self) -> &str;

    /// Current value.
    fn get(&self) -> Result<PvValue, PvError>;

    /// Write a new value. Every registered monitor fires before this
    /// returns.
    fn put(&mut self, value: PvValue) -> Result<(), PvError>;

    /// Control metadata: units, precision, ctrl limits, enum labels.
    fn metadata(&self) -> Result<PvMetadata, PvError>;

    /// Register a change monitor, fired on every subsequent accepted `put`.
    fn add_monitor(&mut self, monitor: Monitor);

    /// A second handle to the same underlying variable. Client handles are
    /// cheap shared references, so widgets and commit actions can each hold
    /// their own.
    fn duplicate(&self) -> Box<dyn ProcessVariable>;
}
