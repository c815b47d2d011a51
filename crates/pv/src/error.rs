use thiserror::Error;

/// Failures at the control-system boundary.
///
/// Widget code treats these as degraded display states, never as panics.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum PvError {
    #[error("no process variable named {0:?}")]
    UnknownPv(String),

    #[error("value type does not match process variable {0:?}")]
    TypeMismatch(String),

    #[error("process variable {0:?} is not connected")]
    Disconnected(String),
}
