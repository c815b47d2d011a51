use core_types::{PvName, WidgetId};
use pv::PvUpdate;
use std::sync::mpsc::{Receiver, Sender, channel};

/// Envelope a monitor posts from a control-system thread to the UI thread.
///
/// The widget id is the routing key: the screen looks it up in its registry
/// and drops the event when the target widget no longer exists.
#[derive(Clone, Debug, PartialEq)]
pub struct PvEvent {
    pub wid: WidgetId,
    pub pv: PvName,
    pub update: PvUpdate,
}

/// Single-consumer queue bound to the UI thread.
///
/// Senders are cloned into monitor closures and may post from any thread;
/// `drain` must only be called from the UI thread. Neither side ever
/// blocks.
pub struct DispatchQueue {
    tx: Sender<PvEvent>,
    rx: Receiver<PvEvent>,
}

impl DispatchQueue {
    pub fn new() -> Self {
        let (tx, rx) = channel();
        Self { tx, rx }
    }

    /// A sender end for monitor closures.
    pub fn sender(&self) -> Sender<PvEvent> {
        self.tx.clone()
    }

    /// Take everything queued so far, without blocking.
    pub fn drain(&self) -> Vec<PvEvent> {
        self.rx.try_iter().collect()
    }
}

impl Default for DispatchQueue {
    fn default() -> Self {
        Self::new()
    }
}
