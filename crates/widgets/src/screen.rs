//! Widget registry and the UI-thread pump.

use std::collections::HashMap;
use std::sync::mpsc::Sender;

use bus::{DispatchQueue, PvEvent};
use core_types::WidgetId;

/// The capability set every bound widget provides: it renders a value and
/// receives change notifications.
pub trait PvWidget {
    fn id(&self) -> WidgetId;

    /// Apply one marshaled change notification. Only ever called on the UI
    /// thread, by [`Screen::pump`].
    fn on_pv_event(&mut self, event: &PvEvent);

    /// The widget's current rendered text, for headless inspection.
    fn rendered(&self) -> String;
}

/// Owns the widgets of one operator screen and pumps their events.
///
/// Monitors post onto the screen's queue from control-system threads; a
/// periodic [`Screen::pump`] on the UI thread drains it and routes each
/// event to the widget it addresses. Liveness is registry membership:
/// events for a removed widget are dropped, never delivered to freed state.
pub struct Screen {
    queue: DispatchQueue,
    widgets: HashMap<WidgetId, Box<dyn PvWidget>>,
    order: Vec<WidgetId>,
    next_id: u64,
    dropped: u64,
}

impl Screen {
    pub fn new() -> Self {
        Self {
            queue: DispatchQueue::new(),
            widgets: HashMap::new(),
            order: Vec::new(),
            next_id: 1,
            dropped: 0,
        }
    }

    /// Allocate an id for a widget that will join this screen.
    pub fn allocate_id(&mut self) -> WidgetId {
        let id = WidgetId::from_raw(self.next_id);
        self.next_id += 1;
        id
    }

    /// A sender end of the dispatch queue, for bindings to clone into their
    /// monitors.
    pub fn sender(&self) -> Sender<PvEvent> {
        self.queue.sender()
    }

    pub fn add(&mut self, widget: Box<dyn PvWidget>) {
        let wid = widget.id();
        self.order.push(wid);
        self.widgets.insert(wid, widget);
    }

    /// Remove (destroy) a widget. Events still in flight for it are dropped
    /// on the next pump.
    pub fn remove(&mut self, wid: WidgetId) -> Option<Box<dyn PvWidget>> {
        self.order.retain(|w| *w != wid);
        self.widgets.remove(&wid)
    }

    pub fn widget(&self, wid: WidgetId) -> Option<&dyn PvWidget> {
        self.widgets.get(&wid).map(|w| w.as_ref())
    }

    /// Widgets in the order they were added.
    pub fn widgets(&self) -> impl Iterator<Item = &dyn PvWidget> {
        self.order
            .iter()
            .filter_map(|wid| self.widgets.get(wid).map(|w| w.as_ref()))
    }

    /// Drain the queue and deliver each event to its widget. Returns the
    /// number delivered; never blocks.
    pub fn pump(&mut self) -> usize {
        let mut delivered = 0;
        for event in self.queue.drain() {
            match self.widgets.get_mut(&event.wid) {
                Some(widget) => {
                    widget.on_pv_event(&event);
                    delivered += 1;
                }
                None => {
                    self.dropped += 1;
                    log::trace!(
                        target: "widgets.screen",
                        "dropped {} event for dead widget {:?}",
                        event.pv,
                        event.wid
                    );
                }
            }
        }
        delivered
    }

    /// Events dropped because their widget was gone.
    pub fn dropped(&self) -> u64 {
        self.dropped
    }
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}
