//! Read-only text display of a live value.

use std::sync::mpsc::Sender;

use bus::PvEvent;
use core_types::WidgetId;
use pv::{PvError, ProcessVariable};

use crate::binding::PvBinding;
use crate::screen::PvWidget;
use crate::surface::DisplaySurface;

/// Static text bound to a variable: shows the rendered value, updates on
/// every change notification, accepts no input.
pub struct PvLabel<S: DisplaySurface> {
    wid: WidgetId,
    binding: PvBinding,
    surface: S,
}

impl<S: DisplaySurface> PvLabel<S> {
    pub fn new(
        wid: WidgetId,
        pv: Box<dyn ProcessVariable>,
        mut surface: S,
        events: Sender<PvEvent>,
    ) -> Result<Self, PvError> {
        let binding = PvBinding::attach(wid, pv, events)?;
        surface.set_text(&binding.render_current()?);
        Ok(Self {
            wid,
            binding,
            surface,
        })
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}

impl<S: DisplaySurface> PvWidget for PvLabel<S> {
    fn id(&self) -> WidgetId {
        self.wid
    }

    fn on_pv_event(&mut self, event: &PvEvent) {
        self.binding.note_update(&event.update);
        self.surface.set_text(&self.binding.render(&event.update.value));
    }

    fn rendered(&self) -> String {
        self.surface.text()
    }
}
