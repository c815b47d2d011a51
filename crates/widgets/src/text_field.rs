//! Editable text control bound to a string-typed variable.

use std::sync::mpsc::Sender;

use bus::PvEvent;
use core_types::WidgetId;
use pv::{PvError, PvValue, ProcessVariable};

use crate::binding::PvBinding;
use crate::screen::PvWidget;
use crate::surface::DisplaySurface;

/// Free-form text entry: displays the variable as a string, and Enter puts
/// the edited text back. No filtering; that is the numeric field's job.
pub struct PvTextField<S: DisplaySurface> {
    wid: WidgetId,
    binding: PvBinding,
    surface: S,
}

impl<S: DisplaySurface> PvTextField<S> {
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

    /// Commit the surface's current text to the variable.
    pub fn commit(&mut self) -> Result<(), PvError> {
        let text = self.surface.text();
        self.binding
            .pv_mut()
            .put(PvValue::Str(text.trim().to_string()))
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}

impl<S: DisplaySurface> PvWidget for PvTextField<S> {
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
