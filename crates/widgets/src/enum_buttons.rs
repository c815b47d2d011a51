//! Toggle-button row bound to an enum-typed variable.

use std::sync::mpsc::Sender;

use bus::PvEvent;
use core_types::WidgetId;
use pv::{PvError, PvValue, ProcessVariable};

use crate::binding::PvBinding;
use crate::screen::PvWidget;
use crate::surface::ButtonRowSurface;

/// One toggle button per choice label, exactly one pressed. Clicking a
/// button writes its index; change notifications re-press the row.
pub struct PvEnumButtons<B: ButtonRowSurface> {
    wid: WidgetId,
    binding: PvBinding,
    surface: B,
}

impl<B: ButtonRowSurface> PvEnumButtons<B> {
    pub fn new(
        wid: WidgetId,
        pv: Box<dyn ProcessVariable>,
        mut surface: B,
        events: Sender<PvEvent>,
    ) -> Result<Self, PvError> {
        let binding = PvBinding::attach(wid, pv, events)?;
        if binding.metadata().enum_strs.is_empty() {
            log::warn!(
                target: "widgets.enum",
                "{} has no choice labels, the button row will stay empty",
                binding.pv().name()
            );
        }
        surface.set_items(&binding.metadata().enum_strs);
        if let Some(index) = binding.pv().get()?.as_enum_index() {
            surface.set_pressed(index as usize);
        }
        Ok(Self {
            wid,
            binding,
            surface,
        })
    }

    /// The user clicked button `index`: write it.
    pub fn click(&mut self, index: usize) -> Result<(), PvError> {
        self.binding.pv_mut().put(PvValue::Enum(index as u16))
    }

    pub fn surface(&self) -> &B {
        &self.surface
    }
}

impl<B: ButtonRowSurface> PvWidget for PvEnumButtons<B> {
    fn id(&self) -> WidgetId {
        self.wid
    }

    fn on_pv_event(&mut self, event: &PvEvent) {
        self.binding.note_update(&event.update);
        self.surface.set_items(&self.binding.metadata().enum_strs);
        if let Some(index) = event.update.value.as_enum_index() {
            self.surface.set_pressed(index as usize);
        }
    }

    fn rendered(&self) -> String {
        self.surface
            .pressed()
            .and_then(|i| self.binding.metadata().enum_strs.get(i))
            .cloned()
            .unwrap_or_default()
    }
}
