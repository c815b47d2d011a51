//! Dropdown choice bound to an enum-typed variable.

use std::sync::mpsc::Sender;

use bus::PvEvent;
use core_types::WidgetId;
use pv::{PvError, PvValue, ProcessVariable};

use crate::binding::PvBinding;
use crate::screen::PvWidget;
use crate::surface::ChoiceSurface;

/// One dropdown entry per choice label; picking one writes its index, and
/// change notifications move the selection.
pub struct PvEnumSelect<C: ChoiceSurface> {
    wid: WidgetId,
    binding: PvBinding,
    surface: C,
}

impl<C: ChoiceSurface> PvEnumSelect<C> {
    pub fn new(
        wid: WidgetId,
        pv: Box<dyn ProcessVariable>,
        mut surface: C,
        events: Sender<PvEvent>,
    ) -> Result<Self, PvError> {
        let binding = PvBinding::attach(wid, pv, events)?;
        if binding.metadata().enum_strs.is_empty() {
            log::warn!(
                target: "widgets.enum",
                "{} has no choice labels, the selector will stay empty",
                binding.pv().name()
            );
        }
        surface.set_items(&binding.metadata().enum_strs);
        if let Some(index) = binding.pv().get()?.as_enum_index() {
            surface.set_selected(index as usize);
        }
        Ok(Self {
            wid,
            binding,
            surface,
        })
    }

    /// The user picked a choice: write its index.
    pub fn choose(&mut self, index: usize) -> Result<(), PvError> {
        self.binding.pv_mut().put(PvValue::Enum(index as u16))
    }

    pub fn surface(&self) -> &C {
        &self.surface
    }
}

impl<C: ChoiceSurface> PvWidget for PvEnumSelect<C> {
    fn id(&self) -> WidgetId {
        self.wid
    }

    fn on_pv_event(&mut self, event: &PvEvent) {
        self.binding.note_update(&event.update);
        self.surface.set_items(&self.binding.metadata().enum_strs);
        if let Some(index) = event.update.value.as_enum_index() {
            self.surface.set_selected(index as usize);
        }
    }

    fn rendered(&self) -> String {
        self.surface
            .selected()
            .and_then(|i| self.binding.metadata().enum_strs.get(i))
            .cloned()
            .unwrap_or_default()
    }
}
