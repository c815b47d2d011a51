//! The composition object binding one widget to one process variable.

use std::sync::mpsc::Sender;

use bus::PvEvent;
use core_types::WidgetId;
use pv::{PvError, PvMetadata, PvUpdate, PvValue, ProcessVariable, char_value};

/// Holds a variable handle plus cached control metadata, and renders values
/// for display. Widgets compose one of these instead of inheriting a PV
/// face.
pub struct PvBinding {
    pv: Box<dyn ProcessVariable>,
    metadata: PvMetadata,
}

impl PvBinding {
    /// Bind widget `wid` to `pv`: fetch control metadata and register a
    /// monitor that posts [`PvEvent`]s onto the screen's dispatch queue.
    ///
    /// The monitor fires on whatever thread performs the put; all it does is
    /// hand the update off.
    pub fn attach(
        wid: WidgetId,
        mut pv: Box<dyn ProcessVariable>,
        events: Sender<PvEvent>,
    ) -> Result<Self, PvError> {
        let metadata = pv.metadata()?;
        let pv_name = pv.name().to_string();
        pv.add_monitor(Box::new(move |update: &PvUpdate| {
            let _ = events.send(PvEvent {
                wid,
                pv: pv_name.clone(),
                update: update.clone(),
            });
        }));
        Ok(Self { pv, metadata })
    }

    pub fn pv(&self) -> &dyn ProcessVariable {
        self.pv.as_ref()
    }

    pub fn pv_mut(&mut self) -> &mut dyn ProcessVariable {
        self.pv.as_mut()
    }

    pub fn metadata(&self) -> &PvMetadata {
        &self.metadata
    }

    /// Refresh the metadata cache from an incoming update.
    pub fn note_update(&mut self, update: &PvUpdate) {
        self.metadata = update.metadata.clone();
    }

    /// Render a value for display: the choice label when the value is an
    /// enum index with a known label, fixed point per the record's declared
    /// precision otherwise.
    pub fn render(&self, value: &PvValue) -> String {
        if let Some(index) = value.as_enum_index()
            && let Some(label) = self.metadata.enum_strs.get(index as usize)
        {
            return label.clone();
        }
        char_value(value, self.metadata.precision)
    }

    /// Render the variable's current value.
    pub fn render_current(&self) -> Result<String, PvError> {
        Ok(self.render(&self.pv.get()?))
    }
}
