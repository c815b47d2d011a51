//! Bounded numeric entry bound to a double-typed variable.

use std::sync::mpsc::Sender;

use bus::PvEvent;
use core_types::{Palette, WidgetId};
use entry_core::{CommitAction, CommitOutcome, FloatEntry, FloatEntryOptions, Key, KeyDecision};
use pv::{PvError, PvValue, ProcessVariable};

use crate::binding::PvBinding;
use crate::screen::PvWidget;
use crate::surface::DisplaySurface;

/// Numeric entry over a live variable.
///
/// The entry core filters keystrokes and resolves commits; this widget wires
/// it to a surface and to the variable. Control limits become the bounds,
/// the record's precision drives formatting, and the commit action puts
/// accepted values back, skipping writes that would not change the current
/// reading.
pub struct PvFloatField<S: DisplaySurface> {
    wid: WidgetId,
    binding: PvBinding,
    surface: S,
    entry: FloatEntry,
}

impl<S: DisplaySurface> PvFloatField<S> {
    pub fn new(
        wid: WidgetId,
        pv: Box<dyn ProcessVariable>,
        mut surface: S,
        events: Sender<PvEvent>,
    ) -> Result<Self, PvError> {
        let writer = pv.duplicate();
        let binding = PvBinding::attach(wid, pv, events)?;
        let metadata = binding.metadata().clone();

        // Precision must be in place before the value is rendered, or the
        // first display would be formatted with the wrong digit count.
        let options = FloatEntryOptions {
            initial: binding.render_current()?,
            min: metadata.lower_ctrl_limit,
            max: metadata.upper_ctrl_limit,
            precision: Some(metadata.precision.unwrap_or(0) as usize),
            ..Default::default()
        };
        let mut entry = FloatEntry::new(options);
        entry.set_action(Some(put_action(writer)));

        surface.apply_style(entry.style());
        surface.set_text(entry.text());
        surface.set_palette(palette_for(entry.is_valid()));

        Ok(Self {
            wid,
            binding,
            surface,
            entry,
        })
    }

    /// Forward one key event from the surface.
    ///
    /// Enter is consumed here as a commit. For every other decision the
    /// surface acts: apply the admitted character or the native edit, then
    /// report back through [`Self::text_changed`]; rejected keys are simply
    /// swallowed.
    pub fn on_key(&mut self, key: Key) -> KeyDecision {
        let decision = self.entry.on_key(key, self.surface.selection().0);
        if decision == KeyDecision::Commit {
            self.commit(None);
        }
        decision
    }

    /// The surface's text changed under user editing; refresh the mirror
    /// and the live color cue.
    pub fn text_changed(&mut self) {
        let text = self.surface.text();
        let valid = self.entry.text_changed(&text);
        self.surface.set_palette(palette_for(valid));
    }

    /// Commit `candidate` (or the surface's current text) as a value-set
    /// request and apply the outcome to the surface.
    pub fn commit(&mut self, candidate: Option<&str>) -> CommitOutcome {
        if candidate.is_none() {
            let text = self.surface.text();
            self.entry.text_changed(&text);
        }
        self.entry.record_mark(self.surface.selection().0);

        let outcome = self.entry.commit(candidate);
        self.apply(&outcome);
        outcome
    }

    fn apply(&mut self, outcome: &CommitOutcome) {
        self.surface.set_text(&outcome.display);
        self.surface.set_palette(palette_for(outcome.valid));
        if !outcome.valid {
            self.surface.rejection_cue();
            log::debug!(
                target: "widgets.float",
                "rejected commit on {}, showing {}",
                self.binding.pv().name(),
                outcome.display
            );
        }
        self.surface.set_selection(outcome.caret, outcome.caret);
    }

    /// Focus arrived: put the caret back where it was last remembered.
    pub fn focus_gained(&mut self) {
        let mark = self.entry.mark();
        self.surface.set_selection(mark, mark);
    }

    /// Focus left: remember the caret for the next reformat.
    pub fn focus_lost(&mut self) {
        self.entry.record_mark(self.surface.selection().0);
    }

    pub fn entry(&self) -> &FloatEntry {
        &self.entry
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}

fn palette_for(valid: bool) -> Palette {
    if valid { Palette::VALID } else { Palette::INVALID }
}

/// The commit action: write the accepted value back unless the variable
/// already reads the same number.
fn put_action(mut pv: Box<dyn ProcessVariable>) -> CommitAction {
    Box::new(move |value| {
        let current = pv.get().ok().and_then(|v| v.as_f64());
        if current == Some(value) {
            return;
        }
        if let Err(err) = pv.put(PvValue::Double(value)) {
            log::debug!(target: "widgets.float", "put failed on {}: {err}", pv.name());
        }
    })
}

impl<S: DisplaySurface> PvWidget for PvFloatField<S> {
    fn id(&self) -> WidgetId {
        self.wid
    }

    fn on_pv_event(&mut self, event: &PvEvent) {
        self.binding.note_update(&event.update);

        // Precision before the value that depends on it, then fresh limits.
        self.entry
            .set_precision(event.update.metadata.precision.map(|p| p as usize));
        self.entry.set_min(event.update.metadata.lower_ctrl_limit);
        self.entry.set_max(event.update.metadata.upper_ctrl_limit);

        let text = self.binding.render(&event.update.value);
        self.commit(Some(text.as_str()));
    }

    fn rendered(&self) -> String {
        self.surface.text()
    }
}
