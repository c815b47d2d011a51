//! # widgets
//!
//! Process-variable-bound controls for operator screens.
//!
//! Every widget is a composition of three parts: a display surface (the
//! toolkit's face, behind [`DisplaySurface`] and its siblings), a
//! [`PvBinding`] to one live variable, and its own behavior. Change notifications arrive through
//! a [`Screen`]'s dispatch queue and are applied on the UI thread only;
//! monitors never touch widget state directly.

mod alarm;
mod binding;
mod enum_buttons;
mod enum_select;
mod float_field;
mod label;
mod screen;
mod surface;
mod text_field;

pub use alarm::{AlarmAction, PvAlarmWatch, TripDirection};
pub use binding::PvBinding;
pub use enum_buttons::PvEnumButtons;
pub use enum_select::PvEnumSelect;
pub use float_field::PvFloatField;
pub use label::PvLabel;
pub use screen::{PvWidget, Screen};
pub use surface::{
    BufferButtonRow, BufferChoice, BufferSurface, ButtonRowSurface, ChoiceSurface, DisplaySurface,
};
pub use text_field::PvTextField;
