//! Alarm watch: fires an action when a value crosses a trip point.

use std::sync::mpsc::Sender;

use bus::PvEvent;
use core_types::WidgetId;
use pv::{PvError, ProcessVariable};

use crate::binding::PvBinding;
use crate::screen::PvWidget;

/// Which direction of travel trips the alarm.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TripDirection {
    /// Trip when the value moves above the trip point.
    RisesAbove,
    /// Trip when the value moves below the trip point.
    FallsBelow,
}

/// Invoked with the offending value each time the alarm trips.
pub type AlarmAction = Box<dyn FnMut(f64)>;

/// Invisible widget that watches one variable and fires an action when it
/// crosses the trip point. Edge-triggered: staying beyond the trip point
/// does not re-fire, the value must come back first.
pub struct PvAlarmWatch {
    wid: WidgetId,
    binding: PvBinding,
    trip_point: f64,
    direction: TripDirection,
    in_alarm: bool,
    action: AlarmAction,
}

impl PvAlarmWatch {
    pub fn new(
        wid: WidgetId,
        pv: Box<dyn ProcessVariable>,
        trip_point: f64,
        direction: TripDirection,
        action: AlarmAction,
        events: Sender<PvEvent>,
    ) -> Result<Self, PvError> {
        let binding = PvBinding::attach(wid, pv, events)?;
        Ok(Self {
            wid,
            binding,
            trip_point,
            direction,
            in_alarm: false,
            action,
        })
    }

    pub fn in_alarm(&self) -> bool {
        self.in_alarm
    }

    fn beyond(&self, value: f64) -> bool {
        match self.direction {
            TripDirection::RisesAbove => value > self.trip_point,
            TripDirection::FallsBelow => value < self.trip_point,
        }
    }
}

impl PvWidget for PvAlarmWatch {
    fn id(&self) -> WidgetId {
        self.wid
    }

    fn on_pv_event(&mut self, event: &PvEvent) {
        self.binding.note_update(&event.update);
        let Some(value) = event.update.value.as_f64() else {
            return;
        };

        let beyond = self.beyond(value);
        if beyond && !self.in_alarm {
            log::debug!(
                target: "widgets.alarm",
                "{} tripped at {value}",
                self.binding.pv().name()
            );
            (self.action)(value);
        }
        self.in_alarm = beyond;
    }

    fn rendered(&self) -> String {
        if self.in_alarm { "ALARM" } else { "ok" }.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pv::{PvMetadata, PvValue, SimHost};
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::sync::mpsc::channel;

    #[test]
    fn trips_once_per_excursion() {
        let mut host = SimHost::new();
        let pv = host.add_pv("T:TEMP", PvValue::Double(20.0), PvMetadata::default());

        let trips = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&trips);
        let (tx, rx) = channel();
        let mut watch = PvAlarmWatch::new(
            WidgetId::from_raw(1),
            Box::new(pv.clone()),
            80.0,
            TripDirection::RisesAbove,
            Box::new(move |v| sink.borrow_mut().push(v)),
            tx,
        )
        .unwrap();

        let mut writer = host.pv("T:TEMP").unwrap();
        for value in [70.0, 85.0, 90.0, 75.0, 81.0] {
            writer.put(PvValue::Double(value)).unwrap();
            watch.on_pv_event(&rx.try_recv().unwrap());
        }

        // 85 trips, 90 stays inside the same excursion, 81 trips again.
        assert_eq!(*trips.borrow(), vec![85.0, 81.0]);
        assert!(watch.in_alarm());
        assert_eq!(watch.rendered(), "ALARM");
    }

    #[test]
    fn falls_below_direction() {
        let mut host = SimHost::new();
        let pv = host.add_pv("P:FLOW", PvValue::Double(5.0), PvMetadata::default());

        let trips = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&trips);
        let (tx, rx) = channel();
        let mut watch = PvAlarmWatch::new(
            WidgetId::from_raw(1),
            Box::new(pv.clone()),
            1.0,
            TripDirection::FallsBelow,
            Box::new(move |v| sink.borrow_mut().push(v)),
            tx,
        )
        .unwrap();

        let mut writer = host.pv("P:FLOW").unwrap();
        for value in [2.0, 0.5, 3.0] {
            writer.put(PvValue::Double(value)).unwrap();
            watch.on_pv_event(&rx.try_recv().unwrap());
        }

        assert_eq!(*trips.borrow(), vec![0.5]);
        assert!(!watch.in_alarm());
        assert_eq!(watch.rendered(), "ok");
    }
}
