//! End-to-end: simulated control system -> monitors -> dispatch queue ->
//! pump -> widgets, including the dead-widget guard.

use std::thread;

use pv::{ProcessVariable, PvMetadata, PvValue, SimHost};
use widgets::{
    BufferChoice, BufferSurface, PvEnumSelect, PvFloatField, PvLabel, PvWidget, Screen,
};

fn build_host() -> SimHost {
    let mut host = SimHost::new();
    host.add_pv(
        "T:SETPOINT",
        PvValue::Double(50.0),
        PvMetadata {
            units: "C".to_string(),
            precision: Some(2),
            lower_ctrl_limit: Some(0.0),
            upper_ctrl_limit: Some(100.0),
            ..Default::default()
        },
    );
    host.add_pv(
        "V:STATE",
        PvValue::Enum(0),
        PvMetadata {
            enum_strs: vec!["closed".to_string(), "open".to_string()],
            ..Default::default()
        },
    );
    host
}

#[test]
fn playback_thread_updates_reach_every_bound_widget() {
    let host = build_host();
    let mut screen = Screen::new();

    let label_id = screen.allocate_id();
    let label = PvLabel::new(
        label_id,
        Box::new(host.pv("T:SETPOINT").unwrap()),
        BufferSurface::new(),
        screen.sender(),
    )
    .unwrap();
    screen.add(Box::new(label));

    let field_id = screen.allocate_id();
    let field = PvFloatField::new(
        field_id,
        Box::new(host.pv("T:SETPOINT").unwrap()),
        BufferSurface::new(),
        screen.sender(),
    )
    .unwrap();
    screen.add(Box::new(field));

    let select_id = screen.allocate_id();
    let select = PvEnumSelect::new(
        select_id,
        Box::new(host.pv("V:STATE").unwrap()),
        BufferChoice::new(),
        screen.sender(),
    )
    .unwrap();
    screen.add(Box::new(select));

    assert_eq!(screen.widget(label_id).unwrap().rendered(), "50.00");
    assert_eq!(screen.widget(select_id).unwrap().rendered(), "closed");

    // The control system lives on its own thread; monitors only enqueue.
    let mut temp = host.pv("T:SETPOINT").unwrap();
    let mut valve = host.pv("V:STATE").unwrap();
    let playback = thread::spawn(move || {
        temp.put(PvValue::Double(62.5)).unwrap();
        valve.put(PvValue::Enum(1)).unwrap();
    });
    playback.join().unwrap();

    // Two widgets monitor the setpoint, one monitors the valve.
    assert_eq!(screen.pump(), 3);
    assert_eq!(screen.widget(label_id).unwrap().rendered(), "62.50");
    assert_eq!(screen.widget(field_id).unwrap().rendered(), "62.50");
    assert_eq!(screen.widget(select_id).unwrap().rendered(), "open");
    assert_eq!(screen.dropped(), 0);

    // Applying the update must not echo a redundant write back: a second
    // pump finds the queue empty.
    assert_eq!(screen.pump(), 0);
}

#[test]
fn events_for_destroyed_widgets_are_dropped_not_delivered() {
    let host = build_host();
    let mut screen = Screen::new();

    let label_id = screen.allocate_id();
    let label = PvLabel::new(
        label_id,
        Box::new(host.pv("T:SETPOINT").unwrap()),
        BufferSurface::new(),
        screen.sender(),
    )
    .unwrap();
    screen.add(Box::new(label));

    let mut temp = host.pv("T:SETPOINT").unwrap();
    temp.put(PvValue::Double(55.0)).unwrap();
    assert_eq!(screen.pump(), 1);

    // Destroy the widget while an update is still in flight.
    temp.put(PvValue::Double(60.0)).unwrap();
    screen.remove(label_id);

    assert_eq!(screen.pump(), 0);
    assert_eq!(screen.dropped(), 1);

    // Later updates keep draining cleanly.
    temp.put(PvValue::Double(65.0)).unwrap();
    assert_eq!(screen.pump(), 0);
    assert_eq!(screen.dropped(), 2);
}
