use std::thread;
use std::time::Duration;

use mimalloc::MiMalloc;
use pv::{ProcessVariable, PvMetadata, PvValue, SimHost};
use widgets::{BufferChoice, BufferSurface, PvEnumSelect, PvFloatField, PvLabel, Screen};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

const POLL_PERIOD: Duration = Duration::from_millis(25);

fn main() {
    env_logger::init();

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

    let mut screen = Screen::new();

    let label_id = screen.allocate_id();
    let label = PvLabel::new(
        label_id,
        Box::new(host.pv("T:SETPOINT").expect("setpoint pv")),
        BufferSurface::new(),
        screen.sender(),
    )
    .expect("bind label");
    screen.add(Box::new(label));

    let field_id = screen.allocate_id();
    let field = PvFloatField::new(
        field_id,
        Box::new(host.pv("T:SETPOINT").expect("setpoint pv")),
        BufferSurface::new(),
        screen.sender(),
    )
    .expect("bind float field");
    screen.add(Box::new(field));

    let select_id = screen.allocate_id();
    let select = PvEnumSelect::new(
        select_id,
        Box::new(host.pv("V:STATE").expect("valve pv")),
        BufferChoice::new(),
        screen.sender(),
    )
    .expect("bind selector");
    screen.add(Box::new(select));

    // A playback thread stands in for the live control system.
    let mut temp = host.pv("T:SETPOINT").expect("setpoint pv");
    let mut valve = host.pv("V:STATE").expect("valve pv");
    let playback = thread::spawn(move || {
        for (tick, value) in [48.5, 52.25, 61.0, 59.75].into_iter().enumerate() {
            temp.put(PvValue::Double(value)).expect("put setpoint");
            valve
                .put(PvValue::Enum((tick % 2) as u16))
                .expect("put valve");
            thread::sleep(POLL_PERIOD);
        }
    });

    // The UI loop: drain the queue at the poll period and repaint.
    for _ in 0..12 {
        if screen.pump() > 0 {
            let rendered: Vec<String> = screen.widgets().map(|w| w.rendered()).collect();
            println!(
                "setpoint label {:>8} | entry {:>8} | valve {:>8}",
                rendered[0], rendered[1], rendered[2]
            );
        }
        thread::sleep(POLL_PERIOD);
    }

    playback.join().expect("playback thread");
    screen.pump();

    println!(
        "final: label {} entry {} valve {} ({} stale events dropped)",
        screen.widget(label_id).map(|w| w.rendered()).unwrap_or_default(),
        screen.widget(field_id).map(|w| w.rendered()).unwrap_or_default(),
        screen.widget(select_id).map(|w| w.rendered()).unwrap_or_default(),
        screen.dropped()
    );
}
