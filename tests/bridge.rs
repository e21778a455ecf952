#![cfg(feature = "log")]

mod helpers;
use helpers::{parse_line, Mem};
use lightlog::{ColorMode, Level, Logger};

#[test]
fn facade_records_reach_the_logger() {
    let (w, buf) = Mem::new();
    let lg: &'static Logger = Logger::builder()
        .level(Level::Info)
        .die_level(None)
        .color(ColorMode::Never)
        .writer(w)
        .build_static();
    lightlog::bridge::install_with(lg).unwrap();
    assert_eq!(log::max_level(), log::LevelFilter::Info);

    log::info!("via facade {}", 7);
    log::warn!("careful");
    log::debug!("hidden");
    {
        lightlog::local::trace_scope!(lg, "nested");
        log::error!("inside");
    }

    let text = String::from_utf8(buf.lock().unwrap().clone()).unwrap();
    let lines: Vec<_> = text.lines().map(|l| parse_line(l).unwrap()).collect();
    let bodies: Vec<_> = lines.iter().map(|l| l.body.as_str()).collect();
    // scope arrows are DEBUG, below this logger's threshold
    assert_eq!(bodies, ["via facade 7", "careful", "inside"]);
    assert_eq!(lines[0].tag, "INFO ");
    assert_eq!(lines[0].file, "bridge.rs");
    assert_eq!(lines[1].tag, "WARN ");
    assert_eq!(lines[2].indent, 1);

    assert!(lightlog::bridge::install().is_err(), "facade logger is set once");
}
