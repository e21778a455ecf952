// Exact-bytes checks; the file is named so its column is not truncated.
mod helpers;
use helpers::Mem;
use lightlog::local::{info, trace_scope};
use lightlog::{ColorMode, Level, TimeFormat};

fn fixed_clock_logger(color: ColorMode) -> (&'static lightlog::Logger, helpers::Buf) {
    let (w, buf) = Mem::new();
    let lg = lightlog::Logger::builder()
        .level(Level::Info)
        .die_level(None)
        .color(color)
        // no specifiers: every record is stamped with this literal
        .time_format(TimeFormat::parse("14:55:02").unwrap())
        .writer(w)
        .build_static();
    (lg, buf)
}

fn text(buf: &helpers::Buf) -> String {
    String::from_utf8(buf.lock().unwrap().clone()).unwrap()
}

#[test]
fn info_line_at_depth_one() {
    let (lg, buf) = fixed_clock_logger(ColorMode::Never);
    let line;
    {
        // scope records are DEBUG, so only the depth shows
        trace_scope!(lg, "outer");
        line = line!() + 1;
        info!(lg).append("answer=").append(42);
    }
    let expected = format!("[14:55:02][INFO ]:demo.rs  :{line:>3}:   answer=42\n");
    assert_eq!(text(&buf), expected);
}

#[test]
fn same_inputs_same_bytes() {
    let (lg, buf) = fixed_clock_logger(ColorMode::Never);
    for _ in 0..2 {
        info!(lg, "x");
    }
    let t = text(&buf);
    let lines: Vec<&str> = t.lines().collect();
    assert_eq!(lines.len(), 2);
    // same call site in a loop: identical preamble and body
    assert_eq!(lines[0], lines[1]);
}

#[test]
#[cfg(feature = "color")]
fn colored_tag() {
    let (lg, buf) = fixed_clock_logger(ColorMode::Always);
    let line = line!() + 1;
    info!(lg, "hue");
    let expected = format!("[14:55:02][\x1b[35mINFO \x1b[0m]:demo.rs  :{line:>3}: hue\n");
    assert_eq!(text(&buf), expected);
}
