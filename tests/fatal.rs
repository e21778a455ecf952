// Termination runs in a child copy of this test binary; the marker variable
// tells the child which scenario to play.
use std::io::{self, Write};
use std::process::{Command, Output};

use lightlog::{check_that, error, fatal, info, ColorMode, Config, Level, FAILURE_STATUS};

const CHILD: &str = "LIGHTLOG_TEST_CHILD";

fn run_child(scenario: &str) -> Output {
    let exe = std::env::current_exe().expect("current exe");
    Command::new(exe)
        .args(["child", "--exact", "--nocapture", "--test-threads=1"])
        .env(CHILD, scenario)
        .output()
        .expect("failed to run child")
}

struct Unwritable;
impl Write for Unwritable {
    fn write(&mut self, _: &[u8]) -> io::Result<usize> {
        Err(io::Error::other("sink closed"))
    }
    fn flush(&mut self) -> io::Result<()> {
        Err(io::Error::other("sink closed"))
    }
}

fn stderr_of(out: &Output) -> String {
    String::from_utf8_lossy(&out.stderr).into_owned()
}

#[test]
fn child() {
    let Ok(scenario) = std::env::var(CHILD) else {
        return;
    };
    let base = Config::builder().color(ColorMode::Never).stderr();
    match scenario.as_str() {
        "fatal" => {
            lightlog::init(base.build()).unwrap();
            info!("before");
            fatal!("could not compute {}", 42);
        }
        "die-on-error" => {
            lightlog::init(base.die_level(Some(Level::Error)).build()).unwrap();
            check_that!(1 + 1 == 3);
        }
        "never-die" => {
            lightlog::init(base.die_level(None).build()).unwrap();
            fatal!("still here");
            error!("and here");
            return;
        }
        "fatal-stream" => {
            lightlog::init(base.build()).unwrap();
            fatal!().append("streamed ").append("to the end");
        }
        "broken-sink" => {
            let lg = Config::builder()
                .color(ColorMode::Never)
                .writer(Box::new(Unwritable))
                .build_logger();
            lightlog::local::error!(&lg, "dropped quietly");
            lightlog::local::fatal!(&lg, "must reach stderr");
        }
        other => panic!("unknown scenario {other}"),
    }
    unreachable!("the record above must end the process");
}

#[test]
fn fatal_flushes_then_exits_with_failure() {
    let out = run_child("fatal");
    assert_eq!(out.status.code(), Some(FAILURE_STATUS));
    let err = stderr_of(&out);
    let lines: Vec<&str> = err.lines().filter(|l| l.starts_with('[')).collect();
    assert_eq!(lines.len(), 2, "{err}");
    assert!(lines[0].contains("[INFO ]") && lines[0].ends_with("before"));
    assert!(lines[1].contains("[FATAL]:fatal.rs "), "{err}");
    assert!(lines[1].ends_with("could not compute 42"), "{err}");
}

#[test]
fn lowered_die_level_ends_on_error() {
    let out = run_child("die-on-error");
    assert_eq!(out.status.code(), Some(FAILURE_STATUS));
    let err = stderr_of(&out);
    assert!(err.contains("[ERROR]"), "{err}");
    assert!(err.contains("CHECK_THAT(1 + 1 == 3)"), "{err}");
}

#[test]
fn die_level_off_keeps_running() {
    let out = run_child("never-die");
    assert!(out.status.success(), "{out:?}");
    let err = stderr_of(&out);
    assert!(err.contains("still here"));
    assert!(err.contains("and here"));
}

#[test]
fn streamed_fatal_is_complete() {
    let out = run_child("fatal-stream");
    assert_eq!(out.status.code(), Some(FAILURE_STATUS));
    assert!(stderr_of(&out).contains("[FATAL]:fatal.rs :"));
    assert!(stderr_of(&out).contains("streamed to the end\n"));
}

#[test]
fn failing_sink_does_not_mask_fatal() {
    let out = run_child("broken-sink");
    assert_eq!(out.status.code(), Some(FAILURE_STATUS));
    let err = stderr_of(&out);
    let lines: Vec<&str> = err.lines().filter(|l| l.starts_with('[')).collect();
    // only the terminating record is rerouted
    assert_eq!(lines.len(), 1, "{err}");
    assert!(lines[0].contains("[FATAL]:fatal.rs "), "{err}");
    assert!(lines[0].ends_with("must reach stderr"), "{err}");
}
