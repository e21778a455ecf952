use lightlog::local::{debug, info, trace_scope};
use lightlog::{ColorMode, Level, Logger, TimeFormat};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let logger = Logger::builder()
        .level(Level::Debug)
        .die_level(None)
        .color(ColorMode::Always)
        .time_format(TimeFormat::parse("%Y-%m-%d %H:%M:%S%.3f")?)
        .stdout()
        .build_logger();

    info!(&logger, "Hello, local world!");
    lightlog::info!("Hello, global world!");

    {
        trace_scope!(&logger, "startup-local");
        debug!(&logger, "only visible at DEBUG+");
        std::thread::sleep(std::time::Duration::from_millis(10));
    }
    {
        lightlog::trace_scope!("startup-global");
        lightlog::info!("indented under the global scope");
    }

    Ok(())
}
