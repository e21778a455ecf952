fn main() -> Result<(), log::SetLoggerError> {
    lightlog::bridge::install()?;

    log::info!("routed through lightlog");
    log::warn!("facade level {}", log::max_level());
    lightlog::trace_scope!("work");
    log::error!("indented like any other record");
    Ok(())
}
