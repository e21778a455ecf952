use lightlog::{
    check_that, debug, error, info, init_from_env, look, trace_scope, verbose, warn, Level,
};

fn parse(input: &str) -> Option<u32> {
    trace_scope!();
    look!(input);
    let n = input.trim().parse().ok();
    check_that!(n.is_some(), "not a number: {:?}", input);
    n
}

fn main() {
    // Configure from the environment (optional):
    //   LIGHTLOG_LEVEL=verbose LIGHTLOG_COLOR=always LIGHTLOG_TIME_FORMAT=%T%.3f
    if init_from_env().is_err() {
        eprintln!("logger already installed");
    }

    verbose!("hello {}", "world");
    debug!("hello {}", "world");
    info!("hello {}", "world");
    warn!("disk almost full: {}%", 92);

    {
        trace_scope!("startup");
        info!("parsed {:?}", parse("42"));
        info!("parsed {:?}", parse("forty-two"));
    }

    lightlog::log!(Level::Info).append("streamed ").append(3).append(" values");
    error!("giving up after {} retries", 3);
    lightlog::fatal!("unrecoverable; exiting with status {}", lightlog::FAILURE_STATUS);
}
