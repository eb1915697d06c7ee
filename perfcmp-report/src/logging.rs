use crate::config::PARSE_ERROR_TARGET;
use tracing_subscriber::EnvFilter;

fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// `RUST_LOG` when set, otherwise the `-v` level. Parse errors stay at warn either way.
fn filter(verbosity: u8) -> EnvFilter {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_for(verbosity)));
    let parse_errors = format!("{PARSE_ERROR_TARGET}=warn")
        .parse()
        .expect("parse error directive is valid");
    filter.add_directive(parse_errors)
}

/// Install the stderr subscriber.
///
/// Lines carry only the message and fields so diagnostics such as
/// `Error parsing <path>: <error>` read as plain text.
pub fn init(verbosity: u8) {
    tracing_subscriber::fmt()
        .with_env_filter(filter(verbosity))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .without_time()
        .with_target(false)
        .with_level(false)
        .init();
}
