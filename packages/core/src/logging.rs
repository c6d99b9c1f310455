use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::{fmt, EnvFilter};

/// Local wall-clock timestamps, e.g. `2024/05/01 08:30:00`.
pub const TIME_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", chrono::Local::now().format(TIME_FORMAT))
    }
}

/// Install the global subscriber: compact lines on stderr, level taken from
/// `RUST_LOG` (default `info`).
///
/// Call once, before anything logs.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_timer(LocalTimer)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Logging initialized (timestamps: {})", TIME_FORMAT);
}
