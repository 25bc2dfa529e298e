use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt::format;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::prelude::*;

pub const LOG_ENV: &str = "COIN_TABLE_LOG";

struct NoTime;

impl FormatTime for NoTime {
    fn format_time(&self, _: &mut format::Writer<'_>) -> std::fmt::Result {
        Ok(())
    }
}

pub const DEFAULT_LOG_DIRECTIVES: &str = "warn";

/// Directives from `COIN_TABLE_LOG` (e.g. `debug`, `coin_table=trace`),
/// `warn` when unset or unparsable.
pub fn log_directives(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(value) if !value.is_empty() && EnvFilter::try_new(value).is_ok() => value.to_string(),
        _ => DEFAULT_LOG_DIRECTIVES.to_string(),
    }
}

pub fn init_logger() {
    let directives = log_directives(std::env::var(LOG_ENV).ok().as_deref());
    let format = format()
        .with_timer(NoTime)
        .with_level(true)
        .with_target(true);

    let result = tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_filter(EnvFilter::new(directives)),
        )
        .try_init();

    if let Err(err) = result {
        eprintln!("logger already initialised: {err}");
    }
}
