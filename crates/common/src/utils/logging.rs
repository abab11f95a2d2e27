use std::io;
use tracing_subscriber::{fmt, EnvFilter};

/// Handler and HTTP span output at info; SeaORM statement logging stays quiet
/// unless `RUST_LOG` asks for it.
const DEFAULT_FILTER: &str = "info,tower_http=info,sea_orm=warn,sqlx=warn";

/// Also keeps service-layer debug events such as `restaurant_pizza_created`.
const JSON_FILTER: &str = "info,service=debug,sea_orm=warn,sqlx=warn";

fn filter_or(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Human-readable compact lines on stdout.
pub fn init_logging_default() {
    let _ = fmt()
        .with_env_filter(filter_or(DEFAULT_FILTER))
        .with_target(false)
        .compact()
        .with_writer(io::stdout)
        .try_init();
}

/// One JSON object per event on stdout, for log collectors.
pub fn init_logging_json() {
    // 可通过 RUST_LOG 覆盖，例如 RUST_LOG=info,service=trace
    let _ = fmt()
        .with_env_filter(filter_or(JSON_FILTER))
        .with_target(true)
        .json()
        .with_writer(io::stdout)
        .try_init();
}

/// Pick the subscriber flavour from `logging.json`. A second call is a no-op.
pub fn init_logging(json: bool) {
    if json {
        init_logging_json();
    } else {
        init_logging_default();
    }
}
