// Browser console logging via tracing

use tracing::Level;
use tracing_subscriber::fmt::format::{FmtSpan, Pretty};
use tracing_subscriber::prelude::*;

/// Install the global subscriber. Call once, before rendering.
pub fn init(max_level: Level) {
    console_error_panic_hook::set_once();

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(
            tracing_web::MakeWebConsoleWriter::new()
                .with_pretty_level()
                .with_max_level(max_level),
        )
        .with_level(false)
        .with_span_events(FmtSpan::ACTIVE);
    let perf_layer = tracing_web::performance_layer().with_details_from_fields(Pretty::default());

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(perf_layer)
        .init();
}
