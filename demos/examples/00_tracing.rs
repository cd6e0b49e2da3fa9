use cadence::{Cadence, RawOptions};
use cadence_demos::common::sample_series;
use tracing_subscriber::fmt::format::FmtSpan;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize a human-friendly tracing subscriber with env-based filtering.
    // Suggested: RUST_LOG=debug,cadence=trace,cadence_core=trace
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT)
        .try_init();

    let cadence = Cadence::builder().build();

    // A successful call emits the span plus a summary event.
    let _ = cadence.resample_series(
        &sample_series(),
        &RawOptions::new(Some("quarterEnd"), Some("sum")),
    )?;

    // A rejected call logs the reason before returning it.
    if let Err(e) = cadence.resample_series(
        &sample_series(),
        &RawOptions::new(Some("dayEnd"), Some("sum")),
    ) {
        tracing::warn!(error = %e, "request rejected");
    }

    Ok(())
}
