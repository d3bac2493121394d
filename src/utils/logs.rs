/// Installs a JSON fmt subscriber for the process.
///
/// Only the first call installs anything; later calls (for example from
/// several tests in one binary) are ignored.
pub fn setup_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        // disable printing the name of the module in every log line.
        .with_target(false)
        .with_ansi(false)
        // the consuming process stamps its own time.
        .without_time()
        .json()
        .try_init();
}
