
use once_cell::sync::OnceCell;
use tracing_subscriber::EnvFilter;

static SUBSCRIBER: OnceCell<()> = OnceCell::new();

/// Route `tracing` output through the test harness, at `trace` for this crate
/// unless `RUST_LOG` says otherwise.
pub(crate) fn init_tracing() {
    SUBSCRIBER.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("feature_flags=trace"));

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}
