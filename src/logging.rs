use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

/// Installs the global subscriber. Verbosity comes from `SPENDWISE_LOG`
/// (e.g. `SPENDWISE_LOG=debug`), defaulting to warnings only. Output goes to
/// stderr so tables on stdout stay pipeable.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("SPENDWISE_LOG")
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_is_idempotent() {
        super::init_tracing();
        super::init_tracing();
    }
}
