use std::sync::Once;

use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "TOKENKIT_LOG";
const DEFAULT_DIRECTIVE: &str = "info";

/// Installs a fmt subscriber filtered by `TOKENKIT_LOG`. Safe to call more
/// than once; a subscriber already installed by the host is left alone.
pub fn init() {
    static LOGGING_SETUP: Once = Once::new();

    LOGGING_SETUP.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));
        if tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .try_init()
            .is_err()
        {
            tracing::debug!("global subscriber already installed; keeping it");
        }
    });
}
