//! Test-only tracing init, mirroring the library's own conventions. The
//! library never installs a subscriber itself, so integration tests that
//! want to see `tracing` output during a failing run do it here.

use std::sync::Once;
use tracing_subscriber::{util::SubscriberInitExt, EnvFilter};

static INIT: Once = Once::new();

#[allow(dead_code)]
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into());
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .finish()
            .set_default();
    });
}
