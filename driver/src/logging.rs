use kernel::KernelError;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

use crate::env;
use crate::error::ConvertError;

const DEFAULT_FILTER: &str = "kernel=info,application=info,driver=info";

/// Installs the global subscriber. `RUST_LOG` overrides the default filter.
pub fn init_tracing() -> error_stack::Result<(), KernelError> {
    let filter = env("RUST_LOG")?.unwrap_or_else(|| DEFAULT_FILTER.into());
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_filter(tracing_subscriber::EnvFilter::new(filter))
                .with_filter(tracing_subscriber::filter::LevelFilter::DEBUG),
        )
        .try_init()
        .convert_error()
}
