use thiserror::Error;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Installs the global subscriber. `RUST_LOG` wins over `level`.
///
/// Events go to stderr; stdout belongs to the binaries' output.
pub fn tracing_init(level: &str) -> Result<(), TracingInitError> {
    let filter = build_filter(level)?;

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr));

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|source| TracingInitError::SetGlobalDefault { source })?;

    Ok(())
}

fn build_filter(level: &str) -> Result<EnvFilter, TracingInitError> {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .map_err(|source| TracingInitError::InvalidFilter { source })
}

#[derive(Debug, Error)]
pub enum TracingInitError {
    #[error("InvalidFilter: {source}")]
    InvalidFilter {
        source: tracing_subscriber::filter::ParseError,
    },

    #[error("SetGlobalDefault: {source}")]
    SetGlobalDefault {
        source: tracing::subscriber::SetGlobalDefaultError,
    },
}
