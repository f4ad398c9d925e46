use std::io::{self, Write};

use clap::Parser;
use projects_top_ten::cli::{run, Cli};
use thiserror::Error;
use utils_trace::tracing_init;

#[derive(Debug, Error)]
pub enum MainError {
	#[error("TracingInit: {source}")]
	TracingInit {
		#[source]
		source: utils_trace::TracingInitError,
	},
	#[error("WriteOutput: {source}")]
	WriteOutput {
		#[source]
		source: io::Error,
	},
}

#[tokio::main]
async fn main() -> Result<(), MainError> {
	// A missing .env is fine.
	let _ = dotenvy::dotenv();

	tracing_init("warn")
		.map_err(|source| MainError::TracingInit { source })?;

	let cli = Cli::parse();

	let stdout = io::stdout();
	let mut out = stdout.lock();

	run(&cli, &mut out)
		.await
		.map_err(|source| MainError::WriteOutput { source })?;

	out.flush()
		.map_err(|source| MainError::WriteOutput { source })?;

	Ok(())
}
