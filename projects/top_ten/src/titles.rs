use std::io::{self, Write};

use interfaces_reddit_hot_listing::index::{
	build_client, fetch_hot_listing, parse_listing, HotListingConfig, RedditListingResult,
};
use reqwest::StatusCode;
use tracing::debug;

/// Printed in place of titles whenever the listing could not be used.
pub const NO_RESULT_MARKER: &str = "None";

/// What a single hot listing lookup ended with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TopTitlesOutcome {
	Success(Vec<String>),
	NotFound,
	/// Any other non-2xx status. Redirects land here since they are not followed.
	HttpError(StatusCode),
	TransportError(String),
	MalformedResponse(String),
}

impl TopTitlesOutcome {
	pub fn is_success(&self) -> bool {
		matches!(self, TopTitlesOutcome::Success(_))
	}

	/// Legacy output: one line per title, or the marker for every failure.
	pub fn render<W: Write>(&self, out: &mut W) -> io::Result<()> {
		match self {
			TopTitlesOutcome::Success(titles) => {
				for title in titles {
					writeln!(out, "{title}")?;
				}
			}
			TopTitlesOutcome::NotFound
			| TopTitlesOutcome::HttpError(_)
			| TopTitlesOutcome::TransportError(_)
			| TopTitlesOutcome::MalformedResponse(_) => writeln!(out, "{NO_RESULT_MARKER}")?,
		}

		Ok(())
	}
}

pub async fn fetch_top_titles(config: &HotListingConfig, subreddit: &str) -> TopTitlesOutcome {
	let client = match build_client(config) {
		Ok(client) => client,
		Err(err) => {
			debug!(subreddit, error = %err, "could not build http client");
			return TopTitlesOutcome::TransportError(err.to_string());
		}
	};

	let RedditListingResult { body, status } =
		match fetch_hot_listing(&client, config, subreddit).await {
			Ok(result) => result,
			Err(err) => {
				debug!(subreddit, error = %err, "hot listing request failed");
				return TopTitlesOutcome::TransportError(err.to_string());
			}
		};

	let outcome = classify(status, &body);
	if !outcome.is_success() {
		debug!(subreddit, ?outcome, "hot listing unusable");
	}

	outcome
}

/// Fetches the listing and writes the legacy output to `out`.
pub async fn print_top_titles<W: Write>(
	config: &HotListingConfig,
	subreddit: &str,
	out: &mut W,
) -> io::Result<TopTitlesOutcome> {
	let outcome = fetch_top_titles(config, subreddit).await;
	outcome.render(out)?;

	Ok(outcome)
}

fn classify(status: StatusCode, body: &str) -> TopTitlesOutcome {
	if status == StatusCode::NOT_FOUND {
		return TopTitlesOutcome::NotFound;
	}

	if !status.is_success() {
		return TopTitlesOutcome::HttpError(status);
	}

	match parse_listing(body) {
		Ok(listing) => TopTitlesOutcome::Success(listing.titles()),
		Err(err) => TopTitlesOutcome::MalformedResponse(err.to_string()),
	}
}
