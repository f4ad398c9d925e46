use std::io::{self, Write};
use std::time::Duration;

use clap::Parser;
use interfaces_reddit_hot_listing::index::{
	HotListingConfig, DEFAULT_BASE_URL, DEFAULT_LIMIT, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT,
};

use crate::titles::print_top_titles;

pub const USAGE_PROMPT: &str = "Please pass an argument for the subreddit to search.";

/// Print the titles of the hot posts of a subreddit
#[derive(Debug, Parser)]
#[command(name = "top_ten")]
pub struct Cli {
	/// Subreddit to query, e.g. `programming`
	#[arg(allow_hyphen_values = true)]
	pub subreddit: Option<String>,

	/// Extra positionals are accepted and ignored.
	#[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
	_rest: Vec<String>,

	#[arg(long, env = "TOP_TEN_BASE_URL", default_value = DEFAULT_BASE_URL)]
	pub base_url: String,

	#[arg(long, env = "TOP_TEN_USER_AGENT", default_value = DEFAULT_USER_AGENT)]
	pub user_agent: String,

	#[arg(long, env = "TOP_TEN_LIMIT", default_value_t = DEFAULT_LIMIT)]
	pub limit: u32,

	/// 0 disables the timeout
	#[arg(long, env = "TOP_TEN_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT.as_secs())]
	pub timeout_secs: u64,
}

impl Cli {
	pub fn config(&self) -> HotListingConfig {
		HotListingConfig {
			base_url: self.base_url.clone(),
			user_agent: self.user_agent.clone(),
			limit: self.limit,
			timeout: match self.timeout_secs {
				0 => None,
				secs => Some(Duration::from_secs(secs)),
			},
		}
	}
}

/// Without a subreddit only the usage prompt is written and nothing is requested.
pub async fn run<W: Write>(cli: &Cli, out: &mut W) -> io::Result<()> {
	let Some(subreddit) = cli.subreddit.as_deref() else {
		writeln!(out, "{USAGE_PROMPT}")?;
		return Ok(());
	};

	print_top_titles(&cli.config(), subreddit, out).await?;

	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults_match_public_endpoint() {
		let cli = Cli::try_parse_from(["top_ten", "rust"]).unwrap();
		assert_eq!(cli.subreddit.as_deref(), Some("rust"));

		let config = cli.config();
		assert_eq!(config, HotListingConfig::default());
	}

	#[test]
	fn subreddit_is_optional() {
		let cli = Cli::try_parse_from(["top_ten"]).unwrap();
		assert!(cli.subreddit.is_none());
	}

	#[test]
	fn extra_arguments_are_ignored() {
		let cli = Cli::try_parse_from(["top_ten", "rust", "extra", "-x"]).unwrap();
		assert_eq!(cli.subreddit.as_deref(), Some("rust"));
		assert_eq!(cli.config(), HotListingConfig::default());
	}

	#[test]
	fn hyphenated_subreddit_is_accepted() {
		let cli = Cli::try_parse_from(["top_ten", "-x"]).unwrap();
		assert_eq!(cli.subreddit.as_deref(), Some("-x"));

		let cli = Cli::try_parse_from(["top_ten", "--not-a-flag"]).unwrap();
		assert_eq!(cli.subreddit.as_deref(), Some("--not-a-flag"));
	}

	#[test]
	fn flags_still_parse_after_subreddit() {
		let cli = Cli::try_parse_from(["top_ten", "rust", "--limit", "3"]).unwrap();
		assert_eq!(cli.subreddit.as_deref(), Some("rust"));
		assert_eq!(cli.limit, 3);
	}

	#[test]
	fn zero_timeout_disables_it() {
		let cli = Cli::try_parse_from(["top_ten", "rust", "--timeout-secs", "0", "--limit", "5"])
			.unwrap();
		let config = cli.config();
		assert_eq!(config.timeout, None);
		assert_eq!(config.limit, 5);
	}
}
