//! Prints the titles of a subreddit's hot listing
//! 
//! - Fetch and outcome classification in `titles`
//! - Command line surface in `cli`
//! - Any failure prints a single `None` line

pub mod cli;
pub mod titles;
