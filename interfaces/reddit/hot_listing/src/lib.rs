//! Client for the Reddit `/r/{subreddit}/hot.json` listing endpoint.

pub mod index;
