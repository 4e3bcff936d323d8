//! Polling layer: cancellable periodic fetch scopes.
//!
//! A [`PollScope`] collects named fetch operations. [`PollScope::start`]
//! spawns a single timer task that fires every operation immediately and then
//! once per interval. Each operation runs as its own task and publishes into
//! its own [`Feed`], so a slow or failing source never holds back the others.
//!
//! Dropping (or stopping) the returned [`PollHandle`] cancels the timer.
//! Fetches already in flight are left to finish, but their results are
//! discarded instead of being published.

mod scope;
mod state;
#[cfg(feature = "http")]
mod watch;

pub use scope::{PollHandle, PollScope};
pub use state::{Feed, LoadState, OnFailure, SourceState};
#[cfg(feature = "http")]
pub use watch::{DashboardFeeds, MarketFeeds};
