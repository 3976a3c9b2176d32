//! Fetch state tracking
//!
//! This module contains the lifecycle states of a single page fetch.

mod fetch_state;

pub use fetch_state::FetchState;
