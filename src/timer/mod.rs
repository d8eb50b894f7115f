//! Optional countdown clock for timed games.
//!
//! The session has no notion of a time limit. Hosts that want one drive a
//! `Countdown` from the same clock they feed to `Session::advance` and decide
//! what expiry means for their game.

mod countdown;

pub use countdown::{Countdown, CountdownStatus, LOW_TIME_THRESHOLD_SECS};
