//! The game round controller and the replay loop around it.
//!
//! A `Session` plays rounds over a `Console`, drawing each secret from a
//! `SecretSource`. The best score and round history are explicit session
//! state, handed to every round rather than held globally.

pub mod controller;
pub mod history;

pub use controller::{play_round, Session, SessionEnd};
pub use history::{RoundRecord, SessionStats};
