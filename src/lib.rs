#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(warnings)]
#![cfg_attr(not(test), no_std)]

//! DEBOUNCED INPUT
//!
//! Turns a noisy, bouncing digital input into a clean pressed / released
//! state. The input is polled by the caller, usually once per loop iteration
//! or from a periodic task, and the result can be queried for the current
//! state, for the edge that was confirmed on the most recent poll and for how
//! long the input has been in its current state.
//!
//! A level change is only accepted once the raw level has been quiet for
//! longer than the debounce window. Every raw transition restarts the window,
//! so an arbitrarily long bounce train is suppressed without keeping any
//! sample history.
//!
//! Built using [`embedded-hal`] traits
//!
//! [`embedded-hal`]: https://docs.rs/embedded-hal/0.2

pub mod button;
pub mod clock;
pub mod config;
pub mod level;

#[cfg(feature = "firmware")]
pub mod configure;

#[cfg(test)]
pub mod mock;

pub use button::{Button, Edge};
pub use clock::{Clock, FnClock};
pub use config::ButtonConfig;
pub use level::{LevelSource, PinSource};
