//! Mocked pins and clocks for testing the debounced input
//!
//! Both mocks are cheap handles onto shared state, so a test can keep a clone
//! and move the level or the time while the [crate::Button] owns the other.

use core::cell::Cell;
use std::rc::Rc;

use embedded_hal::digital::v2::InputPin;

use crate::{Clock, LevelSource};

/// A pin whose level is set by the test
#[derive(Clone, Default)]
pub struct MockPin {
    state: Rc<Cell<bool>>,
    failing: Rc<Cell<bool>>,
    pull_up: Rc<Cell<Option<bool>>>,
}

impl MockPin {
    /// Creates a pin at the given level (true = HIGH)
    pub fn new(state: bool) -> Self {
        let pin = Self::default();
        pin.set(state);
        pin
    }

    /// Sets the electrical level of the pin
    pub fn set(&self, state: bool) {
        self.state.set(state);
    }

    /// Makes subsequent [InputPin] reads fail
    pub fn fail(&self, failing: bool) {
        self.failing.set(failing);
    }

    /// The mode the pin was configured in through [LevelSource::configure]
    pub fn pull_up(&self) -> Option<bool> {
        self.pull_up.get()
    }
}

type MockError = &'static str;

impl InputPin for MockPin {
    type Error = MockError;

    fn is_high(&self) -> Result<bool, Self::Error> {
        if self.failing.get() {
            return Err("mock pin read failed");
        }

        Ok(self.state.get())
    }

    fn is_low(&self) -> Result<bool, Self::Error> {
        self.is_high().map(|is_high| !is_high)
    }
}

impl LevelSource for MockPin {
    fn configure(&mut self, pull_up: bool) {
        self.pull_up.set(Some(pull_up));
    }

    fn read(&mut self) -> bool {
        self.state.get()
    }
}

/// A clock that only moves when the test moves it
#[derive(Clone, Default)]
pub struct MockClock {
    now: Rc<Cell<u32>>,
}

impl MockClock {
    /// Creates a clock reading `now` milliseconds
    pub fn new(now: u32) -> Self {
        let clock = Self::default();
        clock.set(now);
        clock
    }

    /// Jumps to the given time
    pub fn set(&self, now: u32) {
        self.now.set(now);
    }

    /// Moves the clock forward, wrapping at `u32::MAX`
    pub fn advance(&self, ms: u32) {
        self.now.set(self.now.get().wrapping_add(ms));
    }
}

impl Clock for MockClock {
    fn now_ms(&self) -> u32 {
        self.now.get()
    }
}
