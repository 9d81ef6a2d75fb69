//! A polled, time based debouncer for a single button or switch.

use crate::{clock::elapsed_ms, ButtonConfig, Clock, LevelSource};

/// The transition confirmed by the most recent poll
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "logging", derive(defmt::Format))]
pub enum Edge {
    /// The input went from released to pressed
    Pressed,
    /// The input went from pressed to released
    Released,
}

/// The debounced state of one input.
///
/// Call [Button::poll] regularly, then use the query functions to inspect the
/// result. Queries never sample the input, they report the state as of the
/// last poll.
#[cfg_attr(feature = "logging", derive(defmt::Format))]
pub struct Button<TLevelSource, TClock> {
    /// Supplies the raw level of the input
    source: TLevelSource,

    /// Supplies the time in milliseconds
    clock: TClock,

    /// Polarity, pull up and debounce window
    config: ButtonConfig,

    /// The debounced state, true if pressed
    state: bool,

    /// The debounced state before the most recent confirmation
    last_state: bool,

    /// The most recently sampled level, after polarity was applied. Only used
    /// to detect bounce.
    last_transient: bool,

    /// True if the most recent confirmation changed the state
    changed: bool,

    /// True once the sampled level has been quiet for the debounce window
    stable: bool,

    /// When the button was last polled
    last_poll_ms: u32,

    /// When the sampled level last moved
    last_transient_ms: u32,

    /// When the debounced state last changed
    last_change_ms: u32,
}

impl<TLevelSource, TClock> Button<TLevelSource, TClock>
where
    TLevelSource: LevelSource,
    TClock: Clock,
{
    /// Creates a new button, configuring the input and seeding the state from
    /// an immediate sample. The first poll never reports an edge.
    pub fn new(source: TLevelSource, clock: TClock, config: ButtonConfig) -> Self {
        let mut button = Self {
            source,
            clock,
            config,
            state: false,
            last_state: false,
            last_transient: true,
            changed: false,
            stable: false,
            last_poll_ms: 0,
            last_transient_ms: 0,
            last_change_ms: 0,
        };

        button.initialize();
        button
    }

    /// Configures the input and discards all debounce state, re-seeding it
    /// from an immediate sample taken now.
    pub fn initialize(&mut self) {
        self.source.configure(self.config.pull_up);

        let state = self.config.logical_level(self.source.read());
        let now = self.clock.now_ms();

        self.state = state;
        self.last_state = state;
        // forces the next poll to treat its sample as a fresh transition
        self.last_transient = !state;
        self.changed = false;
        self.stable = false;
        self.last_poll_ms = now;
        self.last_transient_ms = now;
        self.last_change_ms = now;

        #[cfg(feature = "logging")]
        defmt::debug!("Button initialised at {}ms, pressed: {}", now, state);
    }

    /// Samples the input and updates the debounced state, returning true if
    /// the button is pressed.
    ///
    /// Any movement of the raw level restarts the debounce window. The level
    /// is accepted once it has been quiet for longer than the window.
    pub fn poll(&mut self) -> bool {
        let now = self.clock.now_ms();
        let level = self.config.logical_level(self.source.read());

        if level != self.last_transient {
            self.last_transient_ms = now;
            self.last_transient = level;
            self.stable = false;
            self.changed = false;
        }

        if elapsed_ms(now, self.last_transient_ms) > self.config.debounce_ms {
            self.last_state = self.state;
            self.state = level;
            self.stable = true;
            self.changed = self.state != self.last_state;

            if self.changed {
                self.last_change_ms = now;

                #[cfg(feature = "logging")]
                defmt::trace!("Button {} at {}ms", self.edge(), now);
            }
        }

        self.last_poll_ms = now;
        self.state
    }

    /// Hands back the level source and clock
    pub fn release(self) -> (TLevelSource, TClock) {
        (self.source, self.clock)
    }
}

impl<TLevelSource, TClock> Button<TLevelSource, TClock> {
    /// True if the button was pressed at the last poll
    pub fn is_pressed(&self) -> bool {
        self.state
    }

    /// True if the button was released at the last poll
    pub fn is_released(&self) -> bool {
        !self.state
    }

    /// True only if the last poll confirmed a press
    pub fn was_pressed(&self) -> bool {
        self.state && self.changed
    }

    /// True only if the last poll confirmed a release
    pub fn was_released(&self) -> bool {
        !self.state && self.changed
    }

    /// The edge confirmed by the last poll, if any
    pub fn edge(&self) -> Option<Edge> {
        match (self.changed, self.state) {
            (false, _) => None,
            (true, true) => Some(Edge::Pressed),
            (true, false) => Some(Edge::Released),
        }
    }

    /// True if the button is pressed and has been for at least `ms`
    /// milliseconds, measured at the last poll.
    pub fn pressed_for(&self, ms: u32) -> bool {
        self.state && self.time_in_state() >= ms
    }

    /// True if the button is released and has been for at least `ms`
    /// milliseconds, measured at the last poll.
    pub fn released_for(&self, ms: u32) -> bool {
        !self.state && self.time_in_state() >= ms
    }

    /// True once the raw level has been quiet for the debounce window
    pub fn is_stable(&self) -> bool {
        self.stable
    }

    /// The time, in milliseconds, at which the debounced state last changed
    pub fn last_change(&self) -> u32 {
        self.last_change_ms
    }

    /// The time, in milliseconds, of the last poll
    pub fn last_poll(&self) -> u32 {
        self.last_poll_ms
    }

    /// The configuration the button was created with
    pub fn config(&self) -> &ButtonConfig {
        &self.config
    }

    fn time_in_state(&self) -> u32 {
        elapsed_ms(self.last_poll_ms, self.last_change_ms)
    }
}
