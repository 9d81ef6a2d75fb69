//! Construction time configuration of a debounced input

/// The default debounce window, in milliseconds
pub const DEFAULT_DEBOUNCE_MS: u32 = 25;

/// How a button is wired and how long it must be quiet before a level change
/// is accepted. Immutable once handed to a [crate::Button].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "logging", derive(defmt::Format))]
pub struct ButtonConfig {
    /// True if the input is active low, i.e. a LOW level means "pressed"
    pub invert: bool,

    /// True to enable the internal pull up resistor on the input
    pub pull_up: bool,

    /// The minimum quiet time, in milliseconds, before a level change is
    /// accepted as a real change of state
    pub debounce_ms: u32,
}

impl ButtonConfig {
    /// A button wired to ground with the internal pull up enabled, debounced
    /// over [DEFAULT_DEBOUNCE_MS].
    pub const fn new() -> Self {
        Self {
            invert: true,
            pull_up: true,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
        }
    }

    /// Sets whether the input is active low
    pub const fn with_invert(mut self, invert: bool) -> Self {
        self.invert = invert;
        self
    }

    /// Sets whether the internal pull up should be enabled
    pub const fn with_pull_up(mut self, pull_up: bool) -> Self {
        self.pull_up = pull_up;
        self
    }

    /// Sets the debounce window in milliseconds
    pub const fn with_debounce_ms(mut self, debounce_ms: u32) -> Self {
        self.debounce_ms = debounce_ms;
        self
    }

    /// Applies the configured polarity to a raw pin level, returning true if
    /// the level means "pressed".
    #[inline]
    pub const fn logical_level(&self, raw: bool) -> bool {
        raw != self.invert
    }
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self::new()
    }
}
