//! The raw level of the monitored input

use embedded_hal::digital::v2::InputPin;

/// Supplies the instantaneous, undebounced level of an input.
///
/// The level is the electrical one, `true` meaning HIGH. Polarity is applied
/// by the [crate::Button] from its [crate::ButtonConfig].
pub trait LevelSource {
    /// Puts the input into pull up or plain input mode. Called once when the
    /// button is initialised.
    fn configure(&mut self, pull_up: bool);

    /// Samples the current level of the input
    fn read(&mut self) -> bool;
}

/// A [LevelSource] reading any [`embedded-hal`] input pin.
///
/// Typestate HALs select the pull resistor when the pin is converted into an
/// input (e.g. `into_pull_up_input()`), so [LevelSource::configure] only
/// records the requested mode. A failed read returns the last good level so
/// that a flaky read can never produce an edge. Until a read has succeeded the
/// idle level of the requested mode stands in, HIGH with the pull up enabled.
///
/// [`embedded-hal`]: https://docs.rs/embedded-hal/0.2
#[cfg_attr(feature = "logging", derive(defmt::Format))]
pub struct PinSource<TInputPin> {
    /// The pin to sample
    pin: TInputPin,

    /// The mode requested by the button, None until configured
    pull_up: Option<bool>,

    /// The level returned by the most recent successful read
    last_level: bool,

    /// True once any read of the pin has succeeded
    sampled: bool,
}

impl<TInputPin> PinSource<TInputPin>
where
    TInputPin: InputPin,
{
    /// Wraps the given pin, taking an initial sample
    pub fn new(pin: TInputPin) -> Self {
        let sample = pin.is_high().ok();

        Self {
            pin,
            pull_up: None,
            last_level: sample.unwrap_or(false),
            sampled: sample.is_some(),
        }
    }

    /// The mode requested through [LevelSource::configure], if any
    pub fn pull_up(&self) -> Option<bool> {
        self.pull_up
    }

    /// Returns the wrapped pin
    pub fn into_inner(self) -> TInputPin {
        self.pin
    }
}

impl<TInputPin> LevelSource for PinSource<TInputPin>
where
    TInputPin: InputPin,
{
    fn configure(&mut self, pull_up: bool) {
        #[cfg(feature = "logging")]
        defmt::debug!("PinSource configured, pull up: {}", pull_up);

        self.pull_up = Some(pull_up);

        if !self.sampled {
            self.last_level = pull_up;
        }
    }

    fn read(&mut self) -> bool {
        match self.pin.is_high() {
            Ok(is_high) => {
                self.last_level = is_high;
                self.sampled = true;
            }
            Err(_) => {
                #[cfg(feature = "logging")]
                defmt::warn!(
                    "PinSource read failed, keeping level {}",
                    self.last_level
                );
            }
        }

        self.last_level
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        mock::{MockClock, MockPin},
        Button, ButtonConfig,
    };

    #[test]
    fn reads_the_pin_level() {
        let pin = MockPin::new(true);
        let mut source = PinSource::new(pin.clone());

        assert!(source.read());

        pin.set(false);
        assert!(!source.read());
    }

    #[test]
    fn configure_records_the_mode() {
        let mut source = PinSource::new(MockPin::new(true));
        assert_eq!(source.pull_up(), None);

        source.configure(true);
        assert_eq!(source.pull_up(), Some(true));

        source.configure(false);
        assert_eq!(source.pull_up(), Some(false));
    }

    #[test]
    fn failed_read_keeps_the_last_level() {
        let pin = MockPin::new(true);
        let mut source = PinSource::new(pin.clone());
        assert!(source.read());

        pin.set(false);
        pin.fail(true);
        assert!(source.read());

        pin.fail(false);
        assert!(!source.read());
    }

    #[test]
    fn idle_level_stands_in_until_a_read_succeeds() {
        let pin = MockPin::new(true);
        pin.fail(true);
        let mut source = PinSource::new(pin.clone());

        source.configure(true);
        assert!(source.read());

        let mut source = PinSource::new(pin.clone());
        source.configure(false);
        assert!(!source.read());
    }

    #[test]
    fn configure_keeps_a_real_sample() {
        let pin = MockPin::new(false);
        let mut source = PinSource::new(pin.clone());
        pin.fail(true);

        source.configure(true);
        assert!(!source.read());
    }

    #[test]
    fn failed_first_read_does_not_produce_an_edge() {
        let pin = MockPin::new(true);
        pin.fail(true);
        let clock = MockClock::new(0);

        // active low with pull up, HIGH is released
        let mut button = Button::new(
            PinSource::new(pin.clone()),
            clock.clone(),
            ButtonConfig::new(),
        );
        assert!(button.is_released());

        pin.fail(false);
        clock.set(100);
        assert!(!button.poll());
        assert!(!button.was_released());
        assert!(!button.was_pressed());
        assert_eq!(button.last_change(), 0);
    }
}
