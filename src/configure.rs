//! Configures the microcontroller for use and returns the button and LED pins

use hal::{
    gpio::{ErasedPin, Input, Output},
    pac,
    prelude::*,
};
use stm32f4xx_hal as hal;
use switch_hal::{ActiveLow, IntoSwitch, Switch};
use systick_monotonic::Systick;

use crate::ButtonConfig;

/// The core clock frequency the micro is configured for
pub const SYSCLK_HZ: u32 = 84_000_000;

/// Configures the micro for operation. The button pin is put into pull up or
/// floating input mode according to `button_config`.
pub fn configure(
    core_peripherals: cortex_m::Peripherals,
    device_peripherals: pac::Peripherals,
    button_config: &ButtonConfig,
) -> Configuration {
    // Take ownership over raw device and convert it into the corresponding HAL struct
    let rcc = device_peripherals.RCC.constrain();

    // Freeze the configuration of all the clocks in the system
    let clocks = rcc.cfgr.use_hse(25.MHz()).sysclk(SYSCLK_HZ.Hz()).freeze();

    // 1 kHz, so monotonic ticks are milliseconds
    let mono = Systick::new(core_peripherals.SYST, clocks.sysclk().raw());

    let gpioa = device_peripherals.GPIOA.split();
    let gpioc = device_peripherals.GPIOC.split();

    // The on board LED is wired to VCC
    let led_pin = gpioc
        .pc13
        .into_push_pull_output()
        .erase()
        .into_active_low_switch();

    // The on board KEY button shorts PA0 to ground
    let button_pin = if button_config.pull_up {
        gpioa.pa0.into_pull_up_input().erase()
    } else {
        gpioa.pa0.into_floating_input().erase()
    };

    Configuration {
        led_pin,
        button_pin,
        mono,
    }
}

/// The configured peripherals
pub struct Configuration {
    /// The on board LED
    pub led_pin: Switch<ErasedPin<Output>, ActiveLow>,
    /// The input to debounce
    pub button_pin: ErasedPin<Input>,
    /// A millisecond monotonic for RTIC
    pub mono: Systick<1000>,
}
