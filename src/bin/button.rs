//! Debounces the KEY button of an STM32F401 "black pill" board, toggling the
//! LED on each press and reporting edges and long presses over RTT.

#![deny(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]
#![no_main]
#![no_std]

use defmt_rtt as _; // global logger
use panic_probe as _;

use stm32f4xx_hal as hal;

use debounced_input::{configure, Button, ButtonConfig, Edge, FnClock, PinSource};
use hal::gpio::{ErasedPin, Input};

/// The period between button polls
pub const POLL_PERIOD_MS: u64 = 1;

/// How long the button must be held to count as a long press
pub const LONG_PRESS_MS: u32 = 1_000;

/// The KEY button shorts to ground, so it is active low with a pull up
pub const BUTTON_CONFIG: ButtonConfig = ButtonConfig::new().with_debounce_ms(20);

type KeyButton = Button<PinSource<ErasedPin<Input>>, FnClock<fn() -> u32>>;

/// The monotonic as a wrapping 32 bit millisecond counter. Reads zero until
/// the monotonic is started at the end of `init`.
fn millis() -> u32 {
    app::monotonics::now().ticks() as u32
}

// same panicking *behavior* as `panic-probe` but doesn't print a panic message
// this prevents the panic message being printed *twice* when `defmt::panic` is invoked
#[defmt::panic_handler]
fn panic() -> ! {
    cortex_m::asm::udf()
}

#[rtic::app(
    device = stm32f4xx_hal::pac,
    peripherals = true,
    dispatchers = [EXTI1]
)]
mod app {
    use switch_hal::{ActiveLow, OutputSwitch, Switch};
    use systick_monotonic::{ExtU64, Systick};

    use super::*;

    #[monotonic(binds = SysTick, default = true)]
    type SysMono = Systick<1000>;

    // Shared resources go here
    #[shared]
    struct Shared {}

    // Local resources go here
    #[local]
    struct Local {
        /// The debounced KEY button
        button: KeyButton,
        /// Set once a long press has been reported, until release
        long_press_reported: bool,

        /// The LED pin for blinky lights
        led_pin: Switch<ErasedPin<hal::gpio::Output>, ActiveLow>,
        /// The current state of the blinky light
        led_state: bool,
    }

    #[init]
    fn init(cx: init::Context) -> (Shared, Local, init::Monotonics) {
        defmt::println!("init");

        // configure all the clocks and peripherals
        let config = configure::configure(cx.core, cx.device, &BUTTON_CONFIG);

        let button = Button::new(
            PinSource::new(config.button_pin),
            FnClock(millis as fn() -> u32),
            BUTTON_CONFIG,
        );

        // scan inputs
        poll_button::spawn().unwrap();

        (
            Shared {},
            Local {
                button,
                long_press_reported: false,
                led_pin: config.led_pin,
                led_state: false,
            },
            init::Monotonics(config.mono),
        )
    }

    #[idle]
    fn idle(_: idle::Context) -> ! {
        defmt::info!("idle");

        loop {
            continue;
        }
    }

    #[task(local = [button, long_press_reported, led_pin, led_state])]
    fn poll_button(cx: poll_button::Context) {
        let button = cx.local.button;
        button.poll();

        match button.edge() {
            Some(Edge::Pressed) => {
                defmt::info!("Pressed at {}ms", button.last_change());

                *cx.local.led_state = !*cx.local.led_state;
                if *cx.local.led_state {
                    cx.local.led_pin.on().ok();
                } else {
                    cx.local.led_pin.off().ok();
                }
            }
            Some(Edge::Released) => {
                defmt::info!("Released at {}ms", button.last_change());
                *cx.local.long_press_reported = false;
            }
            None => {}
        }

        if button.pressed_for(LONG_PRESS_MS) && !*cx.local.long_press_reported {
            defmt::warn!("Long press, held since {}ms", button.last_change());
            *cx.local.long_press_reported = true;
        }

        poll_button::spawn_after(POLL_PERIOD_MS.millis()).unwrap();
    }
}
