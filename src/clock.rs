//! The millisecond time source used to time debouncing and press durations

/// A free running millisecond counter.
///
/// The value must never decrease, except for wrapping from `u32::MAX` back to
/// zero. All durations are computed with [elapsed_ms], so a single wrap
/// between two readings is harmless.
pub trait Clock {
    /// Returns the current time in milliseconds
    fn now_ms(&self) -> u32;
}

/// A [Clock] backed by a function returning the current millisecond count,
/// for example a 1 kHz RTIC monotonic truncated to 32 bits.
#[derive(Clone, Copy)]
pub struct FnClock<F>(pub F);

impl<F> Clock for FnClock<F>
where
    F: Fn() -> u32,
{
    fn now_ms(&self) -> u32 {
        (self.0)()
    }
}

/// Milliseconds from `since` to `now`, correct across a single wrap of the
/// counter. Never compare timestamps directly, always compare the result of
/// this function against a duration.
#[inline]
pub const fn elapsed_ms(now: u32, since: u32) -> u32 {
    now.wrapping_sub(since)
}
