use super::CycleCounter;
use super::compose::micros_since_epoch;

/// Microseconds from `gettimeofday`, reported as cycles.
///
/// The fallback where user mode cannot read a cycle counter. Resolution is one
/// microsecond and the clock follows wall-time adjustments.
#[derive(Clone, Copy, Debug, Default)]
pub struct TimeOfDay;

impl CycleCounter for TimeOfDay {
    const NAME: &'static str = "gettimeofday";

    #[inline]
    #[allow(clippy::useless_conversion)]
    fn now() -> u64 {
        // SAFETY: timeval is plain old data; all-zero is a valid value.
        let mut tv: libc::timeval = unsafe { core::mem::zeroed() };
        // SAFETY: tv is a valid, writable timeval and the timezone argument
        // may be null.
        unsafe {
            libc::gettimeofday(&mut tv, core::ptr::null_mut());
        }
        micros_since_epoch(i64::from(tv.tv_sec), i64::from(tv.tv_usec))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, SystemTime, UNIX_EPOCH};

    #[test]
    fn test_time_of_day_is_unix_micros() {
        let before = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock before 1970")
            .as_micros() as u64;
        let reading = TimeOfDay::now();
        let after = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock before 1970")
            .as_micros() as u64;

        // Both clocks read the same source; allow a millisecond for rounding.
        assert!(reading + 1_000 >= before);
        assert!(reading <= after + 1_000);
    }

    #[test]
    fn test_time_of_day_sleep_granularity() {
        for sleep_us in [500u64, 2_000, 10_000] {
            let start = TimeOfDay::now();
            std::thread::sleep(Duration::from_micros(sleep_us));
            let end = TimeOfDay::now();

            assert!(
                end - start >= sleep_us,
                "slept {}us but counter moved {}",
                sleep_us,
                end - start
            );
        }
    }
}
