use super::CycleCounter;

/// ARMv8 generic timer virtual count (`CNTVCT_EL0`).
///
/// Runs at the fixed `CNTFRQ_EL0` rate, commonly tens of MHz, rather than the
/// core clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct GenericTimer;

impl CycleCounter for GenericTimer {
    const NAME: &'static str = "cntvct_el0";

    #[inline(always)]
    fn now() -> u64 {
        let count: u64;
        // SAFETY: CNTVCT_EL0 is readable from EL0 on every OS Rust targets.
        unsafe {
            core::arch::asm!(
                "mrs {}, cntvct_el0",
                out(reg) count,
                options(nomem, nostack, preserves_flags),
            );
        }
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generic_timer_advances() {
        let start = GenericTimer::now();
        std::thread::sleep(std::time::Duration::from_millis(1));
        assert!(GenericTimer::now() > start);
    }
}
