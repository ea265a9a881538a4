use super::CycleCounter;
use super::compose::probe_perf_monitor;
use super::time_of_day::TimeOfDay;

/// ARMv6+ performance monitor cycle counter (PMCCNTR).
///
/// User mode may only read it once privileged code has set PMUSERENR.EN and
/// enabled the counter, so every read probes first and falls back to
/// [`TimeOfDay`] when either check fails.
#[derive(Clone, Copy, Debug, Default)]
pub struct PerfMonitor;

impl PerfMonitor {
    /// Cycle estimate from PMCCNTR, or `None` if user mode cannot read it or
    /// the counter is stopped.
    #[inline(always)]
    pub fn probe() -> Option<u64> {
        probe_perf_monitor(read_pmuseren(), read_pmcntenset, read_pmccntr)
    }
}

impl CycleCounter for PerfMonitor {
    const NAME: &'static str = "pmccntr";

    #[inline(always)]
    fn now() -> u64 {
        Self::probe().unwrap_or_else(TimeOfDay::now)
    }
}

#[inline(always)]
fn read_pmuseren() -> u32 {
    let value: u32;
    // SAFETY: PMUSERENR is readable from user mode on ARMv6 and later.
    unsafe {
        core::arch::asm!(
            "mrc p15, 0, {}, c9, c14, 0",
            out(reg) value,
            options(nomem, nostack, preserves_flags),
        );
    }
    value
}

#[inline(always)]
fn read_pmcntenset() -> u32 {
    let value: u32;
    // SAFETY: only called after PMUSERENR.EN granted user access.
    unsafe {
        core::arch::asm!(
            "mrc p15, 0, {}, c9, c12, 1",
            out(reg) value,
            options(nomem, nostack, preserves_flags),
        );
    }
    value
}

#[inline(always)]
fn read_pmccntr() -> u32 {
    let value: u32;
    // SAFETY: only called after PMUSERENR.EN granted user access.
    unsafe {
        core::arch::asm!(
            "mrc p15, 0, {}, c9, c13, 0",
            out(reg) value,
            options(nomem, nostack, preserves_flags),
        );
    }
    value
}
