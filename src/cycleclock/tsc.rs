use super::CycleCounter;

/// x86 time-stamp counter.
///
/// `rdtsc` is not serializing: the CPU may execute it before or after its
/// neighbours, which only matters when counting single cycles.
#[derive(Clone, Copy, Debug, Default)]
pub struct Tsc;

impl CycleCounter for Tsc {
    const NAME: &'static str = "rdtsc";

    #[cfg(target_arch = "x86_64")]
    #[inline(always)]
    fn now() -> u64 {
        let low: u32;
        let high: u32;
        // SAFETY: rdtsc only reads the time-stamp counter into edx:eax.
        unsafe {
            core::arch::asm!(
                "rdtsc",
                out("eax") low,
                out("edx") high,
                options(nomem, nostack, preserves_flags),
            );
        }
        super::compose::combine_halves(low, high)
    }

    #[cfg(target_arch = "x86")]
    #[inline(always)]
    fn now() -> u64 {
        // SAFETY: rdtsc is available on every x86 CPU Rust targets and has no
        // side effects.
        unsafe { core::arch::x86::_rdtsc() }
    }
}
