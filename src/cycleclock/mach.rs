use super::CycleCounter;

/// `mach_absolute_time`, used on every Apple target regardless of CPU.
///
/// The value is in mach time units, not CPU cycles. It stops while the machine
/// sleeps and never resets.
#[derive(Clone, Copy, Debug, Default)]
pub struct MachAbsolute;

impl CycleCounter for MachAbsolute {
    const NAME: &'static str = "mach_absolute_time";

    #[inline(always)]
    #[allow(deprecated)]
    fn now() -> u64 {
        // SAFETY: mach_absolute_time takes no arguments and only reads the
        // kernel-maintained timebase.
        unsafe { libc::mach_absolute_time() }
    }
}
