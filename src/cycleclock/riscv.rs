use super::CycleCounter;

/// RISC-V `time` CSR.
///
/// `cycle` would be closer to a real cycle count, but Linux stopped granting
/// user mode access to it, while `time` stays readable everywhere.
#[derive(Clone, Copy, Debug, Default)]
pub struct RiscvTime;

impl CycleCounter for RiscvTime {
    const NAME: &'static str = "rdtime";

    #[cfg(target_arch = "riscv64")]
    #[inline(always)]
    fn now() -> u64 {
        let time: u64;
        // SAFETY: reading the time CSR has no side effects.
        unsafe {
            core::arch::asm!(
                "csrr {}, time",
                out(reg) time,
                options(nomem, nostack, preserves_flags),
            );
        }
        time
    }

    #[cfg(target_arch = "riscv32")]
    #[inline(always)]
    fn now() -> u64 {
        let high0: u32;
        let low: u32;
        let high1: u32;
        // SAFETY: reading the time/timeh CSRs has no side effects.
        unsafe {
            core::arch::asm!(
                "csrr {high0}, timeh",
                "csrr {low}, time",
                "csrr {high1}, timeh",
                high0 = out(reg) high0,
                low = out(reg) low,
                high1 = out(reg) high1,
                options(nomem, nostack, preserves_flags),
            );
        }
        super::compose::merge_time_base(high0, low, high1)
    }
}
