use super::CycleCounter;
use super::compose::merge_time_base;

/// PowerPC time base. Ticks at a board-defined rate that is not always the
/// core clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct TimeBase;

impl CycleCounter for TimeBase {
    const NAME: &'static str = "mftb";

    #[inline(always)]
    fn now() -> u64 {
        let tbu0: u32;
        let tbl: u32;
        let tbu1: u32;
        // SAFETY: mftbu/mftb read the user-visible time base registers.
        unsafe {
            core::arch::asm!(
                "mftbu {tbu0}",
                "mftb {tbl}",
                "mftbu {tbu1}",
                tbu0 = out(reg) tbu0,
                tbl = out(reg) tbl,
                tbu1 = out(reg) tbu1,
                options(nomem, nostack, preserves_flags),
            );
        }
        merge_time_base(tbu0, tbl, tbu1)
    }
}
