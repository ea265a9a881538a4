use super::CycleCounter;

/// SPARC V9 `%tick` register.
#[derive(Clone, Copy, Debug, Default)]
pub struct Tick;

impl CycleCounter for Tick {
    const NAME: &'static str = "rd %tick";

    #[inline(always)]
    fn now() -> u64 {
        let tick: u64;
        // `rd %tick, %g1`, encoded by hand for assemblers without the mnemonic.
        // SAFETY: reading %tick is permitted in user mode unless the kernel set
        // the NPT bit, which Linux and Solaris leave clear.
        unsafe {
            core::arch::asm!(
                ".word 0x83410000",
                "mov %g1, {tick}",
                tick = out(reg) tick,
                out("g1") _,
                options(nomem, nostack),
            );
        }
        tick
    }
}
